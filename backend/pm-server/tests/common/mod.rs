#![allow(dead_code)]

//! Test infrastructure for pm-server API tests

use pm_config::ApiConfig;
use pm_core::{StatusCatalog, User};
use pm_db::{Database, UserRepository};
use pm_server::{AppState, ShutdownCoordinator, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// In-memory database with migrations applied
pub async fn create_test_pool() -> SqlitePool {
    Database::in_memory()
        .await
        .expect("Failed to create test database")
        .pool()
        .clone()
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with(ApiConfig::default()).await
}

pub async fn create_test_app_state_with(api_config: ApiConfig) -> AppState {
    let pool = create_test_pool().await;

    AppState::new(
        pool,
        StatusCatalog::default(),
        api_config,
        ShutdownCoordinator::new(),
    )
}

/// Create a test user
pub async fn create_test_user(pool: &SqlitePool, user_id: &str, name: &str) -> User {
    let user = User {
        id: user_id.to_string(),
        name: name.to_string(),
        avatar_url: None,
    };

    UserRepository::new(pool.clone())
        .upsert(&user)
        .await
        .expect("Failed to create test user");

    user
}

/// Send one request through a fresh router and decode the JSON body.
///
/// Non-JSON bodies come back as `Value::Null`.
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    body: Option<Value>,
    headers: &[(&str, &str)],
) -> (StatusCode, Value) {
    let app: Router = build_router(state.clone());

    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

pub async fn get(state: &AppState, uri: &str) -> (StatusCode, Value) {
    send(state, "GET", uri, None, &[]).await
}

pub async fn post(state: &AppState, uri: &str, body: Value) -> (StatusCode, Value) {
    send(state, "POST", uri, Some(body), &[]).await
}

pub async fn put(state: &AppState, uri: &str, body: Value) -> (StatusCode, Value) {
    send(state, "PUT", uri, Some(body), &[]).await
}

pub async fn delete(state: &AppState, uri: &str) -> (StatusCode, Value) {
    send(state, "DELETE", uri, None, &[]).await
}

/// Create a project through the API and return its JSON.
pub async fn create_project(state: &AppState, body: Value) -> Value {
    let (status, json) = post(state, "/api/projects", body).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", json);
    json
}
