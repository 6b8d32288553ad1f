use crate::UserId;
use crate::tests::create_test_state;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use googletest::prelude::*;

async fn extract(request: Request<Body>) -> UserId {
    let state = create_test_state().await;
    let (mut parts, _body) = request.into_parts();
    UserId::from_request_parts(&mut parts, &state)
        .await
        .expect("extractor never rejects")
}

#[tokio::test]
async fn test_extractor_with_valid_header() {
    let request = Request::builder()
        .header("X-User-Id", "alice")
        .body(Body::empty())
        .unwrap();

    let UserId(user) = extract(request).await;

    assert_that!(user, eq("alice"));
}

#[tokio::test]
async fn test_extractor_trims_header() {
    let request = Request::builder()
        .header("X-User-Id", "  bob ")
        .body(Body::empty())
        .unwrap();

    let UserId(user) = extract(request).await;

    assert_that!(user, eq("bob"));
}

#[tokio::test]
async fn test_extractor_without_header_uses_system_user() {
    let request = Request::builder().body(Body::empty()).unwrap();

    let UserId(user) = extract(request).await;

    assert_that!(user, eq("system"));
}

#[tokio::test]
async fn test_extractor_with_blank_header_uses_system_user() {
    let request = Request::builder()
        .header("X-User-Id", "   ")
        .body(Body::empty())
        .unwrap();

    let UserId(user) = extract(request).await;

    assert_that!(user, eq("system"));
}
