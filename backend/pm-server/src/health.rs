use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

async fn database_reachable(state: &AppState) -> bool {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => true,
        Err(e) => {
            log::warn!("Health check: database unreachable: {}", e);
            false
        }
    }
}

/// GET /health - Health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database_ok = database_reachable(&state).await;

    let (status, label, database) = if database_ok {
        (StatusCode::OK, "healthy", "operational")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
    };
    let shutdown = if state.shutdown.is_shutdown() {
        "in_progress"
    } else {
        "idle"
    };

    let health = json!({
        "status": label,
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
            "shutdown": shutdown,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (ready to accept traffic?)
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if state.shutdown.is_shutdown() {
        return (StatusCode::SERVICE_UNAVAILABLE, "Shutting down").into_response();
    }
    if !database_reachable(&state).await {
        return (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable").into_response();
    }

    (StatusCode::OK, "Ready").into_response()
}
