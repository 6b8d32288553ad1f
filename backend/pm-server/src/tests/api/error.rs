use crate::{ApiError, ServiceError};

use pm_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn render(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = render(ApiError::not_found("Item not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Item not found");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = render(ApiError::validation("Name is required", Some("name"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["field"], "name");
}

#[tokio::test]
async fn test_conflict_returns_409() {
    let error = ApiError::Conflict {
        message: "OKR period 2026-Q1 already exists".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn test_database_error_hides_details() {
    let db_error = DbError::Initialization {
        message: "secret path /var/lib/pm/data.db is locked".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let error = ApiError::from(db_error);
    assert!(error.to_string().contains("is locked"));

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["message"], "Database operation failed");
    assert!(!json.to_string().contains("/var/lib/pm"));
}

#[tokio::test]
async fn test_service_errors_map_to_status_codes() {
    let cases = [
        (
            ServiceError::validation("bad", Some("priority")),
            StatusCode::BAD_REQUEST,
        ),
        (ServiceError::not_found("gone"), StatusCode::NOT_FOUND),
        (
            ServiceError::Conflict {
                message: "dup".into(),
                location: ErrorLocation::from(Location::caller()),
            },
            StatusCode::CONFLICT,
        ),
        (
            ServiceError::Storage {
                source: DbError::decode("okrs", "not a list"),
                location: ErrorLocation::from(Location::caller()),
            },
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (service_error, expected) in cases {
        assert_eq!(ApiError::from(service_error).status(), expected);
    }
}

#[tokio::test]
async fn test_service_validation_keeps_field() {
    let (_, json) = render(ApiError::from(ServiceError::validation(
        "Department OKR projects must reference at least one key result",
        Some("keyResultIds"),
    )))
    .await;

    assert_eq!(json["field"], "keyResultIds");
}
