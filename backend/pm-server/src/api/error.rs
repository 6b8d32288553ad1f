//! REST API error types
//!
//! Every failure renders as `{"code": ..., "message": ..., "field": ...}`
//! with a status code matching its kind. Storage details are logged, never
//! returned.

use crate::services::error::ServiceError;

use pm_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Resource already exists (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    ///
    /// `detail` is logged but never sent to the client.
    #[error("Internal error: {message} ({detail}) {location}")]
    Internal {
        message: String,
        detail: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("{}", self);

        let status = self.status();
        let body = match self {
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND".into(),
                message,
                field: None,
            },
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
            },
            ApiError::Conflict { message, .. } => ApiErrorBody {
                code: "CONFLICT".into(),
                message,
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
                field: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    #[track_caller]
    fn from(e: ServiceError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            ServiceError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            ServiceError::NotFound { message, .. } => ApiError::NotFound { message, location },
            ServiceError::Conflict { message, .. } => ApiError::Conflict { message, location },
            ServiceError::Storage { source, .. } => ApiError::from(source),
        }
    }
}

/// Storage failures surface as a generic 500; the cause is kept in `detail`.
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::Conflict { message, .. } => ApiError::Conflict {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            other => ApiError::Internal {
                message: "Database operation failed".to_string(),
                detail: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Malformed or ill-typed request bodies are validation failures.
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            message: rejection.body_text(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
