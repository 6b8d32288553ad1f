use pm_core::CoreError;
use pm_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Outcome of a failed service operation, independent of transport
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Storage error: {source} {location}")]
    Storage {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ServiceError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let field = e.field().map(str::to_string);
        let message = match &e {
            CoreError::Validation { message, .. } => message.clone(),
            CoreError::InvalidPriority { value, .. } => format!("Unknown priority '{}'", value),
            CoreError::InvalidStatus { value, .. } => format!("Unknown status '{}'", value),
            CoreError::UnknownField { field, .. } => format!("Unknown field '{}'", field),
            CoreError::Json { source, .. } => format!("Malformed value: {}", source),
        };

        Self::Validation {
            message,
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::Conflict { message, .. } => Self::Conflict {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            other => Self::Storage {
                source: other,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
