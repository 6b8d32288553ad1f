use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid project priority: {value} {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid project status: {value} {location}")]
    InvalidStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown project field: {field} {location}")]
    UnknownField {
        field: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field name a client should look at, when the error concerns one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            Self::InvalidPriority { .. } => Some("priority"),
            Self::InvalidStatus { .. } => Some("status"),
            Self::UnknownField { field, .. } => Some(field.as_str()),
            Self::Json { .. } => None,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
