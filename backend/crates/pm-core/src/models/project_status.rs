//! Project stage tracking.
//!
//! The set of stages has been relabeled before, so it is data rather than an
//! enum: a [`StatusCatalog`] built from configuration decides which
//! [`ProjectStatus`] values are accepted. Catalog order is stage order.

use crate::{CoreError, Result as CoreErrorResult};

use std::collections::HashSet;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Stages used when configuration does not supply its own list.
pub const DEFAULT_STATUSES: [&str; 9] = [
    "not_started",
    "requirement_review",
    "design",
    "development",
    "integration",
    "testing",
    "acceptance",
    "pre_launch",
    "launched",
];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectStatus(String);

impl ProjectStatus {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered set of valid status keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCatalog {
    stages: Vec<String>,
}

impl StatusCatalog {
    #[track_caller]
    pub fn new(stages: Vec<String>) -> CoreErrorResult<Self> {
        if stages.is_empty() {
            return Err(CoreError::validation(
                "status catalog must contain at least one stage",
                None,
            ));
        }

        let mut seen = HashSet::new();
        for stage in &stages {
            if stage.trim().is_empty() {
                return Err(CoreError::validation(
                    "status catalog contains an empty stage",
                    None,
                ));
            }
            if !seen.insert(stage.as_str()) {
                return Err(CoreError::validation(
                    format!("status catalog lists '{}' twice", stage),
                    None,
                ));
            }
        }

        Ok(Self { stages })
    }

    /// First stage; new projects start here unless told otherwise.
    pub fn initial(&self) -> ProjectStatus {
        ProjectStatus(self.stages[0].clone())
    }

    pub fn contains(&self, status: &ProjectStatus) -> bool {
        self.stages.iter().any(|s| s == status.as_str())
    }

    /// Zero-based stage index, `None` for statuses outside the catalog.
    pub fn position(&self, status: &ProjectStatus) -> Option<usize> {
        self.stages.iter().position(|s| s == status.as_str())
    }

    pub fn stages(&self) -> &[String] {
        &self.stages
    }

    #[track_caller]
    pub fn validate(&self, status: &ProjectStatus) -> CoreErrorResult<()> {
        if self.contains(status) {
            Ok(())
        } else {
            Err(CoreError::InvalidStatus {
                value: status.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

impl Default for StatusCatalog {
    fn default() -> Self {
        Self {
            stages: DEFAULT_STATUSES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
