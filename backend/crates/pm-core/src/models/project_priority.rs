use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Why a project is being worked on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectPriority {
    /// Linked to a department OKR; must reference at least one key result
    DeptOkr,
    /// Linked to an individual's OKR
    PersonalOkr,
    /// Urgent ad-hoc request
    Urgent,
    /// Routine work
    Routine,
}

impl ProjectPriority {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeptOkr => "dept_okr",
            Self::PersonalOkr => "personal_okr",
            Self::Urgent => "urgent",
            Self::Routine => "routine",
        }
    }

    pub fn requires_key_results(&self) -> bool {
        matches!(self, Self::DeptOkr)
    }
}

impl FromStr for ProjectPriority {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "dept_okr" => Ok(Self::DeptOkr),
            "personal_okr" => Ok(Self::PersonalOkr),
            "urgent" => Ok(Self::Urgent),
            "routine" => Ok(Self::Routine),
            _ => Err(CoreError::InvalidPriority {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ProjectPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
