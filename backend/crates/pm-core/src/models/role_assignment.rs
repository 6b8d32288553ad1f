use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One person staffed on a project in a given role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    pub user_id: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Follow the project-wide schedule instead of the dates above
    #[serde(default)]
    pub use_shared_schedule: bool,
}

impl RoleAssignment {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            start_date: None,
            end_date: None,
            use_shared_schedule: false,
        }
    }

    /// False only when both dates are set and the range runs backwards.
    pub fn has_valid_range(&self) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    }
}
