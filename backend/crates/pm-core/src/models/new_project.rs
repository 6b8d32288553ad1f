use crate::{Comment, ProjectPriority, ProjectStatus, RoleAssignment};

use chrono::NaiveDate;
use serde::Deserialize;

/// Create payload. Only `name` and `priority` are required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub priority: ProjectPriority,
    #[serde(default)]
    pub business_problem: Option<String>,
    #[serde(default)]
    pub key_result_ids: Vec<String>,
    /// Defaults to the first stage of the status catalog
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub product_managers: Vec<RoleAssignment>,
    #[serde(default)]
    pub backend_developers: Vec<RoleAssignment>,
    #[serde(default)]
    pub frontend_developers: Vec<RoleAssignment>,
    #[serde(default)]
    pub qa_testers: Vec<RoleAssignment>,
    #[serde(default)]
    pub proposal_date: Option<NaiveDate>,
    #[serde(default)]
    pub launch_date: Option<NaiveDate>,
    #[serde(default)]
    pub followers: Vec<String>,
    #[serde(default)]
    pub weekly_update: Option<String>,
    #[serde(default)]
    pub last_week_update: Option<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl NewProject {
    pub fn new(name: impl Into<String>, priority: ProjectPriority) -> Self {
        Self {
            name: name.into(),
            priority,
            business_problem: None,
            key_result_ids: Vec::new(),
            status: None,
            product_managers: Vec::new(),
            backend_developers: Vec::new(),
            frontend_developers: Vec::new(),
            qa_testers: Vec::new(),
            proposal_date: None,
            launch_date: None,
            followers: Vec::new(),
            weekly_update: None,
            last_week_update: None,
            comments: Vec::new(),
        }
    }
}
