//! Project entity - the unit of work tracked by the service.

use crate::change_log;
use crate::{
    ChangeLogEntry, Comment, CoreError, NewProject, ProjectPriority, ProjectStatus,
    Result as CoreErrorResult, RoleAssignment, SYSTEM_ACTOR,
};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub priority: ProjectPriority,
    pub business_problem: Option<String>,
    /// Key results this project contributes to
    pub key_result_ids: Vec<String>,
    pub status: ProjectStatus,
    pub product_managers: Vec<RoleAssignment>,
    pub backend_developers: Vec<RoleAssignment>,
    pub frontend_developers: Vec<RoleAssignment>,
    pub qa_testers: Vec<RoleAssignment>,
    pub proposal_date: Option<NaiveDate>,
    pub launch_date: Option<NaiveDate>,
    pub followers: Vec<String>,
    /// Progress note for the current week; archived by the weekly rollover
    pub weekly_update: Option<String>,
    pub last_week_update: Option<String>,
    pub comments: Vec<Comment>,
    /// Newest first
    pub change_log: Vec<ChangeLogEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Build a fresh project from a create payload.
    ///
    /// The change log is seeded with a single "created" entry attributed to
    /// the first product manager, or the system actor when nobody is staffed.
    pub fn create(draft: NewProject, initial_status: ProjectStatus, now: DateTime<Utc>) -> Self {
        let creator = draft
            .product_managers
            .first()
            .map(|pm| pm.user_id.clone())
            .unwrap_or_else(|| SYSTEM_ACTOR.to_string());

        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            priority: draft.priority,
            business_problem: draft.business_problem,
            key_result_ids: dedup(draft.key_result_ids),
            status: draft.status.unwrap_or(initial_status),
            product_managers: draft.product_managers,
            backend_developers: draft.backend_developers,
            frontend_developers: draft.frontend_developers,
            qa_testers: draft.qa_testers,
            proposal_date: draft.proposal_date,
            launch_date: draft.launch_date,
            followers: dedup(draft.followers),
            weekly_update: draft.weekly_update,
            last_week_update: draft.last_week_update,
            comments: draft.comments,
            change_log: vec![change_log::created_entry(creator, now)],
            created_at: now,
            updated_at: now,
        }
    }

    /// Check the business rules every stored project satisfies.
    ///
    /// Status membership is checked separately against the configured
    /// catalog.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation(
                "Project name must not be empty",
                Some("name"),
            ));
        }

        if self.priority.requires_key_results() && self.key_result_ids.is_empty() {
            return Err(CoreError::validation(
                "Projects linked to a department OKR must reference at least one key result",
                Some("keyResultIds"),
            ));
        }

        for (field, roles) in self.role_lists() {
            if let Some(bad) = roles.iter().find(|r| !r.has_valid_range()) {
                return Err(CoreError::validation(
                    format!("{} ends before it starts for {}", field, bad.user_id),
                    Some(field),
                ));
            }
        }

        Ok(())
    }

    /// True when there is a non-empty weekly update for the rollover to archive.
    pub fn has_pending_weekly_update(&self) -> bool {
        self.weekly_update.as_deref().is_some_and(|s| !s.is_empty())
    }

    fn role_lists(&self) -> [(&'static str, &[RoleAssignment]); 4] {
        [
            ("productManagers", &self.product_managers),
            ("backendDevelopers", &self.backend_developers),
            ("frontendDevelopers", &self.frontend_developers),
            ("qaTesters", &self.qa_testers),
        ]
    }
}

/// Drop repeated ids, keeping the first occurrence.
pub(crate) fn dedup(ids: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}
