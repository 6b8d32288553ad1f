//! The project field table.
//!
//! Every client-writable project field is listed exactly once in
//! [`PROJECT_FIELDS`] together with its storage column, its human-readable
//! label and whether edits to it are recorded in the change log. The update
//! path, the change-log builder and the repository all read this table
//! instead of keeping their own field lists.
//!
//! Trackable entries appear in the order change-log entries are emitted.

use crate::models::project::dedup;
use crate::{
    Comment, CoreError, ProjectPriority, ProjectStatus, Result as CoreErrorResult, RoleAssignment,
};

use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectField {
    Name,
    Priority,
    BusinessProblem,
    KeyResultIds,
    Status,
    WeeklyUpdate,
    LastWeekUpdate,
    ProductManagers,
    BackendDevelopers,
    FrontendDevelopers,
    QaTesters,
    ProposalDate,
    LaunchDate,
    Followers,
    Comments,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: ProjectField,
    /// Wire name (camelCase JSON key)
    pub key: &'static str,
    pub column: &'static str,
    pub label: &'static str,
    pub trackable: bool,
}

const fn spec(
    field: ProjectField,
    key: &'static str,
    column: &'static str,
    label: &'static str,
    trackable: bool,
) -> FieldSpec {
    FieldSpec {
        field,
        key,
        column,
        label,
        trackable,
    }
}

pub static PROJECT_FIELDS: [FieldSpec; 15] = [
    spec(ProjectField::Name, "name", "name", "Project name", true),
    spec(ProjectField::Priority, "priority", "priority", "Priority", true),
    spec(
        ProjectField::BusinessProblem,
        "businessProblem",
        "business_problem",
        "Business problem",
        false,
    ),
    spec(
        ProjectField::KeyResultIds,
        "keyResultIds",
        "key_result_ids",
        "Key results",
        false,
    ),
    spec(ProjectField::Status, "status", "status", "Status", true),
    spec(
        ProjectField::WeeklyUpdate,
        "weeklyUpdate",
        "weekly_update",
        "This week's update",
        true,
    ),
    spec(
        ProjectField::LastWeekUpdate,
        "lastWeekUpdate",
        "last_week_update",
        "Last week's update",
        false,
    ),
    spec(
        ProjectField::ProductManagers,
        "productManagers",
        "product_managers",
        "Product managers",
        true,
    ),
    spec(
        ProjectField::BackendDevelopers,
        "backendDevelopers",
        "backend_developers",
        "Backend developers",
        true,
    ),
    spec(
        ProjectField::FrontendDevelopers,
        "frontendDevelopers",
        "frontend_developers",
        "Frontend developers",
        true,
    ),
    spec(
        ProjectField::QaTesters,
        "qaTesters",
        "qa_testers",
        "QA testers",
        true,
    ),
    spec(
        ProjectField::ProposalDate,
        "proposalDate",
        "proposal_date",
        "Proposal date",
        false,
    ),
    spec(
        ProjectField::LaunchDate,
        "launchDate",
        "launch_date",
        "Launch date",
        true,
    ),
    spec(
        ProjectField::Followers,
        "followers",
        "followers",
        "Followers",
        false,
    ),
    spec(
        ProjectField::Comments,
        "comments",
        "comments",
        "Comments",
        false,
    ),
];

/// Keys accepted in an update payload but never written.
pub const READ_ONLY_KEYS: [&str; 5] = ["id", "userId", "changeLog", "createdAt", "updatedAt"];

/// Human-readable label for a wire name; unknown names come back unchanged.
pub fn field_label(key: &str) -> &str {
    ProjectField::from_key(key)
        .map(|f| f.spec().label)
        .unwrap_or(key)
}

impl ProjectField {
    pub fn spec(&self) -> &'static FieldSpec {
        // Variants are declared in table order.
        &PROJECT_FIELDS[*self as usize]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        PROJECT_FIELDS.iter().find(|s| s.key == key).map(|s| s.field)
    }

    pub fn key(&self) -> &'static str {
        self.spec().key
    }

    pub fn column(&self) -> &'static str {
        self.spec().column
    }

    pub fn is_trackable(&self) -> bool {
        self.spec().trackable
    }

    /// Trackable fields in change-log emission order.
    pub fn trackable() -> impl Iterator<Item = ProjectField> {
        PROJECT_FIELDS
            .iter()
            .filter(|s| s.trackable)
            .map(|s| s.field)
    }

    /// Round-trip a client value through the field's typed representation.
    ///
    /// Rejects values of the wrong shape and fills in defaults, so two values
    /// that mean the same thing serialize identically afterwards. Id sets
    /// lose duplicates.
    #[track_caller]
    pub fn normalize(&self, value: Value) -> CoreErrorResult<Value> {
        match self {
            Self::Name => self.normalize_as::<String>(value),
            Self::Priority => self.normalize_as::<ProjectPriority>(value),
            Self::Status => self.normalize_as::<ProjectStatus>(value),
            Self::BusinessProblem | Self::WeeklyUpdate | Self::LastWeekUpdate => {
                self.normalize_as::<Option<String>>(value)
            }
            Self::KeyResultIds | Self::Followers => {
                let ids: Vec<String> = self.decode(value)?;
                Ok(serde_json::to_value(dedup(ids))?)
            }
            Self::ProductManagers
            | Self::BackendDevelopers
            | Self::FrontendDevelopers
            | Self::QaTesters => self.normalize_as::<Vec<RoleAssignment>>(value),
            Self::ProposalDate | Self::LaunchDate => self.normalize_as::<Option<NaiveDate>>(value),
            Self::Comments => self.normalize_as::<Vec<Comment>>(value),
        }
    }

    #[track_caller]
    fn normalize_as<T: Serialize + DeserializeOwned>(&self, value: Value) -> CoreErrorResult<Value> {
        let typed: T = self.decode(value)?;
        Ok(serde_json::to_value(typed)?)
    }

    #[track_caller]
    fn decode<T: DeserializeOwned>(&self, value: Value) -> CoreErrorResult<T> {
        serde_json::from_value(value).map_err(|e| {
            CoreError::validation(
                format!("Invalid value for {}: {}", self.key(), e),
                Some(self.key()),
            )
        })
    }
}
