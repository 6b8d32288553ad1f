pub mod change_log;
pub mod clock;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::change_log_entry::ChangeLogEntry;
pub use models::comment::Comment;
pub use models::new_project::NewProject;
pub use models::okr_set::{KeyResult, Objective, OkrSet};
pub use models::project::Project;
pub use models::project_field::{FieldSpec, PROJECT_FIELDS, ProjectField, field_label};
pub use models::project_patch::ProjectPatch;
pub use models::project_priority::ProjectPriority;
pub use models::project_status::{DEFAULT_STATUSES, ProjectStatus, StatusCatalog};
pub use models::role_assignment::RoleAssignment;
pub use models::user::User;

/// Actor recorded on change-log entries when the caller does not identify itself.
pub const SYSTEM_ACTOR: &str = "system";
