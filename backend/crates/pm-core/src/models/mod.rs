pub mod change_log_entry;
pub mod comment;
pub mod new_project;
pub mod okr_set;
pub mod project;
pub mod project_field;
pub mod project_patch;
pub mod project_priority;
pub mod project_status;
pub mod role_assignment;
pub mod user;
