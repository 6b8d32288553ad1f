pub mod error;
pub mod okr_set_service;
pub mod project_service;
