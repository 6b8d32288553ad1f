pub(crate) mod columns;

pub mod okr_set_repository;
pub mod project_repository;
pub mod user_repository;
