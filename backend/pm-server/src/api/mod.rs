pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod okr_sets;
pub mod projects;
pub mod users;
