mod okr_set;
mod project;
mod project_field;
mod project_patch;
mod project_status;
