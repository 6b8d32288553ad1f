mod models;

use crate::{NewProject, Project, ProjectPriority, ProjectStatus, clock};

/// A routine-priority project in the first default stage.
pub(crate) fn sample_project() -> Project {
    Project::create(
        NewProject::new("Billing revamp", ProjectPriority::Routine),
        ProjectStatus::new("not_started"),
        clock::now(),
    )
}
