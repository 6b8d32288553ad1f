//! Project create / update / delete.
//!
//! Every mutation validates the complete resulting record before touching
//! storage and then issues exactly one statement. Updates carry no
//! concurrency token: the last writer wins.

use crate::services::error::{Result as ServiceResult, ServiceError};

use pm_core::{
    NewProject, Project, ProjectField, ProjectPatch, Result as CoreResult, StatusCatalog,
    change_log, clock,
};
use pm_db::ProjectRepository;

use std::sync::Arc;

use log::{info, warn};
use serde_json::{Map, Value};
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct ProjectService {
    repo: ProjectRepository,
    statuses: Arc<StatusCatalog>,
}

impl ProjectService {
    pub fn new(pool: SqlitePool, statuses: Arc<StatusCatalog>) -> Self {
        Self {
            repo: ProjectRepository::new(pool),
            statuses,
        }
    }

    /// Newest first.
    pub async fn list(&self) -> ServiceResult<Vec<Project>> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get(&self, id: Uuid) -> ServiceResult<Project> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("Project {} not found", id)))
    }

    /// Create a project. Status defaults to the first configured stage.
    pub async fn create(&self, draft: NewProject) -> ServiceResult<Project> {
        let project = Project::create(draft, self.statuses.initial(), clock::now());
        self.check(&project, true)?;

        self.repo.create(&project).await?;

        info!(
            "Created project {} ('{}', {})",
            project.id, project.name, project.priority
        );
        Ok(project)
    }

    /// Apply a partial update on behalf of `actor`.
    ///
    /// Trackable fields whose value changes get a change-log entry; the new
    /// entries go in front of the existing log in the same write.
    pub async fn update(
        &self,
        id: Uuid,
        fields: Map<String, Value>,
        actor: &str,
    ) -> ServiceResult<Project> {
        let current = self.get(id).await?;

        let patch = ProjectPatch::from_map(fields)
            .map_err(ServiceError::from)
            .inspect_err(|e| warn!("Rejected update to project {}: {}", id, e))?;
        let mut merged = patch.apply_to(&current)?;
        // A stored status that a relabeled catalog no longer lists is kept
        // until the caller changes it.
        self.check(&merged, patch.get(ProjectField::Status).is_some())?;

        let now = clock::now();
        let entries = change_log::diff(&current, &patch, actor, now)?;
        let logged = entries.len();
        merged.change_log = change_log::prepend(entries, &current.change_log);
        merged.updated_at = now;

        let fields: Vec<ProjectField> = patch.fields().collect();
        if !self.repo.update_fields(&merged, &fields).await? {
            return Err(ServiceError::not_found(format!(
                "Project {} was deleted during update",
                id
            )));
        }

        info!(
            "Updated project {} by {}: {} field(s), {} change-log entr{}",
            id,
            actor,
            fields.len(),
            logged,
            if logged == 1 { "y" } else { "ies" }
        );
        Ok(merged)
    }

    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(format!("Project {} not found", id)));
        }

        info!("Deleted project {}", id);
        Ok(())
    }

    fn check(&self, project: &Project, check_status: bool) -> ServiceResult<()> {
        if let Err(e) = self.validate(project, check_status) {
            let e = ServiceError::from(e);
            warn!("Rejected project '{}': {}", project.name, e);
            return Err(e);
        }
        Ok(())
    }

    fn validate(&self, project: &Project, check_status: bool) -> CoreResult<()> {
        project.validate()?;
        if check_status {
            self.statuses.validate(&project.status)?;
        }
        Ok(())
    }
}
