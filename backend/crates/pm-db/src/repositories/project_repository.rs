//! Project persistence.
//!
//! List-valued fields (role assignments, key result ids, followers, comments
//! and the change log) are stored as JSON text. Updates write only the
//! columns named by the caller plus `change_log` and `updated_at`, all in a
//! single statement.

use crate::repositories::columns::{
    date_to_text, from_json, millis_to_datetime, parse_uuid, text_to_date, to_json,
};
use crate::{DbError, Result as DbErrorResult};

use pm_core::{Project, ProjectField, ProjectPriority, ProjectStatus};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

const SELECT_PROJECT: &str = r#"
    SELECT id, name, priority, business_problem, key_result_ids, status,
        product_managers, backend_developers, frontend_developers, qa_testers,
        proposal_date, launch_date, followers, weekly_update, last_week_update,
        comments, change_log, created_at, updated_at
    FROM projects
"#;

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: String,
    name: String,
    priority: String,
    business_problem: Option<String>,
    key_result_ids: String,
    status: String,
    product_managers: String,
    backend_developers: String,
    frontend_developers: String,
    qa_testers: String,
    proposal_date: Option<String>,
    launch_date: Option<String>,
    followers: String,
    weekly_update: Option<String>,
    last_week_update: Option<String>,
    comments: String,
    change_log: String,
    created_at: i64,
    updated_at: i64,
}

impl ProjectRow {
    fn into_project(self) -> DbErrorResult<Project> {
        Ok(Project {
            id: parse_uuid("projects.id", &self.id)?,
            priority: ProjectPriority::from_str(&self.priority)
                .map_err(|e| DbError::decode("projects.priority", e.to_string()))?,
            business_problem: self.business_problem,
            key_result_ids: from_json("projects.key_result_ids", &self.key_result_ids)?,
            status: ProjectStatus::new(self.status),
            product_managers: from_json("projects.product_managers", &self.product_managers)?,
            backend_developers: from_json("projects.backend_developers", &self.backend_developers)?,
            frontend_developers: from_json(
                "projects.frontend_developers",
                &self.frontend_developers,
            )?,
            qa_testers: from_json("projects.qa_testers", &self.qa_testers)?,
            proposal_date: text_to_date("projects.proposal_date", self.proposal_date.as_deref())?,
            launch_date: text_to_date("projects.launch_date", self.launch_date.as_deref())?,
            followers: from_json("projects.followers", &self.followers)?,
            weekly_update: self.weekly_update,
            last_week_update: self.last_week_update,
            comments: from_json("projects.comments", &self.comments)?,
            change_log: from_json("projects.change_log", &self.change_log)?,
            created_at: millis_to_datetime("projects.created_at", self.created_at)?,
            updated_at: millis_to_datetime("projects.updated_at", self.updated_at)?,
            name: self.name,
        })
    }
}

/// Encoded column value of `field` taken from `project`.
fn column_value(project: &Project, field: ProjectField) -> DbErrorResult<Option<String>> {
    let value = match field {
        ProjectField::Name => Some(project.name.clone()),
        ProjectField::Priority => Some(project.priority.as_str().to_string()),
        ProjectField::BusinessProblem => project.business_problem.clone(),
        ProjectField::KeyResultIds => Some(to_json(&project.key_result_ids)?),
        ProjectField::Status => Some(project.status.as_str().to_string()),
        ProjectField::WeeklyUpdate => project.weekly_update.clone(),
        ProjectField::LastWeekUpdate => project.last_week_update.clone(),
        ProjectField::ProductManagers => Some(to_json(&project.product_managers)?),
        ProjectField::BackendDevelopers => Some(to_json(&project.backend_developers)?),
        ProjectField::FrontendDevelopers => Some(to_json(&project.frontend_developers)?),
        ProjectField::QaTesters => Some(to_json(&project.qa_testers)?),
        ProjectField::ProposalDate => date_to_text(project.proposal_date),
        ProjectField::LaunchDate => date_to_text(project.launch_date),
        ProjectField::Followers => Some(to_json(&project.followers)?),
        ProjectField::Comments => Some(to_json(&project.comments)?),
    };
    Ok(value)
}

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, project: &Project) -> DbErrorResult<()> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("INSERT INTO projects (id, ");
        {
            let mut columns = builder.separated(", ");
            for spec in pm_core::PROJECT_FIELDS.iter() {
                columns.push(spec.column);
            }
            columns.push("change_log");
            columns.push("created_at");
            columns.push("updated_at");
        }

        builder.push(") VALUES (");
        builder.push_bind(project.id.to_string());
        builder.push(", ");
        {
            let mut values = builder.separated(", ");
            for spec in pm_core::PROJECT_FIELDS.iter() {
                values.push_bind(column_value(project, spec.field)?);
            }
            values.push_bind(to_json(&project.change_log)?);
            values.push_bind(project.created_at.timestamp_millis());
            values.push_bind(project.updated_at.timestamp_millis());
        }
        builder.push(")");

        builder.build().execute(&self.pool).await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!("{SELECT_PROJECT} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(ProjectRow::into_project).transpose()
    }

    /// Newest first.
    pub async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(&format!(
            "{SELECT_PROJECT} ORDER BY created_at DESC, rowid DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(ProjectRow::into_project)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Write `fields` from `project` together with its change log and
    /// `updated_at`. Returns `false` when no row has the project's id.
    pub async fn update_fields(
        &self,
        project: &Project,
        fields: &[ProjectField],
    ) -> DbErrorResult<bool> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE projects SET ");
        {
            let mut assignments = builder.separated(", ");
            for field in fields {
                assignments.push(format!("{} = ", field.column()));
                assignments.push_bind_unseparated(column_value(project, *field)?);
            }
            assignments.push("change_log = ");
            assignments.push_bind_unseparated(to_json(&project.change_log)?);
            assignments.push("updated_at = ");
            assignments.push_bind_unseparated(project.updated_at.timestamp_millis());
        }
        builder.push(" WHERE id = ");
        builder.push_bind(project.id.to_string());

        let result = builder.build().execute(&self.pool).await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard delete. Returns `false` when nothing was removed.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Ids of projects holding a non-empty weekly update.
    pub async fn find_pending_weekly_updates(&self) -> DbErrorResult<Vec<Uuid>> {
        let ids = sqlx::query_scalar::<_, String>(
            r#"
                SELECT id
                FROM projects
                WHERE weekly_update IS NOT NULL AND weekly_update <> ''
                ORDER BY created_at, rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        ids.iter()
            .map(|id| parse_uuid("projects.id", id))
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Move this week's update into last week's slot and clear it.
    ///
    /// Guarded by the same predicate as [`Self::find_pending_weekly_updates`],
    /// so a project that has already rolled over is left alone and `false`
    /// is returned.
    pub async fn roll_over_weekly_update(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE projects
                SET last_week_update = weekly_update,
                    weekly_update = NULL,
                    updated_at = ?
                WHERE id = ? AND weekly_update IS NOT NULL AND weekly_update <> ''
            "#,
        )
        .bind(now.timestamp_millis())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
