//! OKR periods. A period is written whole: there is no per-objective update.

use crate::repositories::columns::{from_json, to_json};
use crate::{DbError, Result as DbErrorResult};

use pm_core::{Objective, OkrSet};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct OkrSetRow {
    period_id: String,
    period_name: String,
    okrs: String,
}

impl OkrSetRow {
    fn into_okr_set(self) -> DbErrorResult<OkrSet> {
        Ok(OkrSet {
            okrs: from_json("okr_sets.okrs", &self.okrs)?,
            period_id: self.period_id,
            period_name: self.period_name,
        })
    }
}

pub struct OkrSetRepository {
    pool: SqlitePool,
}

impl OkrSetRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new period. An existing period with the same id is left
    /// untouched and reported as [`DbError::Conflict`].
    pub async fn create(&self, okr_set: &OkrSet) -> DbErrorResult<()> {
        let okrs = to_json(&okr_set.okrs)?;

        sqlx::query(
            r#"
                INSERT INTO okr_sets (period_id, period_name, okrs)
                VALUES (?, ?, ?)
            "#,
        )
        .bind(&okr_set.period_id)
        .bind(&okr_set.period_name)
        .bind(okrs)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => DbError::Conflict {
                message: format!("OKR period '{}' already exists", okr_set.period_id),
                location: ErrorLocation::from(Location::caller()),
            },
            other => DbError::from(other),
        })?;

        Ok(())
    }

    pub async fn find_by_id(&self, period_id: &str) -> DbErrorResult<Option<OkrSet>> {
        let row = sqlx::query_as::<_, OkrSetRow>(
            r#"
                SELECT period_id, period_name, okrs
                FROM okr_sets
                WHERE period_id = ?
            "#,
        )
        .bind(period_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(OkrSetRow::into_okr_set).transpose()
    }

    /// Every period in insertion order.
    pub async fn find_all(&self) -> DbErrorResult<Vec<OkrSet>> {
        let rows = sqlx::query_as::<_, OkrSetRow>(
            r#"
                SELECT period_id, period_name, okrs
                FROM okr_sets
                ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(OkrSetRow::into_okr_set)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Replace the name and objectives of a period in one statement.
    /// Returns `false` when the period does not exist.
    pub async fn replace(
        &self,
        period_id: &str,
        period_name: &str,
        okrs: &[Objective],
    ) -> DbErrorResult<bool> {
        let okrs = to_json(&okrs)?;

        let result = sqlx::query(
            r#"
                UPDATE okr_sets
                SET period_name = ?, okrs = ?
                WHERE period_id = ?
            "#,
        )
        .bind(period_name)
        .bind(okrs)
        .bind(period_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
