//! OKR periods. Unlike projects, edits here are not change-logged.

use crate::services::error::{Result as ServiceResult, ServiceError};

use pm_core::{Objective, OkrSet};
use pm_db::OkrSetRepository;

use log::{info, warn};
use sqlx::SqlitePool;

pub struct OkrSetService {
    repo: OkrSetRepository,
}

impl OkrSetService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: OkrSetRepository::new(pool),
        }
    }

    pub async fn list(&self) -> ServiceResult<Vec<OkrSet>> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get(&self, period_id: &str) -> ServiceResult<OkrSet> {
        self.repo
            .find_by_id(period_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("OKR period {} not found", period_id)))
    }

    /// Fails with a conflict when the period already exists.
    pub async fn create(&self, okr_set: OkrSet) -> ServiceResult<OkrSet> {
        okr_set
            .validate()
            .map_err(ServiceError::from)
            .inspect_err(|e| warn!("Rejected OKR period: {}", e))?;

        self.repo
            .create(&okr_set)
            .await
            .map_err(ServiceError::from)
            .inspect_err(|e| warn!("OKR period {} not created: {}", okr_set.period_id, e))?;

        info!(
            "Created OKR period {} with {} objective(s)",
            okr_set.period_id,
            okr_set.okrs.len()
        );
        Ok(okr_set)
    }

    /// Replace the period's name and objectives.
    pub async fn update(
        &self,
        period_id: &str,
        period_name: String,
        okrs: Vec<Objective>,
    ) -> ServiceResult<OkrSet> {
        let okr_set = OkrSet::new(period_id.to_string(), period_name, okrs);
        okr_set.validate()?;

        if !self
            .repo
            .replace(period_id, &okr_set.period_name, &okr_set.okrs)
            .await?
        {
            return Err(ServiceError::not_found(format!(
                "OKR period {} not found",
                period_id
            )));
        }

        info!("Replaced OKR period {}", period_id);
        Ok(okr_set)
    }
}
