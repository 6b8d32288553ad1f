use crate::{ConfigError, ConfigErrorResult};

use pm_core::{DEFAULT_STATUSES, StatusCatalog};

use serde::Deserialize;

/// Project tracking settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Ordered status stages; the built-in list is used when absent
    pub statuses: Option<Vec<String>>,
}

impl ProjectConfig {
    pub fn status_catalog(&self) -> ConfigErrorResult<StatusCatalog> {
        let stages = match &self.statuses {
            Some(stages) => stages.clone(),
            None => DEFAULT_STATUSES.iter().map(|s| s.to_string()).collect(),
        };

        StatusCatalog::new(stages)
            .map_err(|e| ConfigError::project(format!("project.statuses is invalid: {}", e)))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.status_catalog().map(|_| ())
    }
}
