use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_BASE_PATH};

use pm_core::SYSTEM_ACTOR;

use serde::Deserialize;

/// Configuration for the HTTP API layer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix for every API route; empty mounts the API at the root
    pub base_path: String,
    /// Actor recorded when a request does not identify its user
    pub system_user_id: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_API_BASE_PATH.to_string(),
            system_user_id: SYSTEM_ACTOR.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_path.is_empty()
            && (!self.base_path.starts_with('/') || self.base_path.ends_with('/'))
        {
            return Err(ConfigError::api(format!(
                "api.base_path must be empty or start with '/' and not end with '/', got '{}'",
                self.base_path
            )));
        }

        if self.system_user_id.trim().is_empty() {
            return Err(ConfigError::api("api.system_user_id must not be empty"));
        }

        Ok(())
    }
}
