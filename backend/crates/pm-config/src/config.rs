use crate::{
    ApiConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, ProjectConfig,
    RolloverConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub api: ApiConfig,
    pub rollover: RolloverConfig,
    pub project: ProjectConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for PM_CONFIG_DIR env var, else use ./.pm/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: PM_CONFIG_DIR env var > ./.pm/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("PM_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".pm"))
    }

    /// Validate every section. Call after load() to fail fast at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.logging.validate()?;
        self.api.validate()?;
        self.rollover.validate()?;
        self.project.validate()?;
        Ok(())
    }

    /// Absolute path to the database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path to the log directory.
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.logging.dir))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  api: base_path='{}', system user='{}'",
            self.api.base_path, self.api.system_user_id
        );
        info!(
            "  rollover: {} ({} {} UTC)",
            if self.rollover.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.rollover.weekday,
            self.rollover.time
        );
        match &self.project.statuses {
            Some(stages) => info!("  project: {} configured statuses", stages.len()),
            None => info!("  project: default statuses"),
        }
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("PM_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PM_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("PM_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "PM_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Logging
        Self::apply_env_parse("PM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PM_LOG_FILE", &mut self.logging.file);

        // API
        Self::apply_env_string("PM_API_BASE_PATH", &mut self.api.base_path);
        Self::apply_env_string("PM_API_SYSTEM_USER_ID", &mut self.api.system_user_id);

        // Rollover
        Self::apply_env_bool("PM_ROLLOVER_ENABLED", &mut self.rollover.enabled);
        Self::apply_env_string("PM_ROLLOVER_WEEKDAY", &mut self.rollover.weekday);
        Self::apply_env_string("PM_ROLLOVER_TIME", &mut self.rollover.time);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
