use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Directory for log files, relative to the config directory
    pub dir: String,
    /// When set, logs go to this file inside `dir` instead of stdout
    pub file: Option<String>,
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
            colored: true,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(file) = &self.file
            && (file.trim().is_empty() || file.contains('/') || file.contains('\\'))
        {
            return Err(ConfigError::logging(format!(
                "logging.file must be a bare file name, got '{}'",
                file
            )));
        }

        if self.dir.contains("..") {
            return Err(ConfigError::logging("logging.dir cannot contain '..'"));
        }

        Ok(())
    }
}
