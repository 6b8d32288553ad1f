mod api_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod project_config;
mod rollover_config;
mod server_config;


pub use api_config::ApiConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use project_config::ProjectConfig;
pub use rollover_config::RolloverConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 64;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_API_BASE_PATH: &str = "/api";

const DEFAULT_ROLLOVER_WEEKDAY: &str = "mon";
const DEFAULT_ROLLOVER_TIME: &str = "00:00";
const ROLLOVER_TIME_FORMAT: &str = "%H:%M";
