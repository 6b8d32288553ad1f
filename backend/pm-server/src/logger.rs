use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Arguments;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, Record, info};

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stdout { colored: bool },
    File(PathBuf),
}

impl LogTarget {
    /// Resolve the target from configuration, creating the log directory when
    /// a file is configured.
    pub fn from_config(config: &pm_config::Config) -> ServerErrorResult<Self> {
        let Some(filename) = config.logging.file.as_ref() else {
            return Ok(LogTarget::Stdout {
                colored: config.logging.colored,
            });
        };

        let log_dir = config.log_dir()?;
        std::fs::create_dir_all(&log_dir).map_err(|e| ServerError::Logger {
            message: format!("Failed to create log directory {}: {}", log_dir.display(), e),
        })?;

        Ok(LogTarget::File(log_dir.join(filename)))
    }
}

fn write_line(
    out: fern::FormatCallback,
    message: &Arguments,
    record: &Record,
    level: &dyn std::fmt::Display,
) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = level,
        message = message,
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}

/// Initialize the global logger with fern.
///
/// Colors are only applied on stdout. sqlx statement logging is capped at
/// `warn` so request logs stay readable.
pub fn initialize(log_level: pm_config::LogLevel, target: &LogTarget) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let sink = match target {
        LogTarget::File(path) => {
            let file = fern::log_file(path).map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", path.display(), e),
            })?;

            Dispatch::new()
                .format(|out, message, record| write_line(out, message, record, &record.level()))
                .chain(file)
        }
        LogTarget::Stdout { colored: true } => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, &colors.color(record.level()))
                })
                .chain(std::io::stdout())
        }
        LogTarget::Stdout { colored: false } => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, &record.level()))
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        .level_for("sqlx", level_filter.min(LevelFilter::Warn))
        .chain(sink)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match target {
        LogTarget::File(path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        LogTarget::Stdout { .. } => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    Ok(())
}
