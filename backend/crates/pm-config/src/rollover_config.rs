use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ROLLOVER_TIME, DEFAULT_ROLLOVER_WEEKDAY,
    ROLLOVER_TIME_FORMAT,
};

use chrono::{NaiveTime, Weekday};
use serde::Deserialize;

/// When the weekly-update rollover fires (UTC)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RolloverConfig {
    pub enabled: bool,
    /// Day name, e.g. "mon" or "monday"
    pub weekday: String,
    /// "HH:MM", 24-hour clock
    pub time: String,
}

impl Default for RolloverConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            weekday: DEFAULT_ROLLOVER_WEEKDAY.to_string(),
            time: DEFAULT_ROLLOVER_TIME.to_string(),
        }
    }
}

impl RolloverConfig {
    pub fn weekday(&self) -> ConfigErrorResult<Weekday> {
        self.weekday.trim().parse::<Weekday>().map_err(|_| {
            ConfigError::rollover(format!(
                "rollover.weekday must be a day name, got '{}'",
                self.weekday
            ))
        })
    }

    pub fn time(&self) -> ConfigErrorResult<NaiveTime> {
        NaiveTime::parse_from_str(self.time.trim(), ROLLOVER_TIME_FORMAT).map_err(|_| {
            ConfigError::rollover(format!(
                "rollover.time must be HH:MM, got '{}'",
                self.time
            ))
        })
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.weekday()?;
        self.time()?;
        Ok(())
    }
}
