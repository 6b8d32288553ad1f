use pm_config::{ConfigErrorResult, RolloverConfig};

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc, Weekday};

/// A fixed weekly instant in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklySchedule {
    pub weekday: Weekday,
    pub time: NaiveTime,
}

impl WeeklySchedule {
    pub fn new(weekday: Weekday, time: NaiveTime) -> Self {
        Self { weekday, time }
    }

    pub fn from_config(config: &RolloverConfig) -> ConfigErrorResult<Self> {
        Ok(Self::new(config.weekday()?, config.time()?))
    }

    /// The first firing instant strictly after `now`.
    pub fn next_after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = now.date_naive();
        let days_ahead = (i64::from(self.weekday.num_days_from_monday())
            - i64::from(today.weekday().num_days_from_monday()))
        .rem_euclid(7);

        let candidate = (today + Duration::days(days_ahead))
            .and_time(self.time)
            .and_utc();

        if candidate > now {
            candidate
        } else {
            candidate + Duration::days(7)
        }
    }
}

impl std::fmt::Display for WeeklySchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "every {} at {} UTC", self.weekday, self.time.format("%H:%M"))
    }
}
