use chrono::{DateTime, SubsecRound, Utc};

/// Current time truncated to the millisecond precision the store keeps.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
