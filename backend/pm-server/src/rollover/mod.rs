//! Weekly progress rollover: this week's update becomes last week's.

pub mod job;
pub mod schedule;
pub mod scheduler;
