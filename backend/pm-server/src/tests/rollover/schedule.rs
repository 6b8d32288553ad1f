use crate::WeeklySchedule;

use pm_config::RolloverConfig;

use chrono::{DateTime, NaiveTime, TimeZone, Utc, Weekday};
use googletest::prelude::*;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

fn monday_midnight() -> WeeklySchedule {
    WeeklySchedule::new(Weekday::Mon, NaiveTime::from_hms_opt(0, 0, 0).unwrap())
}

#[test]
fn test_next_after_later_in_week() {
    // 2026-10-14 is a Wednesday
    let next = monday_midnight().next_after(at(2026, 10, 14, 9, 30));

    assert_that!(next, eq(at(2026, 10, 19, 0, 0)));
}

#[test]
fn test_next_after_same_day_before_time() {
    let schedule = WeeklySchedule::new(Weekday::Mon, NaiveTime::from_hms_opt(9, 0, 0).unwrap());

    let next = schedule.next_after(at(2026, 10, 19, 8, 59));

    assert_that!(next, eq(at(2026, 10, 19, 9, 0)));
}

#[test]
fn test_next_after_exact_instant_moves_a_week() {
    let next = monday_midnight().next_after(at(2026, 10, 19, 0, 0));

    assert_that!(next, eq(at(2026, 10, 26, 0, 0)));
}

#[test]
fn test_next_after_same_day_after_time() {
    let next = monday_midnight().next_after(at(2026, 10, 19, 0, 1));

    assert_that!(next, eq(at(2026, 10, 26, 0, 0)));
}

#[test]
fn test_next_after_is_always_within_a_week() {
    let schedule = WeeklySchedule::new(Weekday::Fri, NaiveTime::from_hms_opt(17, 45, 0).unwrap());
    let mut now = at(2026, 1, 1, 0, 0);

    for _ in 0..200 {
        let next = schedule.next_after(now);
        assert!(next > now);
        assert!(next - now <= chrono::Duration::days(7));
        assert_eq!(next.format("%a %H:%M").to_string(), "Fri 17:45");
        now += chrono::Duration::minutes(97);
    }
}

#[test]
fn test_from_config_defaults() {
    let schedule = WeeklySchedule::from_config(&RolloverConfig::default()).unwrap();

    assert_that!(schedule, eq(monday_midnight()));
}

#[test]
fn test_from_config_rejects_bad_weekday() {
    let config = RolloverConfig {
        weekday: "someday".into(),
        ..RolloverConfig::default()
    };

    assert_that!(WeeklySchedule::from_config(&config), err(anything()));
}
