//! Integration tests for building a week and evaluating its status.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use timetable_core::{
    evaluate, status_message, MessagesConfig, OpenStatusEvaluator, RawDay, RawHours, TimeOfDay,
    WeeklySchedule,
};

/// 2026-10-12 is a Monday; `day_offset` 0..=6 walks Monday..Sunday.
fn at(day_offset: u32, h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 12 + day_offset)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn raw_week() -> Vec<RawDay> {
    let weekday = || vec![RawHours::new("8:00", "19:00")];
    vec![
        RawDay::new(1, "Monday", weekday()),
        RawDay::new(2, "Tuesday", weekday()),
        RawDay::new(3, "Wednesday", weekday()),
        RawDay::new(
            4,
            "Thursday",
            vec![RawHours::new("8:00", "23:00"), RawHours::new("23:50", "23:55")],
        ),
        RawDay::new(5, "Friday", weekday()),
        RawDay::new(
            6,
            "Saturday",
            vec![RawHours::new("8:00", "13:00"), RawHours::new("15:00", "19:00")],
        ),
        RawDay::new(0, "Sunday", vec![]),
    ]
}

fn week() -> WeeklySchedule {
    WeeklySchedule::build(&raw_week()).unwrap()
}

#[test]
fn parse_normalizes_short_labels() {
    let short = TimeOfDay::parse("8:00").unwrap();
    let long = TimeOfDay::parse("08:00").unwrap();
    assert_eq!(short.minute_of_day(), 480);
    assert_eq!(long.minute_of_day(), 480);
    assert_eq!(short.label(), "08:00");
    assert_eq!(long.label(), "08:00");
    assert!(TimeOfDay::parse("bad").is_err());
}

#[test]
fn boundaries_are_inclusive() {
    let schedule = week();
    assert!(evaluate(&schedule, at(0, 8, 0)).is_open);
    assert!(evaluate(&schedule, at(0, 19, 0)).is_open);
    assert!(!evaluate(&schedule, at(0, 7, 59)).is_open);
    assert!(!evaluate(&schedule, at(0, 19, 1)).is_open);
}

#[test]
fn saturday_lunch_break_opens_same_day() {
    let schedule = week();
    let status = evaluate(&schedule, at(5, 14, 0));
    assert!(!status.is_open);
    assert_eq!(status.next_opening_day_label(), Some("Saturday"));
    assert_eq!(status.next_opening_label(), Some("15:00"));
    assert_eq!(
        status_message(&status, &MessagesConfig::default()),
        "closed, opens Saturday at 15:00"
    );
}

#[test]
fn saturday_evening_wraps_to_next_week() {
    let schedule = week();
    let status = evaluate(&schedule, at(5, 20, 0));
    assert!(!status.is_open);
    assert_eq!(status.next_opening_day_label(), Some("Monday"));
    assert_eq!(status.next_opening_label(), Some("08:00"));
    assert_eq!(status.next_change, Some(at(7, 8, 0)));
}

#[test]
fn closed_day_skips_to_next_day_with_hours() {
    let mut raw = raw_week();
    raw[0].hours.clear(); // Monday closed too
    let schedule = WeeklySchedule::build(&raw).unwrap();

    let sunday = evaluate(&schedule, at(6, 11, 0));
    assert!(!sunday.is_open);
    assert_eq!(sunday.next_opening_day_label(), Some("Tuesday"));

    let monday = evaluate(&schedule, at(0, 11, 0));
    assert!(!monday.is_open);
    assert_eq!(monday.next_opening_day_label(), Some("Tuesday"));
    assert_eq!(monday.next_change, Some(at(1, 8, 0)));
}

#[test]
fn late_thursday_window() {
    let schedule = week();
    let status = evaluate(&schedule, at(3, 23, 52));
    assert!(status.is_open);
    assert_eq!(status.closes_at_label(), Some("23:55"));
    assert_eq!(status.active.map(|s| s.interval_index), Some(1));

    let gap = evaluate(&schedule, at(3, 23, 20));
    assert_eq!(gap.next_opening_label(), Some("23:50"));
    assert_eq!(gap.minutes_until_change(), Some(30));
}

#[test]
fn malformed_interval_renders_closed() {
    let raw = vec![RawDay::new(2, "Tuesday", vec![RawHours::new("8:00", "bad")])];
    let schedule = WeeklySchedule::build(&raw).unwrap();
    assert!(schedule.day(2).unwrap().intervals.is_empty());
    assert!(!evaluate(&schedule, at(1, 10, 0)).is_open);
}

#[test]
fn no_hours_anywhere_has_no_next_opening() {
    let raw = vec![RawDay::new(0, "Sunday", vec![]), RawDay::new(1, "Monday", vec![])];
    let schedule = WeeklySchedule::build(&raw).unwrap();
    let status = evaluate(&schedule, at(0, 10, 0));
    assert!(!status.is_open);
    assert!(status.next_opening.is_none());
}

fn permutation_strategy() -> impl Strategy<Value = Vec<RawDay>> {
    Just(raw_week()).prop_shuffle()
}

proptest! {
    #[test]
    fn day_order_is_canonical_for_any_input_order(raw in permutation_strategy()) {
        let schedule = WeeklySchedule::build(&raw).unwrap();
        let order: Vec<u8> = schedule.days().iter().map(|d| d.day_week).collect();
        prop_assert_eq!(order, vec![1, 2, 3, 4, 5, 6, 0]);
    }

    #[test]
    fn evaluation_is_idempotent(day in 0u32..7, h in 0u32..24, m in 0u32..60) {
        let schedule = week();
        let evaluator = OpenStatusEvaluator::new(&schedule);
        let now = at(day, h, m);
        prop_assert_eq!(evaluator.evaluate(now), evaluator.evaluate(now));
    }

    #[test]
    fn closed_status_always_points_forward(day in 0u32..7, h in 0u32..24, m in 0u32..60) {
        let schedule = week();
        let now = at(day, h, m);
        let status = evaluate(&schedule, now);
        if let Some(next) = status.next_change {
            prop_assert!(next >= now - chrono::Duration::seconds(59));
            prop_assert!(next <= now + chrono::Duration::days(7));
        }
        prop_assert!(status.next_change.is_some());
    }
}
