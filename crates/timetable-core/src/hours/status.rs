//! Open/closed status for a point in time.
//!
//! Evaluation is a pure function of the schedule and the instant: nothing is
//! cached between calls, so evaluating twice with the same inputs yields the
//! same [`StatusResult`].

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;
use tracing::debug;

use super::clock::Clock;
use super::day::{day_week_of, Interval};
use super::time_of_day::TimeOfDay;
use super::week::{WeekSlot, WeeklySchedule};

/// Identifies the interval that is currently open.
pub type ActiveSlot = WeekSlot;

/// The next time the store opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextOpening {
    pub slot: WeekSlot,
    pub day_week: u8,
    pub day_label: String,
    pub start: TimeOfDay,
    /// Concrete date and time of the opening, `None` past the end of the calendar.
    pub at: Option<NaiveDateTime>,
}

/// Outcome of evaluating a schedule at an instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResult {
    pub evaluated_at: NaiveDateTime,
    pub is_open: bool,
    pub active: Option<ActiveSlot>,
    pub active_interval: Option<Interval>,
    /// Only set while closed.
    pub next_opening: Option<NextOpening>,
    /// Closing time when open, next opening when closed.
    pub next_change: Option<NaiveDateTime>,
}

impl StatusResult {
    fn closed(evaluated_at: NaiveDateTime, next_opening: Option<NextOpening>) -> Self {
        let next_change = next_opening.as_ref().and_then(|n| n.at);
        Self {
            evaluated_at,
            is_open: false,
            active: None,
            active_interval: None,
            next_opening,
            next_change,
        }
    }

    /// End label of the active interval, e.g. "19:00".
    pub fn closes_at_label(&self) -> Option<&str> {
        self.active_interval.as_ref().map(|i| i.end.label())
    }

    /// Start label of the next opening.
    pub fn next_opening_label(&self) -> Option<&str> {
        self.next_opening.as_ref().map(|n| n.start.label())
    }

    /// Day label of the next opening.
    pub fn next_opening_day_label(&self) -> Option<&str> {
        self.next_opening.as_ref().map(|n| n.day_label.as_str())
    }

    /// Whole minutes until the next boundary.
    pub fn minutes_until_change(&self) -> Option<i64> {
        self.next_change.map(|at| (at - self.evaluated_at).num_minutes())
    }
}

fn at_time(base: NaiveDateTime, days_ahead: i64, time: &TimeOfDay) -> Option<NaiveDateTime> {
    let clock = NaiveTime::from_hms_opt(time.hours(), time.minutes(), 0).unwrap_or_default();
    let date = base.date().checked_add_signed(Duration::days(days_ahead))?;
    Some(date.and_time(clock))
}

/// Evaluates a [`WeeklySchedule`] against instants.
#[derive(Debug, Clone, Copy)]
pub struct OpenStatusEvaluator<'a> {
    schedule: &'a WeeklySchedule,
}

impl<'a> OpenStatusEvaluator<'a> {
    pub fn new(schedule: &'a WeeklySchedule) -> Self {
        Self { schedule }
    }

    /// Evaluate at the clock's current time.
    pub fn evaluate_now(&self, clock: &dyn Clock) -> StatusResult {
        self.evaluate(clock.now())
    }

    /// Evaluate at `now`, at minute precision.
    pub fn evaluate(&self, now: NaiveDateTime) -> StatusResult {
        let day_week = day_week_of(now.weekday());
        let minute = (now.hour() * 60 + now.minute()) as u16;

        let Some((day_position, day)) = self.schedule.find_day(day_week) else {
            debug!(day_week, "day not in schedule, reporting closed");
            return StatusResult::closed(now, None);
        };

        if let Some(interval_index) = day.active_interval(minute) {
            let interval = day.intervals[interval_index].clone();
            let closes_at = at_time(now, 0, &interval.end);
            debug!(day = %day.label, closes_at = %interval.end, "open");
            return StatusResult {
                evaluated_at: now,
                is_open: true,
                active: Some(WeekSlot {
                    day_position,
                    interval_index,
                }),
                active_interval: Some(interval),
                next_opening: None,
                next_change: closes_at,
            };
        }

        let next = self.next_opening(day.rank(), minute, now);
        debug!(
            day = %day.label,
            next_day = next.as_ref().map(|n| n.day_label.as_str()),
            next_start = next.as_ref().map(|n| n.start.label()),
            "closed"
        );
        StatusResult::closed(now, next)
    }

    /// First interval starting strictly after `(rank, minute)` in week
    /// order, wrapping past Sunday back to the start of the list.
    fn next_opening(&self, rank: usize, minute: u16, now: NaiveDateTime) -> Option<NextOpening> {
        let slots = self.schedule.slots();
        let is_later = |slot: &WeekSlot| {
            self.schedule.resolve(*slot).is_some_and(|(d, i)| {
                d.rank() > rank || (d.rank() == rank && i.start.minute_of_day() > minute)
            })
        };
        let split = slots.iter().position(is_later).unwrap_or(slots.len());

        slots[split..]
            .iter()
            .chain(&slots[..split])
            .find_map(|slot| {
                let (day, interval) = self.schedule.resolve(*slot)?;
                if interval.is_inverted() {
                    return None;
                }
                let later_this_week = day.rank() > rank
                    || (day.rank() == rank && interval.start.minute_of_day() > minute);
                let offset = day.rank() as i64 - rank as i64;
                let days_ahead = if later_this_week { offset } else { offset + 7 };
                Some(NextOpening {
                    slot: *slot,
                    day_week: day.day_week,
                    day_label: day.label.clone(),
                    start: interval.start.clone(),
                    at: at_time(now, days_ahead, &interval.start),
                })
            })
    }
}

/// Evaluate `schedule` at `now`.
pub fn evaluate(schedule: &WeeklySchedule, now: NaiveDateTime) -> StatusResult {
    OpenStatusEvaluator::new(schedule).evaluate(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hours::clock::FixedClock;
    use crate::hours::day::{RawDay, RawHours};
    use chrono::NaiveDate;

    // 2026-10-12 is a Monday.
    fn at(day_offset: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 12 + day_offset)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn week() -> WeeklySchedule {
        let weekday = || vec![RawHours::new("8:00", "19:00")];
        WeeklySchedule::build(&[
            RawDay::new(1, "Monday", weekday()),
            RawDay::new(2, "Tuesday", weekday()),
            RawDay::new(3, "Wednesday", weekday()),
            RawDay::new(4, "Thursday", weekday()),
            RawDay::new(5, "Friday", weekday()),
            RawDay::new(
                6,
                "Saturday",
                vec![RawHours::new("8:00", "13:00"), RawHours::new("15:00", "19:00")],
            ),
            RawDay::new(0, "Sunday", vec![]),
        ])
        .unwrap()
    }

    #[test]
    fn open_reports_active_slot_and_closing_time() {
        let schedule = week();
        let status = evaluate(&schedule, at(5, 16, 30));
        assert!(status.is_open);
        assert_eq!(
            status.active,
            Some(WeekSlot {
                day_position: 5,
                interval_index: 1
            })
        );
        assert_eq!(status.closes_at_label(), Some("19:00"));
        assert_eq!(status.next_change, Some(at(5, 19, 0)));
        assert_eq!(status.minutes_until_change(), Some(150));
        assert!(status.next_opening.is_none());
    }

    #[test]
    fn seconds_are_ignored_at_the_closing_minute() {
        let schedule = week();
        let now = at(0, 19, 0) + Duration::seconds(45);
        assert!(evaluate(&schedule, now).is_open);
    }

    #[test]
    fn early_morning_opens_later_today() {
        let schedule = week();
        let status = evaluate(&schedule, at(2, 6, 0));
        assert!(!status.is_open);
        assert_eq!(status.next_opening_day_label(), Some("Wednesday"));
        assert_eq!(status.next_opening_label(), Some("08:00"));
        assert_eq!(status.next_change, Some(at(2, 8, 0)));
    }

    #[test]
    fn sunday_waits_for_monday() {
        let schedule = week();
        let status = evaluate(&schedule, at(6, 12, 0));
        assert!(!status.is_open);
        assert_eq!(status.next_opening_day_label(), Some("Monday"));
        assert_eq!(status.next_change, Some(at(7, 8, 0)));
    }

    #[test]
    fn single_day_wraps_a_full_week() {
        let schedule = WeeklySchedule::build(&[RawDay::new(
            3,
            "Wednesday",
            vec![RawHours::new("9:00", "12:00")],
        )])
        .unwrap();
        let status = evaluate(&schedule, at(2, 13, 0));
        assert_eq!(status.next_opening_day_label(), Some("Wednesday"));
        assert_eq!(status.next_change, Some(at(9, 9, 0)));
    }

    #[test]
    fn missing_day_is_closed_without_next_opening() {
        let schedule = WeeklySchedule::build(&[RawDay::new(
            1,
            "Monday",
            vec![RawHours::new("8:00", "19:00")],
        )])
        .unwrap();
        let status = evaluate(&schedule, at(1, 10, 0));
        assert!(!status.is_open);
        assert!(status.next_opening.is_none());
        assert!(status.next_change.is_none());
    }

    #[test]
    fn inverted_interval_is_not_an_opening() {
        let schedule = WeeklySchedule::build(&[
            RawDay::new(1, "Monday", vec![RawHours::new("19:00", "8:00")]),
            RawDay::new(2, "Tuesday", vec![RawHours::new("9:00", "10:00")]),
        ])
        .unwrap();
        let status = evaluate(&schedule, at(0, 12, 0));
        assert_eq!(status.next_opening_day_label(), Some("Tuesday"));
    }

    #[test]
    fn last_representable_instant_does_not_overflow() {
        let raw: Vec<RawDay> = (0..7)
            .map(|d| RawDay::new(d, format!("Day {d}"), vec![RawHours::new("8:00", "9:00")]))
            .collect();
        let schedule = WeeklySchedule::build(&raw).unwrap();

        let status = evaluate(&schedule, NaiveDateTime::MAX);
        assert!(!status.is_open);
        let next = status.next_opening.as_ref().unwrap();
        assert_eq!(next.start.label(), "08:00");
        assert!(next.at.is_none());
        assert!(status.next_change.is_none());
        assert!(status.minutes_until_change().is_none());
    }

    #[test]
    fn evaluate_now_uses_the_clock() {
        let schedule = week();
        let clock = FixedClock(at(0, 9, 0));
        let status = OpenStatusEvaluator::new(&schedule).evaluate_now(&clock);
        assert!(status.is_open);
        assert_eq!(status.evaluated_at, at(0, 9, 0));
    }
}
