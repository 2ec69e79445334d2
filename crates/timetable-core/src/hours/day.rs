//! One day of opening hours.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::time_of_day::TimeOfDay;
use crate::error::TimeParseError;

/// Position of each day-of-week code (0 = Sunday) in the Monday-first week.
const WEEK_RANK: [usize; 7] = [6, 0, 1, 2, 3, 4, 5];

/// Rank of a day-of-week code in canonical week order (Monday = 0, Sunday = 6).
pub fn week_rank(day_week: u8) -> Option<usize> {
    WEEK_RANK.get(usize::from(day_week)).copied()
}

/// Day-of-week code (0 = Sunday .. 6 = Saturday) for a chrono weekday.
pub fn day_week_of(weekday: chrono::Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

/// Raw opening window as supplied by the caller, e.g. `{ "start": "8:00", "end": "19:00" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHours {
    pub start: String,
    pub end: String,
}

impl RawHours {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Raw day entry: `{ "dayWeek": 6, "label": "Saturday", "hours": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDay {
    pub day_week: u8,
    pub label: String,
    #[serde(default)]
    pub hours: Vec<RawHours>,
}

impl RawDay {
    pub fn new(day_week: u8, label: impl Into<String>, hours: Vec<RawHours>) -> Self {
        Self {
            day_week,
            label: label.into(),
            hours,
        }
    }
}

/// A single opening window. Both ends are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl Interval {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Parse both endpoints; fails if either one does.
    pub fn parse(raw: &RawHours) -> Result<Self, TimeParseError> {
        Ok(Self {
            start: TimeOfDay::parse(&raw.start)?,
            end: TimeOfDay::parse(&raw.end)?,
        })
    }

    /// Whether `minute_of_day` lies within `[start, end]`.
    pub fn contains(&self, minute_of_day: u16) -> bool {
        self.start.minute_of_day() <= minute_of_day && minute_of_day <= self.end.minute_of_day()
    }

    /// Start after end. Kept as given but can never contain a minute.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// Opening hours of one weekday, intervals ascending by start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day_week: u8,
    pub label: String,
    pub intervals: Vec<Interval>,
}

impl DaySchedule {
    /// Build a day from raw intervals.
    ///
    /// Intervals with an unparsable endpoint are dropped with a warning; the
    /// rest are sorted by start time, keeping input order for equal starts.
    pub fn build(day_week: u8, label: impl Into<String>, raw_intervals: &[RawHours]) -> Self {
        let label = label.into();
        let mut intervals: Vec<Interval> = raw_intervals
            .iter()
            .filter_map(|raw| match Interval::parse(raw) {
                Ok(interval) => Some(interval),
                Err(e) => {
                    warn!(
                        day = %label,
                        start = %raw.start,
                        end = %raw.end,
                        error = %e,
                        "dropping interval with unparsable time"
                    );
                    None
                }
            })
            .collect();

        for interval in intervals.iter().filter(|i| i.is_inverted()) {
            warn!(
                day = %label,
                start = %interval.start,
                end = %interval.end,
                "interval ends before it starts"
            );
        }

        // sort_by_key is stable, so equal starts keep their input order.
        intervals.sort_by_key(|i| i.start.minute_of_day());

        Self {
            day_week,
            label,
            intervals,
        }
    }

    /// No valid intervals: closed all day.
    pub fn is_closed(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Index of the first interval containing `minute_of_day`.
    pub fn active_interval(&self, minute_of_day: u16) -> Option<usize> {
        self.intervals.iter().position(|i| i.contains(minute_of_day))
    }

    /// Position of this day in canonical week order.
    pub fn rank(&self) -> usize {
        week_rank(self.day_week).unwrap_or(WEEK_RANK.len())
    }
}
