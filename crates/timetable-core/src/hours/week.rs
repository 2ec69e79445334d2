//! The whole week in canonical Monday..Sunday order.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use super::day::{week_rank, DaySchedule, Interval, RawDay};
use crate::error::ScheduleError;

/// Position of one interval in the flattened week.
///
/// Indexes into [`WeeklySchedule::days`]; stays valid for the lifetime of the
/// schedule since the schedule is immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekSlot {
    /// Index of the day in canonical order (also its week rank).
    pub day_position: usize,
    /// Index of the interval within that day.
    pub interval_index: usize,
}

/// Canonically ordered, owned opening hours for a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklySchedule {
    days: Vec<DaySchedule>,
    #[serde(skip)]
    slots: Vec<WeekSlot>,
}

impl WeeklySchedule {
    /// Build from an unordered list of raw days.
    ///
    /// The input is copied, never reordered in place. Days are sorted
    /// Monday first and Sunday last; each day's intervals are parsed and
    /// sorted by [`DaySchedule::build`].
    pub fn build(raw_days: &[RawDay]) -> Result<Self, ScheduleError> {
        if raw_days.is_empty() {
            return Err(ScheduleError::NoDays);
        }

        let mut seen = HashSet::new();
        let mut ranked = Vec::with_capacity(raw_days.len());
        for raw in raw_days {
            let rank = week_rank(raw.day_week).ok_or_else(|| ScheduleError::InvalidDayWeek {
                day_week: raw.day_week,
                label: raw.label.clone(),
            })?;
            if !seen.insert(raw.day_week) {
                return Err(ScheduleError::DuplicateDay {
                    day_week: raw.day_week,
                    label: raw.label.clone(),
                });
            }
            ranked.push((rank, raw));
        }
        ranked.sort_by_key(|(rank, _)| *rank);

        let days: Vec<DaySchedule> = ranked
            .into_iter()
            .map(|(_, raw)| DaySchedule::build(raw.day_week, raw.label.clone(), &raw.hours))
            .collect();

        let slots = days
            .iter()
            .enumerate()
            .flat_map(|(day_position, day)| {
                (0..day.intervals.len()).map(move |interval_index| WeekSlot {
                    day_position,
                    interval_index,
                })
            })
            .collect::<Vec<_>>();

        debug!(days = days.len(), slots = slots.len(), "built weekly schedule");
        Ok(Self { days, slots })
    }

    /// Days in canonical order.
    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    /// Position and entry of the day with the given day-of-week code.
    pub fn find_day(&self, day_week: u8) -> Option<(usize, &DaySchedule)> {
        self.days
            .iter()
            .enumerate()
            .find(|(_, d)| d.day_week == day_week)
    }

    pub fn day(&self, day_week: u8) -> Option<&DaySchedule> {
        self.find_day(day_week).map(|(_, d)| d)
    }

    /// Flattened interval list: days in canonical order, intervals ascending.
    pub fn slots(&self) -> &[WeekSlot] {
        &self.slots
    }

    /// Resolve a slot to its day and interval.
    pub fn resolve(&self, slot: WeekSlot) -> Option<(&DaySchedule, &Interval)> {
        let day = self.days.get(slot.day_position)?;
        let interval = day.intervals.get(slot.interval_index)?;
        Some((day, interval))
    }

    /// Iterate `(day, interval)` pairs in flattened week order.
    pub fn entries(&self) -> impl Iterator<Item = (&DaySchedule, &Interval)> + '_ {
        self.slots.iter().filter_map(|slot| self.resolve(*slot))
    }
}
