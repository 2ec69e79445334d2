//! Opening-hours model: time labels, days, the week, and status evaluation.

pub mod clock;
pub mod day;
pub mod status;
pub mod time_of_day;
pub mod week;

pub use clock::{Clock, FixedClock, SystemClock};
pub use day::{day_week_of, week_rank, DaySchedule, Interval, RawDay, RawHours};
pub use status::{evaluate, ActiveSlot, NextOpening, OpenStatusEvaluator, StatusResult};
pub use time_of_day::TimeOfDay;
pub use week::{WeekSlot, WeeklySchedule};
