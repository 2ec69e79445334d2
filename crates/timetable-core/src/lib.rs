//! # Timetable Core Library
//!
//! Weekly opening hours for a storefront and the open/closed status derived
//! from them at a given instant, e.g.:
//!
//! - `closed, opens Monday at 08:00`
//! - `open, closes at 18:00`
//!
//! ## Architecture
//!
//! - **Hours**: `TimeOfDay` labels, per-day interval lists, the canonical
//!   Monday-first week and the status evaluator
//! - **Render**: plain-text table and status line from configurable templates
//! - **Storage**: TOML-based configuration holding the day list
//!
//! ## Key Components
//!
//! - [`WeeklySchedule`]: canonical, owned schedule built from raw days
//! - [`OpenStatusEvaluator`]: open/closed status and the next boundary
//! - [`Clock`]: injected time source
//! - [`Config`]: application configuration management

pub mod error;
pub mod hours;
pub mod render;
pub mod storage;

pub use error::{ConfigError, CoreError, Result, ScheduleError, TimeParseError};
pub use hours::{
    evaluate, Clock, DaySchedule, FixedClock, Interval, NextOpening, OpenStatusEvaluator,
    RawDay, RawHours, StatusResult, SystemClock, TimeOfDay, WeekSlot, WeeklySchedule,
};
pub use render::{render_table, status_message, table_rows, TableRow};
pub use storage::{Config, MessagesConfig};
