//! Core error types for timetable-core.
//!
//! This module defines the error hierarchy using thiserror. Interval parse
//! failures are not listed here as fatal: the schedule builder drops the
//! offending interval and logs it instead.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for timetable-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Schedule construction errors
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// The configuration directory could not be resolved or created
    #[error("Configuration directory unavailable: {0}")]
    DataDir(String),
}

/// Errors raised while building a [`crate::WeeklySchedule`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// No days were supplied at all
    #[error("days is not defined: at least one day is required")]
    NoDays,

    /// A day-of-week code outside 0..=6
    #[error("Invalid dayWeek {day_week} for '{label}': expected 0 (Sunday) to 6 (Saturday)")]
    InvalidDayWeek { day_week: u8, label: String },

    /// The same day-of-week appears more than once
    #[error("Duplicate dayWeek {day_week} ('{label}')")]
    DuplicateDay { day_week: u8, label: String },
}

/// Why an "H:MM"/"HH:MM" label was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// Not of the shape hours ':' minutes
    #[error("malformed time label '{0}': expected H:MM or HH:MM")]
    Malformed(String),

    /// Hours above 23
    #[error("hour out of range in '{label}': {hours}")]
    HourOutOfRange { label: String, hours: u32 },

    /// Minutes above 59
    #[error("minute out of range in '{label}': {minutes}")]
    MinuteOutOfRange { label: String, minutes: u32 },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
