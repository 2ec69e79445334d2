//! "H:MM" / "HH:MM" labels as comparable minute-of-day values.
//!
//! Parsing is strict: the hour must be 0..=23 and the minute 0..=59, so
//! "25:00" and "24:00" are rejected rather than silently accepted. A label
//! that fails to parse never becomes a `TimeOfDay`, which keeps it out of
//! every comparison.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TimeParseError;

/// A wall-clock time of day at minute precision.
///
/// Ordering follows `minute_of_day`. Serializes as its canonical "HH:MM" label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TimeOfDay {
    minute_of_day: u16,
    label: String,
}

impl TimeOfDay {
    /// Parse an "H:MM" or "HH:MM" label.
    ///
    /// "8:00" and "08:00" both yield minute 480 with label "08:00".
    pub fn parse(label: &str) -> Result<Self, TimeParseError> {
        let malformed = || TimeParseError::Malformed(label.to_string());
        let trimmed = label.trim();
        let (h, m) = trimmed.split_once(':').ok_or_else(malformed)?;

        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(h) || h.len() > 2 || !all_digits(m) || m.len() != 2 {
            return Err(malformed());
        }

        let hours: u32 = h.parse().map_err(|_| malformed())?;
        let minutes: u32 = m.parse().map_err(|_| malformed())?;
        if hours > 23 {
            return Err(TimeParseError::HourOutOfRange {
                label: label.to_string(),
                hours,
            });
        }
        if minutes > 59 {
            return Err(TimeParseError::MinuteOutOfRange {
                label: label.to_string(),
                minutes,
            });
        }

        // Both values are range-checked above, so this cannot fail.
        Self::from_hm(hours, minutes).ok_or_else(malformed)
    }

    /// Build from hour and minute components, `None` when out of range.
    pub fn from_hm(hours: u32, minutes: u32) -> Option<Self> {
        if hours > 23 || minutes > 59 {
            return None;
        }
        Some(Self {
            minute_of_day: (hours * 60 + minutes) as u16,
            label: format!("{hours:02}:{minutes:02}"),
        })
    }

    pub fn minute_of_day(&self) -> u16 {
        self.minute_of_day
    }

    pub fn hours(&self) -> u32 {
        u32::from(self.minute_of_day / 60)
    }

    pub fn minutes(&self) -> u32 {
        u32::from(self.minute_of_day % 60)
    }

    /// Zero-padded canonical label, e.g. "08:00".
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.label
    }
}
