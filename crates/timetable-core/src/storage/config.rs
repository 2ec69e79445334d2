//! TOML-based configuration.
//!
//! Stores:
//! - The list of days and their raw opening hours
//! - Message templates for the status line and closed days
//!
//! Configuration is stored at `~/.config/timetable/config.toml` unless an
//! explicit path is given (`TIMETABLE_CONFIG` or the CLI `--config` flag).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, ScheduleError};
use crate::hours::{RawDay, RawHours, WeeklySchedule};

/// Status line and table texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesConfig {
    /// Shown while open; `{end}` is the closing time.
    #[serde(default = "default_open")]
    pub open: String,
    /// Shown while closed; `{day}` and `{start}` describe the next opening.
    #[serde(default = "default_closed")]
    pub closed: String,
    /// Shown while closed when no opening exists.
    #[serde(default = "default_closed_short")]
    pub closed_indefinitely: String,
    /// Table cell for a day without hours.
    #[serde(default = "default_closed_short")]
    pub closed_day: String,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub messages: MessagesConfig,
    #[serde(default = "default_days")]
    pub days: Vec<RawDay>,
}

fn default_open() -> String {
    "open, closes at {end}".into()
}
fn default_closed() -> String {
    "closed, opens {day} at {start}".into()
}
fn default_closed_short() -> String {
    "closed".into()
}

fn default_days() -> Vec<RawDay> {
    let weekday = || vec![RawHours::new("8:00", "19:00")];
    vec![
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
    ]
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            open: default_open(),
            closed: default_closed(),
            closed_indefinitely: default_closed_short(),
            closed_day: default_closed_short(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages: MessagesConfig::default(),
            days: default_days(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    serde_json::Value::String(_) => serde_json::Value::String(value.into()),
                    _ => return Err(invalid("unsupported value type".into())),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Default location: `TIMETABLE_CONFIG` if set, else the data directory.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        match std::env::var_os("TIMETABLE_CONFIG") {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(data_dir()?.join("config.toml")),
        }
    }

    /// Load from `path`, writing defaults there if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if the default config cannot be written.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key, in memory. Callers persist with [`Config::save_to`].
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value does not fit the
    /// existing type (object and array values are given as JSON), or new
    /// days do not build into a schedule. `self` is unchanged on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        if key == "days" || key.starts_with("days.") {
            updated.schedule().map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        }
        *self = updated;
        Ok(())
    }

    /// Replace the configured days with a JSON day array read from `path`.
    ///
    /// The array uses the `{ dayWeek, label, hours: [{ start, end }] }` shape.
    /// It is validated by building a schedule before anything is replaced.
    pub fn import_days(&mut self, path: &Path) -> crate::Result<()> {
        let content = std::fs::read_to_string(path)?;
        let days: Vec<RawDay> = serde_json::from_str(&content)?;
        WeeklySchedule::build(&days)?;
        self.days = days;
        Ok(())
    }

    /// Build the canonical schedule from the configured days.
    pub fn schedule(&self) -> Result<WeeklySchedule, ScheduleError> {
        WeeklySchedule::build(&self.days)
    }
}
