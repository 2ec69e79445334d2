pub mod config;
pub mod days;
pub mod status;
pub mod table;

use std::path::PathBuf;

use timetable_core::{Config, ConfigError};

/// Resolve the config path from `--config` or the default location.
pub fn config_path(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(path) => Ok(path),
        None => Config::default_path(),
    }
}

/// Load the config, writing defaults if it does not exist yet.
pub fn load_config(explicit: Option<PathBuf>) -> Result<(PathBuf, Config), ConfigError> {
    let path = config_path(explicit)?;
    let config = Config::load_from(&path)?;
    tracing::debug!(path = %path.display(), days = config.days.len(), "loaded config");
    Ok((path, config))
}
