use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum DaysAction {
    /// Show the configured days in canonical week order
    Show,
    /// Replace the days with a JSON array of { dayWeek, label, hours }
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },
}

pub fn run(
    config: Option<PathBuf>,
    action: DaysAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DaysAction::Show => {
            let (_, config) = super::load_config(config)?;
            let schedule = config.schedule()?;
            println!("{}", serde_json::to_string_pretty(schedule.days())?);
        }
        DaysAction::Import { file } => {
            let (path, mut config) = super::load_config(config)?;
            config.import_days(&file)?;
            config.save_to(&path)?;
            println!("imported {} days", config.days.len());
        }
    }
    Ok(())
}
