use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Args;
use serde::Serialize;
use timetable_core::{
    status_message, Clock, FixedClock, OpenStatusEvaluator, StatusResult, SystemClock,
};

#[derive(Args)]
pub struct StatusArgs {
    /// Evaluate at this local time instead of now (YYYY-MM-DDTHH:MM)
    #[arg(long, value_parser = parse_at)]
    at: Option<NaiveDateTime>,
    /// Output the full status as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct StatusOutput<'a> {
    message: String,
    #[serde(flatten)]
    status: &'a StatusResult,
}

fn parse_at(value: &str) -> Result<NaiveDateTime, String> {
    ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| format!("invalid time '{value}': expected YYYY-MM-DDTHH:MM"))
}

pub fn run(config: Option<PathBuf>, args: StatusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (_, config) = super::load_config(config)?;
    let schedule = config.schedule()?;

    let clock: Box<dyn Clock> = match args.at {
        Some(at) => Box::new(FixedClock(at)),
        None => Box::new(SystemClock),
    };
    let status = OpenStatusEvaluator::new(&schedule).evaluate_now(clock.as_ref());
    let message = status_message(&status, &config.messages);

    if args.json {
        let output = StatusOutput {
            message,
            status: &status,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{message}");
    }
    Ok(())
}
