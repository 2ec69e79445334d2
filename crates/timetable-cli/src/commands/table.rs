use std::path::PathBuf;

use timetable_core::{render_table, table_rows};

pub fn run(config: Option<PathBuf>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_, config) = super::load_config(config)?;
    let schedule = config.schedule()?;
    let rows = table_rows(&schedule);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render_table(&rows, &config.messages));
    }
    Ok(())
}
