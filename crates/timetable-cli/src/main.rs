use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "timetable-cli", version, about = "Timetable CLI")]
struct Cli {
    /// Config file (defaults to $TIMETABLE_CONFIG or ~/.config/timetable/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print whether the store is open right now
    Status(commands::status::StatusArgs),
    /// Print the weekly opening-hours table
    Table {
        /// Output rows as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Opening days management
    Days {
        #[command(subcommand)]
        action: commands::days::DaysAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();
    let config_path = cli.config;
    let result = match cli.command {
        Commands::Status(args) => commands::status::run(config_path, args),
        Commands::Table { json } => commands::table::run(config_path, json),
        Commands::Config { action } => commands::config::run(config_path, action),
        Commands::Days { action } => commands::days::run(config_path, action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
