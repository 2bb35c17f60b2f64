use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Aridity windowed SPI engine.
#[derive(Parser)]
#[command(
    name = "aridity",
    version,
    about = "Windowed Standardized Precipitation Index over daily gridded precipitation"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute SPI for the monthly model and, if configured, the anchored model.
    Run(RunArgs),
    /// Print the windows each model would use, without aggregating.
    Windows(WindowsArgs),
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "aridity.toml")]
    pub config: PathBuf,

    /// Override output Parquet path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the SPI order in months.
    #[arg(long = "unit-count")]
    pub unit_count: Option<u32>,

    /// Override the anchored model's day shift.
    #[arg(long = "shift-days", allow_hyphen_values = true)]
    pub shift_days: Option<i32>,
}

/// Arguments for the `windows` subcommand.
#[derive(clap::Args)]
pub struct WindowsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "aridity.toml")]
    pub config: PathBuf,
}
