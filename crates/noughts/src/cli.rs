//! Command-line interface for noughts.

use clap::Parser;
use std::path::PathBuf;

/// Noughts - two-player noughts and crosses in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player noughts and crosses in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (used only if it exists)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Write logs here instead of the configured log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Keep the finished board on screen until 'r' is pressed
    #[arg(long)]
    pub no_auto_restart: bool,
}
