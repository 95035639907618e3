//! Command-line interface for three_in_a_row.

use clap::Parser;
use std::path::PathBuf;

/// Three in a Row - two-player tic-tac-toe at the terminal
#[derive(Parser, Debug)]
#[command(name = "three_in_a_row")]
#[command(about = "Two-player tic-tac-toe at the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file overriding the game's messages
    #[arg(long)]
    pub messages: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set (logs go to stderr)
    #[arg(long, default_value = "warn")]
    pub log_filter: String,
}
