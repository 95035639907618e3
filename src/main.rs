//! Three in a Row - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use three_in_a_row::{Messages, Screen, StdConsole, run_session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let messages = match &cli.messages {
        Some(path) => Messages::from_file(path)?,
        None => Messages::default(),
    };

    let mut screen = Screen::new(StdConsole::stdio(), messages);
    let end = run_session(&mut screen)?;
    info!(?end, "Exiting");

    Ok(())
}
