//! Numpad Tic Tac Toe - console game
//!
//! Plays rounds on stdin/stdout until the players decline another.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use numpad_tictactoe::{Console, ConsoleConfig};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = ConsoleConfig::load(cli.config.as_deref())
        .context("Failed to load console configuration")?;

    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    info!(?config, "Starting numpad tic-tac-toe");

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), config);
    console.run().context("Console I/O failed")?;

    info!("Exiting");
    Ok(())
}
