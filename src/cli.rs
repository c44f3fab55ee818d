//! Command-line interface for numpad_tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Numpad Tic Tac Toe - two players, one console
#[derive(Parser, Debug)]
#[command(name = "numpad_tictactoe")]
#[command(about = "Two-player tic-tac-toe on a numpad-numbered board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML console configuration file
    #[arg(long, env = "TICTACTOE_CONFIG")]
    pub config: Option<PathBuf>,
}
