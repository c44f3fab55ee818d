//! Numpad tic-tac-toe library
//!
//! Two-player tic-tac-toe for the text console. Cells are numbered 1-9 like
//! a numeric keypad, with 7-8-9 as the top row.
//!
//! # Architecture
//!
//! - **Games**: the [`GameSession`] engine that owns board state, validates
//!   moves and derives the result
//! - **Console**: text front end that prompts, renders and re-asks on
//!   rejected input
//! - **Config**: TOML presentation and logging settings
//!
//! # Example
//!
//! ```
//! use numpad_tictactoe::{GameResult, GameSession, Mark, MoveError};
//!
//! let mut game = GameSession::new();
//! for position in [7, 1, 8, 2] {
//!     game.apply_move(position)?;
//! }
//! assert_eq!(game.apply_move(9)?, GameResult::Win(Mark::X));
//! assert_eq!(game.apply_move(5), Err(MoveError::GameAlreadyOver));
//! # Ok::<(), MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, ConsoleConfig};

// Crate-level exports - Console front end
pub use console::{Console, render_board, result_message};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, GameResult, GameSession, Mark, Move, MoveError, Position, SessionError,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::{invariants, rules};
