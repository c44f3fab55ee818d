//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The game result is always derived
//! from the board through [`evaluate`] and never stored alongside it.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, check_winner};

use super::{Board, GameResult};
use tracing::instrument;

/// Derives the game result from the board.
///
/// A completed line wins even when the board is also full.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameResult {
    if let Some(winner) = check_winner(board) {
        GameResult::Win(winner)
    } else if is_full(board) {
        GameResult::Tie
    } else {
        GameResult::InProgress
    }
}
