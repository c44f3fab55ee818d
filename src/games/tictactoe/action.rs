//! First-class action types for tic-tac-toe.
//!
//! Accepted moves are recorded as domain events so a session can be
//! inspected, checked against its invariants and replayed.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// The position where the mark was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// Reason a move was rejected.
///
/// A rejected move never changes the session; the caller decides whether
/// to ask again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The identifier does not name one of the 9 cells.
    #[display("Position {} is outside 1-9", _0)]
    InvalidPosition(u8),

    /// The cell at the position already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has already been won or tied.
    #[display("Game is already over")]
    GameAlreadyOver,
}

impl std::error::Error for MoveError {}
