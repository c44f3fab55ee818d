//! Game result and the state machine it describes.
//!
//! `InProgress` is the only non-terminal state. `Win` and `Tie` are left
//! only by starting a new game.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Result of a game, derived from its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Moves are still accepted.
    InProgress,
    /// A mark completed a line.
    Win(Mark),
    /// The board filled without a completed line.
    Tie,
}

impl GameResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::Win(mark) => Some(*mark),
            GameResult::InProgress | GameResult::Tie => None,
        }
    }

    /// Returns true for `Win` and `Tie`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, GameResult::Tie)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::Win(mark) => write!(f, "Player {} wins", mark),
            GameResult::Tie => write!(f, "Tie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_and_tie() {
        assert_eq!(GameResult::Win(Mark::O).winner(), Some(Mark::O));
        assert_eq!(GameResult::Tie.winner(), None);
        assert_eq!(GameResult::InProgress.winner(), None);
        assert!(GameResult::Tie.is_tie());
        assert!(!GameResult::Win(Mark::X).is_tie());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!GameResult::InProgress.is_terminal());
        assert!(GameResult::Tie.is_terminal());
        assert!(GameResult::Win(Mark::X).is_terminal());
    }
}
