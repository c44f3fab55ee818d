//! Numpad-numbered board positions.
//!
//! Positions are numbered 1-9 like a numeric keypad:
//!
//! ```text
//! 7 | 8 | 9
//! 4 | 5 | 6
//! 1 | 2 | 3
//! ```
//!
//! The numbering is part of the public contract; renderers rely on it.

use super::action::MoveError;
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Bottom-left (position 1)
    BottomLeft,
    /// Bottom-center (position 2)
    BottomCenter,
    /// Bottom-right (position 3)
    BottomRight,
    /// Middle-left (position 4)
    MiddleLeft,
    /// Center (position 5)
    Center,
    /// Middle-right (position 6)
    MiddleRight,
    /// Top-left (position 7)
    TopLeft,
    /// Top-center (position 8)
    TopCenter,
    /// Top-right (position 9)
    TopRight,
}

impl Position {
    /// All 9 positions in numeric order.
    pub const ALL: [Position; 9] = [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
    ];

    /// Grid rows from top to bottom, each left to right.
    pub const ROWS: [[Position; 3]; 3] = [
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        [Position::MiddleLeft, Position::Center, Position::MiddleRight],
        [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
        }
    }

    /// Position number (1-9).
    pub fn number(self) -> u8 {
        match self {
            Position::BottomLeft => 1,
            Position::BottomCenter => 2,
            Position::BottomRight => 3,
            Position::MiddleLeft => 4,
            Position::Center => 5,
            Position::MiddleRight => 6,
            Position::TopLeft => 7,
            Position::TopCenter => 8,
            Position::TopRight => 9,
        }
    }

    /// Storage index (0-8), i.e. the number minus one.
    pub fn index(self) -> usize {
        usize::from(self.number() - 1)
    }

    /// Creates position from its number (1-9).
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=9 => Some(Self::ALL[usize::from(number - 1)]),
            _ => None,
        }
    }

    /// Grid row, 0 being the top row.
    pub fn row(self) -> usize {
        2 - self.index() / 3
    }

    /// Grid column, 0 being the left column.
    pub fn column(self) -> usize {
        self.index() % 3
    }

    /// Filters positions by board state - returns only empty cells, in numeric order.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl TryFrom<u8> for Position {
    type Error = MoveError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or(MoveError::InvalidPosition(number))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_numbers_round_trip_through_all() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_number(pos.number()), Some(pos));
        }
    }

    #[test]
    fn test_rows_follow_numpad_layout() {
        let numbers: Vec<Vec<u8>> = Position::ROWS
            .iter()
            .map(|row| row.iter().map(|p| p.number()).collect())
            .collect();
        assert_eq!(numbers, vec![vec![7, 8, 9], vec![4, 5, 6], vec![1, 2, 3]]);
    }

    #[test]
    fn test_row_and_column() {
        for (r, row) in Position::ROWS.iter().enumerate() {
            for (c, pos) in row.iter().enumerate() {
                assert_eq!((pos.row(), pos.column()), (r, c), "{pos}");
            }
        }
    }

    #[test]
    fn test_out_of_range_numbers() {
        assert_eq!(Position::from_number(0), None);
        assert_eq!(Position::from_number(10), None);
        assert_eq!(Position::try_from(0), Err(MoveError::InvalidPosition(0)));
    }
}
