//! Tie detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use super::win::check_winner;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Mark, Position};
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Occupied(Mark::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X X O / O O X / X X O, numbered top row first
        for (n, mark) in [
            (7, Mark::X),
            (8, Mark::O),
            (9, Mark::X),
            (4, Mark::O),
            (5, Mark::O),
            (6, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (3, Mark::O),
        ] {
            board.set(Position::from_number(n).unwrap(), Cell::Occupied(mark));
        }

        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Cell::Occupied(Mark::X));
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
