//! History consistency invariant: the board is exactly the accepted moves.

use super::super::{Cell, GameSession};
use super::Invariant;

/// Invariant: every occupied cell comes from exactly one recorded move.
///
/// History length equals the number of occupied cells and each move's
/// mark is still in the cell it names.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(game: &GameSession) -> bool {
        let history = game.history();

        history.len() == game.board().occupied_count()
            && history
                .iter()
                .all(|mv| game.cell(mv.position) == Cell::Occupied(mv.mark))
    }

    fn description() -> &'static str {
        "History matches the occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_finished_game_holds() {
        let game = GameSession::replay(&[1, 3, 2, 4, 6, 5, 7, 8, 9]).unwrap();
        assert_eq!(game.move_count(), 9);
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut game = GameSession::replay(&[5]).unwrap();
        game.board_mut().set(Position::Center, Cell::Occupied(Mark::O));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
