//! Mark balance invariant: X leads O by at most one mark.

use super::super::{GameSession, Mark};
use super::Invariant;

/// Invariant: the board holds as many X marks as O marks, or one more.
pub struct MarkBalanceInvariant;

impl Invariant<GameSession> for MarkBalanceInvariant {
    fn holds(game: &GameSession) -> bool {
        let x = game.board().count(Mark::X);
        let o = game.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, Position};

    #[test]
    fn test_legal_play_holds() {
        let cases: [&[u8]; 4] = [&[], &[5], &[5, 1], &[5, 1, 9]];
        for moves in cases {
            let game = GameSession::replay(moves).unwrap();
            assert!(MarkBalanceInvariant::holds(&game), "{moves:?}");
        }
    }

    #[test]
    fn test_extra_o_violates() {
        let mut game = GameSession::new();
        game.board_mut().set(Position::Center, Cell::Occupied(Mark::O));
        assert!(!MarkBalanceInvariant::holds(&game));
    }
}
