//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameSession, Mark};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... pattern. While the game is in
/// progress, X is to move after an even number of moves and O after an odd
/// number.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(game: &GameSession) -> bool {
        let history = game.history();

        if history.first().is_some_and(|mv| mv.mark != Mark::X) {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        if game.is_over() {
            // The final mover keeps the turn.
            return history.last().is_some_and(|mv| mv.mark == game.current_player());
        }

        let expected_next = if history.len() % 2 == 0 { Mark::X } else { Mark::O };
        game.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
