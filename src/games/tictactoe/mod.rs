//! Tic-tac-toe on a numpad-numbered 3x3 board.

mod action;
mod game;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::{GameSession, SessionError};
pub use phases::GameResult;
pub use position::Position;
pub use types::{Board, Cell, Mark};
