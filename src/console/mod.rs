//! Text console front end.
//!
//! Owns presentation and retry policy. All game truth comes from
//! [`GameSession`](crate::GameSession).

mod driver;
mod render;

pub use driver::Console;
pub use render::{render_board, result_message};
