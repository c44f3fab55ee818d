//! Board and result rendering.

use crate::games::tictactoe::{Board, Cell, GameResult, Position};

/// Renders the board in numpad layout (7-8-9 on top, 1-2-3 at the bottom).
///
/// Empty cells are blank, or show their position number when
/// `show_position_hints` is set.
pub fn render_board(board: &Board, show_position_hints: bool) -> String {
    let rows: Vec<String> = Position::ROWS
        .iter()
        .map(|row| {
            let symbols: Vec<String> = row
                .iter()
                .map(|&pos| match board.get(pos) {
                    Cell::Occupied(mark) => mark.to_string(),
                    Cell::Empty if show_position_hints => pos.number().to_string(),
                    Cell::Empty => " ".to_string(),
                })
                .collect();
            format!(" {} ", symbols.join(" | "))
        })
        .collect();

    format!("\n\n{}\n\n\n", rows.join("\n---+---+---\n"))
}

/// Final message for a finished game, `None` while it is still in progress.
pub fn result_message(result: GameResult) -> Option<String> {
    match result.winner() {
        Some(mark) => Some(format!("Congratulations, {}! You won!", mark)),
        None if result.is_tie() => Some("It's a tie!".to_string()),
        None => None,
    }
}
