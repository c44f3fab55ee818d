//! Scripted console sessions.

use numpad_tictactoe::{Console, ConsoleConfig, GameResult, Mark, render_board};
use std::io::Cursor;

fn run(input: &str) -> String {
    let mut console = Console::new(Cursor::new(input), Vec::new(), ConsoleConfig::default());
    console.run().expect("in-memory I/O");
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn test_win_transcript() {
    let output = run("7\n1\n8\n2\n9\nn\n");

    assert!(output.starts_with("Welcome to Tic Tac Toe!\n"));
    assert_eq!(output.matches("X's turn.").count(), 3);
    assert_eq!(output.matches("O's turn.").count(), 2);
    assert!(output.contains("\n\n X | X | X \n---+---+---\n   |   |   \n---+---+---\n O | O |   \n\n\n"));
    assert!(output.ends_with("Congratulations, X! You won!\nPlay again? (y/n): Thanks for playing!\n"));
}

#[test]
fn test_tie_transcript() {
    let output = run("1\n3\n2\n4\n6\n5\n7\n8\n9\nN\n");
    assert!(output.contains("It's a tie!\n"));
    assert!(!output.contains("Congratulations"));
}

#[test]
fn test_first_turn_exact_output() {
    let output = run("");
    let expected = format!(
        "Welcome to Tic Tac Toe!\n{}X's turn.\nChoose a position from 1-9: Thanks for playing!\n",
        render_board(&Default::default(), false)
    );
    assert_eq!(output, expected);
}

#[test]
fn test_invalid_input_reprompts() {
    let output = run("abc\n0\n10\n-3\n\n5\n");
    assert_eq!(
        output
            .matches("Invalid input. Choose a position from 1-9: ")
            .count(),
        5
    );
    assert!(output.contains("\n\n   |   |   \n---+---+---\n   | X |   \n"));
    assert!(output.contains("O's turn."));
}

#[test]
fn test_padded_or_signed_digits_reprompt() {
    let output = run(" 5\n05\n+5\n5 \n5\n");
    assert_eq!(
        output
            .matches("Invalid input. Choose a position from 1-9: ")
            .count(),
        4
    );
    assert_eq!(output.matches("O's turn.").count(), 1);
}

#[test]
fn test_occupied_cell_reprompts() {
    let output = run("5\n5\n1\n");
    assert!(output.contains(
        "O's turn.\nChoose a position from 1-9: You can't go there. Go again.\nChoose a position from 1-9: "
    ));
    assert!(output.contains(" O |   |   \n\n\n"));
}

#[test]
fn test_play_again_starts_fresh_game() {
    let output = run("7\n1\n8\n2\n9\ny\n3\n");
    assert_eq!(output.matches("Welcome to Tic Tac Toe!").count(), 2);
    // The second game starts with X on an empty board
    let second = output.rsplit("Welcome to Tic Tac Toe!").next().unwrap();
    assert!(second.contains("X's turn."));
    assert!(second.contains("\n   |   | X \n\n\n"));
    assert!(output.ends_with("Thanks for playing!\n"));
}

#[test]
fn test_play_again_answer_is_case_insensitive() {
    let output = run("7\n1\n8\n2\n9\n Y \n");
    assert_eq!(output.matches("Welcome to Tic Tac Toe!").count(), 2);
}

#[test]
fn test_position_hints() {
    let config = ConsoleConfig::default().with_position_hints(true);
    let mut console = Console::new(Cursor::new("5\n"), Vec::new(), config);
    console.run().unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains(" 7 | 8 | 9 \n---+---+---\n 4 | X | 6 \n"));
}

#[test]
fn test_play_game_returns_result() {
    let mut console = Console::new(
        Cursor::new("7\n1\n8\n2\n9\n"),
        Vec::new(),
        ConsoleConfig::default(),
    );
    let result = console.play_game().unwrap();
    assert_eq!(result, Some(GameResult::Win(Mark::X)));
    assert_eq!(console.session().move_count(), 5);
}

#[test]
fn test_play_game_end_of_input() {
    let mut console = Console::new(Cursor::new("5\n"), Vec::new(), ConsoleConfig::default());
    assert_eq!(console.play_game().unwrap(), None);
    assert_eq!(console.session().move_count(), 1);
}
