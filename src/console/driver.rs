//! Console game loop.

use super::render::{render_board, result_message};
use crate::config::ConsoleConfig;
use crate::games::tictactoe::{GameResult, GameSession, MoveError};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument};

const CHOOSE_PROMPT: &str = "Choose a position from 1-9: ";
const INVALID_PROMPT: &str = "Invalid input. Choose a position from 1-9: ";
const PLAY_AGAIN_PROMPT: &str = "Play again? (y/n): ";

/// Plays games over a line-based reader and a writer.
///
/// End of input at any prompt ends the program as if the player declined
/// to continue.
pub struct Console<R, W> {
    input: R,
    output: W,
    config: ConsoleConfig,
    session: GameSession,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console with a fresh session.
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Self {
        Self {
            input,
            output,
            config,
            session: GameSession::new(),
        }
    }

    /// Returns the session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Consumes the console and returns its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays games until the player declines another round.
    #[instrument(skip_all)]
    pub fn run(&mut self) -> io::Result<()> {
        let mut games = 0usize;
        loop {
            let Some(result) = self.play_game()? else {
                break;
            };
            games += 1;
            info!(games, %result, "Game finished");

            match self.prompt(PLAY_AGAIN_PROMPT)? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => continue,
                _ => break,
            }
        }

        writeln!(self.output, "Thanks for playing!")?;
        self.output.flush()
    }

    /// Plays one game from a fresh board to its end.
    ///
    /// Returns `None` if input ran out before the game finished.
    #[instrument(skip_all)]
    pub fn play_game(&mut self) -> io::Result<Option<GameResult>> {
        self.session.new_game();
        writeln!(self.output, "Welcome to Tic Tac Toe!")?;
        self.show_board()?;

        let mut result = self.session.current_result();
        while !result.is_terminal() {
            match self.take_turn()? {
                Some(next) => result = next,
                None => return Ok(None),
            }
        }

        if let Some(message) = result_message(result) {
            writeln!(self.output, "{}", message)?;
        }
        Ok(Some(result))
    }

    /// Asks the current player for a position until the engine accepts one.
    fn take_turn(&mut self) -> io::Result<Option<GameResult>> {
        writeln!(self.output, "{}'s turn.", self.session.current_player())?;

        let mut prompt = CHOOSE_PROMPT;
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };

            let Some(number) = parse_digit(&line) else {
                debug!(input = %line.trim_end(), "Input is not a position number");
                prompt = INVALID_PROMPT;
                continue;
            };

            match self.session.apply_move(number) {
                Ok(result) => {
                    self.show_board()?;
                    return Ok(Some(result));
                }
                Err(MoveError::InvalidPosition(_)) => prompt = INVALID_PROMPT,
                Err(MoveError::CellOccupied(_)) => {
                    writeln!(self.output, "You can't go there. Go again.")?;
                    prompt = CHOOSE_PROMPT;
                }
                Err(MoveError::GameAlreadyOver) => {
                    return Ok(Some(self.session.current_result()));
                }
            }
        }
    }

    fn show_board(&mut self) -> io::Result<()> {
        let board = render_board(self.session.board(), *self.config.show_position_hints());
        write!(self.output, "{}", board)
    }

    /// Writes `text` and reads one line, `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Accepts exactly one ASCII digit, ignoring the line ending.
///
/// Range checking is left to the engine, so `0` parses and is then
/// rejected as an invalid position.
fn parse_digit(line: &str) -> Option<u8> {
    match line.trim_end_matches(['\r', '\n']).as_bytes() {
        [digit @ b'0'..=b'9'] => Some(digit - b'0'),
        _ => None,
    }
}
