//! Game session engine for tic-tac-toe.
//!
//! A [`GameSession`] is an explicit value owned by its caller. It holds the
//! board, the mark to move and the history of accepted moves; the result
//! is recomputed from the board whenever it is asked for.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::phases::GameResult;
use super::position::Position;
use super::rules;
use super::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game session.
///
/// Deserializing replays the recorded history, so a payload whose board or
/// turn disagrees with its moves is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct GameSession {
    board: Board,
    current_player: Mark,
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            history: Vec::new(),
        }
    }

    /// Resets this session to a fresh game.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn new_game(&mut self) {
        info!("Starting new game");
        *self = Self::new();
    }

    /// Places the current mark at the numbered position (1-9).
    ///
    /// Returns the result after the move. Rejected moves leave the session
    /// untouched.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyOver`] if the game has been won or tied
    /// - [`MoveError::InvalidPosition`] if `number` is outside 1-9
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, number: u8) -> Result<GameResult, MoveError> {
        self.ensure_in_progress()?;
        let position = Position::try_from(number).inspect_err(|e| {
            warn!(error = %e, "Rejected move");
        })?;
        self.place(position)
    }

    /// Places the current mark at `position`.
    ///
    /// Same as [`GameSession::apply_move`] for callers that already hold a
    /// [`Position`].
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place(&mut self, position: Position) -> Result<GameResult, MoveError> {
        self.ensure_in_progress()?;

        if !self.board.is_empty(position) {
            let err = MoveError::CellOccupied(position);
            warn!(error = %err, "Rejected move");
            return Err(err);
        }

        let mark = self.current_player;
        self.board.set(position, Cell::Occupied(mark));
        self.history.push(Move::new(mark, position));

        let result = self.current_result();
        if !result.is_terminal() {
            self.current_player = mark.opponent();
        }

        debug_assert!(
            TicTacToeInvariants::check_all(&*self).is_ok(),
            "Session invariants violated after {}",
            position
        );

        match result {
            GameResult::InProgress => debug!(%mark, %position, "Move accepted"),
            _ => info!(%mark, %position, %result, "Game over"),
        }

        Ok(result)
    }

    /// Returns the result derived from the current board.
    pub fn current_result(&self) -> GameResult {
        rules::evaluate(&self.board)
    }

    /// Returns the mark to move.
    ///
    /// Once the game is over this is the mark that made the final move.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns true once the game has been won or tied.
    pub fn is_over(&self) -> bool {
        self.current_result().is_terminal()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cell at `position`.
    pub fn cell(&self, position: Position) -> Cell {
        self.board.get(position)
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of accepted moves.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the empty positions, or nothing once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Plays the numbered moves on a fresh session.
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument]
    pub fn replay(numbers: &[u8]) -> Result<Self, MoveError> {
        let mut session = Self::new();
        for &number in numbers {
            session.apply_move(number)?;
        }
        Ok(session)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn ensure_in_progress(&self) -> Result<(), MoveError> {
        if self.is_over() {
            warn!("Move attempted after game over");
            return Err(MoveError::GameAlreadyOver);
        }
        Ok(())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized form of a session, checked before it becomes one.
#[derive(Deserialize)]
struct SessionRecord {
    board: Board,
    current_player: Mark,
    history: Vec<Move>,
}

impl TryFrom<SessionRecord> for GameSession {
    type Error = SessionError;

    #[instrument(skip_all, fields(moves = record.history.len()))]
    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let mut session = Self::new();
        for &mv in &record.history {
            if mv.mark != session.current_player {
                return Err(SessionError::OutOfTurn(mv));
            }
            session.place(mv.position)?;
        }

        if session.board != record.board || session.current_player != record.current_player {
            warn!("Recorded board or turn disagrees with history");
            return Err(SessionError::StateMismatch);
        }
        Ok(session)
    }
}

/// Reason a recorded session could not be restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// A recorded move was rejected on replay.
    #[display("Recorded move rejected: {}", _0)]
    Rejected(MoveError),

    /// A recorded move was made by the mark not on turn.
    #[display("Recorded move out of turn: {}", _0)]
    OutOfTurn(Move),

    /// The recorded board or mark to move does not follow from the history.
    #[display("Recorded board or turn does not match the move history")]
    StateMismatch,
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::Rejected(err)
    }
}

impl std::error::Error for SessionError {}
