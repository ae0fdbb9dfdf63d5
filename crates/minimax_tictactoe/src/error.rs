//! Error types for moves, games and the score ledger.

use derive_more::{Display, Error, From};
use tracing::instrument;

use crate::Position;

/// A move rejected by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The number is not a board position.
    #[display("Position {} is out of range (must be 1-9)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("Position {} is already occupied", _0.number())]
    Occupied(#[error(not(source))] Position),
}

/// Error returned by the game controller.
#[derive(Debug, Clone, Display, Error, From)]
pub enum GameError {
    /// The game has finished; reset before playing again.
    #[display("Game is already over")]
    GameOver,

    /// The side to move is played by the search engine.
    #[display("It is the computer's turn")]
    NotExternalTurn,

    /// The side to move is played by a human.
    #[display("It is not the computer's turn")]
    NotComputerTurn,

    /// The board rejected the move; the game state is unchanged.
    #[display("Invalid move: {}", _0)]
    #[from]
    InvalidMove(MoveError),

    /// The game finished but its outcome could not be persisted.
    #[display("Game finished but the score was not saved: {}", _0)]
    #[from]
    Ledger(LedgerError),
}

/// Score ledger persistence error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Ledger error: {} at {}:{}", message, file, line)]
pub struct LedgerError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LedgerError {
    /// Creates a new ledger error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for LedgerError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for LedgerError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

impl From<tempfile::PersistError> for LedgerError {
    #[track_caller]
    fn from(err: tempfile::PersistError) -> Self {
        Self::new(format!("Failed to replace ledger file: {}", err.error))
    }
}
