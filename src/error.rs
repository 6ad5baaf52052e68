//! Error types for the match driver.

use derive_more::{Display, Error, From};
use heuristic_tictactoe::{BoardError, Mark};
use tracing::instrument;

/// Reason a proposed move was refused. Not fatal: the driver asks again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum IllegalMove {
    /// Index outside 0-8.
    #[display("I require an integer, 0-8!")]
    OutOfRange(#[error(not(source))] usize),

    /// Square already holds a mark.
    #[display("Players cannot play where there is already a mark!")]
    Occupied(#[error(not(source))] usize),
}

/// A match could not be completed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum MatchError {
    /// Both agents were bound to the same mark.
    #[display("both agents play {}", _0)]
    DuplicateMark(#[error(not(source))] Mark),

    /// An agent kept proposing illegal moves.
    #[display("player {} proposed {} illegal moves in a row", mark, attempts)]
    TooManyInvalidMoves {
        /// Offending agent's mark.
        mark: Mark,
        /// Number of consecutive illegal proposals.
        attempts: u32,
    },

    /// Starting board is not reachable by alternating moves from X.
    #[display("board holds {} X and {} O; X must have as many marks as O or one more", x, o)]
    InvalidBoard {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },

    /// An agent failed to produce a move at all (e.g. input closed).
    #[display("player {} could not move: {}", mark, message)]
    Agent {
        /// Failing agent's mark.
        mark: Mark,
        /// Rendered cause.
        message: String,
    },

    /// Writing to the board failed.
    #[from]
    #[display("{}", _0)]
    Board(BoardError),
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
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
