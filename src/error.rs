//! Error types for the tic-tac-toe crate

use std::fmt;

use thiserror::Error;

use crate::board::Mark;

/// Why a move was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfBounds,
    Occupied,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveReason::OutOfBounds => write!(f, "outside the board"),
            InvalidMoveReason::Occupied => write!(f, "already occupied"),
        }
    }
}

/// Main error type for the crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: ({row}, {col}) is {reason}")]
    InvalidMove {
        row: i32,
        col: i32,
        reason: InvalidMoveReason,
    },

    #[error("game already over")]
    GameOver,

    #[error("not {0}'s turn")]
    NotYourTurn(Side),

    #[error("board '{context}' is not {expected}x{expected}")]
    InvalidBoardShape { expected: usize, context: String },

    #[error("invalid character '{character}' at row {row}, column {col}")]
    InvalidCellCharacter {
        character: char,
        row: usize,
        col: usize,
    },
}

impl Error {
    /// True for the errors a turn controller answers by re-prompting.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, Error::InvalidMove { .. })
    }
}

/// Named side, for error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Side(pub Mark);

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Mark::Human => write!(f, "the human"),
            Mark::Engine => write!(f, "the engine"),
            Mark::Empty => write!(f, "nobody"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
