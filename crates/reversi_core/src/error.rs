//! Error types for board operations and move notation.

use thiserror::Error;

use crate::types::{Color, Move};

/// Contract violations raised by the board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Coordinates outside the 8x8 grid
    #[error("square ({row}, {col}) is off the board")]
    OutOfRange { row: u8, col: u8 },

    /// Placement that does not flank any opponent run
    #[error("{mv} is not a legal move for {color}")]
    IllegalMove { mv: Move, color: Color },

    /// Move attempted after neither side can play
    #[error("the game is already over")]
    GameOver,

    /// Malformed text board
    #[error("invalid board text: {0}")]
    Parse(String),
}

/// Malformed human move input such as `Z9` or `D33`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Expected format: e.g. D3")]
    Format(String),

    #[error("Row must be between 1 and 8.")]
    Row(char),

    #[error("Column must be between A-H.")]
    Column(char),
}
