use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    pub fn other(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A board coordinate. Row and column are both in `0..8`.
///
/// The fields are private so every `Move` in circulation is in range; the
/// human-facing `D3` form only appears through [`fmt::Display`] and
/// [`crate::notation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    row: u8,
    col: u8,
}

impl Move {
    pub fn new(row: u8, col: u8) -> Result<Self, GameError> {
        if row < 8 && col < 8 {
            Ok(Self { row, col })
        } else {
            Err(GameError::OutOfRange { row, col })
        }
    }

    /// Square index 0..63, row-major from the top-left corner.
    pub fn from_index(index: u8) -> Option<Self> {
        (index < 64).then_some(Self {
            row: index / 8,
            col: index % 8,
        })
    }

    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn index(self) -> usize {
        (self.row * 8 + self.col) as usize
    }

    /// Neighbouring square one step in `(dr, dc)`, if still on the board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Move> {
        sq(self.row as i8 + dr, self.col as i8 + dc)
    }

    pub fn is_corner(self) -> bool {
        CORNERS.contains(&self)
    }

    pub fn is_edge(self) -> bool {
        self.row == 0 || self.row == 7 || self.col == 0 || self.col == 7
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row + 1)
    }
}

/// The eight compass directions as `(row, col)` deltas.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const CORNERS: [Move; 4] = [
    Move::at(0, 0),
    Move::at(0, 7),
    Move::at(7, 0),
    Move::at(7, 7),
];

/// Squares around each corner, grouped as `[corner, x_square, c_square, c_square]`.
pub const CORNER_GROUPS: [[Move; 4]; 4] = [
    [Move::at(0, 0), Move::at(1, 1), Move::at(0, 1), Move::at(1, 0)],
    [Move::at(0, 7), Move::at(1, 6), Move::at(0, 6), Move::at(1, 7)],
    [Move::at(7, 0), Move::at(6, 1), Move::at(6, 0), Move::at(7, 1)],
    [Move::at(7, 7), Move::at(6, 6), Move::at(6, 7), Move::at(7, 6)],
];

// Helpers
pub fn sq(row: i8, col: i8) -> Option<Move> {
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some(Move::at(row as u8, col as u8))
    } else {
        None
    }
}

/// Every square in row-major order.
pub fn all_squares() -> impl Iterator<Item = Move> {
    (0..64u8).map(|i| Move::at(i / 8, i % 8))
}
