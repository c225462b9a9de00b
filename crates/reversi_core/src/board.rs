use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::bitboard::{Bitboard, BitboardIter};
use crate::error::GameError;
use crate::movegen::{flips_for, has_legal_move, is_legal, legal_moves};
use crate::types::*;

/// Discs flipped by one placement.
///
/// Returned by [`Board::make_move`] and required by [`Board::undo_move`] to
/// restore the prior position exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flips(pub(crate) Bitboard);

impl Flips {
    pub const NONE: Flips = Flips(Bitboard::EMPTY);

    pub fn len(self) -> usize {
        self.0.popcount() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(self, mv: Move) -> bool {
        self.0.contains(mv)
    }

    pub fn bits(self) -> Bitboard {
        self.0
    }

    pub fn iter(self) -> BitboardIter {
        self.0.iter()
    }
}

/// Canonical board contents used as a hash key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoardKey {
    pub black: Bitboard,
    pub white: Bitboard,
}

/// The 8x8 grid. `None` is an empty cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Color>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard start: White on D4/E5, Black on E4/D5.
    pub fn new() -> Self {
        let mut b = Self::empty();
        b.cells[Move::at(3, 3).index()] = Some(Color::White);
        b.cells[Move::at(3, 4).index()] = Some(Color::Black);
        b.cells[Move::at(4, 3).index()] = Some(Color::Black);
        b.cells[Move::at(4, 4).index()] = Some(Color::White);
        b
    }

    pub fn empty() -> Self {
        Self { cells: [None; 64] }
    }

    /// Parses eight rows of `B`, `W` and `.` (or `-`). Whitespace inside a
    /// row is ignored, so `"B . . W . . . ."` and `"B..W...."` are equal.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GameError> {
        if rows.len() != 8 {
            return Err(GameError::Parse(format!("expected 8 rows, got {}", rows.len())));
        }
        let mut b = Self::empty();
        for (r, line) in rows.iter().enumerate() {
            let mut c = 0u8;
            for ch in line.chars().filter(|ch| !ch.is_whitespace()) {
                if c >= 8 {
                    return Err(GameError::Parse(format!("row {} is longer than 8 cells", r + 1)));
                }
                let cell = match ch {
                    'B' | 'b' | 'X' | 'x' => Some(Color::Black),
                    'W' | 'w' | 'O' | 'o' => Some(Color::White),
                    '.' | '-' => None,
                    other => {
                        return Err(GameError::Parse(format!(
                            "unexpected '{other}' in row {}",
                            r + 1
                        )));
                    }
                };
                b.cells[Move::at(r as u8, c).index()] = cell;
                c += 1;
            }
            if c != 8 {
                return Err(GameError::Parse(format!("row {} has {c} cells", r + 1)));
            }
        }
        Ok(b)
    }

    #[inline]
    pub fn cell(&self, mv: Move) -> Option<Color> {
        self.cells[mv.index()]
    }

    /// Overwrites a cell without any legality check. Setup only.
    pub fn set_cell(&mut self, mv: Move, cell: Option<Color>) {
        self.cells[mv.index()] = cell;
    }

    /// Read-only row-major snapshot for renderers.
    pub fn grid(&self) -> [[Option<Color>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for mv in all_squares() {
            grid[mv.row() as usize][mv.col() as usize] = self.cell(mv);
        }
        grid
    }

    pub fn get_valid_moves(&self, color: Color) -> Vec<Move> {
        legal_moves(self, color)
    }

    pub fn has_valid_move(&self, color: Color) -> bool {
        has_legal_move(self, color)
    }

    pub fn is_valid_move(&self, mv: Move, color: Color) -> bool {
        is_legal(self, mv, color)
    }

    /// Places a disc and flips every flanked run. Returns the number of
    /// discs flipped.
    pub fn apply_move(&mut self, mv: Move, color: Color) -> Result<usize, GameError> {
        self.make_move(mv, color).map(Flips::len)
    }

    /// Reversible placement. The returned [`Flips`] must be handed back to
    /// [`Board::undo_move`] with the same move and color, most recent first.
    /// Prefer [`Board::play`], which enforces that ordering.
    pub fn make_move(&mut self, mv: Move, color: Color) -> Result<Flips, GameError> {
        let flips = flips_for(self, mv, color);
        if flips.is_empty() {
            return Err(GameError::IllegalMove { mv, color });
        }
        self.cells[mv.index()] = Some(color);
        for sq in flips.iter() {
            self.cells[sq.index()] = Some(color);
        }
        Ok(flips)
    }

    pub fn undo_move(&mut self, mv: Move, flips: Flips, color: Color) {
        debug_assert_eq!(self.cell(mv), Some(color), "undo of {mv} out of order");
        self.cells[mv.index()] = None;
        let opponent = Some(color.other());
        for sq in flips.iter() {
            debug_assert_eq!(self.cell(sq), Some(color));
            self.cells[sq.index()] = opponent;
        }
    }

    /// Scoped placement: the move is undone when the guard drops.
    ///
    /// A nested `play` borrows from its parent guard, so children are always
    /// undone before their parent.
    pub fn play(&mut self, mv: Move, color: Color) -> Result<Played<'_>, GameError> {
        let flips = self.make_move(mv, color)?;
        Ok(Played {
            board: self,
            mv,
            color,
            flips,
        })
    }

    /// Neither side can place a disc.
    pub fn is_terminal(&self) -> bool {
        !has_legal_move(self, Color::Black) && !has_legal_move(self, Color::White)
    }

    /// Exact disc differential from `color`'s point of view.
    pub fn score(&self, color: Color) -> i32 {
        let (black, white) = self.count_discs();
        let diff = black as i32 - white as i32;
        match color {
            Color::Black => diff,
            Color::White => -diff,
        }
    }

    /// `(black, white)`
    pub fn count_discs(&self) -> (u32, u32) {
        let key = self.key();
        (key.black.popcount(), key.white.popcount())
    }

    pub fn empty_count(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_none()).count() as u32
    }

    pub fn discs(&self, color: Color) -> Bitboard {
        let key = self.key();
        match color {
            Color::Black => key.black,
            Color::White => key.white,
        }
    }

    pub fn key(&self) -> BoardKey {
        let mut black = Bitboard::EMPTY;
        let mut white = Bitboard::EMPTY;
        for (i, cell) in self.cells.iter().enumerate() {
            match cell {
                Some(Color::Black) => black.0 |= 1u64 << i,
                Some(Color::White) => white.0 |= 1u64 << i,
                None => {}
            }
        }
        BoardKey { black, white }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  A B C D E F G H")?;
        for r in 0..8u8 {
            write!(f, "{}", r + 1)?;
            for c in 0..8u8 {
                let ch = match self.cell(Move::at(r, c)) {
                    Some(Color::Black) => 'B',
                    Some(Color::White) => 'W',
                    None => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Guard returned by [`Board::play`]. Derefs to the board in its
/// post-move state.
#[must_use = "the move is undone as soon as the guard is dropped"]
pub struct Played<'a> {
    board: &'a mut Board,
    mv: Move,
    color: Color,
    flips: Flips,
}

impl Played<'_> {
    pub fn flips(&self) -> Flips {
        self.flips
    }

    pub fn mv(&self) -> Move {
        self.mv
    }
}

impl Deref for Played<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Played<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Played<'_> {
    fn drop(&mut self) {
        self.board.undo_move(self.mv, self.flips, self.color);
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
