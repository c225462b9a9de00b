//! Plain-text board rendering.

use std::io::{self, Write};

use reversi_core::{all_squares, Board, Color, Move, Outcome};

pub const HINT: char = '*';

fn disc(color: Color) -> char {
    match color {
        Color::Black => 'B',
        Color::White => 'W',
    }
}

/// Draws boards and game messages on `W`.
pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Grid with column letters and row numbers, then disc counts. Legal
    /// moves for `hints` are marked with `*`.
    pub fn board(&mut self, board: &Board, hints: Option<Color>) -> io::Result<()> {
        let valid: Vec<Move> = hints.map(|c| board.get_valid_moves(c)).unwrap_or_default();
        writeln!(self.out)?;
        writeln!(self.out, "    A B C D E F G H")?;
        let mut squares = all_squares();
        for row in 1..=8 {
            write!(self.out, "{row:>2} ")?;
            for mv in squares.by_ref().take(8) {
                let ch = match board.cell(mv) {
                    Some(color) => disc(color),
                    None if valid.contains(&mv) => HINT,
                    None => '.',
                };
                write!(self.out, " {ch}")?;
            }
            writeln!(self.out)?;
        }
        let (black, white) = board.count_discs();
        writeln!(self.out, "\nBlack (B): {black}   White (W): {white}")?;
        Ok(())
    }

    pub fn turn(&mut self, color: Color, name: &str) -> io::Result<()> {
        writeln!(self.out, "Current player: {color} ({name})")
    }

    pub fn played(&mut self, color: Color, mv: Move, flipped: usize) -> io::Result<()> {
        writeln!(self.out, "{color} plays {mv}, flipping {flipped}")
    }

    pub fn skipped(&mut self, color: Color) -> io::Result<()> {
        writeln!(self.out, "No valid moves available for {color}, skipping turn.")
    }

    pub fn outcome(&mut self, outcome: Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Winner(color) => writeln!(self.out, "{color} wins!"),
            Outcome::Draw => writeln!(self.out, "It's a tie!"),
        }
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
