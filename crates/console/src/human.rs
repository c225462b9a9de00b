//! Moves typed at the terminal.

use std::io::{BufRead, Write};

use log::{debug, warn};
use reversi_core::{format_moves, parse_move, Board, Color, Move, Player};

pub const INVALID_MOVE: &str = "Invalid move. Try again.";

/// Reads `D3`-style coordinates from `input` until a legal move arrives.
///
/// Malformed text and illegal squares are reported on `output` and the
/// player asks again. End of input yields `None`. A single instance can
/// serve both colours when two people share one terminal.
pub struct InteractivePlayer<R: BufRead, W: Write> {
    input: R,
    output: W,
    name: String,
}

impl<R: BufRead, W: Write> InteractivePlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_name(input, output, "Human")
    }

    pub fn with_name(input: R, output: W, name: impl Into<String>) -> Self {
        Self {
            input,
            output,
            name: name.into(),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                warn!("reading move failed: {e}");
                None
            }
        }
    }

    fn ask(&mut self, board: &Board, color: Color) -> std::io::Result<Option<Move>> {
        let valid = board.get_valid_moves(color);
        if valid.is_empty() {
            return Ok(None);
        }
        loop {
            writeln!(self.output, "Valid moves: {}", format_moves(&valid))?;
            write!(self.output, "Enter your move (colrow): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line() else {
                writeln!(self.output)?;
                return Ok(None);
            };
            match parse_move(&line) {
                Ok(mv) if valid.contains(&mv) => {
                    debug!("{} plays {mv} for {color}", self.name);
                    return Ok(Some(mv));
                }
                Ok(_) => writeln!(self.output, "{INVALID_MOVE}")?,
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for InteractivePlayer<R, W> {
    fn get_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        match self.ask(board, color) {
            Ok(mv) => mv,
            Err(e) => {
                warn!("terminal output failed: {e}");
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
#[path = "human_tests.rs"]
mod human_tests;
