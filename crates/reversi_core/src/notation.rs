//! Human-facing move notation: column letter A-H then row 1-8, e.g. `D3`.

use crate::{error::NotationError, types::Move};

pub fn format_move(mv: Move) -> String {
    mv.to_string()
}

/// Parses `D3`-style input. Case-insensitive; spaces and commas are ignored
/// so `d, 3` is accepted too.
pub fn parse_move(text: &str) -> Result<Move, NotationError> {
    let cleaned: Vec<char> = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let &[col_ch, row_ch] = cleaned.as_slice() else {
        return Err(NotationError::Format(text.to_string()));
    };
    if !col_ch.is_ascii_alphabetic() || !row_ch.is_ascii_digit() {
        return Err(NotationError::Format(text.to_string()));
    }
    if !('1'..='8').contains(&row_ch) {
        return Err(NotationError::Row(row_ch));
    }
    if !('A'..='H').contains(&col_ch) {
        return Err(NotationError::Column(col_ch));
    }

    let row = row_ch as u8 - b'1';
    let col = col_ch as u8 - b'A';
    Move::new(row, col).map_err(|_| NotationError::Format(text.to_string()))
}

/// Formats a list of moves as `C4, D3, E6`.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|mv| mv.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
