use crate::{
    bitboard::Bitboard,
    board::{Board, Flips},
    types::*,
};

/// Generate all legal moves, returning a freshly allocated vector in
/// row-major order.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(board, color, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(board: &Board, color: Color, out: &mut Vec<Move>) {
    out.clear();
    out.extend(all_squares().filter(|&mv| is_legal(board, mv, color)));
}

/// Number of legal moves without collecting them.
pub fn legal_move_count(board: &Board, color: Color) -> usize {
    all_squares().filter(|&mv| is_legal(board, mv, color)).count()
}

pub fn has_legal_move(board: &Board, color: Color) -> bool {
    all_squares().any(|mv| is_legal(board, mv, color))
}

/// Empty square with at least one flanked opponent run in some direction.
pub fn is_legal(board: &Board, mv: Move, color: Color) -> bool {
    if board.cell(mv).is_some() {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| !run_flanked(board, mv, color, dr, dc).is_empty())
}

/// Every disc that placing `color` on `mv` would flip. Empty when the move
/// is illegal.
pub fn flips_for(board: &Board, mv: Move, color: Color) -> Flips {
    if board.cell(mv).is_some() {
        return Flips::NONE;
    }
    let mut flips = Bitboard::EMPTY;
    for (dr, dc) in DIRECTIONS {
        flips |= run_flanked(board, mv, color, dr, dc);
    }
    Flips(flips)
}

/// Opponent discs from `mv` in one direction, if a friendly disc closes the run.
fn run_flanked(board: &Board, mv: Move, color: Color, dr: i8, dc: i8) -> Bitboard {
    let opponent = color.other();
    let mut run = Bitboard::EMPTY;
    let mut cur = mv.offset(dr, dc);
    while let Some(sq) = cur {
        match board.cell(sq) {
            Some(c) if c == opponent => {
                run.set(sq);
                cur = sq.offset(dr, dc);
            }
            Some(_) => return run,
            None => break,
        }
    }
    Bitboard::EMPTY
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
