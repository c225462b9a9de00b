//! Perft node counts from the standard start position.

use reversi_core::{perft, Board, Color};

/// Known leaf counts for depths 1..=6 (no passes occur this early).
const START_PERFT: [(u8, u64); 6] = [(1, 4), (2, 12), (3, 56), (4, 244), (5, 1396), (6, 8200)];

#[test]
fn perft_from_start_position() {
    for (depth, expected) in START_PERFT {
        let mut board = Board::new();
        let got = perft(&mut board, Color::Black, depth);
        assert_eq!(
            got, expected,
            "Perft mismatch at depth {depth}: expected {expected}, got {got}"
        );
        assert_eq!(board, Board::new(), "perft must leave the board untouched");
    }
}

#[test]
fn perft_depth_zero_is_one() {
    let mut board = Board::new();
    assert_eq!(perft(&mut board, Color::Black, 0), 1);
}

#[test]
fn perft_terminal_position_is_a_leaf() {
    let mut board = Board::from_rows(&["BBBBBBBB"; 8]).unwrap();
    assert_eq!(perft(&mut board, Color::White, 5), 1);
}
