use super::*;
use crate::board::Board;

#[test]
fn test_startpos_moves() {
    let b = Board::new();
    let moves = legal_moves(&b, Color::Black);
    // D3, C4, F5, E6
    assert_eq!(moves.len(), 4);
    let expected: Vec<Move> = [(2, 3), (3, 2), (4, 5), (5, 4)]
        .iter()
        .map(|&(r, c)| Move::new(r, c).unwrap())
        .collect();
    assert_eq!(moves, expected);
}

#[test]
fn test_startpos_white_moves_mirror_black() {
    let b = Board::new();
    assert_eq!(legal_moves(&b, Color::White).len(), 4);
}

#[test]
fn test_flips_for_illegal_is_empty() {
    let b = Board::new();
    assert!(flips_for(&b, Move::new(0, 0).unwrap(), Color::Black).is_empty());
    assert!(flips_for(&b, Move::new(3, 3).unwrap(), Color::Black).is_empty());
}

#[test]
fn test_run_must_be_closed_by_own_disc() {
    // W W W to the board edge with nothing behind: not a capture.
    let b = Board::from_rows(&[
        ". W W W W W W W",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
    ])
    .unwrap();
    assert!(legal_moves(&b, Color::Black).is_empty());
    assert!(!has_legal_move(&b, Color::Black));
}

#[test]
fn test_legal_moves_into_reuses_buffer() {
    let b = Board::new();
    let mut buf = vec![Move::new(7, 7).unwrap(); 10];
    legal_moves_into(&b, Color::Black, &mut buf);
    assert_eq!(buf.len(), 4);
}

#[test]
fn test_legal_move_count_matches_list() {
    let mut b = Board::new();
    b.apply_move(Move::new(2, 3).unwrap(), Color::Black).unwrap();
    assert_eq!(
        legal_move_count(&b, Color::White),
        legal_moves(&b, Color::White).len()
    );
}
