use std::io::Cursor;

use super::*;

fn play(input: &str, board: &Board, color: Color) -> (Option<Move>, String) {
    let mut player = InteractivePlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mv = player.get_move(board, color);
    let (_, out) = player.into_inner();
    (mv, String::from_utf8(out).unwrap())
}

#[test]
fn test_accepts_legal_move() {
    let (mv, out) = play("d3\n", &Board::new(), Color::Black);
    assert_eq!(mv, Some(Move::new(2, 3).unwrap()));
    assert!(out.contains("Valid moves: D3, C4, F5, E6"));
}

#[test]
fn test_reprompts_with_distinct_messages() {
    let (mv, out) = play("hello\nD9\nZ3\nA1\n c 4 \n", &Board::new(), Color::Black);
    assert_eq!(mv, Some(Move::new(3, 2).unwrap()));
    let errors: Vec<&str> = out
        .lines()
        .map(|l| l.trim_start_matches("Enter your move (colrow): "))
        .filter(|l| !l.starts_with("Valid moves") && !l.trim().is_empty())
        .collect();
    assert_eq!(
        errors,
        [
            "Expected format: e.g. D3",
            "Row must be between 1 and 8.",
            "Column must be between A-H.",
            INVALID_MOVE,
        ]
    );
    assert_eq!(out.matches("Valid moves").count(), 5);
}

#[test]
fn test_end_of_input_gives_up() {
    let (mv, _) = play("", &Board::new(), Color::Black);
    assert_eq!(mv, None);
    let (mv, _) = play("Q\n", &Board::new(), Color::White);
    assert_eq!(mv, None);
}

#[test]
fn test_no_moves_returns_none_without_prompting() {
    let board = Board::from_rows(&[
        "B W . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
    ])
    .unwrap();
    let (mv, out) = play("C1\n", &board, Color::White);
    assert_eq!(mv, None);
    assert!(out.is_empty());
}

#[test]
fn test_one_player_serves_both_colours() {
    let mut player =
        InteractivePlayer::new(Cursor::new(b"D3\nC3\n".to_vec()), std::io::sink());
    let mut board = Board::new();
    let black = player.get_move(&board, Color::Black).unwrap();
    board.apply_move(black, Color::Black).unwrap();
    let white = player.get_move(&board, Color::White).unwrap();
    assert_eq!(white, Move::new(2, 2).unwrap());
    assert!(!player.is_search_based());
}
