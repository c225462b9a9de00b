use super::*;

fn rendered(board: &Board, hints: Option<Color>) -> String {
    let mut r = Renderer::new(Vec::new());
    r.board(board, hints).unwrap();
    String::from_utf8(r.into_inner()).unwrap()
}

#[test]
fn test_start_position_layout() {
    let text = rendered(&Board::new(), None);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], "    A B C D E F G H");
    assert_eq!(lines[2], " 1  . . . . . . . .");
    assert_eq!(lines[5], " 4  . . . W B . . .");
    assert_eq!(lines[6], " 5  . . . B W . . .");
    assert!(text.contains("Black (B): 2   White (W): 2"));
    assert!(!text.contains(HINT));
}

#[test]
fn test_hints_mark_legal_moves() {
    let text = rendered(&Board::new(), Some(Color::Black));
    assert_eq!(text.matches(HINT).count(), 4);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[4], " 3  . . . * . . . .");
}

#[test]
fn test_messages() {
    let mut r = Renderer::new(Vec::new());
    r.turn(Color::White, "AI depth 3").unwrap();
    r.skipped(Color::Black).unwrap();
    r.played(Color::Black, Move::new(2, 3).unwrap(), 1).unwrap();
    r.outcome(Outcome::Draw).unwrap();
    r.outcome(Outcome::Winner(Color::Black)).unwrap();
    let text = String::from_utf8(r.into_inner()).unwrap();
    assert_eq!(
        text,
        "Current player: White (AI depth 3)\n\
         No valid moves available for Black, skipping turn.\n\
         Black plays D3, flipping 1\n\
         It's a tie!\n\
         Black wins!\n"
    );
}
