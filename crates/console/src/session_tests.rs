use std::io::Cursor;

use random_engine::RandomPlayer;
use reversi_core::{Board, Color};

use super::*;
use crate::human::InteractivePlayer;

fn output(session: Session<Vec<u8>>) -> String {
    String::from_utf8(session.into_renderer().into_inner()).unwrap()
}

#[test]
fn test_random_game_reaches_outcome() {
    let mut session = Session::new(
        Box::new(RandomPlayer::with_seed(1)),
        Box::new(RandomPlayer::with_seed(2)),
        Renderer::new(Vec::new()),
    );
    let outcome = session.run().unwrap();
    assert!(outcome.is_some());
    let text = output(session);
    assert!(text.starts_with("\nGame started!"));
    assert!(text.contains("Current player: Black (Random)"));
    assert!(text.ends_with("wins!\n") || text.ends_with("It's a tie!\n"));
}

#[test]
fn test_forced_pass_is_announced() {
    let board = Board::from_rows(&[
        ". W B . W B B B",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
    ])
    .unwrap();
    let human = InteractivePlayer::new(Cursor::new(b"A1\nD1\n".to_vec()), std::io::sink());
    let mut session = Session::shared(Box::new(human), Renderer::new(Vec::new()));
    let outcome = session.run_from(Game::from_board(board, Color::Black)).unwrap();
    assert_eq!(outcome, Some(Outcome::Winner(Color::Black)));
    let text = output(session);
    assert!(text.contains("Black plays A1, flipping 1"));
    assert!(text.contains("No valid moves available for White, skipping turn."));
    assert!(text.contains("Black plays D1, flipping 1"));
}

#[test]
fn test_closed_input_abandons_game() {
    let human = InteractivePlayer::new(Cursor::new(b"D3\n".to_vec()), std::io::sink());
    let mut session = Session::new(
        Box::new(human),
        Box::new(RandomPlayer::with_seed(3)),
        Renderer::new(Vec::new()),
    )
    .with_hints(true, false);
    assert_eq!(session.run().unwrap(), None);
    let text = output(session);
    assert!(text.contains("Human left the game."));
    assert!(text.contains(" 3  . . . * . . . ."));
}
