use reversi_core::{Game, Move};

use super::*;

#[test]
fn random_player_returns_legal_move() {
    let mut player = RandomPlayer::new();
    let board = Board::new();
    let mv = player.get_move(&board, Color::Black).unwrap();
    assert!(board.get_valid_moves(Color::Black).contains(&mv));
    assert!(!player.is_search_based());
}

#[test]
fn random_player_returns_none_without_moves() {
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
    let mut player = RandomPlayer::with_seed(1);
    assert_eq!(player.get_move(&board, Color::White), None);
    assert_eq!(player.get_move(&board, Color::Black), Some(Move::new(0, 2).unwrap()));
}

#[test]
fn seeded_players_repeat_their_games() {
    let play = |seed| {
        let mut player = RandomPlayer::with_seed(seed);
        let mut game = Game::new();
        let mut moves = Vec::new();
        while let Some(color) = game.to_move() {
            let mv = player.get_move(game.board(), color).unwrap();
            game.play(mv).unwrap();
            moves.push(mv);
        }
        moves
    };
    assert_eq!(play(99), play(99));
    assert_ne!(play(1), play(2));
}

#[test]
fn random_player_covers_all_openings() {
    let mut player = RandomPlayer::with_seed(5);
    let board = Board::new();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(player.get_move(&board, Color::Black).unwrap());
    }
    assert_eq!(seen.len(), 4);
}
