//! Turn bookkeeping for a full game: side to move, forced passes, result.

use serde::{Deserialize, Serialize};

use crate::{board::Board, error::GameError, types::*};

/// Final result once neither side can move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Color),
    Draw,
}

/// A game in progress.
///
/// After every placement the turn passes to the opponent, or straight back
/// to the mover when the opponent has no legal move. `to_move` is `None`
/// exactly when the board is terminal.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Option<Color>,
    placements: u32,
    passes: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Start position, Black to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::Black)
    }

    pub fn from_board(board: Board, to_move: Color) -> Self {
        let mut game = Self {
            board,
            to_move: Some(to_move),
            placements: 0,
            passes: 0,
        };
        game.settle_turn(to_move);
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Option<Color> {
        self.to_move
    }

    pub fn is_over(&self) -> bool {
        self.to_move.is_none()
    }

    pub fn placements(&self) -> u32 {
        self.placements
    }

    pub fn passes(&self) -> u32 {
        self.passes
    }

    /// Places a disc for the side to move. Returns the number of flipped discs.
    pub fn play(&mut self, mv: Move) -> Result<usize, GameError> {
        let Some(color) = self.to_move else {
            return Err(GameError::GameOver);
        };
        let flipped = self.board.apply_move(mv, color)?;
        self.placements += 1;
        self.settle_turn(color.other());
        Ok(flipped)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_over() {
            return None;
        }
        let (black, white) = self.board.count_discs();
        Some(match black.cmp(&white) {
            std::cmp::Ordering::Greater => Outcome::Winner(Color::Black),
            std::cmp::Ordering::Less => Outcome::Winner(Color::White),
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }

    fn settle_turn(&mut self, next: Color) {
        self.to_move = if self.board.has_valid_move(next) {
            Some(next)
        } else if self.board.has_valid_move(next.other()) {
            self.passes += 1;
            Some(next.other())
        } else {
            None
        };
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
