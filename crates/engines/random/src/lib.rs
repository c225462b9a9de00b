//! Random Move Reversi Player
//!
//! Picks uniformly among the legal moves. Serves as the weakest baseline in
//! benchmarks and as a fast opponent for exercising game plumbing.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use reversi_core::{legal_moves_into, Board, Color, Move, Player};

#[cfg(test)]
mod lib_tests;

#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
    moves: Vec<Move>,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            moves: Vec::with_capacity(32),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn get_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        legal_moves_into(board, color, &mut self.moves);
        self.moves.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Random"
    }
}
