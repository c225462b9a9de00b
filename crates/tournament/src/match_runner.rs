//! Silent single games between two benchmark players.

use std::time::{Duration, Instant};

use chrono::Local;
use log::{debug, warn};
use reversi_core::{Color, Game, Player};
use serde::{Deserialize, Serialize};

use crate::{config::PlayerSpec, error::BenchError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Winner {
    Black,
    White,
    Tie,
}

impl Winner {
    pub fn as_str(self) -> &'static str {
        match self {
            Winner::Black => "BLACK",
            Winner::White => "WHITE",
            Winner::Tie => "TIE",
        }
    }
}

/// One finished benchmark game. Player 1 always plays Black.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// RFC 3339 local time at the end of the game.
    pub timestamp: String,
    pub player1_type: String,
    pub player1_depth: Option<u8>,
    pub player2_type: String,
    pub player2_depth: Option<u8>,
    pub winner: Winner,
    pub black_score: u32,
    pub white_score: u32,
    pub winner_score: u32,
    pub loser_score: u32,
    /// Seconds, rounded to milliseconds.
    pub player1_total_time: f64,
    pub player1_moves: u32,
    pub player1_avg_time_ms: f64,
    pub player2_total_time: f64,
    pub player2_moves: u32,
    pub player2_avg_time_ms: f64,
}

#[derive(Debug, Default, Clone, Copy)]
struct Clock {
    total: Duration,
    moves: u32,
}

impl Clock {
    fn total_secs(&self) -> f64 {
        round_to(self.total.as_secs_f64(), 3)
    }

    fn avg_ms(&self) -> f64 {
        if self.moves == 0 {
            return 0.0;
        }
        round_to(self.total.as_secs_f64() * 1000.0 / f64::from(self.moves), 1)
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// A game between two fresh players with per-move timing.
pub struct BenchmarkGame {
    specs: [PlayerSpec; 2],
    players: [Box<dyn Player>; 2],
}

impl BenchmarkGame {
    /// Build both players. With a seed, player 1 uses `seed` and player 2
    /// uses `seed + 1`.
    pub fn new(player1: PlayerSpec, player2: PlayerSpec, seed: Option<u64>) -> Self {
        Self {
            players: [
                player1.build(seed),
                player2.build(seed.map(|s| s.wrapping_add(1))),
            ],
            specs: [player1, player2],
        }
    }

    /// Play to the end without output.
    pub fn run(mut self) -> Result<GameRecord, BenchError> {
        for player in &mut self.players {
            player.new_game();
        }
        let mut clocks = [Clock::default(); 2];
        let mut game = Game::new();

        while let Some(color) = game.to_move() {
            let seat = color.idx();
            let player = &mut self.players[seat];
            let start = Instant::now();
            let choice = player.get_move(game.board(), color);
            clocks[seat].total += start.elapsed();
            clocks[seat].moves += 1;

            let Some(mv) = choice else {
                warn!("{} gave up with moves left; ending game early", player.name());
                break;
            };
            game.play(mv).map_err(|source| BenchError::Game {
                player: player.name().to_string(),
                source,
            })?;
        }

        let (black, white) = game.board().count_discs();
        let (winner, winner_score, loser_score) = match black.cmp(&white) {
            std::cmp::Ordering::Greater => (Winner::Black, black, white),
            std::cmp::Ordering::Less => (Winner::White, white, black),
            std::cmp::Ordering::Equal => (Winner::Tie, black, white),
        };
        debug!(
            "{} vs {}: {} {black}-{white} after {} placements",
            self.specs[0],
            self.specs[1],
            winner.as_str(),
            game.placements()
        );

        let black_clock = clocks[Color::Black.idx()];
        let white_clock = clocks[Color::White.idx()];
        Ok(GameRecord {
            timestamp: Local::now().to_rfc3339(),
            player1_type: self.specs[0].type_label().to_string(),
            player1_depth: self.specs[0].depth(),
            player2_type: self.specs[1].type_label().to_string(),
            player2_depth: self.specs[1].depth(),
            winner,
            black_score: black,
            white_score: white,
            winner_score,
            loser_score,
            player1_total_time: black_clock.total_secs(),
            player1_moves: black_clock.moves,
            player1_avg_time_ms: black_clock.avg_ms(),
            player2_total_time: white_clock.total_secs(),
            player2_moves: white_clock.moves,
            player2_avg_time_ms: white_clock.avg_ms(),
        })
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
