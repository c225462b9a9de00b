//! Benchmark batches, summaries and result export

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::{BatchConfig, PlayerSpec};
use crate::error::BenchError;
use crate::match_runner::{BenchmarkGame, GameRecord, Winner};

/// CSV column order.
pub const CSV_HEADER: [&str; 16] = [
    "timestamp",
    "player1_type",
    "player1_depth",
    "player2_type",
    "player2_depth",
    "winner",
    "black_score",
    "white_score",
    "winner_score",
    "loser_score",
    "player1_total_time",
    "player1_moves",
    "player1_avg_time_ms",
    "player2_total_time",
    "player2_moves",
    "player2_avg_time_ms",
];

/// Aggregate of one batch of games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub name: String,
    pub games: usize,
    pub black_wins: usize,
    pub white_wins: usize,
    pub ties: usize,
    pub avg_black_score: f64,
    pub avg_white_score: f64,
}

impl BatchSummary {
    pub fn from_records(name: &str, records: &[GameRecord]) -> Self {
        let count = |w: Winner| records.iter().filter(|r| r.winner == w).count();
        let avg = |f: fn(&GameRecord) -> u32| {
            if records.is_empty() {
                0.0
            } else {
                records.iter().map(|r| f64::from(f(r))).sum::<f64>() / records.len() as f64
            }
        };
        Self {
            name: name.to_string(),
            games: records.len(),
            black_wins: count(Winner::Black),
            white_wins: count(Winner::White),
            ties: count(Winner::Tie),
            avg_black_score: avg(|r| r.black_score),
            avg_white_score: avg(|r| r.white_score),
        }
    }

    fn pct(&self, n: usize) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            n as f64 * 100.0 / self.games as f64
        }
    }

    pub fn black_win_pct(&self) -> f64 {
        self.pct(self.black_wins)
    }

    pub fn white_win_pct(&self) -> f64 {
        self.pct(self.white_wins)
    }

    pub fn tie_pct(&self) -> f64 {
        self.pct(self.ties)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        let _ = writeln!(report, "=== Summary: {} ===", self.name);
        let _ = writeln!(report, "{:<20} {:>12}", "Games", self.games);
        let _ = writeln!(
            report,
            "{:<20} {:>5} ({:>5.1}%)",
            "Black wins",
            self.black_wins,
            self.black_win_pct()
        );
        let _ = writeln!(
            report,
            "{:<20} {:>5} ({:>5.1}%)",
            "White wins",
            self.white_wins,
            self.white_win_pct()
        );
        let _ = writeln!(report, "{:<20} {:>5} ({:>5.1}%)", "Ties", self.ties, self.tie_pct());
        let _ = writeln!(report, "{:<20} {:>12.1}", "Avg Black score", self.avg_black_score);
        let _ = writeln!(report, "{:<20} {:>12.1}", "Avg White score", self.avg_white_score);
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

/// Collects game records across batches.
#[derive(Debug, Default)]
pub struct Benchmark {
    results: Vec<GameRecord>,
    summaries: Vec<BatchSummary>,
    seed: Option<u64>,
    games_played: u64,
}

impl Benchmark {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every game gets its own pair of seeds derived from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn results(&self) -> &[GameRecord] {
        &self.results
    }

    pub fn summaries(&self) -> &[BatchSummary] {
        &self.summaries
    }

    fn next_seed(&mut self) -> Option<u64> {
        let seed = self
            .seed
            .map(|s| s.wrapping_add(self.games_played.wrapping_mul(2)));
        self.games_played += 1;
        seed
    }

    /// Play `num_games` games between freshly built players.
    pub fn run_batch(
        &mut self,
        num_games: u32,
        player1: PlayerSpec,
        player2: PlayerSpec,
        name: &str,
    ) -> Result<BatchSummary, BenchError> {
        info!("batch '{name}': {player1} vs {player2}, {num_games} games");
        let first = self.results.len();
        for i in 0..num_games {
            let seed = self.next_seed();
            let record = BenchmarkGame::new(player1, player2, seed).run()?;
            info!(
                "game {}/{num_games}: {} {}-{}",
                i + 1,
                record.winner.as_str(),
                record.black_score,
                record.white_score
            );
            self.results.push(record);
        }
        let summary = BatchSummary::from_records(name, &self.results[first..]);
        self.summaries.push(summary.clone());
        Ok(summary)
    }

    /// Run several batches with the same number of games each.
    pub fn run_multi_batch(
        &mut self,
        games_per_batch: u32,
        batches: &[BatchConfig],
    ) -> Result<Vec<BatchSummary>, BenchError> {
        batches
            .iter()
            .map(|b| self.run_batch(games_per_batch, b.player1, b.player2, &b.display_name()))
            .collect()
    }

    pub fn write_csv<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        writeln!(out, "{}", CSV_HEADER.join(","))?;
        for r in &self.results {
            let depth = |d: Option<u8>| d.map_or_else(|| "-".to_string(), |d| d.to_string());
            writeln!(
                out,
                "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
                r.timestamp,
                r.player1_type,
                depth(r.player1_depth),
                r.player2_type,
                depth(r.player2_depth),
                r.winner.as_str(),
                r.black_score,
                r.white_score,
                r.winner_score,
                r.loser_score,
                r.player1_total_time,
                r.player1_moves,
                r.player1_avg_time_ms,
                r.player2_total_time,
                r.player2_moves,
                r.player2_avg_time_ms,
            )?;
        }
        Ok(())
    }

    /// Write all records as CSV. Nothing is written when no game was played.
    pub fn save_csv(&self, path: &Path) -> Result<(), BenchError> {
        if self.results.is_empty() {
            warn!("no results to save");
            return Ok(());
        }
        let file = std::fs::File::create(path).map_err(|e| BenchError::io(path, e))?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_csv(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| BenchError::io(path, e))?;
        info!("saved {} games to {}", self.results.len(), path.display());
        Ok(())
    }

    /// Save records and summaries to JSON file
    pub fn save_json(&self, path: &Path) -> Result<(), BenchError> {
        #[derive(Serialize)]
        struct Export<'a> {
            summaries: &'a [BatchSummary],
            games: &'a [GameRecord],
        }
        let json = serde_json::to_string_pretty(&Export {
            summaries: &self.summaries,
            games: &self.results,
        })?;
        std::fs::write(path, json).map_err(|e| BenchError::io(path, e))
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
