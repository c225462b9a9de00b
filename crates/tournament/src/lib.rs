//! Benchmark harness for Reversi players
//!
//! This crate provides infrastructure for:
//! - Playing silent games between any two player specifications
//! - Running batches and summarising wins, ties and average scores
//! - Exporting per-game records as CSV or JSON
//! - Profiling the search optimisations across game phases
//!
//! # Usage
//!
//! ```bash
//! # Random against a depth-3 search, 50 games
//! cargo run -p tournament -- batch --player1 random --player2 ai:3 --games 50
//!
//! # Batches described in a TOML file
//! cargo run -p tournament -- run --config bench.toml
//!
//! # Node counts with and without table/ordering
//! cargo run -p tournament --release -- profile --depths 2,3,4
//! ```

mod config;
mod error;
mod match_runner;
mod profile;
mod results;

pub use config::*;
pub use error::BenchError;
pub use match_runner::*;
pub use profile::*;
pub use results::*;
