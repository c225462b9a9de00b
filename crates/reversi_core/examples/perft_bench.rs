//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p reversi_core -- [depth]

use reversi_core::{perft, Board, Color};
use std::env;
use std::time::Instant;

fn main() {
    let depth: u8 = env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(9);

    println!("Reversi perft from the start position");
    println!("{:>5} {:>14} {:>10} {:>12}", "Depth", "Nodes", "Time(ms)", "Nodes/sec");
    println!("{}", "-".repeat(45));

    for d in 1..=depth {
        let mut board = Board::new();
        let start = Instant::now();
        let nodes = perft(&mut board, Color::Black, d);
        let elapsed = start.elapsed();
        let nps = nodes as f64 / elapsed.as_secs_f64().max(1e-9);
        println!(
            "{:>5} {:>14} {:>10.1} {:>12.0}",
            d,
            nodes,
            elapsed.as_secs_f64() * 1000.0,
            nps
        );
    }
}
