//! Node and time profile of the search optimisations per game phase.
//!
//! For each phase a position is reached by seeded random play, then the
//! same full-window search runs with each combination of transposition
//! table and move ordering. All four variants must return the same score.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use log::info;
use negamax_engine::{EvaluationWeights, OrderingPolicy, SearchConfig, Searcher};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use reversi_core::{Board, Color};
use serde::Serialize;

use crate::error::BenchError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfilePhase {
    Opening,
    Midgame,
    Endgame,
}

impl ProfilePhase {
    pub const ALL: [ProfilePhase; 3] = [
        ProfilePhase::Opening,
        ProfilePhase::Midgame,
        ProfilePhase::Endgame,
    ];

    /// Random placements played from the start position.
    pub fn plies(self) -> usize {
        match self {
            ProfilePhase::Opening => 0,
            ProfilePhase::Midgame => 12,
            ProfilePhase::Endgame => 48,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProfilePhase::Opening => "opening",
            ProfilePhase::Midgame => "midgame",
            ProfilePhase::Endgame => "endgame",
        }
    }
}

/// Position for `phase` and the side to move in it. A side without moves
/// passes; play stops early if the game ends.
pub fn phase_position(phase: ProfilePhase, rng: &mut StdRng) -> (Board, Color) {
    let mut board = Board::new();
    let mut color = Color::Black;
    for _ in 0..phase.plies() {
        let mut moves = board.get_valid_moves(color);
        if moves.is_empty() {
            color = color.other();
            moves = board.get_valid_moves(color);
        }
        let Some(&mv) = moves.choose(rng) else {
            break;
        };
        if board.apply_move(mv, color).is_err() {
            break;
        }
        color = color.other();
    }
    (board, color)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Variant {
    Base,
    Tt,
    Ordering,
    Both,
}

impl Variant {
    pub const ALL: [Variant; 4] = [Variant::Base, Variant::Tt, Variant::Ordering, Variant::Both];

    pub fn label(self) -> &'static str {
        match self {
            Variant::Base => "Base",
            Variant::Tt => "TT",
            Variant::Ordering => "MO",
            Variant::Both => "TT+MO",
        }
    }

    pub fn config(self) -> SearchConfig {
        let (ordering, use_tt) = match self {
            Variant::Base => (OrderingPolicy::Off, false),
            Variant::Tt => (OrderingPolicy::Off, true),
            Variant::Ordering => (OrderingPolicy::Always, false),
            Variant::Both => (OrderingPolicy::Always, true),
        };
        SearchConfig {
            ordering,
            use_tt,
            ..SearchConfig::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VariantRun {
    pub variant: Variant,
    pub secs: f64,
    pub nodes: u64,
    pub tt_entries: usize,
    pub score: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileRow {
    pub phase: ProfilePhase,
    pub depth: u8,
    pub black_discs: u32,
    pub white_discs: u32,
    /// In `Variant::ALL` order.
    pub runs: Vec<VariantRun>,
}

impl ProfileRow {
    pub fn run(&self, variant: Variant) -> Option<&VariantRun> {
        self.runs.iter().find(|r| r.variant == variant)
    }

    /// Nodes saved relative to the base variant, in percent.
    pub fn node_reduction(&self, variant: Variant) -> f64 {
        match (self.run(Variant::Base), self.run(variant)) {
            (Some(base), Some(run)) if base.nodes > 0 => {
                (1.0 - run.nodes as f64 / base.nodes as f64) * 100.0
            }
            _ => 0.0,
        }
    }

    pub fn speedup(&self, variant: Variant) -> f64 {
        match (self.run(Variant::Base), self.run(variant)) {
            (Some(base), Some(run)) if run.secs > 0.0 => base.secs / run.secs,
            _ => 0.0,
        }
    }
}

fn run_variant(
    board: &Board,
    color: Color,
    depth: u8,
    variant: Variant,
    weights: EvaluationWeights,
) -> VariantRun {
    let mut searcher = Searcher::with_seed(weights, variant.config(), 0);
    let mut board = board.clone();
    let start = Instant::now();
    let score = searcher.search(&mut board, color, depth, f64::NEG_INFINITY, f64::INFINITY);
    VariantRun {
        variant,
        secs: start.elapsed().as_secs_f64(),
        nodes: searcher.stats().nodes,
        tt_entries: searcher.tt().len(),
        score,
    }
}

/// Profile every phase at every depth. Fails if any two variants disagree
/// on the score.
pub fn profile_phases(
    depths: &[u8],
    seed: u64,
    weights: EvaluationWeights,
) -> Result<Vec<ProfileRow>, BenchError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = Vec::new();
    for phase in ProfilePhase::ALL {
        let (board, color) = phase_position(phase, &mut rng);
        let (black_discs, white_discs) = board.count_discs();
        info!("{}: {black_discs} black, {white_discs} white, {color} to move", phase.name());
        for &depth in depths {
            let runs: Vec<VariantRun> = Variant::ALL
                .into_iter()
                .map(|v| run_variant(&board, color, depth, v, weights))
                .collect();
            if runs.iter().any(|r| r.score != runs[0].score) {
                return Err(BenchError::ScoreMismatch {
                    phase: phase.name().to_string(),
                    depth,
                    scores: runs.iter().map(|r| r.score).collect(),
                });
            }
            info!(
                "{} depth {depth}: base {} nodes, TT+MO {} nodes",
                phase.name(),
                runs[0].nodes,
                runs[3].nodes
            );
            rows.push(ProfileRow {
                phase,
                depth,
                black_discs,
                white_discs,
                runs,
            });
        }
    }
    Ok(rows)
}

pub fn write_profile_csv<W: Write>(rows: &[ProfileRow], mut out: W) -> std::io::Result<()> {
    write!(out, "Phase,Depth")?;
    for v in Variant::ALL {
        let tag = match v {
            Variant::Base => "Base",
            Variant::Tt => "TT",
            Variant::Ordering => "MO",
            Variant::Both => "Both",
        };
        write!(out, ",{tag}_Time,{tag}_Nodes")?;
    }
    writeln!(out)?;
    for row in rows {
        write!(out, "{},{}", row.phase.name(), row.depth)?;
        for run in &row.runs {
            write!(out, ",{:.4},{}", run.secs, run.nodes)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn save_profile_csv(rows: &[ProfileRow], path: &Path) -> Result<(), BenchError> {
    let file = std::fs::File::create(path).map_err(|e| BenchError::io(path, e))?;
    let mut writer = std::io::BufWriter::new(file);
    write_profile_csv(rows, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(|e| BenchError::io(path, e))
}

/// Comparison table per phase and depth.
pub fn generate_profile_report(rows: &[ProfileRow]) -> String {
    let mut report = String::new();
    for row in rows {
        let _ = writeln!(
            report,
            "=== {} depth {} ({}B/{}W) ===",
            row.phase.name(),
            row.depth,
            row.black_discs,
            row.white_discs
        );
        let _ = writeln!(
            report,
            "{:<8} {:>10} {:>12} {:>9} {:>10}",
            "Variant", "Time (s)", "Nodes", "Speedup", "Reduction"
        );
        for run in &row.runs {
            let _ = writeln!(
                report,
                "{:<8} {:>10.3} {:>12} {:>8.2}x {:>9.1}%",
                run.variant.label(),
                run.secs,
                run.nodes,
                row.speedup(run.variant),
                row.node_reduction(run.variant)
            );
        }
        let _ = writeln!(report);
    }
    report
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod profile_tests;
