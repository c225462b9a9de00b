//! Negamax Reversi Engine
//!
//! Alpha-beta search over a phase-weighted evaluation.
//!
//! This crate provides:
//! - Evaluation features and the built-in weight profiles
//! - Move ordering and a bounded transposition table
//! - [`Searcher`], the search itself, and [`SearchPlayer`], which plugs it
//!   into anything that drives a [`Player`]

pub mod error;
pub mod eval;
pub mod ordering;
pub mod search;
pub mod tt;
pub mod weights;

use log::debug;
use reversi_core::{Board, Color, Move, Player};

pub use error::ConfigError;
pub use eval::{evaluate, game_phase, Phase};
pub use ordering::OrderingPolicy;
pub use search::{SearchConfig, SearchStats, Searcher};
pub use tt::TranspositionTable;
pub use weights::{EvaluationWeights, FeatureWeights, Profile};

/// Outcome of the last move chosen by a [`SearchPlayer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: f64,
    pub depth: u8,
    /// Nodes visited for this move only.
    pub nodes: u64,
}

/// Fixed-depth search player.
#[derive(Debug)]
pub struct SearchPlayer {
    name: String,
    depth: u8,
    searcher: Searcher,
    last: Option<SearchResult>,
}

impl SearchPlayer {
    pub fn new(depth: u8, profile: Profile) -> Self {
        Self::with_searcher(
            depth,
            Searcher::new(*profile.weights(), SearchConfig::default()),
            format!("AI depth {depth} ({})", profile.name()),
        )
    }

    pub fn with_searcher(depth: u8, searcher: Searcher, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            depth: depth.max(1),
            searcher,
            last: None,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    pub fn searcher_mut(&mut self) -> &mut Searcher {
        &mut self.searcher
    }

    pub fn last_result(&self) -> Option<SearchResult> {
        self.last
    }
}

impl Player for SearchPlayer {
    fn get_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        let nodes_before = self.searcher.stats().nodes;
        let (best_move, score) = self.searcher.choose_move_scored(board, color, self.depth)?;
        let result = SearchResult {
            best_move,
            score,
            depth: self.depth,
            nodes: self.searcher.stats().nodes - nodes_before,
        };
        debug!(
            "{}: {} for {color}, score {:.2}, {} nodes, table {}/{}",
            self.name,
            best_move,
            score,
            result.nodes,
            self.searcher.tt().len(),
            self.searcher.tt().capacity()
        );
        self.last = Some(result);
        Some(best_move)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_search_based(&self) -> bool {
        true
    }

    fn new_game(&mut self) {
        self.searcher.clear_tt();
        self.last = None;
    }
}
