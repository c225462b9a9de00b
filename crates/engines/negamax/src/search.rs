//! Negamax with alpha-beta pruning.
//!
//! Root moves are always searched with a full window so every root score is
//! the exact minimax value; transposition-table entries carry their bound
//! kind so that pruned results are never reused as exact ones.

use std::{fs, path::Path};

use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use reversi_core::{legal_moves, legal_moves_into, Board, Color, Move};
use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigError,
    eval::{evaluate, game_phase},
    ordering::{order_moves, OrderingPolicy},
    tt::{Bound, TranspositionTable, TtEntry, TtKey, DEFAULT_TT_CAPACITY},
    weights::EvaluationWeights,
};

/// Search knobs. Defaults match the engine's tournament settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub ordering: OrderingPolicy,
    pub use_tt: bool,
    /// Nodes with less remaining depth are neither probed nor stored.
    pub tt_min_depth: u8,
    pub tt_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            ordering: OrderingPolicy::default(),
            use_tt: true,
            tt_min_depth: 2,
            tt_capacity: DEFAULT_TT_CAPACITY,
        }
    }
}

impl SearchConfig {
    /// Plain negamax: no ordering, no table.
    pub fn plain() -> Self {
        Self {
            ordering: OrderingPolicy::Off,
            use_tt: false,
            ..Self::default()
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// Counters accumulated across searches until [`Searcher::reset_stats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub nodes: u64,
    pub tt_hits: u64,
    pub tt_stores: u64,
    pub cutoffs: u64,
}

/// Search state for one player: weights, table, counters and the RNG used
/// to break ties between equally scored root moves.
#[derive(Debug)]
pub struct Searcher {
    weights: EvaluationWeights,
    config: SearchConfig,
    tt: TranspositionTable,
    stats: SearchStats,
    rng: StdRng,
}

impl Searcher {
    pub fn new(weights: EvaluationWeights, config: SearchConfig) -> Self {
        Self::with_rng(weights, config, StdRng::from_entropy())
    }

    /// Deterministic tie-breaking.
    pub fn with_seed(weights: EvaluationWeights, config: SearchConfig, seed: u64) -> Self {
        Self::with_rng(weights, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(weights: EvaluationWeights, config: SearchConfig, rng: StdRng) -> Self {
        Self {
            weights,
            tt: TranspositionTable::new(config.tt_capacity),
            config,
            stats: SearchStats::default(),
            rng,
        }
    }

    pub fn weights(&self) -> &EvaluationWeights {
        &self.weights
    }

    /// Replace the weights. Stored scores were computed with the old
    /// weights, so the table is cleared when they differ.
    pub fn set_weights(&mut self, weights: EvaluationWeights) {
        if weights != self.weights {
            self.weights = weights;
            self.tt.clear();
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }

    pub fn clear_tt(&mut self) {
        self.tt.clear();
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Exact score of every legal root move for `color`, in generation
    /// order. A depth of 0 is searched as 1.
    pub fn search_root(&mut self, board: &Board, color: Color, depth: u8) -> Vec<(Move, f64)> {
        let depth = depth.max(1);
        let mut tmp = board.clone();
        let moves = legal_moves(&tmp, color);
        let mut scored = Vec::with_capacity(moves.len());
        for mv in moves {
            let Ok(mut child) = tmp.play(mv, color) else {
                debug_assert!(false, "generated move {mv} rejected at root");
                continue;
            };
            let score = -self.search(
                &mut child,
                color.other(),
                depth - 1,
                f64::NEG_INFINITY,
                f64::INFINITY,
            );
            scored.push((mv, score));
        }
        scored
    }

    /// Best move with its score, or `None` when `color` has no legal move.
    /// Ties are broken uniformly at random.
    pub fn choose_move_scored(
        &mut self,
        board: &Board,
        color: Color,
        depth: u8,
    ) -> Option<(Move, f64)> {
        let scored = self.search_root(board, color, depth);
        let best = scored
            .iter()
            .map(|&(_, s)| s)
            .fold(f64::NEG_INFINITY, f64::max);
        let tied: Vec<Move> = scored
            .iter()
            .filter(|&&(_, s)| s == best)
            .map(|&(mv, _)| mv)
            .collect();
        let mv = *tied.choose(&mut self.rng)?;
        debug!(
            "{color} depth {depth}: {mv} scores {best:.2} ({} of {} moves tied)",
            tied.len(),
            scored.len()
        );
        Some((mv, best))
    }

    pub fn choose_move(&mut self, board: &Board, color: Color, depth: u8) -> Option<Move> {
        self.choose_move_scored(board, color, depth).map(|(mv, _)| mv)
    }

    /// Negamax value of `board` with `color` to move, from `color`'s point
    /// of view. Fail-soft: outside `(alpha, beta)` the result is a bound.
    ///
    /// A side without moves passes and the search continues for the
    /// opponent at the same depth. The board is restored before returning.
    pub fn search(
        &mut self,
        board: &mut Board,
        color: Color,
        depth: u8,
        mut alpha: f64,
        beta: f64,
    ) -> f64 {
        self.stats.nodes += 1;

        let key = (self.config.use_tt && depth >= self.config.tt_min_depth)
            .then(|| TtKey::new(board, color, depth));
        if let Some(entry) = key.as_ref().and_then(|k| self.tt.probe(k)) {
            if let Some(score) = entry.cutoff(alpha, beta) {
                self.stats.tt_hits += 1;
                return score;
            }
        }

        if board.is_terminal() {
            return f64::from(board.score(color));
        }
        if depth == 0 {
            return evaluate(board, color, &self.weights);
        }

        let mut moves = Vec::with_capacity(32);
        legal_moves_into(board, color, &mut moves);
        if moves.is_empty() {
            return -self.search(board, color.other(), depth, -beta, -alpha);
        }
        if self.config.ordering.applies(depth, game_phase(board)) {
            order_moves(board, color, &mut moves);
        }

        let alpha_orig = alpha;
        let mut best = f64::NEG_INFINITY;
        for mv in moves {
            let Ok(mut child) = board.play(mv, color) else {
                debug_assert!(false, "generated move {mv} rejected");
                continue;
            };
            let score = -self.search(&mut child, color.other(), depth - 1, -beta, -alpha);
            drop(child);

            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        if let Some(key) = key {
            let bound = if best <= alpha_orig {
                Bound::Upper
            } else if best >= beta {
                Bound::Lower
            } else {
                Bound::Exact
            };
            self.tt.store(key, TtEntry { score: best, bound });
            self.stats.tt_stores += 1;
        }
        best
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(EvaluationWeights::default(), SearchConfig::default())
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
