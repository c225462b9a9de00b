//! Bounded transposition table with first-in-first-out eviction.

use std::collections::{HashMap, VecDeque};

use log::trace;
use reversi_core::{Board, BoardKey, Color};

pub const DEFAULT_TT_CAPACITY: usize = 50_000;

/// Entries are only valid for the exact position, side to move and
/// remaining depth they were searched with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TtKey {
    pub board: BoardKey,
    pub side: Color,
    pub depth: u8,
}

impl TtKey {
    pub fn new(board: &Board, side: Color, depth: u8) -> Self {
        Self {
            board: board.key(),
            side,
            depth,
        }
    }
}

/// How a stored score relates to the true value of the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// The search failed high: true value >= score.
    Lower,
    /// The search failed low: true value <= score.
    Upper,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TtEntry {
    pub score: f64,
    pub bound: Bound,
}

impl TtEntry {
    /// Score usable as the node's result inside `(alpha, beta)`.
    pub fn cutoff(&self, alpha: f64, beta: f64) -> Option<f64> {
        match self.bound {
            Bound::Exact => Some(self.score),
            Bound::Lower if self.score >= beta => Some(self.score),
            Bound::Upper if self.score <= alpha => Some(self.score),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct TranspositionTable {
    entries: HashMap<TtKey, TtEntry>,
    order: VecDeque<TtKey>,
    capacity: usize,
    evictions: u64,
}

impl TranspositionTable {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity.min(DEFAULT_TT_CAPACITY)),
            order: VecDeque::new(),
            capacity,
            evictions: 0,
        }
    }

    pub fn probe(&self, key: &TtKey) -> Option<TtEntry> {
        self.entries.get(key).copied()
    }

    /// Insert or overwrite. Overwriting keeps the key's original age.
    /// A new key beyond capacity evicts the oldest inserted key.
    pub fn store(&mut self, key: TtKey, entry: TtEntry) {
        if self.capacity == 0 {
            return;
        }
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = entry;
            return;
        }
        self.entries.insert(key, entry);
        self.order.push_back(key);
        while self.entries.len() > self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            self.evictions += 1;
            trace!("evicted depth {} entry, {} evictions so far", oldest.depth, self.evictions);
        }
    }

    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            trace!("clearing transposition table ({} entries)", self.entries.len());
        }
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total entries evicted since creation.
    pub fn evictions(&self) -> u64 {
        self.evictions
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_TT_CAPACITY)
    }
}

#[cfg(test)]
#[path = "tt_tests.rs"]
mod tt_tests;
