//! Cheap move-ordering heuristic used ahead of alpha-beta.
//!
//! Ordering never changes the value of a search, only how much of the tree
//! is cut. The policy decides at which nodes sorting is worth its cost.

use reversi_core::{flips_for, Board, Color, Move, CORNER_GROUPS};
use serde::{Deserialize, Serialize};

use crate::eval::Phase;

pub const CORNER_BONUS: i32 = 1000;
pub const DANGER_PENALTY: i32 = 500;
pub const EDGE_BONUS: i32 = 50;
pub const FLIP_VALUE: i32 = 10;

/// When to sort moves before searching them.
///
/// In TOML: `ordering = "always"`, `ordering = "off"` or
/// `ordering = { from_depth = 3 }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    Off,
    Always,
    /// Only at nodes with at least this much remaining depth.
    FromDepth(u8),
    /// Like `FromDepth`, but only in the midgame.
    MidgameFromDepth(u8),
}

impl OrderingPolicy {
    pub fn applies(self, depth: u8, phase: Phase) -> bool {
        match self {
            OrderingPolicy::Off => false,
            OrderingPolicy::Always => true,
            OrderingPolicy::FromDepth(min) => depth >= min,
            OrderingPolicy::MidgameFromDepth(min) => depth >= min && phase == Phase::Midgame,
        }
    }
}

impl Default for OrderingPolicy {
    fn default() -> Self {
        OrderingPolicy::FromDepth(2)
    }
}

/// X- or C-square whose corner is still empty.
pub fn is_dangerous(board: &Board, mv: Move) -> bool {
    CORNER_GROUPS
        .iter()
        .any(|group| group[1..].contains(&mv) && board.cell(group[0]).is_none())
}

/// Heuristic priority of `mv` for `color`. Higher is searched first.
///
/// Uses the exact number of discs the move would flip.
pub fn move_priority(board: &Board, mv: Move, color: Color) -> i32 {
    let mut score = FLIP_VALUE * flips_for(board, mv, color).len() as i32;
    if mv.is_corner() {
        score += CORNER_BONUS;
    } else if is_dangerous(board, mv) {
        score -= DANGER_PENALTY;
    } else if mv.is_edge() {
        score += EDGE_BONUS;
    }
    score
}

/// Sort `moves` by descending priority. The sort is stable, so equal
/// priorities keep generation order.
pub fn order_moves(board: &Board, color: Color, moves: &mut [Move]) {
    moves.sort_by_cached_key(|&mv| std::cmp::Reverse(move_priority(board, mv, color)));
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
