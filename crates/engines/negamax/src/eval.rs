//! Phase-weighted static evaluation.
//!
//! Every feature is scored from the point of view of `color`: positive is
//! good for `color`, negative is good for the opponent. The final score is
//! the weighted sum of the features using the row for the current phase.
//! Features whose weight is zero are not computed.

use reversi_core::{
    all_squares, is_legal, legal_move_count, Board, Color, Move, CORNERS, CORNER_GROUPS,
    DIRECTIONS,
};

use crate::weights::{EvaluationWeights, FeatureWeights};

/// Piece-square table, symmetric under the eight board symmetries.
pub const PST: [[i32; 8]; 8] = [
    [20, -3, 11, 8, 8, 11, -3, 20],
    [-3, -7, -4, 1, 1, -4, -7, -3],
    [11, -4, 2, 2, 2, 2, -4, 11],
    [8, 1, 2, 0, 0, 2, 1, 8],
    [8, 1, 2, 0, 0, 2, 1, 8],
    [11, -4, 2, 2, 2, 2, -4, 11],
    [-3, -7, -4, 1, 1, -4, -7, -3],
    [20, -3, 11, 8, 8, 11, -3, 20],
];

pub const CORNER_VALUE: i32 = 25;
pub const RISK_VALUE: i32 = 15;

/// Direction of the risk feature. Holding an X-square next to an empty
/// corner costs the holder, so the sign is negative.
pub const RISK_SIGN: i32 = -1;

/// More than this many empty squares is the opening.
pub const OPENING_EMPTIES: u32 = 44;
/// More than this many empty squares (up to the opening bound) is the midgame.
pub const MIDGAME_EMPTIES: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Opening,
    Midgame,
    Endgame,
}

pub fn game_phase(board: &Board) -> Phase {
    match board.empty_count() {
        n if n > OPENING_EMPTIES => Phase::Opening,
        n if n > MIDGAME_EMPTIES => Phase::Midgame,
        _ => Phase::Endgame,
    }
}

#[inline]
fn side(owner: Color, color: Color) -> i32 {
    if owner == color { 1 } else { -1 }
}

fn touches(board: &Board, mv: Move, pred: impl Fn(Option<Color>) -> bool) -> bool {
    DIRECTIONS
        .iter()
        .filter_map(|&(dr, dc)| mv.offset(dr, dc))
        .any(|n| pred(board.cell(n)))
}

/// Own legal move count minus the opponent's.
pub fn mobility(board: &Board, color: Color) -> i32 {
    legal_move_count(board, color) as i32 - legal_move_count(board, color.other()) as i32
}

/// +25 per own corner, -25 per opponent corner.
pub fn corner(board: &Board, color: Color) -> i32 {
    CORNERS
        .iter()
        .filter_map(|&c| board.cell(c))
        .map(|owner| side(owner, color) * CORNER_VALUE)
        .sum()
}

/// X-square occupancy next to an empty corner.
pub fn risk(board: &Board, color: Color) -> i32 {
    CORNER_GROUPS
        .iter()
        .filter(|group| board.cell(group[0]).is_none())
        .filter_map(|group| board.cell(group[1]))
        .map(|owner| RISK_SIGN * side(owner, color) * RISK_VALUE)
        .sum()
}

/// -1 per own disc touching an empty square, +1 per such opponent disc.
pub fn frontier(board: &Board, color: Color) -> i32 {
    all_squares()
        .filter_map(|mv| board.cell(mv).map(|owner| (mv, owner)))
        .filter(|&(mv, _)| touches(board, mv, |c| c.is_none()))
        .map(|(_, owner)| -side(owner, color))
        .sum()
}

/// Piece-square table sum.
pub fn pst(board: &Board, color: Color) -> i32 {
    all_squares()
        .filter_map(|mv| {
            board
                .cell(mv)
                .map(|owner| side(owner, color) * PST[mv.row() as usize][mv.col() as usize])
        })
        .sum()
}

/// Disc differential.
pub fn discs(board: &Board, color: Color) -> i32 {
    board.score(color)
}

/// Empty squares next to opponent discs minus empty squares next to own
/// discs. Approximates future move options for each side.
pub fn potential_mobility(board: &Board, color: Color) -> i32 {
    let mut score = 0;
    for mv in all_squares().filter(|&mv| board.cell(mv).is_none()) {
        if touches(board, mv, |c| c == Some(color.other())) {
            score += 1;
        }
        if touches(board, mv, |c| c == Some(color)) {
            score -= 1;
        }
    }
    score
}

/// +1 per empty corner `color` can take now, -1 per empty corner the
/// opponent can take now.
pub fn corner_access(board: &Board, color: Color) -> i32 {
    CORNERS
        .iter()
        .filter(|&&c| board.cell(c).is_none())
        .map(|&c| is_legal(board, c, color) as i32 - is_legal(board, c, color.other()) as i32)
        .sum()
}

/// X-square (2) and C-square (1) occupancy next to an empty corner,
/// charged to the occupant.
pub fn x_c_penalty(board: &Board, color: Color) -> i32 {
    let mut score = 0;
    for group in CORNER_GROUPS.iter().filter(|g| board.cell(g[0]).is_none()) {
        if let Some(owner) = board.cell(group[1]) {
            score -= 2 * side(owner, color);
        }
        for &c in &group[2..] {
            if let Some(owner) = board.cell(c) {
                score -= side(owner, color);
            }
        }
    }
    score
}

/// Edge discs anchored to an occupied corner: the unbroken run of the
/// corner owner's colour along each edge leaving the corner. The corner
/// itself is not counted.
pub fn stability(board: &Board, color: Color) -> i32 {
    let mut score = 0;
    for c in CORNERS {
        let Some(owner) = board.cell(c) else {
            continue;
        };
        let dr: i8 = if c.row() == 0 { 1 } else { -1 };
        let dc: i8 = if c.col() == 0 { 1 } else { -1 };
        for (sr, sc) in [(0, dc), (dr, 0)] {
            let mut run = 0;
            let mut cur = c.offset(sr, sc);
            while let Some(mv) = cur {
                if board.cell(mv) != Some(owner) {
                    break;
                }
                run += 1;
                cur = mv.offset(sr, sc);
            }
            score += side(owner, color) * run;
        }
    }
    score
}

/// +1 when an odd number of squares is empty, -1 otherwise.
pub fn parity(board: &Board, _color: Color) -> i32 {
    if board.empty_count() % 2 == 1 { 1 } else { -1 }
}

/// Weighted sum of the features for the phase of `board`, from `color`'s
/// point of view.
pub fn evaluate(board: &Board, color: Color, weights: &EvaluationWeights) -> f64 {
    evaluate_with(board, color, weights.for_phase(game_phase(board)))
}

/// Evaluate with a single explicit weight row, ignoring the phase.
pub fn evaluate_with(board: &Board, color: Color, w: &FeatureWeights) -> f64 {
    let terms: [(f64, fn(&Board, Color) -> i32); 11] = [
        (w.mobility, mobility),
        (w.corner, corner),
        (w.risk, risk),
        (w.frontier, frontier),
        (w.pst, pst),
        (w.discs, discs),
        (w.potential_mobility, potential_mobility),
        (w.corner_access, corner_access),
        (w.x_c_penalty, x_c_penalty),
        (w.stability, stability),
        (w.parity, parity),
    ];
    terms
        .iter()
        .filter(|(weight, _)| *weight != 0.0)
        .map(|&(weight, feature)| weight * f64::from(feature(board, color)))
        .sum()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
