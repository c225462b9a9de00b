pub mod bitboard;
pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use bitboard::*;
pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Player trait: implemented by every move source (random, search, human)
// =============================================================================

/// Anything that can pick a move for one side of a game.
///
/// This allows swapping between random players, search players and
/// interactive humans behind a single `Box<dyn Player>`.
pub trait Player {
    /// Pick a move for `color` on `board`.
    ///
    /// Returns `None` when `color` has no legal move, or when an external
    /// move source gives up (e.g. end of input).
    fn get_move(&mut self, board: &Board, color: Color) -> Option<Move>;

    /// Short label for logs and reports.
    fn name(&self) -> &str;

    /// True for players that search before answering. Front ends use this
    /// to show a "thinking" indicator.
    fn is_search_based(&self) -> bool {
        false
    }

    /// Reset internal state for a new game (clear hash tables, etc.)
    fn new_game(&mut self) {}
}
