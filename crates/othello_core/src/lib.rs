pub mod bitboard;
pub mod board;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use bitboard::*;
pub use board::*;
pub use error::*;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every move picker (minimax, random, ...)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (`Move::Pass` if there were no legal moves)
    pub best_move: Move,
    /// Backed-up score from the searching side's perspective
    pub score: i32,
    /// Deepest fully completed search depth
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
    /// Whether a deeper iteration was abandoned because of the time limit
    pub stopped: bool,
}

/// Trait that all Othello engines implement.
///
/// The board passed in is never modified; engines work on their own copies.
pub trait Engine: Send {
    /// Pick a move for `side` on `board` within `limits`.
    fn search(&mut self, board: &Board, side: Side, limits: SearchLimits) -> Result<SearchResult>;

    /// Returns the engine's name for logs and match reports
    fn name(&self) -> &str;
}
