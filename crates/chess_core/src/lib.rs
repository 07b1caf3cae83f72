pub mod board;
pub mod check;
pub mod eval;
pub mod movegen;
pub mod perft;
pub mod search;
pub mod types;
pub mod uci;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use check::*;
pub use eval::*;
pub use movegen::*;
pub use perft::perft;
pub use search::*;
pub use types::*;
pub use uci::*;

use thiserror::Error;

/// Errors surfaced by legality, status and search queries.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The move is not in the legal move list for the side to move.
    #[error("move {0} is not legal for the side to move")]
    IllegalMove(Move),
    /// A query that needs a king ran on a board without one.
    #[error("no {0} king on the board")]
    NoKingFound(Color),
    /// Depth above the supported maximum. Depth 0 itself is valid and
    /// means a greedy one-ply pick.
    #[error("search depth {0} exceeds the supported maximum of {max}", max = MAX_DEPTH)]
    InvalidDepth(u8),
}

// =============================================================================
// Engine trait - implemented by every playable engine (minimax, random)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None when the side to move has no legal move)
    pub best_move: Option<Move>,
    /// Minimax score from White's point of view
    pub score: i32,
    /// Depth actually searched
    pub depth: u8,
    /// Number of nodes visited
    pub nodes: u64,
}

/// Trait every playable engine implements, so front ends can swap move
/// selection strategies at runtime.
pub trait Engine: Send {
    /// Pick a move for the side to move on `board`.
    fn search(&mut self, board: &Board, depth: u8) -> Result<SearchResult, EngineError>;

    /// Engine name for UCI identification and match reports.
    fn name(&self) -> &str;

    /// Engine author line for UCI identification.
    fn author(&self) -> &str {
        "jaque"
    }

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
