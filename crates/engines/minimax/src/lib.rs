//! Minimax Chess Engine
//!
//! Thin [`Engine`] wrapper around the core fixed-depth minimax search.
//! The search itself lives in `chess_core::search`; this crate only
//! adapts it to the engine interface so front ends can swap opponents.

use chess_core::{best_move, Board, Engine, EngineError, SearchResult};

#[cfg(test)]
mod lib_tests;

/// Full-width minimax over the material evaluation.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine;

impl MinimaxEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, depth: u8) -> Result<SearchResult, EngineError> {
        best_move(board, board.side_to_move, depth)
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }
}
