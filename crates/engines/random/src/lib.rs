//! Random Move Chess Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Exercising the game loop without a thinking opponent
//! - Baseline comparisons (any searching engine should easily beat this)
//! - Stress testing move generation

use chess_core::{legal_moves_into, Board, Engine, EngineError, SearchResult};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// A chess engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves. It's the simplest possible engine
/// and serves as a baseline for testing.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, _depth: u8) -> Result<SearchResult, EngineError> {
        self.nodes = 0;

        let mut scratch = board.clone();
        let mut moves = Vec::with_capacity(64);
        legal_moves_into(&mut scratch, board.side_to_move, &mut moves)?;

        self.nodes = 1;

        let best_move = moves.choose(&mut thread_rng()).copied();

        Ok(SearchResult {
            best_move,
            score: 0,
            depth: 0,
            nodes: self.nodes,
        })
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
