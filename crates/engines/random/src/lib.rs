//! Random Move Othello Engine
//!
//! Selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Exercising the player and the self-play driver end to end
//! - Baseline comparisons (any real engine should easily beat this)

use othello_core::{legal_moves, Board, Engine, Move, Result, SearchLimits, SearchResult, Side};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// An Othello engine that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence of choices.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, side: Side, _limits: SearchLimits) -> Result<SearchResult> {
        let moves = legal_moves(board, side);

        let best_move = moves.choose(&mut self.rng).copied().unwrap_or(Move::Pass);

        Ok(SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: 1,
            stopped: false,
        })
    }

    fn name(&self) -> &str {
        "Random"
    }
}
