//! Minimax Othello Engine
//!
//! Game-tree search over a positional heuristic. The baseline is exhaustive
//! fixed-depth minimax; alpha-beta, iterative deepening and a parallel root
//! split are drop-in upgrades that return the same move.

pub mod eval;
pub mod search;

use othello_core::{Board, Engine, Result, SearchLimits, SearchResult, Side};
use serde::{Deserialize, Serialize};

pub use eval::{
    classify, evaluate, material_diff, positional, EvalWeights, Evaluator, HeuristicEvaluator,
    MaterialEvaluator, SquareClass,
};
pub use search::{
    alpha_beta, iterative_deepening, search, search_parallel, search_with, RootOptions, Scored,
    SearchOutcome, SearchStrategy, INFINITY,
};

/// Which leaf scorer the engine uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvalKind {
    /// Material, mobility and square weights.
    #[default]
    Heuristic,
    /// Disc differential only.
    Material,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimaxConfig {
    pub strategy: SearchStrategy,
    pub eval: EvalKind,
    pub weights: EvalWeights,
    pub parallel: bool,
}

/// Othello engine built on [`search::iterative_deepening`].
///
/// With no time limit the result is identical to a fixed-depth search at
/// `limits.depth`.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: MinimaxConfig,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MinimaxConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, side: Side, limits: SearchLimits) -> Result<SearchResult> {
        limits.start();

        let options = RootOptions {
            strategy: self.config.strategy,
            parallel: self.config.parallel,
        };
        let outcome = match self.config.eval {
            EvalKind::Heuristic => {
                let evaluator = HeuristicEvaluator::new(self.config.weights);
                iterative_deepening(board, side, &limits, &evaluator, options)?
            }
            EvalKind::Material => {
                iterative_deepening(board, side, &limits, &MaterialEvaluator, options)?
            }
        };

        Ok(SearchResult {
            best_move: outcome.best.mv,
            score: outcome.best.score,
            depth: outcome.depth,
            nodes: outcome.nodes,
            stopped: outcome.stopped,
        })
    }

    fn name(&self) -> &str {
        match (self.config.strategy, self.config.eval) {
            (_, EvalKind::Material) => "Material Minimax",
            (SearchStrategy::Minimax, EvalKind::Heuristic) => "Minimax",
            (SearchStrategy::AlphaBeta, EvalKind::Heuristic) => "Alpha-Beta",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_core::{GameBoard, Move};

    #[test]
    fn test_engine_plays_legal_opening() {
        let mut engine = MinimaxEngine::new();
        let board = Board::new();
        let result = engine.search(&board, Side::First, SearchLimits::depth(3)).unwrap();

        assert!(board.legal_moves(Side::First).contains(&result.best_move));
        assert_eq!(result.depth, 3);
        assert!(result.nodes > 0);
        assert!(!result.stopped);
    }

    #[test]
    fn test_engine_passes_without_moves() {
        let mut engine = MinimaxEngine::new();
        let board = Board::from_diagram(
            "
            . O O O . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . X
            ",
        )
        .unwrap();
        let result = engine.search(&board, Side::First, SearchLimits::depth(3)).unwrap();
        assert_eq!(result.best_move, Move::Pass);
    }

    #[test]
    fn test_strategies_agree() {
        let mut board = Board::new();
        board.apply(Move::new(5, 4), Side::First).unwrap();
        board.apply(Move::new(5, 5), Side::Second).unwrap();

        let mut plain = MinimaxEngine::new();
        let mut pruned = MinimaxEngine::with_config(MinimaxConfig {
            strategy: SearchStrategy::AlphaBeta,
            parallel: true,
            ..MinimaxConfig::default()
        });
        let a = plain.search(&board, Side::First, SearchLimits::depth(4)).unwrap();
        let b = pruned.search(&board, Side::First, SearchLimits::depth(4)).unwrap();
        assert_eq!((a.best_move, a.score), (b.best_move, b.score));
        assert!(b.nodes <= a.nodes);
        assert_eq!(pruned.name(), "Alpha-Beta");
    }

    #[test]
    fn test_reported_nodes_cover_every_iteration() {
        let board = Board::new();
        let eval = HeuristicEvaluator::default();
        let expected: u64 = (1..=3)
            .map(|depth| {
                search_with(&board, Side::First, depth, &eval, SearchStrategy::Minimax)
                    .unwrap()
                    .nodes
            })
            .sum();

        let mut engine = MinimaxEngine::new();
        for _ in 0..2 {
            let result = engine.search(&board, Side::First, SearchLimits::depth(3)).unwrap();
            assert_eq!(result.nodes, expected);
        }
    }
}
