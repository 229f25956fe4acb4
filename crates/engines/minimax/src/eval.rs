//! Positional evaluation: disc differential, mobility and square weights.
//!
//! Every score is "goodness for `perspective`". The side that just moved is
//! always `to_move.opponent()`, and both sides are passed in explicitly so
//! the sign of each term never depends on hidden state:
//!
//! - material is `perspective`'s discs minus the opponent's;
//! - mobility counts the placements open to `to_move`, added when that is
//!   `perspective` and subtracted otherwise;
//! - the square weight of the last move is added when `perspective` made it
//!   and subtracted otherwise. A pass has no square weight.

use othello_core::{GameBoard, Move, Side};
use serde::{Deserialize, Serialize};

/// Tunable constants of the heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub corner: i32,
    pub edge: i32,
    /// Diagonal neighbour of a corner.
    pub x_square: i32,
    /// Edge square next to a corner.
    pub c_square: i32,
    /// Per legal move of the side about to move.
    pub mobility: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            corner: 1000,
            edge: 200,
            x_square: -400,
            c_square: -300,
            mobility: 100,
        }
    }
}

impl EvalWeights {
    pub fn square_weight(&self, class: SquareClass) -> i32 {
        match class {
            SquareClass::Corner => self.corner,
            SquareClass::XSquare => self.x_square,
            SquareClass::CSquare => self.c_square,
            SquareClass::Edge => self.edge,
            SquareClass::Interior => 0,
        }
    }

    /// Largest magnitude [`evaluate`] can reach on an `n`x`n` board: every
    /// square counted once as a disc and once as a legal move, plus the
    /// heaviest square weight.
    pub fn max_score(&self, n: u8) -> i64 {
        let squares = i64::from(n) * i64::from(n);
        let heaviest = [self.corner, self.edge, self.x_square, self.c_square]
            .into_iter()
            .map(|w| i64::from(w).abs())
            .max()
            .unwrap_or(0);
        squares + squares * i64::from(self.mobility).abs() + heaviest
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareClass {
    Corner,
    XSquare,
    CSquare,
    Edge,
    Interior,
}

/// Classifies `(x, y)` on an `n`x`n` board. `n` must be at least 4.
pub fn classify(x: u8, y: u8, n: u8) -> SquareClass {
    let last = n - 1;
    let at_edge = |c: u8| c == 0 || c == last;
    let next_to_edge = |c: u8| c == 1 || c == last - 1;

    if at_edge(x) && at_edge(y) {
        SquareClass::Corner
    } else if next_to_edge(x) && next_to_edge(y) {
        SquareClass::XSquare
    } else if (at_edge(x) && next_to_edge(y)) || (next_to_edge(x) && at_edge(y)) {
        SquareClass::CSquare
    } else if at_edge(x) || at_edge(y) {
        SquareClass::Edge
    } else {
        SquareClass::Interior
    }
}

/// Square weight of the placement `mv`; zero for a pass.
pub fn positional<B: GameBoard>(board: &B, mv: Move, weights: &EvalWeights) -> i32 {
    let n = board.size();
    match mv.coords() {
        Some((x, y)) if x < n && y < n => weights.square_weight(classify(x, y, n)),
        _ => 0,
    }
}

/// Disc differential from `perspective`'s point of view.
pub fn material_diff<B: GameBoard>(board: &B, perspective: Side) -> i32 {
    board.count_of(perspective) as i32 - board.count_of(perspective.opponent()) as i32
}

/// Scores `board` for `perspective` after `last_move` was played by
/// `to_move.opponent()`.
pub fn evaluate<B: GameBoard>(
    board: &B,
    last_move: Move,
    to_move: Side,
    perspective: Side,
    weights: &EvalWeights,
) -> i32 {
    let material = material_diff(board, perspective);

    let mobility = weights
        .mobility
        .saturating_mul(board.mobility(to_move) as i32);
    let mobility = if to_move == perspective {
        mobility
    } else {
        mobility.saturating_neg()
    };

    let square = positional(board, last_move, weights);
    let square = if to_move.opponent() == perspective {
        square
    } else {
        square.saturating_neg()
    };

    material.saturating_add(mobility).saturating_add(square)
}

/// Leaf scorer used by the search.
pub trait Evaluator {
    fn evaluate<B: GameBoard>(&self, board: &B, last_move: Move, to_move: Side, perspective: Side)
        -> i32;
}

/// Material, mobility and square weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeuristicEvaluator {
    pub weights: EvalWeights,
}

impl HeuristicEvaluator {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }
}

impl Evaluator for HeuristicEvaluator {
    fn evaluate<B: GameBoard>(
        &self,
        board: &B,
        last_move: Move,
        to_move: Side,
        perspective: Side,
    ) -> i32 {
        evaluate(board, last_move, to_move, perspective, &self.weights)
    }
}

/// Disc differential only. Used to sanity-check the search itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    fn evaluate<B: GameBoard>(&self, board: &B, _: Move, _: Side, perspective: Side) -> i32 {
        material_diff(board, perspective)
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
