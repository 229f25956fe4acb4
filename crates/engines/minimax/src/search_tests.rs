use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::eval::{HeuristicEvaluator, MaterialEvaluator};
use othello_core::{Board, OthelloError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A uniform game tree whose leaf values are read back through `count_of`,
/// so `MaterialEvaluator` scores a leaf as `leaves[path]` for `Side::First`.
#[derive(Clone)]
struct TreeBoard {
    path: Vec<u8>,
    branching: u8,
    height: usize,
    leaves: Arc<Vec<i32>>,
}

impl TreeBoard {
    fn new(branching: u8, height: usize, leaves: Vec<i32>) -> Self {
        assert_eq!(leaves.len(), (branching as usize).pow(height as u32));
        Self {
            path: Vec::new(),
            branching,
            height,
            leaves: Arc::new(leaves),
        }
    }

    fn value(&self) -> i32 {
        if self.path.len() < self.height {
            return 0;
        }
        let index = self
            .path
            .iter()
            .fold(0usize, |acc, &x| acc * self.branching as usize + x as usize);
        self.leaves[index]
    }
}

impl GameBoard for TreeBoard {
    fn size(&self) -> u8 {
        8
    }

    fn legal_moves(&self, _side: Side) -> Vec<Move> {
        if self.path.len() >= self.height {
            return Vec::new();
        }
        (0..self.branching).map(|x| Move::new(x, 0)).collect()
    }

    fn apply(&mut self, mv: Move, side: Side) -> Result<u32> {
        let (x, _) = mv.coords().ok_or(OthelloError::IllegalPass { side })?;
        self.path.push(x);
        Ok(0)
    }

    fn count_of(&self, side: Side) -> u32 {
        match side {
            Side::First => (1000 + self.value()) as u32,
            Side::Second => 1000,
        }
    }
}

fn best_of(board: &TreeBoard, depth: u8) -> Scored {
    search(board, Side::First, depth, &MaterialEvaluator).unwrap()
}

#[test]
fn test_textbook_two_ply_tree() {
    let tree = TreeBoard::new(3, 2, vec![3, 12, 8, 2, 4, 6, 14, 5, 2]);
    assert_eq!(
        best_of(&tree, 2),
        Scored {
            score: 3,
            mv: Move::new(0, 0)
        }
    );
}

#[test]
fn test_three_ply_alternation() {
    // max(min(max(3,5), max(6,9)), min(max(1,2), max(0,-1))) = max(5, 0)
    let tree = TreeBoard::new(2, 3, vec![3, 5, 6, 9, 1, 2, 0, -1]);
    assert_eq!(
        best_of(&tree, 3),
        Scored {
            score: 5,
            mv: Move::new(0, 0)
        }
    );
}

#[test]
fn test_backed_up_move_is_the_root_move() {
    // Best line is root move 2 then reply 2; the root still reports move 2.
    let tree = TreeBoard::new(3, 2, vec![1, 1, 1, 2, 3, 4, 9, 9, 3]);
    assert_eq!(
        best_of(&tree, 2),
        Scored {
            score: 3,
            mv: Move::new(2, 0)
        }
    );
}

#[test]
fn test_ties_keep_the_first_move() {
    let tree = TreeBoard::new(3, 2, vec![4, 6, 5, 7, 4, 9, 4, 8, 4]);
    assert_eq!(best_of(&tree, 2).mv, Move::new(0, 0));

    let tree = TreeBoard::new(3, 1, vec![1, 7, 7]);
    assert_eq!(
        best_of(&tree, 1),
        Scored {
            score: 7,
            mv: Move::new(1, 0)
        }
    );
}

#[test]
fn test_depth_zero_and_no_moves_are_leaves() {
    let tree = TreeBoard::new(2, 1, vec![5, 6]);
    assert_eq!(
        best_of(&tree, 0),
        Scored {
            score: 0,
            mv: Move::Pass
        }
    );

    // Depth larger than the tree stops at the leaves.
    assert_eq!(
        best_of(&tree, 5),
        Scored {
            score: 6,
            mv: Move::new(1, 0)
        }
    );
}

#[test]
fn test_exhaustive_node_count() {
    let tree = TreeBoard::new(3, 2, vec![0; 9]);
    let outcome =
        search_with(&tree, Side::First, 2, &MaterialEvaluator, SearchStrategy::Minimax).unwrap();
    assert_eq!(outcome.nodes, 1 + 3 + 9);
}

#[test]
fn test_alpha_beta_matches_minimax_on_random_trees() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let leaves: Vec<i32> = (0..81).map(|_| rng.gen_range(-20..20)).collect();
        let tree = TreeBoard::new(3, 4, leaves);
        for depth in 1..=4 {
            let full = search_with(&tree, Side::First, depth, &MaterialEvaluator, SearchStrategy::Minimax)
                .unwrap();
            let pruned =
                search_with(&tree, Side::First, depth, &MaterialEvaluator, SearchStrategy::AlphaBeta)
                    .unwrap();
            assert_eq!(full.best, pruned.best, "depth {depth}");
            assert!(pruned.nodes <= full.nodes);
            assert_eq!(
                alpha_beta(&tree, Side::First, depth, &MaterialEvaluator).unwrap(),
                full.best
            );
        }
    }
}

#[test]
fn test_parallel_root_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let leaves: Vec<i32> = (0..64).map(|_| rng.gen_range(-5..5)).collect();
        let tree = TreeBoard::new(4, 3, leaves);
        for strategy in [SearchStrategy::Minimax, SearchStrategy::AlphaBeta] {
            let sequential = search_with(&tree, Side::First, 3, &MaterialEvaluator, strategy).unwrap();
            let parallel = search_parallel(&tree, Side::First, 3, &MaterialEvaluator, strategy).unwrap();
            assert_eq!(sequential.best, parallel.best);
        }
    }
}

#[test]
fn test_startpos_depth_one_picks_first_of_symmetric_openings() {
    let board = Board::new();
    let result = search(&board, Side::First, 1, &HeuristicEvaluator::default()).unwrap();
    // Every opening leaves 4-1 discs and three replies: 3 - 300.
    assert_eq!(
        result,
        Scored {
            score: -297,
            mv: Move::new(3, 2)
        }
    );
}

#[test]
fn test_startpos_depth_three_is_legal_and_finite() {
    let board = Board::new();
    let eval = HeuristicEvaluator::default();
    let result = search(&board, Side::First, 3, &eval).unwrap();
    assert!(board.legal_moves(Side::First).contains(&result.mv));
    assert!(result.score.abs() < INFINITY);
    // The four openings are symmetric, so the first one wins the tie.
    assert_eq!(result.mv, Move::new(3, 2));
    assert_eq!(alpha_beta(&board, Side::First, 3, &eval).unwrap(), result);
}

#[test]
fn test_side_without_moves_gets_pass() {
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
    let result = search(&board, Side::First, 3, &MaterialEvaluator).unwrap();
    assert_eq!(
        result,
        Scored {
            score: -2,
            mv: Move::Pass
        }
    );
}

#[test]
fn test_iterative_deepening_unlimited_matches_fixed_depth() {
    let mut board = Board::new();
    board.apply(Move::new(2, 3), Side::First).unwrap();
    let eval = HeuristicEvaluator::default();

    let limits = SearchLimits::depth(3);
    limits.start();
    let outcome =
        iterative_deepening(&board, Side::Second, &limits, &eval, RootOptions::default()).unwrap();
    assert_eq!(outcome.depth, 3);
    assert!(!outcome.stopped);
    assert_eq!(
        outcome.best,
        search(&board, Side::Second, 3, &eval).unwrap()
    );

    let parallel = RootOptions {
        strategy: SearchStrategy::AlphaBeta,
        parallel: true,
    };
    let limits = SearchLimits::depth(3);
    limits.start();
    let outcome = iterative_deepening(&board, Side::Second, &limits, &eval, parallel).unwrap();
    assert_eq!(
        outcome.best,
        search(&board, Side::Second, 3, &eval).unwrap()
    );
}

#[test]
fn test_iterative_deepening_without_time_keeps_depth_one() {
    let board = Board::new();
    let eval = HeuristicEvaluator::default();
    let limits = SearchLimits::depth_and_time(6, Duration::ZERO);
    limits.start();

    let outcome =
        iterative_deepening(&board, Side::First, &limits, &eval, RootOptions::default()).unwrap();
    assert_eq!(outcome.depth, 1);
    assert!(outcome.stopped);
    assert_eq!(outcome.best, search(&board, Side::First, 1, &eval).unwrap());
}
