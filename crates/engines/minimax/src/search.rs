//! Fixed-depth minimax, alpha-beta and iterative deepening.
//!
//! Leaves are always scored from the root side's perspective: the root side
//! maximises, its opponent minimises. Children are visited in the board's
//! move order and a later child only replaces the current best when it is
//! strictly better, so the first of several equally good moves wins.

use std::time::{Duration, Instant};

use othello_core::{GameBoard, Move, Result, SearchLimits, Side, TimeControl};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::eval::Evaluator;

/// Larger than any score the evaluator can produce on an 8x8 board.
pub const INFINITY: i32 = 100_000;

/// A backed-up score and the move played at the node that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    pub score: i32,
    pub mv: Move,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Visit every node of the tree.
    #[default]
    Minimax,
    /// Same result as `Minimax`, skipping subtrees that cannot change it.
    AlphaBeta,
}

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best: Scored,
    /// Deepest completed depth
    pub depth: u8,
    pub nodes: u64,
    /// True if a deeper iteration was abandoned for lack of time
    pub stopped: bool,
}

/// Exhaustive minimax to `depth` plies for `side`.
///
/// Returns `Move::Pass` with a leaf score when `side` has no placement or
/// `depth` is zero.
pub fn search<B: GameBoard, E: Evaluator>(
    board: &B,
    side: Side,
    depth: u8,
    evaluator: &E,
) -> Result<Scored> {
    Searcher::new(evaluator, side, None).minimax(board, side, depth, Move::Pass)
}

/// Alpha-beta search. Returns the same move and score as [`search`].
pub fn alpha_beta<B: GameBoard, E: Evaluator>(
    board: &B,
    side: Side,
    depth: u8,
    evaluator: &E,
) -> Result<Scored> {
    Searcher::new(evaluator, side, None).alpha_beta(
        board,
        side,
        depth,
        Move::Pass,
        -INFINITY,
        INFINITY,
    )
}

/// Runs one full-depth search with the chosen strategy and counts nodes.
pub fn search_with<B: GameBoard, E: Evaluator>(
    board: &B,
    side: Side,
    depth: u8,
    evaluator: &E,
    strategy: SearchStrategy,
) -> Result<SearchOutcome> {
    let mut searcher = Searcher::new(evaluator, side, None);
    let best = searcher.run(board, side, depth, strategy)?;
    Ok(SearchOutcome {
        best,
        depth,
        nodes: searcher.nodes,
        stopped: false,
    })
}

/// Like [`search_with`], but each root child is searched on its own rayon
/// task. The winner is still chosen in move order, so the result matches the
/// sequential search.
pub fn search_parallel<B, E>(
    board: &B,
    side: Side,
    depth: u8,
    evaluator: &E,
    strategy: SearchStrategy,
) -> Result<SearchOutcome>
where
    B: GameBoard + Send + Sync,
    E: Evaluator + Sync,
{
    let (best, nodes, stopped) = parallel_root(board, side, depth, evaluator, strategy, None)?;
    Ok(SearchOutcome {
        best,
        depth,
        nodes,
        stopped,
    })
}

/// How the root of an iterative search is explored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RootOptions {
    pub strategy: SearchStrategy,
    /// Split root children across the rayon pool.
    pub parallel: bool,
}

/// Searches depth 1, 2, ... up to `limits.depth` and returns the deepest
/// completed result.
///
/// Depth 1 always runs to completion. Before each deeper iteration the clock
/// is asked whether the previous iteration times the branching factor still
/// fits; during an iteration the clock is polled every few hundred nodes and
/// an interrupted iteration is thrown away.
pub fn iterative_deepening<B, E>(
    board: &B,
    side: Side,
    limits: &SearchLimits,
    evaluator: &E,
    options: RootOptions,
) -> Result<SearchOutcome>
where
    B: GameBoard + Send + Sync,
    E: Evaluator + Sync,
{
    let tc = &limits.time_control;
    let max_depth = limits.depth.max(1);
    let branching = board.mobility(side).max(2);

    let started = Instant::now();
    let (mut best, mut nodes, _) = root_search(board, side, 1, evaluator, options, None)?;
    let mut completed = 1u8;
    let mut last_iteration = started.elapsed();
    let mut stopped = false;
    debug!(depth = 1, score = best.score, mv = %best.mv, nodes, "completed depth");

    for depth in 2..=max_depth {
        let estimate = last_iteration.saturating_mul(branching);
        if tc.check_time() || !tc.has_time_for(estimate) {
            debug!(depth, ?estimate, remaining = ?tc.remaining(), "not enough time for next depth");
            stopped = true;
            break;
        }

        let iteration_start = Instant::now();
        let (result, iteration_nodes, aborted) =
            root_search(board, side, depth, evaluator, options, Some(tc))?;
        nodes += iteration_nodes;
        if aborted {
            warn!(depth, elapsed = ?tc.elapsed(), "time ran out mid-search, keeping depth {}", completed);
            stopped = true;
            break;
        }

        best = result;
        completed = depth;
        last_iteration = iteration_start.elapsed().max(Duration::from_micros(1));
        debug!(depth, score = best.score, mv = %best.mv, nodes, "completed depth");
    }

    Ok(SearchOutcome {
        best,
        depth: completed,
        nodes,
        stopped,
    })
}

fn root_search<B, E>(
    board: &B,
    side: Side,
    depth: u8,
    evaluator: &E,
    options: RootOptions,
    clock: Option<&TimeControl>,
) -> Result<(Scored, u64, bool)>
where
    B: GameBoard + Send + Sync,
    E: Evaluator + Sync,
{
    if options.parallel {
        return parallel_root(board, side, depth, evaluator, options.strategy, clock);
    }
    let mut searcher = Searcher::new(evaluator, side, clock);
    let best = searcher.run(board, side, depth, options.strategy)?;
    Ok((best, searcher.nodes, searcher.stopped))
}

fn parallel_root<B, E>(
    board: &B,
    side: Side,
    depth: u8,
    evaluator: &E,
    strategy: SearchStrategy,
    clock: Option<&TimeControl>,
) -> Result<(Scored, u64, bool)>
where
    B: GameBoard + Send + Sync,
    E: Evaluator + Sync,
{
    let moves = board.legal_moves(side);
    if depth == 0 || moves.is_empty() {
        let mut searcher = Searcher::new(evaluator, side, clock);
        let best = searcher.run(board, side, depth, strategy)?;
        return Ok((best, searcher.nodes, searcher.stopped));
    }

    let children: Vec<Result<(Scored, u64, bool)>> = moves
        .par_iter()
        .map(|&mv| {
            let mut child = board.clone();
            child.apply(mv, side)?;
            let mut searcher = Searcher::new(evaluator, side, clock);
            let reply = match strategy {
                SearchStrategy::Minimax => {
                    searcher.minimax(&child, side.opponent(), depth - 1, mv)?
                }
                SearchStrategy::AlphaBeta => searcher.alpha_beta(
                    &child,
                    side.opponent(),
                    depth - 1,
                    mv,
                    -INFINITY,
                    INFINITY,
                )?,
            };
            Ok((Scored { score: reply.score, mv }, searcher.nodes, searcher.stopped))
        })
        .collect();

    let mut best = Scored {
        score: -INFINITY,
        mv: Move::Pass,
    };
    let mut nodes = 1;
    let mut stopped = false;
    for child in children {
        let (scored, child_nodes, child_stopped) = child?;
        nodes += child_nodes;
        stopped |= child_stopped;
        if scored.score > best.score {
            best = scored;
        }
    }
    Ok((best, nodes, stopped))
}

/// Per-search state: the root side, the leaf scorer and statistics.
struct Searcher<'a, E> {
    evaluator: &'a E,
    root: Side,
    clock: Option<&'a TimeControl>,
    nodes: u64,
    stopped: bool,
}

impl<'a, E: Evaluator> Searcher<'a, E> {
    fn new(evaluator: &'a E, root: Side, clock: Option<&'a TimeControl>) -> Self {
        Self {
            evaluator,
            root,
            clock,
            nodes: 0,
            stopped: false,
        }
    }

    fn run<B: GameBoard>(
        &mut self,
        board: &B,
        side: Side,
        depth: u8,
        strategy: SearchStrategy,
    ) -> Result<Scored> {
        match strategy {
            SearchStrategy::Minimax => self.minimax(board, side, depth, Move::Pass),
            SearchStrategy::AlphaBeta => {
                self.alpha_beta(board, side, depth, Move::Pass, -INFINITY, INFINITY)
            }
        }
    }

    fn out_of_time(&mut self) -> bool {
        if self.stopped {
            return true;
        }
        if let Some(tc) = self.clock {
            if tc.should_check_time(self.nodes) && tc.check_time() {
                self.stopped = true;
            } else if tc.is_stopped() {
                self.stopped = true;
            }
        }
        self.stopped
    }

    fn leaf<B: GameBoard>(&self, board: &B, side: Side, last: Move) -> Scored {
        Scored {
            score: self.evaluator.evaluate(board, last, side, self.root),
            mv: last,
        }
    }

    /// `last` is the move that produced `board`; `side` is to move on it.
    fn minimax<B: GameBoard>(
        &mut self,
        board: &B,
        side: Side,
        depth: u8,
        last: Move,
    ) -> Result<Scored> {
        self.nodes += 1;

        let moves = board.legal_moves(side);
        if depth == 0 || moves.is_empty() {
            return Ok(self.leaf(board, side, last));
        }

        let maximizing = side == self.root;
        let mut best = Scored {
            score: if maximizing { -INFINITY } else { INFINITY },
            mv: Move::Pass,
        };

        for mv in moves {
            if self.out_of_time() {
                break;
            }
            let mut child = board.clone();
            child.apply(mv, side)?;
            let reply = self.minimax(&child, side.opponent(), depth - 1, mv)?;

            let better = if maximizing {
                reply.score > best.score
            } else {
                reply.score < best.score
            };
            if better {
                best = Scored {
                    score: reply.score,
                    mv,
                };
            }
        }
        Ok(best)
    }

    /// Fail-soft alpha-beta. Scores strictly inside `(alpha, beta)` are exact;
    /// outside it they are bounds that cannot change the parent's choice.
    fn alpha_beta<B: GameBoard>(
        &mut self,
        board: &B,
        side: Side,
        depth: u8,
        last: Move,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<Scored> {
        self.nodes += 1;

        let moves = board.legal_moves(side);
        if depth == 0 || moves.is_empty() {
            return Ok(self.leaf(board, side, last));
        }

        let maximizing = side == self.root;
        let mut best = Scored {
            score: if maximizing { -INFINITY } else { INFINITY },
            mv: Move::Pass,
        };

        for mv in moves {
            if self.out_of_time() {
                break;
            }
            let mut child = board.clone();
            child.apply(mv, side)?;
            let reply = self.alpha_beta(&child, side.opponent(), depth - 1, mv, alpha, beta)?;

            if maximizing {
                if reply.score > best.score {
                    best = Scored {
                        score: reply.score,
                        mv,
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if reply.score < best.score {
                    best = Scored {
                        score: reply.score,
                        mv,
                    };
                }
                beta = beta.min(best.score);
            }
            if alpha >= beta {
                break;
            }
        }
        Ok(best)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
