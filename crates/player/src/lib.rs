//! Othello Player
//!
//! The controller a game harness talks to. A [`Player`] owns the
//! authoritative board for its game; each call to [`Player::take_turn`]
//! folds in the opponent's last move, picks a reply with its engine and
//! applies that reply before returning it.
//!
//! ```no_run
//! use othello_core::Side;
//! use othello_player::Player;
//!
//! let mut player = Player::new(Side::First);
//! let reply = player.take_turn(None, 60_000).unwrap();
//! println!("{reply}");
//! ```

mod config;

use std::time::Duration;

use minimax_engine::MinimaxEngine;
use othello_core::{Board, Engine, GameBoard, Move, Result, SearchLimits, Side, TimeBudget};
use tracing::{debug, info};

pub use config::{ConfigError, PlayMode, PlayerConfig};

pub struct Player {
    side: Side,
    board: Board,
    engine: Box<dyn Engine>,
    config: PlayerConfig,
}

impl Player {
    /// A minimax player with the default configuration.
    pub fn new(side: Side) -> Self {
        Self::with_config(side, PlayerConfig::default())
    }

    pub fn with_config(side: Side, config: PlayerConfig) -> Self {
        let engine = Box::new(MinimaxEngine::with_config(config.engine_config()));
        Self::with_engine(side, engine, config)
    }

    /// Drives any engine; `config` still decides depth and time slicing.
    pub fn with_engine(side: Side, engine: Box<dyn Engine>, config: PlayerConfig) -> Self {
        Self {
            side,
            board: Board::new(),
            engine,
            config,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the board, e.g. to resume from a known position.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Plays one turn.
    ///
    /// `opponents_move` is `None` on the very first move of a game and when
    /// the opponent passed; in both cases (and for `Some(Move::Pass)`) the
    /// board is left as is. `ms_left` is the time remaining on this side's
    /// clock; a negative value means no clock.
    ///
    /// Returns [`Move::Pass`] when this side has no legal placement. An
    /// illegal opponent move is an error and leaves the board untouched.
    pub fn take_turn(&mut self, opponents_move: Option<Move>, ms_left: i64) -> Result<Move> {
        if let Some(mv @ Move::Place { .. }) = opponents_move {
            self.board.apply(mv, self.side.opponent())?;
        }

        if !self.board.has_any_move(self.side) {
            info!(side = %self.side, "no legal move, passing");
            return Ok(Move::Pass);
        }

        let limits = self.limits_for(ms_left);
        let result = self.engine.search(&self.board, self.side, limits)?;
        self.board.apply(result.best_move, self.side)?;

        info!(
            side = %self.side,
            mv = %result.best_move,
            score = result.score,
            depth = result.depth,
            nodes = result.nodes,
            stopped = result.stopped,
            "played move"
        );
        Ok(result.best_move)
    }

    fn limits_for(&self, ms_left: i64) -> SearchLimits {
        let depth = self.config.search_depth();
        let slice = TimeBudget::from_ms_left(ms_left)
            .move_slice(self.board.empties(), self.config.time_safety);
        let cap = self.config.max_move_ms.map(Duration::from_millis);
        let move_time = match (slice, cap) {
            (Some(slice), Some(cap)) => Some(slice.min(cap)),
            (slice, cap) => slice.or(cap),
        };
        debug!(depth, ?move_time, ms_left, "search limits");
        SearchLimits::with_move_time(depth, move_time)
    }
}
