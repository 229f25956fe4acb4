//! Match runner for playing games between players

use std::time::Instant;

use othello_core::{Board, GameBoard, Move, Side};
use othello_player::Player;
use tracing::{info, warn};

use crate::config::{EngineKind, MatchConfig};
use crate::results::{Forfeit, GameRecord, MatchResult};

/// Runs matches between two engine kinds
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run the configured number of games.
    ///
    /// Returns the result from the `first` engine kind's perspective.
    pub fn run_match(&self) -> MatchResult {
        let (kind1, kind2) = (self.config.first, self.config.second);
        let mut result = MatchResult::new(&format!("{kind1:?}"), &format!("{kind2:?}"));

        for game_num in 0..self.config.games {
            let engine1_first = !self.config.alternate_sides || game_num % 2 == 0;
            let seed = self.config.seed.map(|s| s + u64::from(game_num));
            let (first_kind, second_kind, engine1_side) = if engine1_first {
                (kind1, kind2, Side::First)
            } else {
                (kind2, kind1, Side::Second)
            };

            let first = first_kind.player(Side::First, self.config.depth, seed);
            let second = second_kind.player(Side::Second, self.config.depth, seed);
            let record = self.play_game(first, second);

            info!(
                game = game_num + 1,
                of = self.config.games,
                first = %record.first,
                second = %record.second,
                x = record.first_discs,
                o = record.second_discs,
                winner = ?record.winner,
                "game finished"
            );
            result.add_game(record, engine1_side);
        }

        result
    }

    /// Play one game to the end.
    ///
    /// Each side's clock starts at `game_time_ms` and is charged the wall
    /// time of its own turns. The game ends after two passes in a row, or
    /// as soon as a side overruns its clock or returns a move the referee
    /// board rejects; that side loses.
    pub fn play_game(&self, mut first: Player, mut second: Player) -> GameRecord {
        let limited = self.config.game_time_ms >= 0;
        let mut clocks = [self.config.game_time_ms; 2];
        let mut used_ms = [0u64; 2];

        let mut referee = Board::new();
        let mut moves = Vec::new();
        let mut last: Option<Move> = None;
        let mut passes = 0;
        let mut side = Side::First;
        let mut forfeit = None;

        while passes < 2 {
            let player = match side {
                Side::First => &mut first,
                Side::Second => &mut second,
            };

            let started = Instant::now();
            let reply = player.take_turn(last, clocks[side.idx()]);
            let spent = started.elapsed().as_millis() as u64;
            used_ms[side.idx()] += spent;

            if limited {
                clocks[side.idx()] -= spent as i64;
                if clocks[side.idx()] < 0 {
                    warn!(%side, spent, "clock ran out");
                    forfeit = Some(Forfeit::Timeout { side });
                    break;
                }
            }

            let checked = reply.and_then(|mv| referee.apply(mv, side).map(|_| mv));
            let mv = match checked {
                Ok(mv) => mv,
                Err(err) => {
                    warn!(%side, %err, "rejected reply");
                    forfeit = Some(Forfeit::IllegalMove {
                        side,
                        detail: err.to_string(),
                    });
                    break;
                }
            };

            moves.push(mv);
            if mv.is_pass() {
                passes += 1;
                last = None;
            } else {
                passes = 0;
                last = Some(mv);
            }
            side = side.opponent();
        }

        let winner = match &forfeit {
            Some(forfeit) => Some(forfeit.side().opponent()),
            None => referee.winner(),
        };

        GameRecord {
            first: first.engine_name().to_string(),
            second: second.engine_name().to_string(),
            moves,
            first_discs: referee.count_of(Side::First),
            second_discs: referee.count_of(Side::Second),
            winner,
            forfeit,
            first_ms: used_ms[0],
            second_ms: used_ms[1],
        }
    }
}

/// Quick utility to play `games` untimed games between two kinds
pub fn quick_match(first: EngineKind, second: EngineKind, games: u32, depth: u8) -> MatchResult {
    let config = MatchConfig {
        games,
        depth,
        game_time_ms: -1,
        first,
        second,
        ..Default::default()
    };
    MatchRunner::new(config).run_match()
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
