//! Match configuration

use std::path::Path;

use clap::ValueEnum;
use minimax_engine::SearchStrategy;
use othello_core::Side;
use othello_player::{Player, PlayerConfig};
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};

use crate::results::SelfPlayError;

/// The kinds of player a match can field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EngineKind {
    Minimax,
    #[value(name = "alphabeta")]
    #[serde(rename = "alphabeta")]
    AlphaBeta,
    Heuristic,
    Testing,
    Random,
}

impl EngineKind {
    /// Builds a player for `side`. `depth` applies to the minimax kinds,
    /// `seed` to the random one.
    pub fn player(self, side: Side, depth: u8, seed: Option<u64>) -> Player {
        let config = match self {
            EngineKind::Minimax => PlayerConfig {
                depth,
                ..PlayerConfig::default()
            },
            EngineKind::AlphaBeta => PlayerConfig {
                depth,
                strategy: SearchStrategy::AlphaBeta,
                ..PlayerConfig::default()
            },
            EngineKind::Heuristic => PlayerConfig::heuristic(),
            EngineKind::Testing => PlayerConfig::testing_minimax(),
            EngineKind::Random => {
                let engine = match seed {
                    Some(seed) => RandomEngine::with_seed(seed),
                    None => RandomEngine::new(),
                };
                return Player::with_engine(side, Box::new(engine), PlayerConfig::default());
            }
        };
        Player::with_config(side, config)
    }
}

/// Configuration for a match between two engine kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: u32,
    /// Clock for each side for a whole game, negative for no clock
    pub game_time_ms: i64,
    /// Whether the engines swap sides every other game
    pub alternate_sides: bool,
    /// Search depth for the minimax kinds
    pub depth: u8,
    /// Seed for random players; game `n` uses `seed + n`
    pub seed: Option<u64>,
    pub first: EngineKind,
    pub second: EngineKind,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            game_time_ms: 60_000,
            alternate_sides: true,
            depth: 3,
            seed: None,
            first: EngineKind::AlphaBeta,
            second: EngineKind::Random,
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, SelfPlayError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SelfPlayError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
