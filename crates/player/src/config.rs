//! Player configuration, loadable from TOML.
//!
//! ```toml
//! mode = "minimax"
//! depth = 4
//! strategy = "alpha-beta"
//! time_safety = 0.8
//!
//! [weights]
//! corner = 1200
//! ```

use std::path::{Path, PathBuf};

use minimax_engine::{EvalKind, EvalWeights, MinimaxConfig, SearchStrategy, INFINITY};
use othello_core::BOARD_SIZE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse player config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("evaluation weights can score up to {bound}, search scores must stay below {limit}")]
    Weights { bound: i64, limit: i32 },
}

/// How the player picks its move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayMode {
    /// One ply: the move with the best immediate heuristic score.
    Heuristic,
    /// Search to `depth`, cut short when the clock demands it.
    #[default]
    Minimax,
    /// Two plies scored by disc count alone; checks the search, not the heuristic.
    TestingMinimax,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub mode: PlayMode,
    /// Search depth in `Minimax` mode.
    pub depth: u8,
    pub strategy: SearchStrategy,
    /// Search root children on the rayon pool.
    pub parallel: bool,
    /// Fraction of the fair share of the clock a single move may use.
    pub time_safety: f64,
    /// Hard cap per move, on top of the clock share.
    pub max_move_ms: Option<u64>,
    pub weights: EvalWeights,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            mode: PlayMode::Minimax,
            depth: 3,
            strategy: SearchStrategy::Minimax,
            parallel: false,
            time_safety: 0.8,
            max_move_ms: None,
            weights: EvalWeights::default(),
        }
    }
}

impl PlayerConfig {
    pub fn heuristic() -> Self {
        Self {
            mode: PlayMode::Heuristic,
            ..Self::default()
        }
    }

    pub fn testing_minimax() -> Self {
        Self {
            mode: PlayMode::TestingMinimax,
            ..Self::default()
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects weights whose scores could reach the search sentinels.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bound = self.weights.max_score(BOARD_SIZE);
        if bound >= i64::from(INFINITY) {
            return Err(ConfigError::Weights {
                bound,
                limit: INFINITY,
            });
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn search_depth(&self) -> u8 {
        match self.mode {
            PlayMode::Heuristic => 1,
            PlayMode::TestingMinimax => 2,
            PlayMode::Minimax => self.depth.max(1),
        }
    }

    pub fn engine_config(&self) -> MinimaxConfig {
        MinimaxConfig {
            strategy: self.strategy,
            eval: match self.mode {
                PlayMode::TestingMinimax => EvalKind::Material,
                PlayMode::Heuristic | PlayMode::Minimax => EvalKind::Heuristic,
            },
            weights: self.weights,
            parallel: self.parallel,
        }
    }
}
