//! Self-play driver for Othello players
//!
//! Plays [`othello_player::Player`]s against each other the way a game
//! server would: each side gets a clock for the whole game, receives the
//! opponent's last move and answers with its own. A referee board checks
//! every reply.
//!
//! # Usage
//!
//! ```bash
//! # Ten games, alpha-beta against random, one minute per side
//! cargo run -p selfplay -- --first alphabeta --second random --games 10 --time-ms 60000
//!
//! # From a config file, saving every game
//! cargo run -p selfplay -- --config match.toml --out results.json
//! ```

mod config;
mod match_runner;
mod results;

pub use config::*;
pub use match_runner::*;
pub use results::*;
