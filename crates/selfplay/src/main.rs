//! Self-play CLI
//!
//! Plays two engine kinds against each other and reports the score.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use selfplay::{EngineKind, MatchConfig, MatchRunner};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "selfplay", about = "Play Othello engines against each other")]
struct Args {
    /// Match config (TOML); flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of games to play
    #[arg(long)]
    games: Option<u32>,

    /// Engine for the configured first seat
    #[arg(long, value_enum)]
    first: Option<EngineKind>,

    /// Engine for the configured second seat
    #[arg(long, value_enum)]
    second: Option<EngineKind>,

    /// Clock per side per game in milliseconds, negative for none
    #[arg(long, allow_negative_numbers = true)]
    time_ms: Option<i64>,

    /// Search depth for the minimax kinds
    #[arg(long)]
    depth: Option<u8>,

    /// Seed for random players
    #[arg(long)]
    seed: Option<u64>,

    /// Write every game to this JSON file
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("loading match config {}", path.display()))?,
        None => MatchConfig::default(),
    };
    if let Some(games) = args.games {
        config.games = games;
    }
    if let Some(first) = args.first {
        config.first = first;
    }
    if let Some(second) = args.second {
        config.second = second;
    }
    if let Some(time_ms) = args.time_ms {
        config.game_time_ms = time_ms;
    }
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    tracing::info!(?config, "starting match");
    let result = MatchRunner::new(config).run_match();
    println!("{}", result.generate_report());

    if let Some(path) = &args.out {
        result
            .save(path)
            .with_context(|| format!("writing results to {}", path.display()))?;
        tracing::info!(path = %path.display(), "results saved");
    }
    Ok(())
}
