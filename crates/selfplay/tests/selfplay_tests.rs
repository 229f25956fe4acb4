//! End-to-end matches through the public API.

use selfplay::{EngineKind, MatchConfig, MatchResult, MatchRunner};

#[test]
fn timed_match_between_searchers_completes() {
    let config = MatchConfig {
        games: 2,
        game_time_ms: 20_000,
        depth: 2,
        first: EngineKind::Minimax,
        second: EngineKind::AlphaBeta,
        ..Default::default()
    };
    let result = MatchRunner::new(config).run_match();

    assert_eq!(result.total_games(), 2);
    for game in &result.games {
        assert!(game.forfeit.is_none(), "{game:?}");
        assert!(game.first_discs + game.second_discs <= 64);
    }
}

#[test]
fn results_survive_a_json_round_trip() {
    let config = MatchConfig {
        games: 1,
        game_time_ms: -1,
        seed: Some(4),
        first: EngineKind::Random,
        second: EngineKind::Random,
        ..Default::default()
    };
    let result = MatchRunner::new(config).run_match();

    let path = std::env::temp_dir().join(format!("selfplay-e2e-{}.json", std::process::id()));
    result.save(&path).unwrap();
    let loaded = MatchResult::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, result);
}
