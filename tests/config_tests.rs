//! Configuration loading and its effect on a session

use std::env;

use blockfall::core::{GameConfig, GameSession};
use blockfall::types::GameAction;

#[test]
fn test_json_config_overrides_defaults() {
    let config: GameConfig =
        serde_json::from_str(r#"{"base_fall_ms": 800, "fall_step_ms": 100, "seed": 5}"#)
            .expect("config json parses");

    assert_eq!(config.base_fall_ms, 800);
    assert_eq!(config.fall_step_ms, 100);
    assert_eq!(config.min_fall_ms, 100);
    assert_eq!(config.points_per_line, 100);
    assert_eq!(config.seed, Some(5));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let config: GameConfig =
        serde_json::from_str(r#"{"theme": "dark"}"#).expect("config json parses");
    assert_eq!(config, GameConfig::default());
}

// Every environment variable is touched from this single test so parallel tests never race.
#[test]
fn test_env_overrides() {
    env::set_var("BLOCKFALL_SEED", "4242");
    env::set_var("BLOCKFALL_BASE_FALL_MS", " 700 ");
    env::set_var("BLOCKFALL_MIN_FALL_MS", "not a number");

    let config = GameConfig {
        min_fall_ms: 150,
        ..GameConfig::default()
    }
    .with_env_overrides();

    assert_eq!(config.seed, Some(4242));
    assert_eq!(config.base_fall_ms, 700);
    // Unparsable values keep what was there.
    assert_eq!(config.min_fall_ms, 150);

    env::remove_var("BLOCKFALL_SEED");
    env::remove_var("BLOCKFALL_BASE_FALL_MS");
    env::remove_var("BLOCKFALL_MIN_FALL_MS");

    let config = GameConfig::from_env();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_custom_schedule_drives_session() {
    let mut session = GameSession::new(GameConfig {
        base_fall_ms: 300,
        min_fall_ms: 200,
        seed: Some(1),
        ..GameConfig::default()
    });
    session.start();

    assert_eq!(session.fall_interval_ms(), 300);
    assert!(!session.tick(299));
    assert!(session.tick(1));
    assert!(session.apply_action(GameAction::SoftDrop));
}

#[test]
fn test_session_sanitizes_config() {
    let session = GameSession::new(GameConfig {
        base_fall_ms: 0,
        min_fall_ms: 0,
        seed: Some(1),
        ..GameConfig::default()
    });

    assert_eq!(session.config().min_fall_ms, 1);
    assert_eq!(session.fall_interval_ms(), 1);
}
