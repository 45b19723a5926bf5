//! Loading game configuration files from disk.

use std::io::Write;
use tamers::{GameConfig, GameState, TamersError, TamersResult};
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_partial_file_keeps_defaults() -> TamersResult<()> {
    let file = config_file(r#"{ "seed": 77, "wild_creature_count": 8 }"#);
    let config = GameConfig::load(file.path())?;

    assert_eq!(config.seed, Some(77));
    assert_eq!(config.wild_creature_count, 8);
    assert_eq!(config.field_width, 800);
    assert_eq!(config.ticks_per_second, 60);

    let state = GameState::new(config)?;
    assert_eq!(state.wild_creatures.len(), 8);
    Ok(())
}

#[test]
fn test_saved_config_loads_back() -> TamersResult<()> {
    let mut config = GameConfig::for_testing(5);
    config.player_speed = 6;
    config.creature_move_chance = 0.25;
    let file = config_file(&config.to_json()?);
    assert_eq!(GameConfig::load(file.path())?, config);
    Ok(())
}

#[test]
fn test_malformed_json_is_a_config_error() {
    let file = config_file("{ \"seed\": ");
    assert!(matches!(
        GameConfig::load(file.path()),
        Err(TamersError::Config(_))
    ));
}

#[test]
fn test_out_of_range_values_are_rejected() {
    let file = config_file(r#"{ "ticks_per_second": 0 }"#);
    assert!(matches!(
        GameConfig::load(file.path()),
        Err(TamersError::InvalidConfig(_))
    ));

    let file = config_file(r#"{ "player_speed": 2147483647 }"#);
    assert!(matches!(
        GameConfig::load(file.path()),
        Err(TamersError::InvalidConfig(_))
    ));

    let file = config_file(r#"{ "creature_move_chance": 1.5 }"#);
    assert!(matches!(
        GameConfig::load(file.path()),
        Err(TamersError::InvalidConfig(_))
    ));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = GameConfig::load(dir.path().join("missing.json"));
    assert!(matches!(result, Err(TamersError::Io(_))));
}
