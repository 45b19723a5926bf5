//! Integration test to ensure a session can start and run headless.

use std::time::Instant;
use tamers::{Entity, FrameInput, GameConfig, GameDisplay, GameMode, GameState, TamersResult};

#[test]
fn test_basic_startup() -> TamersResult<()> {
    let game_state = GameState::new(GameConfig::for_testing(12345))?;

    assert_eq!(game_state.mode, GameMode::Exploring);
    assert_eq!(game_state.tick_count, 0);
    assert_eq!(game_state.wild_creatures.len(), 5);
    assert!(game_state.battle.is_none());

    let field = game_state.field;
    assert!(field.contains(game_state.player.position()));
    for creature in &game_state.wild_creatures {
        assert!(field.contains(creature.position));
        assert_eq!(creature.hp, creature.max_hp);
        assert!((8..=12).contains(&creature.attack));
        assert!((4..=6).contains(&creature.defense));
    }

    Ok(())
}

#[test]
fn test_same_seed_same_spawns() -> TamersResult<()> {
    let a = GameState::new(GameConfig::for_testing(99))?;
    let b = GameState::new(GameConfig::for_testing(99))?;
    let positions = |s: &GameState| {
        s.wild_creatures
            .iter()
            .map(|c| (c.position, c.kind, c.attack, c.defense))
            .collect::<Vec<_>>()
    };
    assert_eq!(positions(&a), positions(&b));
    Ok(())
}

#[test]
fn test_headless_session_runs() -> TamersResult<()> {
    let mut game_state = GameState::new(GameConfig::for_testing(2024))?;
    let mut display = GameDisplay::new(800.0, 600.0);

    let start = Instant::now();
    for i in 0..600 {
        let input = FrameInput::held(i % 40 < 20, i % 40 >= 20, i % 80 < 40, i % 80 >= 40);
        let events = game_state.tick(&input);
        display.record_events(&events);
        if game_state.mode == GameMode::Battle {
            game_state.tick(&FrameInput::action(tamers::BattleAction::Run));
        }
    }
    println!("600 ticks took {:?}", start.elapsed());

    assert!(game_state.tick_count >= 600);
    assert!(display.messages.len() <= display.max_messages);

    game_state.tick(&FrameInput::quit());
    assert!(game_state.is_finished());
    Ok(())
}
