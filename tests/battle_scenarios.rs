//! End-to-end battle scenarios driven through the tick loop.

use tamers::{
    BattleAction, Creature, CreatureType, EntityId, FixedRandom, FrameInput, GameConfig,
    GameEvent, GameMode, GameState, Position, TamersResult, UniqueAbility,
};

/// Seeded session with every wild creature parked in the top-left corner.
fn parked_session() -> TamersResult<GameState> {
    let mut config = GameConfig::for_testing(4242);
    config.creature_move_chance = 0.0;
    let mut state = GameState::new(config)?;
    for creature in &mut state.wild_creatures {
        creature.position = Position::origin();
    }
    Ok(state)
}

/// Walks the first wild creature into the player and returns its id.
fn start_encounter(state: &mut GameState) -> EntityId {
    state.wild_creatures[0].position = state.player.position + Position::new(10, 10);
    let events = state.tick(&FrameInput::idle());
    let id = state.wild_creatures[0].id;
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::EncounterStarted { creature, .. } if *creature == id)));
    id
}

#[test]
fn test_run_leaves_everything_untouched() -> TamersResult<()> {
    let mut state = parked_session()?;
    assert_eq!(state.wild_creatures.len(), 5);

    let id = start_encounter(&mut state);
    assert_eq!(state.mode, GameMode::Battle);
    assert_eq!(state.opponent().map(|c| c.id), Some(id));

    let events = state.tick(&FrameInput::action(BattleAction::Run));
    assert!(events.iter().any(|e| matches!(e, GameEvent::PlayerFled { .. })));
    assert_eq!(state.mode, GameMode::Exploring);
    assert_eq!(state.wild_creatures.len(), 5);
    assert!(state.player.creatures.is_empty());
    assert_eq!(state.statistics.escapes, 1);

    // still overlapping, but the encounter does not restart by itself
    state.tick(&FrameInput::idle());
    assert_eq!(state.mode, GameMode::Exploring);
    Ok(())
}

#[test]
fn test_weakened_creature_is_caught() -> TamersResult<()> {
    let mut state = parked_session()?;
    let id = start_encounter(&mut state);
    if let Some(opponent) = state.opponent_mut() {
        opponent.hp = 5;
    }
    state.set_random_source(Box::new(FixedRandom::new(0.5)));

    let events = state.tick(&FrameInput::action(BattleAction::Catch));
    assert!(events.contains(&GameEvent::CreatureCaught {
        creature: id,
        kind: state.player.creatures[0].kind,
    }));
    assert_eq!(state.mode, GameMode::Exploring);
    assert_eq!(state.player.creatures.len(), 1);
    assert_eq!(state.player.creatures[0].id, id);
    assert_eq!(state.wild_creatures.len(), 4);
    assert!(!state.effects.is_empty());
    Ok(())
}

#[test]
fn test_attacking_until_defeat() -> TamersResult<()> {
    let mut state = parked_session()?;
    state.player.add_creature(Creature::with_stats(
        CreatureType::Nature,
        Position::origin(),
        32,
        12,
        5,
        UniqueAbility::DoubleAttack,
    ));

    let id = start_encounter(&mut state);
    if let Some(opponent) = state.opponent_mut() {
        opponent.defense = 4;
    }

    let mut defeats = 0;
    let mut attacks = 0;
    while state.mode == GameMode::Battle {
        let events = state.tick(&FrameInput::action(BattleAction::Attack));
        attacks += 1;
        defeats += events
            .iter()
            .filter(|e| matches!(e, GameEvent::CreatureDefeated { .. }))
            .count();
        assert!(attacks <= 13, "battle should end after 13 hits of 8");
    }

    assert_eq!(attacks, 13);
    assert_eq!(defeats, 1);
    assert_eq!(state.player.experience, 10);
    assert_eq!(state.player.level, 1);
    assert_eq!(state.wild_creatures.len(), 4);
    assert!(state.wild_creatures.iter().all(|c| c.id != id));

    // the defeated creature never comes back into collision checks
    for _ in 0..30 {
        state.tick(&FrameInput::held(false, false, true, false));
        assert_eq!(state.mode, GameMode::Exploring);
    }
    assert_eq!(state.player.experience, 10);
    assert_eq!(state.statistics.damage_dealt, 13 * 8);
    Ok(())
}

#[test]
fn test_failed_catch_sends_creature_away() -> TamersResult<()> {
    let mut state = parked_session()?;
    let id = start_encounter(&mut state);
    state.set_random_source(Box::new(FixedRandom::new(0.0)));

    // full health: chance 0, so even the lowest draw fails
    let events = state.tick(&FrameInput::action(BattleAction::Catch));
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::CatchFailed { creature, .. } if *creature == id)));
    assert_eq!(state.mode, GameMode::Exploring);
    assert_eq!(state.wild_creatures.len(), 5);
    assert!(state.player.creatures.is_empty());
    Ok(())
}
