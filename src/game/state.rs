//! # Game State Module
//!
//! Central game state and the exploring/battle state machine.
//!
//! [`GameState`] owns the player, the wild creature pool, the active battle
//! session, particle effects and the environment clock. It consumes one
//! [`FrameInput`] per tick and reports what happened as [`GameEvent`]s.

use crate::config;
use crate::game::{
    attack_damage, catch_chance, update_effects, BattleAction, BattleOutcome, BattleSession,
    Creature, Entity, EntityId, Environment, Field, FrameInput, GameEvent, GameStatistics,
    ParticleEffect, Player, Rgba,
};
use crate::generation::{utils, EncounterGenerator, Generator, RandomSource};
use crate::{GameConfig, TamersResult};
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level mode of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Walking around the field
    #[default]
    Exploring,
    /// Fighting a single wild creature
    Battle,
    /// The session is over
    Quit,
}

/// Central game state containing all game data and systems.
pub struct GameState {
    /// Configuration the session was started with
    pub config: GameConfig,
    /// Play field every entity is clamped into
    pub field: Field,
    pub player: Player,
    /// Creatures roaming the field, in spawn order
    pub wild_creatures: Vec<Creature>,
    pub mode: GameMode,
    /// Present exactly while `mode` is `Battle`
    pub battle: Option<BattleSession>,
    pub effects: Vec<ParticleEffect>,
    pub environment: Environment,
    pub statistics: GameStatistics,
    /// Ticks simulated so far
    pub tick_count: u64,
    /// Creature the player just left a battle with; ignored for collisions
    /// until the two stop overlapping
    disengaged_from: Option<EntityId>,
    rng: Box<dyn RandomSource>,
}

impl GameState {
    /// Creates a new session from a configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use tamers::{GameConfig, GameMode, GameState};
    ///
    /// let state = GameState::new(GameConfig::for_testing(12345)).unwrap();
    /// assert_eq!(state.mode, GameMode::Exploring);
    /// assert_eq!(state.wild_creatures.len(), 5);
    /// assert!(state.player.creatures.is_empty());
    /// ```
    pub fn new(config: GameConfig) -> TamersResult<Self> {
        let rng = utils::create_rng(&config);
        info!("Using random seed {}", rng.seed());
        Self::with_random_source(config, Box::new(rng))
    }

    /// Creates a new session drawing all randomness from `rng`.
    pub fn with_random_source(
        config: GameConfig,
        mut rng: Box<dyn RandomSource>,
    ) -> TamersResult<Self> {
        config.validate()?;
        let field = config.field();

        let generator = EncounterGenerator::new();
        let wild_creatures = generator.generate(&config, rng.as_mut())?;
        info!(
            "{} placed {} wild creatures",
            generator.generator_type(),
            wild_creatures.len()
        );

        let player = Player::new(field.clamp(field.center()), field.tile_size);

        Ok(Self {
            config,
            field,
            player,
            wild_creatures,
            mode: GameMode::Exploring,
            battle: None,
            effects: Vec::new(),
            environment: Environment::new(),
            statistics: GameStatistics::new(),
            tick_count: 0,
            disengaged_from: None,
            rng,
        })
    }

    /// Replaces the random source used from now on.
    pub fn set_random_source(&mut self, rng: Box<dyn RandomSource>) {
        self.rng = rng;
    }

    /// Wall-clock time one tick represents.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.config.ticks_per_second))
    }

    /// Returns true once the player asked to quit.
    pub fn is_finished(&self) -> bool {
        self.mode == GameMode::Quit
    }

    /// Simulates one tick.
    ///
    /// In `Exploring` the player moves, wild creatures wander and collisions
    /// may start a battle. In `Battle` the input's menu choice, if any, is
    /// resolved. The environment and effects advance in every mode.
    pub fn tick(&mut self, input: &FrameInput) -> Vec<GameEvent> {
        if self.is_finished() {
            return Vec::new();
        }
        if input.quit {
            info!("Player quit after {} ticks", self.tick_count);
            self.mode = GameMode::Quit;
            self.battle = None;
            return Vec::new();
        }

        self.tick_count += 1;
        let mut events = Vec::new();

        if let Some(weather) = self.environment.update(self.rng.as_mut(), &self.field) {
            debug!("Weather changed to {}", weather);
            events.push(GameEvent::WeatherChanged { weather });
        }

        match self.mode {
            GameMode::Exploring => self.update_exploring(input, &mut events),
            GameMode::Battle => {
                if let Some(action) = input.battle_action {
                    self.perform_battle_action_into(action, &mut events);
                }
                if let Some(session) = &mut self.battle {
                    session.tick();
                }
            }
            GameMode::Quit => {}
        }

        update_effects(&mut self.effects);

        for event in &events {
            self.statistics.update_from_event(event);
        }
        events
    }

    /// Moves the player and creatures, then checks for an encounter.
    fn update_exploring(&mut self, input: &FrameInput, events: &mut Vec<GameEvent>) {
        let elapsed = self.tick_duration();
        let speed = self.config.player_speed;

        if self.player.move_by(input.direction(), speed, &self.field) {
            trace!("Player moved to {:?}", self.player.position);
            events.push(GameEvent::PlayerMoved {
                to: self.player.position,
            });
        }
        self.player.update_animation(elapsed);

        let chance = self.config.creature_move_chance;
        for creature in &mut self.wild_creatures {
            creature.wander(self.rng.as_mut(), chance, speed, &self.field);
            creature.update_animation(elapsed);
        }

        if let Some(id) = self.disengaged_from {
            let still_touching = self
                .wild_creatures
                .iter()
                .any(|c| c.id == id && self.player.collides_with(c));
            if !still_touching {
                self.disengaged_from = None;
            }
        }

        if let Some(index) = self.find_collision() {
            self.start_battle(index, events);
        }
    }

    /// Index of the first wild creature overlapping the player.
    pub fn find_collision(&self) -> Option<usize> {
        self.wild_creatures
            .iter()
            .position(|c| Some(c.id) != self.disengaged_from && self.player.collides_with(c))
    }

    fn start_battle(&mut self, index: usize, events: &mut Vec<GameEvent>) {
        let opponent = &self.wild_creatures[index];
        info!(
            "Encounter with {} creature (hp {}, atk {}, def {})",
            opponent.kind, opponent.hp, opponent.attack, opponent.defense
        );
        events.push(GameEvent::EncounterStarted {
            creature: opponent.id,
            kind: opponent.kind,
        });
        self.battle = Some(BattleSession::new(opponent.id));
        self.mode = GameMode::Battle;
    }

    /// The wild creature currently being fought.
    pub fn opponent(&self) -> Option<&Creature> {
        self.opponent_index().map(|i| &self.wild_creatures[i])
    }

    /// Mutable access to the wild creature currently being fought.
    pub fn opponent_mut(&mut self) -> Option<&mut Creature> {
        self.opponent_index().map(|i| &mut self.wild_creatures[i])
    }

    fn opponent_index(&self) -> Option<usize> {
        let session = self.battle.as_ref()?;
        self.wild_creatures
            .iter()
            .position(|c| c.id == session.opponent)
    }

    /// Resolves one battle menu choice outside the tick loop.
    ///
    /// Returns the outcome together with the events it produced; statistics
    /// are updated as if the action came through [`GameState::tick`].
    pub fn perform_battle_action(
        &mut self,
        action: BattleAction,
    ) -> (BattleOutcome, Vec<GameEvent>) {
        let mut events = Vec::new();
        let outcome = self.perform_battle_action_into(action, &mut events);
        for event in &events {
            self.statistics.update_from_event(event);
        }
        (outcome, events)
    }

    fn perform_battle_action_into(
        &mut self,
        action: BattleAction,
        events: &mut Vec<GameEvent>,
    ) -> BattleOutcome {
        if self.mode != GameMode::Battle {
            return BattleOutcome::NoEffect;
        }
        let Some(index) = self.opponent_index() else {
            debug!("Ignoring {:?}: no opponent in battle", action);
            return BattleOutcome::NoEffect;
        };

        let outcome = match action {
            BattleAction::Attack => self.attack(index, events),
            BattleAction::Special => {
                let text = "Special moves are not ready yet";
                self.set_battle_status(text);
                events.push(GameEvent::Message {
                    text: text.to_string(),
                });
                BattleOutcome::Continue
            }
            BattleAction::Catch => self.attempt_catch(index, events),
            BattleAction::Run => {
                let opponent = &self.wild_creatures[index];
                events.push(GameEvent::PlayerFled {
                    creature: opponent.id,
                    kind: opponent.kind,
                });
                self.disengaged_from = Some(opponent.id);
                BattleOutcome::Fled
            }
        };

        if outcome != BattleOutcome::NoEffect {
            if let Some(session) = &mut self.battle {
                session.turns += 1;
            }
        }
        if outcome.ends_battle() {
            info!("Battle ended: {:?}", outcome);
            self.battle = None;
            self.mode = GameMode::Exploring;
        }
        outcome
    }

    fn attack(&mut self, index: usize, events: &mut Vec<GameEvent>) -> BattleOutcome {
        let damage = match self.player.active_creature() {
            Some(active) => attack_damage(active, &self.wild_creatures[index]),
            None => {
                debug!("Attack ignored: player owns no creature");
                self.set_battle_status("You have no creature to fight with!");
                return BattleOutcome::NoEffect;
            }
        };

        let opponent = &mut self.wild_creatures[index];
        opponent.take_damage(damage);
        let (id, kind, center) = (opponent.id, opponent.kind, opponent.bounds().center());
        events.push(GameEvent::CreatureDamaged {
            creature: id,
            damage,
            remaining_hp: opponent.display_hp(),
        });
        self.effects
            .push(ParticleEffect::burst(center, Rgba::RED, self.rng.as_mut()));

        if !self.wild_creatures[index].is_defeated() {
            self.set_battle_status(format!("Hit for {} damage!", damage));
            return BattleOutcome::Continue;
        }

        self.wild_creatures.remove(index);
        events.push(GameEvent::CreatureDefeated {
            creature: id,
            kind,
            experience: config::DEFEAT_EXPERIENCE,
        });
        if self.player.gain_experience(config::DEFEAT_EXPERIENCE) {
            info!("Player reached level {}", self.player.level);
            events.push(GameEvent::PlayerLeveledUp {
                level: self.player.level,
            });
        }
        BattleOutcome::Defeated
    }

    fn attempt_catch(&mut self, index: usize, events: &mut Vec<GameEvent>) -> BattleOutcome {
        let opponent = &self.wild_creatures[index];
        let chance = catch_chance(opponent.hp, opponent.max_hp);
        let roll = self.rng.next_f64();
        debug!("Catch roll {:.3} against chance {:.3}", roll, chance);

        if roll >= chance {
            let (id, kind) = (opponent.id, opponent.kind);
            events.push(GameEvent::CatchFailed {
                creature: id,
                kind,
                chance,
            });
            self.disengaged_from = Some(id);
            return BattleOutcome::Escaped;
        }

        let creature = self.wild_creatures.remove(index);
        self.effects.push(ParticleEffect::burst(
            creature.bounds().center(),
            Rgba::CYAN,
            self.rng.as_mut(),
        ));
        events.push(GameEvent::CreatureCaught {
            creature: creature.id,
            kind: creature.kind,
        });
        self.player.add_creature(creature);
        info!("Player now owns {} creatures", self.player.creatures.len());
        BattleOutcome::Caught
    }

    fn set_battle_status(&mut self, text: impl Into<String>) {
        if let Some(session) = &mut self.battle {
            session.set_status(text);
        }
    }
}
