//! # Game Events
//!
//! Events emitted by the game controller each tick, and the statistics
//! accumulated from them.

use crate::game::{CreatureType, EntityId, Position, Weather};
use serde::{Deserialize, Serialize};

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player changed position
    PlayerMoved { to: Position },
    /// The player bumped into a wild creature
    EncounterStarted {
        creature: EntityId,
        kind: CreatureType,
    },
    /// The opponent took damage
    CreatureDamaged {
        creature: EntityId,
        damage: i32,
        remaining_hp: i32,
    },
    /// The opponent dropped to zero hit points and left the world
    CreatureDefeated {
        creature: EntityId,
        kind: CreatureType,
        experience: u32,
    },
    /// The opponent joined the player's team
    CreatureCaught {
        creature: EntityId,
        kind: CreatureType,
    },
    /// A catch attempt failed and the encounter ended
    CatchFailed {
        creature: EntityId,
        kind: CreatureType,
        chance: f64,
    },
    /// The player ran from the encounter
    PlayerFled {
        creature: EntityId,
        kind: CreatureType,
    },
    /// The player reached a new level
    PlayerLeveledUp { level: u32 },
    /// The weather was rolled again
    WeatherChanged { weather: Weather },
    /// Free-form message for the log
    Message { text: String },
}

impl GameEvent {
    /// Text for the message log, if the event is worth showing.
    pub fn description(&self) -> Option<String> {
        match self {
            GameEvent::PlayerMoved { .. } => None,
            GameEvent::EncounterStarted { kind, .. } => {
                Some(format!("A wild {} creature appeared!", kind))
            }
            GameEvent::CreatureDamaged {
                damage,
                remaining_hp,
                ..
            } => Some(format!("Hit for {} damage ({} HP left)", damage, remaining_hp)),
            GameEvent::CreatureDefeated {
                kind, experience, ..
            } => Some(format!(
                "The wild {} creature was defeated! +{} XP",
                kind, experience
            )),
            GameEvent::CreatureCaught { kind, .. } => {
                Some(format!("Caught the {} creature!", kind))
            }
            GameEvent::CatchFailed { kind, .. } => {
                Some(format!("The {} creature broke free and ran off", kind))
            }
            GameEvent::PlayerFled { .. } => Some("Got away safely".to_string()),
            GameEvent::PlayerLeveledUp { level } => Some(format!("Reached level {}!", level)),
            GameEvent::WeatherChanged { weather } => {
                Some(format!("The weather turns {}", weather))
            }
            GameEvent::Message { text } => Some(text.clone()),
        }
    }
}

/// Session statistics tracking player progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatistics {
    /// Number of encounters started
    pub encounters: u32,
    /// Number of wild creatures defeated
    pub creatures_defeated: u32,
    /// Number of wild creatures caught
    pub creatures_caught: u32,
    /// Number of catch attempts that failed
    pub failed_catches: u32,
    /// Number of times the player ran
    pub escapes: u32,
    /// Total damage dealt
    pub damage_dealt: u64,
    /// Total steps taken
    pub steps_taken: u64,
}

impl GameStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates statistics based on a game event.
    pub fn update_from_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::PlayerMoved { .. } => {
                self.steps_taken += 1;
            }
            GameEvent::EncounterStarted { .. } => {
                self.encounters += 1;
            }
            GameEvent::CreatureDamaged { damage, .. } => {
                self.damage_dealt += (*damage).max(0) as u64;
            }
            GameEvent::CreatureDefeated { .. } => {
                self.creatures_defeated += 1;
            }
            GameEvent::CreatureCaught { .. } => {
                self.creatures_caught += 1;
            }
            GameEvent::CatchFailed { .. } => {
                self.failed_catches += 1;
            }
            GameEvent::PlayerFled { .. } => {
                self.escapes += 1;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::new_entity_id;

    #[test]
    fn test_statistics_update() {
        let mut stats = GameStatistics::new();
        assert_eq!(stats.steps_taken, 0);

        stats.update_from_event(&GameEvent::PlayerMoved {
            to: Position::new(3, 0),
        });
        assert_eq!(stats.steps_taken, 1);

        stats.update_from_event(&GameEvent::CreatureDamaged {
            creature: new_entity_id(),
            damage: 7,
            remaining_hp: 93,
        });
        assert_eq!(stats.damage_dealt, 7);

        stats.update_from_event(&GameEvent::CatchFailed {
            creature: new_entity_id(),
            kind: CreatureType::Nature,
            chance: 0.07,
        });
        assert_eq!(stats.failed_catches, 1);

        stats.update_from_event(&GameEvent::WeatherChanged {
            weather: Weather::Fog,
        });
        assert_eq!(
            stats,
            GameStatistics {
                steps_taken: 1,
                damage_dealt: 7,
                failed_catches: 1,
                ..GameStatistics::default()
            }
        );
    }

    #[test]
    fn test_descriptions() {
        let moved = GameEvent::PlayerMoved {
            to: Position::origin(),
        };
        assert!(moved.description().is_none());

        let caught = GameEvent::CreatureCaught {
            creature: new_entity_id(),
            kind: CreatureType::Crystal,
        };
        assert_eq!(caught.description().unwrap(), "Caught the crystal creature!");

        let level = GameEvent::PlayerLeveledUp { level: 3 };
        assert_eq!(level.description().unwrap(), "Reached level 3!");
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::WeatherChanged {
            weather: Weather::Rain,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
