//! # Encounter Generation
//!
//! Places the pool of wild creatures on the field at game start.

use crate::game::{Creature, CreatureType, Position};
use crate::generation::{Generator, RandomSource};
use crate::{GameConfig, TamersError, TamersResult};
use log::debug;

/// Spawns wild creatures at uniformly random positions with random kinds and stats.
#[derive(Debug, Clone, Default)]
pub struct EncounterGenerator;

impl EncounterGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator<Vec<Creature>> for EncounterGenerator {
    fn generate(
        &self,
        config: &GameConfig,
        rng: &mut dyn RandomSource,
    ) -> TamersResult<Vec<Creature>> {
        let field = config.field();
        let creatures: Vec<Creature> = (0..config.wild_creature_count)
            .map(|_| {
                let position = Position::new(
                    rng.range_i32(0, field.max_x()),
                    rng.range_i32(0, field.max_y()),
                );
                let kind = CreatureType::SPAWNABLE[rng.index(CreatureType::SPAWNABLE.len())];
                let creature = Creature::new(kind, position, field.tile_size, rng);
                debug!(
                    "Spawned {} creature at ({}, {}) atk={} def={}",
                    kind, position.x, position.y, creature.attack, creature.defense
                );
                creature
            })
            .collect();

        self.validate(&creatures, config)?;
        Ok(creatures)
    }

    fn validate(&self, content: &Vec<Creature>, config: &GameConfig) -> TamersResult<()> {
        if content.len() != config.wild_creature_count {
            return Err(TamersError::InvalidState(format!(
                "expected {} wild creatures, generated {}",
                config.wild_creature_count,
                content.len()
            )));
        }
        let field = config.field();
        if let Some(stray) = content.iter().find(|c| !field.contains(c.position)) {
            return Err(TamersError::InvalidState(format!(
                "creature spawned outside the field at ({}, {})",
                stray.position.x, stray.position.y
            )));
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "EncounterGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{FixedRandom, SeededRandom};

    #[test]
    fn test_spawns_configured_count_inside_field() {
        let config = GameConfig::for_testing(12345);
        let mut rng = SeededRandom::new(12345);
        let creatures = EncounterGenerator::new().generate(&config, &mut rng).unwrap();
        assert_eq!(creatures.len(), 5);
        let field = config.field();
        for creature in &creatures {
            assert!(field.contains(creature.position));
            assert!(CreatureType::SPAWNABLE.contains(&creature.kind));
            assert_eq!(creature.size, 32);
        }
    }

    #[test]
    fn test_fixed_source_places_creatures_predictably() {
        let config = GameConfig::for_testing(1);
        let creatures = EncounterGenerator::new()
            .generate(&config, &mut FixedRandom::new(0.5))
            .unwrap();
        for creature in &creatures {
            assert_eq!(creature.position, Position::new(384, 284));
            assert_eq!(creature.kind, CreatureType::Shadow);
            assert_eq!(creature.attack, 10);
            assert_eq!(creature.defense, 5);
        }
    }

    #[test]
    fn test_validate_rejects_strays() {
        let config = GameConfig::for_testing(1);
        let mut creatures = EncounterGenerator::new()
            .generate(&config, &mut SeededRandom::new(1))
            .unwrap();
        creatures[0].position = Position::new(-10, 0);
        assert!(EncounterGenerator::new().validate(&creatures, &config).is_err());

        creatures.pop();
        assert!(EncounterGenerator::new().validate(&creatures, &config).is_err());
    }

    #[test]
    fn test_generator_type() {
        assert_eq!(EncounterGenerator::new().generator_type(), "EncounterGenerator");
    }
}
