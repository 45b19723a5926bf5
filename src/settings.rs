//! # Game Settings
//!
//! Runtime parameters of the game loop, loadable from an optional JSON file
//! and overridable from the command line.

use crate::config;
use crate::game::Field;
use crate::{TamersError, TamersResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Runtime configuration for a game session.
///
/// Every field has a default, so a config file only needs to list the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Random seed for reproducible sessions; entropy when absent
    pub seed: Option<u64>,
    /// Play field width in pixels
    pub field_width: i32,
    /// Play field height in pixels
    pub field_height: i32,
    /// Tile (and entity) edge length in pixels
    pub tile_size: i32,
    /// Pixels moved per tick per axis
    pub player_speed: i32,
    /// Number of wild creatures spawned at game start
    pub wild_creature_count: usize,
    /// Per-tick probability of a wild creature taking a random step
    pub creature_move_chance: f64,
    /// Fixed update rate of the game loop
    pub ticks_per_second: u32,
}

impl GameConfig {
    /// Creates the default configuration with an optional seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use tamers::GameConfig;
    ///
    /// let config = GameConfig::new(None);
    /// assert_eq!(config.field_width, 800);
    /// assert_eq!(config.ticks_per_second, 60);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            field_width: config::FIELD_WIDTH,
            field_height: config::FIELD_HEIGHT,
            tile_size: config::TILE_SIZE,
            player_speed: config::PLAYER_SPEED,
            wild_creature_count: config::WILD_CREATURE_COUNT,
            creature_move_chance: config::CREATURE_MOVE_CHANCE,
            ticks_per_second: config::TARGET_TPS,
        }
    }

    /// Creates a seeded configuration for tests.
    pub fn for_testing(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Loads a configuration from a JSON file and validates it.
    pub fn load(path: impl AsRef<Path>) -> TamersResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: GameConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty JSON.
    pub fn to_json(&self) -> TamersResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that the values describe a playable session.
    pub fn validate(&self) -> TamersResult<()> {
        if self.tile_size <= 0 {
            return Err(TamersError::InvalidConfig(format!(
                "tile_size must be positive, got {}",
                self.tile_size
            )));
        }
        if self.field_width < self.tile_size || self.field_height < self.tile_size {
            return Err(TamersError::InvalidConfig(format!(
                "field {}x{} cannot hold a {}px tile",
                self.field_width, self.field_height, self.tile_size
            )));
        }
        if self.player_speed <= 0 || self.player_speed > self.tile_size {
            return Err(TamersError::InvalidConfig(format!(
                "player_speed must be within 1..={}, got {}",
                self.tile_size, self.player_speed
            )));
        }
        if !(0.0..=1.0).contains(&self.creature_move_chance) {
            return Err(TamersError::InvalidConfig(format!(
                "creature_move_chance must be within [0, 1], got {}",
                self.creature_move_chance
            )));
        }
        if self.ticks_per_second == 0 {
            return Err(TamersError::InvalidConfig(
                "ticks_per_second must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The play field described by this configuration.
    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height, self.tile_size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.field(), Field::new(800, 600, 32));
        assert_eq!(config.wild_creature_count, 5);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.player_speed, 3);
        assert_eq!(config.tile_size, 32);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = GameConfig::for_testing(1);
        config.ticks_per_second = 0;
        assert!(matches!(
            config.validate(),
            Err(TamersError::InvalidConfig(_))
        ));

        let mut config = GameConfig::for_testing(1);
        config.tile_size = 900;
        assert!(config.validate().is_err());

        let mut config = GameConfig::for_testing(1);
        config.creature_move_chance = 1.5;
        assert!(config.validate().is_err());

        let mut config = GameConfig::for_testing(1);
        config.player_speed = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::for_testing(1);
        config.player_speed = 33;
        assert!(config.validate().is_err());
        config.player_speed = i32::MAX;
        assert!(config.validate().is_err());
        config.player_speed = 32;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig::for_testing(99);
        let json = config.to_json().unwrap();
        let parsed: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
