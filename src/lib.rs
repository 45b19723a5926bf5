//! # Creature Tamers
//!
//! A small 2D creature-collecting game: the player explores an open field,
//! bumps into wild creatures and resolves the encounter through a turn-based
//! battle menu (attack, special, catch, run).
//!
//! ## Architecture Overview
//!
//! - **Game State**: the controller owning the player, the wild pool, the
//!   battle session, effects and the environment clock
//! - **Entity System**: `Player` and `Creature` behind the [`Entity`] trait
//! - **Generation System**: injectable random sources and wild creature spawning
//! - **Rendering System**: scene drawing against a [`RenderSurface`], backed by
//!   macroquad at runtime
//! - **Scene Management**: the fixed-timestep main loop
//!
//! Game logic never touches macroquad directly, so everything under [`game`]
//! and [`generation`] runs headless in tests.

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod scenes;
pub mod settings;
pub mod utils;

pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use scenes::*;
pub use settings::*;
pub use utils::*;

/// Core error type for the Creature Tamers game.
#[derive(thiserror::Error, Debug)]
pub enum TamersError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the Creature Tamers codebase.
pub type TamersResult<T> = Result<T, TamersError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Window title
    pub const WINDOW_TITLE: &str = "Creature Tamers";

    /// Logical canvas width in pixels
    pub const FIELD_WIDTH: i32 = 800;

    /// Logical canvas height in pixels
    pub const FIELD_HEIGHT: i32 = 600;

    /// Edge length of one tile (and of every entity) in pixels
    pub const TILE_SIZE: i32 = 32;

    /// Pixels moved per tick per axis
    pub const PLAYER_SPEED: i32 = 3;

    /// Number of wild creatures spawned at game start
    pub const WILD_CREATURE_COUNT: usize = 5;

    /// Per-tick probability that a wild creature takes a random step
    pub const CREATURE_MOVE_CHANCE: f64 = 0.02;

    /// Ticks per second target for the game loop
    pub const TARGET_TPS: u32 = 60;

    /// Energy spent per movement tick
    pub const ENERGY_PER_STEP: f32 = 0.1;

    /// Player energy at game start
    pub const MAX_ENERGY: f32 = 100.0;

    /// Maximum hit points of every creature
    pub const CREATURE_MAX_HP: i32 = 100;

    /// Experience granted for defeating a wild creature
    pub const DEFEAT_EXPERIENCE: u32 = 10;

    /// Experience needed to gain a level
    pub const EXPERIENCE_PER_LEVEL: u32 = 100;

    /// Animation frame delay in milliseconds
    pub const ANIMATION_DELAY_MS: u64 = 100;
}
