//! # Game Module
//!
//! Core game state management, entities and battle rules.
//!
//! This module contains the fundamental building blocks of Creature Tamers:
//! - The game controller and its exploring/battle state machine
//! - Player and creature entities with their stats
//! - Battle resolution and experience rules
//! - Cosmetic systems: animation cursors, particle effects, day/night and weather

pub mod animation;
pub mod battle;
pub mod effects;
pub mod entities;
pub mod environment;
pub mod events;
pub mod state;

pub use animation::*;
pub use battle::*;
pub use effects::*;
pub use entities::*;
pub use environment::*;
pub use events::*;
pub use state::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a 2D pixel coordinate on the play field.
///
/// # Examples
///
/// ```
/// use tamers::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin position (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Returns this position scaled component-wise.
    pub fn scaled(self, factor: i32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

/// Axis-aligned rectangle in pixels, used for entity bounds and collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    /// Creates a rectangle with its top-left corner at `origin`.
    pub fn new(origin: Position, width: i32, height: i32) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width,
            height,
        }
    }

    /// Returns true if the two rectangles share a region of positive area.
    ///
    /// Rectangles that merely touch along an edge do not intersect.
    ///
    /// # Examples
    ///
    /// ```
    /// use tamers::{Bounds, Position};
    ///
    /// let a = Bounds::new(Position::new(0, 0), 32, 32);
    /// let b = Bounds::new(Position::new(31, 31), 32, 32);
    /// let c = Bounds::new(Position::new(32, 0), 32, 32);
    /// assert!(a.intersects(&b));
    /// assert!(!a.intersects(&c));
    /// ```
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// The rectangular play field that every entity is clamped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub width: i32,
    pub height: i32,
    pub tile_size: i32,
}

impl Field {
    /// Creates a field of the given pixel size and tile size.
    pub fn new(width: i32, height: i32, tile_size: i32) -> Self {
        Self {
            width,
            height,
            tile_size,
        }
    }

    /// Largest x an entity's top-left corner may take.
    pub fn max_x(&self) -> i32 {
        self.width - self.tile_size
    }

    /// Largest y an entity's top-left corner may take.
    pub fn max_y(&self) -> i32 {
        self.height - self.tile_size
    }

    /// Clamps a position component-wise so a tile placed there stays inside the field.
    ///
    /// # Examples
    ///
    /// ```
    /// use tamers::{Field, Position};
    ///
    /// let field = Field::new(800, 600, 32);
    /// assert_eq!(field.clamp(Position::new(-4, 900)), Position::new(0, 568));
    /// ```
    pub fn clamp(&self, position: Position) -> Position {
        Position::new(
            position.x.clamp(0, self.max_x()),
            position.y.clamp(0, self.max_y()),
        )
    }

    /// Returns true if a tile at `position` lies entirely inside the field.
    pub fn contains(&self, position: Position) -> bool {
        (0..=self.max_x()).contains(&position.x) && (0..=self.max_y()).contains(&position.y)
    }

    /// Center of the field, used as the player spawn.
    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(
            crate::config::FIELD_WIDTH,
            crate::config::FIELD_HEIGHT,
            crate::config::TILE_SIZE,
        )
    }
}

/// Backend-independent RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const RED: Rgba = Rgba::rgb(255, 0, 0);
    pub const BLUE: Rgba = Rgba::rgb(0, 0, 255);
    pub const CYAN: Rgba = Rgba::rgb(0, 255, 255);
    pub const GRASS: Rgba = Rgba::rgb(34, 139, 34);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Creates a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Returns the same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }
}

/// Keyboard state sampled once per tick.
///
/// Directional flags are held-state; `battle_action` is edge-triggered and
/// carries at most one menu choice per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub battle_action: Option<BattleAction>,
    pub quit: bool,
}

impl FrameInput {
    /// Input with no keys held.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Input holding the given direction keys.
    pub fn held(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up,
            down,
            left,
            right,
            ..Self::default()
        }
    }

    /// Input carrying a single battle menu choice.
    pub fn action(action: BattleAction) -> Self {
        Self {
            battle_action: Some(action),
            ..Self::default()
        }
    }

    /// Input requesting the game to end.
    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Self::default()
        }
    }

    /// Net direction as `(right - left, down - up)`.
    ///
    /// Diagonals are not normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// use tamers::{FrameInput, Position};
    ///
    /// let input = FrameInput::held(true, false, true, true);
    /// assert_eq!(input.direction(), Position::new(0, -1));
    /// ```
    pub fn direction(&self) -> Position {
        Position::new(
            i32::from(self.right) - i32::from(self.left),
            i32::from(self.down) - i32::from(self.up),
        )
    }
}

/// Unique identifier for game entities.
pub type EntityId = Uuid;

/// Creates a new unique entity ID.
pub fn new_entity_id() -> EntityId {
    Uuid::new_v4()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_arithmetic() {
        let pos1 = Position::new(5, 10);
        let pos2 = Position::new(3, 2);
        assert_eq!(pos1 + pos2, Position::new(8, 12));
        assert_eq!(pos1 - pos2, Position::new(2, 8));
        assert_eq!(pos2.scaled(3), Position::new(9, 6));
    }

    #[test]
    fn test_bounds_overlap() {
        let a = Bounds::new(Position::new(100, 100), 32, 32);
        assert!(a.intersects(&Bounds::new(Position::new(120, 90), 32, 32)));
        assert!(!a.intersects(&Bounds::new(Position::new(100, 132), 32, 32)));
        assert!(!a.intersects(&Bounds::new(Position::new(300, 300), 32, 32)));
        assert_eq!(a.center(), Position::new(116, 116));
    }

    #[test]
    fn test_field_clamp() {
        let field = Field::default();
        assert_eq!(field.clamp(Position::new(10, 10)), Position::new(10, 10));
        assert_eq!(field.clamp(Position::new(-1, -1)), Position::origin());
        assert_eq!(field.clamp(Position::new(1000, 1000)), Position::new(768, 568));
        assert!(field.contains(Position::new(768, 568)));
        assert!(!field.contains(Position::new(769, 0)));
        assert_eq!(field.center(), Position::new(400, 300));
    }

    #[test]
    fn test_frame_input_direction() {
        assert_eq!(FrameInput::idle().direction(), Position::origin());
        assert_eq!(
            FrameInput::held(false, true, false, true).direction(),
            Position::new(1, 1)
        );
        assert_eq!(
            FrameInput::held(true, true, true, true).direction(),
            Position::origin()
        );
    }

    #[test]
    fn test_entity_id_uniqueness() {
        let id1 = new_entity_id();
        let id2 = new_entity_id();
        assert_ne!(id1, id2);
    }
}
