//! # Entities
//!
//! The player and the creatures, unified by the [`Entity`] capability trait.

use crate::config;
use crate::game::{
    new_entity_id, AnimatedSprite, Bounds, EntityId, Field, Position, Rgba, SpriteFrame,
};
use crate::generation::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Shared capabilities of every object placed on the field.
pub trait Entity {
    /// Unique identifier of this entity.
    fn id(&self) -> EntityId;

    /// Top-left corner in pixels.
    fn position(&self) -> Position;

    /// Edge length of the entity's square footprint.
    fn size(&self) -> i32;

    /// Frame to draw this tick.
    fn current_frame(&self) -> SpriteFrame;

    /// Advances the entity's animation by the elapsed time.
    fn update_animation(&mut self, elapsed: Duration);

    /// Collision rectangle.
    fn bounds(&self) -> Bounds {
        Bounds::new(self.position(), self.size(), self.size())
    }

    /// Returns true if this entity's bounds overlap another entity's.
    ///
    /// An entity never collides with itself.
    fn collides_with(&self, other: &dyn Entity) -> bool {
        self.id() != other.id() && self.bounds().intersects(&other.bounds())
    }
}

/// Elemental kind of a creature; decides its colors only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CreatureType {
    Crystal,
    Shadow,
    Nature,
    #[default]
    Wild,
}

impl CreatureType {
    /// Kinds drawn when spawning wild creatures.
    pub const SPAWNABLE: [CreatureType; 3] = [
        CreatureType::Crystal,
        CreatureType::Shadow,
        CreatureType::Nature,
    ];

    /// The two animation frame colors for this kind.
    pub fn frame_colors(self) -> [Rgba; 2] {
        match self {
            CreatureType::Crystal => [Rgba::rgb(200, 200, 255), Rgba::rgb(180, 180, 255)],
            CreatureType::Shadow => [Rgba::rgb(100, 0, 100), Rgba::rgb(80, 0, 80)],
            CreatureType::Nature => [Rgba::rgb(0, 180, 0), Rgba::rgb(0, 150, 0)],
            CreatureType::Wild => [Rgba::rgb(150, 75, 0), Rgba::rgb(130, 65, 0)],
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            CreatureType::Crystal => "crystal",
            CreatureType::Shadow => "shadow",
            CreatureType::Nature => "nature",
            CreatureType::Wild => "wild",
        }
    }
}

impl fmt::Display for CreatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Signature ability rolled for every creature.
///
/// Abilities are carried as data only; no battle rule reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UniqueAbility {
    EnergyDrain,
    Healing,
    DoubleAttack,
    Shield,
    CounterAttack,
}

impl UniqueAbility {
    pub const ALL: [UniqueAbility; 5] = [
        UniqueAbility::EnergyDrain,
        UniqueAbility::Healing,
        UniqueAbility::DoubleAttack,
        UniqueAbility::Shield,
        UniqueAbility::CounterAttack,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            UniqueAbility::EnergyDrain => "Energy Drain",
            UniqueAbility::Healing => "Healing",
            UniqueAbility::DoubleAttack => "Double Attack",
            UniqueAbility::Shield => "Shield",
            UniqueAbility::CounterAttack => "Counter Attack",
        }
    }
}

/// A creature, either roaming the wild pool or owned by the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: EntityId,
    pub kind: CreatureType,
    pub position: Position,
    pub size: i32,
    pub sprite: AnimatedSprite,
    /// Current hit points; may drop below zero before a defeat is resolved
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub level: u32,
    pub unique_ability: UniqueAbility,
}

impl Creature {
    /// Range attack stats are rolled from.
    pub const ATTACK_RANGE: (i32, i32) = (8, 12);
    /// Range defense stats are rolled from.
    pub const DEFENSE_RANGE: (i32, i32) = (4, 6);

    /// Creates a creature with rolled attack, defense and ability.
    pub fn new(
        kind: CreatureType,
        position: Position,
        size: i32,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let attack = rng.range_i32(Self::ATTACK_RANGE.0, Self::ATTACK_RANGE.1);
        let defense = rng.range_i32(Self::DEFENSE_RANGE.0, Self::DEFENSE_RANGE.1);
        let ability = UniqueAbility::ALL[rng.index(UniqueAbility::ALL.len())];
        Self::with_stats(kind, position, size, attack, defense, ability)
    }

    /// Creates a creature with explicit stats.
    ///
    /// # Examples
    ///
    /// ```
    /// use tamers::{Creature, CreatureType, Position, UniqueAbility};
    ///
    /// let creature = Creature::with_stats(
    ///     CreatureType::Nature,
    ///     Position::new(0, 0),
    ///     32,
    ///     12,
    ///     4,
    ///     UniqueAbility::Shield,
    /// );
    /// assert_eq!(creature.hp, 100);
    /// assert_eq!(creature.level, 1);
    /// ```
    pub fn with_stats(
        kind: CreatureType,
        position: Position,
        size: i32,
        attack: i32,
        defense: i32,
        unique_ability: UniqueAbility,
    ) -> Self {
        Self {
            id: new_entity_id(),
            kind,
            position,
            size,
            sprite: AnimatedSprite::from_colors(&kind.frame_colors()),
            hp: config::CREATURE_MAX_HP,
            max_hp: config::CREATURE_MAX_HP,
            attack,
            defense,
            level: 1,
            unique_ability,
        }
    }

    /// Hit points for display, never below zero.
    pub fn display_hp(&self) -> i32 {
        self.hp.max(0)
    }

    /// Returns true once hit points have dropped to zero or below.
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Subtracts damage without flooring.
    pub fn take_damage(&mut self, damage: i32) {
        self.hp -= damage;
    }

    /// Rolls a random step; returns true if the creature moved.
    ///
    /// With probability `chance` the creature moves `speed` pixels along a
    /// random one of nine directions (including staying put), then clamps.
    pub fn wander(
        &mut self,
        rng: &mut dyn RandomSource,
        chance: f64,
        speed: i32,
        field: &Field,
    ) -> bool {
        if !rng.chance(chance) {
            return false;
        }
        let step = Position::new(rng.range_i32(-1, 1), rng.range_i32(-1, 1));
        let target = field.clamp(self.position + step.scaled(speed));
        let moved = target != self.position;
        self.position = target;
        moved
    }
}

impl Entity for Creature {
    fn id(&self) -> EntityId {
        self.id
    }

    fn position(&self) -> Position {
        self.position
    }

    fn size(&self) -> i32 {
        self.size
    }

    fn current_frame(&self) -> SpriteFrame {
        self.sprite.current_frame()
    }

    fn update_animation(&mut self, elapsed: Duration) {
        self.sprite.advance(elapsed);
    }
}

/// The player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: EntityId,
    pub position: Position,
    pub size: i32,
    pub sprite: AnimatedSprite,
    pub energy: f32,
    pub level: u32,
    pub experience: u32,
    /// Captured creatures in capture order; the first is the active battler
    pub creatures: Vec<Creature>,
}

impl Player {
    /// Number of generated animation frames.
    const FRAME_COUNT: u8 = 4;

    /// Creates a fresh level 1 player with full energy.
    ///
    /// # Examples
    ///
    /// ```
    /// use tamers::{Player, Position};
    ///
    /// let player = Player::new(Position::new(400, 300), 32);
    /// assert_eq!(player.level, 1);
    /// assert_eq!(player.energy, 100.0);
    /// assert!(player.creatures.is_empty());
    /// ```
    pub fn new(position: Position, size: i32) -> Self {
        let colors: Vec<Rgba> = (0..Self::FRAME_COUNT)
            .map(|i| Rgba::rgb(0, 0, (200 + u16::from(i) * 20).min(255) as u8))
            .collect();
        Self {
            id: new_entity_id(),
            position,
            size,
            sprite: AnimatedSprite::from_colors(&colors),
            energy: config::MAX_ENERGY,
            level: 1,
            experience: 0,
            creatures: Vec::new(),
        }
    }

    /// Moves along `direction` at `speed`, clamps into the field and drains energy.
    ///
    /// Energy only drains when the direction is non-zero. Returns true if the
    /// position changed.
    pub fn move_by(&mut self, direction: Position, speed: i32, field: &Field) -> bool {
        if direction == Position::origin() {
            return false;
        }
        self.energy = (self.energy - config::ENERGY_PER_STEP).max(0.0);
        let target = field.clamp(self.position + direction.scaled(speed));
        let moved = target != self.position;
        self.position = target;
        moved
    }

    /// Adds experience; returns true if a level was gained.
    ///
    /// Reaching the threshold raises the level by one and resets experience
    /// to zero, discarding any overflow.
    pub fn gain_experience(&mut self, amount: u32) -> bool {
        self.experience += amount;
        if self.experience >= config::EXPERIENCE_PER_LEVEL {
            self.level += 1;
            self.experience = 0;
            return true;
        }
        false
    }

    /// The creature that fights for the player, if any.
    pub fn active_creature(&self) -> Option<&Creature> {
        self.creatures.first()
    }

    /// Appends a captured creature to the owned sequence.
    pub fn add_creature(&mut self, creature: Creature) {
        self.creatures.push(creature);
    }
}

impl Entity for Player {
    fn id(&self) -> EntityId {
        self.id
    }

    fn position(&self) -> Position {
        self.position
    }

    fn size(&self) -> i32 {
        self.size
    }

    fn current_frame(&self) -> SpriteFrame {
        self.sprite.current_frame()
    }

    fn update_animation(&mut self, elapsed: Duration) {
        self.sprite.advance(elapsed);
    }
}
