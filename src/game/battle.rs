//! # Battle Rules
//!
//! Battle menu actions, the per-encounter session and the combat formulas.
//!
//! Damage uses the stat difference between the player's active creature and
//! the opponent; catching succeeds with a probability proportional to the
//! damage already dealt.

use crate::game::{Creature, EntityId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How long a battle status message stays on screen.
pub const STATUS_MESSAGE_TICKS: u32 = 90;

/// Choices offered by the battle menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleAction {
    Attack,
    Special,
    Catch,
    Run,
}

impl BattleAction {
    /// Menu order, matching keys `1` to `4`.
    pub const MENU: [BattleAction; 4] = [
        BattleAction::Attack,
        BattleAction::Special,
        BattleAction::Catch,
        BattleAction::Run,
    ];

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            BattleAction::Attack => "Attack",
            BattleAction::Special => "Special",
            BattleAction::Catch => "Catch",
            BattleAction::Run => "Run",
        }
    }

    /// One-based menu slot, as shown next to the label.
    pub fn hotkey(self) -> u8 {
        match self {
            BattleAction::Attack => 1,
            BattleAction::Special => 2,
            BattleAction::Catch => 3,
            BattleAction::Run => 4,
        }
    }

    /// Action bound to a one-based menu slot.
    pub fn from_hotkey(slot: u8) -> Option<BattleAction> {
        Self::MENU.iter().copied().find(|a| a.hotkey() == slot)
    }
}

impl fmt::Display for BattleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.hotkey(), self.label())
    }
}

/// Short-lived text shown on the battle screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub text: String,
    pub ticks_remaining: u32,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ticks_remaining: STATUS_MESSAGE_TICKS,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.ticks_remaining == 0
    }
}

/// State of a single encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSession {
    /// Wild creature being fought
    pub opponent: EntityId,
    /// Number of actions taken this encounter
    pub turns: u32,
    pub status: Option<StatusMessage>,
}

impl BattleSession {
    /// Starts an encounter against the given wild creature.
    pub fn new(opponent: EntityId) -> Self {
        Self {
            opponent,
            turns: 0,
            status: None,
        }
    }

    /// Replaces the status message and restarts its countdown.
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::new(text));
    }

    /// Counts the status message down by one tick, clearing it when expired.
    pub fn tick(&mut self) {
        if let Some(status) = &mut self.status {
            status.ticks_remaining = status.ticks_remaining.saturating_sub(1);
            if status.is_expired() {
                self.status = None;
            }
        }
    }
}

/// Result of resolving one battle action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// The encounter goes on; the player picks again
    Continue,
    /// The opponent dropped to zero hit points
    Defeated,
    /// The opponent joined the player
    Caught,
    /// The catch attempt failed and the opponent got away
    Escaped,
    /// The player left the encounter
    Fled,
    /// Nothing could be done (no opponent or no active creature)
    NoEffect,
}

impl BattleOutcome {
    /// Returns true if this outcome closes the encounter.
    pub fn ends_battle(self) -> bool {
        matches!(
            self,
            BattleOutcome::Defeated
                | BattleOutcome::Caught
                | BattleOutcome::Escaped
                | BattleOutcome::Fled
        )
    }
}

/// Damage dealt by `attacker` to `defender`: attack minus defense, never negative.
///
/// # Examples
///
/// ```
/// use tamers::{attack_damage, Creature, CreatureType, Position, UniqueAbility};
///
/// let a = Creature::with_stats(
///     CreatureType::Wild,
///     Position::new(0, 0),
///     32,
///     12,
///     5,
///     UniqueAbility::Shield,
/// );
/// let b = Creature::with_stats(
///     CreatureType::Wild,
///     Position::new(0, 0),
///     32,
///     9,
///     4,
///     UniqueAbility::Healing,
/// );
/// assert_eq!(attack_damage(&a, &b), 8);
/// ```
pub fn attack_damage(attacker: &Creature, defender: &Creature) -> i32 {
    (attacker.attack - defender.defense).max(0)
}

/// Probability that a catch attempt succeeds, in `[0, 1]`.
///
/// Grows linearly with missing hit points: an untouched creature cannot be
/// caught, one at zero hit points always is.
///
/// # Examples
///
/// ```
/// use tamers::catch_chance;
///
/// assert_eq!(catch_chance(100, 100), 0.0);
/// assert_eq!(catch_chance(5, 100), 0.95);
/// assert_eq!(catch_chance(0, 100), 1.0);
/// ```
pub fn catch_chance(hp: i32, max_hp: i32) -> f64 {
    if max_hp <= 0 {
        return 1.0;
    }
    (f64::from(max_hp - hp) / f64::from(max_hp)).clamp(0.0, 1.0)
}
