//! # Input Module
//!
//! Keyboard polling for the game loop.
//!
//! Arrow keys are sampled as held state for continuous movement; the battle
//! menu keys are edge-triggered so one key press picks exactly one action.

use crate::game::{BattleAction, FrameInput};
use macroquad::prelude::*;

/// Input handler for processing player commands.
///
/// Samples macroquad's keyboard state into a [`FrameInput`] once per frame.
#[derive(Debug, Clone, Copy)]
pub struct InputHandler;

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use tamers::InputHandler;
    ///
    /// let input_handler = InputHandler::new();
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Samples the keyboard for this frame.
    pub fn poll(&self) -> FrameInput {
        FrameInput {
            up: is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::Down),
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            battle_action: self.pressed_battle_action(),
            quit: is_key_pressed(KeyCode::Escape),
        }
    }

    /// First battle menu key pressed this frame, in menu order.
    fn pressed_battle_action(&self) -> Option<BattleAction> {
        BATTLE_KEYS
            .iter()
            .find(|&&key| is_key_pressed(key))
            .and_then(|&key| battle_action_for_key(key))
    }
}

/// Every key bound to a battle menu slot.
const BATTLE_KEYS: [KeyCode; 8] = [
    KeyCode::Key1,
    KeyCode::Kp1,
    KeyCode::Key2,
    KeyCode::Kp2,
    KeyCode::Key3,
    KeyCode::Kp3,
    KeyCode::Key4,
    KeyCode::Kp4,
];

/// Maps a key to its battle menu action.
pub fn battle_action_for_key(key: KeyCode) -> Option<BattleAction> {
    let slot = match key {
        KeyCode::Key1 | KeyCode::Kp1 => 1,
        KeyCode::Key2 | KeyCode::Kp2 => 2,
        KeyCode::Key3 | KeyCode::Kp3 => 3,
        KeyCode::Key4 | KeyCode::Kp4 => 4,
        _ => return None,
    };
    BattleAction::from_hotkey(slot)
}
