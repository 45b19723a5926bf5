//! # User Interface Elements
//!
//! Text and layout of the HUD and the battle menu.

use crate::config;
use crate::game::{BattleAction, Player};

/// Font size of HUD and menu text.
pub const UI_FONT_SIZE: f32 = 36.0;
/// Vertical distance between HUD lines.
pub const HUD_LINE_HEIGHT: f32 = 40.0;
/// Horizontal distance between battle menu entries.
pub const MENU_SPACING: f32 = 180.0;

/// Lines shown in the top-left corner while exploring.
///
/// # Examples
///
/// ```
/// use tamers::{hud_lines, Player, Position};
///
/// let player = Player::new(Position::new(0, 0), 32);
/// assert_eq!(hud_lines(&player)[0], "Energy: 100");
/// ```
pub fn hud_lines(player: &Player) -> Vec<String> {
    vec![
        format!("Energy: {}", player.energy as i32),
        format!("Level: {}", player.level),
        format!("XP: {}/{}", player.experience, config::EXPERIENCE_PER_LEVEL),
        format!("Creatures: {}", player.creatures.len()),
    ]
}

/// One labelled slot of the battle menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub action: BattleAction,
    pub label: String,
    pub x: f32,
    pub y: f32,
}

/// Battle menu panel along the bottom of the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleMenu {
    pub panel_x: f32,
    pub panel_y: f32,
    pub panel_width: f32,
    pub panel_height: f32,
}

impl BattleMenu {
    /// Lays the menu out for a canvas of the given size.
    pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            panel_x: 50.0,
            panel_y: canvas_height - 120.0,
            panel_width: canvas_width - 100.0,
            panel_height: 100.0,
        }
    }

    /// Menu entries in key order with their text positions.
    pub fn entries(&self) -> Vec<MenuEntry> {
        BattleAction::MENU
            .iter()
            .enumerate()
            .map(|(i, &action)| MenuEntry {
                action,
                label: action.to_string(),
                x: self.panel_x + 50.0 + i as f32 * MENU_SPACING,
                y: self.panel_y + 30.0,
            })
            .collect()
    }
}
