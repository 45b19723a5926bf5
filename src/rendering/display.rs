//! # Display Management
//!
//! Draws a [`GameState`] onto a [`RenderSurface`]: the exploring field with
//! its HUD and message log, or the battle screen with its menu.

use crate::game::{
    Entity, GameEvent, GameMode, GameState, ParticleEffect, Rgba, Weather, FOG_OVERLAY,
};
use crate::rendering::{hud_lines, BattleMenu, RenderSurface, HUD_LINE_HEIGHT, UI_FONT_SIZE};

/// Color of rain streaks.
pub const RAIN_COLOR: Rgba = Rgba::rgb(200, 200, 255);
/// Battle screen background.
pub const BATTLE_BACKGROUND: Rgba = Rgba::rgb(200, 200, 255);
/// Battle arena floor.
pub const ARENA_COLOR: Rgba = Rgba::rgb(100, 200, 100);
/// Battle menu panel.
pub const MENU_PANEL_COLOR: Rgba = Rgba::rgb(230, 230, 230);

const MESSAGE_FONT_SIZE: f32 = 24.0;
const MESSAGE_LINE_HEIGHT: f32 = 25.0;
const PARTICLE_RADIUS: f32 = 2.0;
const BATTLER_BOX: f32 = 100.0;

/// Display manager for the game.
///
/// Keeps the message history fed from game events and renders whichever
/// screen matches the current mode.
pub struct GameDisplay {
    /// Canvas width in pixels
    pub screen_width: f32,
    /// Canvas height in pixels
    pub screen_height: f32,
    /// Message history, oldest first
    pub messages: Vec<String>,
    /// Maximum number of messages to keep
    pub max_messages: usize,
    /// Number of recent messages drawn on the exploring screen
    pub visible_messages: usize,
}

impl GameDisplay {
    /// Creates a display for a canvas of the given size.
    ///
    /// # Examples
    ///
    /// ```
    /// use tamers::GameDisplay;
    ///
    /// let display = GameDisplay::new(800.0, 600.0);
    /// assert!(display.messages.is_empty());
    /// ```
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            messages: Vec::new(),
            max_messages: 50,
            visible_messages: 3,
        }
    }

    /// Adds a message to the history, dropping the oldest beyond the limit.
    pub fn add_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
        if self.messages.len() > self.max_messages {
            let excess = self.messages.len() - self.max_messages;
            self.messages.drain(..excess);
        }
    }

    /// Records the description of every event that has one.
    pub fn record_events(&mut self, events: &[GameEvent]) {
        for text in events.iter().filter_map(GameEvent::description) {
            self.add_message(text);
        }
    }

    /// Messages currently shown on screen, oldest first.
    pub fn recent_messages(&self) -> &[String] {
        let start = self.messages.len().saturating_sub(self.visible_messages);
        &self.messages[start..]
    }

    /// Renders the screen for the current game mode.
    pub fn render_game(&self, state: &GameState, surface: &mut dyn RenderSurface) {
        match state.mode {
            GameMode::Battle => self.render_battle(state, surface),
            GameMode::Exploring | GameMode::Quit => self.render_exploring(state, surface),
        }
    }

    fn render_exploring(&self, state: &GameState, surface: &mut dyn RenderSurface) {
        surface.clear(Rgba::GRASS);

        let environment = &state.environment;
        surface.overlay(environment.night_overlay());
        match environment.weather {
            Weather::Rain => {
                for streak in &environment.rain_streaks {
                    let (x, y) = (streak.x as f32, streak.y as f32);
                    surface.line((x, y), (x - 5.0, y + 10.0), 2.0, RAIN_COLOR);
                }
            }
            Weather::Fog => surface.overlay(FOG_OVERLAY),
            Weather::Clear => {}
        }

        for creature in &state.wild_creatures {
            draw_entity(creature, surface);
        }
        draw_entity(&state.player, surface);
        draw_particles(&state.effects, surface);

        for (i, line) in hud_lines(&state.player).iter().enumerate() {
            let y = 30.0 + i as f32 * HUD_LINE_HEIGHT;
            surface.text(line, 10.0, y, UI_FONT_SIZE, Rgba::WHITE);
        }

        let recent = self.recent_messages();
        for (i, message) in recent.iter().enumerate() {
            let rows_below = (recent.len() - 1 - i) as f32;
            let y = self.screen_height - 20.0 - rows_below * MESSAGE_LINE_HEIGHT;
            surface.text(message, 10.0, y, MESSAGE_FONT_SIZE, Rgba::WHITE);
        }
    }

    fn render_battle(&self, state: &GameState, surface: &mut dyn RenderSurface) {
        let (width, height) = (self.screen_width, self.screen_height);
        surface.clear(BATTLE_BACKGROUND);
        surface.fill_rect(50.0, 100.0, width - 100.0, height - 250.0, ARENA_COLOR);

        if let Some(opponent) = state.opponent() {
            let fill = opponent.current_frame().fill;
            surface.fill_rect(100.0, 150.0, BATTLER_BOX, BATTLER_BOX, fill);
            let hp = format!("HP: {}", opponent.display_hp());
            surface.text(&hp, 100.0, 140.0, UI_FONT_SIZE, Rgba::BLACK);
        }

        if let Some(active) = state.player.active_creature() {
            let x = width - 200.0;
            surface.fill_rect(x, 300.0, BATTLER_BOX, BATTLER_BOX, Rgba::BLUE);
            let hp = format!("HP: {}", active.display_hp());
            surface.text(&hp, x, 290.0, UI_FONT_SIZE, Rgba::BLACK);
        }

        let menu = BattleMenu::new(width, height);
        surface.fill_rect(
            menu.panel_x,
            menu.panel_y,
            menu.panel_width,
            menu.panel_height,
            MENU_PANEL_COLOR,
        );
        for entry in menu.entries() {
            surface.text(&entry.label, entry.x, entry.y, UI_FONT_SIZE, Rgba::BLACK);
        }

        if let Some(status) = state.battle.as_ref().and_then(|b| b.status.as_ref()) {
            surface.text(&status.text, 50.0, 60.0, UI_FONT_SIZE, Rgba::BLACK);
        }

        draw_particles(&state.effects, surface);
    }
}

/// Draws an entity as its frame color with an accent dot in the middle.
fn draw_entity(entity: &dyn Entity, surface: &mut dyn RenderSurface) {
    let frame = entity.current_frame();
    let position = entity.position();
    let size = entity.size() as f32;
    let (x, y) = (position.x as f32, position.y as f32);
    surface.fill_rect(x, y, size, size, frame.fill);
    surface.fill_circle(x + size / 2.0, y + size / 2.0, size / 4.0, frame.accent);
}

fn draw_particles(effects: &[ParticleEffect], surface: &mut dyn RenderSurface) {
    for particle in effects.iter().flat_map(|e| &e.particles) {
        surface.fill_circle(particle.x, particle.y, PARTICLE_RADIUS, particle.color);
    }
}
