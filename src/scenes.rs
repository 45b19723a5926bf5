//! # Scene Management System
//!
//! The macroquad frame loop: poll input, run the fixed number of ticks the
//! elapsed time calls for, draw, present.

use crate::{
    FixedTimestep, FrameInput, GameDisplay, GameState, InputHandler, MacroquadSurface,
    TamersResult,
};
use log::{debug, info};
use macroquad::prelude::*;
use std::time::Duration;

/// The main scene manager that owns the game and everything around it.
pub struct SceneManager {
    game_state: GameState,
    display: GameDisplay,
    surface: MacroquadSurface,
    input_handler: InputHandler,
    timestep: FixedTimestep,
    /// Edge-triggered input from frames that ran no tick
    pending: FrameInput,
}

impl SceneManager {
    /// Creates a new scene manager for the given game state.
    pub fn new(game_state: GameState, input_handler: InputHandler) -> Self {
        let width = game_state.field.width as f32;
        let height = game_state.field.height as f32;
        let mut display = GameDisplay::new(width, height);
        display.add_message("Welcome to Creature Tamers!");
        display.add_message("Arrows move, 1-4 pick a battle action, ESC quits");

        let timestep = FixedTimestep::from_rate(game_state.config.ticks_per_second);

        Self {
            game_state,
            display,
            surface: MacroquadSurface::new(width, height),
            input_handler,
            timestep,
            pending: FrameInput::idle(),
        }
    }

    /// Runs the frame loop until the player quits or closes the window.
    pub async fn run(&mut self) -> TamersResult<()> {
        prevent_quit();

        loop {
            let mut input = self.input_handler.poll();
            if is_quit_requested() {
                input.quit = true;
            }
            let ticks = self.timestep.advance(Duration::from_secs_f32(get_frame_time()));
            self.advance_frame(input, ticks);

            if self.game_state.is_finished() {
                break;
            }

            self.display.render_game(&self.game_state, &mut self.surface);
            next_frame().await;
        }

        info!(
            "Session ended after {} ticks: {:?}",
            self.game_state.tick_count, self.game_state.statistics
        );
        Ok(())
    }

    /// Applies one frame's input over `ticks` updates.
    ///
    /// A frame that runs no tick keeps its key presses for the next one;
    /// a quit request always runs at least one tick.
    fn advance_frame(&mut self, mut input: FrameInput, ticks: u32) {
        self.carry_pending(&mut input);
        if input.quit || ticks > 0 {
            self.run_ticks(input, ticks.max(1));
        } else {
            self.pending = input;
        }
    }

    /// Merges key presses that arrived while no tick ran into this frame's input.
    fn carry_pending(&mut self, input: &mut FrameInput) {
        let pending = std::mem::take(&mut self.pending);
        if input.battle_action.is_none() {
            input.battle_action = pending.battle_action;
        }
        input.quit |= pending.quit;
    }

    /// Runs `ticks` updates; edge-triggered input applies to the first one only.
    fn run_ticks(&mut self, input: FrameInput, ticks: u32) {
        let held = FrameInput {
            battle_action: None,
            quit: false,
            ..input
        };
        for i in 0..ticks {
            let tick_input = if i == 0 { input } else { held };
            let events = self.game_state.tick(&tick_input);
            if !events.is_empty() {
                debug!("Tick {} produced {} events", self.game_state.tick_count, events.len());
            }
            self.display.record_events(&events);
            if self.game_state.is_finished() {
                break;
            }
        }
    }
}
