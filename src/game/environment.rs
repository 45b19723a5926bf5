//! # Environment
//!
//! Day/night clock and weather. Purely cosmetic: nothing here feeds back
//! into movement or battles.

use crate::game::{Field, Position, Rgba};
use crate::generation::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a full day in clock units.
pub const DAY_LENGTH: u32 = 24_000;
/// Clock units added per tick.
pub const TIME_STEP: u32 = 10;
/// Rain streaks drawn per frame.
pub const RAIN_STREAKS: usize = 10;
/// Maximum alpha of the night overlay.
pub const MAX_NIGHT_ALPHA: f32 = 128.0;
/// Tint of the night overlay.
pub const NIGHT_TINT: Rgba = Rgba::rgb(0, 0, 50);
/// Fog overlay color.
pub const FOG_OVERLAY: Rgba = Rgba::new(255, 255, 255, 64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Weather {
    #[default]
    Clear,
    Rain,
    Fog,
}

impl Weather {
    pub const ALL: [Weather; 3] = [Weather::Clear, Weather::Rain, Weather::Fog];
    /// Relative odds of each entry of [`Weather::ALL`].
    pub const WEIGHTS: [u32; 3] = [1, 1, 1];
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weather::Clear => "clear",
            Weather::Rain => "rain",
            Weather::Fog => "fog",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Position in the day cycle, `0..DAY_LENGTH`; midday at half the cycle
    pub time_of_day: u32,
    pub weather: Weather,
    /// Ticks until the weather is rolled again
    pub weather_timer: u32,
    /// Start points of the rain streaks for the current frame
    pub rain_streaks: Vec<Position>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            time_of_day: 0,
            weather: Weather::Clear,
            weather_timer: 0,
            rain_streaks: Vec::new(),
        }
    }

    /// Advances the clock one tick.
    ///
    /// Returns the new weather when it was re-rolled this tick.
    pub fn update(&mut self, rng: &mut dyn RandomSource, field: &Field) -> Option<Weather> {
        self.time_of_day = (self.time_of_day + TIME_STEP) % DAY_LENGTH;

        let mut rolled = None;
        self.weather_timer = self.weather_timer.saturating_sub(1);
        if self.weather_timer == 0 {
            self.weather = Weather::ALL[rng.weighted_index(&Weather::WEIGHTS)];
            self.weather_timer = rng.range_i32(300, 600) as u32;
            rolled = Some(self.weather);
        }

        self.rain_streaks.clear();
        if self.weather == Weather::Rain {
            for _ in 0..RAIN_STREAKS {
                self.rain_streaks.push(Position::new(
                    rng.range_i32(0, field.width),
                    rng.range_i32(0, field.height),
                ));
            }
        }
        rolled
    }

    /// Darkness in `[0, 1]`: distance from midday, normalized.
    pub fn darkness(&self) -> f32 {
        let half = (DAY_LENGTH / 2) as f32;
        (half - self.time_of_day as f32).abs() / half
    }

    /// Color of the night overlay for the current time.
    pub fn night_overlay(&self) -> Rgba {
        NIGHT_TINT.with_alpha((self.darkness() * MAX_NIGHT_ALPHA) as u8)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
