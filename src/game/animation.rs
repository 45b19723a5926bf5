//! # Sprite Animation
//!
//! Procedurally generated sprite frames and a time-driven frame cursor.

use crate::config;
use crate::game::Rgba;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One pre-rendered sprite frame: a flat fill with a white accent circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteFrame {
    pub fill: Rgba,
    pub accent: Rgba,
}

impl SpriteFrame {
    /// Placeholder returned by a cursor that has no frames yet.
    pub const BLANK: SpriteFrame = SpriteFrame {
        fill: Rgba::TRANSPARENT,
        accent: Rgba::TRANSPARENT,
    };

    /// Creates the standard frame pattern for a base color.
    pub fn patterned(fill: Rgba) -> Self {
        Self {
            fill,
            accent: Rgba::WHITE,
        }
    }
}

/// Ordered frames plus an elapsed-time cursor.
///
/// The cursor moves to the next frame (wrapping) once the accumulated time
/// exceeds the frame delay, then the accumulator starts over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimatedSprite {
    frames: Vec<SpriteFrame>,
    index: usize,
    elapsed: Duration,
    delay: Duration,
}

impl AnimatedSprite {
    /// Creates an empty cursor with the default 100 ms delay.
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(config::ANIMATION_DELAY_MS))
    }

    /// Creates an empty cursor with a custom delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            frames: Vec::new(),
            index: 0,
            elapsed: Duration::ZERO,
            delay,
        }
    }

    /// Builds a cursor with one patterned frame per color.
    ///
    /// # Examples
    ///
    /// ```
    /// use tamers::{AnimatedSprite, Rgba};
    ///
    /// let sprite = AnimatedSprite::from_colors(&[Rgba::RED, Rgba::BLUE]);
    /// assert_eq!(sprite.frame_count(), 2);
    /// assert_eq!(sprite.current_frame().fill, Rgba::RED);
    /// ```
    pub fn from_colors(colors: &[Rgba]) -> Self {
        let mut sprite = Self::new();
        for &color in colors {
            sprite.add_frame(SpriteFrame::patterned(color));
        }
        sprite
    }

    /// Appends a frame to the sequence.
    pub fn add_frame(&mut self, frame: SpriteFrame) {
        self.frames.push(frame);
    }

    /// Number of frames in the sequence.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Index of the frame currently shown.
    pub fn frame_index(&self) -> usize {
        self.index
    }

    /// Accumulates elapsed time and advances the cursor when the delay is exceeded.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.frames.is_empty() {
            return;
        }
        self.elapsed += elapsed;
        if self.elapsed > self.delay {
            self.index = (self.index + 1) % self.frames.len();
            self.elapsed = Duration::ZERO;
        }
    }

    /// The frame under the cursor, or [`SpriteFrame::BLANK`] when empty.
    pub fn current_frame(&self) -> SpriteFrame {
        self.frames
            .get(self.index)
            .copied()
            .unwrap_or(SpriteFrame::BLANK)
    }
}

impl Default for AnimatedSprite {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(16);

    #[test]
    fn test_empty_sprite_yields_blank() {
        let mut sprite = AnimatedSprite::new();
        sprite.advance(Duration::from_secs(1));
        assert_eq!(sprite.current_frame(), SpriteFrame::BLANK);
        assert_eq!(sprite.frame_index(), 0);
    }

    #[test]
    fn test_advances_after_delay() {
        let mut sprite = AnimatedSprite::from_colors(&[Rgba::RED, Rgba::BLUE, Rgba::CYAN]);

        // 6 ticks of 16ms = 96ms, still below the delay
        for _ in 0..6 {
            sprite.advance(TICK);
        }
        assert_eq!(sprite.frame_index(), 0);

        // 112ms > 100ms
        sprite.advance(TICK);
        assert_eq!(sprite.frame_index(), 1);
        assert_eq!(sprite.current_frame().fill, Rgba::BLUE);
    }

    #[test]
    fn test_exact_delay_does_not_advance() {
        let mut sprite = AnimatedSprite::from_colors(&[Rgba::RED, Rgba::BLUE]);
        sprite.advance(Duration::from_millis(100));
        assert_eq!(sprite.frame_index(), 0);
        sprite.advance(Duration::from_millis(1));
        assert_eq!(sprite.frame_index(), 1);
    }

    #[test]
    fn test_wraps_around() {
        let mut sprite = AnimatedSprite::from_colors(&[Rgba::RED, Rgba::BLUE]);
        let step = Duration::from_millis(150);
        sprite.advance(step);
        sprite.advance(step);
        assert_eq!(sprite.frame_index(), 0);
        assert_eq!(sprite.current_frame().accent, Rgba::WHITE);
    }
}
