//! # Render Surface
//!
//! The drawing primitives the display needs, and their macroquad backend.

use crate::game::Rgba;
use macroquad::prelude::*;

/// A 2D canvas accepting primitive draw calls in pixel coordinates.
///
/// Text is positioned by its baseline, as macroquad does.
pub trait RenderSurface {
    /// Fills the whole canvas.
    fn clear(&mut self, color: Rgba);

    /// Draws a filled rectangle.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba);

    /// Draws a filled circle.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba);

    /// Draws a straight line.
    fn line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Rgba);

    /// Draws a line of text.
    fn text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Rgba);

    /// Blends a translucent color over the whole canvas.
    fn overlay(&mut self, color: Rgba);
}

/// Converts a game color into a macroquad color.
pub fn to_color(color: Rgba) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}

/// Surface drawing straight into the macroquad window.
pub struct MacroquadSurface {
    width: f32,
    height: f32,
}

impl MacroquadSurface {
    /// Creates a surface for a canvas of the given logical size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl RenderSurface for MacroquadSurface {
    fn clear(&mut self, color: Rgba) {
        clear_background(to_color(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        draw_rectangle(x, y, width, height, to_color(color));
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        draw_circle(x, y, radius, to_color(color));
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Rgba) {
        draw_line(from.0, from.1, to.0, to.1, thickness, to_color(color));
    }

    fn text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Rgba) {
        draw_text(text, x, y, size, to_color(color));
    }

    fn overlay(&mut self, color: Rgba) {
        draw_rectangle(0.0, 0.0, self.width, self.height, to_color(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion() {
        let color = to_color(Rgba::new(255, 0, 51, 128));
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert!((color.b - 0.2).abs() < 1e-6);
        assert!((color.a - 128.0 / 255.0).abs() < 1e-6);
    }
}
