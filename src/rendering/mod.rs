//! # Rendering Module
//!
//! Backend-independent drawing of the game screens, plus the macroquad
//! surface they are drawn onto.

pub mod display;
pub mod surface;
pub mod ui;

pub use display::*;
pub use surface::*;
pub use ui::*;
