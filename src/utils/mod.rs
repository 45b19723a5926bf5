//! # Utilities Module
//!
//! Timing helpers for the game loop.

pub mod math;

pub use math::*;
