//! # Particle Effects
//!
//! Short bursts of particles spawned by battle events. Each particle flies
//! in a straight line until its lifetime runs out.

use crate::game::{Position, Rgba};
use crate::generation::RandomSource;
use serde::{Deserialize, Serialize};

/// Particles per burst.
pub const PARTICLES_PER_BURST: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    /// Remaining ticks
    pub lifetime: u32,
    pub color: Rgba,
}

/// A self-expiring bag of particles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleEffect {
    pub particles: Vec<Particle>,
}

impl ParticleEffect {
    /// Spawns a burst centered on `origin`.
    pub fn burst(origin: Position, color: Rgba, rng: &mut dyn RandomSource) -> Self {
        let particles = (0..PARTICLES_PER_BURST)
            .map(|_| Particle {
                x: origin.x as f32,
                y: origin.y as f32,
                dx: rng.range_f32(-2.0, 2.0),
                dy: rng.range_f32(-2.0, 2.0),
                lifetime: rng.range_i32(20, 40) as u32,
                color,
            })
            .collect();
        Self { particles }
    }

    /// Moves every particle one tick and drops the ones that expired.
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.x += particle.dx;
            particle.y += particle.dy;
            particle.lifetime = particle.lifetime.saturating_sub(1);
        }
        self.particles.retain(|p| p.lifetime > 0);
    }

    /// Returns true once every particle has expired.
    pub fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Advances all effects and removes the finished ones.
pub fn update_effects(effects: &mut Vec<ParticleEffect>) {
    for effect in effects.iter_mut() {
        effect.update();
    }
    effects.retain(|e| !e.is_finished());
}
