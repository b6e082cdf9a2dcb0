//! Sparkfall - a particle fountain with collision detection
//!
//! Core modules:
//! - `sim`: Particle pool, lifecycle and the per-frame collision sweep
//! - `renderer`: CPU-side vertex/snapshot export for an external renderer
//! - `geometry`: Guarded vector helpers for face normals
//! - `settings`: JSON-backed configuration

pub mod error;
pub mod geometry;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{SimError, SimResult};
pub use settings::{GeneratorSettings, QualityPreset, Settings};

use sim::{BounceBehavior, CollisionDetector, ParticleGenerator};

/// Simulation defaults
pub mod consts {
    use crate::sim::SpreadRange;

    /// Simulated plane dimensions (bounds far edges)
    pub const PLANE_WIDTH: f32 = 100.0;
    pub const PLANE_HEIGHT: f32 = 100.0;

    /// Fresh `Particle::new()` state, before a generator touches it
    pub const DEFAULT_LIFE: f32 = 10.0;
    pub const DEFAULT_GRAVITY: f32 = -0.015;
    pub const DEFAULT_FADE_SPEED: f32 = 0.15;

    /// Generator defaults
    pub const DEFAULT_MAX_PARTICLES: usize = 100;
    pub const DEFAULT_PARTICLE_LIFE: f32 = 100.0;
    pub const DEFAULT_SPREAD_X: SpreadRange = SpreadRange::fixed(-1.0, 1.0);
    pub const DEFAULT_SPREAD_Y: SpreadRange = SpreadRange::fixed(-1.0, 1.0);
    pub const DEFAULT_SPREAD_Z: SpreadRange = SpreadRange::fixed(0.0, 0.0);
    pub const DEFAULT_SPREAD_GRAVITY: SpreadRange = SpreadRange::fixed(-0.03, -0.01);
    pub const DEFAULT_SPREAD_FADE: SpreadRange = SpreadRange::fixed(-1.5, -0.1);

    /// Gravity lost on every side-wall bounce
    pub const BOUNCE_GRAVITY_LOSS: f32 = 0.005;
}

/// Build an initialized generator from settings
pub fn build_generator(settings: &Settings) -> SimResult<ParticleGenerator> {
    ParticleGenerator::from_settings(
        &settings.generator,
        settings.max_particles(),
        settings.seed,
    )
}

/// Detector over the settings' bounds with `bounce` registered
pub fn build_detector<'a>(
    settings: &Settings,
    bounce: &'a BounceBehavior,
) -> CollisionDetector<'a> {
    let mut detector = CollisionDetector::new(settings.bounds());
    detector.add_behavior(bounce);
    detector
}
