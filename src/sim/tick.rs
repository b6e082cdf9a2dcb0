//! Per-frame simulation step
//!
//! One frame is one generator advance followed by one detection pass over
//! the freshly moved pool.

use super::collision::{CollisionDetector, CollisionStats};
use super::generator::ParticleGenerator;

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Alive particles after the advance, before collision reactions
    pub alive: usize,
    pub collisions: CollisionStats,
}

/// Advance the pool one step, then react to collisions.
pub fn step(
    generator: &mut ParticleGenerator,
    detector: &CollisionDetector<'_>,
) -> FrameStats {
    generator.advance();
    let alive = generator.alive_count();
    let collisions = detector.check_collisions(generator.particles_mut());

    let stats = FrameStats { alive, collisions };
    log::trace!("{:?}", stats);
    stats
}
