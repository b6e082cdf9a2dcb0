//! Collision detection and reaction policies
//!
//! The detector does one naive sweep per frame: every eligible entity is
//! first tested against the global bounds, then against every entity after it
//! in the slice. Reactions live in [`CollisionBehavior`] implementations that
//! the caller registers and keeps alive.

use super::entity::Collidable;
use super::particle::Particle;
use super::rect::Rect;
use crate::consts::BOUNCE_GRAVITY_LOSS;

/// Reaction to detected collisions.
///
/// Hooks run synchronously during the sweep and may mutate the entities they
/// receive.
pub trait CollisionBehavior<E: Collidable = Particle> {
    /// `entity`'s position left `bounds`
    fn bounds_collided(&self, entity: &mut E, bounds: &Rect);

    /// Boundaries of `one` and `two` overlap. `one` precedes `two` in the
    /// swept slice.
    fn particles_collided(&self, _one: &mut E, _two: &mut E) {}
}

/// Default policy: bounce off the side walls, stop on the floor and ceiling.
#[derive(Debug, Clone, Copy)]
pub struct BounceBehavior {
    /// Subtracted from gravity on each side bounce, so particles lift less
    pub gravity_loss: f32,
}

impl Default for BounceBehavior {
    fn default() -> Self {
        Self {
            gravity_loss: BOUNCE_GRAVITY_LOSS,
        }
    }
}

impl CollisionBehavior<Particle> for BounceBehavior {
    fn bounds_collided(&self, particle: &mut Particle, bounds: &Rect) {
        let x = particle.entity.x();
        let y = particle.entity.y();

        // Side walls win over floor/ceiling when both are crossed
        if x <= bounds.x || x >= bounds.w {
            particle.set_xv(-particle.xv());
            particle.set_gravity(particle.gravity() - self.gravity_loss);
        } else if y <= bounds.y {
            particle.entity.set_y(0.0);
            particle.set_yv(0.0);
            particle.set_xv(0.0);
        } else if y >= bounds.h {
            particle.set_yv(0.0);
            particle.set_xv(0.0);
        }
    }
}

/// Counts of what one sweep detected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionStats {
    pub bounds_hits: usize,
    pub pair_hits: usize,
}

/// Sweeps a slice of entities against the bounds and each other.
///
/// Behaviors are borrowed, so the detector cannot outlive them.
pub struct CollisionDetector<'a, E: Collidable = Particle> {
    bounds: Rect,
    behaviors: Vec<&'a dyn CollisionBehavior<E>>,
}

impl<'a, E: Collidable> CollisionDetector<'a, E> {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            behaviors: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Register a behavior; hooks fire in registration order
    pub fn add_behavior(&mut self, behavior: &'a dyn CollisionBehavior<E>) {
        self.behaviors.push(behavior);
    }

    pub fn behavior_count(&self) -> usize {
        self.behaviors.len()
    }

    /// Run one detection pass over `entities`.
    ///
    /// Each unordered pair is tested at most once, earlier entity first.
    /// Ineligible entities are skipped as the first member of a pair but are
    /// still tested as the later one. An entity that is out of bounds gets
    /// its bounds hooks and is then not pair-tested this frame.
    pub fn check_collisions(&self, entities: &mut [E]) -> CollisionStats {
        let mut stats = CollisionStats::default();

        for i in 0..entities.len() {
            let (head, tail) = entities.split_at_mut(i + 1);
            let p1 = &mut head[i];

            if !p1.is_collision_eligible() {
                continue;
            }

            let pos = p1.position();
            if self.bounds.is_outside(pos.x, pos.y) {
                stats.bounds_hits += 1;
                self.fire_bounds_collided(p1);
                // Out-of-bounds entities skip the pairwise pass
                continue;
            }

            for p2 in tail.iter_mut() {
                // Recomputed per pair: a hook may have moved p1
                if p1.boundary().intersects(&p2.boundary()) {
                    stats.pair_hits += 1;
                    self.fire_particles_collided(p1, p2);
                }
            }
        }

        if stats.bounds_hits > 0 || stats.pair_hits > 0 {
            log::trace!(
                "Collisions: {} bounds, {} pairs over {} entities",
                stats.bounds_hits,
                stats.pair_hits,
                entities.len()
            );
        }
        stats
    }

    fn fire_bounds_collided(&self, entity: &mut E) {
        for behavior in &self.behaviors {
            behavior.bounds_collided(entity, &self.bounds);
        }
    }

    fn fire_particles_collided(&self, one: &mut E, two: &mut E) {
        for behavior in &self.behaviors {
            behavior.particles_collided(one, two);
        }
    }
}
