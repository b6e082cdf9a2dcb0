//! Fixed-capacity particle pool with randomized respawn
//!
//! The generator allocates its pool once, then reuses every slot in place:
//! dead particles are re-initialized on the next [`ParticleGenerator::advance`]
//! rather than freed. Randomness comes from a seeded PCG so a run can be
//! replayed from its seed.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::particle::{Color, Particle, life_color};
use crate::consts::*;
use crate::error::{SimError, SimResult};
use crate::settings::GeneratorSettings;

/// Inclusive `[min, max]` range a spawn parameter is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadRange {
    pub min: f32,
    pub max: f32,
}

impl SpreadRange {
    /// Build a range, swapping reversed bounds.
    ///
    /// Non-finite bounds (or a width that overflows) are rejected because the
    /// uniform sampler cannot draw from them.
    pub fn new(name: &'static str, min: f32, max: f32) -> SimResult<Self> {
        if !min.is_finite() || !max.is_finite() || !(max - min).is_finite() {
            return Err(SimError::InvalidSpread { name, min, max });
        }
        if min > max {
            log::warn!("Spread '{}' given as [{}, {}], swapping", name, min, max);
            Ok(Self { min: max, max: min })
        } else {
            Ok(Self { min, max })
        }
    }

    /// Range with no validation, for compile-time defaults
    pub const fn fixed(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    fn sample(&self, rng: &mut Pcg32) -> f32 {
        rng.random_range(self.min..=self.max)
    }
}

/// Owns a pool of particles and steps it once per frame.
#[derive(Debug, Clone)]
pub struct ParticleGenerator {
    origin: Vec2,
    /// `None` until the first `initialize()`
    pool: Option<Vec<Particle>>,
    requested_max: usize,
    particle_life: f32,
    spread_x: SpreadRange,
    spread_y: SpreadRange,
    spread_z: SpreadRange,
    spread_gravity: SpreadRange,
    spread_fade: SpreadRange,
    rng: Pcg32,
}

impl ParticleGenerator {
    /// Create a generator at `(x, y)` with default spreads.
    ///
    /// The pool is not allocated yet; configure, then call `initialize()`.
    pub fn new(x: f32, y: f32, seed: u64) -> Self {
        Self {
            origin: Vec2::new(x, y),
            pool: None,
            requested_max: DEFAULT_MAX_PARTICLES,
            particle_life: DEFAULT_PARTICLE_LIFE,
            spread_x: DEFAULT_SPREAD_X,
            spread_y: DEFAULT_SPREAD_Y,
            spread_z: DEFAULT_SPREAD_Z,
            spread_gravity: DEFAULT_SPREAD_GRAVITY,
            spread_fade: DEFAULT_SPREAD_FADE,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Build and initialize a generator from settings
    pub fn from_settings(
        settings: &GeneratorSettings,
        capacity: usize,
        seed: u64,
    ) -> SimResult<Self> {
        let mut generator = Self::new(settings.origin_x, settings.origin_y, seed);
        generator.set_max_particles(capacity);
        generator.set_particle_life(settings.particle_life)?;
        generator.set_spread_x(settings.spread_x.min, settings.spread_x.max)?;
        generator.set_spread_y(settings.spread_y.min, settings.spread_y.max)?;
        generator.set_spread_z(settings.spread_z.min, settings.spread_z.max)?;
        generator.set_spread_gravity(settings.spread_gravity.min, settings.spread_gravity.max)?;
        generator.set_spread_fade(settings.spread_fade.min, settings.spread_fade.max)?;
        generator.initialize();
        Ok(generator)
    }

    /// Allocate the pool (first call only) and respawn every slot.
    ///
    /// Call again after changing spreads or life so existing particles pick
    /// them up. Capacity changes after the first call are not applied.
    pub fn initialize(&mut self) {
        let mut pool = match self.pool.take() {
            Some(pool) => pool,
            None => {
                log::info!("Allocating particle pool of {}", self.requested_max);
                vec![Particle::new(); self.requested_max]
            }
        };
        for p in pool.iter_mut() {
            self.init_particle(p);
        }
        self.pool = Some(pool);
    }

    /// Respawn one particle near the origin with freshly drawn parameters.
    ///
    /// The spatial offset doubles as the starting velocity, so a wider spread
    /// also means faster particles.
    pub fn init_particle(&mut self, p: &mut Particle) {
        let dx = self.spread_x.sample(&mut self.rng);
        let dy = self.spread_y.sample(&mut self.rng);
        let dz = self.spread_z.sample(&mut self.rng);
        let gravity = self.spread_gravity.sample(&mut self.rng);
        let fade = self.spread_fade.sample(&mut self.rng);

        p.set_color(Color::RED);
        p.entity.set_position(self.origin.x + dx, self.origin.y + dy, 0.0);
        p.set_life(self.particle_life);
        p.set_velocity(Vec3::new(dx, dy, dz));
        p.set_gravity(gravity);
        p.set_fade_speed(fade);
        p.entity.set_collision_eligible(true);
        p.set_active(true);
    }

    /// Step every slot once: integrate and recolor the living, respawn the dead.
    pub fn advance(&mut self) {
        let Some(mut pool) = self.pool.take() else {
            return;
        };
        for p in pool.iter_mut() {
            if p.is_alive() {
                p.integrate();
                p.set_color(life_color(p.life(), self.particle_life));
            } else {
                self.init_particle(p);
            }
        }
        self.pool = Some(pool);
    }

    /// Pool capacity; fixed once `initialize()` has run
    pub fn max_particles(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.len(),
            None => self.requested_max,
        }
    }

    /// Request a pool capacity. Ignored once the pool exists.
    pub fn set_max_particles(&mut self, max: usize) {
        if self.pool.is_some() {
            log::warn!(
                "Pool already holds {} particles, ignoring capacity {}",
                self.max_particles(),
                max
            );
            return;
        }
        self.requested_max = max;
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Move the spawn point; affects particles spawned from now on
    pub fn set_origin(&mut self, x: f32, y: f32) {
        self.origin = Vec2::new(x, y);
    }

    pub fn particle_life(&self) -> f32 {
        self.particle_life
    }

    pub fn set_particle_life(&mut self, life: f32) -> SimResult<()> {
        if !life.is_finite() || life <= 0.0 {
            return Err(SimError::InvalidParticleLife { value: life });
        }
        self.particle_life = life;
        Ok(())
    }

    pub fn set_spread_x(&mut self, min: f32, max: f32) -> SimResult<()> {
        self.spread_x = SpreadRange::new("x", min, max)?;
        Ok(())
    }

    pub fn set_spread_y(&mut self, min: f32, max: f32) -> SimResult<()> {
        self.spread_y = SpreadRange::new("y", min, max)?;
        Ok(())
    }

    pub fn set_spread_z(&mut self, min: f32, max: f32) -> SimResult<()> {
        self.spread_z = SpreadRange::new("z", min, max)?;
        Ok(())
    }

    pub fn set_spread_gravity(&mut self, min: f32, max: f32) -> SimResult<()> {
        self.spread_gravity = SpreadRange::new("gravity", min, max)?;
        Ok(())
    }

    pub fn set_spread_fade(&mut self, min: f32, max: f32) -> SimResult<()> {
        self.spread_fade = SpreadRange::new("fade", min, max)?;
        Ok(())
    }

    pub fn spread_x(&self) -> SpreadRange {
        self.spread_x
    }

    pub fn spread_y(&self) -> SpreadRange {
        self.spread_y
    }

    pub fn spread_z(&self) -> SpreadRange {
        self.spread_z
    }

    pub fn spread_gravity(&self) -> SpreadRange {
        self.spread_gravity
    }

    pub fn spread_fade(&self) -> SpreadRange {
        self.spread_fade
    }

    /// The pool; empty before `initialize()`
    pub fn particles(&self) -> &[Particle] {
        self.pool.as_deref().unwrap_or(&[])
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        self.pool.as_deref_mut().unwrap_or(&mut [])
    }

    pub fn alive_count(&self) -> usize {
        self.particles().iter().filter(|p| p.is_alive()).count()
    }
}
