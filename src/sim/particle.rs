//! Particle state and lifecycle
//!
//! A particle is alive while `life > 0` and it is active. Dead particles are
//! never revived by themselves; their owning generator re-initializes the
//! slot in place on its next advance.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::entity::{Collidable, Entity};
use super::rect::Rect;
use crate::consts::{DEFAULT_FADE_SPEED, DEFAULT_GRAVITY, DEFAULT_LIFE};

/// RGBA color, every component clamped to [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const ORANGE: Color = Color::rgb(1.0, 0.5, 0.5);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);

    /// Opaque color from unclamped constants
    const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        // NaN would survive clamp
        let a = if a.is_nan() { 0.0 } else { a.clamp(0.0, 1.0) };
        Self { a, ..self }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Discrete hue band selected from remaining life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTier {
    /// At least 70% of baseline life left
    Fresh,
    /// Between 50% and 70%
    Fading,
    /// Below 50%
    Dying,
}

impl ColorTier {
    /// Pick a tier from a life percentage (0..=100)
    pub fn from_percentage(percentage: f32) -> Self {
        if percentage >= 70.0 {
            ColorTier::Fresh
        } else if percentage >= 50.0 {
            ColorTier::Fading
        } else {
            ColorTier::Dying
        }
    }

    pub fn color(self) -> Color {
        match self {
            ColorTier::Fresh => Color::RED,
            ColorTier::Fading => Color::ORANGE,
            ColorTier::Dying => Color::YELLOW,
        }
    }
}

/// Color for a particle with `life` left out of `baseline_life`.
///
/// Hue steps through three tiers while alpha fades continuously.
pub fn life_color(life: f32, baseline_life: f32) -> Color {
    let ratio = if baseline_life > 0.0 {
        life / baseline_life
    } else {
        0.0
    };
    ColorTier::from_percentage(ratio * 100.0)
        .color()
        .with_alpha(ratio)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub entity: Entity,
    active: bool,
    life: f32,
    vel: Vec3,
    gravity: f32,
    fade_speed: f32,
    color: Color,
}

impl Default for Particle {
    fn default() -> Self {
        Self::new()
    }
}

impl Particle {
    pub fn new() -> Self {
        Self {
            entity: Entity::default(),
            active: true,
            life: DEFAULT_LIFE,
            vel: Vec3::ZERO,
            gravity: DEFAULT_GRAVITY,
            fade_speed: DEFAULT_FADE_SPEED,
            color: Color::default(),
        }
    }

    /// Alive particles are integrated; dead ones get respawned
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0 && self.active
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Toggle activity without touching life
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn life(&self) -> f32 {
        self.life
    }

    /// Set remaining life, clamped so it never goes negative
    pub fn set_life(&mut self, life: f32) {
        self.life = life.max(0.0);
    }

    pub fn velocity(&self) -> Vec3 {
        self.vel
    }

    pub fn set_velocity(&mut self, vel: Vec3) {
        self.vel = vel;
    }

    pub fn xv(&self) -> f32 {
        self.vel.x
    }

    pub fn yv(&self) -> f32 {
        self.vel.y
    }

    pub fn zv(&self) -> f32 {
        self.vel.z
    }

    pub fn set_xv(&mut self, xv: f32) {
        self.vel.x = xv;
    }

    pub fn set_yv(&mut self, yv: f32) {
        self.vel.y = yv;
    }

    pub fn set_zv(&mut self, zv: f32) {
        self.vel.z = zv;
    }

    /// Added to y velocity each step; negative pulls down
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.gravity = gravity;
    }

    /// Added to life each step; usually negative
    pub fn fade_speed(&self) -> f32 {
        self.fade_speed
    }

    pub fn set_fade_speed(&mut self, fade_speed: f32) {
        self.fade_speed = fade_speed;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Integrate one step: move, apply gravity, then decay.
    pub fn integrate(&mut self) {
        self.entity.pos += self.vel;
        self.vel.y += self.gravity;
        self.set_life(self.life + self.fade_speed);
    }
}

impl Collidable for Particle {
    #[inline]
    fn position(&self) -> Vec3 {
        self.entity.pos
    }

    fn boundary(&self) -> Rect {
        self.entity.boundary()
    }

    #[inline]
    fn is_collision_eligible(&self) -> bool {
        self.entity.collision_eligible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_life_clamps() {
        let mut p = Particle::new();
        p.set_life(-5.0);
        assert_eq!(p.life(), 0.0);
        assert!(!p.is_alive());
    }

    #[test]
    fn test_inactive_is_dead() {
        let mut p = Particle::new();
        assert!(p.is_alive());
        p.set_active(false);
        assert!(!p.is_alive());
        // Life untouched
        assert_eq!(p.life(), DEFAULT_LIFE);
    }

    #[test]
    fn test_integrate_order() {
        let mut p = Particle::new();
        p.set_velocity(Vec3::new(1.0, 2.0, 0.5));
        p.set_gravity(-0.5);
        p.set_fade_speed(-3.0);
        p.set_life(10.0);

        p.integrate();

        // Position uses velocity from before gravity is applied
        assert_eq!(p.entity.pos, Vec3::new(1.0, 2.0, 0.5));
        assert_eq!(p.yv(), 1.5);
        assert_eq!(p.life(), 7.0);
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(ColorTier::from_percentage(100.0), ColorTier::Fresh);
        assert_eq!(ColorTier::from_percentage(70.0), ColorTier::Fresh);
        assert_eq!(ColorTier::from_percentage(69.9), ColorTier::Fading);
        assert_eq!(ColorTier::from_percentage(50.0), ColorTier::Fading);
        assert_eq!(ColorTier::from_percentage(49.9), ColorTier::Dying);
        assert_eq!(ColorTier::from_percentage(0.0), ColorTier::Dying);
    }

    #[test]
    fn test_life_color_alpha_is_continuous() {
        let c = life_color(60.0, 100.0);
        assert_eq!((c.r, c.g, c.b), (1.0, 0.5, 0.5));
        assert!((c.a - 0.6).abs() < 1e-6);

        let c = life_color(25.0, 100.0);
        assert_eq!((c.r, c.g, c.b), (1.0, 1.0, 0.0));
        assert!((c.a - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_life_color_zero_baseline() {
        let c = life_color(5.0, 0.0);
        assert_eq!(c.a, 0.0);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 1.0);
    }

    #[test]
    fn test_color_clamps() {
        let c = Color::new(2.0, -1.0, 0.5, 1.5);
        assert_eq!(c.to_array(), [1.0, 0.0, 0.5, 1.0]);
    }
}
