//! Particle simulation module
//!
//! Everything that moves or collides lives here. No rendering or platform
//! dependencies:
//! - Seeded RNG only
//! - Stable iteration order (pool slot order)
//! - Single-threaded, in-place mutation of a fixed pool

pub mod collision;
pub mod entity;
pub mod generator;
pub mod particle;
pub mod rect;
pub mod tick;

pub use collision::{BounceBehavior, CollisionBehavior, CollisionDetector, CollisionStats};
pub use entity::{Collidable, Entity};
pub use generator::{ParticleGenerator, SpreadRange};
pub use particle::{Color, ColorTier, Particle, life_color};
pub use rect::Rect;
pub use tick::{FrameStats, step};
