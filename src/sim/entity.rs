//! Positionable, sizeable simulation object

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Anything the collision detector can sweep over.
pub trait Collidable {
    fn position(&self) -> Vec3;

    /// Bounding box in far-edge form, recomputed from current state.
    fn boundary(&self) -> Rect;

    fn is_collision_eligible(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub pos: Vec3,
    pub width: f32,
    pub height: f32,
    /// Whether this entity takes part in collision checks at all
    pub collision_eligible: bool,
}

impl Default for Entity {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Entity {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vec3::new(x, y, z),
            width: 1.0,
            height: 1.0,
            collision_eligible: true,
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.pos = Vec3::new(x, y, z);
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.pos.z
    }

    pub fn set_x(&mut self, x: f32) {
        self.pos.x = x;
    }

    pub fn set_y(&mut self, y: f32) {
        self.pos.y = y;
    }

    pub fn set_z(&mut self, z: f32) {
        self.pos.z = z;
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    pub fn set_collision_eligible(&mut self, eligible: bool) {
        self.collision_eligible = eligible;
    }
}

impl Collidable for Entity {
    #[inline]
    fn position(&self) -> Vec3 {
        self.pos
    }

    fn boundary(&self) -> Rect {
        Rect::new(
            self.pos.x,
            self.pos.y,
            self.pos.x + self.width,
            self.pos.y + self.height,
        )
    }

    #[inline]
    fn is_collision_eligible(&self) -> bool {
        self.collision_eligible
    }
}
