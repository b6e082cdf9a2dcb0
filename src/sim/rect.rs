//! Axis-aligned rectangle used for bounds and boundary boxes
//!
//! `w` and `h` are far-edge coordinates, not deltas: a rectangle spans
//! `x..=w` horizontally and `y..=h` vertically. Both the detector's bounds
//! test and entity boundaries rely on this.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Origin x (left edge)
    pub x: f32,
    /// Origin y (bottom edge)
    pub y: f32,
    /// Far x (right edge)
    pub w: f32,
    /// Far y (top edge)
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Check whether two rectangles overlap. Touching edges count.
    ///
    /// The overlap terms add `w`/`h` onto the origin, so this is only
    /// symmetric when both rectangles use the same convention.
    pub fn intersects(&self, other: &Rect) -> bool {
        let collide_left = self.x + self.w >= other.x;
        let collide_right = self.x <= other.x + other.w;
        let collide_top = self.y <= other.y + other.h;
        let collide_bottom = self.y + self.h >= other.y;

        collide_left && collide_right && collide_top && collide_bottom
    }

    /// Strict interior test, the complement of [`Rect::is_outside`].
    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        !self.is_outside(x, y)
    }

    /// True if the point lies on or beyond any edge.
    #[inline]
    pub fn is_outside(&self, x: f32, y: f32) -> bool {
        x <= self.x || x >= self.w || y <= self.y || y >= self.h
    }
}
