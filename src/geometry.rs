//! Vector helpers for face normals
//!
//! Normalizing a zero-length vector would push NaN into vertex data, so it is
//! reported as an error instead.

use glam::Vec3;

use crate::error::{SimError, SimResult};

/// Unit vector in the direction of `v`
pub fn normalize(v: Vec3) -> SimResult<Vec3> {
    let len = v.length();
    if len == 0.0 || !len.is_finite() {
        return Err(SimError::DegenerateVector);
    }
    Ok(v / len)
}

/// Cross product `a × b`
#[inline]
pub fn calc_normal(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Unit normal of the triangle `a, b, c` (counter-clockwise is front)
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> SimResult<Vec3> {
    normalize(calc_normal(b - a, c - a))
}
