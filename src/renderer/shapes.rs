//! Vertex generation for particles and scene helpers

use glam::Vec3;

use super::vertex::{Vertex, colors};
use crate::error::SimResult;
use crate::geometry::face_normal;
use crate::sim::{Entity, Particle};

/// Four quad corners per alive particle, dead slots skipped.
///
/// Corner order is bottom-left, top-left, top-right, bottom-right.
pub fn particle_quads(particles: &[Particle]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(particles.len() * 4);

    for p in particles.iter().filter(|p| p.is_alive()) {
        let e = &p.entity;
        let color = p.color().to_array();
        let (x, y, z) = (e.x(), e.y(), e.z());

        vertices.push(Vertex::new(x, y, z, color));
        vertices.push(Vertex::new(x, y + e.height, z, color));
        vertices.push(Vertex::new(x + e.width, y + e.height, z, color));
        vertices.push(Vertex::new(x + e.width, y, z, color));
    }

    vertices
}

/// Six quad faces of a box extruded `depth` along +z from `entity`.
///
/// The front normal is derived from its corners, so a box with zero width or
/// height fails with `DegenerateVector`.
pub fn box_faces(entity: &Entity, depth: f32) -> SimResult<Vec<Vertex>> {
    let (x, y, z) = (entity.x(), entity.y(), entity.z());
    let (x2, y2, z2) = (x + entity.width, y + entity.height, z + depth);
    let c = colors::BOX;

    let front = [
        Vec3::new(x2, y2, z),
        Vec3::new(x, y2, z),
        Vec3::new(x, y, z),
        Vec3::new(x2, y, z),
    ];
    let front_normal = face_normal(front[0], front[1], front[2])?.to_array();

    let mut vertices: Vec<Vertex> = front
        .iter()
        .map(|v| Vertex::new(v.x, v.y, v.z, c).with_normal(front_normal))
        .collect();

    // (normal, corners) for the remaining faces
    let faces: [([f32; 3], [[f32; 3]; 4]); 5] = [
        // back
        (
            [0.0, 0.0, -1.0],
            [[x2, y2, z2], [x, y2, z2], [x, y, z2], [x2, y, z2]],
        ),
        // top
        (
            [0.0, 1.0, 0.0],
            [[x2, y2, z2], [x, y2, z2], [x, y2, z], [x2, y2, z]],
        ),
        // bottom
        (
            [0.0, -1.0, 0.0],
            [[x2, y, z2], [x, y, z2], [x, y, z], [x2, y, z]],
        ),
        // left
        (
            [-1.0, 0.0, 0.0],
            [[x, y, z], [x, y2, z], [x, y2, z2], [x, y, z2]],
        ),
        // right
        (
            [1.0, 0.0, 0.0],
            [[x2, y, z], [x2, y2, z], [x2, y2, z2], [x2, y, z2]],
        ),
    ];

    for (normal, corners) in faces {
        for [vx, vy, vz] in corners {
            vertices.push(Vertex::new(vx, vy, vz, c).with_normal(normal));
        }
    }

    Ok(vertices)
}

/// Line-list vertices for the three axes, `max` units each way
pub fn axis_lines(max: f32) -> Vec<Vertex> {
    vec![
        Vertex::new(-max, 0.0, 0.0, colors::AXIS_X),
        Vertex::new(max, 0.0, 0.0, colors::AXIS_X),
        Vertex::new(0.0, -max, 0.0, colors::AXIS_Y),
        Vertex::new(0.0, max, 0.0, colors::AXIS_Y),
        Vertex::new(0.0, 0.0, -max, colors::AXIS_Z),
        Vertex::new(0.0, 0.0, max, colors::AXIS_Z),
    ]
}
