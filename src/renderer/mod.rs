//! Render-state export
//!
//! The simulation never draws. This module turns its state into plain
//! vertex lists and serializable snapshots for whatever renderer sits on top.

pub mod shapes;
pub mod vertex;

use serde::Serialize;

use crate::sim::{Color, Particle};

pub use shapes::{axis_lines, box_faces, particle_quads};
pub use vertex::Vertex;

/// Drawable state of one alive particle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleState {
    /// Pool slot the particle occupies
    pub slot: usize,
    pub position: [f32; 3],
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

/// Snapshot of every alive particle, in slot order
pub fn snapshot(particles: &[Particle]) -> Vec<ParticleState> {
    particles
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_alive())
        .map(|(slot, p)| ParticleState {
            slot,
            position: p.entity.pos.to_array(),
            width: p.entity.width,
            height: p.entity.height,
            color: p.color(),
        })
        .collect()
}
