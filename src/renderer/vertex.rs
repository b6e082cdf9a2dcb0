//! Vertex types handed to the external rendering layer

use bytemuck::{Pod, Zeroable};

/// Vertex with position, normal and color, laid out for direct upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    /// Vertex facing the viewer (+z)
    pub const fn new(x: f32, y: f32, z: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y, z],
            normal: [0.0, 0.0, 1.0],
            color,
        }
    }

    pub const fn with_normal(self, normal: [f32; 3]) -> Self {
        Self { normal, ..self }
    }

    /// Byte size of one vertex
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// View a vertex list as raw bytes
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for scene helpers
pub mod colors {
    pub const AXIS_X: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const AXIS_Y: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const AXIS_Z: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
    pub const BOX: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}
