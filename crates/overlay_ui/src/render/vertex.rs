//! GUI vertex layout

use bytemuck::{Pod, Zeroable};

/// Vertex layout shared by every GUI mesh
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in model space
    pub position: [f32; 3],

    /// Vertex color
    pub color: [f32; 3],

    /// Normal vector
    pub normal: [f32; 3],

    /// Texture coordinates
    pub uv: [f32; 2],

    /// Tangent vector
    pub tangent: [f32; 3],
}

impl Vertex {
    /// Create a flat GUI vertex facing the camera
    pub fn new(position: [f32; 3], color: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            color,
            normal: [0.0, 0.0, 1.0],
            uv,
            tangent: [1.0, 0.0, 0.0],
        }
    }
}
