//! Backend abstraction traits consumed by the widget tree

use super::{RenderResult, Vertex};
use crate::foundation::math::{Mat4, Vec4};

/// Handle to a mesh resource stored in the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u64);

/// Handle to a texture resource stored in the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Selects the fragment path of the GUI shader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderMode {
    /// Flat colored block
    Block,
    /// Glyph from the font texture, tinted by the color slot
    Font,
    /// Textured quad
    Textured,
}

/// Uploads vertex data and returns an opaque handle
pub trait MeshUploader {
    /// Upload a mesh with the fixed GUI vertex layout
    fn upload_mesh(&mut self, vertices: &[Vertex]) -> RenderResult<MeshHandle>;
}

/// Per-draw uniform slots plus the draw call itself
///
/// Widgets load the slots they need and then call [`DrawHandles::draw_mesh`];
/// slots keep their value between draws.
pub trait DrawHandles {
    /// Load the model matrix slot
    fn load_model_matrix(&mut self, model: &Mat4);

    /// Load the color slot (RGBA)
    fn load_color(&mut self, color: &Vec4);

    /// Load the texture slot; `None` unbinds
    fn load_texture(&mut self, texture: Option<TextureHandle>);

    /// Load the shader mode flag
    fn load_shader_mode(&mut self, mode: ShaderMode);

    /// Draw `vertex_count` vertices of `mesh` starting at `first_vertex`
    fn draw_mesh(&mut self, mesh: MeshHandle, first_vertex: u32, vertex_count: u32);
}
