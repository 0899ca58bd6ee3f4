//! Headless recording backend
//!
//! Implements both collaborator traits without a GPU: uploads are counted and
//! every draw call is captured together with the slot values active at the
//! time. Used by tests and by headless tools.

use super::{DrawHandles, MeshHandle, MeshUploader, RenderError, RenderResult, ShaderMode, TextureHandle, Vertex};
use crate::foundation::math::{Mat4, Vec4};

/// A captured draw call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    /// Mesh drawn
    pub mesh: MeshHandle,
    /// First vertex of the drawn range
    pub first_vertex: u32,
    /// Number of vertices drawn
    pub vertex_count: u32,
    /// Model matrix slot at draw time
    pub model: Mat4,
    /// Color slot at draw time
    pub color: Vec4,
    /// Texture slot at draw time
    pub texture: Option<TextureHandle>,
    /// Shader mode at draw time
    pub mode: ShaderMode,
}

impl DrawCall {
    /// Glyph index for font draws (6 vertices per glyph)
    pub fn glyph(&self) -> Option<u8> {
        if self.mode == ShaderMode::Font {
            u8::try_from(self.first_vertex / 6).ok()
        } else {
            None
        }
    }
}

/// Records uploads and draws
#[derive(Debug, Clone)]
pub struct RecordingBackend {
    uploaded_bytes: Vec<usize>,
    calls: Vec<DrawCall>,
    model: Mat4,
    color: Vec4,
    texture: Option<TextureHandle>,
    mode: ShaderMode,
}

impl RecordingBackend {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self {
            uploaded_bytes: Vec::new(),
            calls: Vec::new(),
            model: Mat4::identity(),
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            texture: None,
            mode: ShaderMode::Block,
        }
    }

    /// Draw calls recorded so far
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Byte size of each uploaded mesh, in upload order
    pub fn uploads(&self) -> &[usize] {
        &self.uploaded_bytes
    }

    /// Text spelled by the font draws recorded so far
    pub fn drawn_text(&self) -> String {
        self.calls.iter().filter_map(DrawCall::glyph).map(char::from).collect()
    }

    /// Forget recorded draws (uploads are kept)
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshUploader for RecordingBackend {
    fn upload_mesh(&mut self, vertices: &[Vertex]) -> RenderResult<MeshHandle> {
        if vertices.is_empty() {
            return Err(RenderError::EmptyMesh);
        }
        let bytes: &[u8] = bytemuck::cast_slice(vertices);
        self.uploaded_bytes.push(bytes.len());
        log::debug!("Recorded mesh upload {} ({} bytes)", self.uploaded_bytes.len(), bytes.len());
        Ok(MeshHandle(self.uploaded_bytes.len() as u64))
    }
}

impl DrawHandles for RecordingBackend {
    fn load_model_matrix(&mut self, model: &Mat4) {
        self.model = *model;
    }

    fn load_color(&mut self, color: &Vec4) {
        self.color = *color;
    }

    fn load_texture(&mut self, texture: Option<TextureHandle>) {
        self.texture = texture;
    }

    fn load_shader_mode(&mut self, mode: ShaderMode) {
        self.mode = mode;
    }

    fn draw_mesh(&mut self, mesh: MeshHandle, first_vertex: u32, vertex_count: u32) {
        self.calls.push(DrawCall {
            mesh,
            first_vertex,
            vertex_count,
            model: self.model,
            color: self.color,
            texture: self.texture,
            mode: self.mode,
        });
    }
}
