//! Meshes shared by every widget of a manager

use crate::foundation::math::{Mat4, Vec4};
use crate::render::primitives::{self, QUAD_VERTEX_COUNT};
use crate::render::{DrawHandles, MeshHandle, MeshUploader, RenderResult, ShaderMode, TextureHandle};

/// Number of glyph cells uploaded for the font sheet (ASCII)
pub const GLYPH_COUNT: u32 = 128;

/// Uploaded unit quad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMesh {
    /// Backend handle
    pub mesh: MeshHandle,
    /// Vertices in the mesh
    pub vertex_count: u32,
}

impl ShapeMesh {
    /// Draw the quad as a flat block
    pub fn draw(&self, handles: &mut dyn DrawHandles, model: &Mat4, color: &Vec4) {
        handles.load_shader_mode(ShaderMode::Block);
        handles.load_texture(None);
        handles.load_model_matrix(model);
        handles.load_color(color);
        handles.draw_mesh(self.mesh, 0, self.vertex_count);
    }
}

/// Uploaded glyph sheet plus its font texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSheet {
    /// Backend handle of the glyph sheet
    pub mesh: MeshHandle,
    /// Font texture sampled in font mode
    pub texture: TextureHandle,
    /// Glyph cells in the sheet
    pub glyph_count: u32,
}

impl FontSheet {
    /// Glyph cell used for `byte`, `'?'` when outside the sheet
    pub fn glyph_for(&self, byte: u8) -> u32 {
        let glyph = u32::from(byte);
        if glyph < self.glyph_count {
            glyph
        } else {
            u32::from(b'?')
        }
    }
}

/// Meshes uploaded once per manager and copied into widgets on attach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuiResources {
    /// Unit quad for every block shape
    pub quad: ShapeMesh,
    /// Glyph sheet; labels draw nothing without it
    pub font: Option<FontSheet>,
}

impl GuiResources {
    /// Upload the GUI meshes
    ///
    /// The glyph sheet is only uploaded when a font texture is supplied.
    pub fn load(uploader: &mut dyn MeshUploader, font_texture: Option<TextureHandle>) -> RenderResult<Self> {
        let quad = ShapeMesh {
            mesh: uploader.upload_mesh(&primitives::unit_quad())?,
            vertex_count: QUAD_VERTEX_COUNT,
        };

        let font = match font_texture {
            Some(texture) => Some(FontSheet {
                mesh: uploader.upload_mesh(&primitives::glyph_sheet(GLYPH_COUNT))?,
                texture,
                glyph_count: GLYPH_COUNT,
            }),
            None => None,
        };

        log::info!("GUI resources loaded (font: {})", font.is_some());
        Ok(Self { quad, font })
    }
}
