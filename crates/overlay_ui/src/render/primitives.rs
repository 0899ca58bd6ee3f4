//! GUI mesh primitives
//!
//! Widgets draw everything from two meshes: a unit quad scaled by the model
//! matrix, and a glyph sheet holding one quad per character cell.

use super::Vertex;

/// Vertices per quad (two triangles)
pub const QUAD_VERTEX_COUNT: u32 = 6;

/// Glyph cells per row of the font texture
pub const GLYPH_SHEET_COLUMNS: u32 = 16;

/// Two triangles covering `[0,1]²` with the given UV rectangle
fn quad(uv_min: [f32; 2], uv_max: [f32; 2]) -> [Vertex; 6] {
    let white = [1.0, 1.0, 1.0];
    let bl = Vertex::new([0.0, 0.0, 0.0], white, [uv_min[0], uv_max[1]]);
    let br = Vertex::new([1.0, 0.0, 0.0], white, [uv_max[0], uv_max[1]]);
    let tr = Vertex::new([1.0, 1.0, 0.0], white, [uv_max[0], uv_min[1]]);
    let tl = Vertex::new([0.0, 1.0, 0.0], white, [uv_min[0], uv_min[1]]);
    [bl, br, tr, bl, tr, tl]
}

/// Unit quad over `[0,1]²`
pub fn unit_quad() -> Vec<Vertex> {
    quad([0.0, 0.0], [1.0, 1.0]).to_vec()
}

/// One quad per glyph cell of a square font texture
///
/// Glyph `c` occupies vertices `c * 6 .. c * 6 + 6`.
pub fn glyph_sheet(glyph_count: u32) -> Vec<Vertex> {
    let cell = 1.0 / GLYPH_SHEET_COLUMNS as f32;
    (0..glyph_count)
        .flat_map(|glyph| {
            let column = (glyph % GLYPH_SHEET_COLUMNS) as f32;
            let row = (glyph / GLYPH_SHEET_COLUMNS) as f32;
            let uv_min = [column * cell, row * cell];
            let uv_max = [uv_min[0] + cell, uv_min[1] + cell];
            quad(uv_min, uv_max)
        })
        .collect()
}
