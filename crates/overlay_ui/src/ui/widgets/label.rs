//! Label widget - fixed-width text

use std::any::Any;

use crate::config::LabelConfig;
use crate::foundation::math::{placement_2d, Mat4, Vec2, Vec4};
use crate::render::{DrawHandles, ShaderMode};
use crate::ui::component::{Component, Widget};
use crate::ui::context::AttachContext;
use crate::ui::resources::FontSheet;

/// Text drawn one glyph cell per character
///
/// Each glyph is `glyph_size` square; characters advance by half a cell.
/// Characters outside the font sheet are drawn as `'?'`.
#[derive(Debug, Clone)]
pub struct Label {
    component: Component,
    text: String,
    glyph_size: Option<f32>,
    color: Option<Vec4>,
    font: Option<FontSheet>,
    revision: u64,
}

impl Label {
    /// Create a label with its lower-left corner at `position`
    pub fn new(position: Vec2, text: impl Into<String>) -> Self {
        let mut label = Self {
            component: Component::new(position, Vec2::zeros()),
            text: text.into(),
            glyph_size: None,
            color: None,
            font: None,
            revision: 0,
        };
        label.fit();
        label
    }

    /// Use a fixed glyph size instead of the configured default
    pub fn with_glyph_size(mut self, glyph_size: f32) -> Self {
        self.glyph_size = Some(glyph_size);
        self.fit();
        self
    }

    /// Request a name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.component = self.component.with_name(name);
        self
    }

    /// Current text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text and resize to fit
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.revision += 1;
        self.fit();
    }

    /// Number of glyphs
    pub fn length(&self) -> usize {
        self.text.chars().count()
    }

    /// Edge length of one glyph cell
    pub fn glyph_size(&self) -> f32 {
        self.glyph_size.unwrap_or_else(|| LabelConfig::default().glyph_size)
    }

    /// Horizontal distance between glyph origins
    pub fn advance(&self) -> f32 {
        self.glyph_size() / 2.0
    }

    /// Text color; falls back to the palette's secondary color
    pub fn color(&self) -> Vec4 {
        self.color.unwrap_or(self.component.palette().secondary)
    }

    /// Override the text color
    pub fn set_color(&mut self, color: Vec4) {
        self.color = Some(color);
    }

    /// Times the text has been changed
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Position the label so its text is centered on `point`
    pub fn center_on(&mut self, point: Vec2) {
        let size = self.component.size();
        self.component.set_position(point - size / 2.0);
    }

    fn fit(&mut self) {
        let width = self.length() as f32 * self.advance();
        self.component.set_size(Vec2::new(width, self.glyph_size()));
    }
}

impl Widget for Label {
    fn component(&self) -> &Component {
        &self.component
    }

    fn component_mut(&mut self) -> &mut Component {
        &mut self.component
    }

    fn init(&mut self, ctx: &mut AttachContext<'_>) {
        self.font = ctx.resources().font;
        if self.font.is_none() && !self.text.is_empty() {
            log::warn!("Label '{}' attached without a font sheet", self.text);
        }
        if self.glyph_size.is_none() {
            self.glyph_size = Some(ctx.config().label.glyph_size);
        }
    }

    fn validate(&mut self) {
        self.fit();
    }

    fn draw(&self, handles: &mut dyn DrawHandles, parent: &Mat4) {
        let Some(font) = self.font.filter(|_| !self.text.is_empty()) else {
            return;
        };
        let local = self.component.local_transform(parent);
        let cell = Vec2::new(self.glyph_size(), self.glyph_size());

        handles.load_shader_mode(ShaderMode::Font);
        handles.load_texture(Some(font.texture));
        handles.load_color(&self.color());
        for (index, character) in self.text.chars().enumerate() {
            let byte = u8::try_from(character).unwrap_or(b'?');
            let offset = Vec2::new(index as f32 * self.advance(), 0.0);
            handles.load_model_matrix(&(local * placement_2d(&offset, &cell)));
            handles.draw_mesh(font.mesh, font.glyph_for(byte) * 6, 6);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
