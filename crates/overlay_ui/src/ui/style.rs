//! Color palette shared by every widget

use crate::foundation::math::Vec4;

/// Named RGBA colors
pub mod colors {
    /// White
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Black
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    /// Mid grey
    pub const GREY: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    /// Near black
    pub const OFF_BLACK: [f32; 4] = [0.1, 0.1, 0.1, 1.0];
    /// Near white
    pub const OFF_WHITE: [f32; 4] = [0.9, 0.9, 0.9, 1.0];
    /// Red
    pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    /// Sky blue
    pub const SKY_BLUE: [f32; 4] = [0.0, 0.6, 0.8, 1.0];
    /// Green
    pub const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    /// Cyan
    pub const CYAN: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    /// Blue
    pub const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    /// Orange
    pub const ORANGE: [f32; 4] = [1.0, 0.65, 0.0, 1.0];
    /// Fully transparent
    pub const TRANSPARENT: [f32; 4] = [0.0, 0.0, 0.0, 0.0];
}

/// Three-slot color style
///
/// Buttons paint their backing shape in `primary` and their label in
/// `tertiary`; containers and windows use `tertiary` for their background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Main fill color
    pub primary: Vec4,
    /// Accent color
    pub secondary: Vec4,
    /// Background / text color
    pub tertiary: Vec4,
}

impl Palette {
    /// Create a palette from three colors
    pub fn new(primary: Vec4, secondary: Vec4, tertiary: Vec4) -> Self {
        Self { primary, secondary, tertiary }
    }

    /// Create a palette from color constants
    pub fn from_rgba(primary: [f32; 4], secondary: [f32; 4], tertiary: [f32; 4]) -> Self {
        Self::new(primary.into(), secondary.into(), tertiary.into())
    }

    /// Copy of this palette with a different primary color
    pub fn with_primary(mut self, primary: Vec4) -> Self {
        self.primary = primary;
        self
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_rgba(colors::CYAN, colors::WHITE, colors::GREY)
    }
}

/// Halve the RGB channels of a color, keeping alpha
///
/// Used for the pressed/toggled flash of buttons.
pub fn shade(color: &Vec4) -> Vec4 {
    Vec4::new(color.x * 0.5, color.y * 0.5, color.z * 0.5, color.w)
}

/// Replace the alpha channel of a color
pub fn with_alpha(color: &Vec4, alpha: f32) -> Vec4 {
    Vec4::new(color.x, color.y, color.z, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_keeps_alpha() {
        let shaded = shade(&Vec4::new(1.0, 0.5, 0.0, 0.8));
        assert_eq!(shaded, Vec4::new(0.5, 0.25, 0.0, 0.8));
    }

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.primary, Vec4::from(colors::CYAN));
        assert_eq!(palette.tertiary, Vec4::from(colors::GREY));
    }
}
