//! # GUI Configuration
//!
//! Tunables for the widget tree: input thresholds, window chrome geometry and
//! the default glyph size. Every section falls back to its defaults, so a
//! config file only needs to name the values it changes.

use serde::{Deserialize, Serialize};

use super::Config;

/// Frame-count thresholds for the clickable state machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClickableConfig {
    /// Frames a press must stay down before it counts as held (auto-repeat)
    pub held_threshold_frames: u32,
    /// Maximum frame distance between two presses forming a double click
    pub double_click_frames: u32,
}

impl Default for ClickableConfig {
    fn default() -> Self {
        Self {
            held_threshold_frames: 100,
            double_click_frames: 50,
        }
    }
}

/// Window chrome geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Thickness of the invisible resize grab zones
    pub grab_zone_thickness: f32,
    /// Height of the title bar, also the edge length of close/maximize
    pub title_bar_height: f32,
    /// Padding added around the content bounds to form the minimum size
    pub content_padding: f32,
    /// Alpha of the window background
    pub background_alpha: f32,
    /// Title used when a window is created without one
    pub default_title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            grab_zone_thickness: 10.0,
            title_bar_height: 20.0,
            content_padding: 25.0,
            background_alpha: 0.8,
            default_title: "Untitled Window".to_string(),
        }
    }
}

/// Label rendering defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Edge length of a glyph cell in pixels
    pub glyph_size: f32,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self { glyph_size: 20.0 }
    }
}

/// Complete GUI configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Clickable thresholds
    pub clickable: ClickableConfig,
    /// Window chrome geometry
    pub window: WindowConfig,
    /// Label defaults
    pub label: LabelConfig,
}

impl GuiConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.window.grab_zone_thickness <= 0.0 {
            return Err("Grab zone thickness must be positive".to_string());
        }
        if self.window.title_bar_height <= 0.0 {
            return Err("Title bar height must be positive".to_string());
        }
        if self.window.content_padding < 0.0 {
            return Err("Content padding cannot be negative".to_string());
        }
        if !(0.0..=1.0).contains(&self.window.background_alpha) {
            return Err("Background alpha must be within [0, 1]".to_string());
        }
        if self.label.glyph_size <= 0.0 {
            return Err("Glyph size must be positive".to_string());
        }
        Ok(())
    }
}

impl Config for GuiConfig {}
