//! Input collaborator contract
//!
//! Widgets never poll the windowing layer themselves. Each frame they query an
//! [`InputState`] handed down through the frame context; the queries are
//! answered fresh for that frame and nothing is cached across ticks.

pub mod collision;
pub mod frame_input;
#[cfg(feature = "glfw")]
pub mod glfw_input;

use bitflags::bitflags;

use crate::foundation::math::Vec2;

pub use frame_input::FrameInput;

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

bitflags! {
    /// Set of mouse buttons
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MouseButtons: u8 {
        /// Left mouse button
        const LEFT = 0b001;
        /// Right mouse button
        const RIGHT = 0b010;
        /// Middle mouse button
        const MIDDLE = 0b100;
    }
}

impl From<MouseButton> for MouseButtons {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::LEFT,
            MouseButton::Right => Self::RIGHT,
            MouseButton::Middle => Self::MIDDLE,
        }
    }
}

/// Per-frame input queries consumed by the widget tree
pub trait InputState {
    /// Button transitioned to down during this frame
    fn is_key_pressed(&self, button: MouseButton) -> bool;

    /// Button is currently held down
    fn is_key_down(&self, button: MouseButton) -> bool;

    /// Button transitioned to up during this frame
    fn is_key_released(&self, button: MouseButton) -> bool;

    /// Pointer position in surface space (bottom-left origin, y up)
    fn pointer_position(&self) -> Vec2;

    /// Pointer movement since the previous frame
    fn pointer_delta(&self) -> Vec2;

    /// Size of the drawing surface in pixels
    fn surface_size(&self) -> Vec2;
}
