//! Frame input snapshot
//!
//! Collects raw pointer events between frames and answers the
//! [`InputState`] queries for the frame being processed.

use super::{InputState, MouseButton, MouseButtons};
use crate::foundation::math::Vec2;

/// Input state for a single frame
///
/// Call [`FrameInput::begin_frame`] once per frame *before* feeding that
/// frame's window events; press and release transitions then stay visible
/// for exactly one frame.
#[derive(Debug, Clone)]
pub struct FrameInput {
    /// Current pointer position in surface space
    pointer: Vec2,
    /// Pointer position when the frame began
    frame_start_pointer: Vec2,

    /// Mouse button states
    buttons_down: MouseButtons,
    pressed_this_frame: MouseButtons,
    released_this_frame: MouseButtons,

    /// Surface dimensions for confinement and maximize
    surface_size: Vec2,
}

impl FrameInput {
    /// Create a new frame input for a surface of the given size
    pub fn new(surface_width: f32, surface_height: f32) -> Self {
        Self {
            pointer: Vec2::zeros(),
            frame_start_pointer: Vec2::zeros(),
            buttons_down: MouseButtons::empty(),
            pressed_this_frame: MouseButtons::empty(),
            released_this_frame: MouseButtons::empty(),
            surface_size: Vec2::new(surface_width, surface_height),
        }
    }

    /// Begin new frame (resets per-frame transitions and the delta baseline)
    pub fn begin_frame(&mut self) {
        self.pressed_this_frame = MouseButtons::empty();
        self.released_this_frame = MouseButtons::empty();
        self.frame_start_pointer = self.pointer;
    }

    /// Update surface dimensions (call when the window resizes)
    pub fn set_surface_size(&mut self, width: f32, height: f32) {
        self.surface_size = Vec2::new(width, height);
    }

    /// Update pointer position (surface space, y up)
    pub fn update_mouse_position(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Update mouse button state
    pub fn update_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        let flag = MouseButtons::from(button);
        let was_down = self.buttons_down.contains(flag);

        // Detect press/release this frame
        if pressed && !was_down {
            self.pressed_this_frame.insert(flag);
        } else if !pressed && was_down {
            self.released_this_frame.insert(flag);
        }
        self.buttons_down.set(flag, pressed);
    }

    /// Buttons currently held
    pub fn buttons_down(&self) -> MouseButtons {
        self.buttons_down
    }
}

impl Default for FrameInput {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl InputState for FrameInput {
    fn is_key_pressed(&self, button: MouseButton) -> bool {
        self.pressed_this_frame.contains(button.into())
    }

    fn is_key_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(button.into())
    }

    fn is_key_released(&self, button: MouseButton) -> bool {
        self.released_this_frame.contains(button.into())
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    fn pointer_delta(&self) -> Vec2 {
        self.pointer - self.frame_start_pointer
    }

    fn surface_size(&self) -> Vec2 {
        self.surface_size
    }
}
