//! GLFW input adapter
//!
//! Feeds `glfw::WindowEvent`s into a [`FrameInput`]. GLFW reports the cursor
//! with a top-left origin, so y is flipped into surface space here.

use super::{FrameInput, InputState, MouseButton};

impl FrameInput {
    /// Apply one GLFW window event to this frame's input
    pub fn handle_glfw_event(&mut self, event: &glfw::WindowEvent) {
        match *event {
            glfw::WindowEvent::CursorPos(x, y) => {
                let height = self.surface_size().y;
                self.update_mouse_position(x as f32, height - y as f32);
            }
            glfw::WindowEvent::MouseButton(button, action, _) => {
                let button = match button {
                    glfw::MouseButton::Button1 => MouseButton::Left,
                    glfw::MouseButton::Button2 => MouseButton::Right,
                    glfw::MouseButton::Button3 => MouseButton::Middle,
                    _ => return,
                };
                match action {
                    glfw::Action::Press => self.update_mouse_button(button, true),
                    glfw::Action::Release => self.update_mouse_button(button, false),
                    glfw::Action::Repeat => {}
                }
            }
            glfw::WindowEvent::FramebufferSize(width, height) => {
                self.set_surface_size(width as f32, height as f32);
            }
            _ => {}
        }
    }
}
