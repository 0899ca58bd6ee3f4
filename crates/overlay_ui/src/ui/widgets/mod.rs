//! Concrete widgets
//!
//! - Label: fixed-width glyph run
//! - Button: clickable quad with an optional label
//! - Container: plain panel owning a group of children
//! - Window: draggable, resizable, maximizable panel with chrome
//! - Spinner: integer value with decrement/increment buttons

pub mod label;
pub mod button;
pub mod container;
pub mod window;
pub mod spinner;

pub use label::Label;
pub use button::Button;
pub use container::Container;
pub use window::{Window, ResizeAxes, ResizeEdge};
pub use spinner::Spinner;
