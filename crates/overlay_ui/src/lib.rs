//! # Overlay UI
//!
//! A retained-mode 2D widget tree drawn over a real-time 3D scene.
//!
//! ## Features
//!
//! - **Widget tree**: buttons, labels, containers, windows and spinners
//!   owned by a single [`Manager`](ui::Manager)
//! - **Frame driven**: one tick is `check_events` -> `update` -> `draw`
//! - **Window chrome**: drag bar, resize grab zones, close and maximize
//! - **Backend agnostic**: drawing and mesh upload go through small traits,
//!   with a recording backend for headless use
//!
//! ## Quick Start
//!
//! ```rust
//! use overlay_ui::prelude::*;
//!
//! let mut backend = RecordingBackend::new();
//! let resources = GuiResources::load(&mut backend, Some(TextureHandle(1))).unwrap();
//! let mut manager = Manager::new(resources, GuiConfig::default());
//!
//! let window = manager.add_component(Box::new(Window::new(
//!     Vec2::new(50.0, 50.0),
//!     Vec2::new(300.0, 200.0),
//!     "Inspector",
//! )));
//! manager
//!     .add_child(window, Box::new(Spinner::new(Vec2::new(20.0, 20.0), Vec2::new(120.0, 20.0), 0)))
//!     .unwrap();
//!
//! let mut input = FrameInput::new(800.0, 600.0);
//! input.begin_frame();
//! manager.tick(&input, &mut backend);
//! assert!(!backend.calls().is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod input;
pub mod render;
pub mod ui;
pub mod error;

pub use error::{GuiError, GuiResult};

/// Common imports for widget tree users
pub mod prelude {
    pub use crate::{
        GuiError, GuiResult,
        config::{Config, GuiConfig},
        foundation::math::{Vec2, Vec4, Mat4},
        input::{FrameInput, InputState, MouseButton},
        render::{DrawHandles, MeshUploader, RecordingBackend, TextureHandle},
        ui::{
            Manager, Widget, WidgetId, Component, Palette, colors,
            Button, Container, Label, Spinner, Window, ResizeAxes, ResizeEdge,
            GuiResources, WidgetEvent, TriggerEvent,
        },
    };
}
