//! Crate-level error type

use thiserror::Error;

use crate::config::ConfigError;
use crate::render::RenderError;
use crate::ui::WidgetId;

/// Errors surfaced by the widget tree API
///
/// Per-frame failures (a rejected resize, a removal request for a widget
/// that is already gone) are absorbed and logged instead.
#[derive(Error, Debug)]
pub enum GuiError {
    /// No widget with this id is attached to the manager
    #[error("Widget {0} not found")]
    WidgetNotFound(WidgetId),

    /// The widget does not expose a child container
    #[error("Widget {0} cannot hold children")]
    NotAContainer(WidgetId),

    /// The widget is a fixed part of another widget and only goes with it
    #[error("Widget {0} is part of its owner and cannot be removed on its own")]
    FixedPart(WidgetId),

    /// The widget has no callback registry
    #[error("Widget {0} does not fire events")]
    NoTriggers(WidgetId),

    /// Event name did not match any known event
    #[error("Unknown widget event: {0}")]
    UnknownEvent(String),

    /// Rendering collaborator failure
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Configuration failure
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for widget tree operations
pub type GuiResult<T> = Result<T, GuiError>;
