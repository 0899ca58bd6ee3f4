//! UI System Module
//!
//! A retained-mode widget tree drawn over the 3D scene.
//!
//! Architecture:
//! - Manager: root owner of the tree; issues identities and drives the
//!   per-frame tick (check events -> update -> draw)
//! - Group: ordered children; draw order front to back, event order reversed
//! - Clickable: press/down/held/released/dragging state machine
//! - widgets/: Label, Button, Container, Window, Spinner
//! - triggers: per-widget named-event callback registry

pub mod style;
pub mod component;
pub mod context;
pub mod resources;
pub mod triggers;
pub mod clickable;
pub mod group;
pub mod manager;
pub mod widgets;

#[cfg(test)]
mod tests;

use std::fmt;

pub use component::{Component, Unit, Widget};
pub use context::{AttachContext, FrameContext, IdAllocator, TreeRequest};
pub use resources::{GuiResources, ShapeMesh, FontSheet};
pub use style::{Palette, colors};
pub use triggers::{Triggers, TriggerEvent, WidgetEvent, LinkKey};
pub use clickable::{Clickable, ClickReport};
pub use group::Group;
pub use manager::Manager;
pub use widgets::{Label, Button, Container, Window, Spinner, ResizeAxes, ResizeEdge};

/// Manager-issued widget identity
///
/// Ids are strictly increasing within a manager and never reused. A widget
/// that has not been attached yet carries [`WidgetId::DETACHED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Placeholder id of a widget that has not been attached
    pub const DETACHED: Self = Self(0);
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Process-unique identity of a [`Manager`]
///
/// Stands in for the back-reference from a widget to its owning manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ManagerId(pub u64);
