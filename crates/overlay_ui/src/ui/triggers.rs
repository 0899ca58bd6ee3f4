//! Named-event callback registry
//!
//! Each widget owns a [`Triggers`] value mapping event names to callbacks
//! registered by the application. Callbacks fire in registration order and
//! are expected to close over an explicit state handle
//! (e.g. `Rc<RefCell<AppState>>`) rather than globals.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use slotmap::{new_key_type, SlotMap};

use super::WidgetId;
use crate::error::GuiError;

new_key_type! {
    /// Handle returned by [`Triggers::link`], used to unlink a callback
    pub struct LinkKey;
}

/// Events a widget can fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetEvent {
    /// Button went down over the widget this frame
    Pressed,
    /// Button is held over the widget
    Down,
    /// Button held past the auto-repeat threshold
    Held,
    /// Button went up after a press on the widget
    Released,
    /// Pointer moved while the widget is down
    Dragging,
    /// Two presses within the double-click window
    DoubleClicked,
    /// Window position changed by a drag
    Moved,
    /// Window size changed by a resize
    Resized,
    /// Window removed from the tree
    Closed,
    /// Window maximized
    Maximized,
    /// Window restored from maximized
    Restored,
    /// Spinner value increased
    Increased,
    /// Spinner value decreased
    Decreased,
    /// Spinner value reset
    Reset,
}

impl WidgetEvent {
    /// Every event, in declaration order
    pub const ALL: [Self; 14] = [
        Self::Pressed,
        Self::Down,
        Self::Held,
        Self::Released,
        Self::Dragging,
        Self::DoubleClicked,
        Self::Moved,
        Self::Resized,
        Self::Closed,
        Self::Maximized,
        Self::Restored,
        Self::Increased,
        Self::Decreased,
        Self::Reset,
    ];

    /// Event name as used by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pressed => "pressed",
            Self::Down => "down",
            Self::Held => "held",
            Self::Released => "released",
            Self::Dragging => "dragging",
            Self::DoubleClicked => "double_clicked",
            Self::Moved => "moved",
            Self::Resized => "resized",
            Self::Closed => "closed",
            Self::Maximized => "maximized",
            Self::Restored => "restored",
            Self::Increased => "increased",
            Self::Decreased => "decreased",
            Self::Reset => "reset",
        }
    }
}

impl fmt::Display for WidgetEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetEvent {
    type Err = GuiError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|event| event.as_str() == name)
            .ok_or_else(|| GuiError::UnknownEvent(name.to_string()))
    }
}

/// Payload handed to callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerEvent {
    /// Widget that fired
    pub source: WidgetId,
    /// What happened
    pub event: WidgetEvent,
    /// New value for spinner events
    pub value: Option<i64>,
}

/// Boxed trigger callback
pub type TriggerCallback = Box<dyn FnMut(&TriggerEvent)>;

/// Per-widget callback registry
#[derive(Default)]
pub struct Triggers {
    callbacks: SlotMap<LinkKey, TriggerCallback>,
    links: HashMap<WidgetEvent, Vec<LinkKey>>,
}

impl Triggers {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for `event`
    pub fn link(&mut self, event: WidgetEvent, callback: impl FnMut(&TriggerEvent) + 'static) -> LinkKey {
        let key = self.callbacks.insert(Box::new(callback));
        self.links.entry(event).or_default().push(key);
        key
    }

    /// Remove a callback; returns false if it was already gone
    pub fn unlink(&mut self, key: LinkKey) -> bool {
        if self.callbacks.remove(key).is_none() {
            return false;
        }
        for keys in self.links.values_mut() {
            keys.retain(|linked| *linked != key);
        }
        true
    }

    /// Invoke every callback linked to `event`, in registration order
    pub fn fire(&mut self, source: WidgetId, event: WidgetEvent, value: Option<i64>) {
        let Some(keys) = self.links.get(&event) else {
            return;
        };
        let payload = TriggerEvent { source, event, value };
        for key in keys {
            if let Some(callback) = self.callbacks.get_mut(*key) {
                callback(&payload);
            }
        }
    }

    /// Number of callbacks linked to `event`
    pub fn link_count(&self, event: WidgetEvent) -> usize {
        self.links.get(&event).map_or(0, Vec::len)
    }

    /// Whether no callbacks are linked at all
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl fmt::Debug for Triggers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut linked: Vec<(&str, usize)> = self
            .links
            .iter()
            .filter(|(_, keys)| !keys.is_empty())
            .map(|(event, keys)| (event.as_str(), keys.len()))
            .collect();
        linked.sort_unstable();
        f.debug_struct("Triggers").field("links", &linked).finish()
    }
}
