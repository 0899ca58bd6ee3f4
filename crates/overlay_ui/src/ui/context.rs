//! Contexts threaded through attach and per-frame traversal

use super::component::{Component, Widget};
use super::group::Group;
use super::resources::GuiResources;
use super::{ManagerId, WidgetId};
use crate::config::GuiConfig;
use crate::foundation::math::Vec2;
use crate::input::{InputState, MouseButton};

/// Issues strictly increasing widget ids, starting at 1
#[derive(Debug)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Create an allocator whose first id is `#1`
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Issue the next id
    pub fn allocate(&mut self) -> WidgetId {
        let id = WidgetId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids issued so far
    pub fn issued(&self) -> u64 {
        self.next - 1
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a widget needs while being attached
///
/// Composite widgets receive this in [`Widget::init`] and use it to attach
/// their own sub-widgets, so the whole subtree draws ids from the same
/// allocator.
pub struct AttachContext<'a> {
    ids: &'a mut IdAllocator,
    manager: ManagerId,
    resources: &'a GuiResources,
    config: &'a GuiConfig,
}

impl<'a> AttachContext<'a> {
    /// Create an attach context
    pub fn new(
        ids: &'a mut IdAllocator,
        manager: ManagerId,
        resources: &'a GuiResources,
        config: &'a GuiConfig,
    ) -> Self {
        Self { ids, manager, resources, config }
    }

    /// Manager the subtree is being attached to
    pub fn manager(&self) -> ManagerId {
        self.manager
    }

    /// Shared meshes
    pub fn resources(&self) -> &GuiResources {
        self.resources
    }

    /// GUI tunables
    pub fn config(&self) -> &GuiConfig {
        self.config
    }

    /// Attach a widget under `parent`
    ///
    /// Assigns identity, sets the parent/manager references, makes the name
    /// unique within `siblings`, copies the parent palette, then runs
    /// `init` followed by `validate`.
    pub fn attach<W: Widget + ?Sized>(
        &mut self,
        widget: &mut W,
        parent: Option<&Component>,
        siblings: Option<&Group>,
    ) -> WidgetId {
        let id = self.ids.allocate();
        let component = widget.component_mut();
        component.attach(id, self.manager, parent.map(Component::id));
        if let Some(siblings) = siblings {
            let name = siblings.unique_name(component.name());
            component.rename(name);
        }
        component.inherit_palette(parent);

        widget.init(self);
        widget.validate();
        id
    }
}

/// Deferred structural change requested during traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeRequest {
    /// Remove the widget with this id from the tree
    Remove(WidgetId),
}

/// Per-frame state handed down the tree
///
/// `origin` is the accumulated position of every ancestor of the widget
/// currently being visited; hit tests subtract it from the pointer.
pub struct FrameContext<'a> {
    input: &'a dyn InputState,
    origin: Vec2,
    frame: u64,
    requests: &'a mut Vec<TreeRequest>,
}

impl<'a> FrameContext<'a> {
    /// Create a root context with a zero origin
    pub fn new(input: &'a dyn InputState, frame: u64, requests: &'a mut Vec<TreeRequest>) -> Self {
        Self {
            input,
            origin: Vec2::zeros(),
            frame,
            requests,
        }
    }

    /// Context for the children of a widget positioned at `offset`
    pub fn nested(&mut self, offset: Vec2) -> FrameContext<'_> {
        FrameContext {
            input: self.input,
            origin: self.origin + offset,
            frame: self.frame,
            requests: &mut *self.requests,
        }
    }

    /// Input snapshot for this frame
    pub fn input(&self) -> &dyn InputState {
        self.input
    }

    /// Accumulated ancestor offset
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Frame counter maintained by the manager
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Pointer position in surface space
    pub fn pointer(&self) -> Vec2 {
        self.input.pointer_position()
    }

    /// Pointer movement this frame
    pub fn delta(&self) -> Vec2 {
        self.input.pointer_delta()
    }

    /// Drawing surface size
    pub fn surface_size(&self) -> Vec2 {
        self.input.surface_size()
    }

    /// Left button went down this frame
    pub fn is_pressed(&self) -> bool {
        self.input.is_key_pressed(MouseButton::Left)
    }

    /// Left button is held
    pub fn is_down(&self) -> bool {
        self.input.is_key_down(MouseButton::Left)
    }

    /// Left button went up this frame
    pub fn is_released(&self) -> bool {
        self.input.is_key_released(MouseButton::Left)
    }

    /// Hit test `component` against the current pointer
    pub fn is_inside(&self, component: &Component) -> bool {
        component.is_inside(&self.origin, &self.pointer())
    }

    /// Ask the manager to remove a widget once traversal finishes
    pub fn request_removal(&mut self, id: WidgetId) {
        self.requests.push(TreeRequest::Remove(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::FrameInput;

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.allocate(), WidgetId(1));
        assert_eq!(ids.allocate(), WidgetId(2));
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn test_nested_origin_accumulates() {
        let input = FrameInput::new(800.0, 600.0);
        let mut requests = Vec::new();
        let mut root = FrameContext::new(&input, 7, &mut requests);
        let mut first = root.nested(Vec2::new(10.0, 20.0));
        let second = first.nested(Vec2::new(1.0, 2.0));
        assert_eq!(second.origin(), Vec2::new(11.0, 22.0));
        assert_eq!(second.frame(), 7);
    }

    #[test]
    fn test_requests_from_nested_contexts_reach_the_root_queue() {
        let input = FrameInput::new(800.0, 600.0);
        let mut requests = Vec::new();
        {
            let mut root = FrameContext::new(&input, 0, &mut requests);
            root.nested(Vec2::new(5.0, 5.0)).request_removal(WidgetId(3));
        }
        assert_eq!(requests, vec![TreeRequest::Remove(WidgetId(3))]);
    }
}
