//! Widget base state and the widget capability interface

use std::any::Any;
use std::fmt;

use super::context::{AttachContext, FrameContext};
use super::group::Group;
use super::style::Palette;
use super::triggers::Triggers;
use super::{ManagerId, WidgetId};
use crate::foundation::math::{translation_2d, Mat4, Vec2};
use crate::input::collision;
use crate::render::DrawHandles;

/// Name given to widgets that were not named explicitly
pub const DEFAULT_NAME: &str = "component";

/// Identity of a widget plus the back-reference to its manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    id: WidgetId,
    name: String,
    manager: Option<ManagerId>,
}

impl Unit {
    /// Create a detached unit with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: WidgetId::DETACHED,
            name: name.into(),
            manager: None,
        }
    }

    /// Manager-issued id (`WidgetId::DETACHED` before attach)
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Human-readable name, unique within the group it was attached to
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owning manager, if attached
    pub fn manager(&self) -> Option<ManagerId> {
        self.manager
    }

    /// Whether the widget has been attached to a manager
    pub fn is_attached(&self) -> bool {
        self.manager.is_some()
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

/// Positioned, sized node of the widget tree
///
/// `position` is relative to the parent; the on-screen origin of a widget is
/// the sum of every ancestor's position plus its own.
#[derive(Debug, Clone)]
pub struct Component {
    unit: Unit,
    parent: Option<WidgetId>,
    position: Vec2,
    size: Vec2,
    palette: Palette,
    enabled: bool,
    visible: bool,
}

impl Component {
    /// Create a detached component
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            unit: Unit::default(),
            parent: None,
            position,
            size: size.sup(&Vec2::zeros()),
            palette: Palette::default(),
            enabled: true,
            visible: true,
        }
    }

    /// Request a name; collisions are resolved with a numeric suffix on attach
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.unit.name = name.into();
        self
    }

    /// Identity and manager back-reference
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Manager-issued id
    pub fn id(&self) -> WidgetId {
        self.unit.id
    }

    /// Widget name
    pub fn name(&self) -> &str {
        &self.unit.name
    }

    /// Parent widget, `None` for top-level widgets owned by the manager
    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    /// Parent-relative position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Size, never negative
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Color palette
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Whether event dispatch reaches this widget
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether this widget is drawn
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Move to a parent-relative position
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Resize; negative extents are clamped to zero
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size.sup(&Vec2::zeros());
    }

    /// Replace the palette
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Enable or disable event dispatch
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Show or hide
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// One-time copy of the parent's palette; top-level widgets keep their own
    pub fn inherit_palette(&mut self, parent: Option<&Self>) {
        if let Some(parent) = parent {
            self.palette = parent.palette;
        }
    }

    /// Pointer expressed in this widget's local space
    ///
    /// `origin` is the accumulated position of every ancestor.
    pub fn local_point(&self, origin: &Vec2, pointer: &Vec2) -> Vec2 {
        pointer - origin - self.position
    }

    /// Hit test against `[0, size]` in local space
    pub fn is_inside(&self, origin: &Vec2, pointer: &Vec2) -> bool {
        collision::point_in_local_bounds(&self.local_point(origin, pointer), &self.size)
    }

    /// Model matrix of this widget's local space
    pub fn local_transform(&self, parent: &Mat4) -> Mat4 {
        parent * translation_2d(&self.position)
    }

    pub(crate) fn attach(&mut self, id: WidgetId, manager: ManagerId, parent: Option<WidgetId>) {
        self.unit.id = id;
        self.unit.manager = Some(manager);
        self.parent = parent;
    }

    pub(crate) fn rename(&mut self, name: String) {
        self.unit.name = name;
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id = {} name = {} pos = {},{} size = {},{}",
            self.unit.id, self.unit.name, self.position.x, self.position.y, self.size.x, self.size.y
        )
    }
}

/// Capability interface implemented by every widget
///
/// Lifecycle: construct detached, attach through the manager (which assigns
/// identity, parent and palette, then calls [`Widget::init`] and
/// [`Widget::validate`]), tick every frame, and finally remove explicitly.
pub trait Widget: Any {
    /// Base state
    fn component(&self) -> &Component;

    /// Mutable base state
    fn component_mut(&mut self) -> &mut Component;

    /// One-time construction of backing shapes and sub-widgets
    fn init(&mut self, _ctx: &mut AttachContext<'_>) {}

    /// Recompute derived child layout after a geometry change
    fn validate(&mut self) {}

    /// Recompute transient per-frame state (drag-follow, color flashes)
    fn update(&mut self, _ctx: &mut FrameContext<'_>) {}

    /// Evaluate input; returns `true` if the widget consumed the interaction
    fn check_events(&mut self, _ctx: &mut FrameContext<'_>) -> bool {
        false
    }

    /// Draw with `parent` as the model matrix of the parent's local space
    fn draw(&self, handles: &mut dyn DrawHandles, parent: &Mat4);

    /// Child-container view, if this widget holds children
    fn children(&self) -> Option<&Group> {
        None
    }

    /// Mutable child-container view
    fn children_mut(&mut self) -> Option<&mut Group> {
        None
    }

    /// Sub-widgets this widget owns as fixed fields (chrome, steppers,
    /// captions)
    ///
    /// Parts carry manager-issued ids and are reachable through id lookups,
    /// but they stay owned by this widget and cannot be removed on their own.
    fn parts(&self) -> Vec<&(dyn Widget + 'static)> {
        Vec::new()
    }

    /// Mutable view of [`Widget::parts`], in the same order
    fn parts_mut(&mut self) -> Vec<&mut (dyn Widget + 'static)> {
        Vec::new()
    }

    /// Callback registry, if this widget fires named events
    fn triggers_mut(&mut self) -> Option<&mut Triggers> {
        None
    }

    /// Called once right before the widget is detached from the tree
    fn on_remove(&mut self) {}

    /// Typed access for applications
    fn as_any(&self) -> &dyn Any;

    /// Mutable typed access for applications
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<'a> dyn Widget + 'a {
    /// Downcast to a concrete widget type
    pub fn downcast_ref<T: Widget>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Mutable downcast to a concrete widget type
    pub fn downcast_mut<T: Widget>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    /// Shortcut for `component().id()`
    pub fn id(&self) -> WidgetId {
        self.component().id()
    }
}

impl<'a> fmt::Debug for dyn Widget + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Widget({})", self.component())
    }
}
