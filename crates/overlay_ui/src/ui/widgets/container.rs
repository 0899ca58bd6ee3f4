//! Container widget - panel owning child widgets

use std::any::Any;

use crate::foundation::math::{scale_2d, Mat4, Vec2};
use crate::render::DrawHandles;
use crate::ui::component::{Component, Widget};
use crate::ui::context::{AttachContext, FrameContext};
use crate::ui::group::Group;
use crate::ui::resources::ShapeMesh;

/// Plain panel drawn in the tertiary color
///
/// Children are added through `Manager::add_child` and are positioned
/// relative to the container.
#[derive(Debug)]
pub struct Container {
    component: Component,
    children: Group,
    quad: Option<ShapeMesh>,
}

impl Container {
    /// Create an empty container
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            component: Component::new(position, size),
            children: Group::new(),
            quad: None,
        }
    }

    /// Request a name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.component = self.component.with_name(name);
        self
    }
}

impl Widget for Container {
    fn component(&self) -> &Component {
        &self.component
    }

    fn component_mut(&mut self) -> &mut Component {
        &mut self.component
    }

    fn init(&mut self, ctx: &mut AttachContext<'_>) {
        self.quad = Some(ctx.resources().quad);
    }

    fn validate(&mut self) {
        self.children.validate_all();
    }

    fn update(&mut self, ctx: &mut FrameContext<'_>) {
        let mut inner = ctx.nested(self.component.position());
        self.children.update(&mut inner);
    }

    fn check_events(&mut self, ctx: &mut FrameContext<'_>) -> bool {
        let mut inner = ctx.nested(self.component.position());
        self.children.check_events(&mut inner)
    }

    fn draw(&self, handles: &mut dyn DrawHandles, parent: &Mat4) {
        let local = self.component.local_transform(parent);
        if let Some(quad) = self.quad {
            quad.draw(handles, &(local * scale_2d(&self.component.size())), &self.component.palette().tertiary);
        }
        self.children.draw(handles, &local);
    }

    fn children(&self) -> Option<&Group> {
        Some(&self.children)
    }

    fn children_mut(&mut self) -> Option<&mut Group> {
        Some(&mut self.children)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
