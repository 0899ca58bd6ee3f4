//! Button widget - clickable quad with a centered label

use std::any::Any;
use std::fmt;

use super::label::Label;
use crate::foundation::math::{scale_2d, Mat4, Vec2, Vec4};
use crate::render::DrawHandles;
use crate::ui::clickable::Clickable;
use crate::ui::component::{Component, Widget};
use crate::ui::context::{AttachContext, FrameContext};
use crate::ui::resources::ShapeMesh;
use crate::ui::style::{shade, Palette};
use crate::ui::triggers::{Triggers, WidgetEvent};

/// Clickable rectangle
///
/// The backing quad is drawn in the palette's primary color and flashes to
/// the shaded primary while held. The label is drawn in the tertiary color
/// and kept centered; a button without text carries an empty one so that
/// text set later is already attached and configured.
pub struct Button {
    component: Component,
    clickable: Clickable,
    triggers: Triggers,
    label: Label,
    quad: Option<ShapeMesh>,
    back_color: Vec4,
    toggleable: bool,
    toggled: bool,
}

impl Button {
    /// Create a button without text
    pub fn new(position: Vec2, size: Vec2) -> Self {
        let component = Component::new(position, size);
        let back_color = component.palette().primary;
        Self {
            component,
            clickable: Clickable::default(),
            triggers: Triggers::new(),
            label: Label::new(Vec2::zeros(), "").with_name("label"),
            quad: None,
            back_color,
            toggleable: false,
            toggled: false,
        }
    }

    /// Add a centered label
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.label.set_text(text);
        self
    }

    /// Request a name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.component = self.component.with_name(name);
        self
    }

    /// Make every release flip the toggled state
    pub fn with_toggle(mut self) -> Self {
        self.toggleable = true;
        self
    }

    /// Click state
    pub fn clickable(&self) -> &Clickable {
        &self.clickable
    }

    /// Centered label (empty for buttons without text)
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Label text
    pub fn text(&self) -> &str {
        self.label.text()
    }

    /// Replace the label text and re-center it
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label.set_text(text);
        self.validate();
    }

    /// Whether the button is currently toggled on
    pub fn is_toggled(&self) -> bool {
        self.toggled
    }

    /// Force the toggled state
    pub fn set_toggled(&mut self, toggled: bool) {
        self.toggled = toggled;
    }

    /// Color the backing quad is currently drawn in
    pub fn back_color(&self) -> Vec4 {
        self.back_color
    }

    /// Replace the palette and reset the backing color
    pub fn set_palette(&mut self, palette: Palette) {
        self.component.set_palette(palette);
        self.back_color = palette.primary;
        self.label.set_color(palette.tertiary);
    }

    /// Callback registry
    pub fn triggers(&self) -> &Triggers {
        &self.triggers
    }
}

impl Widget for Button {
    fn component(&self) -> &Component {
        &self.component
    }

    fn component_mut(&mut self) -> &mut Component {
        &mut self.component
    }

    fn init(&mut self, ctx: &mut AttachContext<'_>) {
        self.clickable.configure(&ctx.config().clickable);
        self.quad = Some(ctx.resources().quad);

        let palette = *self.component.palette();
        self.back_color = palette.primary;
        ctx.attach(&mut self.label, Some(&self.component), None);
        self.label.set_color(palette.tertiary);
    }

    fn validate(&mut self) {
        let center = self.component.size() / 2.0;
        self.label.validate();
        self.label.center_on(center);
    }

    fn update(&mut self, _ctx: &mut FrameContext<'_>) {
        let primary = self.component.palette().primary;
        if self.toggled {
            self.back_color = shade(&primary);
        } else if !self.clickable.is_active() {
            self.back_color = primary;
        }
    }

    fn check_events(&mut self, ctx: &mut FrameContext<'_>) -> bool {
        let inside = ctx.is_inside(&self.component);
        let report = self.clickable.check(ctx, inside);
        let id = self.component.id();
        let primary = self.component.palette().primary;

        if report.pressed {
            log::debug!("Pressed button {}", self.component);
            self.back_color = primary;
            self.triggers.fire(id, WidgetEvent::Pressed, None);
        }
        if report.double_clicked {
            self.triggers.fire(id, WidgetEvent::DoubleClicked, None);
        }
        if report.down {
            self.back_color = shade(&primary);
            self.triggers.fire(id, WidgetEvent::Down, None);
        }
        if report.held {
            self.triggers.fire(id, WidgetEvent::Held, None);
        }
        if report.released {
            self.back_color = primary;
            if self.toggleable {
                self.toggled = !self.toggled;
            }
            self.triggers.fire(id, WidgetEvent::Released, None);
        }
        if report.dragging {
            self.triggers.fire(id, WidgetEvent::Dragging, None);
        }

        report.pressed || report.released || self.clickable.is_active()
    }

    fn draw(&self, handles: &mut dyn DrawHandles, parent: &Mat4) {
        let local = self.component.local_transform(parent);
        if let Some(quad) = self.quad {
            quad.draw(handles, &(local * scale_2d(&self.component.size())), &self.back_color);
        }
        self.label.draw(handles, &local);
    }

    fn parts(&self) -> Vec<&(dyn Widget + 'static)> {
        vec![&self.label as &(dyn Widget + 'static)]
    }

    fn parts_mut(&mut self) -> Vec<&mut (dyn Widget + 'static)> {
        vec![&mut self.label as &mut (dyn Widget + 'static)]
    }

    fn triggers_mut(&mut self) -> Option<&mut Triggers> {
        Some(&mut self.triggers)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("component", &self.component)
            .field("text", &self.text())
            .field("toggled", &self.toggled)
            .field("triggers", &self.triggers)
            .finish()
    }
}
