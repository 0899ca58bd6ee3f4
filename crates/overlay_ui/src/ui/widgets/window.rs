//! Window widget - draggable, resizable panel with chrome
//!
//! The chrome is five invisible grab zones (left, right, bottom and the two
//! bottom corners), a title bar used as the drag handle, and close/maximize
//! buttons on the right end of the bar. Content widgets live in a separate
//! group and define the window's minimum size. The chrome is painted under
//! the content but sees input before it.

use std::any::Any;
use std::fmt;

use bitflags::bitflags;

use super::button::Button;
use crate::foundation::math::{scale_2d, smaller_on_any_axis, Mat4, Vec2};
use crate::render::DrawHandles;
use crate::ui::clickable::Clickable;
use crate::ui::component::{Component, Widget};
use crate::ui::context::{AttachContext, FrameContext};
use crate::ui::group::Group;
use crate::ui::resources::ShapeMesh;
use crate::ui::style::{colors, with_alpha};
use crate::ui::triggers::{Triggers, WidgetEvent};
use crate::config::WindowConfig;

bitflags! {
    /// Axes along which a window may be resized
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ResizeAxes: u8 {
        /// Width
        const X = 0b01;
        /// Height
        const Y = 0b10;
    }
}

/// Edge or corner being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    /// Left edge
    Left,
    /// Right edge
    Right,
    /// Bottom edge
    Bottom,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-right corner
    BottomRight,
}

impl ResizeEdge {
    /// Axes this edge changes
    pub fn axes(&self) -> ResizeAxes {
        match self {
            Self::Left | Self::Right => ResizeAxes::X,
            Self::Bottom => ResizeAxes::Y,
            Self::BottomLeft | Self::BottomRight => ResizeAxes::X | ResizeAxes::Y,
        }
    }
}

/// Top-level panel that can be moved, resized, maximized and closed
pub struct Window {
    component: Component,
    clickable: Clickable,
    triggers: Triggers,
    title: Option<String>,

    // chrome, in paint order
    left: Button,
    right: Button,
    bottom: Button,
    bottom_left: Button,
    bottom_right: Button,
    bar: Button,
    close: Button,
    maximize: Button,

    content: Group,
    quad: Option<ShapeMesh>,

    resizable: ResizeAxes,
    min_size: Vec2,
    maximized: bool,
    restore: Option<(Vec2, Vec2)>,
    surface: Option<Vec2>,
    chrome: WindowConfig,
    layout_revision: u64,
}

impl Window {
    /// Create a window with a title
    pub fn new(position: Vec2, size: Vec2, title: impl Into<String>) -> Self {
        let mut window = Self::untitled(position, size);
        window.title = Some(title.into());
        window
    }

    /// Create a window titled with the configured default
    pub fn untitled(position: Vec2, size: Vec2) -> Self {
        let zone = |name: &str| Button::new(Vec2::zeros(), Vec2::zeros()).with_name(name);
        Self {
            component: Component::new(position, size),
            clickable: Clickable::default(),
            triggers: Triggers::new(),
            title: None,
            left: zone("left"),
            right: zone("right"),
            bottom: zone("bottom"),
            bottom_left: zone("bottom_left"),
            bottom_right: zone("bottom_right"),
            bar: zone("bar"),
            close: zone("close").with_text("x"),
            maximize: zone("maximize").with_text("o"),
            content: Group::new(),
            quad: None,
            resizable: ResizeAxes::all(),
            min_size: Vec2::zeros(),
            maximized: false,
            restore: None,
            surface: None,
            chrome: WindowConfig::default(),
            layout_revision: 0,
        }
    }

    /// Request a name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.component = self.component.with_name(name);
        self
    }

    /// Title shown on the bar
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_else(|| self.bar.text())
    }

    /// Replace the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.bar.set_text(title.clone());
        self.title = Some(title);
    }

    /// Axes the grab zones may resize
    pub fn resizable(&self) -> ResizeAxes {
        self.resizable
    }

    /// Allow or forbid resizing along both axes
    pub fn set_resizable(&mut self, resizable: bool) {
        self.resizable = if resizable { ResizeAxes::all() } else { ResizeAxes::empty() };
    }

    /// Allow or forbid horizontal resizing
    pub fn set_resizable_x(&mut self, resizable: bool) {
        self.resizable.set(ResizeAxes::X, resizable);
    }

    /// Allow or forbid vertical resizing
    pub fn set_resizable_y(&mut self, resizable: bool) {
        self.resizable.set(ResizeAxes::Y, resizable);
    }

    /// Content bounds plus padding, as of the last `validate`
    pub fn min_size(&self) -> Vec2 {
        self.min_size
    }

    /// Whether the window covers the whole surface
    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    /// Number of completed `validate` passes
    pub fn layout_revision(&self) -> u64 {
        self.layout_revision
    }

    /// Content widgets
    pub fn content(&self) -> &Group {
        &self.content
    }

    /// Title bar (drag handle)
    pub fn bar(&self) -> &Button {
        &self.bar
    }

    /// Close button
    pub fn close_button(&self) -> &Button {
        &self.close
    }

    /// Maximize/restore button
    pub fn maximize_button(&self) -> &Button {
        &self.maximize
    }

    /// Grab zone for an edge
    pub fn grab_zone(&self, edge: ResizeEdge) -> &Button {
        match edge {
            ResizeEdge::Left => &self.left,
            ResizeEdge::Right => &self.right,
            ResizeEdge::Bottom => &self.bottom,
            ResizeEdge::BottomLeft => &self.bottom_left,
            ResizeEdge::BottomRight => &self.bottom_right,
        }
    }

    /// Apply a pointer delta to one edge
    ///
    /// Returns false, leaving the window untouched, while maximized, when the
    /// edge moves an axis that is not resizable, or when the result would be
    /// smaller than the minimum size on either axis.
    pub fn apply_resize(&mut self, edge: ResizeEdge, delta: Vec2, surface: Vec2) -> bool {
        if self.maximized || !self.resizable.contains(edge.axes()) {
            return false;
        }
        let mut position = self.component.position();
        let mut size = self.component.size();

        match edge {
            ResizeEdge::Left => {
                position.x += delta.x;
                size.x -= delta.x;
            }
            ResizeEdge::Right => size.x += delta.x,
            ResizeEdge::Bottom => {
                position.y += delta.y;
                size.y -= delta.y;
            }
            ResizeEdge::BottomLeft => {
                position += delta;
                size.x -= delta.x;
                size.y -= delta.y;
            }
            ResizeEdge::BottomRight => {
                size.x += delta.x;
                position.y += delta.y;
                size.y -= delta.y;
            }
        }

        if smaller_on_any_axis(&size, &self.min_size) {
            return false;
        }

        self.surface = Some(surface);
        self.component.set_position(position);
        self.component.set_size(size);
        self.validate();
        self.triggers.fire(self.component.id(), WidgetEvent::Resized, None);
        true
    }

    /// Maximize to `surface`, or restore the saved geometry
    pub fn toggle_maximize(&mut self, surface: Vec2) {
        self.surface = Some(surface);
        let id = self.component.id();

        if self.maximized {
            if let Some((position, size)) = self.restore.take() {
                self.component.set_position(position);
                self.component.set_size(size);
            }
            self.maximized = false;
            self.validate();
            log::debug!("Restored window {}", self.component);
            self.triggers.fire(id, WidgetEvent::Restored, None);
        } else {
            self.restore = Some((self.component.position(), self.component.size()));
            self.component.set_position(Vec2::zeros());
            self.component.set_size(surface);
            self.maximized = true;
            self.validate();
            log::debug!("Maximized window {}", self.component);
            self.triggers.fire(id, WidgetEvent::Maximized, None);
        }
    }

    fn chrome(&self) -> [&Button; 8] {
        [
            &self.left,
            &self.right,
            &self.bottom,
            &self.bottom_left,
            &self.bottom_right,
            &self.bar,
            &self.close,
            &self.maximize,
        ]
    }

    fn chrome_mut(&mut self) -> [&mut Button; 8] {
        [
            &mut self.left,
            &mut self.right,
            &mut self.bottom,
            &mut self.bottom_left,
            &mut self.bottom_right,
            &mut self.bar,
            &mut self.close,
            &mut self.maximize,
        ]
    }

    fn confine(&mut self, surface: Vec2) {
        let size = self.component.size().inf(&surface).sup(&self.min_size);
        self.component.set_size(size);

        let max_position = (surface - size).sup(&Vec2::zeros());
        let position = self.component.position().sup(&Vec2::zeros()).inf(&max_position);
        self.component.set_position(position);
    }

    fn layout_chrome(&mut self) {
        let size = self.component.size();
        let (w, h) = (size.x, size.y);
        let dz = self.chrome.grab_zone_thickness;
        let bar = self.chrome.title_bar_height;

        let place = |button: &mut Button, x: f32, y: f32, width: f32, height: f32| {
            button.component_mut().set_position(Vec2::new(x, y));
            button.component_mut().set_size(Vec2::new(width, height));
            button.validate();
        };
        place(&mut self.left, 0.0, 0.0, dz, h);
        place(&mut self.right, w - dz, 0.0, dz, h);
        place(&mut self.bottom, 0.0, 0.0, w, dz);
        place(&mut self.bottom_left, 0.0, 0.0, dz, dz);
        place(&mut self.bottom_right, w - dz, 0.0, dz, dz);
        place(&mut self.bar, 0.0, h - bar, w, bar);
        place(&mut self.close, w - bar, h - bar, bar, bar);
        place(&mut self.maximize, w - 2.0 * bar, h - bar, bar, bar);
    }
}

impl Widget for Window {
    fn component(&self) -> &Component {
        &self.component
    }

    fn component_mut(&mut self) -> &mut Component {
        &mut self.component
    }

    fn init(&mut self, ctx: &mut AttachContext<'_>) {
        self.chrome = ctx.config().window.clone();
        self.clickable.configure(&ctx.config().clickable);
        self.quad = Some(ctx.resources().quad);

        let title = self.title.get_or_insert_with(|| ctx.config().window.default_title.clone()).clone();
        self.bar.set_text(title);

        let parent = &self.component;
        for button in [
            &mut self.left,
            &mut self.right,
            &mut self.bottom,
            &mut self.bottom_left,
            &mut self.bottom_right,
            &mut self.bar,
            &mut self.close,
            &mut self.maximize,
        ] {
            ctx.attach(button, Some(parent), None);
        }
        for zone in [
            &mut self.left,
            &mut self.right,
            &mut self.bottom,
            &mut self.bottom_left,
            &mut self.bottom_right,
        ] {
            zone.component_mut().set_visible(false);
        }
        let close_palette = self.close.component().palette().with_primary(colors::RED.into());
        self.close.set_palette(close_palette);
    }

    fn validate(&mut self) {
        self.content.validate_all();
        self.min_size = self.content.minimum_bounds(self.chrome.content_padding);

        let size = self.component.size().sup(&self.min_size);
        self.component.set_size(size);
        if let Some(surface) = self.surface {
            self.confine(surface);
        }

        self.layout_chrome();
        self.layout_revision += 1;
    }

    fn update(&mut self, ctx: &mut FrameContext<'_>) {
        let surface = ctx.surface_size();
        self.surface = Some(surface);

        if !self.maximized {
            let delta = ctx.delta();
            let id = self.component.id();

            if self.bar.clickable().is_dragging(ctx) {
                let position = self.component.position() + delta;
                self.component.set_position(position);
                self.validate();
                self.triggers.fire(id, WidgetEvent::Moved, None);
            }

            let dragging: Vec<ResizeEdge> = [
                ResizeEdge::Left,
                ResizeEdge::Right,
                ResizeEdge::Bottom,
                ResizeEdge::BottomLeft,
                ResizeEdge::BottomRight,
            ]
            .into_iter()
            .filter(|edge| self.grab_zone(*edge).clickable().is_dragging(ctx))
            .collect();
            for edge in dragging {
                self.apply_resize(edge, delta, surface);
            }
        }

        let mut inner = ctx.nested(self.component.position());
        for button in self.chrome_mut() {
            button.update(&mut inner);
        }
        self.content.update(&mut inner);
    }

    fn check_events(&mut self, ctx: &mut FrameContext<'_>) -> bool {
        let inside = ctx.is_inside(&self.component);
        let report = self.clickable.check(ctx, inside);
        let id = self.component.id();

        if report.pressed {
            self.triggers.fire(id, WidgetEvent::Pressed, None);
        }
        if report.down {
            self.triggers.fire(id, WidgetEvent::Down, None);
        }
        if report.released {
            self.triggers.fire(id, WidgetEvent::Released, None);
        }
        if report.dragging {
            self.triggers.fire(id, WidgetEvent::Dragging, None);
        }

        {
            let mut inner = ctx.nested(self.component.position());
            let over_close = inner.is_inside(self.close.component());
            if self.close.clickable().is_released_over(&inner, over_close) {
                log::debug!("Close requested for window {}", self.component);
                inner.request_removal(id);
            }
            let over_maximize = inner.is_inside(self.maximize.component());
            if self.maximize.clickable().is_released_over(&inner, over_maximize) {
                let surface = inner.surface_size();
                self.toggle_maximize(surface);
            }
        }

        let mut inner = ctx.nested(self.component.position());
        let chrome_consumed = self
            .chrome_mut()
            .into_iter()
            .rev()
            .any(|button| button.component().is_enabled() && button.check_events(&mut inner));
        let consumed = chrome_consumed || self.content.check_events(&mut inner);

        consumed || self.clickable.is_active()
    }

    fn draw(&self, handles: &mut dyn DrawHandles, parent: &Mat4) {
        let local = self.component.local_transform(parent);
        if let Some(quad) = self.quad {
            let background = with_alpha(&self.component.palette().tertiary, self.chrome.background_alpha);
            quad.draw(handles, &(local * scale_2d(&self.component.size())), &background);
        }
        for button in self.chrome() {
            if button.component().is_visible() {
                button.draw(handles, &local);
            }
        }
        self.content.draw(handles, &local);
    }

    fn parts(&self) -> Vec<&(dyn Widget + 'static)> {
        self.chrome().into_iter().map(|button| button as &(dyn Widget + 'static)).collect()
    }

    fn parts_mut(&mut self) -> Vec<&mut (dyn Widget + 'static)> {
        self.chrome_mut()
            .into_iter()
            .map(|button| button as &mut (dyn Widget + 'static))
            .collect()
    }

    fn children(&self) -> Option<&Group> {
        Some(&self.content)
    }

    fn children_mut(&mut self) -> Option<&mut Group> {
        Some(&mut self.content)
    }

    fn triggers_mut(&mut self) -> Option<&mut Triggers> {
        Some(&mut self.triggers)
    }

    fn on_remove(&mut self) {
        log::info!("Window '{}' closed", self.title());
        self.triggers.fire(self.component.id(), WidgetEvent::Closed, None);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("component", &self.component)
            .field("title", &self.title())
            .field("resizable", &self.resizable)
            .field("maximized", &self.maximized)
            .field("min_size", &self.min_size)
            .field("content", &self.content.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn detached(position: Vec2, size: Vec2) -> Window {
        let mut window = Window::new(position, size, "test");
        window.validate();
        window
    }

    #[test]
    fn test_chrome_layout() {
        let window = detached(Vec2::zeros(), Vec2::new(200.0, 100.0));
        let close = window.close_button().component();
        assert_eq!(close.position(), Vec2::new(180.0, 80.0));
        assert_eq!(close.size(), Vec2::new(20.0, 20.0));
        assert_eq!(window.maximize_button().component().position(), Vec2::new(160.0, 80.0));
        assert_eq!(window.bar().component().size(), Vec2::new(200.0, 20.0));

        let right = window.grab_zone(ResizeEdge::Right).component();
        assert_eq!(right.position(), Vec2::new(190.0, 0.0));
        assert_eq!(right.size(), Vec2::new(10.0, 100.0));
        let corner = window.grab_zone(ResizeEdge::BottomRight).component();
        assert_eq!(corner.size(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_edge_math() {
        let surface = Vec2::new(800.0, 600.0);
        let mut window = detached(Vec2::new(100.0, 100.0), Vec2::new(200.0, 200.0));

        assert!(window.apply_resize(ResizeEdge::Left, Vec2::new(10.0, 0.0), surface));
        assert_eq!(window.component().position(), Vec2::new(110.0, 100.0));
        assert_eq!(window.component().size(), Vec2::new(190.0, 200.0));

        assert!(window.apply_resize(ResizeEdge::Bottom, Vec2::new(0.0, -20.0), surface));
        assert_eq!(window.component().position(), Vec2::new(110.0, 80.0));
        assert_eq!(window.component().size(), Vec2::new(190.0, 220.0));

        assert!(window.apply_resize(ResizeEdge::BottomLeft, Vec2::new(-10.0, 10.0), surface));
        assert_eq!(window.component().position(), Vec2::new(100.0, 90.0));
        assert_eq!(window.component().size(), Vec2::new(200.0, 210.0));
    }

    #[test]
    fn test_validate_confines_to_surface() {
        let mut window = Window::new(Vec2::new(700.0, -30.0), Vec2::new(200.0, 100.0), "test");
        window.toggle_maximize(Vec2::new(800.0, 600.0));
        window.toggle_maximize(Vec2::new(800.0, 600.0));
        assert_eq!(window.component().position(), Vec2::new(600.0, 0.0));
        assert_relative_eq!(window.component().size().x, 200.0);
    }

    #[test]
    fn test_resize_axes() {
        assert_eq!(ResizeEdge::Left.axes(), ResizeAxes::X);
        assert_eq!(ResizeEdge::Bottom.axes(), ResizeAxes::Y);
        assert_eq!(ResizeEdge::BottomRight.axes(), ResizeAxes::all());

        let mut window = detached(Vec2::zeros(), Vec2::new(100.0, 100.0));
        window.set_resizable_x(false);
        assert_eq!(window.resizable(), ResizeAxes::Y);
        window.set_resizable(false);
        assert!(window.resizable().is_empty());
    }
}
