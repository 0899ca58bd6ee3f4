//! Ordered child collection
//!
//! List order is paint order (first drawn first); event dispatch walks the
//! list backwards so the frontmost widget gets the first chance to consume
//! the interaction.

use super::component::Widget;
use super::context::FrameContext;
use super::WidgetId;
use crate::foundation::math::{Mat4, Vec2};
use crate::render::DrawHandles;

/// Ordered, owning list of widgets
#[derive(Debug, Default)]
pub struct Group {
    children: Vec<Box<dyn Widget>>,
}

impl Group {
    /// Create an empty group
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the group has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Direct children in paint order
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Widget + 'static)> {
        self.children.iter().map(|child| &**child)
    }

    /// Mutable direct children in paint order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut (dyn Widget + 'static)> {
        self.children.iter_mut().map(|child| &mut **child)
    }

    /// Direct child at `index`
    pub fn get(&self, index: usize) -> Option<&(dyn Widget + 'static)> {
        self.children.get(index).map(|child| &**child)
    }

    /// Append an already attached widget (frontmost)
    pub fn add(&mut self, widget: Box<dyn Widget>) {
        self.children.push(widget);
    }

    /// Detach a widget anywhere below this group
    ///
    /// The removed widget and its descendants get their `on_remove` hook.
    pub fn remove(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        if let Some(index) = self.position_of_id(id) {
            let mut widget = self.children.remove(index);
            notify_removed(&mut *widget);
            return Some(widget);
        }
        self.children
            .iter_mut()
            .filter_map(|child| child.children_mut())
            .find_map(|group| group.remove(id))
    }

    /// Recursive lookup by id, through child containers and widget parts
    pub fn find(&self, id: WidgetId) -> Option<&(dyn Widget + 'static)> {
        self.children.iter().find_map(|child| find_in(&**child, id))
    }

    /// Recursive mutable lookup by id
    pub fn find_mut(&mut self, id: WidgetId) -> Option<&mut (dyn Widget + 'static)> {
        self.children.iter_mut().find_map(|child| find_in_mut(&mut **child, id))
    }

    /// Recursive lookup by name
    pub fn find_by_name(&self, name: &str) -> Option<&(dyn Widget + 'static)> {
        for child in &self.children {
            if child.component().name() == name {
                return Some(&**child);
            }
            if let Some(found) = child.children().and_then(|group| group.find_by_name(name)) {
                return Some(found);
            }
        }
        None
    }

    /// Index of a direct child, compared by reference
    pub fn position_of(&self, widget: &dyn Widget) -> Option<usize> {
        let target = (widget as *const dyn Widget).cast::<()>();
        self.children
            .iter()
            .position(|child| std::ptr::eq((&**child as *const dyn Widget).cast::<()>(), target))
    }

    /// Index of a direct child, compared by id
    pub fn position_of_id(&self, id: WidgetId) -> Option<usize> {
        self.children.iter().position(|child| child.id() == id)
    }

    /// Whether `id` is anywhere below this group
    pub fn contains_id(&self, id: WidgetId) -> bool {
        self.find(id).is_some()
    }

    /// Whether `name` is taken anywhere below this group
    pub fn contains_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// `base` if free, otherwise `base1`, `base2`, ... whichever is free first
    pub fn unique_name(&self, base: &str) -> String {
        if !self.contains_name(base) {
            return base.to_string();
        }
        (1u64..)
            .map(|suffix| format!("{base}{suffix}"))
            .find(|candidate| !self.contains_name(candidate))
            .unwrap_or_else(|| base.to_string())
    }

    /// Bounding box of every direct child's far corner, plus padding
    pub fn minimum_bounds(&self, padding: f32) -> Vec2 {
        let extent = self.children.iter().fold(Vec2::zeros(), |extent, child| {
            let component = child.component();
            extent.sup(&(component.position() + component.size()))
        });
        extent.add_scalar(padding)
    }

    /// Positions from the direct child down to the widget `id`, inclusive
    ///
    /// The sum of all entries is the widget's absolute position; the sum of
    /// all but the last is the origin its hit test subtracts.
    pub fn ancestry(&self, id: WidgetId) -> Option<Vec<Vec2>> {
        self.children.iter().find_map(|child| ancestry_in(&**child, id))
    }

    /// Swap a widget with the one drawn after it
    pub fn bring_forward(&mut self, id: WidgetId) -> bool {
        self.reorder(id, Reorder::Forward)
    }

    /// Swap a widget with the one drawn before it
    pub fn bring_backward(&mut self, id: WidgetId) -> bool {
        self.reorder(id, Reorder::Backward)
    }

    /// Move a widget to the end of its group (drawn last, dispatched first)
    pub fn bring_to_front(&mut self, id: WidgetId) -> bool {
        self.reorder(id, Reorder::Front)
    }

    fn reorder(&mut self, id: WidgetId, how: Reorder) -> bool {
        let Some(index) = self.position_of_id(id) else {
            return self
                .children
                .iter_mut()
                .filter_map(|child| child.children_mut())
                .any(|group| group.reorder(id, how));
        };

        match how {
            Reorder::Forward if index + 1 < self.children.len() => self.children.swap(index, index + 1),
            Reorder::Backward if index > 0 => self.children.swap(index, index - 1),
            Reorder::Front => {
                let widget = self.children.remove(index);
                self.children.push(widget);
            }
            _ => {}
        }
        true
    }

    /// Re-run `validate` on every direct child
    pub fn validate_all(&mut self) {
        for child in &mut self.children {
            child.validate();
        }
    }

    /// Dispatch input from the frontmost enabled child backwards
    ///
    /// Stops at the first child that consumes the interaction.
    pub fn check_events(&mut self, ctx: &mut FrameContext<'_>) -> bool {
        for child in self.children.iter_mut().rev() {
            if child.component().is_enabled() && child.check_events(ctx) {
                return true;
            }
        }
        false
    }

    /// Update every child in paint order
    pub fn update(&mut self, ctx: &mut FrameContext<'_>) {
        for child in &mut self.children {
            child.update(ctx);
        }
    }

    /// Draw visible children in paint order
    pub fn draw(&self, handles: &mut dyn DrawHandles, parent: &Mat4) {
        for child in self.children.iter().filter(|child| child.component().is_visible()) {
            child.draw(handles, parent);
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Reorder {
    Forward,
    Backward,
    Front,
}

fn find_in<'a>(widget: &'a (dyn Widget + 'static), id: WidgetId) -> Option<&'a (dyn Widget + 'static)> {
    if widget.id() == id {
        return Some(widget);
    }
    widget
        .parts()
        .into_iter()
        .find_map(|part| find_in(part, id))
        .or_else(|| widget.children()?.find(id))
}

fn find_in_mut<'a>(widget: &'a mut (dyn Widget + 'static), id: WidgetId) -> Option<&'a mut (dyn Widget + 'static)> {
    if widget.id() == id {
        return Some(widget);
    }
    // locate first; a mutable walk over the parts cannot fall through to the children
    if widget.parts().into_iter().any(|part| find_in(part, id).is_some()) {
        return widget.parts_mut().into_iter().find_map(|part| find_in_mut(part, id));
    }
    widget.children_mut()?.find_mut(id)
}

fn ancestry_in(widget: &(dyn Widget + 'static), id: WidgetId) -> Option<Vec<Vec2>> {
    let position = widget.component().position();
    if widget.id() == id {
        return Some(vec![position]);
    }
    let mut chain = widget
        .parts()
        .into_iter()
        .find_map(|part| ancestry_in(part, id))
        .or_else(|| widget.children()?.ancestry(id))?;
    chain.insert(0, position);
    Some(chain)
}

fn notify_removed(widget: &mut dyn Widget) {
    if let Some(group) = widget.children_mut() {
        for child in group.iter_mut() {
            notify_removed(child);
        }
    }
    widget.on_remove();
}
