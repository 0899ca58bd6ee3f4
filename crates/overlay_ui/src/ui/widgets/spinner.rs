//! Spinner widget - integer value with decrement/increment buttons

use std::any::Any;
use std::fmt;

use super::button::Button;
use super::label::Label;
use crate::foundation::math::{Mat4, Vec2};
use crate::render::DrawHandles;
use crate::ui::component::{Component, Widget};
use crate::ui::context::{AttachContext, FrameContext};
use crate::ui::triggers::{Triggers, WidgetEvent};

/// Numeric stepper
///
/// Paint order is fixed: decrement on the left sixth, the value label
/// centered, increment on the right sixth. The value only changes through
/// [`Spinner::increment`], [`Spinner::decrement`] and [`Spinner::reset`];
/// holding either button auto-repeats.
pub struct Spinner {
    component: Component,
    triggers: Triggers,
    decrement_button: Button,
    value_label: Label,
    increment_button: Button,
    value: i64,
    step: i64,
}

impl Spinner {
    /// Create a spinner showing `initial`
    pub fn new(position: Vec2, size: Vec2, initial: i64) -> Self {
        Self {
            component: Component::new(position, size),
            triggers: Triggers::new(),
            decrement_button: Button::new(Vec2::zeros(), Vec2::zeros()).with_name("decrement").with_text("-"),
            value_label: Label::new(Vec2::zeros(), initial.to_string()).with_name("value"),
            increment_button: Button::new(Vec2::zeros(), Vec2::zeros()).with_name("increment").with_text("+"),
            value: initial,
            step: 1,
        }
    }

    /// Change by `step` per click instead of 1
    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    /// Request a name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.component = self.component.with_name(name);
        self
    }

    /// Current value
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Amount added or removed per click
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Value as currently displayed
    pub fn text(&self) -> &str {
        self.value_label.text()
    }

    /// Value label
    pub fn value_label(&self) -> &Label {
        &self.value_label
    }

    /// Decrement button
    pub fn decrement_button(&self) -> &Button {
        &self.decrement_button
    }

    /// Increment button
    pub fn increment_button(&self) -> &Button {
        &self.increment_button
    }

    /// Add one step
    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(self.step);
        self.changed(WidgetEvent::Increased);
    }

    /// Remove one step
    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(self.step);
        self.changed(WidgetEvent::Decreased);
    }

    /// Go back to zero
    pub fn reset(&mut self) {
        self.value = 0;
        self.changed(WidgetEvent::Reset);
    }

    fn changed(&mut self, event: WidgetEvent) {
        self.value_label.set_text(self.value.to_string());
        self.validate();
        log::debug!("Spinner {} {} to {}", self.component.id(), event, self.value);
        self.triggers.fire(self.component.id(), event, Some(self.value));
    }
}

impl Widget for Spinner {
    fn component(&self) -> &Component {
        &self.component
    }

    fn component_mut(&mut self) -> &mut Component {
        &mut self.component
    }

    fn init(&mut self, ctx: &mut AttachContext<'_>) {
        let parent = &self.component;
        ctx.attach(&mut self.decrement_button, Some(parent), None);
        ctx.attach(&mut self.value_label, Some(parent), None);
        ctx.attach(&mut self.increment_button, Some(parent), None);
    }

    fn validate(&mut self) {
        let size = self.component.size();
        let side = Vec2::new(size.x / 6.0, size.y);

        let decrement = self.decrement_button.component_mut();
        decrement.set_position(Vec2::zeros());
        decrement.set_size(side);
        self.decrement_button.validate();

        let increment = self.increment_button.component_mut();
        increment.set_position(Vec2::new(size.x * 5.0 / 6.0, 0.0));
        increment.set_size(side);
        self.increment_button.validate();

        self.value_label.validate();
        self.value_label.center_on(size / 2.0);
    }

    fn update(&mut self, ctx: &mut FrameContext<'_>) {
        let mut inner = ctx.nested(self.component.position());
        self.decrement_button.update(&mut inner);
        self.increment_button.update(&mut inner);
    }

    fn check_events(&mut self, ctx: &mut FrameContext<'_>) -> bool {
        let mut inner = ctx.nested(self.component.position());

        let over = inner.is_inside(self.decrement_button.component());
        let clickable = self.decrement_button.clickable();
        if clickable.is_released_over(&inner, over) || clickable.is_held_over(over) {
            self.decrement();
        }
        let over = inner.is_inside(self.increment_button.component());
        let clickable = self.increment_button.clickable();
        if clickable.is_released_over(&inner, over) || clickable.is_held_over(over) {
            self.increment();
        }

        self.increment_button.check_events(&mut inner) || self.decrement_button.check_events(&mut inner)
    }

    fn draw(&self, handles: &mut dyn DrawHandles, parent: &Mat4) {
        let local = self.component.local_transform(parent);
        self.decrement_button.draw(handles, &local);
        self.value_label.draw(handles, &local);
        self.increment_button.draw(handles, &local);
    }

    fn parts(&self) -> Vec<&(dyn Widget + 'static)> {
        vec![
            &self.decrement_button as &(dyn Widget + 'static),
            &self.value_label,
            &self.increment_button,
        ]
    }

    fn parts_mut(&mut self) -> Vec<&mut (dyn Widget + 'static)> {
        vec![
            &mut self.decrement_button as &mut (dyn Widget + 'static),
            &mut self.value_label,
            &mut self.increment_button,
        ]
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

impl fmt::Debug for Spinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spinner")
            .field("component", &self.component)
            .field("value", &self.value)
            .field("step", &self.step)
            .finish()
    }
}
