//! Test widgets and a scripted frame driver

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::GuiConfig;
use crate::foundation::math::{Mat4, Vec2};
use crate::input::{FrameInput, MouseButton};
use crate::render::{DrawHandles, MeshHandle, RecordingBackend, TextureHandle};
use crate::ui::component::{Component, Widget};
use crate::ui::context::FrameContext;
use crate::ui::resources::GuiResources;
use crate::ui::{Manager, ManagerId, WidgetId};

/// Shared record of `(widget, pointer inside)` per dispatched check
pub type DispatchLog = Rc<RefCell<Vec<(WidgetId, bool)>>>;

/// Widget that records dispatch and optionally consumes it
pub struct Recorder {
    component: Component,
    log: Option<DispatchLog>,
    consume: bool,
    validations: u32,
}

impl Recorder {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            component: Component::new(position, size),
            log: None,
            consume: false,
            validations: 0,
        }
    }

    /// Recorder that already carries an id, for driving a bare `Group`
    pub fn attached(id: WidgetId, position: Vec2, size: Vec2) -> Self {
        let mut recorder = Self::new(position, size);
        recorder.component.attach(id, ManagerId(0), None);
        recorder
    }

    pub fn with_log(mut self, log: &DispatchLog) -> Self {
        self.log = Some(Rc::clone(log));
        self
    }

    pub fn consuming(mut self) -> Self {
        self.consume = true;
        self
    }

    pub fn validations(&self) -> u32 {
        self.validations
    }
}

impl Widget for Recorder {
    fn component(&self) -> &Component {
        &self.component
    }

    fn component_mut(&mut self) -> &mut Component {
        &mut self.component
    }

    fn validate(&mut self) {
        self.validations += 1;
    }

    fn check_events(&mut self, ctx: &mut FrameContext<'_>) -> bool {
        if let Some(log) = &self.log {
            log.borrow_mut().push((self.component.id(), ctx.is_inside(&self.component)));
        }
        self.consume
    }

    fn draw(&self, handles: &mut dyn DrawHandles, _parent: &Mat4) {
        handles.draw_mesh(MeshHandle(self.component.id().0), 0, 0);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Manager plus scripted input and a recording backend
pub struct Harness {
    pub manager: Manager,
    pub input: FrameInput,
    pub backend: RecordingBackend,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(GuiConfig::default())
    }

    pub fn with_config(config: GuiConfig) -> Self {
        let mut backend = RecordingBackend::new();
        let resources = GuiResources::load(&mut backend, Some(TextureHandle(1))).unwrap();
        Self {
            manager: Manager::new(resources, config),
            input: FrameInput::new(800.0, 600.0),
            backend,
        }
    }

    /// Run one tick with the events fed since the last step
    pub fn step(&mut self) -> bool {
        let consumed = self.manager.tick(&self.input, &mut self.backend);
        self.input.begin_frame();
        consumed
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        self.input.update_mouse_position(x, y);
        self.step()
    }

    pub fn press(&mut self) -> bool {
        self.input.update_mouse_button(MouseButton::Left, true);
        self.step()
    }

    pub fn release(&mut self) -> bool {
        self.input.update_mouse_button(MouseButton::Left, false);
        self.step()
    }

    /// Move, press and release on three consecutive frames
    pub fn click_at(&mut self, x: f32, y: f32) {
        self.move_to(x, y);
        self.press();
        self.release();
    }
}

pub fn new_log() -> DispatchLog {
    Rc::new(RefCell::new(Vec::new()))
}
