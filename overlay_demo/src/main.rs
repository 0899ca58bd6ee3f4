//! Headless overlay demo
//!
//! Builds a small widget tree (a window holding a panel with a button and a
//! spinner), then replays a scripted pointer session against it and logs
//! what happened. Drawing goes to the recording backend.
//!
//! Usage: `overlay_demo [gui.toml|gui.ron]`

use std::cell::RefCell;
use std::rc::Rc;

use overlay_ui::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
enum DemoError {
    #[error("GUI error: {0}")]
    Gui(#[from] GuiError),

    #[error("Widget {0} disappeared before the script finished")]
    MissingWidget(WidgetId),
}

/// State shared with widget callbacks
#[derive(Debug, Default)]
struct DemoState {
    clicks: u32,
    spinner_value: i64,
    window_closed: bool,
}

/// One scripted frame
#[derive(Debug, Clone, Copy)]
enum Step {
    MoveTo(f32, f32),
    Press,
    Release,
    Idle,
}

struct OverlayDemo {
    manager: Manager,
    input: FrameInput,
    backend: RecordingBackend,
    state: Rc<RefCell<DemoState>>,
    window: WidgetId,
    spinner: WidgetId,
}

impl OverlayDemo {
    fn new(config_path: Option<&str>) -> Result<Self, DemoError> {
        let mut backend = RecordingBackend::new();
        let resources = GuiResources::load(&mut backend, Some(TextureHandle(1))).map_err(GuiError::from)?;
        let mut manager = match config_path {
            Some(path) => Manager::from_config_file(resources, path)?,
            None => Manager::new(resources, GuiConfig::default()),
        };
        let state = Rc::new(RefCell::new(DemoState::default()));

        let window = manager.add_component(Box::new(Window::new(
            Vec2::new(100.0, 100.0),
            Vec2::new(320.0, 200.0),
            "Demo",
        )));
        let panel = manager.add_child(
            window,
            Box::new(Container::new(Vec2::new(20.0, 20.0), Vec2::new(260.0, 120.0)).with_name("panel")),
        )?;
        let button = manager.add_child(
            panel,
            Box::new(Button::new(Vec2::new(10.0, 70.0), Vec2::new(100.0, 30.0)).with_text("click")),
        )?;
        let spinner = manager.add_child(
            panel,
            Box::new(Spinner::new(Vec2::new(10.0, 20.0), Vec2::new(120.0, 30.0), 0)),
        )?;

        let shared = Rc::clone(&state);
        manager.link(button, WidgetEvent::Released, move |_| shared.borrow_mut().clicks += 1)?;
        let shared = Rc::clone(&state);
        manager.link_named(spinner, "increased", move |event| {
            shared.borrow_mut().spinner_value = event.value.unwrap_or_default();
        })?;
        let shared = Rc::clone(&state);
        manager.link(window, WidgetEvent::Closed, move |event| {
            log::info!("Window {} closed", event.source);
            shared.borrow_mut().window_closed = true;
        })?;

        Ok(Self {
            manager,
            input: FrameInput::new(800.0, 600.0),
            backend,
            state,
            window,
            spinner,
        })
    }

    fn play(&mut self, steps: &[Step]) {
        for step in steps {
            match *step {
                Step::MoveTo(x, y) => self.input.update_mouse_position(x, y),
                Step::Press => self.input.update_mouse_button(MouseButton::Left, true),
                Step::Release => self.input.update_mouse_button(MouseButton::Left, false),
                Step::Idle => {}
            }
            self.backend.clear_calls();
            let consumed = self.manager.tick(&self.input, &mut self.backend);
            log::trace!("Frame {}: {:?} consumed={} draws={}", self.manager.frame(), step, consumed, self.backend.calls().len());
            self.input.begin_frame();
        }
    }

    fn run(&mut self) -> Result<(), DemoError> {
        let window_origin = self
            .manager
            .absolute_position(self.window)
            .ok_or(DemoError::MissingWidget(self.window))?;
        let spinner_origin = self
            .manager
            .absolute_position(self.spinner)
            .ok_or(DemoError::MissingWidget(self.spinner))?;

        // Click the button and the spinner's increment twice
        let button = window_origin + Vec2::new(80.0, 105.0);
        let increment = spinner_origin + Vec2::new(110.0, 15.0);
        let mut script = Vec::new();
        for target in [button, increment, increment] {
            script.extend([Step::MoveTo(target.x, target.y), Step::Press, Step::Release]);
        }
        self.play(&script);
        log::info!("Drawn text: {}", self.backend.drawn_text());

        // Drag the window by its title bar
        let bar = window_origin + Vec2::new(100.0, 190.0);
        self.play(&[
            Step::MoveTo(bar.x, bar.y),
            Step::Press,
            Step::MoveTo(bar.x + 50.0, bar.y - 40.0),
            Step::Release,
            Step::Idle,
        ]);
        let moved_to = self
            .manager
            .absolute_position(self.window)
            .ok_or(DemoError::MissingWidget(self.window))?;
        log::info!("Window moved to ({}, {})", moved_to.x, moved_to.y);

        // Close it
        let close = moved_to + Vec2::new(310.0, 190.0);
        self.play(&[Step::MoveTo(close.x, close.y), Step::Press, Step::Release]);

        let state = self.state.borrow();
        log::info!(
            "Done after {} frames: clicks={} spinner={} closed={} widgets left={}",
            self.manager.frame(),
            state.clicks,
            state.spinner_value,
            state.window_closed,
            self.manager.len()
        );
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    overlay_ui::foundation::logging::init_with_default("info");
    log::info!("Starting overlay demo");

    let config_path = std::env::args().nth(1);
    let mut demo = OverlayDemo::new(config_path.as_deref())?;
    demo.run()?;
    Ok(())
}
