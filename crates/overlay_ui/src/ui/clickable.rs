//! Click state machine shared by buttons and windows
//!
//! Idle -> Pressed -> Down -> (Dragging) -> Released -> Idle, evaluated in
//! that fixed order once per frame by [`Clickable::check`]. The query
//! methods are live: they combine this frame's input with the stored `down`
//! flag, so a parent widget can ask about a child before or after the child
//! ran its own check.

use super::context::FrameContext;
use crate::config::ClickableConfig;

/// Transitions observed during one [`Clickable::check`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickReport {
    /// Button went down over the widget
    pub pressed: bool,
    /// Button is held over the widget
    pub down: bool,
    /// Held past the auto-repeat threshold
    pub held: bool,
    /// Button went up after a press on the widget
    pub released: bool,
    /// Released while still over the widget
    pub released_over: bool,
    /// Pointer moved while down
    pub dragging: bool,
    /// Second press within the double-click window
    pub double_clicked: bool,
}

/// Press/hold/release/drag tracking
#[derive(Debug, Clone)]
pub struct Clickable {
    down: bool,
    released: bool,
    held_frames: u32,
    last_press_frame: Option<u64>,
    held_threshold: u32,
    double_click_frames: u32,
}

impl Clickable {
    /// Create with the given thresholds
    pub fn new(config: &ClickableConfig) -> Self {
        Self {
            down: false,
            released: false,
            held_frames: 0,
            last_press_frame: None,
            held_threshold: config.held_threshold_frames,
            double_click_frames: config.double_click_frames,
        }
    }

    /// Replace the thresholds (done on attach)
    pub fn configure(&mut self, config: &ClickableConfig) {
        self.held_threshold = config.held_threshold_frames;
        self.double_click_frames = config.double_click_frames;
    }

    /// Button went down this frame over the widget
    pub fn is_pressed(&self, ctx: &FrameContext<'_>, inside: bool) -> bool {
        ctx.is_pressed() && inside
    }

    /// Button held, pressed on this widget, pointer still over it
    pub fn is_down(&self, ctx: &FrameContext<'_>, inside: bool) -> bool {
        ctx.is_down() && self.down && inside
    }

    /// Held long enough to auto-repeat
    pub fn is_held(&self) -> bool {
        self.down && self.held_frames > self.held_threshold
    }

    /// Button went up after a press on this widget
    pub fn is_released(&self, ctx: &FrameContext<'_>) -> bool {
        ctx.is_released() && self.down
    }

    /// Pointer moved while this widget is down
    pub fn is_dragging(&self, ctx: &FrameContext<'_>) -> bool {
        self.down && ctx.delta().norm() > 0.0
    }

    /// Released while the pointer is still over the widget
    pub fn is_released_over(&self, ctx: &FrameContext<'_>, inside: bool) -> bool {
        self.is_released(ctx) && inside
    }

    /// Held past the threshold with the pointer over the widget
    pub fn is_held_over(&self, inside: bool) -> bool {
        self.is_held() && inside
    }

    /// Pointer over the widget with no button involved
    pub fn is_hovering(&self, ctx: &FrameContext<'_>, inside: bool) -> bool {
        inside && !ctx.is_down()
    }

    /// Whether a press on this widget has not been released yet
    pub fn is_active(&self) -> bool {
        self.down
    }

    /// Whether the last check observed a release
    pub fn was_released(&self) -> bool {
        self.released
    }

    /// Frames the button has been held over the widget
    pub fn held_frames(&self) -> u32 {
        self.held_frames
    }

    /// Enter the down state; returns true when this press completes a double click
    pub fn on_pressed(&mut self, frame: u64) -> bool {
        self.down = true;
        self.released = false;
        self.held_frames = 0;

        match self.last_press_frame {
            Some(previous) if frame.saturating_sub(previous) <= u64::from(self.double_click_frames) => {
                self.last_press_frame = None;
                true
            }
            _ => {
                self.last_press_frame = Some(frame);
                false
            }
        }
    }

    /// Count one more held frame
    pub fn on_down(&mut self) {
        self.held_frames = self.held_frames.saturating_add(1);
    }

    /// Leave the down state
    pub fn on_released(&mut self) {
        self.held_frames = 0;
        self.down = false;
        self.released = true;
    }

    /// Evaluate all transitions for this frame
    pub fn check(&mut self, ctx: &FrameContext<'_>, inside: bool) -> ClickReport {
        let mut report = ClickReport::default();
        self.released = false;

        // The release may have happened while a sibling had dispatch priority
        if self.down && !ctx.is_down() && !ctx.is_released() {
            self.held_frames = 0;
            self.down = false;
        }

        if self.is_pressed(ctx, inside) {
            report.pressed = true;
            report.double_clicked = self.on_pressed(ctx.frame());
        }
        if self.is_down(ctx, inside) {
            report.down = true;
            self.on_down();
        }
        report.held = self.is_held();
        if self.is_released(ctx) {
            report.released = true;
            report.released_over = inside;
            self.on_released();
        }
        report.dragging = self.is_dragging(ctx);
        report
    }
}

impl Default for Clickable {
    fn default() -> Self {
        Self::new(&ClickableConfig::default())
    }
}
