use std::cell::RefCell;
use std::rc::Rc;

use super::support::{Harness, Recorder};
use crate::foundation::math::Vec2;
use crate::render::MeshHandle;
use crate::ui::triggers::WidgetEvent;
use crate::ui::widgets::{Label, ResizeEdge, Window};
use crate::ui::{Widget, WidgetId};

fn surface() -> Vec2 {
    Vec2::new(800.0, 600.0)
}

fn add_window(harness: &mut Harness, position: Vec2, size: Vec2) -> WidgetId {
    harness.manager.add_component(Box::new(Window::new(position, size, "tools")))
}

fn window(harness: &Harness, id: WidgetId) -> &Window {
    harness.manager.find_as::<Window>(id).unwrap()
}

fn counter(harness: &mut Harness, id: WidgetId, event: WidgetEvent) -> Rc<RefCell<u32>> {
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    harness.manager.link(id, event, move |_| *sink.borrow_mut() += 1).unwrap();
    count
}

#[test]
fn test_resize_respects_content_minimum() {
    let mut harness = Harness::new();
    let id = add_window(&mut harness, Vec2::new(100.0, 100.0), Vec2::new(100.0, 50.0));
    harness
        .manager
        .add_child(id, Box::new(Recorder::new(Vec2::zeros(), Vec2::new(75.0, 25.0))))
        .unwrap();

    let window = harness.manager.find_as_mut::<Window>(id).unwrap();
    assert_eq!(window.min_size(), Vec2::new(100.0, 50.0));
    let revision = window.layout_revision();

    // 100x50 -> 80x50
    assert!(!window.apply_resize(ResizeEdge::Right, Vec2::new(-20.0, 0.0), surface()));
    assert_eq!(window.component().position(), Vec2::new(100.0, 100.0));
    assert_eq!(window.component().size(), Vec2::new(100.0, 50.0));
    assert_eq!(window.layout_revision(), revision);

    // 100x50 -> 120x60
    assert!(window.apply_resize(ResizeEdge::BottomRight, Vec2::new(20.0, -10.0), surface()));
    assert_eq!(window.component().position(), Vec2::new(100.0, 90.0));
    assert_eq!(window.component().size(), Vec2::new(120.0, 60.0));
    assert_eq!(window.layout_revision(), revision + 1);
}

#[test]
fn test_window_grows_to_fit_new_content() {
    let mut harness = Harness::new();
    let id = add_window(&mut harness, Vec2::new(10.0, 10.0), Vec2::new(50.0, 50.0));
    harness
        .manager
        .add_child(id, Box::new(Recorder::new(Vec2::new(10.0, 10.0), Vec2::new(100.0, 40.0))))
        .unwrap();
    assert_eq!(window(&harness, id).component().size(), Vec2::new(135.0, 75.0));
}

#[test]
fn test_validate_is_idempotent() {
    let mut harness = Harness::new();
    let id = add_window(&mut harness, Vec2::new(40.0, 40.0), Vec2::new(250.0, 180.0));
    harness
        .manager
        .add_child(id, Box::new(Recorder::new(Vec2::new(5.0, 5.0), Vec2::new(60.0, 30.0))))
        .unwrap();

    let snapshot = |window: &Window| {
        let mut layout = vec![(window.component().position(), window.component().size())];
        for edge in [
            ResizeEdge::Left,
            ResizeEdge::Right,
            ResizeEdge::Bottom,
            ResizeEdge::BottomLeft,
            ResizeEdge::BottomRight,
        ] {
            let zone = window.grab_zone(edge).component();
            layout.push((zone.position(), zone.size()));
        }
        for button in [window.bar(), window.close_button(), window.maximize_button()] {
            layout.push((button.component().position(), button.component().size()));
        }
        layout
    };

    let window = harness.manager.find_as_mut::<Window>(id).unwrap();
    window.validate();
    let first = snapshot(&*window);
    window.validate();
    assert_eq!(snapshot(&*window), first);
}

#[test]
fn test_maximize_round_trip() {
    let mut harness = Harness::new();
    let id = add_window(&mut harness, Vec2::new(50.0, 50.0), Vec2::new(300.0, 300.0));
    let window = harness.manager.find_as_mut::<Window>(id).unwrap();

    window.toggle_maximize(surface());
    assert!(window.is_maximized());
    assert_eq!(window.component().position(), Vec2::zeros());
    assert_eq!(window.component().size(), surface());

    window.toggle_maximize(surface());
    assert!(!window.is_maximized());
    assert_eq!(window.component().position(), Vec2::new(50.0, 50.0));
    assert_eq!(window.component().size(), Vec2::new(300.0, 300.0));
}

#[test]
fn test_maximize_button_round_trip() {
    let mut harness = Harness::new();
    let id = add_window(&mut harness, Vec2::new(50.0, 50.0), Vec2::new(300.0, 300.0));
    let maximized = counter(&mut harness, id, WidgetEvent::Maximized);
    let restored = counter(&mut harness, id, WidgetEvent::Restored);

    // maximize button covers [310,330] x [330,350]
    harness.click_at(320.0, 340.0);
    assert!(window(&harness, id).is_maximized());
    assert_eq!(window(&harness, id).component().size(), surface());

    // now at [760,780] x [580,600]
    harness.click_at(770.0, 590.0);
    let restored_window = window(&harness, id);
    assert!(!restored_window.is_maximized());
    assert_eq!(restored_window.component().position(), Vec2::new(50.0, 50.0));
    assert_eq!(restored_window.component().size(), Vec2::new(300.0, 300.0));
    assert_eq!((*maximized.borrow(), *restored.borrow()), (1, 1));
}

#[test]
fn test_close_button_removes_window() {
    let mut harness = Harness::new();
    let id = add_window(&mut harness, Vec2::new(100.0, 100.0), Vec2::new(200.0, 150.0));
    let closed = counter(&mut harness, id, WidgetEvent::Closed);

    // close button covers [280,300] x [230,250]
    harness.move_to(290.0, 240.0);
    harness.press();
    assert!(harness.manager.find(id).is_some());
    harness.release();

    assert!(harness.manager.find(id).is_none());
    assert!(harness.manager.is_empty());
    assert_eq!(*closed.borrow(), 1);
    assert!(!harness.manager.remove_component(id));
}

#[test]
fn test_close_dragged_off_does_not_close() {
    let mut harness = Harness::new();
    let id = add_window(&mut harness, Vec2::new(100.0, 100.0), Vec2::new(200.0, 150.0));

    harness.move_to(290.0, 240.0);
    harness.press();
    harness.move_to(150.0, 150.0);
    harness.release();
    assert!(harness.manager.find(id).is_some());
}

#[test]
fn test_drag_bar_moves_window() {
    let mut harness = Harness::new();
    let id = add_window(&mut harness, Vec2::new(100.0, 100.0), Vec2::new(200.0, 150.0));
    let moved = counter(&mut harness, id, WidgetEvent::Moved);

    // bar covers [100,300] x [230,250]
    harness.move_to(150.0, 240.0);
    harness.press();
    harness.move_to(170.0, 245.0);
    assert_eq!(window(&harness, id).component().position(), Vec2::new(120.0, 105.0));
    assert_eq!(*moved.borrow(), 1);

    harness.release();
    harness.move_to(250.0, 300.0);
    assert_eq!(window(&harness, id).component().position(), Vec2::new(120.0, 105.0));
}

#[test]
fn test_drag_is_confined_to_surface() {
    let mut harness = Harness::new();
    let id = add_window(&mut harness, Vec2::new(10.0, 100.0), Vec2::new(200.0, 150.0));

    harness.move_to(50.0, 240.0);
    harness.press();
    harness.move_to(20.0, 240.0);
    assert_eq!(window(&harness, id).component().position(), Vec2::new(0.0, 100.0));
}

#[test]
fn test_grab_zone_drag_resizes() {
    let mut harness = Harness::new();
    let id = add_window(&mut harness, Vec2::new(100.0, 100.0), Vec2::new(200.0, 150.0));
    let resized = counter(&mut harness, id, WidgetEvent::Resized);

    // right zone covers [290,300] x [100,250]
    harness.move_to(295.0, 150.0);
    harness.press();
    harness.move_to(315.0, 150.0);
    assert_eq!(window(&harness, id).component().size(), Vec2::new(220.0, 150.0));
    assert_eq!(window(&harness, id).component().position(), Vec2::new(100.0, 100.0));
    assert_eq!(*resized.borrow(), 1);
}

#[test]
fn test_resize_disabled_on_axis() {
    let mut harness = Harness::new();
    let id = add_window(&mut harness, Vec2::new(100.0, 100.0), Vec2::new(200.0, 150.0));
    harness.manager.find_as_mut::<Window>(id).unwrap().set_resizable_x(false);

    harness.move_to(295.0, 150.0);
    harness.press();
    harness.move_to(315.0, 150.0);
    assert_eq!(window(&harness, id).component().size(), Vec2::new(200.0, 150.0));
}

#[test]
fn test_maximized_window_ignores_drag() {
    let mut harness = Harness::new();
    let id = add_window(&mut harness, Vec2::new(100.0, 100.0), Vec2::new(200.0, 150.0));
    harness.manager.find_as_mut::<Window>(id).unwrap().toggle_maximize(surface());

    // bar now covers [0,800] x [580,600]
    harness.move_to(300.0, 590.0);
    harness.press();
    harness.move_to(250.0, 560.0);
    assert_eq!(window(&harness, id).component().position(), Vec2::zeros());
    assert_eq!(window(&harness, id).component().size(), surface());
}

#[test]
fn test_content_receives_input_in_window_space() {
    let mut harness = Harness::new();
    let id = add_window(&mut harness, Vec2::new(100.0, 100.0), Vec2::new(200.0, 150.0));
    let log = super::support::new_log();
    let recorder = harness
        .manager
        .add_child(id, Box::new(Recorder::new(Vec2::new(20.0, 20.0), Vec2::new(30.0, 30.0)).with_log(&log)))
        .unwrap();

    harness.move_to(130.0, 130.0);
    assert_eq!(log.borrow().last(), Some(&(recorder, true)));
}

#[test]
fn test_resize_refused_while_maximized_or_locked() {
    let mut harness = Harness::new();
    let id = add_window(&mut harness, Vec2::new(100.0, 100.0), Vec2::new(300.0, 300.0));
    let window = harness.manager.find_as_mut::<Window>(id).unwrap();

    window.toggle_maximize(surface());
    assert!(!window.apply_resize(ResizeEdge::Right, Vec2::new(-100.0, 0.0), surface()));
    assert_eq!(window.component().size(), surface());

    window.toggle_maximize(surface());
    window.set_resizable(false);
    assert!(!window.apply_resize(ResizeEdge::Right, Vec2::new(-100.0, 0.0), surface()));
    assert_eq!(window.component().size(), Vec2::new(300.0, 300.0));

    // corners need both axes
    window.set_resizable_x(true);
    assert!(!window.apply_resize(ResizeEdge::BottomRight, Vec2::new(10.0, -10.0), surface()));
    assert!(window.apply_resize(ResizeEdge::Right, Vec2::new(-100.0, 0.0), surface()));
    assert_eq!(window.component().size(), Vec2::new(200.0, 300.0));
}

#[test]
fn test_chrome_parts_resolve_by_id() {
    let mut harness = Harness::new();
    let id = add_window(&mut harness, Vec2::new(10.0, 10.0), Vec2::new(200.0, 100.0));
    let (close, caption) = {
        let window = window(&harness, id);
        (window.close_button().component().id(), window.bar().label().component().id())
    };

    assert_eq!(harness.manager.find(close).map(|w| w.component().name()), Some("close"));
    assert_eq!(harness.manager.find_as::<Label>(caption).map(Label::text), Some("tools"));
    // close sits in the top-right bar cell: (200 - 20, 100 - 20) inside the window
    assert_eq!(harness.manager.absolute_position(close), Some(Vec2::new(190.0, 90.0)));
    assert!(harness.manager.is_inside(close, &Vec2::new(200.0, 100.0)));

    let closes = counter(&mut harness, close, WidgetEvent::Released);
    harness.click_at(200.0, 100.0);
    assert_eq!(*closes.borrow(), 1);
    assert!(harness.manager.find(id).is_none());
}

#[test]
fn test_content_paints_over_chrome() {
    let mut harness = Harness::new();
    let id = add_window(&mut harness, Vec2::new(100.0, 100.0), Vec2::new(200.0, 150.0));
    let content = harness
        .manager
        .add_child(id, Box::new(Recorder::new(Vec2::new(20.0, 20.0), Vec2::new(30.0, 30.0))))
        .unwrap();

    harness.backend.clear_calls();
    harness.step();
    let calls = harness.backend.calls();
    let content_draw = calls
        .iter()
        .position(|call| call.mesh == MeshHandle(content.0) && call.vertex_count == 0)
        .unwrap();
    let close_glyph = calls.iter().position(|call| call.glyph() == Some(b'x')).unwrap();
    assert!(close_glyph < content_draw);
    assert_eq!(content_draw, calls.len() - 1);
}
