use std::cell::RefCell;
use std::rc::Rc;

use super::support::Harness;
use crate::config::GuiConfig;
use crate::error::GuiError;
use crate::foundation::math::Vec2;
use crate::ui::component::Widget;
use crate::ui::triggers::WidgetEvent;
use crate::ui::widgets::{Button, Spinner, Window};
use crate::ui::WidgetId;

// decrement covers [100,120] x [100,120], increment [200,220] x [100,120]
const DECREMENT: (f32, f32) = (110.0, 110.0);
const INCREMENT: (f32, f32) = (210.0, 110.0);

fn add_spinner(harness: &mut Harness) -> WidgetId {
    harness
        .manager
        .add_component(Box::new(Spinner::new(Vec2::new(100.0, 100.0), Vec2::new(120.0, 20.0), 0)))
}

fn spinner(harness: &Harness, id: WidgetId) -> &Spinner {
    harness.manager.find_as::<Spinner>(id).unwrap()
}

#[test]
fn test_clicks_change_value_and_rerender() {
    let mut harness = Harness::new();
    let id = add_spinner(&mut harness);

    let mut revisions = Vec::new();
    for (x, y) in [INCREMENT, INCREMENT, INCREMENT, DECREMENT] {
        harness.click_at(x, y);
        revisions.push(spinner(&harness, id).value_label().revision());
    }
    assert_eq!(spinner(&harness, id).value(), 2);
    assert_eq!(spinner(&harness, id).text(), "2");
    assert_eq!(revisions, vec![1, 2, 3, 4]);

    harness.backend.clear_calls();
    harness.step();
    assert_eq!(harness.backend.drawn_text(), "-2+");
}

#[test]
fn test_callbacks_receive_new_value() {
    let mut harness = Harness::new();
    let id = add_spinner(&mut harness);
    let values = Rc::new(RefCell::new(Vec::new()));
    for event in [WidgetEvent::Increased, WidgetEvent::Decreased] {
        let sink = Rc::clone(&values);
        harness
            .manager
            .link(id, event, move |e| sink.borrow_mut().push((e.source, e.event, e.value)))
            .unwrap();
    }

    harness.click_at(INCREMENT.0, INCREMENT.1);
    harness.click_at(DECREMENT.0, DECREMENT.1);
    harness.click_at(DECREMENT.0, DECREMENT.1);
    assert_eq!(
        *values.borrow(),
        vec![
            (id, WidgetEvent::Increased, Some(1)),
            (id, WidgetEvent::Decreased, Some(0)),
            (id, WidgetEvent::Decreased, Some(-1)),
        ]
    );
}

#[test]
fn test_press_released_off_button_does_nothing() {
    let mut harness = Harness::new();
    let id = add_spinner(&mut harness);

    harness.move_to(INCREMENT.0, INCREMENT.1);
    harness.press();
    harness.move_to(160.0, 300.0);
    harness.release();
    assert_eq!(spinner(&harness, id).value(), 0);
}

#[test]
fn test_hold_auto_repeats() {
    let mut config = GuiConfig::default();
    config.clickable.held_threshold_frames = 3;
    let mut harness = Harness::with_config(config);
    let id = add_spinner(&mut harness);

    harness.move_to(INCREMENT.0, INCREMENT.1);
    harness.press();
    for _ in 0..5 {
        harness.step();
    }
    // held count passes 3 on the fourth held frame, then repeats every frame
    assert_eq!(spinner(&harness, id).value(), 2);
}

#[test]
fn test_spinner_inside_window() {
    let mut harness = Harness::new();
    let window = harness
        .manager
        .add_component(Box::new(Window::new(Vec2::new(50.0, 50.0), Vec2::new(300.0, 200.0), "values")));
    let id = harness
        .manager
        .add_child(window, Box::new(Spinner::new(Vec2::new(50.0, 50.0), Vec2::new(120.0, 20.0), 5)))
        .unwrap();

    // increment covers [200,220] x [100,120] once both offsets are applied
    harness.click_at(INCREMENT.0, INCREMENT.1);
    assert_eq!(spinner(&harness, id).value(), 6);
}

#[test]
fn test_spinner_parts_are_addressable_but_not_removable() {
    let mut harness = Harness::new();
    let id = add_spinner(&mut harness);
    let (increment, value) = {
        let spinner = spinner(&harness, id);
        (spinner.increment_button().component().id(), spinner.value_label().component().id())
    };
    assert_ne!(increment, WidgetId::DETACHED);

    assert!(harness.manager.find_as::<Button>(increment).is_some());
    assert_eq!(harness.manager.find(value).map(|w| w.component().name()), Some("value"));
    assert_eq!(harness.manager.absolute_position(increment), Some(Vec2::new(200.0, 100.0)));
    assert!(harness.manager.is_inside(increment, &Vec2::new(INCREMENT.0, INCREMENT.1)));

    let releases = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&releases);
    harness
        .manager
        .link(increment, WidgetEvent::Released, move |_| *sink.borrow_mut() += 1)
        .unwrap();
    harness.click_at(INCREMENT.0, INCREMENT.1);
    assert_eq!(*releases.borrow(), 1);
    assert_eq!(spinner(&harness, id).value(), 1);

    assert!(matches!(
        harness.manager.take_component(increment),
        Err(GuiError::FixedPart(part)) if part == increment
    ));
    assert!(!harness.manager.remove_component(increment));
    assert_eq!(spinner(&harness, id).increment_button().component().id(), increment);
}
