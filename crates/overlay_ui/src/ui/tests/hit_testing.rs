use super::support::{new_log, Harness, Recorder};
use crate::foundation::math::Vec2;
use crate::ui::widgets::Container;

/// Outer container at (100,100), inner at (50,50), recorder at (10,20) 30x40:
/// the recorder covers [160,190] x [170,210] in surface space.
fn nested_recorder(harness: &mut Harness, recorder: Recorder) -> crate::ui::WidgetId {
    let outer = harness
        .manager
        .add_component(Box::new(Container::new(Vec2::new(100.0, 100.0), Vec2::new(300.0, 300.0))));
    let inner = harness
        .manager
        .add_child(outer, Box::new(Container::new(Vec2::new(50.0, 50.0), Vec2::new(200.0, 200.0))))
        .unwrap();
    harness.manager.add_child(inner, Box::new(recorder)).unwrap()
}

#[test]
fn test_three_level_hit_test() {
    let mut harness = Harness::new();
    let recorder = nested_recorder(&mut harness, Recorder::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0)));

    assert_eq!(harness.manager.absolute_position(recorder), Some(Vec2::new(160.0, 170.0)));

    let inside = [(160.0, 170.0), (190.0, 210.0), (175.0, 190.0)];
    for (x, y) in inside {
        assert!(harness.manager.is_inside(recorder, &Vec2::new(x, y)), "({x}, {y}) should hit");
    }
    let outside = [(159.0, 170.0), (191.0, 190.0), (175.0, 169.0), (175.0, 211.0), (20.0, 30.0)];
    for (x, y) in outside {
        assert!(!harness.manager.is_inside(recorder, &Vec2::new(x, y)), "({x}, {y}) should miss");
    }
}

#[test]
fn test_dispatch_hit_test_uses_accumulated_origin() {
    let mut harness = Harness::new();
    let log = new_log();
    let recorder = nested_recorder(
        &mut harness,
        Recorder::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0)).with_log(&log),
    );

    harness.move_to(165.0, 175.0);
    harness.move_to(15.0, 25.0);
    assert_eq!(*log.borrow(), vec![(recorder, true), (recorder, false)]);
}

#[test]
fn test_hit_test_follows_ancestor_moves() {
    let mut harness = Harness::new();
    let recorder = nested_recorder(&mut harness, Recorder::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0)));
    let outer = harness.manager.root().get(0).unwrap().id();

    harness
        .manager
        .find_mut(outer)
        .unwrap()
        .component_mut()
        .set_position(Vec2::new(0.0, 0.0));
    assert!(harness.manager.is_inside(recorder, &Vec2::new(60.0, 70.0)));
    assert!(!harness.manager.is_inside(recorder, &Vec2::new(165.0, 175.0)));
}

#[test]
fn test_unknown_widget_is_never_inside() {
    let harness = Harness::new();
    assert!(!harness.manager.is_inside(crate::ui::WidgetId(42), &Vec2::zeros()));
    assert_eq!(harness.manager.absolute_position(crate::ui::WidgetId(42)), None);
}
