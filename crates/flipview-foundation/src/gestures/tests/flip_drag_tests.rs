use super::*;
use crate::input::PointerSample;

const SLOP: f32 = 16.0;
const MAX_VELOCITY: f32 = 8_000.0;

fn detector() -> FlipGestureDetector {
    FlipGestureDetector::new(SLOP, MAX_VELOCITY)
}

fn event(action: TouchAction, x: f32, y: f32, time_ms: i64) -> TouchEvent {
    TouchEvent::single(action, 1, x, y, time_ms)
}

#[test]
fn small_moves_stay_undecided() {
    let mut detector = detector();
    assert_eq!(
        detector.on_touch_event(&event(TouchAction::Down, 100.0, 50.0, 0), false),
        GestureOutcome::Tracking
    );
    assert_eq!(detector.phase(), GesturePhase::Undecided);

    let outcome = detector.on_touch_event(&event(TouchAction::Move, 110.0, 50.0, 16), false);
    assert_eq!(outcome, GestureOutcome::Tracking);
    assert!(!detector.is_dragging());
}

#[test]
fn vertical_moves_never_start_a_flip() {
    let mut detector = detector();
    detector.on_touch_event(&event(TouchAction::Down, 100.0, 50.0, 0), false);
    let outcome = detector.on_touch_event(&event(TouchAction::Move, 130.0, 120.0, 16), false);
    assert_eq!(outcome, GestureOutcome::Tracking);
    assert_eq!(detector.phase(), GesturePhase::Undecided);
}

#[test]
fn crossing_the_slop_starts_a_drag_and_reanchors() {
    let mut detector = detector();
    detector.on_touch_event(&event(TouchAction::Down, 200.0, 50.0, 0), false);
    let outcome = detector.on_touch_event(&event(TouchAction::Move, 180.0, 52.0, 16), false);
    assert_eq!(outcome, GestureOutcome::DragStarted);
    assert!(detector.session().is_some_and(|s| s.touch_slop_crossed));

    // Deltas are measured from the crossing point; leftward motion is positive.
    let outcome = detector.on_touch_event(&event(TouchAction::Move, 170.0, 52.0, 32), false);
    assert_eq!(outcome, GestureOutcome::DragBy { delta_px: 10.0 });
    let outcome = detector.on_touch_event(&event(TouchAction::Move, 175.0, 52.0, 48), false);
    assert_eq!(outcome, GestureOutcome::DragBy { delta_px: -5.0 });
}

#[test]
fn release_reports_velocity_and_returns_to_idle() {
    let mut detector = detector();
    detector.on_touch_event(&event(TouchAction::Down, 300.0, 50.0, 0), false);
    detector.on_touch_event(&event(TouchAction::Move, 270.0, 50.0, 10), false);
    detector.on_touch_event(&event(TouchAction::Move, 240.0, 50.0, 20), false);

    match detector.on_touch_event(&event(TouchAction::Up, 210.0, 50.0, 30), false) {
        GestureOutcome::Released { velocity } => assert!(velocity < -1_000.0, "{velocity}"),
        other => panic!("expected release, got {other:?}"),
    }
    assert_eq!(detector.phase(), GesturePhase::Idle);
    assert!(detector.session().is_none());
}

#[test]
fn down_during_animation_grabs_the_page() {
    let mut detector = detector();
    let outcome = detector.on_touch_event(&event(TouchAction::Down, 100.0, 50.0, 0), true);
    assert_eq!(outcome, GestureOutcome::DragStarted);
    assert!(detector.is_dragging());

    let outcome = detector.on_touch_event(&event(TouchAction::Move, 98.0, 50.0, 16), true);
    assert_eq!(outcome, GestureOutcome::DragBy { delta_px: 2.0 });
}

#[test]
fn tap_matches_either_raw_coordinate() {
    let mut detector = detector();
    let down = event(TouchAction::Down, 40.0, 30.0, 0).with_raw_offset(Point::new(0.0, 500.0));
    detector.on_touch_event(&down, false);

    // x moved a little, y did not: still a tap under the exact-or rule.
    let up = event(TouchAction::Up, 44.0, 30.0, 90).with_raw_offset(Point::new(0.0, 500.0));
    assert_eq!(
        detector.on_touch_event(&up, false),
        GestureOutcome::Tap {
            position: Point::new(44.0, 30.0),
            raw: Point::new(44.0, 530.0),
        }
    );
}

#[test]
fn release_away_from_the_anchor_is_not_a_tap() {
    let mut detector = detector();
    detector.on_touch_event(&event(TouchAction::Down, 40.0, 30.0, 0), false);
    detector.on_touch_event(&event(TouchAction::Move, 45.0, 33.0, 20), false);
    let outcome = detector.on_touch_event(&event(TouchAction::Up, 45.0, 33.0, 40), false);
    assert_eq!(outcome, GestureOutcome::Reset);
}

#[test]
fn vanished_pointer_resets_the_session() {
    let mut detector = detector();
    detector.on_touch_event(&event(TouchAction::Down, 100.0, 50.0, 0), false);
    let stray = TouchEvent::single(TouchAction::Move, 7, 10.0, 10.0, 16);
    assert_eq!(detector.on_touch_event(&stray, false), GestureOutcome::Reset);
    assert_eq!(detector.phase(), GesturePhase::Idle);

    // Later moves without a new down are ignored.
    let outcome = detector.on_touch_event(&event(TouchAction::Move, 50.0, 50.0, 32), false);
    assert_eq!(outcome, GestureOutcome::Ignored);
}

#[test]
fn vanished_pointer_mid_drag_ends_as_a_release() {
    let mut detector = detector();
    detector.on_touch_event(&event(TouchAction::Down, 100.0, 50.0, 0), false);
    detector.on_touch_event(&event(TouchAction::Move, 60.0, 50.0, 16), false);
    assert!(detector.is_dragging());

    let stray = TouchEvent::single(TouchAction::Move, 7, 10.0, 10.0, 32);
    assert_eq!(
        detector.on_touch_event(&stray, false),
        GestureOutcome::Released { velocity: 0.0 }
    );
    assert_eq!(detector.phase(), GesturePhase::Idle);
}

#[test]
fn down_without_an_up_keeps_dragging() {
    let mut detector = detector();
    detector.on_touch_event(&event(TouchAction::Down, 100.0, 50.0, 0), false);
    detector.on_touch_event(&event(TouchAction::Move, 60.0, 50.0, 16), false);

    let outcome = detector.on_touch_event(&event(TouchAction::Down, 220.0, 50.0, 32), false);
    assert_eq!(outcome, GestureOutcome::DragStarted);
    assert!(detector.is_dragging());

    let outcome = detector.on_touch_event(&event(TouchAction::Up, 220.0, 50.0, 48), false);
    assert!(matches!(outcome, GestureOutcome::Released { .. }));
}

#[test]
fn secondary_pointer_takes_over_and_hands_back() {
    let mut detector = detector();
    detector.on_touch_event(&event(TouchAction::Down, 200.0, 50.0, 0), false);
    detector.on_touch_event(&event(TouchAction::Move, 170.0, 50.0, 16), false);
    assert!(detector.is_dragging());

    let both = [PointerSample::new(1, 170.0, 50.0), PointerSample::new(2, 400.0, 60.0)];
    let pointer_down = TouchEvent::new(TouchAction::PointerDown, 20, &both).with_action_index(1);
    detector.on_touch_event(&pointer_down, false);
    assert_eq!(detector.session().map(|s| s.active_pointer), Some(2));

    // The new pointer drives the drag from where it went down.
    let moved = [PointerSample::new(1, 170.0, 50.0), PointerSample::new(2, 390.0, 60.0)];
    let outcome = detector.on_touch_event(&TouchEvent::new(TouchAction::Move, 32, &moved), false);
    assert_eq!(outcome, GestureOutcome::DragBy { delta_px: 10.0 });

    // Lifting the active pointer hands the session back to the remaining one.
    let pointer_up = TouchEvent::new(TouchAction::PointerUp, 48, &moved).with_action_index(1);
    detector.on_touch_event(&pointer_up, false);
    assert_eq!(detector.session().map(|s| s.active_pointer), Some(1));
    assert_eq!(detector.session().map(|s| s.last), Some(Point::new(170.0, 50.0)));
}

#[test]
fn cancel_while_dragging_still_settles() {
    let mut detector = detector();
    detector.on_touch_event(&event(TouchAction::Down, 200.0, 50.0, 0), false);
    detector.on_touch_event(&event(TouchAction::Move, 170.0, 50.0, 16), false);
    let outcome = detector.on_touch_event(&event(TouchAction::Cancel, 170.0, 50.0, 20), false);
    assert!(matches!(outcome, GestureOutcome::Released { .. }));
    assert_eq!(detector.phase(), GesturePhase::Idle);
}

#[test]
fn events_without_a_session_are_ignored() {
    let mut detector = detector();
    for action in [TouchAction::Move, TouchAction::Up, TouchAction::Cancel, TouchAction::PointerUp] {
        assert_eq!(
            detector.on_touch_event(&event(action, 1.0, 1.0, 0), false),
            GestureOutcome::Ignored
        );
    }
}
