#![allow(clippy::float_cmp)]

use super::*;
use crate::state::geometry::Rect;
use crate::state::view::ViewTransform;

fn tracker() -> TapTracker {
    TapTracker::new(300.0, 50.0)
}

fn baseline() -> PinchBaseline {
    ViewTransform::new(0.5, 3.0).pinch_baseline(
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Rect::new(0.0, 0.0, 500.0, 500.0),
    )
}

// --- TapTracker ---

#[test]
fn first_tap_is_single() {
    let mut t = tracker();
    let kind = t.register(1000.0, Point::new(10.0, 10.0));
    assert_eq!(kind, TapKind::Single(Tap { time_ms: 1000.0, at: Point::new(10.0, 10.0) }));
    assert!(t.is_current(1000.0));
}

#[test]
fn close_fast_second_tap_is_double() {
    let mut t = tracker();
    t.register(1000.0, Point::new(10.0, 10.0));
    assert_eq!(t.register(1100.0, Point::new(20.0, 15.0)), TapKind::Double);
    assert!(t.last().is_none());
}

#[test]
fn slow_second_tap_is_single() {
    let mut t = tracker();
    t.register(1000.0, Point::new(10.0, 10.0));
    assert!(matches!(t.register(1400.0, Point::new(10.0, 10.0)), TapKind::Single(_)));
    assert!(t.is_current(1400.0));
    assert!(!t.is_current(1000.0));
}

#[test]
fn far_second_tap_is_single() {
    let mut t = tracker();
    t.register(1000.0, Point::new(10.0, 10.0));
    assert!(matches!(t.register(1100.0, Point::new(90.0, 10.0)), TapKind::Single(_)));
}

#[test]
fn window_and_radius_are_exclusive_bounds() {
    let mut t = tracker();
    t.register(0.0, Point::new(0.0, 0.0));
    assert!(matches!(t.register(300.0, Point::new(0.0, 0.0)), TapKind::Single(_)));
    let mut t = tracker();
    t.register(0.0, Point::new(0.0, 0.0));
    assert!(matches!(t.register(10.0, Point::new(50.0, 0.0)), TapKind::Single(_)));
}

#[test]
fn third_tap_does_not_chain() {
    let mut t = tracker();
    t.register(0.0, Point::new(0.0, 0.0));
    assert_eq!(t.register(100.0, Point::new(0.0, 0.0)), TapKind::Double);
    assert!(matches!(t.register(200.0, Point::new(0.0, 0.0)), TapKind::Single(_)));
}

#[test]
fn clear_forgets_last_tap() {
    let mut t = tracker();
    t.register(0.0, Point::new(0.0, 0.0));
    t.clear();
    assert!(!t.is_current(0.0));
}

// --- GestureSession ---

#[test]
fn deferred_stroke_starts_only_for_matching_token() {
    let at = Point::new(5.0, 6.0);
    let mut s = GestureSession::new(GesturePhase::PendingStroke { token: 42.0, at }, 1);
    assert_eq!(s.start_deferred(41.0), None);
    assert_eq!(s.start_deferred(42.0), Some(at));
    assert!(s.is_drawing());
    // Already drawing: a repeated timer does nothing.
    assert_eq!(s.start_deferred(42.0), None);
}

#[test]
fn pinch_replaces_pending_stroke() {
    let mut s = GestureSession::new(GesturePhase::PendingStroke { token: 1.0, at: Point::default() }, 1);
    let prev = s.begin_pinch(baseline());
    assert!(matches!(prev, GesturePhase::PendingStroke { .. }));
    assert!(s.pinch().is_some());
    assert_eq!(s.peak_touches(), 2);
    assert_eq!(s.start_deferred(1.0), None);
}

#[test]
fn ending_pinch_makes_session_inert() {
    let mut s = GestureSession::new(GesturePhase::Drawing, 1);
    s.begin_pinch(baseline());
    s.end_pinch();
    assert_eq!(s.phase(), &GesturePhase::Inert);
    assert!(!s.is_drawing());
    assert!(s.pinch().is_none());
}

#[test]
fn end_pinch_leaves_drawing_alone() {
    let mut s = GestureSession::new(GesturePhase::Drawing, 1);
    s.end_pinch();
    assert!(s.is_drawing());
    assert_eq!(s.finish(), GesturePhase::Drawing);
}
