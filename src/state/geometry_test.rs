#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn distance_is_euclidean() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0));
}

#[test]
fn midpoint_is_average() {
    let m = Point::new(10.0, 20.0).midpoint(Point::new(30.0, 60.0));
    assert_eq!(m, Point::new(20.0, 40.0));
}

#[test]
fn relative_subtracts_origin() {
    let r = Rect::new(100.0, 50.0, 10.0, 10.0);
    assert_eq!(r.relative(Point::new(130.0, 55.0)), Point::new(30.0, 5.0));
    assert_eq!(r.origin(), Point::new(100.0, 50.0));
}

#[test]
fn identity_mapping_when_display_matches_native() {
    let p = screen_to_canvas(Point::new(40.0, 30.0), Rect::new(0.0, 0.0, 200.0, 100.0), (200, 100));
    assert_eq!(p, Some(Point::new(40.0, 30.0)));
}

#[test]
fn scales_by_native_over_display() {
    // 2048 px buffer shown at 512 CSS px: every CSS px is 4 buffer px.
    let display = Rect::new(10.0, 20.0, 512.0, 512.0);
    let p = screen_to_canvas(Point::new(110.0, 70.0), display, (2048, 2048)).unwrap();
    assert!(approx_eq(p.x, 400.0));
    assert!(approx_eq(p.y, 200.0));
}

#[test]
fn non_uniform_scale_per_axis() {
    let display = Rect::new(0.0, 0.0, 100.0, 400.0);
    let p = screen_to_canvas(Point::new(50.0, 100.0), display, (1000, 1000)).unwrap();
    assert!(approx_eq(p.x, 500.0));
    assert!(approx_eq(p.y, 250.0));
}

#[test]
fn zero_sized_display_has_no_mapping() {
    assert!(screen_to_canvas(Point::new(1.0, 1.0), Rect::new(0.0, 0.0, 0.0, 10.0), (10, 10)).is_none());
}
