#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_are_valid() {
    let cfg = CanvasConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.history_cap, 20);
    assert_eq!(cfg.min_zoom, 0.5);
    assert_eq!(cfg.max_zoom, 3.0);
    assert_eq!(cfg.brush_default, 20);
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = CanvasConfig::from_json(r#"{"history_cap": 5, "double_tap_zoom": 2.0}"#).unwrap();
    assert_eq!(cfg.history_cap, 5);
    assert_eq!(cfg.double_tap_zoom, 2.0);
    assert_eq!(cfg.zoom_step, 0.2);
    assert_eq!(cfg.stroke_defer_ms, 50);
    assert_eq!(cfg.notice_ms, 2500);
}

#[test]
fn empty_object_is_default() {
    let cfg = CanvasConfig::from_json("{}").unwrap();
    assert_eq!(cfg, CanvasConfig::default());
}

#[test]
fn malformed_json_is_rejected() {
    let err = CanvasConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, CanvasError::InvalidConfig(_)));
}

#[test]
fn zero_history_cap_is_rejected() {
    assert!(CanvasConfig::from_json(r#"{"history_cap": 0}"#).is_err());
}

#[test]
fn inverted_zoom_range_is_rejected() {
    assert!(CanvasConfig::from_json(r#"{"min_zoom": 2.0, "max_zoom": 1.5}"#).is_err());
}

#[test]
fn double_tap_zoom_outside_range_is_rejected() {
    assert!(CanvasConfig::from_json(r#"{"double_tap_zoom": 4.0}"#).is_err());
}

#[test]
fn brush_default_outside_range_is_rejected() {
    assert!(CanvasConfig::from_json(r#"{"brush_default": 60}"#).is_err());
    assert!(CanvasConfig::from_json(r#"{"brush_min": 0}"#).is_err());
}

#[test]
fn round_trips_through_json() {
    let cfg = CanvasConfig { history_cap: 7, ..CanvasConfig::default() };
    let raw = serde_json::to_string(&cfg).unwrap();
    assert_eq!(CanvasConfig::from_json(&raw).unwrap(), cfg);
}
