//! View transform: CSS zoom of the canvas wrapper plus the scroll offset of
//! the container around it. The raster buffer is never resized by zooming.
//!
//! Content space is the canvas at zoom 1.0 in CSS pixels; a content point `c`
//! sits at `c * zoom - scroll` inside the scroll container's viewport.

use crate::state::geometry::{Point, Rect};

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    zoom: f64,
    scroll: Point,
    min_zoom: f64,
    max_zoom: f64,
}

/// Outcome of a button-driven zoom step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep {
    pub zoom: f64,
    /// Zoomed out to 1.0 or below; the host should smooth-scroll to the origin.
    pub reset_scroll: bool,
}

/// Captured when the second finger lands; all pinch/pan math is relative to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchBaseline {
    pub initial_distance: f64,
    pub initial_zoom: f64,
    /// Midpoint between the two fingers, screen space.
    pub initial_midpoint: Point,
    pub initial_scroll: Point,
    /// Top-left of the scroll container, screen space.
    pub container_origin: Point,
}

impl ViewTransform {
    #[must_use]
    pub fn new(min_zoom: f64, max_zoom: f64) -> Self {
        Self { zoom: 1.0, scroll: Point::default(), min_zoom, max_zoom }
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn scroll(&self) -> Point {
        self.scroll
    }

    /// Zoom as a whole percentage for display.
    #[must_use]
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    #[must_use]
    pub fn is_zoomed_in(&self) -> bool {
        self.zoom > 1.0
    }

    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        if zoom.is_nan() {
            return self.zoom;
        }
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    pub fn set_zoom(&mut self, zoom: f64) -> f64 {
        self.zoom = self.clamp_zoom(zoom);
        self.zoom
    }

    pub fn set_scroll(&mut self, scroll: Point) -> Point {
        self.scroll = clamp_scroll(scroll);
        self.scroll
    }

    /// Apply a `+step`/`-step` button press.
    pub fn step_zoom(&mut self, delta: f64) -> ZoomStep {
        // Round to hundredths so repeated 0.2 steps land exactly on 1.0.
        let target = ((self.zoom + delta) * 100.0).round() / 100.0;
        let zoom = self.set_zoom(target);
        let reset_scroll = delta < 0.0 && zoom <= 1.0;
        if reset_scroll {
            self.scroll = Point::default();
        }
        ZoomStep { zoom, reset_scroll }
    }

    /// Start a pinch/pan from the current view.
    #[must_use]
    pub fn pinch_baseline(&self, a: Point, b: Point, container: Rect) -> PinchBaseline {
        PinchBaseline {
            initial_distance: a.distance(b),
            initial_zoom: self.zoom,
            initial_midpoint: a.midpoint(b),
            initial_scroll: self.scroll,
            container_origin: container.origin(),
        }
    }

    /// Track the two fingers: scale by the distance ratio anchored at the
    /// baseline midpoint, and translate by how far the midpoint moved.
    pub fn pinch_update(&mut self, base: &PinchBaseline, a: Point, b: Point) -> (f64, Point) {
        let distance = a.distance(b);
        let ratio = if base.initial_distance > 0.0 { distance / base.initial_distance } else { 1.0 };
        let zoom = self.set_zoom(base.initial_zoom * ratio);

        let mid_rel = Point::new(
            base.initial_midpoint.x - base.container_origin.x,
            base.initial_midpoint.y - base.container_origin.y,
        );
        // Content point that was under the midpoint before the gesture.
        let content = Point::new(
            (base.initial_scroll.x + mid_rel.x) / base.initial_zoom,
            (base.initial_scroll.y + mid_rel.y) / base.initial_zoom,
        );
        let midpoint = a.midpoint(b);
        let anchored = Point::new(content.x * zoom - mid_rel.x, content.y * zoom - mid_rel.y);
        let pan = Point::new(base.initial_midpoint.x - midpoint.x, base.initial_midpoint.y - midpoint.y);
        let scroll = self.set_scroll(Point::new(anchored.x + pan.x, anchored.y + pan.y));
        (zoom, scroll)
    }

    /// Scroll offset that puts the content under `tap` in the middle of a
    /// viewport of `viewport` size once the view is at `new_zoom`.
    ///
    /// `canvas` is the canvas bounding rect at the current zoom.
    #[must_use]
    pub fn centered_scroll(&self, tap: Point, canvas: Rect, viewport: (f64, f64), new_zoom: f64) -> Point {
        let rel = canvas.relative(tap);
        let content = Point::new(rel.x / self.zoom, rel.y / self.zoom);
        clamp_scroll(Point::new(
            content.x * new_zoom - viewport.0 / 2.0,
            content.y * new_zoom - viewport.1 / 2.0,
        ))
    }
}

fn clamp_scroll(p: Point) -> Point {
    let fix = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
    Point::new(fix(p.x), fix(p.y))
}
