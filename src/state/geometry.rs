//! Points, rectangles and the screen → canvas-pixel mapping.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in screen (client CSS px), scroll-container or canvas-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// An axis-aligned rectangle, typically a `getBoundingClientRect()` result.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Position of `screen` relative to this rect's top-left corner.
    #[must_use]
    pub fn relative(&self, screen: Point) -> Point {
        Point::new(screen.x - self.left, screen.y - self.top)
    }
}

/// Map a screen point onto the native pixel grid of a canvas.
///
/// `display` is where the canvas currently sits on screen (after CSS zoom),
/// `native` its backing buffer size. Returns `None` when the canvas has no
/// laid-out area yet.
#[must_use]
pub fn screen_to_canvas(screen: Point, display: Rect, native: (u32, u32)) -> Option<Point> {
    if display.width <= 0.0 || display.height <= 0.0 {
        return None;
    }
    let scale_x = f64::from(native.0) / display.width;
    let scale_y = f64::from(native.1) / display.height;
    let rel = display.relative(screen);
    Some(Point::new(rel.x * scale_x, rel.y * scale_y))
}
