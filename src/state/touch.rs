//! Touch gesture state.
//!
//! A [`GestureSession`] lives from the first finger down to the last finger
//! up and is dispatched purely on how many fingers are on the glass: one
//! finger may draw, two fingers pinch/pan, never both. Double-tap detection
//! has to span two sessions, so the [`TapTracker`] lives outside them.

use crate::state::geometry::Point;
use crate::state::view::PinchBaseline;

#[cfg(test)]
#[path = "touch_test.rs"]
mod touch_test;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tap {
    pub time_ms: f64,
    /// Screen position.
    pub at: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapKind {
    /// First tap of a possible pair; the recorded time doubles as the
    /// token for the deferred stroke.
    Single(Tap),
    Double,
}

#[derive(Debug, Clone)]
pub struct TapTracker {
    last: Option<Tap>,
    window_ms: f64,
    radius_px: f64,
}

impl TapTracker {
    #[must_use]
    pub fn new(window_ms: f64, radius_px: f64) -> Self {
        Self { last: None, window_ms, radius_px }
    }

    /// Record a single-finger touch-down.
    ///
    /// A double-tap consumes the recorded tap so a third tap starts a new pair.
    pub fn register(&mut self, now_ms: f64, at: Point) -> TapKind {
        if let Some(last) = self.last {
            if now_ms - last.time_ms < self.window_ms && at.distance(last.at) < self.radius_px {
                self.last = None;
                return TapKind::Double;
            }
        }
        let tap = Tap { time_ms: now_ms, at };
        self.last = Some(tap);
        TapKind::Single(tap)
    }

    /// Whether `token` is still the most recent unconsumed tap.
    #[must_use]
    pub fn is_current(&self, token: f64) -> bool {
        self.last.is_some_and(|t| t.time_ms == token)
    }

    #[must_use]
    pub fn last(&self) -> Option<Tap> {
        self.last
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GesturePhase {
    /// One finger down; the stroke starts when the deferral timer for
    /// `token` fires. `at` is the touch-down point in canvas pixels.
    PendingStroke { token: f64, at: Point },
    /// One finger down and painting.
    Drawing,
    /// Two fingers down.
    Pinching(PinchBaseline),
    /// The session can no longer draw: it was a double-tap, it pinched and
    /// dropped back to one finger, or the touch missed the canvas.
    Inert,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    phase: GesturePhase,
    /// Largest number of simultaneous touches seen in this session.
    peak_touches: usize,
}

impl GestureSession {
    #[must_use]
    pub fn new(phase: GesturePhase, touches: usize) -> Self {
        Self { phase, peak_touches: touches }
    }

    #[must_use]
    pub fn phase(&self) -> &GesturePhase {
        &self.phase
    }

    #[must_use]
    pub fn peak_touches(&self) -> usize {
        self.peak_touches
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self.phase, GesturePhase::Drawing)
    }

    #[must_use]
    pub fn pinch(&self) -> Option<&PinchBaseline> {
        match &self.phase {
            GesturePhase::Pinching(base) => Some(base),
            _ => None,
        }
    }

    /// A second finger landed. Returns the phase that was replaced.
    pub fn begin_pinch(&mut self, base: PinchBaseline) -> GesturePhase {
        self.peak_touches = self.peak_touches.max(2);
        std::mem::replace(&mut self.phase, GesturePhase::Pinching(base))
    }

    /// Fingers dropped below two: forget the pinch baseline. A session that
    /// pinched never draws again.
    pub fn end_pinch(&mut self) {
        if matches!(self.phase, GesturePhase::Pinching(_)) {
            self.phase = GesturePhase::Inert;
        }
    }

    /// The deferral timer fired. Starts drawing only if this session is
    /// still waiting on `token`; returns the touch-down point to stamp.
    pub fn start_deferred(&mut self, token: f64) -> Option<Point> {
        match self.phase {
            GesturePhase::PendingStroke { token: t, at } if t == token => {
                self.phase = GesturePhase::Drawing;
                Some(at)
            }
            _ => None,
        }
    }

    /// Consume the session when the last finger lifts.
    #[must_use]
    pub fn finish(self) -> GesturePhase {
        self.phase
    }
}
