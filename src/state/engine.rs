//! The coloring canvas core.
//!
//! `ColoringCore` owns the surface, the retained template, the undo history,
//! the view transform and the gesture state. It never touches the DOM:
//! handlers take timestamps and layout snapshots and return [`Effect`]s
//! that the host component carries out.

use crate::config::CanvasConfig;
use crate::error::CanvasError;
use crate::model::{BrushSize, Rgba};
use crate::state::geometry::{Point, Rect, screen_to_canvas};
use crate::state::history::History;
use crate::state::surface::{DirtyRect, Surface, TemplateImage};
use crate::state::touch::{GesturePhase, GestureSession, TapKind, TapTracker};
use crate::state::view::ViewTransform;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Work for the host to do after an input has been handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Call `preventDefault()` on the triggering event.
    PreventDefault,
    /// Copy this region of the surface to the on-screen canvas.
    Repaint(DirtyRect),
    /// The undo stack changed length.
    HistoryChanged { len: usize },
    /// Apply a new CSS zoom to the canvas wrapper.
    SetZoom(f64),
    /// Move the scroll container. `next_frame` means after layout has
    /// picked up a zoom change.
    ScrollTo { to: Point, smooth: bool, next_frame: bool },
    /// Call [`ColoringCore::resume_deferred_stroke`] with `token` after `delay_ms`.
    DeferStroke { token: f64, delay_ms: u32 },
}

/// Where things are on screen at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    /// Canvas element bounding rect (after CSS zoom and scroll).
    pub canvas: Rect,
    /// Scroll container bounding rect.
    pub container: Rect,
    /// Scroll container's current `scrollLeft`/`scrollTop`.
    pub scroll: Point,
}

/// Surface plus everything that lives exactly as long as one template.
#[derive(Debug)]
struct Session {
    template: TemplateImage,
    surface: Surface,
    history: History,
}

pub struct ColoringCore {
    config: CanvasConfig,
    session: Option<Session>,
    view: ViewTransform,
    taps: TapTracker,
    gesture: Option<GestureSession>,
    /// A single-finger tap whose finger lifted before the deferral timer
    /// fired: (token, canvas point). Resolved into a dot by the timer.
    lifted_tap: Option<(f64, Point)>,
    mouse_drawing: bool,
    color: Rgba,
    brush: BrushSize,
}

impl ColoringCore {
    #[must_use]
    pub fn new(config: CanvasConfig) -> Self {
        let view = ViewTransform::new(config.min_zoom, config.max_zoom);
        let taps = TapTracker::new(config.double_tap_window_ms, config.double_tap_radius_px);
        let brush = BrushSize::new(config.brush_default, config.brush_min, config.brush_max);
        Self {
            config,
            session: None,
            view,
            taps,
            gesture: None,
            lifted_tap: None,
            mouse_drawing: false,
            color: Rgba::opaque(0, 0, 0),
            brush,
        }
    }

    // --- Template lifecycle ---

    /// Allocate the surface at the template's natural size, paint white plus
    /// the template and seed the history with that state.
    pub fn load_template(&mut self, template: TemplateImage) -> Result<Vec<Effect>, CanvasError> {
        let mut surface = Surface::new(template.width(), template.height())?;
        surface.paint_template(&template)?;
        let history = History::new(surface.snapshot(), self.config.history_cap);
        log::info!("template loaded at {}x{}", surface.width(), surface.height());
        let rect = surface.full_rect();
        self.session = Some(Session { template, surface, history });
        self.gesture = None;
        self.lifted_tap = None;
        self.mouse_drawing = false;
        self.taps.clear();
        Ok(vec![Effect::Repaint(rect), Effect::HistoryChanged { len: 1 }])
    }

    /// Drop the surface and history; the view starts fresh too.
    pub fn unload(&mut self) {
        self.session = None;
        self.gesture = None;
        self.lifted_tap = None;
        self.mouse_drawing = false;
        self.view = ViewTransform::new(self.config.min_zoom, self.config.max_zoom);
    }

    // --- Tools ---

    pub fn set_tool(&mut self, color: Rgba, brush: BrushSize) {
        self.color = color;
        self.brush = brush;
    }

    // --- Undo / clear ---

    pub fn undo(&mut self) -> Vec<Effect> {
        let Some(s) = self.session.as_mut() else {
            return Vec::new();
        };
        let Some(top) = s.history.undo() else {
            return Vec::new();
        };
        s.surface.restore(top);
        vec![Effect::Repaint(s.surface.full_rect()), Effect::HistoryChanged { len: s.history.len() }]
    }

    /// Repaint the retained template over white and reset history to that state.
    pub fn clear(&mut self) -> Vec<Effect> {
        let Some(s) = self.session.as_mut() else {
            return Vec::new();
        };
        if let Err(e) = s.surface.paint_template(&s.template) {
            log::error!("clear failed: {e}");
            return Vec::new();
        }
        s.history.reset(s.surface.snapshot());
        self.mouse_drawing = false;
        if let Some(g) = self.gesture.as_mut() {
            if g.is_drawing() {
                *g = GestureSession::new(GesturePhase::Inert, g.peak_touches());
            }
        }
        vec![Effect::Repaint(s.surface.full_rect()), Effect::HistoryChanged { len: 1 }]
    }

    // --- Zoom buttons ---

    pub fn zoom_in(&mut self) -> Vec<Effect> {
        let step = self.view.step_zoom(self.config.zoom_step);
        vec![Effect::SetZoom(step.zoom)]
    }

    pub fn zoom_out(&mut self) -> Vec<Effect> {
        let step = self.view.step_zoom(-self.config.zoom_step);
        let mut out = vec![Effect::SetZoom(step.zoom)];
        if step.reset_scroll {
            out.push(Effect::ScrollTo { to: Point::default(), smooth: true, next_frame: false });
        }
        out
    }

    /// Keep the view in step with scrolling done outside of gestures.
    pub fn sync_scroll(&mut self, scroll: Point) {
        self.view.set_scroll(scroll);
    }

    // --- Mouse ---

    pub fn mouse_down(&mut self, screen: Point, layout: &Layout) -> Vec<Effect> {
        if self.session.is_none() || self.gesture.is_some() {
            return Vec::new();
        }
        self.mouse_drawing = true;
        let mut out = vec![Effect::PreventDefault];
        out.extend(self.stamp_screen(screen, layout));
        out
    }

    pub fn mouse_move(&mut self, screen: Point, layout: &Layout) -> Vec<Effect> {
        if !self.mouse_drawing {
            return Vec::new();
        }
        self.stamp_screen(screen, layout).into_iter().collect()
    }

    /// Mouse up or the pointer leaving the canvas.
    pub fn mouse_up(&mut self) -> Vec<Effect> {
        if !std::mem::take(&mut self.mouse_drawing) {
            return Vec::new();
        }
        self.commit_stroke()
    }

    // --- Touch ---

    /// `touches` are the screen positions of every finger currently down.
    pub fn touch_start(&mut self, now_ms: f64, touches: &[Point], layout: &Layout) -> Vec<Effect> {
        if self.session.is_none() {
            return Vec::new();
        }
        match touches {
            [] => Vec::new(),
            [single] => self.single_touch_down(now_ms, *single, layout),
            [a, b, ..] => self.two_finger_down(*a, *b, layout),
        }
    }

    pub fn touch_move(&mut self, touches: &[Point], layout: &Layout) -> Vec<Effect> {
        let Some(gesture) = self.gesture.as_mut() else {
            return Vec::new();
        };
        match touches {
            [a, b, ..] => {
                let mut out = vec![Effect::PreventDefault];
                if let Some(base) = gesture.pinch().copied() {
                    let (zoom, scroll) = self.view.pinch_update(&base, *a, *b);
                    out.push(Effect::SetZoom(zoom));
                    out.push(Effect::ScrollTo { to: scroll, smooth: false, next_frame: true });
                }
                out
            }
            [single] if gesture.is_drawing() => {
                let mut out = vec![Effect::PreventDefault];
                out.extend(self.stamp_screen(*single, layout));
                out
            }
            _ => vec![Effect::PreventDefault],
        }
    }

    /// `remaining` are the fingers still down after the lift.
    pub fn touch_end(&mut self, remaining: &[Point]) -> Vec<Effect> {
        let Some(gesture) = self.gesture.as_mut() else {
            return Vec::new();
        };
        if remaining.len() < 2 {
            gesture.end_pinch();
        }
        if !remaining.is_empty() {
            return Vec::new();
        }
        let Some(gesture) = self.gesture.take() else {
            return Vec::new();
        };
        log::debug!("gesture session ended after {} touches", gesture.peak_touches());
        match gesture.finish() {
            GesturePhase::Drawing => {
                // A stroke is not a tap; it can't open a double-tap.
                self.taps.clear();
                self.commit_stroke()
            }
            GesturePhase::PendingStroke { token, at } => {
                self.lifted_tap = Some((token, at));
                Vec::new()
            }
            GesturePhase::Pinching(_) | GesturePhase::Inert => Vec::new(),
        }
    }

    /// The stroke deferral timer for `token` fired.
    pub fn resume_deferred_stroke(&mut self, token: f64) -> Vec<Effect> {
        let lifted = self.lifted_tap.take_if(|(t, _)| *t == token);
        if !self.taps.is_current(token) {
            return Vec::new();
        }
        if let Some(at) = self.gesture.as_mut().and_then(|g| g.start_deferred(token)) {
            return self.stamp_canvas(at).into_iter().collect();
        }
        match lifted {
            Some((_, at)) => {
                // Quick tap: the whole stroke is one dot.
                let mut out: Vec<Effect> = self.stamp_canvas(at).into_iter().collect();
                out.extend(self.commit_stroke());
                out
            }
            None => Vec::new(),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn surface(&self) -> Option<&Surface> {
        self.session.as_ref().map(|s| &s.surface)
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.history.len())
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.history.can_undo())
    }

    #[must_use]
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    // --- Internals ---

    fn single_touch_down(&mut self, now_ms: f64, screen: Point, layout: &Layout) -> Vec<Effect> {
        if self.gesture.is_some() {
            return vec![Effect::PreventDefault];
        }
        self.view.set_scroll(layout.scroll);
        match self.taps.register(now_ms, screen) {
            TapKind::Double => {
                self.gesture = Some(GestureSession::new(GesturePhase::Inert, 1));
                let mut out = vec![Effect::PreventDefault];
                out.extend(self.toggle_double_tap_zoom(screen, layout));
                out
            }
            TapKind::Single(tap) => {
                let native = self.session.as_ref().map(|s| s.surface.size());
                let phase = match native.and_then(|n| screen_to_canvas(screen, layout.canvas, n)) {
                    Some(at) => GesturePhase::PendingStroke { token: tap.time_ms, at },
                    None => GesturePhase::Inert,
                };
                let deferred = matches!(phase, GesturePhase::PendingStroke { .. });
                self.gesture = Some(GestureSession::new(phase, 1));
                let mut out = vec![Effect::PreventDefault];
                if deferred {
                    out.push(Effect::DeferStroke {
                        token: tap.time_ms,
                        delay_ms: self.config.stroke_defer_ms,
                    });
                }
                out
            }
        }
    }

    fn two_finger_down(&mut self, a: Point, b: Point, layout: &Layout) -> Vec<Effect> {
        let mut out = vec![Effect::PreventDefault];
        self.taps.clear();
        if self.gesture.as_ref().is_some_and(GestureSession::is_drawing) {
            // Keep what was drawn with one finger as its own undo step.
            out.extend(self.commit_stroke());
        }
        if self.mouse_drawing {
            self.mouse_drawing = false;
            out.extend(self.commit_stroke());
        }
        self.view.set_scroll(layout.scroll);
        let base = self.view.pinch_baseline(a, b, layout.container);
        match self.gesture.as_mut() {
            Some(g) => {
                g.begin_pinch(base);
            }
            None => {
                let mut g = GestureSession::new(GesturePhase::Inert, 2);
                g.begin_pinch(base);
                self.gesture = Some(g);
            }
        }
        out
    }

    fn toggle_double_tap_zoom(&mut self, tap: Point, layout: &Layout) -> Vec<Effect> {
        if self.view.is_zoomed_in() {
            let zoom = self.view.set_zoom(1.0);
            self.view.set_scroll(Point::default());
            vec![
                Effect::SetZoom(zoom),
                Effect::ScrollTo { to: Point::default(), smooth: true, next_frame: false },
            ]
        } else {
            let target = self.view.clamp_zoom(self.config.double_tap_zoom);
            let viewport = (layout.container.width, layout.container.height);
            let scroll = self.view.centered_scroll(tap, layout.canvas, viewport, target);
            let zoom = self.view.set_zoom(target);
            let scroll = self.view.set_scroll(scroll);
            vec![Effect::SetZoom(zoom), Effect::ScrollTo { to: scroll, smooth: true, next_frame: true }]
        }
    }

    fn stamp_screen(&mut self, screen: Point, layout: &Layout) -> Option<Effect> {
        let native = self.session.as_ref()?.surface.size();
        let at = screen_to_canvas(screen, layout.canvas, native)?;
        self.stamp_canvas(at)
    }

    fn stamp_canvas(&mut self, at: Point) -> Option<Effect> {
        let s = self.session.as_mut()?;
        s.surface.stamp_circle(at, self.brush.radius(), self.color).map(Effect::Repaint)
    }

    fn commit_stroke(&mut self) -> Vec<Effect> {
        let Some(s) = self.session.as_mut() else {
            return Vec::new();
        };
        s.history.push(s.surface.snapshot());
        log::debug!("stroke committed, history {}/{}", s.history.len(), s.history.cap());
        vec![Effect::HistoryChanged { len: s.history.len() }]
    }
}

/// Download name for an exported drawing.
#[must_use]
pub fn export_file_name(timestamp_ms: u64) -> String {
    format!("coloring-{timestamp_ms}.png")
}
