//! DOM glue between the `<canvas>` and [`ColoringCore`].
//!
//! Everything here is thin: read positions from the DOM, hand them to the
//! core and carry out the [`Effect`]s it returns.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{
    CanvasRenderingContext2d, Event, EventTarget, HtmlAnchorElement, HtmlCanvasElement, HtmlElement,
    HtmlImageElement, ImageData, ScrollBehavior, ScrollToOptions, TouchList,
};
use yew::functional::UseStateSetter;

use crate::error::CanvasError;
use crate::state::surface::DirtyRect;
use crate::state::{ColoringCore, Effect, Layout, Point, Rect, TemplateImage};
use crate::util::now_ms;

/// A DOM listener that unregisters itself when dropped.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    cb: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(target: &EventTarget, kind: &'static str, f: impl FnMut(Event) + 'static) -> Option<Self> {
        let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        match target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self { target: target.clone(), kind, cb }),
            Err(e) => {
                log::warn!("could not listen for {kind}: {e:?}");
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.cb.as_ref().unchecked_ref());
    }
}

/// Handles the event listeners, timers and buttons share.
#[derive(Clone)]
pub struct CanvasHost {
    pub core: Rc<RefCell<ColoringCore>>,
    pub canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    container: HtmlElement,
    wrapper: HtmlElement,
    set_history: UseStateSetter<usize>,
    set_zoom: UseStateSetter<f64>,
    /// Only the newest deferred stroke can still start; replacing the slot
    /// cancels the older timer.
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl CanvasHost {
    pub fn new(
        core: Rc<RefCell<ColoringCore>>,
        canvas: HtmlCanvasElement,
        container: HtmlElement,
        wrapper: HtmlElement,
        set_history: UseStateSetter<usize>,
        set_zoom: UseStateSetter<f64>,
    ) -> Result<Self, CanvasError> {
        let ctx = context_2d(&canvas)?;
        Ok(Self {
            core,
            canvas,
            ctx,
            container,
            wrapper,
            set_history,
            set_zoom,
            pending: Rc::new(RefCell::new(None)),
        })
    }

    /// Wire mouse and touch input on the canvas, plus scroll tracking on the
    /// container. Listeners stay registered until the returned list drops.
    pub fn attach_listeners(&self) -> Vec<Listener> {
        let canvas: &EventTarget = &self.canvas;
        let container: &EventTarget = &self.container;
        let mut out = Vec::new();

        let h = self.clone();
        out.push(Listener::new(canvas, "mousedown", move |e| {
            let Some(m) = e.dyn_ref::<web_sys::MouseEvent>() else {
                return;
            };
            if m.button() != 0 {
                return;
            }
            let at = Point::new(f64::from(m.client_x()), f64::from(m.client_y()));
            let layout = h.layout();
            let effects = h.core.borrow_mut().mouse_down(at, &layout);
            h.apply(effects, Some(&e));
        }));
        let h = self.clone();
        out.push(Listener::new(canvas, "mousemove", move |e| {
            let Some(m) = e.dyn_ref::<web_sys::MouseEvent>() else {
                return;
            };
            let at = Point::new(f64::from(m.client_x()), f64::from(m.client_y()));
            let layout = h.layout();
            let effects = h.core.borrow_mut().mouse_move(at, &layout);
            h.apply(effects, Some(&e));
        }));
        for kind in ["mouseup", "mouseleave"] {
            let h = self.clone();
            out.push(Listener::new(canvas, kind, move |e| {
                let effects = h.core.borrow_mut().mouse_up();
                h.apply(effects, Some(&e));
            }));
        }

        let h = self.clone();
        out.push(Listener::new(canvas, "touchstart", move |e| {
            let Some(t) = e.dyn_ref::<web_sys::TouchEvent>() else {
                return;
            };
            let touches = touch_points(&t.touches());
            let layout = h.layout();
            let effects = h.core.borrow_mut().touch_start(now_ms(), &touches, &layout);
            h.apply(effects, Some(&e));
        }));
        let h = self.clone();
        out.push(Listener::new(canvas, "touchmove", move |e| {
            let Some(t) = e.dyn_ref::<web_sys::TouchEvent>() else {
                return;
            };
            let touches = touch_points(&t.touches());
            let layout = h.layout();
            let effects = h.core.borrow_mut().touch_move(&touches, &layout);
            h.apply(effects, Some(&e));
        }));
        for kind in ["touchend", "touchcancel"] {
            let h = self.clone();
            out.push(Listener::new(canvas, kind, move |e| {
                let Some(t) = e.dyn_ref::<web_sys::TouchEvent>() else {
                    return;
                };
                let remaining = touch_points(&t.touches());
                let effects = h.core.borrow_mut().touch_end(&remaining);
                h.apply(effects, Some(&e));
            }));
        }

        let h = self.clone();
        out.push(Listener::new(container, "scroll", move |_| {
            let scroll = h.scroll();
            h.core.borrow_mut().sync_scroll(scroll);
        }));

        out.into_iter().flatten().collect()
    }

    /// Positions of the canvas and scroll container right now.
    pub fn layout(&self) -> Layout {
        let c = self.canvas.get_bounding_client_rect();
        let s = self.container.get_bounding_client_rect();
        Layout {
            canvas: Rect::new(c.left(), c.top(), c.width(), c.height()),
            container: Rect::new(s.left(), s.top(), s.width(), s.height()),
            scroll: self.scroll(),
        }
    }

    pub fn scroll(&self) -> Point {
        Point::new(
            f64::from(self.container.scroll_left()),
            f64::from(self.container.scroll_top()),
        )
    }

    /// Size the backing store to the template and install it in the core.
    pub fn install_template(&self, image: TemplateImage) -> Result<(), CanvasError> {
        self.canvas.set_width(image.width());
        self.canvas.set_height(image.height());
        let effects = self.core.borrow_mut().load_template(image)?;
        self.apply(effects, None);
        Ok(())
    }

    pub fn apply(&self, effects: Vec<Effect>, event: Option<&Event>) {
        for effect in effects {
            match effect {
                Effect::PreventDefault => {
                    if let Some(e) = event {
                        e.prevent_default();
                    }
                }
                Effect::Repaint(rect) => self.repaint(rect),
                Effect::HistoryChanged { len } => self.set_history.set(len),
                Effect::SetZoom(zoom) => {
                    let pct = format!("{}%", zoom * 100.0);
                    if let Err(e) = self.wrapper.style().set_property("width", &pct) {
                        log::warn!("could not resize canvas wrapper: {e:?}");
                    }
                    self.set_zoom.set(zoom);
                }
                Effect::ScrollTo { to, smooth, next_frame } => {
                    if next_frame {
                        let container = self.container.clone();
                        let cb = Closure::once_into_js(move || scroll_container(&container, to, smooth));
                        if let Some(win) = web_sys::window() {
                            let _ = win.request_animation_frame(cb.unchecked_ref());
                        }
                    } else {
                        scroll_container(&self.container, to, smooth);
                    }
                }
                Effect::DeferStroke { token, delay_ms } => {
                    let host = self.clone();
                    let timer = Timeout::new(delay_ms, move || {
                        let effects = host.core.borrow_mut().resume_deferred_stroke(token);
                        host.apply(effects, None);
                    });
                    *self.pending.borrow_mut() = Some(timer);
                }
            }
        }
    }

    pub fn cancel_pending(&self) {
        self.pending.borrow_mut().take();
    }

    fn repaint(&self, rect: DirtyRect) {
        let core = self.core.borrow();
        let Some(surface) = core.surface() else {
            return;
        };
        let bytes = surface.region(rect);
        match ImageData::new_with_u8_clamped_array_and_sh(Clamped(bytes.as_slice()), rect.width, rect.height) {
            Ok(data) => {
                if let Err(e) = self.ctx.put_image_data(&data, f64::from(rect.x), f64::from(rect.y)) {
                    log::warn!("repaint failed: {e:?}");
                }
            }
            Err(e) => log::warn!("repaint failed: {e:?}"),
        }
    }
}

fn scroll_container(container: &HtmlElement, to: Point, smooth: bool) {
    if smooth {
        let opts = ScrollToOptions::new();
        opts.set_left(to.x);
        opts.set_top(to.y);
        opts.set_behavior(ScrollBehavior::Smooth);
        container.scroll_to_with_scroll_to_options(&opts);
    } else {
        container.set_scroll_left(to.x.round() as i32);
        container.set_scroll_top(to.y.round() as i32);
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, CanvasError> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or(CanvasError::ContextUnavailable)
}

pub fn touch_points(list: &TouchList) -> Vec<Point> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
        .collect()
}

/// Fetch and decode a template image into straight RGBA pixels.
pub async fn load_template_image(url: &str) -> Result<TemplateImage, CanvasError> {
    let load_err = |e: JsValue| CanvasError::TemplateLoad(format!("{url}: {e:?}"));
    let img = HtmlImageElement::new().map_err(load_err)?;
    img.set_cross_origin(Some("anonymous"));

    wait_for_image(&img, url).await.map_err(load_err)?;

    let (width, height) = (img.natural_width(), img.natural_height());
    if width == 0 || height == 0 {
        return Err(CanvasError::EmptyTemplate { width, height });
    }
    log::info!("template {url} decoded at {width}x{height}");

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(CanvasError::ContextUnavailable)?;
    let scratch: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(load_err)?
        .dyn_into()
        .map_err(|_| CanvasError::ContextUnavailable)?;
    scratch.set_width(width);
    scratch.set_height(height);
    let ctx = context_2d(&scratch)?;
    ctx.draw_image_with_html_image_element(&img, 0.0, 0.0).map_err(load_err)?;
    let data = ctx
        .get_image_data(0.0, 0.0, f64::from(width), f64::from(height))
        .map_err(load_err)?;
    TemplateImage::new(width, height, data.data().0)
}

/// Point `img` at `url` and wait for it to load or fail. The handlers live
/// until the image settles and are detached afterwards.
pub async fn wait_for_image(img: &HtmlImageElement, url: &str) -> Result<(), JsValue> {
    let mut handlers = None;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = Closure::once(Box::new(move |_: Event| {
            resolve.call0(&JsValue::NULL).ok();
        }) as Box<dyn FnOnce(_)>);
        let onerror = Closure::once(Box::new(move |_: Event| {
            reject.call1(&JsValue::NULL, &"image failed to load".into()).ok();
        }) as Box<dyn FnOnce(_)>);
        img.set_onload(Some(onload.as_ref().unchecked_ref()));
        img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        handlers = Some((onload, onerror));
    });
    img.set_src(url);
    let settled = wasm_bindgen_futures::JsFuture::from(promise).await;
    img.set_onload(None);
    img.set_onerror(None);
    drop(handlers);
    settled.map(|_| ())
}

/// Encode the canvas as PNG and download it as `file_name`. `done` gets
/// whether a download was triggered.
pub fn export_png(canvas: &HtmlCanvasElement, file_name: String, done: impl FnOnce(bool) + 'static) {
    let on_blob = Closure::once_into_js(move |blob: JsValue| {
        match download_blob(blob, &file_name) {
            Ok(()) => {
                log::info!("exported {file_name}");
                done(true);
            }
            Err(e) => {
                log::error!("{e}");
                done(false);
            }
        }
    });
    if let Err(e) = canvas.to_blob(on_blob.unchecked_ref()) {
        log::error!("{}", CanvasError::Export(format!("{e:?}")));
    }
}

fn download_blob(blob: JsValue, file_name: &str) -> Result<(), CanvasError> {
    let export_err = |e: JsValue| CanvasError::Export(format!("{e:?}"));
    let blob: web_sys::Blob = blob
        .dyn_into()
        .map_err(|_| CanvasError::Export("canvas produced no image".into()))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(export_err)?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| CanvasError::Export("no document".into()))?;
    let a: HtmlAnchorElement = document
        .create_element("a")
        .map_err(export_err)?
        .dyn_into()
        .map_err(|_| CanvasError::Export("anchor cast failed".into()))?;
    a.set_href(&url);
    a.set_download(file_name);
    a.click();
    web_sys::Url::revoke_object_url(&url).ok();
    Ok(())
}
