use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{HtmlCanvasElement, HtmlElement};
use yew::prelude::*;

use super::canvas_host::{self, CanvasHost};
use super::palette_panel::PalettePanel;
use super::toolbar::Toolbar;
use super::zoom_controls::ZoomControls;
use crate::audio::SoundEffect;
use crate::config::CanvasConfig;
use crate::model::{Notice, Template, ToolAction, ToolState};
use crate::state::engine::export_file_name;
use crate::state::{ColoringCore, Effect};
use crate::util::now_ms;

#[derive(Clone, Copy, PartialEq, Debug)]
enum LoadStatus {
    Loading,
    Ready,
    Failed,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ColoringViewProps {
    pub template: Template,
    pub config: CanvasConfig,
    pub on_back: Callback<()>,
    pub on_sound: Callback<SoundEffect>,
    pub on_open_settings: Callback<()>,
}

/// One coloring session. Mount it keyed by template id: the surface and
/// history live exactly as long as the component.
#[function_component]
pub fn ColoringView(props: &ColoringViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let container_ref = use_node_ref();
    let wrapper_ref = use_node_ref();
    let core = {
        let config = props.config.clone();
        use_mut_ref(move || ColoringCore::new(config))
    };
    let host = use_mut_ref(|| None::<CanvasHost>);
    let tools = {
        let c = props.config.clone();
        use_reducer(move || ToolState::new(c.brush_default, c.brush_min, c.brush_max))
    };
    let history_len = use_state(|| 0usize);
    let zoom = use_state(|| 1.0f64);
    let status = use_state(|| LoadStatus::Loading);
    let notice = use_state(|| None::<Notice>);
    let notice_timer = use_mut_ref(|| None::<Timeout>);

    // Keep the core's brush in step with the tool panel
    {
        let core = core.clone();
        use_effect_with((tools.color, tools.brush), move |(color, brush)| {
            core.borrow_mut().set_tool(*color, *brush);
            || ()
        });
    }

    // Mount: wire the DOM, then fetch and install the template
    {
        let canvas_ref = canvas_ref.clone();
        let container_ref = container_ref.clone();
        let wrapper_ref = wrapper_ref.clone();
        let core = core.clone();
        let host_slot = host.clone();
        let set_history = history_len.setter();
        let set_zoom = zoom.setter();
        let status = status.clone();
        let url = props.template.image_url.clone();
        use_effect_with((), move |_| {
            let built = match (
                canvas_ref.cast::<HtmlCanvasElement>(),
                container_ref.cast::<HtmlElement>(),
                wrapper_ref.cast::<HtmlElement>(),
            ) {
                (Some(canvas), Some(container), Some(wrapper)) => {
                    CanvasHost::new(core.clone(), canvas, container, wrapper, set_history, set_zoom)
                        .map_err(|e| e.to_string())
                }
                _ => Err("canvas elements not mounted".to_string()),
            };
            let alive = Rc::new(Cell::new(true));
            let listeners = match built {
                Ok(h) => {
                    let listeners = h.attach_listeners();
                    *host_slot.borrow_mut() = Some(h.clone());
                    let alive = alive.clone();
                    let status = status.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = match canvas_host::load_template_image(&url).await {
                            Ok(image) if alive.get() => h.install_template(image),
                            Ok(_) => return,
                            Err(e) => Err(e),
                        };
                        if !alive.get() {
                            return;
                        }
                        match result {
                            Ok(()) => status.set(LoadStatus::Ready),
                            Err(e) => {
                                log::warn!("could not open template: {e}");
                                status.set(LoadStatus::Failed);
                            }
                        }
                    });
                    listeners
                }
                Err(e) => {
                    log::error!("coloring canvas unavailable: {e}");
                    status.set(LoadStatus::Failed);
                    Vec::new()
                }
            };
            move || {
                alive.set(false);
                drop(listeners);
                if let Some(h) = host_slot.borrow_mut().take() {
                    h.cancel_pending();
                }
                core.borrow_mut().unload();
            }
        });
    }

    // Replacing the timer cancels the previous hide.
    let flash = {
        let notice = notice.clone();
        let timer = notice_timer.clone();
        let ms = props.config.notice_ms;
        Callback::from(move |n: Notice| {
            notice.set(Some(n));
            let hide = notice.setter();
            *timer.borrow_mut() = Some(Timeout::new(ms, move || hide.set(None)));
        })
    };

    let core_action = {
        let host = host.clone();
        let on_sound = props.on_sound.clone();
        let flash = flash.clone();
        move |f: fn(&mut ColoringCore) -> Vec<Effect>, done: Option<Notice>| {
            let host = host.clone();
            let on_sound = on_sound.clone();
            let flash = flash.clone();
            Callback::from(move |_: ()| {
                on_sound.emit(SoundEffect::TapClick);
                let h = host.borrow().clone();
                if let Some(h) = h {
                    let effects = f(&mut h.core.borrow_mut());
                    let shown = done.filter(|_| !effects.is_empty());
                    h.apply(effects, None);
                    if let Some(n) = shown {
                        flash.emit(n);
                    }
                }
            })
        }
    };
    let on_undo = core_action(ColoringCore::undo, None);
    let on_clear = core_action(ColoringCore::clear, Some(Notice::Cleared));
    let on_zoom_in = core_action(ColoringCore::zoom_in, None);
    let on_zoom_out = core_action(ColoringCore::zoom_out, None);

    let on_export = {
        let host = host.clone();
        let on_sound = props.on_sound.clone();
        let flash = flash.clone();
        Callback::from(move |_: ()| {
            on_sound.emit(SoundEffect::TapClick);
            let Some(h) = host.borrow().clone() else {
                return;
            };
            if !h.core.borrow().is_loaded() {
                return;
            }
            let name = export_file_name(now_ms() as u64);
            let on_sound = on_sound.clone();
            let flash = flash.clone();
            canvas_host::export_png(&h.canvas, name, move |ok| {
                if ok {
                    on_sound.emit(SoundEffect::Celebration);
                    flash.emit(Notice::Downloaded);
                } else {
                    flash.emit(Notice::DownloadFailed);
                }
            });
        })
    };
    let on_back = {
        let cb = props.on_back.clone();
        let on_sound = props.on_sound.clone();
        Callback::from(move |_: ()| {
            on_sound.emit(SoundEffect::TapClick);
            cb.emit(());
        })
    };
    let on_select = {
        let tools = tools.clone();
        let on_sound = props.on_sound.clone();
        Callback::from(move |c| {
            on_sound.emit(SoundEffect::TapClick);
            tools.dispatch(ToolAction::SelectColor(c));
        })
    };
    let on_brush = {
        let tools = tools.clone();
        Callback::from(move |px| tools.dispatch(ToolAction::SetBrush(px)))
    };

    let (brush_min, brush_max) = tools.brush_range();
    // `zoom` and `history_len` only trigger re-renders; the core owns the values.
    let percent = core.borrow().view().zoom_percent();
    let ready = *status == LoadStatus::Ready;
    let overlay = match *status {
        LoadStatus::Loading => html! { <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; font-weight:600;">{"Loading…"}</div> },
        LoadStatus::Failed => html! { <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; font-weight:600; color:#e63946;">{"This picture could not be loaded."}</div> },
        LoadStatus::Ready => html! {},
    };
    let notice_line = match *notice {
        Some(n) => {
            let color = if n.is_error() { "#e63946" } else { "#2a9d8f" };
            html! { <div role="status" style={format!("align-self:center; padding:6px 14px; border-radius:999px; background:#fff; border:3px solid {color}; color:{color}; font-weight:600;")}>{ n.text() }</div> }
        }
        None => html! {},
    };

    html! {<div style="display:flex; flex-direction:column; gap:12px; max-width:1280px; margin:0 auto;">
        <Toolbar
            title={props.template.name.clone()}
            can_undo={core.borrow().can_undo()}
            {ready}
            {on_back}
            {on_undo}
            {on_clear}
            {on_export}
            on_open_settings={props.on_open_settings.clone()}
        />
        { notice_line }
        <div style="display:flex; gap:16px; flex-wrap:wrap; align-items:flex-start;">
            <div style="flex:1 1 200px; max-width:280px; background:#fff; border:4px solid #ff006e; border-radius:12px; padding:14px; display:flex; flex-direction:column; gap:18px;">
                <PalettePanel
                    selected={tools.color}
                    {on_select}
                    brush={tools.brush.diameter()}
                    {brush_min}
                    {brush_max}
                    {on_brush}
                />
                <ZoomControls {percent} {on_zoom_in} {on_zoom_out} />
            </div>
            <div style="flex:3 1 400px; background:#fff; border:4px solid #f77f00; border-radius:12px; padding:14px;">
                <div ref={container_ref} style="position:relative; overflow:auto; max-height:70vh; background:#f3f4f6; border:4px solid #e5e7eb; border-radius:8px; touch-action:none;">
                    <div ref={wrapper_ref} style="width:100%;">
                        <canvas ref={canvas_ref} style="display:block; width:100%; height:auto; cursor:crosshair; background:#fff;" />
                    </div>
                    { overlay }
                </div>
            </div>
        </div>
    </div>}
}
