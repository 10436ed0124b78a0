use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ToolbarProps {
    pub title: String,
    pub can_undo: bool,
    pub ready: bool,
    pub on_back: Callback<()>,
    pub on_undo: Callback<()>,
    pub on_clear: Callback<()>,
    pub on_export: Callback<()>,
    pub on_open_settings: Callback<()>,
}

#[function_component]
pub fn Toolbar(props: &ToolbarProps) -> Html {
    let back_cb = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let undo_cb = {
        let cb = props.on_undo.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let export_cb = {
        let cb = props.on_export.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let settings_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="display:flex; align-items:center; justify-content:space-between; flex-wrap:wrap; gap:8px; padding:8px 0;">
        <div style="display:flex; align-items:center; gap:10px;">
            <button onclick={back_cb}>{"← Back"}</button>
            <h2 style="margin:0; font-size:20px;">{ props.title.clone() }</h2>
        </div>
        <div style="display:flex; gap:6px; flex-wrap:wrap;">
            <button onclick={undo_cb} disabled={!props.ready || !props.can_undo}>{"Undo"}</button>
            <button onclick={clear_cb} disabled={!props.ready}>{"Clear"}</button>
            <button onclick={export_cb} disabled={!props.ready}>{"Download"}</button>
            <button onclick={settings_cb}>{"Sound"}</button>
        </div>
    </div>}
}
