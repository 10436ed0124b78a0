use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomControlsProps {
    pub percent: u32,
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
}

#[function_component(ZoomControls)]
pub fn zoom_controls(props: &ZoomControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="display:flex; flex-direction:column; gap:6px;">
        <h3 style="margin:0; font-size:16px;">{"Zoom"}</h3>
        <div style="display:flex; gap:6px;">
            <button style="flex:1;" onclick={zo}> {"-"} </button>
            <button style="flex:1;" onclick={zi}> {"+"} </button>
        </div>
        <div style="text-align:center; font-weight:600;">{ format!("{}%", props.percent) }</div>
    </div>}
}
