use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::model::{Rgba, palette};

#[derive(Properties, PartialEq, Clone)]
pub struct PalettePanelProps {
    pub selected: Rgba,
    pub on_select: Callback<Rgba>,
    pub brush: u32,
    pub brush_min: u32,
    pub brush_max: u32,
    pub on_brush: Callback<u32>,
}

#[function_component]
pub fn PalettePanel(props: &PalettePanelProps) -> Html {
    let swatches = palette().into_iter().map(|c| {
        let cb = props.on_select.clone();
        let onclick = Callback::from(move |_| cb.emit(c));
        let border = if c == props.selected { "3px solid #222" } else { "3px solid transparent" };
        let scale = if c == props.selected { "transform:scale(1.1);" } else { "" };
        html! {
            <button
                key={c.to_hex()}
                title={c.to_hex()}
                {onclick}
                style={format!("background:{}; border:{}; {} aspect-ratio:1; border-radius:8px; cursor:pointer; padding:0;", c.to_hex(), border, scale)}
            />
        }
    });
    let brush_cb = {
        let cb = props.on_brush.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(px) = input.value().parse::<u32>() {
                cb.emit(px);
            }
        })
    };
    html! {<div style="display:flex; flex-direction:column; gap:14px;">
        <div>
            <h3 style="margin:0 0 8px 0; font-size:16px;">{"Colors"}</h3>
            <div style="display:grid; grid-template-columns:repeat(5, 1fr); gap:6px;">
                { for swatches }
            </div>
        </div>
        <div>
            <h3 style="margin:0 0 8px 0; font-size:16px;">{"Brush Size"}</h3>
            <input
                type="range"
                style="width:100%;"
                min={props.brush_min.to_string()}
                max={props.brush_max.to_string()}
                value={props.brush.to_string()}
                oninput={brush_cb}
            />
            <div style="text-align:center; font-weight:600;">{ format!("{}px", props.brush) }</div>
        </div>
    </div>}
}
