use yew::prelude::*;

use crate::audio::BackgroundTrack;

#[derive(Properties, PartialEq, Clone)]
pub struct SoundSettingsProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub sfx_muted: bool,
    pub on_toggle_sfx: Callback<()>,
    pub music_muted: bool,
    pub on_toggle_music: Callback<()>,
    pub track: BackgroundTrack,
    pub on_select_track: Callback<BackgroundTrack>,
}

#[function_component]
pub fn SoundSettings(props: &SoundSettingsProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_sfx_cb = {
        let cb = props.on_toggle_sfx.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_music_cb = {
        let cb = props.on_toggle_music.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let tracks = BackgroundTrack::ALL.into_iter().map(|t| {
        let cb = props.on_select_track.clone();
        let selected = t == props.track;
        let weight = if selected { "700" } else { "400" };
        html! {
            <label key={t.id()} style={format!("display:flex; align-items:center; gap:8px; cursor:pointer; font-weight:{weight};")}>
                <input
                    type="radio"
                    name="background-track"
                    checked={selected}
                    disabled={props.music_muted}
                    onclick={Callback::from(move |_| cb.emit(t))}
                />
                <span>{ t.label() }</span>
            </label>
        }
    });

    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#fff; border:4px solid #bb8fce; border-radius:12px; padding:16px 20px; min-width:280px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Sound"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                <input type="checkbox" checked={!props.sfx_muted} onclick={toggle_sfx_cb} />
                <span>{"Sound Effects"}</span>
            </label>
            <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                <input type="checkbox" checked={!props.music_muted} onclick={toggle_music_cb} />
                <span>{"Background Music"}</span>
            </label>
            <div style="display:flex; flex-direction:column; gap:6px; padding-left:12px;">{ for tracks }</div>
            <button onclick={close_cb}>{"Done"}</button>
        </div>
    </div>}
}
