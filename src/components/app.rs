use super::{coloring_view::ColoringView, sound_settings::SoundSettings, template_picker::TemplatePicker};
use crate::audio::{AudioService, BackgroundTrack, MUSIC_MUTED_KEY, SFX_MUTED_KEY, SoundEffect};
use crate::config::CanvasConfig;
use crate::model::{AgeGroup, Template};
use crate::util::{load_flag, load_str, store_flag, store_str};
use yew::prelude::*;

const AGE_GROUP_KEY: &str = "cc_setting_age_group";

#[derive(PartialEq, Clone)]
enum View {
    Picker,
    Coloring(Template),
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Picker);
    let config = use_state(CanvasConfig::load);
    let audio = use_mut_ref(AudioService::from_window);
    let show_settings = use_state(|| false);
    let sfx_muted = use_state(|| load_flag(SFX_MUTED_KEY));
    let music_muted = use_state(|| load_flag(MUSIC_MUTED_KEY));
    let track = use_state(BackgroundTrack::load);
    let age_group = use_state(|| {
        load_str(AGE_GROUP_KEY)
            .and_then(|raw| AgeGroup::from_label(&raw))
            .unwrap_or(AgeGroup::Toddler)
    });

    // Background music follows the mute flag and the chosen track
    {
        let audio = audio.clone();
        use_effect_with((*music_muted, *track), move |(muted, track)| {
            let mut a = audio.borrow_mut();
            a.set_music_muted(*muted);
            if !*muted {
                a.start_background(*track);
            }
            || ()
        });
    }

    let on_sound = {
        let audio = audio.clone();
        Callback::from(move |s: SoundEffect| audio.borrow_mut().play(s))
    };
    let on_toggle_sfx = {
        let sfx_muted = sfx_muted.clone();
        let audio = audio.clone();
        Callback::from(move |_: ()| {
            let next = !*sfx_muted;
            store_flag(SFX_MUTED_KEY, next);
            audio.borrow_mut().set_sfx_muted(next);
            sfx_muted.set(next);
        })
    };
    let on_toggle_music = {
        let music_muted = music_muted.clone();
        Callback::from(move |_: ()| {
            let next = !*music_muted;
            store_flag(MUSIC_MUTED_KEY, next);
            music_muted.set(next);
        })
    };
    let on_select_track = {
        let track = track.clone();
        Callback::from(move |t: BackgroundTrack| {
            t.store();
            track.set(t);
        })
    };
    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_: ()| show_settings.set(true))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_: ()| show_settings.set(false))
    };
    let on_age_group = {
        let age_group = age_group.clone();
        let on_sound = on_sound.clone();
        Callback::from(move |g: AgeGroup| {
            on_sound.emit(SoundEffect::TapClick);
            store_str(AGE_GROUP_KEY, g.label());
            age_group.set(g);
        })
    };
    let on_pick = {
        let view = view.clone();
        let on_sound = on_sound.clone();
        Callback::from(move |t: Template| {
            on_sound.emit(SoundEffect::TapClick);
            log::info!("opening template {}", t.id);
            view.set(View::Coloring(t));
        })
    };
    let to_picker = {
        let view = view.clone();
        Callback::from(move |_: ()| view.set(View::Picker))
    };

    let body = match &*view {
        View::Picker => html! {
            <div style="display:flex; flex-direction:column; gap:12px; max-width:1280px; margin:0 auto;">
                <div style="display:flex; justify-content:space-between; align-items:center;">
                    <h1 style="margin:0; font-size:26px;">{"Coloring"}</h1>
                    <button onclick={{ let cb = open_settings.clone(); Callback::from(move |_| cb.emit(())) }}>{"Sound"}</button>
                </div>
                <TemplatePicker age_group={*age_group} {on_age_group} {on_pick} />
            </div>
        },
        View::Coloring(t) => html! {
            <ColoringView
                key={t.id.clone()}
                template={t.clone()}
                config={(*config).clone()}
                on_back={to_picker}
                {on_sound}
                on_open_settings={open_settings.clone()}
            />
        },
    };

    html! {<div style="min-height:100vh; padding:16px; box-sizing:border-box; font-family:sans-serif; background:linear-gradient(135deg,#fff3e0,#e0f7fa); color:#222;">
        { body }
        <SoundSettings
            show={*show_settings}
            on_close={close_settings}
            sfx_muted={*sfx_muted}
            {on_toggle_sfx}
            music_muted={*music_muted}
            {on_toggle_music}
            track={*track}
            {on_select_track}
        />
    </div>}
}
