//! Sound effects and background music.
//!
//! Playback is delegated to whatever native bridge the hosting WebView
//! exposes. Both bridge objects are optional and probed at call time, so
//! the app runs silently in a plain browser.

use std::collections::HashSet;

use wasm_bindgen::{JsCast, JsValue};

#[cfg(test)]
#[path = "audio_test.rs"]
mod audio_test;

pub const MUSIC_MUTED_KEY: &str = "cc_setting_music_muted";
pub const SFX_MUTED_KEY: &str = "cc_setting_sfx_muted";
pub const BACKGROUND_TRACK_KEY: &str = "cc_setting_background_track";

/// One-shot effects the coloring screens use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    TapClick,
    Celebration,
}

impl SoundEffect {
    /// Resource name on the native side (no extension).
    pub fn id(self) -> &'static str {
        match self {
            SoundEffect::TapClick => "tap_click",
            SoundEffect::Celebration => "celebration",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackgroundTrack {
    #[default]
    PlayfulMelody,
    HappyAdventure,
    GentleWonder,
    CheerfulExploration,
    MagicalJourney,
    SunnyPlayground,
    DreamyClouds,
    CuriousDiscovery,
}

impl BackgroundTrack {
    pub const ALL: [BackgroundTrack; 8] = [
        BackgroundTrack::PlayfulMelody,
        BackgroundTrack::HappyAdventure,
        BackgroundTrack::GentleWonder,
        BackgroundTrack::CheerfulExploration,
        BackgroundTrack::MagicalJourney,
        BackgroundTrack::SunnyPlayground,
        BackgroundTrack::DreamyClouds,
        BackgroundTrack::CuriousDiscovery,
    ];

    pub fn id(self) -> &'static str {
        match self {
            BackgroundTrack::PlayfulMelody => "bg_playful_melody",
            BackgroundTrack::HappyAdventure => "bg_happy_adventure",
            BackgroundTrack::GentleWonder => "bg_gentle_wonder",
            BackgroundTrack::CheerfulExploration => "bg_cheerful_exploration",
            BackgroundTrack::MagicalJourney => "bg_magical_journey",
            BackgroundTrack::SunnyPlayground => "bg_sunny_playground",
            BackgroundTrack::DreamyClouds => "bg_dreamy_clouds",
            BackgroundTrack::CuriousDiscovery => "bg_curious_discovery",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BackgroundTrack::PlayfulMelody => "Playful Melody",
            BackgroundTrack::HappyAdventure => "Happy Adventure",
            BackgroundTrack::GentleWonder => "Gentle Wonder",
            BackgroundTrack::CheerfulExploration => "Cheerful Exploration",
            BackgroundTrack::MagicalJourney => "Magical Journey",
            BackgroundTrack::SunnyPlayground => "Sunny Playground",
            BackgroundTrack::DreamyClouds => "Dreamy Clouds",
            BackgroundTrack::CuriousDiscovery => "Curious Discovery",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    /// A stored id, or the default when it is missing or unknown.
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored.map(|id| (id, Self::from_id(id))) {
            Some((_, Some(track))) => track,
            Some((id, None)) => {
                log::warn!("unknown background track {id}, using default");
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// The saved choice from `localStorage`.
    pub fn load() -> Self {
        Self::from_stored(crate::util::load_str(BACKGROUND_TRACK_KEY).as_deref())
    }

    pub fn store(self) {
        crate::util::store_str(BACKGROUND_TRACK_KEY, self.id());
    }
}

/// Native playback capabilities. Each call reports whether the capability
/// was present; a missing capability is not an error.
pub trait AudioBridge {
    fn play_sound(&self, id: &str) -> bool;
    fn start_background(&self, id: &str) -> bool;
    fn stop_background(&self) -> bool;
}

impl<B: AudioBridge + ?Sized> AudioBridge for Box<B> {
    fn play_sound(&self, id: &str) -> bool {
        (**self).play_sound(id)
    }

    fn start_background(&self, id: &str) -> bool {
        (**self).start_background(id)
    }

    fn stop_background(&self) -> bool {
        (**self).stop_background()
    }
}

/// Bridge for environments with no native audio.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopBridge;

impl AudioBridge for NoopBridge {
    fn play_sound(&self, _id: &str) -> bool {
        false
    }

    fn start_background(&self, _id: &str) -> bool {
        false
    }

    fn stop_background(&self) -> bool {
        false
    }
}

/// Probes `window.AndroidAudio` and `window.BackgroundAudio`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowBridge;

impl WindowBridge {
    /// Whether the page was given either bridge object.
    pub fn is_present() -> bool {
        let Some(win) = web_sys::window() else {
            return false;
        };
        ["AndroidAudio", "BackgroundAudio"].into_iter().any(|name| {
            js_sys::Reflect::get(&win, &JsValue::from_str(name)).is_ok_and(|v| v.is_object())
        })
    }

    /// `window[object][method]` if both exist and the latter is callable.
    fn method(object: &str, method: &str) -> Option<(JsValue, js_sys::Function)> {
        let win = web_sys::window()?;
        let target = js_sys::Reflect::get(&win, &JsValue::from_str(object)).ok()?;
        if !target.is_object() {
            return None;
        }
        let f = js_sys::Reflect::get(&target, &JsValue::from_str(method)).ok()?;
        let f = f.dyn_into::<js_sys::Function>().ok()?;
        Some((target, f))
    }

    fn call(object: &str, method: &str, arg: Option<&str>) -> bool {
        let Some((this, f)) = Self::method(object, method) else {
            return false;
        };
        let res = match arg {
            Some(a) => f.call1(&this, &JsValue::from_str(a)),
            None => f.call0(&this),
        };
        if let Err(e) = res {
            log::warn!("{object}.{method} threw: {e:?}");
        }
        true
    }
}

impl AudioBridge for WindowBridge {
    fn play_sound(&self, id: &str) -> bool {
        Self::call("AndroidAudio", "playSound", Some(id))
    }

    fn start_background(&self, id: &str) -> bool {
        Self::call("BackgroundAudio", "start", Some(id))
    }

    fn stop_background(&self) -> bool {
        // Older bridges only expose pause.
        let paused = Self::call("BackgroundAudio", "pause", None);
        let stopped = Self::call("BackgroundAudio", "stop", None);
        paused || stopped
    }
}

/// Mute flags, current track and warn-once bookkeeping around a bridge.
pub struct AudioService<B: AudioBridge> {
    bridge: B,
    sfx_muted: bool,
    music_muted: bool,
    current: Option<BackgroundTrack>,
    warned: HashSet<String>,
}

impl<B: AudioBridge> AudioService<B> {
    pub fn new(bridge: B, sfx_muted: bool, music_muted: bool) -> Self {
        Self { bridge, sfx_muted, music_muted, current: None, warned: HashSet::new() }
    }

    pub fn play(&mut self, sound: SoundEffect) {
        if self.sfx_muted {
            return;
        }
        if !self.bridge.play_sound(sound.id()) {
            self.warn_once(sound.id(), "no sound effect bridge");
        }
    }

    /// Start looping `track`. A no-op when the same track is already
    /// playing; stops music instead when music is muted.
    pub fn start_background(&mut self, track: BackgroundTrack) {
        if self.music_muted {
            self.stop_background();
            return;
        }
        if self.current == Some(track) {
            return;
        }
        self.current = Some(track);
        if !self.bridge.start_background(track.id()) {
            self.warn_once(track.id(), "no background music bridge");
        }
    }

    pub fn stop_background(&mut self) {
        self.current = None;
        self.bridge.stop_background();
    }

    pub fn set_sfx_muted(&mut self, muted: bool) {
        self.sfx_muted = muted;
    }

    pub fn set_music_muted(&mut self, muted: bool) {
        self.music_muted = muted;
        if muted {
            self.stop_background();
        }
    }

    fn warn_once(&mut self, id: &str, what: &str) {
        if self.warned.insert(id.to_string()) {
            log::warn!("{what}: {id}");
        }
    }
}

impl AudioService<Box<dyn AudioBridge>> {
    /// Service backed by the window bridges when the host provides them,
    /// with mute flags restored from `localStorage`.
    pub fn from_window() -> Self {
        let bridge: Box<dyn AudioBridge> = if WindowBridge::is_present() {
            Box::new(WindowBridge)
        } else {
            log::info!("no native audio bridge, sounds disabled");
            Box::new(NoopBridge)
        };
        let sfx = crate::util::load_flag(SFX_MUTED_KEY);
        let music = crate::util::load_flag(MUSIC_MUTED_KEY);
        Self::new(bridge, sfx, music)
    }
}
