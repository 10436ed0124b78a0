//! Tunables for the coloring canvas.
//!
//! Defaults match the shipped product. A JSON override can be stored under
//! [`CONFIG_STORAGE_KEY`] in `localStorage`; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::CanvasError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const CONFIG_STORAGE_KEY: &str = "cc_canvas_config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Maximum number of raster snapshots kept for undo.
    pub history_cap: usize,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Increment applied by the zoom buttons.
    pub zoom_step: f64,
    pub double_tap_window_ms: f64,
    /// Maximum distance (CSS px) between the two taps of a double-tap.
    pub double_tap_radius_px: f64,
    /// Zoom level a double-tap toggles to from the unzoomed state.
    pub double_tap_zoom: f64,
    /// Delay before a single-finger touch turns into a stroke.
    pub stroke_defer_ms: u32,
    pub brush_min: u32,
    pub brush_max: u32,
    pub brush_default: u32,
    /// How long a toolbar notice stays up.
    pub notice_ms: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            history_cap: 20,
            min_zoom: 0.5,
            max_zoom: 3.0,
            zoom_step: 0.2,
            double_tap_window_ms: 300.0,
            double_tap_radius_px: 50.0,
            double_tap_zoom: 1.8,
            stroke_defer_ms: 50,
            brush_min: 5,
            brush_max: 50,
            brush_default: 20,
            notice_ms: 2500,
        }
    }
}

impl CanvasConfig {
    /// Parse a JSON override and validate it.
    pub fn from_json(raw: &str) -> Result<Self, CanvasError> {
        let cfg: CanvasConfig =
            serde_json::from_str(raw).map_err(|e| CanvasError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), CanvasError> {
        if self.history_cap == 0 {
            return Err(CanvasError::InvalidConfig("history_cap must be at least 1".into()));
        }
        if !(self.min_zoom > 0.0 && self.min_zoom <= 1.0 && self.max_zoom >= 1.0) {
            return Err(CanvasError::InvalidConfig(format!(
                "zoom range {}..{} must contain 1.0 and be positive",
                self.min_zoom, self.max_zoom
            )));
        }
        if !(self.zoom_step > 0.0) {
            return Err(CanvasError::InvalidConfig("zoom_step must be positive".into()));
        }
        if self.double_tap_zoom < self.min_zoom || self.double_tap_zoom > self.max_zoom {
            return Err(CanvasError::InvalidConfig(format!(
                "double_tap_zoom {} outside zoom range",
                self.double_tap_zoom
            )));
        }
        if self.brush_min == 0
            || self.brush_min > self.brush_max
            || !(self.brush_min..=self.brush_max).contains(&self.brush_default)
        {
            return Err(CanvasError::InvalidConfig(format!(
                "brush range {}..={} with default {} is invalid",
                self.brush_min, self.brush_max, self.brush_default
            )));
        }
        Ok(())
    }

    /// Load the override from `localStorage`, falling back to defaults.
    pub fn load() -> Self {
        match crate::util::load_str(CONFIG_STORAGE_KEY) {
            Some(raw) => match Self::from_json(&raw) {
                Ok(cfg) => {
                    log::info!("canvas config loaded from {}", CONFIG_STORAGE_KEY);
                    cfg
                }
                Err(e) => {
                    log::warn!("ignoring stored canvas config: {e}");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}
