//! Core data models for the coloring app: colors, palette, brush, age groups,
//! templates and the tool-panel reducer.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::error::CanvasError;

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(hex: &str) -> Result<Self, CanvasError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let bad = || CanvasError::InvalidColor(hex.to_string());
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| bad());
        let a = if digits.len() == 8 { byte(6)? } else { 255 };
        Ok(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a })
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// The 20 fixed swatches offered in the tool panel.
pub const PALETTE: [&str; 20] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8", "#F7DC6F", "#BB8FCE", "#85C1E2",
    "#F8B739", "#52B788", "#E63946", "#F77F00", "#06FFA5", "#118AB2", "#073B4C", "#FFD60A",
    "#FF006E", "#8338EC", "#3A86FF", "#FB5607",
];

pub fn palette() -> Vec<Rgba> {
    PALETTE.iter().filter_map(|hex| Rgba::from_hex(hex).ok()).collect()
}

/// Brush diameter in canvas pixels, always inside the configured range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrushSize(u32);

impl BrushSize {
    pub fn new(px: u32, min: u32, max: u32) -> Self {
        Self(px.clamp(min, max))
    }

    pub fn diameter(self) -> u32 {
        self.0
    }

    pub fn radius(self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "3-5")]
    Toddler,
    #[serde(rename = "6-8")]
    EarlyReader,
    #[serde(rename = "9-12")]
    Preteen,
    #[serde(rename = "13-15")]
    Teen,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::Toddler,
        AgeGroup::EarlyReader,
        AgeGroup::Preteen,
        AgeGroup::Teen,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::Toddler => "3-5",
            AgeGroup::EarlyReader => "6-8",
            AgeGroup::Preteen => "9-12",
            AgeGroup::Teen => "13-15",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.label() == label)
    }
}

/// A coloring template: an outline image the user fills in. Read-only input
/// to a canvas session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub age_group: AgeGroup,
}

/// Short-lived message shown under the toolbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Cleared,
    Downloaded,
    DownloadFailed,
}

impl Notice {
    pub fn text(self) -> &'static str {
        match self {
            Notice::Cleared => "Canvas cleared!",
            Notice::Downloaded => "Downloaded successfully!",
            Notice::DownloadFailed => "Download failed.",
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, Notice::DownloadFailed)
    }
}

/// Tool-panel state: selected swatch and brush diameter.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolState {
    pub color: Rgba,
    pub brush: BrushSize,
    brush_min: u32,
    brush_max: u32,
}

pub enum ToolAction {
    SelectColor(Rgba),
    SetBrush(u32),
}

impl ToolState {
    pub fn new(brush_default: u32, brush_min: u32, brush_max: u32) -> Self {
        Self {
            color: palette().first().copied().unwrap_or(Rgba::opaque(0, 0, 0)),
            brush: BrushSize::new(brush_default, brush_min, brush_max),
            brush_min,
            brush_max,
        }
    }

    pub fn brush_range(&self) -> (u32, u32) {
        (self.brush_min, self.brush_max)
    }
}

impl Reducible for ToolState {
    type Action = ToolAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            ToolAction::SelectColor(c) => new.color = c,
            ToolAction::SetBrush(px) => new.brush = BrushSize::new(px, new.brush_min, new.brush_max),
        }
        Rc::new(new)
    }
}
