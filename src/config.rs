// src/config.rs - ThemeConfig value types, preview patches, and the JSON wire format

use crate::registry::{ColorKey, GradientKey, BASELINE_FONT_STACK};
use serde::{Deserialize, Deserializer, Serialize};

/// Type-scale tier names, smallest first. Order matters: the resolver
/// normalizes sizes so each tier is at least as large as the previous one.
pub const SIZE_TIERS: [&str; 8] = ["sm", "base", "lg", "xl", "xl2", "xl3", "xl4", "xl5"];

/// Font sizes per tier, in px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub sm: f32,
    pub base: f32,
    pub lg: f32,
    pub xl: f32,
    pub xl2: f32,
    pub xl3: f32,
    pub xl4: f32,
    pub xl5: f32,
}

impl FontSizes {
    /// Allowed [min, max] range per tier, indexed like `SIZE_TIERS`.
    pub const RANGES: [(f32, f32); 8] = [
        (10.0, 18.0), // sm
        (14.0, 20.0), // base
        (16.0, 24.0), // lg
        (18.0, 28.0), // xl
        (20.0, 34.0), // xl2
        (24.0, 42.0), // xl3
        (28.0, 52.0), // xl4
        (32.0, 64.0), // xl5
    ];

    pub fn as_array(&self) -> [f32; 8] {
        [
            self.sm, self.base, self.lg, self.xl, self.xl2, self.xl3, self.xl4, self.xl5,
        ]
    }

    pub fn from_array(values: [f32; 8]) -> Self {
        Self {
            sm: values[0],
            base: values[1],
            lg: values[2],
            xl: values[3],
            xl2: values[4],
            xl3: values[5],
            xl4: values[6],
            xl5: values[7],
        }
    }
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            sm: 14.0,
            base: 16.0,
            lg: 18.0,
            xl: 20.0,
            xl2: 24.0,
            xl3: 30.0,
            xl4: 36.0,
            xl5: 48.0,
        }
    }
}

/// The authoritative, serializable description of a visual identity.
///
/// `color` and `gradient` are independent and both nullable; `None` means
/// no override, use the baseline. Wire format:
/// `{ "color": string|null, "gradient": string|null, "font": string,
///    "fontSizes": { "sm": .., "base": .., ... } }`
/// Unrecognized color/gradient strings deserialize to `None` instead of
/// failing, so stale persisted files from older catalogs still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default, deserialize_with = "lenient_color_key")]
    pub color: Option<ColorKey>,
    #[serde(default, deserialize_with = "lenient_gradient_key")]
    pub gradient: Option<GradientKey>,
    #[serde(default = "default_font_stack")]
    pub font: String,
    #[serde(rename = "fontSizes", default)]
    pub font_sizes: FontSizes,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            color: Some(crate::registry::BASELINE_COLOR),
            gradient: None,
            font: BASELINE_FONT_STACK.to_string(),
            font_sizes: FontSizes::default(),
        }
    }
}

impl ThemeConfig {
    /// Total shallow merge: fields present in the patch win, everything
    /// else is inherited from `self`.
    pub fn merged(&self, patch: &PreviewPatch) -> ThemeConfig {
        ThemeConfig {
            color: patch.color.or(self.color),
            gradient: patch.gradient.or(self.gradient),
            font: patch.font.clone().unwrap_or_else(|| self.font.clone()),
            font_sizes: patch.font_sizes.unwrap_or(self.font_sizes),
        }
    }
}

/// A partial edit layered on top of the committed config during preview.
/// Patches are additive: an unset field leaves the committed value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewPatch {
    pub color: Option<ColorKey>,
    pub gradient: Option<GradientKey>,
    pub font: Option<String>,
    pub font_sizes: Option<FontSizes>,
}

impl PreviewPatch {
    /// Fold a later patch into this one, last write wins per field.
    pub fn absorb(&mut self, later: PreviewPatch) {
        if later.color.is_some() {
            self.color = later.color;
        }
        if later.gradient.is_some() {
            self.gradient = later.gradient;
        }
        if later.font.is_some() {
            self.font = later.font;
        }
        if later.font_sizes.is_some() {
            self.font_sizes = later.font_sizes;
        }
    }

    /// A patch that stages every field of `config`, used when a saved
    /// custom theme is loaded for further editing.
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            color: config.color,
            gradient: config.gradient,
            font: Some(config.font.clone()),
            font_sizes: Some(config.font_sizes),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.gradient.is_none()
            && self.font.is_none()
            && self.font_sizes.is_none()
    }
}

fn default_font_stack() -> String {
    BASELINE_FONT_STACK.to_string()
}

fn lenient_color_key<'de, D>(deserializer: D) -> Result<Option<ColorKey>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(ColorKey::parse))
}

fn lenient_gradient_key<'de, D>(deserializer: D) -> Result<Option<GradientKey>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(GradientKey::parse))
}
