// src/resolver.rs - Deterministic ThemeConfig -> design token resolution

use crate::config::{FontSizes, ThemeConfig};
use crate::registry::{BASELINE_COLOR, BASELINE_FONT_STACK};
use crate::sink::TokenSink;

pub const TOKEN_COLOR_PRIMARY: &str = "color.primary";
pub const TOKEN_COLOR_SECONDARY: &str = "color.secondary";
pub const TOKEN_COLOR_ACCENT: &str = "color.accent";
pub const TOKEN_GRADIENT: &str = "gradient";
pub const TOKEN_FONT_FAMILY: &str = "font.family";

/// Flat map of concrete rendering values, derived from a `ThemeConfig`.
/// Never persisted; recomputed from config whenever needed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTokens {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    /// Absent when no gradient is selected. Absence is meaningful to the
    /// rendering layer (a gradient button only shows when present), so this
    /// is an `Option`, never an empty string.
    pub gradient: Option<String>,
    pub font: String,
    pub sizes: FontSizes,
}

impl ResolvedTokens {
    /// Write every token to the sink in one synchronous pass so the
    /// rendering layer never observes a half-applied theme. The gradient
    /// key is removed outright when absent.
    pub fn apply_to(&self, sink: &mut dyn TokenSink) {
        sink.set(TOKEN_COLOR_PRIMARY, &self.primary);
        sink.set(TOKEN_COLOR_SECONDARY, &self.secondary);
        sink.set(TOKEN_COLOR_ACCENT, &self.accent);
        match &self.gradient {
            Some(gradient) => sink.set(TOKEN_GRADIENT, gradient),
            None => sink.remove(TOKEN_GRADIENT),
        }
        sink.set(TOKEN_FONT_FAMILY, &self.font);
        for (tier, value) in crate::config::SIZE_TIERS.iter().zip(self.sizes.as_array()) {
            sink.set(&format!("font.size.{}", tier), &format!("{}px", value));
        }
    }
}

/// Resolve a config into concrete tokens. Pure and total: null or
/// unrecognized selections fall back to the baseline, out-of-range sizes
/// are clamped, and the caller is never notified of either.
pub fn resolve(config: &ThemeConfig) -> ResolvedTokens {
    let swatch = config.color.unwrap_or(BASELINE_COLOR).swatch();

    let font = if config.font.trim().is_empty() {
        BASELINE_FONT_STACK.to_string()
    } else {
        config.font.clone()
    };

    ResolvedTokens {
        primary: swatch.primary.to_string(),
        secondary: swatch.secondary.to_string(),
        accent: swatch.accent.to_string(),
        gradient: config.gradient.map(|key| key.gradient().to_string()),
        font,
        sizes: normalize_sizes(&config.font_sizes),
    }
}

/// Clamp each tier into its documented range, then raise each tier to at
/// least the previous one so the scale stays non-decreasing. Idempotent.
fn normalize_sizes(sizes: &FontSizes) -> FontSizes {
    let mut values = sizes.as_array();
    for (value, (min, max)) in values.iter_mut().zip(FontSizes::RANGES) {
        *value = value.clamp(min, max);
    }
    for i in 1..values.len() {
        if values[i] < values[i - 1] {
            values[i] = values[i - 1];
        }
    }
    FontSizes::from_array(values)
}
