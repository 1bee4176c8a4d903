// src/registry.rs - Static catalog of selectable theme keys and their token values

use serde::{Deserialize, Serialize};

/// Solid color scheme keys selectable by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKey {
    Red,
    Orange,
    Green,
    Teal,
    Blue,
    Purple,
    Mono,
}

/// Gradient theme keys selectable by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKey {
    Sunset,
    Ocean,
    Aurora,
    Fire,
    Forest,
    Royal,
    Mono,
}

/// Font family keys offered by the typography picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontKey {
    Sans,
    Mono,
    Serif,
    System,
}

/// A resolved color scheme: primary brand color plus its supporting tints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

/// The color scheme used when no override is selected.
pub const BASELINE_COLOR: ColorKey = ColorKey::Teal;

/// The font stack used when no override is selected.
pub const BASELINE_FONT_STACK: &str = "'Inter', ui-sans-serif, system-ui, sans-serif";

impl ColorKey {
    pub const ALL: [ColorKey; 7] = [
        ColorKey::Red,
        ColorKey::Orange,
        ColorKey::Green,
        ColorKey::Teal,
        ColorKey::Blue,
        ColorKey::Purple,
        ColorKey::Mono,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorKey::Red => "red",
            ColorKey::Orange => "orange",
            ColorKey::Green => "green",
            ColorKey::Teal => "teal",
            ColorKey::Blue => "blue",
            ColorKey::Purple => "purple",
            ColorKey::Mono => "mono",
        }
    }

    /// Display name shown in preset listings
    pub fn display_name(&self) -> &'static str {
        match self {
            ColorKey::Red => "Crimson",
            ColorKey::Orange => "Sunset",
            ColorKey::Green => "Emerald",
            ColorKey::Teal => "Teal",
            ColorKey::Blue => "Azure",
            ColorKey::Purple => "Royal",
            ColorKey::Mono => "Monochrome",
        }
    }

    /// Parse a wire-format key. Unknown strings yield `None`; the resolver
    /// treats that the same as no selection.
    pub fn parse(s: &str) -> Option<ColorKey> {
        match s {
            "red" => Some(ColorKey::Red),
            "orange" => Some(ColorKey::Orange),
            "green" => Some(ColorKey::Green),
            "teal" => Some(ColorKey::Teal),
            "blue" => Some(ColorKey::Blue),
            "purple" => Some(ColorKey::Purple),
            "mono" => Some(ColorKey::Mono),
            _ => None,
        }
    }

    pub fn swatch(&self) -> &'static Swatch {
        match self {
            ColorKey::Red => &Swatch {
                primary: "#EF4444",
                secondary: "#FEE2E2",
                accent: "#FCA5A5",
            },
            ColorKey::Orange => &Swatch {
                primary: "#F97316",
                secondary: "#FFEDD5",
                accent: "#FDBA74",
            },
            ColorKey::Green => &Swatch {
                primary: "#22C55E",
                secondary: "#DCFCE7",
                accent: "#86EFAC",
            },
            ColorKey::Teal => &Swatch {
                primary: "#14B8A6",
                secondary: "#CCFBF1",
                accent: "#5EEAD4",
            },
            ColorKey::Blue => &Swatch {
                primary: "#3B82F6",
                secondary: "#DBEAFE",
                accent: "#93C5FD",
            },
            ColorKey::Purple => &Swatch {
                primary: "#8B5CF6",
                secondary: "#F3E8FF",
                accent: "#C4B5FD",
            },
            ColorKey::Mono => &Swatch {
                primary: "#0F172A",
                secondary: "#F1F5F9",
                accent: "#94A3B8",
            },
        }
    }
}

impl GradientKey {
    pub const ALL: [GradientKey; 7] = [
        GradientKey::Sunset,
        GradientKey::Ocean,
        GradientKey::Aurora,
        GradientKey::Fire,
        GradientKey::Forest,
        GradientKey::Royal,
        GradientKey::Mono,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GradientKey::Sunset => "sunset",
            GradientKey::Ocean => "ocean",
            GradientKey::Aurora => "aurora",
            GradientKey::Fire => "fire",
            GradientKey::Forest => "forest",
            GradientKey::Royal => "royal",
            GradientKey::Mono => "mono",
        }
    }

    pub fn parse(s: &str) -> Option<GradientKey> {
        match s {
            "sunset" => Some(GradientKey::Sunset),
            "ocean" => Some(GradientKey::Ocean),
            "aurora" => Some(GradientKey::Aurora),
            "fire" => Some(GradientKey::Fire),
            "forest" => Some(GradientKey::Forest),
            "royal" => Some(GradientKey::Royal),
            "mono" => Some(GradientKey::Mono),
            _ => None,
        }
    }

    /// Multi-stop CSS gradient string for this key
    pub fn gradient(&self) -> &'static str {
        match self {
            GradientKey::Sunset => "linear-gradient(135deg, hsl(14 90% 55%), hsl(330 85% 60%))",
            GradientKey::Ocean => "linear-gradient(135deg, hsl(200 80% 45%), hsl(171 76% 36%))",
            GradientKey::Aurora => "linear-gradient(135deg, hsl(262 83% 58%), hsl(152 69% 40%))",
            GradientKey::Fire => "linear-gradient(135deg, hsl(0 84% 60%), hsl(35 90% 50%))",
            GradientKey::Forest => "linear-gradient(135deg, hsl(152 69% 40%), hsl(90 60% 35%))",
            GradientKey::Royal => "linear-gradient(135deg, hsl(262 83% 58%), hsl(217 91% 60%))",
            GradientKey::Mono => "linear-gradient(135deg, hsl(210 24% 16%), hsl(210 24% 40%))",
        }
    }
}

impl FontKey {
    pub const ALL: [FontKey; 4] = [FontKey::Sans, FontKey::Mono, FontKey::Serif, FontKey::System];

    pub fn as_str(&self) -> &'static str {
        match self {
            FontKey::Sans => "sans",
            FontKey::Mono => "mono",
            FontKey::Serif => "serif",
            FontKey::System => "system",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FontKey::Sans => "Inter",
            FontKey::Mono => "JetBrains Mono",
            FontKey::Serif => "Georgia",
            FontKey::System => "System Default",
        }
    }

    pub fn parse(s: &str) -> Option<FontKey> {
        match s {
            "sans" => Some(FontKey::Sans),
            "mono" => Some(FontKey::Mono),
            "serif" => Some(FontKey::Serif),
            "system" => Some(FontKey::System),
            _ => None,
        }
    }

    pub fn font_stack(&self) -> &'static str {
        match self {
            FontKey::Sans => BASELINE_FONT_STACK,
            FontKey::Mono => "'JetBrains Mono', ui-monospace, monospace",
            FontKey::Serif => "Georgia, serif",
            FontKey::System => "system-ui, -apple-system, sans-serif",
        }
    }
}
