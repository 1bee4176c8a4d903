// src/cli.rs - Operator command line for the theme engine

use crate::config::{PreviewPatch, ThemeConfig};
use crate::registry::{ColorKey, FontKey, GradientKey};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "themely")]
#[command(version = "0.1.0")]
#[command(about = "Storefront theme customization: presets, live preview, durable persistence")]
pub struct CliArgs {
    /// Override the config directory (defaults to the platform config dir)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the committed config and its resolved tokens
    Show,
    /// List selectable color, gradient, and font presets
    Presets,
    /// Apply theme changes (unspecified fields keep their current values)
    Apply {
        /// Color scheme key (red, orange, green, teal, blue, purple, mono)
        #[arg(long)]
        color: Option<String>,
        /// Gradient key (sunset, ocean, aurora, fire, forest, royal, mono)
        #[arg(long)]
        gradient: Option<String>,
        /// Font key (sans, mono, serif, system) or a literal font stack
        #[arg(long)]
        font: Option<String>,
        /// Base font size in px; the rest of the scale keeps its values
        #[arg(long)]
        base_size: Option<f32>,
    },
    /// Restore the compiled-in default theme
    Reset,
    /// Write the committed config to a dated JSON artifact
    Export {
        /// Output directory (defaults to the current directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Manage the saved custom theme catalog
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum SavedAction {
    /// List saved themes
    List,
    /// Save the current committed theme under a name
    Save {
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete a saved theme by id
    Delete { id: u64 },
    /// Apply a saved theme by id
    Apply { id: u64 },
}

/// Turn `apply` flags into a preview patch, validating preset keys against
/// the registry. A font value that is not a known key is taken as a
/// literal font stack.
pub fn build_patch(
    color: Option<&str>,
    gradient: Option<&str>,
    font: Option<&str>,
    base_size: Option<f32>,
    committed: &ThemeConfig,
) -> Result<PreviewPatch, String> {
    let mut patch = PreviewPatch::default();

    if let Some(raw) = color {
        patch.color = Some(ColorKey::parse(raw).ok_or_else(|| {
            format!(
                "unknown color '{}' (expected one of: {})",
                raw,
                key_list(ColorKey::ALL.iter().map(|k| k.as_str()))
            )
        })?);
    }

    if let Some(raw) = gradient {
        patch.gradient = Some(GradientKey::parse(raw).ok_or_else(|| {
            format!(
                "unknown gradient '{}' (expected one of: {})",
                raw,
                key_list(GradientKey::ALL.iter().map(|k| k.as_str()))
            )
        })?);
    }

    if let Some(raw) = font {
        patch.font = Some(match FontKey::parse(raw) {
            Some(key) => key.font_stack().to_string(),
            None => raw.to_string(),
        });
    }

    if let Some(base) = base_size {
        let mut sizes = committed.font_sizes;
        sizes.base = base;
        patch.font_sizes = Some(sizes);
    }

    Ok(patch)
}

fn key_list<'a>(keys: impl Iterator<Item = &'a str>) -> String {
    keys.collect::<Vec<_>>().join(", ")
}
