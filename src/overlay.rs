// src/overlay.rs - Ephemeral preview layer over the committed config

use crate::config::{PreviewPatch, ThemeConfig};
use crate::resolver;
use crate::sink::TokenSink;

/// In-progress edits rendered live, bypassing persistence entirely.
/// Created by `begin_edit`, dropped on commit or cancel; nothing here is
/// ever durable.
#[derive(Debug, Clone)]
pub struct PreviewOverlay {
    baseline: ThemeConfig,
    patch: PreviewPatch,
}

impl PreviewOverlay {
    /// Snapshot the committed config as the preview baseline.
    pub fn begin(baseline: ThemeConfig) -> Self {
        Self {
            baseline,
            patch: PreviewPatch::default(),
        }
    }

    /// Fold in another patch (last write wins per field), re-resolve
    /// baseline + accumulated patches, and push the tokens synchronously.
    pub fn update(&mut self, patch: PreviewPatch, sink: &mut dyn TokenSink) {
        self.patch.absorb(patch);
        resolver::resolve(&self.draft()).apply_to(sink);
    }

    /// The baseline with all accumulated patches applied.
    pub fn draft(&self) -> ThemeConfig {
        self.baseline.merged(&self.patch)
    }

    pub fn baseline(&self) -> &ThemeConfig {
        &self.baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ColorKey, GradientKey};
    use crate::resolver::{TOKEN_COLOR_PRIMARY, TOKEN_GRADIENT};
    use crate::sink::MemorySink;

    #[test]
    fn test_patches_accumulate_over_baseline() {
        let committed = ThemeConfig {
            color: Some(ColorKey::Red),
            ..ThemeConfig::default()
        };
        let mut sink = MemorySink::new();
        let mut overlay = PreviewOverlay::begin(committed);

        overlay.update(
            PreviewPatch {
                gradient: Some(GradientKey::Ocean),
                ..PreviewPatch::default()
            },
            &mut sink,
        );

        // Patch is additive: committed color shows through
        assert_eq!(
            sink.get(TOKEN_COLOR_PRIMARY),
            Some(ColorKey::Red.swatch().primary)
        );
        assert_eq!(sink.get(TOKEN_GRADIENT), Some(GradientKey::Ocean.gradient()));
    }

    #[test]
    fn test_later_patch_overrides_earlier() {
        let mut sink = MemorySink::new();
        let mut overlay = PreviewOverlay::begin(ThemeConfig::default());

        overlay.update(
            PreviewPatch {
                color: Some(ColorKey::Blue),
                ..PreviewPatch::default()
            },
            &mut sink,
        );
        overlay.update(
            PreviewPatch {
                color: Some(ColorKey::Purple),
                ..PreviewPatch::default()
            },
            &mut sink,
        );

        assert_eq!(overlay.draft().color, Some(ColorKey::Purple));
        assert_eq!(
            sink.get(TOKEN_COLOR_PRIMARY),
            Some(ColorKey::Purple.swatch().primary)
        );
    }

    #[test]
    fn test_clearing_by_reapplying_committed_leaves_no_residue() {
        let committed = ThemeConfig::default();
        let mut sink = MemorySink::new();
        crate::resolver::resolve(&committed).apply_to(&mut sink);
        let before = sink.entries();

        let mut overlay = PreviewOverlay::begin(committed.clone());
        overlay.update(
            PreviewPatch {
                gradient: Some(GradientKey::Fire),
                color: Some(ColorKey::Mono),
                ..PreviewPatch::default()
            },
            &mut sink,
        );
        drop(overlay);

        crate::resolver::resolve(&committed).apply_to(&mut sink);
        assert_eq!(sink.entries(), before);
    }
}
