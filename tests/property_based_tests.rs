// Property-based tests using proptest
// These tests use random generation to find edge cases that unit tests miss

use proptest::prelude::*;
use themely::config::{FontSizes, PreviewPatch, ThemeConfig};
use themely::registry::{ColorKey, GradientKey};
use themely::resolver::resolve;

fn arb_color() -> impl Strategy<Value = Option<ColorKey>> {
    prop::sample::select(vec![
        None,
        Some(ColorKey::Red),
        Some(ColorKey::Orange),
        Some(ColorKey::Green),
        Some(ColorKey::Teal),
        Some(ColorKey::Blue),
        Some(ColorKey::Purple),
        Some(ColorKey::Mono),
    ])
}

fn arb_gradient() -> impl Strategy<Value = Option<GradientKey>> {
    prop::sample::select(vec![
        None,
        Some(GradientKey::Sunset),
        Some(GradientKey::Ocean),
        Some(GradientKey::Aurora),
        Some(GradientKey::Fire),
        Some(GradientKey::Forest),
        Some(GradientKey::Royal),
        Some(GradientKey::Mono),
    ])
}

fn arb_sizes() -> impl Strategy<Value = FontSizes> {
    // Deliberately wild values, far outside every documented range
    prop::array::uniform8(0.0f32..200.0).prop_map(FontSizes::from_array)
}

fn arb_config() -> impl Strategy<Value = ThemeConfig> {
    (arb_color(), arb_gradient(), "[ -~]{0,40}", arb_sizes()).prop_map(
        |(color, gradient, font, font_sizes)| ThemeConfig {
            color,
            gradient,
            font,
            font_sizes,
        },
    )
}

// Property: resolution is deterministic
proptest! {
    #[test]
    fn resolve_twice_yields_identical_tokens(config in arb_config()) {
        prop_assert_eq!(resolve(&config), resolve(&config));
    }
}

// Property: resolved sizes always land in range and never decrease
// across tiers, no matter how wild the input
proptest! {
    #[test]
    fn resolved_sizes_in_range_and_monotone(config in arb_config()) {
        let sizes = resolve(&config).sizes.as_array();
        for (i, (&value, (min, max))) in sizes.iter().zip(FontSizes::RANGES).enumerate() {
            prop_assert!(value >= min, "tier {} below min: {}", i, value);
            prop_assert!(value <= max, "tier {} above max: {}", i, value);
            if i > 0 {
                prop_assert!(value >= sizes[i - 1], "tier {} decreased", i);
            }
        }
    }
}

// Property: size normalization is idempotent — resolving an
// already-resolved scale changes nothing
proptest! {
    #[test]
    fn size_normalization_is_idempotent(config in arb_config()) {
        let once = resolve(&config);
        let again = resolve(&ThemeConfig { font_sizes: once.sizes, ..config });
        prop_assert_eq!(once.sizes, again.sizes);
    }
}

// Property: resolution never produces an empty font stack and gradient
// presence matches the config
proptest! {
    #[test]
    fn resolved_tokens_are_well_formed(config in arb_config()) {
        let tokens = resolve(&config);
        prop_assert!(!tokens.font.trim().is_empty());
        prop_assert!(tokens.primary.starts_with('#'));
        prop_assert_eq!(tokens.gradient.is_some(), config.gradient.is_some());
    }
}

// Property: merging a patch built from a config yields that config
// (full staging, as used by load_named)
proptest! {
    #[test]
    fn full_patch_replaces_every_field(base in arb_config(), staged in arb_config()) {
        let merged = base.merged(&PreviewPatch::from_config(&staged));
        // color/gradient: None in the staged config is additive, so the
        // base value shows through; everything set is replaced
        if staged.color.is_some() {
            prop_assert_eq!(merged.color, staged.color);
        } else {
            prop_assert_eq!(merged.color, base.color);
        }
        if staged.gradient.is_some() {
            prop_assert_eq!(merged.gradient, staged.gradient);
        } else {
            prop_assert_eq!(merged.gradient, base.gradient);
        }
        prop_assert_eq!(merged.font, staged.font);
        prop_assert_eq!(merged.font_sizes, staged.font_sizes);
    }
}

// Property: absorb is last-write-wins per field
proptest! {
    #[test]
    fn absorb_matches_sequential_merge(base in arb_config(), a in arb_config(), b in arb_config()) {
        let patch_a = PreviewPatch::from_config(&a);
        let patch_b = PreviewPatch {
            color: b.color,
            gradient: b.gradient,
            font: None,
            font_sizes: None,
        };

        let sequential = base.merged(&patch_a).merged(&patch_b);

        let mut folded = patch_a;
        folded.absorb(patch_b);
        let merged = base.merged(&folded);

        prop_assert_eq!(sequential, merged);
    }
}

// Property: the wire format roundtrips for every valid config
proptest! {
    #[test]
    fn wire_format_roundtrips(config in arb_config()) {
        let json = serde_json::to_string(&config).unwrap();
        let back: ThemeConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, config);
    }
}
