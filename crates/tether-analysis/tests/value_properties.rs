//! Property checks for color and dimension normalization.

use proptest::prelude::*;

use tether_analysis::matcher::{canonical_px, colors_equal, normalize_hex};

proptest! {
    #[test]
    fn normalized_hex_is_six_digit_lowercase(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let spelled = format!("#{r:02X}{g:02X}{b:02X}");
        let normalized = normalize_hex(&spelled).unwrap();
        prop_assert_eq!(normalized.len(), 7);
        prop_assert!(normalized.starts_with('#'));
        prop_assert!(normalized[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn rgb_and_hex_spellings_agree(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let hex = format!("#{r:02x}{g:02x}{b:02x}");
        let rgb = format!("rgb({r}, {g}, {b})");
        prop_assert!(colors_equal(&hex, &rgb));
    }

    #[test]
    fn colors_equal_is_symmetric(a in "#[0-9a-fA-F]{6}", b in "#[0-9a-fA-F]{6}") {
        prop_assert_eq!(colors_equal(&a, &b), colors_equal(&b, &a));
    }

    #[test]
    fn shorthand_hex_expands_to_doubled_digits(r in 0u8..=15, g in 0u8..=15, b in 0u8..=15) {
        let short = format!("#{r:x}{g:x}{b:x}");
        let long = format!("#{r:x}{r:x}{g:x}{g:x}{b:x}{b:x}");
        prop_assert_eq!(normalize_hex(&short), normalize_hex(&long));
    }

    #[test]
    fn alpha_digits_are_dropped(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255, a in 0u8..=255) {
        let opaque = format!("#{r:02x}{g:02x}{b:02x}");
        let with_alpha = format!("#{r:02x}{g:02x}{b:02x}{a:02x}");
        prop_assert!(colors_equal(&opaque, &with_alpha));
    }

    #[test]
    fn px_suffix_round_trips(n in 0.0f64..10_000.0) {
        let spelled = format!("{n}px");
        let parsed = canonical_px(&spelled, 16.0).unwrap();
        prop_assert_eq!(parsed, n);
    }

    #[test]
    fn rem_scales_by_the_configured_base(n in 0.0f64..100.0, base in 1.0f64..64.0) {
        let spelled = format!("{n}rem");
        let parsed = canonical_px(&spelled, base).unwrap();
        prop_assert!((parsed - n * base).abs() < 1e-9);
    }

    #[test]
    fn garbage_never_normalizes(s in "[^#r0-9 ]{1,12}") {
        prop_assert_eq!(normalize_hex(&s), None);
    }
}
