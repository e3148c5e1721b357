//! Value normalization and tolerance comparison.
//!
//! All comparisons here back the lowest-priority match strategy: they
//! answer "are these the same value" without any reference evidence.
//! Every function degrades to a non-match on input it cannot read.

use tether_core::types::collections::BTreeMap;
use tether_tokens::model::{ScalarValue, TokenValue};

use crate::component::EffectProperty;

/// Normalize a color spelling to lowercase `#rrggbb`, dropping alpha.
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
/// `rgba(r, g, b, a)`.
pub fn normalize_hex(raw: &str) -> Option<String> {
    let t = raw.trim();

    if let Some(hex) = t.strip_prefix('#') {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return match hex.len() {
            3 | 4 => {
                let expanded: String = hex
                    .chars()
                    .take(3)
                    .flat_map(|c| [c, c])
                    .collect::<String>()
                    .to_lowercase();
                Some(format!("#{expanded}"))
            }
            6 => Some(format!("#{}", hex.to_lowercase())),
            8 => Some(format!("#{}", hex[..6].to_lowercase())),
            _ => None,
        };
    }

    let lower = t.to_ascii_lowercase();
    if lower.starts_with("rgb(") || lower.starts_with("rgba(") {
        let open = lower.find('(')?;
        let close = lower.rfind(')')?;
        if close <= open {
            return None;
        }
        let parts: Vec<&str> = lower[open + 1..close].split(',').map(str::trim).collect();
        if parts.len() < 3 {
            return None;
        }
        let mut channels = [0u8; 3];
        for (i, part) in parts.iter().take(3).enumerate() {
            let v: f64 = part.parse().ok()?;
            if !(0.0..=255.0).contains(&v) {
                return None;
            }
            channels[i] = v.round() as u8;
        }
        return Some(format!(
            "#{:02x}{:02x}{:02x}",
            channels[0], channels[1], channels[2]
        ));
    }

    None
}

/// Whether two color spellings name the same opaque color.
pub fn colors_equal(a: &str, b: &str) -> bool {
    match (normalize_hex(a), normalize_hex(b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Convert a dimension spelling to canonical pixels. `16px` → 16,
/// `1rem`/`1em` → `rem_base`, bare numbers pass through.
pub fn canonical_px(raw: &str, rem_base: f64) -> Option<f64> {
    let t = raw.trim().to_ascii_lowercase();
    if t.is_empty() {
        return None;
    }

    if let Some(num) = t.strip_suffix("px") {
        return num.trim().parse::<f64>().ok().filter(|v| v.is_finite());
    }
    if let Some(num) = t.strip_suffix("rem") {
        return num
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| v * rem_base);
    }
    if let Some(num) = t.strip_suffix("em") {
        return num
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| v * rem_base);
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Pixel value of a token's scalar, whatever its spelling.
pub fn token_px(value: &TokenValue, rem_base: f64) -> Option<f64> {
    match value {
        TokenValue::Scalar(ScalarValue::Number(n)) if n.is_finite() => Some(*n),
        TokenValue::Scalar(ScalarValue::String(s)) => canonical_px(s, rem_base),
        _ => None,
    }
}

/// Equality within an absolute pixel tolerance.
pub fn within_tolerance(a: f64, b: f64, tolerance: f64) -> bool {
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    (a - b).abs() <= tolerance
}

/// Case-insensitive font family comparison, ignoring surrounding quotes.
pub fn font_families_equal(a: &str, b: &str) -> bool {
    let strip = |s: &str| {
        s.trim()
            .trim_matches(|c| c == '\'' || c == '"')
            .trim()
            .to_lowercase()
    };
    let (x, y) = (strip(a), strip(b));
    !x.is_empty() && x == y
}

/// Numeric font weight of a token value; CSS keywords map to the
/// standard scale.
pub fn font_weight_value(value: &TokenValue) -> Option<f64> {
    match value {
        TokenValue::Scalar(ScalarValue::Number(n)) if n.is_finite() => Some(*n),
        TokenValue::Scalar(ScalarValue::String(s)) => {
            let t = s.trim().to_ascii_lowercase();
            if let Ok(n) = t.parse::<f64>() {
                return n.is_finite().then_some(n);
            }
            match t.as_str() {
                "thin" | "hairline" => Some(100.0),
                "extralight" | "extra-light" | "ultralight" => Some(200.0),
                "light" => Some(300.0),
                "normal" | "regular" => Some(400.0),
                "medium" => Some(500.0),
                "semibold" | "semi-bold" | "demibold" => Some(600.0),
                "bold" => Some(700.0),
                "extrabold" | "extra-bold" | "ultrabold" => Some(800.0),
                "black" | "heavy" => Some(900.0),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Read one numeric sub-field of a composite value, accepting any of the
/// given key spellings.
pub fn composite_px(
    fields: &BTreeMap<String, TokenValue>,
    keys: &[&str],
    rem_base: f64,
) -> Option<f64> {
    keys.iter()
        .find_map(|k| fields.get(*k))
        .and_then(|v| token_px(v, rem_base))
}

/// Read one string sub-field of a composite value.
pub fn composite_str<'a>(
    fields: &'a BTreeMap<String, TokenValue>,
    keys: &[&str],
) -> Option<&'a str> {
    keys.iter().find_map(|k| fields.get(*k)).and_then(|v| v.as_str())
}

/// Component-wise shadow comparison: color plus x/y offset, blur, and
/// spread must all agree within tolerance.
pub fn effect_value_matches(
    fields: &BTreeMap<String, TokenValue>,
    effect: &EffectProperty,
    tolerance: f64,
    rem_base: f64,
) -> bool {
    let Some(token_color) = composite_str(fields, &["color"]) else {
        return false;
    };
    if !colors_equal(token_color, &effect.color_hex) {
        return false;
    }

    let offset_x = composite_px(fields, &["offsetX", "x"], rem_base);
    let offset_y = composite_px(fields, &["offsetY", "y"], rem_base);
    let blur = composite_px(fields, &["blur", "radius"], rem_base);
    // Spread defaults to 0 when the token omits it.
    let spread = composite_px(fields, &["spread"], rem_base).unwrap_or(0.0);

    match (offset_x, offset_y, blur) {
        (Some(x), Some(y), Some(b)) => {
            within_tolerance(x, effect.offset_x, tolerance)
                && within_tolerance(y, effect.offset_y, tolerance)
                && within_tolerance(b, effect.blur, tolerance)
                && within_tolerance(spread, effect.spread, tolerance)
        }
        _ => false,
    }
}
