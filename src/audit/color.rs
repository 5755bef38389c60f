//! Hex color primitives for the readability audit.
//!
//! Colors travel through the crate as `#RRGGBB` / `#RRGGBBAA` strings;
//! conversion into numeric space happens here and nowhere else.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#?([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$").unwrap());

/// Errors raised while converting or compositing hex colors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid color: fg=\"{fg}\", bg=\"{bg}\"")]
    Blend { fg: String, bg: String },

    #[error("Invalid text color: \"{0}\"")]
    Text(String),

    #[error("Invalid background color: \"{0}\"")]
    Background(String),
}

impl ColorError {
    /// Returns true if the error came from an alpha compositing step.
    pub fn is_blend(&self) -> bool {
        matches!(self, ColorError::Blend { .. })
    }
}

/// Normalized sRGB components in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Accepts `#RGB`, `#RRGGBB`, and `#RRGGBBAA` forms; the hash is optional.
pub fn is_valid_hex(hex: &str) -> bool {
    HEX_COLOR.is_match(hex)
}

/// Parses a hex color into normalized RGB. Alpha digits are ignored.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.trim_start_matches('#');
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        8 => digits[..6].to_string(),
        _ => digits.to_string(),
    };
    if expanded.len() != 6 || !expanded.is_ascii() {
        return None;
    }

    let channel = |i: usize| -> Option<f64> {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .ok()
            .map(|v| f64::from(v) / 255.0)
    };

    Some(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Formats normalized RGB as lowercase `#rrggbb`, clamping out-of-range channels.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    let byte = |n: f64| -> u8 { (n.clamp(0.0, 1.0) * 255.0).round() as u8 };
    format!("#{:02x}{:02x}{:02x}", byte(rgb.r), byte(rgb.g), byte(rgb.b))
}

/// True when the value carries an alpha channel (`#RRGGBBAA`).
pub fn has_alpha_channel(hex: &str) -> bool {
    let len = hex.strip_prefix('#').map_or(hex.len(), str::len);
    len == 8
}

/// Drops the alpha digits from `#RRGGBBAA`; other forms pass through untouched.
pub fn strip_alpha(hex: &str) -> &str {
    if !has_alpha_channel(hex) {
        return hex;
    }
    let keep = if hex.starts_with('#') { 7 } else { 6 };
    hex.get(..keep).unwrap_or(hex)
}

/// Alpha component of `#RRGGBBAA` as 0.0..=1.0. Opaque when absent or unparsable.
pub fn extract_alpha(hex: &str) -> f64 {
    if !has_alpha_channel(hex) {
        return 1.0;
    }
    hex.get(hex.len() - 2..)
        .and_then(|a| u8::from_str_radix(a, 16).ok())
        .map_or(1.0, |v| f64::from(v) / 255.0)
}

/// Composites `fg` over `bg` at the given opacity and returns the flattened hex.
pub fn blend_alpha(fg: &str, bg: &str, alpha: f64) -> Result<String, ColorError> {
    let (fg_rgb, bg_rgb) = match (hex_to_rgb(fg), hex_to_rgb(bg)) {
        (Some(f), Some(b)) => (f, b),
        _ => {
            return Err(ColorError::Blend {
                fg: fg.to_string(),
                bg: bg.to_string(),
            })
        }
    };

    let a = alpha.clamp(0.0, 1.0);
    Ok(rgb_to_hex(Rgb {
        r: fg_rgb.r * a + bg_rgb.r * (1.0 - a),
        g: fg_rgb.g * a + bg_rgb.g * (1.0 - a),
        b: fg_rgb.b * a + bg_rgb.b * (1.0 - a),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_three_six_and_eight_digit_forms() {
        assert!(is_valid_hex("#39C5BB"));
        assert!(is_valid_hex("39C5BB"));
        assert!(is_valid_hex("#FFF"));
        assert!(is_valid_hex("#39C5BB80"));
        assert!(!is_valid_hex("#39C5B"));
        assert!(!is_valid_hex("#GGGGGG"));
        assert!(!is_valid_hex(""));
    }

    #[test]
    fn expands_short_form_and_ignores_alpha_digits() {
        let teal = hex_to_rgb("#39C5BB").unwrap();
        let teal_with_alpha = hex_to_rgb("#39C5BB80").unwrap();
        assert_eq!(teal, teal_with_alpha);

        let white = hex_to_rgb("#FFF").unwrap();
        assert_eq!(white, Rgb { r: 1.0, g: 1.0, b: 1.0 });

        assert!(hex_to_rgb("#12345").is_none());
        assert!(hex_to_rgb("not-a-color").is_none());
    }

    #[test]
    fn round_trips_through_lowercase_hex() {
        let rgb = hex_to_rgb("#39C5BB").unwrap();
        assert_eq!(rgb_to_hex(rgb), "#39c5bb");
    }

    #[test]
    fn alpha_extraction_defaults_to_opaque() {
        assert_eq!(extract_alpha("#39C5BB"), 1.0);
        assert_eq!(extract_alpha("#39C5BBFF"), 1.0);
        assert!((extract_alpha("#39C5BB80") - 128.0 / 255.0).abs() < 1e-9);
        assert_eq!(strip_alpha("#39C5BB80"), "#39C5BB");
        assert_eq!(strip_alpha("#39C5BB"), "#39C5BB");
    }

    #[test]
    fn blends_halfway_between_black_and_white() {
        let mid = blend_alpha("#FFFFFF", "#000000", 0.5).unwrap();
        assert_eq!(mid, "#808080");

        let opaque = blend_alpha("#39C5BB", "#0D1114", 1.0).unwrap();
        assert_eq!(opaque, "#39c5bb");
    }

    #[test]
    fn blend_rejects_unparsable_colors() {
        let err = blend_alpha("nope", "#000000", 0.5).unwrap_err();
        assert!(err.is_blend());
    }
}
