//! CIEDE2000 color distinction.
//!
//! APCA answers "can I read this on that background"; ΔE00 answers "can I
//! tell these two colors apart". Syntax colors that sit next to each other
//! on screen need both.

use serde::Serialize;
use std::fmt;

use crate::audit::color::{
    blend_alpha, extract_alpha, has_alpha_channel, hex_to_rgb, strip_alpha, Rgb,
};

/// Syntax token pairs that commonly sit adjacent in source code.
pub const ADJACENCY_PAIRS: [(&str, &str); 18] = [
    ("function", "parameter"),
    ("method", "parameter"),
    ("variable", "property"),
    ("variable", "type"),
    ("parameter", "type"),
    ("keyword", "variable"),
    ("keyword", "function"),
    ("class", "property"),
    ("class", "method"),
    ("enum", "enumMember"),
    ("number", "enumMember"),
    ("number", "constant"),
    ("comment", "property"),
    ("comment", "variable"),
    ("namespace", "function"),
    ("namespace", "class"),
    ("operator", "variable"),
    ("operator", "number"),
];

/// Symbol icon pairs that appear together in suggest and outline lists.
pub const SYMBOL_DISCRIMINATION_PAIRS: [(&str, &str); 32] = [
    ("class", "interface"),
    ("class", "struct"),
    ("interface", "struct"),
    ("enum", "class"),
    ("enum", "interface"),
    ("object", "class"),
    ("function", "method"),
    ("function", "ctor"),
    ("method", "ctor"),
    ("variable", "field"),
    ("property", "field"),
    ("variable", "property"),
    ("constant", "variable"),
    ("constant", "enumMember"),
    ("constant", "boolean"),
    ("boolean", "null"),
    ("string", "number"),
    ("string", "constant"),
    ("number", "boolean"),
    ("class", "typeParameter"),
    ("interface", "typeParameter"),
    ("struct", "typeParameter"),
    ("namespace", "module"),
    ("namespace", "package"),
    ("module", "package"),
    ("folder", "package"),
    ("keyword", "class"),
    ("keyword", "interface"),
    ("keyword", "namespace"),
    ("event", "method"),
    ("event", "property"),
    ("reference", "variable"),
];

/// CIE L*a*b* coordinates under D65.
#[derive(Debug, Clone, Copy)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

fn linearize(channel: f64) -> f64 {
    if channel > 0.040_45 {
        ((channel + 0.055) / 1.055).powf(2.4)
    } else {
        channel / 12.92
    }
}

fn rgb_to_lab(rgb: Rgb) -> Lab {
    let r = linearize(rgb.r);
    let g = linearize(rgb.g);
    let b = linearize(rgb.b);

    let x = r * 0.412_456_4 + g * 0.357_576_1 + b * 0.180_437_5;
    let y = r * 0.212_672_9 + g * 0.715_152_2 + b * 0.072_175_0;
    let z = r * 0.019_333_9 + g * 0.119_192_0 + b * 0.950_304_1;

    // D65 reference white
    let xn = x / 0.950_47;
    let yn = y / 1.0;
    let zn = z / 1.088_83;

    let f = |t: f64| {
        if t > 0.008_856 {
            t.cbrt()
        } else {
            (903.3 * t + 16.0) / 116.0
        }
    };

    let fx = f(xn);
    let fy = f(yn);
    let fz = f(zn);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Parses a 6-digit hex color into Lab space.
pub fn hex_to_lab(hex: &str) -> Option<Lab> {
    hex_to_rgb(hex).map(rgb_to_lab)
}

fn hue_angle(b: f64, a_prime: f64) -> f64 {
    if a_prime == 0.0 && b == 0.0 {
        return 0.0;
    }
    (b.atan2(a_prime).to_degrees() + 360.0) % 360.0
}

/// CIEDE2000 difference between two Lab colors (Sharma et al. 2005).
pub fn delta_e00(lab1: Lab, lab2: Lab) -> f64 {
    let c1 = (lab1.a * lab1.a + lab1.b * lab1.b).sqrt();
    let c2 = (lab2.a * lab2.a + lab2.b * lab2.b).sqrt();
    let c_bar = (c1 + c2) / 2.0;

    let c_bar7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + 25f64.powi(7))).sqrt());

    let a1p = lab1.a * (1.0 + g);
    let a2p = lab2.a * (1.0 + g);

    let c1p = (a1p * a1p + lab1.b * lab1.b).sqrt();
    let c2p = (a2p * a2p + lab2.b * lab2.b).sqrt();

    let h1p = hue_angle(lab1.b, a1p);
    let h2p = hue_angle(lab2.b, a2p);

    let dlp = lab2.l - lab1.l;
    let dcp = c2p - c1p;

    let dhp_angle = if c1p * c2p == 0.0 {
        0.0
    } else {
        let diff = h2p - h1p;
        if diff.abs() <= 180.0 {
            diff
        } else if diff > 180.0 {
            diff - 360.0
        } else {
            diff + 360.0
        }
    };
    let dhp = 2.0 * (c1p * c2p).sqrt() * (dhp_angle / 2.0).to_radians().sin();

    let lp_bar = (lab1.l + lab2.l) / 2.0;
    let cp_bar = (c1p + c2p) / 2.0;

    let hp_bar = if c1p * c2p == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (hp_bar - 30.0).to_radians().cos()
        + 0.24 * (2.0 * hp_bar).to_radians().cos()
        + 0.32 * (3.0 * hp_bar + 6.0).to_radians().cos()
        - 0.20 * (4.0 * hp_bar - 63.0).to_radians().cos();

    let d_theta = 30.0 * (-((hp_bar - 275.0) / 25.0).powi(2)).exp();

    let cp_bar7 = cp_bar.powi(7);
    let rc = 2.0 * (cp_bar7 / (cp_bar7 + 25f64.powi(7))).sqrt();

    let sl = 1.0 + (0.015 * (lp_bar - 50.0).powi(2)) / (20.0 + (lp_bar - 50.0).powi(2)).sqrt();
    let sc = 1.0 + 0.045 * cp_bar;
    let sh = 1.0 + 0.015 * cp_bar * t;
    let rt = -(2.0 * d_theta).to_radians().sin() * rc;

    let dl = dlp / sl;
    let dc = dcp / sc;
    let dh = dhp / sh;

    (dl * dl + dc * dc + dh * dh + rt * dc * dh).sqrt()
}

fn resolve_for_delta(hex: &str, background: Option<&str>) -> Option<String> {
    if !has_alpha_channel(hex) {
        return Some(hex.to_string());
    }
    let alpha = extract_alpha(hex);
    let base = strip_alpha(hex);
    if alpha >= 0.99 {
        return Some(base.to_string());
    }
    match background {
        Some(bg) => blend_alpha(base, bg, alpha).ok(),
        None => {
            tracing::warn!(color = hex, "transparent color has no background to blend with");
            Some(base.to_string())
        }
    }
}

/// ΔE00 between two hex colors, blending alpha channels over `background`.
/// Returns `None` when either side fails to parse.
pub fn delta_e00_hex(hex1: &str, hex2: &str, background: Option<&str>) -> Option<f64> {
    let first = resolve_for_delta(hex1, background)?;
    let second = resolve_for_delta(hex2, background)?;
    let lab1 = hex_to_lab(&first)?;
    let lab2 = hex_to_lab(&second)?;
    Some(delta_e00(lab1, lab2))
}

/// Perceptual ΔE00 bands, from indistinguishable to unmistakable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DistinctionLevel {
    Imperceptible,
    Subtle,
    Noticeable,
    Clear,
    Distinct,
    Obvious,
}

impl fmt::Display for DistinctionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DistinctionLevel::Imperceptible => "Imperceptible",
            DistinctionLevel::Subtle => "Subtle",
            DistinctionLevel::Noticeable => "Noticeable",
            DistinctionLevel::Clear => "Clear",
            DistinctionLevel::Distinct => "Distinct",
            DistinctionLevel::Obvious => "Obvious",
        };
        write!(f, "{label}")
    }
}

/// A ΔE00 value bucketed into its perceptual band.
#[derive(Debug, Clone, Copy)]
pub struct DistinctionVerdict {
    pub level: DistinctionLevel,
    pub icon: &'static str,
    pub pass: bool,
}

/// Buckets a ΔE00 value. Pairs pass from `Clear` (ΔE 10) upward.
pub fn distinction_level(delta_e: f64) -> DistinctionVerdict {
    let (level, icon, pass) = if delta_e < 1.0 {
        (DistinctionLevel::Imperceptible, "❌", false)
    } else if delta_e < 5.0 {
        (DistinctionLevel::Subtle, "❌", false)
    } else if delta_e < 10.0 {
        (DistinctionLevel::Noticeable, "⚠️", false)
    } else if delta_e < 20.0 {
        (DistinctionLevel::Clear, "⚠️", true)
    } else if delta_e < 40.0 {
        (DistinctionLevel::Distinct, "✅", true)
    } else {
        (DistinctionLevel::Obvious, "✅", true)
    };
    DistinctionVerdict { level, icon, pass }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lab(l: f64, a: f64, b: f64) -> Lab {
        Lab { l, a, b }
    }

    #[test]
    fn identical_colors_have_zero_difference() {
        let teal = hex_to_lab("#39C5BB").unwrap();
        assert_eq!(delta_e00(teal, teal), 0.0);
        let verdict = distinction_level(0.0);
        assert_eq!(verdict.level, DistinctionLevel::Imperceptible);
        assert!(!verdict.pass);
    }

    #[test]
    fn matches_sharma_reference_pairs() {
        // Published CIEDE2000 test data, Sharma et al. 2005, table 1.
        let cases = [
            (lab(50.0, 2.6772, -79.7751), lab(50.0, 0.0, -82.7485), 2.0425),
            (lab(50.0, 3.1571, -77.2803), lab(50.0, 0.0, -82.7485), 2.8615),
            (lab(50.0, -1.3802, -84.2814), lab(50.0, 0.0, -82.7485), 1.0000),
            (lab(50.0, 2.5, 0.0), lab(73.0, 25.0, -18.0), 27.1492),
            (lab(50.0, 2.5, 0.0), lab(50.0, 3.2592, 0.335), 1.0000),
        ];
        for (first, second, expected) in cases {
            let got = delta_e00(first, second);
            assert!(
                (got - expected).abs() < 1e-3,
                "expected {expected}, got {got}"
            );
        }
    }

    #[test]
    fn black_and_white_are_obvious() {
        let delta = delta_e00_hex("#000000", "#FFFFFF", None).unwrap();
        assert!(delta > 40.0, "got {delta}");
        assert_eq!(distinction_level(delta).level, DistinctionLevel::Obvious);
    }

    #[test]
    fn transparent_colors_blend_over_the_background() {
        let opaque = delta_e00_hex("#39C5BB", "#39C5BB80", Some("#0D1114")).unwrap();
        assert!(opaque > 1.0, "blending should shift the color, got {opaque}");
        let unblended = delta_e00_hex("#39C5BB", "#39C5BB80", None).unwrap();
        assert_eq!(unblended, 0.0);
    }

    #[test]
    fn invalid_hex_yields_none() {
        assert!(delta_e00_hex("#39C5BB", "not-a-color", None).is_none());
    }

    #[test]
    fn near_opaque_alpha_is_stripped_without_blending() {
        let delta = delta_e00_hex("#39C5BB", "#39C5BBFE", None).unwrap();
        assert_eq!(delta, 0.0);
    }
}
