//! APCA-W3 contrast scoring.
//!
//! Lc values are signed: positive for dark-on-light, negative for
//! light-on-dark. Readability bands are read on the absolute value.

use std::fmt;

use serde::Serialize;

use crate::audit::color::{hex_to_rgb, ColorError, Rgb};

const S_RCO: f64 = 0.212_672_9;
const S_GCO: f64 = 0.715_152_2;
const S_BCO: f64 = 0.072_175_0;
const MAIN_TRC: f64 = 2.4;
const NORM_BG: f64 = 0.56;
const NORM_TXT: f64 = 0.57;
const REV_TXT: f64 = 0.62;
const REV_BG: f64 = 0.65;
const BLK_THRS: f64 = 0.022;
const BLK_CLMP: f64 = 1.414;
const SCALE_BOW: f64 = 1.14;
const SCALE_WOB: f64 = 1.14;
const LO_BOW_OFFSET: f64 = 0.027;
const LO_WOB_OFFSET: f64 = 0.027;
const LO_CLIP: f64 = 0.1;

/// Which way a pairing reads. Derived from luminance comparison rather than
/// the Lc sign, since low contrasts clip to zero and lose the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    DarkOnLight,
    LightOnDark,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::DarkOnLight => write!(f, "dark-on-light"),
            Polarity::LightOnDark => write!(f, "light-on-dark"),
        }
    }
}

/// Raw APCA output: signed Lc plus reading polarity.
#[derive(Debug, Clone, Copy)]
pub struct ApcaResult {
    pub lc: f64,
    pub polarity: Polarity,
}

/// Readability bands over the absolute Lc value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContrastLevel {
    Fluent,
    Body,
    Content,
    Large,
    #[serde(rename = "Non-Text")]
    NonText,
    #[serde(rename = "FAIL")]
    Fail,
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContrastLevel::Fluent => "Fluent",
            ContrastLevel::Body => "Body",
            ContrastLevel::Content => "Content",
            ContrastLevel::Large => "Large",
            ContrastLevel::NonText => "Non-Text",
            ContrastLevel::Fail => "FAIL",
        };
        write!(f, "{label}")
    }
}

/// An Lc score bucketed into its readability band.
#[derive(Debug, Clone, Copy)]
pub struct ApcaAnalysis {
    pub lc: f64,
    pub level: ContrastLevel,
    pub icon: &'static str,
    pub pass: bool,
    pub polarity: Polarity,
}

fn luminance(rgb: Rgb) -> f64 {
    S_RCO * rgb.r.powf(MAIN_TRC) + S_GCO * rgb.g.powf(MAIN_TRC) + S_BCO * rgb.b.powf(MAIN_TRC)
}

fn soft_clamp(y: f64) -> f64 {
    if y < 0.0 {
        0.0
    } else if y < BLK_THRS {
        y + (BLK_THRS - y).powf(BLK_CLMP)
    } else {
        y
    }
}

/// Computes the signed APCA Lc score for text on a background.
pub fn apca_contrast(text: &str, background: &str) -> Result<ApcaResult, ColorError> {
    let txt_rgb = hex_to_rgb(text).ok_or_else(|| ColorError::Text(text.to_string()))?;
    let bg_rgb =
        hex_to_rgb(background).ok_or_else(|| ColorError::Background(background.to_string()))?;

    let txt_y = soft_clamp(luminance(txt_rgb));
    let bg_y = soft_clamp(luminance(bg_rgb));

    let contrast = if bg_y > txt_y {
        let sapc = (bg_y.powf(NORM_BG) - txt_y.powf(NORM_TXT)) * SCALE_BOW;
        if sapc < LO_CLIP {
            0.0
        } else {
            sapc - LO_BOW_OFFSET
        }
    } else {
        let sapc = (bg_y.powf(REV_BG) - txt_y.powf(REV_TXT)) * SCALE_WOB;
        if sapc > -LO_CLIP {
            0.0
        } else {
            sapc + LO_WOB_OFFSET
        }
    };

    let polarity = if bg_y > txt_y {
        Polarity::DarkOnLight
    } else {
        Polarity::LightOnDark
    };

    Ok(ApcaResult {
        lc: contrast * 100.0,
        polarity,
    })
}

/// Buckets an Lc score into its readability band.
pub fn analyze_apca(result: ApcaResult) -> ApcaAnalysis {
    let abs = result.lc.abs();
    let (level, icon, pass) = if abs >= 90.0 {
        (ContrastLevel::Fluent, "✅", true)
    } else if abs >= 75.0 {
        (ContrastLevel::Body, "✅", true)
    } else if abs >= 60.0 {
        (ContrastLevel::Content, "✅", true)
    } else if abs >= 45.0 {
        (ContrastLevel::Large, "⚠️", false)
    } else if abs >= 30.0 {
        (ContrastLevel::NonText, "⚠️", false)
    } else {
        (ContrastLevel::Fail, "❌", false)
    };

    ApcaAnalysis {
        lc: result.lc,
        level,
        icon,
        pass,
        polarity: result.polarity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_on_black_reads_fluently() {
        let result = apca_contrast("#FFFFFF", "#000000").unwrap();
        assert_eq!(result.polarity, Polarity::LightOnDark);
        assert!(result.lc < -100.0, "got Lc {}", result.lc);
        assert_eq!(analyze_apca(result).level, ContrastLevel::Fluent);
    }

    #[test]
    fn black_on_white_is_positive() {
        let result = apca_contrast("#000000", "#FFFFFF").unwrap();
        assert_eq!(result.polarity, Polarity::DarkOnLight);
        assert!(result.lc > 100.0, "got Lc {}", result.lc);
    }

    #[test]
    fn identical_colors_clip_to_zero() {
        let result = apca_contrast("#39C5BB", "#39C5BB").unwrap();
        assert_eq!(result.lc, 0.0);
        let analysis = analyze_apca(result);
        assert_eq!(analysis.level, ContrastLevel::Fail);
        assert!(!analysis.pass);
    }

    #[test]
    fn signature_teal_passes_content_on_the_void() {
        let result = apca_contrast("#39C5BB", "#0D1114").unwrap();
        let analysis = analyze_apca(result);
        assert!(analysis.lc.abs() >= 60.0, "got Lc {}", analysis.lc);
        assert!(analysis.pass);
    }

    #[test]
    fn bands_fall_in_order() {
        let levels: Vec<ContrastLevel> = [95.0, 80.0, 65.0, 50.0, 35.0, 10.0]
            .iter()
            .map(|&lc| {
                analyze_apca(ApcaResult {
                    lc,
                    polarity: Polarity::DarkOnLight,
                })
                .level
            })
            .collect();
        assert_eq!(
            levels,
            vec![
                ContrastLevel::Fluent,
                ContrastLevel::Body,
                ContrastLevel::Content,
                ContrastLevel::Large,
                ContrastLevel::NonText,
                ContrastLevel::Fail,
            ]
        );
    }
}
