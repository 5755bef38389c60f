//! Audit pipeline tests: color math against known values, JSONC
//! tolerance, and a generate-then-audit round trip.

use miku_theme::audit::theme::strip_json_comments;
use miku_theme::audit::{
    analyze_apca, apca_contrast, delta_e00_hex, distinction_level, is_valid_hex, load_theme,
    run_analysis, ContrastLevel, OutputFormat, Polarity,
};
use miku_theme::generator::write_theme;
use miku_theme::Theme;

#[test]
fn hex_validation_accepts_all_three_forms() {
    for hex in ["#39C5BB", "#FFF", "#39C5BB80", "39C5BB"] {
        assert!(is_valid_hex(hex), "{hex} should be valid");
    }
    for hex in ["#39C5B", "#39C5BBZZ", "", "teal"] {
        assert!(!is_valid_hex(hex), "{hex} should be invalid");
    }
}

#[test]
fn apca_white_on_black_is_maximal() {
    let result = apca_contrast("#FFFFFF", "#000000").unwrap();
    assert!(result.lc.abs() > 105.0 && result.lc.abs() < 108.0, "got {}", result.lc);
    assert_eq!(result.polarity, Polarity::LightOnDark);

    let analysis = analyze_apca(result);
    assert_eq!(analysis.level, ContrastLevel::Fluent);
    assert!(analysis.pass);
}

#[test]
fn apca_black_on_white_is_maximal_the_other_way() {
    let result = apca_contrast("#000000", "#FFFFFF").unwrap();
    assert!(result.lc.abs() > 104.0 && result.lc.abs() < 107.0, "got {}", result.lc);
    assert_eq!(result.polarity, Polarity::DarkOnLight);
}

#[test]
fn apca_same_color_scores_zero() {
    let result = apca_contrast("#39C5BB", "#39C5BB").unwrap();
    assert_eq!(result.lc, 0.0);
    assert_eq!(analyze_apca(result).level, ContrastLevel::Fail);
}

#[test]
fn theme_foreground_reads_on_editor_background() {
    let result = apca_contrast("#C8DCD9", "#0D1114").unwrap();
    let analysis = analyze_apca(result);
    assert!(analysis.lc.abs() >= 60.0, "got Lc {}", analysis.lc);
    assert!(analysis.pass);
}

#[test]
fn delta_e_zero_for_identical_colors() {
    let delta = delta_e00_hex("#39C5BB", "#39C5BB", None).unwrap();
    assert!(delta < f64::EPSILON);
    assert!(!distinction_level(delta).pass);
}

#[test]
fn delta_e_separates_teal_from_pink() {
    let delta = delta_e00_hex("#39C5BB", "#FF6B9D", Some("#0D1114")).unwrap();
    assert!(delta > 40.0, "got ΔE {delta}");
    assert!(distinction_level(delta).pass);
}

#[test]
fn jsonc_comments_and_trailing_commas_are_stripped() {
    let jsonc = r##"{
        // line comment
        "name": "Miku", /* block */
        "url": "https://piapro.net", // strings keep their slashes
        "colors": { "editor.background": "#0D1114", },
    }"##;
    let value: serde_json::Value = serde_json::from_str(&strip_json_comments(jsonc)).unwrap();
    assert_eq!(value["name"], "Miku");
    assert_eq!(value["url"], "https://piapro.net");
    assert_eq!(value["colors"]["editor.background"], "#0D1114");
}

#[test]
fn generated_theme_survives_the_full_audit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Hatsune Miku Theme-color-theme.json");

    let theme = Theme::hatsune_miku();
    write_theme(&theme, &path).unwrap();

    let loaded = load_theme(&path).unwrap();
    let colors = loaded.colors.as_ref().unwrap();
    assert_eq!(colors["editor.background"], "#0D1114");

    let stats = run_analysis(&path, OutputFormat::Json).unwrap();
    assert_eq!(stats.fail, 0, "generated theme has failing pairs");
    assert_eq!(stats.missing, 0, "generated theme leaves audit keys undefined");
    assert!(stats.pass > 0);
}

#[test]
fn audit_rejects_a_theme_without_editor_colors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r##"{ "colors": { "focusBorder": "#39C5BB" } }"##).unwrap();
    assert!(run_analysis(&path, OutputFormat::Json).is_err());
}
