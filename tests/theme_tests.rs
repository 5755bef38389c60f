//! Integrity checks over the assembled theme tables.

use miku_theme::audit::is_valid_hex;
use miku_theme::theme::{Theme, THEME_NAME, THEME_SCHEMA};

#[test]
fn metadata_matches_the_vscode_contract() {
    let theme = Theme::hatsune_miku();
    assert_eq!(theme.schema, THEME_SCHEMA);
    assert_eq!(theme.name, THEME_NAME);
    assert!(theme.semantic_highlighting);
}

#[test]
fn editor_core_surfaces_are_defined() {
    let theme = Theme::hatsune_miku();
    for key in [
        "editor.background",
        "editor.foreground",
        "editorLineNumber.foreground",
        "editorCursor.foreground",
        "statusBar.background",
        "activityBar.background",
        "sideBar.background",
        "terminal.foreground",
    ] {
        assert!(theme.colors.contains_key(key), "missing {key}");
    }
    assert_eq!(theme.colors["editor.background"], "#0D1114");
}

#[test]
fn ansi_sixteen_is_complete() {
    let theme = Theme::hatsune_miku();
    for name in [
        "Black", "Red", "Green", "Yellow", "Blue", "Magenta", "Cyan", "White",
    ] {
        assert!(theme.colors.contains_key(&format!("terminal.ansi{name}")));
        assert!(theme
            .colors
            .contains_key(&format!("terminal.ansiBright{name}")));
    }
}

#[test]
fn every_workbench_color_is_valid_hex() {
    let theme = Theme::hatsune_miku();
    for (key, value) in &theme.colors {
        assert!(is_valid_hex(value), "{key} holds invalid color {value}");
    }
}

#[test]
fn every_token_rule_is_named_and_valid() {
    let theme = Theme::hatsune_miku();
    for rule in &theme.token_colors {
        assert!(!rule.name.is_empty());
        assert!(!rule.scope.is_empty(), "{} has no scopes", rule.name);
        if let Some(fg) = &rule.settings.foreground {
            assert!(is_valid_hex(fg), "{} holds invalid color {fg}", rule.name);
        }
    }
}

#[test]
fn core_syntax_scopes_resolve() {
    let theme = Theme::hatsune_miku();
    let has_scope = |scope: &str| {
        theme
            .token_colors
            .iter()
            .any(|rule| rule.scope.iter().any(|s| s == scope))
    };
    for scope in [
        "comment",
        "keyword.control",
        "string",
        "constant.numeric",
        "entity.name.function",
        "entity.name.type",
        "variable",
        "string.regexp",
    ] {
        assert!(has_scope(scope), "no token rule covers {scope}");
    }
}

#[test]
fn serialized_theme_keeps_vscode_field_names() {
    let theme = Theme::hatsune_miku();
    let value = serde_json::to_value(&theme).unwrap();
    assert!(value.get("$schema").is_some());
    assert!(value.get("tokenColors").is_some());
    assert!(value.get("semanticTokenColors").is_some());
    assert_eq!(value["type"], "dark");
}
