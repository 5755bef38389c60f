//! Theme assembly.
//!
//! A [`Theme`] is the serde model of a VS Code color theme document. The
//! flagship [`Theme::hatsune_miku`] constructor stitches the workbench
//! map, textmate token rules, and semantic token table together.

pub mod config;
pub mod semantic;
pub mod tokens;
pub mod workbench;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use semantic::{semantic_token_colors, SemanticStyle};
pub use tokens::{token_colors, TokenColorRule, TokenSettings};
pub use workbench::workbench_colors;

/// Schema URL VS Code uses to validate color theme documents.
pub const THEME_SCHEMA: &str = "vscode://schemas/color-theme";

/// Display name of the generated theme.
pub const THEME_NAME: &str = "Hatsune Miku Theme";

/// Base kind of a color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Dark,
    Light,
}

/// Complete color theme document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ThemeKind,
    #[serde(rename = "semanticHighlighting")]
    pub semantic_highlighting: bool,
    /// Palette documentation embedded in the emitted file for reference.
    #[serde(rename = "_palette", default, skip_serializing_if = "Option::is_none")]
    pub palette_reference: Option<serde_json::Value>,
    pub colors: BTreeMap<String, String>,
    #[serde(rename = "semanticTokenColors")]
    pub semantic_token_colors: BTreeMap<String, SemanticStyle>,
    #[serde(rename = "tokenColors")]
    pub token_colors: Vec<TokenColorRule>,
}

impl Theme {
    /// Assemble the full Hatsune Miku dark theme.
    pub fn hatsune_miku() -> Self {
        Self {
            schema: THEME_SCHEMA.to_string(),
            name: THEME_NAME.to_string(),
            kind: ThemeKind::Dark,
            semantic_highlighting: true,
            palette_reference: None,
            colors: workbench_colors(),
            semantic_token_colors: semantic_token_colors(),
            token_colors: token_colors(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeKind::Dark).unwrap(), "\"dark\"");
    }

    #[test]
    fn assembled_theme_has_all_three_layers() {
        let theme = Theme::hatsune_miku();
        assert_eq!(theme.name, "Hatsune Miku Theme");
        assert!(theme.semantic_highlighting);
        assert!(!theme.colors.is_empty());
        assert!(!theme.semantic_token_colors.is_empty());
        assert!(!theme.token_colors.is_empty());
    }

    #[test]
    fn theme_round_trips_through_json() {
        let theme = Theme::hatsune_miku();
        let json = serde_json::to_string(&theme).unwrap();
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back.colors, theme.colors);
        assert_eq!(back.token_colors.len(), theme.token_colors.len());
    }
}
