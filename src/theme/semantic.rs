//! Semantic token color table.
//!
//! Semantic tokens take precedence over textmate scopes when the editor
//! has a language server attached, so this table mirrors the intent of
//! the core token rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::palette::{
    ACCENTS, CYANS, FOREGROUNDS, GREYS, HOLOGRAM, MAGICAL_MIRAI, PINKS, PROJECT_SEKAI,
    RACING_MIKU, SEMANTIC, SNOW_MIKU, TEALS,
};

/// Value of one semantic token entry. VS Code accepts either a bare hex
/// string or an object with foreground and font style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SemanticStyle {
    Color(String),
    Styled {
        #[serde(skip_serializing_if = "Option::is_none")]
        foreground: Option<String>,
        #[serde(rename = "fontStyle", skip_serializing_if = "Option::is_none")]
        font_style: Option<String>,
    },
}

impl SemanticStyle {
    pub fn color(hex: &str) -> Self {
        Self::Color(hex.to_string())
    }

    pub fn styled(hex: &str, font_style: &str) -> Self {
        Self::Styled {
            foreground: Some(hex.to_string()),
            font_style: Some(font_style.to_string()),
        }
    }

    /// Foreground hex of this entry, if it carries one.
    pub fn foreground(&self) -> Option<&str> {
        match self {
            Self::Color(hex) => Some(hex),
            Self::Styled { foreground, .. } => foreground.as_deref(),
        }
    }
}

/// Build the semantic token color map.
pub fn semantic_token_colors() -> BTreeMap<String, SemanticStyle> {
    let mut tokens = BTreeMap::new();
    {
        let mut t = |key: &str, style: SemanticStyle| {
            tokens.insert(key.to_string(), style);
        };

        // Functions and methods
        t("function", SemanticStyle::color(TEALS.neon));
        t("function.declaration", SemanticStyle::styled(TEALS.neon, "bold"));
        t("function.defaultLibrary", SemanticStyle::color(HOLOGRAM.purple));
        t("method", SemanticStyle::color(TEALS.tint));
        t("method.declaration", SemanticStyle::styled(TEALS.tint, "bold"));
        t("method.static", SemanticStyle::styled(TEALS.tint, "underline"));

        // Classes and types
        t("class", SemanticStyle::color(SNOW_MIKU.y2011.winter_blue));
        t(
            "class.declaration",
            SemanticStyle::styled(SNOW_MIKU.y2011.winter_blue, "bold"),
        );
        t("class.defaultLibrary", SemanticStyle::color(HOLOGRAM.purple));
        t("struct", SemanticStyle::color(PINKS.blush));
        t("interface", SemanticStyle::color(SNOW_MIKU.y2021.glow_cyan));
        t(
            "interface.declaration",
            SemanticStyle::styled(SNOW_MIKU.y2021.glow_cyan, "italic"),
        );
        t("type", SemanticStyle::color(PROJECT_SEKAI.leo_need.ichika));
        t(
            "type.declaration",
            SemanticStyle::styled(PROJECT_SEKAI.leo_need.ichika, "bold"),
        );
        t(
            "typeParameter",
            SemanticStyle::styled(PROJECT_SEKAI.leo_need.saki, "italic"),
        );
        t("enum", SemanticStyle::color(ACCENTS.gold));
        t("enumMember", SemanticStyle::color(ACCENTS.orange));

        // Variables
        t("variable", SemanticStyle::color(FOREGROUNDS.primary));
        t("variable.declaration", SemanticStyle::color(FOREGROUNDS.primary));
        t("variable.readonly", SemanticStyle::color(FOREGROUNDS.primary));
        t("variable.constant", SemanticStyle::color(PINKS.blush));
        t("variable.defaultLibrary", SemanticStyle::color(HOLOGRAM.cyan));
        t("property", SemanticStyle::color(SNOW_MIKU.y2011.mittens));
        t("property.declaration", SemanticStyle::color(SNOW_MIKU.y2011.mittens));
        t("parameter", SemanticStyle::styled(PINKS.blush, "italic"));

        // Keywords and literals
        t("keyword", SemanticStyle::styled(TEALS.classic, "bold"));
        t("string", SemanticStyle::color(SEMANTIC.success));
        t("number", SemanticStyle::color(RACING_MIKU.y2010.race_orange));
        t(
            "boolean",
            SemanticStyle::color(MAGICAL_MIRAI.y2014.vibrant_pink),
        );

        // Misc
        t("comment", SemanticStyle::styled(GREYS.platinum, "italic"));
        t(
            "decorator",
            SemanticStyle::styled(SNOW_MIKU.y2011.winter_blue, "italic"),
        );
        t("macro", SemanticStyle::styled(ACCENTS.amber, "bold"));
        t("label", SemanticStyle::color(ACCENTS.amber));
        t("operator", SemanticStyle::color(CYANS.electric));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_colors_serialize_as_strings() {
        let style = SemanticStyle::color("#5DE4DB");
        assert_eq!(serde_json::to_string(&style).unwrap(), "\"#5DE4DB\"");
    }

    #[test]
    fn styled_entries_serialize_as_objects() {
        let style = SemanticStyle::styled("#39C5BB", "bold");
        assert_eq!(
            serde_json::to_string(&style).unwrap(),
            "{\"foreground\":\"#39C5BB\",\"fontStyle\":\"bold\"}"
        );
    }

    #[test]
    fn keyword_and_parameter_carry_styles() {
        let tokens = semantic_token_colors();
        assert_eq!(tokens["keyword"].foreground(), Some("#39C5BB"));
        assert_eq!(tokens["parameter"].foreground(), Some("#FFB8D4"));
        assert_eq!(tokens["operator"].foreground(), Some("#26C6DA"));
    }

    #[test]
    fn untagged_enum_round_trips() {
        let tokens = semantic_token_colors();
        let json = serde_json::to_string(&tokens).unwrap();
        let back: BTreeMap<String, SemanticStyle> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tokens);
    }
}
