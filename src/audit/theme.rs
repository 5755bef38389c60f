//! Theme file loading and color extraction for the readability audit.
//!
//! Accepts JSON and JSONC theme files, resolves fallback chains and
//! transparent surfaces, and groups every audited foreground into the
//! structures the report walks.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::audit::color::{
    blend_alpha, extract_alpha, has_alpha_channel, is_valid_hex, strip_alpha, ColorError,
};

/// Errors surfaced by the readability audit.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Theme file not found: {0}")]
    ThemeNotFound(String),

    #[error("Invalid theme JSON in {path}: {message}")]
    InvalidTheme { path: String, message: String },

    #[error("Theme missing required \"colors\" object.")]
    MissingColors,

    #[error("Theme missing \"editor.background\" color.")]
    MissingEditorBackground,

    #[error("Theme missing \"editor.foreground\" color.")]
    MissingEditorForeground,

    #[error("Invalid color \"{0}\". Use #RGB, #RRGGBB, or #RRGGBBAA")]
    InvalidColor(String),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("Failed to encode JSON report: {0}")]
    Report(#[from] serde_json::Error),
}

impl AuditError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AuditError::ThemeNotFound(_))
    }

    pub fn is_invalid_color(&self) -> bool {
        matches!(self, AuditError::InvalidColor(_))
    }
}

/// A VS Code color theme as it sits on disk. Fields we do not audit
/// (font styles, rule names) are ignored during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoadedTheme {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "semanticHighlighting")]
    pub semantic_highlighting: Option<bool>,
    pub colors: Option<BTreeMap<String, String>>,
    #[serde(rename = "semanticTokenColors", default)]
    pub semantic_token_colors: BTreeMap<String, SemanticTokenValue>,
    #[serde(rename = "tokenColors", default)]
    pub token_colors: Vec<TokenColorEntry>,
}

/// Semantic token values are either a bare color string or a settings
/// object carrying an optional foreground.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SemanticTokenValue {
    Color(String),
    Styled { foreground: Option<String> },
}

impl SemanticTokenValue {
    fn foreground(&self) -> Option<&str> {
        match self {
            SemanticTokenValue::Color(color) => Some(color),
            SemanticTokenValue::Styled { foreground } => foreground.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenColorEntry {
    pub scope: Option<ScopeSelector>,
    pub settings: Option<TokenEntrySettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenEntrySettings {
    pub foreground: Option<String>,
}

/// TextMate rules write scopes either as a comma-separated string or as
/// an array of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScopeSelector {
    One(String),
    Many(Vec<String>),
}

impl ScopeSelector {
    fn matches(&self, scope: &str) -> bool {
        match self {
            ScopeSelector::One(joined) => joined.split(',').any(|part| part.trim() == scope),
            ScopeSelector::Many(scopes) => scopes.iter().any(|part| part == scope),
        }
    }
}

/// Strips `//` and `/* */` comments from JSONC without touching string
/// contents, then drops trailing commas before `}` or `]`.
pub fn strip_json_comments(jsonc: &str) -> String {
    let mut result = String::with_capacity(jsonc.len());
    let mut chars = jsonc.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            result.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    result.push(escaped);
                }
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                result.push(c);
            }
            '/' if chars.peek() == Some(&'/') => {
                chars.next();
                for rest in chars.by_ref() {
                    if rest == '\n' {
                        result.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut previous = '\0';
                for rest in chars.by_ref() {
                    if previous == '*' && rest == '/' {
                        break;
                    }
                    previous = rest;
                }
            }
            _ => result.push(c),
        }
    }

    static TRAILING_COMMAS: Lazy<Regex> = Lazy::new(|| Regex::new(r",(\s*[}\]])").unwrap());
    TRAILING_COMMAS.replace_all(&result, "$1").into_owned()
}

/// Loads a theme file and validates the colors the audit cannot run without.
pub fn load_theme(path: &Path) -> Result<LoadedTheme, AuditError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(AuditError::ThemeNotFound(path.display().to_string()));
        }
        Err(err) => {
            return Err(AuditError::InvalidTheme {
                path: path.display().to_string(),
                message: err.to_string(),
            });
        }
    };

    let theme: LoadedTheme =
        serde_json::from_str(&strip_json_comments(&content)).map_err(|err| {
            AuditError::InvalidTheme {
                path: path.display().to_string(),
                message: err.to_string(),
            }
        })?;

    let colors = theme.colors.as_ref().ok_or(AuditError::MissingColors)?;
    let background = colors
        .get("editor.background")
        .filter(|color| !color.is_empty())
        .ok_or(AuditError::MissingEditorBackground)?;
    let foreground = colors
        .get("editor.foreground")
        .filter(|color| !color.is_empty())
        .ok_or(AuditError::MissingEditorForeground)?;

    for color in [background, foreground] {
        if !is_valid_hex(color) {
            return Err(AuditError::InvalidColor(color.clone()));
        }
    }

    Ok(theme)
}

/// Theme display name: the declared `name`, or the file name with common
/// extensions and the `-color-theme` suffix stripped.
pub fn theme_name(theme: &LoadedTheme, path: &Path) -> String {
    if let Some(name) = theme.name.as_ref().filter(|name| !name.is_empty()) {
        return name.clone();
    }

    static EXTENSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\.(jsonc?|json5)$").unwrap());
    static SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)-color-theme$").unwrap());

    let base = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = EXTENSION.replace(&base, "");
    SUFFIX.replace(&base, "").into_owned()
}

/// Where an audited foreground was found in the theme file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Workbench,
    Textmate,
    Semantic,
}

#[derive(Debug, Clone)]
pub struct ColorSource {
    pub kind: SourceKind,
    pub key: String,
}

/// A foreground color plus whether it came from the theme or a fallback.
#[derive(Debug, Clone)]
pub struct ColorValue {
    pub color: String,
    pub fallback: bool,
    pub source: ColorSource,
}

/// A fully resolved background surface.
#[derive(Debug, Clone)]
pub struct Surface {
    pub color: String,
    pub key: &'static str,
}

impl LoadedTheme {
    fn color_raw(&self, key: &str, fallback: &str) -> String {
        self.colors
            .as_ref()
            .and_then(|colors| colors.get(key))
            .filter(|color| !color.is_empty())
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Workbench color lookup. Missing and empty values fall back.
    pub fn workbench_color(&self, key: &str, fallback: &str) -> ColorValue {
        let color = self
            .colors
            .as_ref()
            .and_then(|colors| colors.get(key))
            .filter(|color| !color.is_empty());
        ColorValue {
            color: color.cloned().unwrap_or_else(|| fallback.to_string()),
            fallback: color.is_none(),
            source: ColorSource {
                kind: SourceKind::Workbench,
                key: key.to_string(),
            },
        }
    }

    /// Token color lookup using exact scope matching only.
    ///
    /// Full TextMate matching needs scope stacks we do not have, and prefix
    /// matching could report the wrong color for descendant selectors, so an
    /// unmatched scope reports as a fallback rather than a guess.
    ///
    /// Priority: semantic token (direct key lookup), then `tokenColors`
    /// exact scope match where the last definition wins.
    pub fn token_color(&self, scope: &str, semantic: Option<&str>) -> ColorValue {
        if let Some(semantic_key) = semantic {
            if self.semantic_highlighting != Some(false) {
                let found = self
                    .semantic_token_colors
                    .get(semantic_key)
                    .and_then(|value| value.foreground())
                    .filter(|color| !color.is_empty());
                if let Some(color) = found {
                    return ColorValue {
                        color: color.to_string(),
                        fallback: false,
                        source: ColorSource {
                            kind: SourceKind::Semantic,
                            key: semantic_key.to_string(),
                        },
                    };
                }
            }
        }

        let mut matched: Option<&str> = None;
        for entry in &self.token_colors {
            let foreground = entry
                .settings
                .as_ref()
                .and_then(|settings| settings.foreground.as_deref())
                .filter(|color| !color.is_empty());
            let Some(foreground) = foreground else {
                continue;
            };
            if entry
                .scope
                .as_ref()
                .map_or(false, |selector| selector.matches(scope))
            {
                matched = Some(foreground);
            }
        }

        ColorValue {
            color: matched.unwrap_or_default().to_string(),
            fallback: matched.is_none(),
            source: ColorSource {
                kind: SourceKind::Textmate,
                key: scope.to_string(),
            },
        }
    }
}

/// Blends a surface color with the one underneath it when it carries alpha.
pub fn resolve_transparent_bg(raw: &str, underlying: &str) -> Result<String, ColorError> {
    if !has_alpha_channel(raw) {
        return Ok(raw.to_string());
    }
    let alpha = extract_alpha(raw);
    if alpha >= 0.99 {
        return Ok(strip_alpha(raw).to_string());
    }
    blend_alpha(strip_alpha(raw), underlying, alpha)
}

fn or_fallback(value: ColorValue, fallback: &str) -> ColorValue {
    if value.fallback || value.color.is_empty() {
        ColorValue {
            color: fallback.to_string(),
            fallback: true,
            source: value.source,
        }
    } else {
        value
    }
}

/// Background surfaces the audit renders text onto, fully resolved.
#[derive(Debug, Clone)]
pub struct Backgrounds {
    pub editor: Surface,
    pub sidebar: Surface,
    pub status_bar: Surface,
    pub tab_bar: Surface,
    pub terminal: Surface,
    pub cursor_block: Surface,
    pub terminal_cursor_block: Surface,
    pub panel: Surface,
    pub activity_bar: Surface,
    pub input: Surface,
    pub list_selection: Surface,
    pub list_inactive_selection: Surface,
    pub list_hover: Surface,
    pub list_focus: Surface,
    pub inlay_hint: Surface,
    pub breadcrumb: Surface,
    pub sticky_scroll: Surface,
    pub editor_widget: Surface,
    pub suggest: Surface,
    pub hover: Surface,
    pub quick_input: Surface,
    pub quick_input_list_focus: Surface,
    pub menu: Surface,
    pub notification: Surface,
    pub peek_view: Surface,
    pub peek_view_selection: Surface,
    pub title_bar: Surface,
    pub title_bar_inactive: Surface,
    pub command_center: Surface,
    pub suggest_selected: Surface,
    pub inline_chat: Surface,
    pub button: Surface,
    pub button_secondary: Surface,
    pub badge: Surface,
    pub activity_bar_badge: Surface,
    pub dropdown: Surface,
    pub debug_toolbar: Surface,
    pub banner: Surface,
    pub keybinding_label: Surface,
    pub checkbox: Surface,
    pub extension_button: Surface,
    pub status_bar_item_error: Surface,
    pub status_bar_item_warning: Surface,
    pub status_bar_item_remote: Surface,
    pub status_bar_item_prominent: Surface,
    pub status_bar_item_offline: Surface,
    pub activity_warning_badge: Surface,
    pub activity_error_badge: Surface,
    pub selection: Surface,
    pub selection_inactive: Surface,
    pub selection_highlight: Surface,
    pub range_highlight: Surface,
    pub symbol_highlight: Surface,
    pub terminal_selection: Surface,
    pub word_highlight: Surface,
    pub word_highlight_strong: Surface,
    pub word_highlight_text: Surface,
    pub find_match: Surface,
    pub find_match_active: Surface,
    pub find_range: Surface,
    pub bracket_match: Surface,
    pub terminal_find_match: Surface,
    pub terminal_find_match_highlight: Surface,
    pub diff_inserted: Surface,
    pub diff_removed: Surface,
    pub diff_inserted_line: Surface,
    pub diff_removed_line: Surface,
    pub merge_current_content: Surface,
    pub merge_incoming_content: Surface,
    pub merge_common_content: Surface,
    pub input_validation_error: Surface,
    pub input_validation_warning: Surface,
    pub input_validation_info: Surface,
    pub peek_view_editor: Surface,
    pub search_editor_find_match: Surface,
    pub stack_frame: Surface,
    pub focused_stack_frame: Surface,
    pub linked_editing: Surface,
}

#[derive(Debug, Clone)]
pub struct CursorColors {
    pub editor: ColorValue,
    pub editor_block: ColorValue,
    pub editor_multi_primary: ColorValue,
    pub editor_multi_secondary: ColorValue,
    pub terminal: ColorValue,
    pub terminal_block: ColorValue,
}

#[derive(Debug, Clone)]
pub struct SyntaxColors {
    pub variable: ColorValue,
    pub variable_language: ColorValue,
    pub parameter: ColorValue,
    pub property: ColorValue,
    pub keyword: ColorValue,
    pub operator: ColorValue,
    pub storage: ColorValue,
    pub function: ColorValue,
    pub method: ColorValue,
    pub class: ColorValue,
    pub r#type: ColorValue,
    pub interface: ColorValue,
    pub namespace: ColorValue,
    pub r#enum: ColorValue,
    pub enum_member: ColorValue,
    pub type_parameter: ColorValue,
    pub number: ColorValue,
    pub string: ColorValue,
    pub string_escape: ColorValue,
    pub constant: ColorValue,
    pub regexp: ColorValue,
    pub tag: ColorValue,
    pub attribute: ColorValue,
    pub decorator: ColorValue,
    pub link: ColorValue,
    pub punctuation: ColorValue,
    pub r#macro: ColorValue,
    pub r#struct: ColorValue,
    pub invalid: ColorValue,
    pub deprecated: ColorValue,
    pub support_function: ColorValue,
    pub storage_modifier: ColorValue,
    pub markup_heading: ColorValue,
    pub markup_bold: ColorValue,
    pub markup_italic: ColorValue,
    pub markup_code: ColorValue,
    pub markup_quote: ColorValue,
    pub comment: ColorValue,
    pub doc_comment: ColorValue,
    pub warning: ColorValue,
    pub info: ColorValue,
    pub error: ColorValue,
}

impl SyntaxColors {
    /// Adjacency pair lookup by semantic token name.
    pub fn by_name(&self, name: &str) -> Option<&ColorValue> {
        match name {
            "variable" => Some(&self.variable),
            "parameter" => Some(&self.parameter),
            "property" => Some(&self.property),
            "keyword" => Some(&self.keyword),
            "operator" => Some(&self.operator),
            "function" => Some(&self.function),
            "method" => Some(&self.method),
            "class" => Some(&self.class),
            "type" => Some(&self.r#type),
            "namespace" => Some(&self.namespace),
            "enum" => Some(&self.r#enum),
            "enumMember" => Some(&self.enum_member),
            "number" => Some(&self.number),
            "constant" => Some(&self.constant),
            "comment" => Some(&self.comment),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiColors {
    pub foreground: ColorValue,
    pub icon_foreground: ColorValue,
    pub tab_active: ColorValue,
    pub tab_selected: ColorValue,
    pub tab_inactive: ColorValue,
    pub tab_unfocused: ColorValue,
    pub tab_unfocused_inactive: ColorValue,
    pub tab_hover: ColorValue,
    pub tab_unfocused_hover: ColorValue,
    pub title_bar: ColorValue,
    pub title_bar_inactive: ColorValue,
    pub breadcrumb: ColorValue,
    pub sidebar_text: ColorValue,
    pub sidebar_title: ColorValue,
    pub status_bar_text: ColorValue,
    pub status_bar_debug: ColorValue,
    pub status_bar_no_folder: ColorValue,
    pub status_bar_item_error: ColorValue,
    pub status_bar_item_warning: ColorValue,
    pub status_bar_item_remote: ColorValue,
    pub status_bar_item_prominent: ColorValue,
    pub status_bar_item_offline: ColorValue,
    pub status_bar_item_hover: ColorValue,
    pub line_number: ColorValue,
    pub line_number_active: ColorValue,
    pub line_number_dimmed: ColorValue,
    pub ghost_text: ColorValue,
    pub hint: ColorValue,
    pub inlay_hint: ColorValue,
    pub inlay_hint_type: ColorValue,
    pub inlay_hint_param: ColorValue,
    pub code_lens: ColorValue,
    pub light_bulb: ColorValue,
    pub light_bulb_auto_fix: ColorValue,
    pub light_bulb_ai: ColorValue,
    pub editor_link_active: ColorValue,
    pub whitespace: ColorValue,
    pub ruler: ColorValue,
    pub fold_placeholder: ColorValue,
    pub fold_control: ColorValue,
    pub terminal: ColorValue,
    pub terminal_selection: ColorValue,
    pub panel_title: ColorValue,
    pub panel_title_inactive: ColorValue,
    pub panel_title_badge: ColorValue,
    pub activity_bar: ColorValue,
    pub activity_bar_inactive: ColorValue,
    pub activity_bar_top: ColorValue,
    pub activity_bar_top_inactive: ColorValue,
    pub input: ColorValue,
    pub input_placeholder: ColorValue,
    pub input_validation_error: ColorValue,
    pub input_validation_warning: ColorValue,
    pub input_validation_info: ColorValue,
    pub list_selection: ColorValue,
    pub list_selection_icon: ColorValue,
    pub list_inactive_selection_icon: ColorValue,
    pub list_hover: ColorValue,
    pub list_focus: ColorValue,
    pub list_invalid_item: ColorValue,
    pub list_deemphasized: ColorValue,
    pub command_center: ColorValue,
    pub command_center_active: ColorValue,
    pub command_center_inactive: ColorValue,
    pub picker_group: ColorValue,
    pub selection_foreground: ColorValue,
    pub find_match_foreground: ColorValue,
    pub find_match_highlight_foreground: ColorValue,
    pub word_highlight_foreground: ColorValue,
    pub word_highlight_strong_foreground: ColorValue,
    pub word_highlight_text_foreground: ColorValue,
    pub text_preformat: ColorValue,
    pub text_link_active: ColorValue,
    pub menubar_selection: ColorValue,
    pub checkbox: ColorValue,
}

#[derive(Debug, Clone)]
pub struct WidgetColors {
    pub editor_widget: ColorValue,
    pub action_list: ColorValue,
    pub action_list_focus: ColorValue,
    pub suggest: ColorValue,
    pub suggest_selected: ColorValue,
    pub suggest_selected_icon: ColorValue,
    pub suggest_highlight: ColorValue,
    pub suggest_focus_highlight: ColorValue,
    pub hover: ColorValue,
    pub hover_highlight: ColorValue,
    pub quick_input: ColorValue,
    pub quick_input_list_focus: ColorValue,
    pub quick_input_list_focus_icon: ColorValue,
    pub menu: ColorValue,
    pub menu_selection: ColorValue,
    pub notification: ColorValue,
    pub notification_link: ColorValue,
    pub notification_header: ColorValue,
    pub notification_error_icon: ColorValue,
    pub notification_warning_icon: ColorValue,
    pub notification_info_icon: ColorValue,
    pub peek_view: ColorValue,
    pub inline_chat: ColorValue,
    pub inline_chat_placeholder: ColorValue,
    pub suggest_widget_status: ColorValue,
}

#[derive(Debug, Clone)]
pub struct GitColors {
    pub added: ColorValue,
    pub modified: ColorValue,
    pub deleted: ColorValue,
    pub renamed: ColorValue,
    pub untracked: ColorValue,
    pub ignored: ColorValue,
    pub conflict: ColorValue,
    pub submodule: ColorValue,
    pub stage_modified: ColorValue,
    pub stage_deleted: ColorValue,
}

#[derive(Debug, Clone)]
pub struct BracketColors {
    pub bracket1: ColorValue,
    pub bracket2: ColorValue,
    pub bracket3: ColorValue,
    pub bracket4: ColorValue,
    pub bracket5: ColorValue,
    pub bracket6: ColorValue,
    pub unexpected: ColorValue,
}

#[derive(Debug, Clone)]
pub struct TerminalColors {
    pub ansi_black: ColorValue,
    pub ansi_red: ColorValue,
    pub ansi_green: ColorValue,
    pub ansi_yellow: ColorValue,
    pub ansi_blue: ColorValue,
    pub ansi_magenta: ColorValue,
    pub ansi_cyan: ColorValue,
    pub ansi_white: ColorValue,
    pub ansi_bright_black: ColorValue,
    pub ansi_bright_red: ColorValue,
    pub ansi_bright_green: ColorValue,
    pub ansi_bright_yellow: ColorValue,
    pub ansi_bright_blue: ColorValue,
    pub ansi_bright_magenta: ColorValue,
    pub ansi_bright_cyan: ColorValue,
    pub ansi_bright_white: ColorValue,
}

#[derive(Debug, Clone)]
pub struct ButtonColors {
    pub button: ColorValue,
    pub button_secondary: ColorValue,
    pub extension_button: ColorValue,
    pub badge: ColorValue,
    pub activity_bar_badge: ColorValue,
    pub activity_warning_badge: ColorValue,
    pub activity_error_badge: ColorValue,
    pub dropdown: ColorValue,
}

#[derive(Debug, Clone)]
pub struct DebugColors {
    pub token_name: ColorValue,
    pub token_value: ColorValue,
    pub token_string: ColorValue,
    pub token_number: ColorValue,
    pub token_boolean: ColorValue,
    pub token_error: ColorValue,
    pub token_type: ColorValue,
    pub inline_value: ColorValue,
    pub exception_label: ColorValue,
    pub state_label: ColorValue,
}

#[derive(Debug, Clone)]
pub struct LinkColors {
    pub text_link: ColorValue,
    pub list_highlight: ColorValue,
    pub list_focus_highlight: ColorValue,
    pub list_inactive_selection: ColorValue,
    pub list_error: ColorValue,
    pub list_warning: ColorValue,
}

#[derive(Debug, Clone)]
pub struct MiscColors {
    pub sidebar_section_header: ColorValue,
    pub panel_section_header: ColorValue,
    pub keybinding_label: ColorValue,
    pub banner: ColorValue,
    pub banner_icon: ColorValue,
    pub peek_view_title: ColorValue,
    pub peek_view_description: ColorValue,
    pub peek_view_file: ColorValue,
    pub peek_view_selection: ColorValue,
    pub problems_error: ColorValue,
    pub problems_warning: ColorValue,
    pub problems_info: ColorValue,
    pub search_results_info: ColorValue,
    pub description: ColorValue,
    pub disabled: ColorValue,
    pub error_fg: ColorValue,
    pub git_blame: ColorValue,
    pub diff_unchanged_region: ColorValue,
    pub editor_placeholder: ColorValue,
    pub terminal_command_guide: ColorValue,
    pub terminal_initial_hint: ColorValue,
    pub walkthrough_step_title: ColorValue,
    pub welcome_progress: ColorValue,
    pub profile_badge: ColorValue,
}

#[derive(Debug, Clone)]
pub struct InputColors {
    pub option_active: ColorValue,
    pub radio_active: ColorValue,
    pub radio_inactive: ColorValue,
    pub checkbox_disabled: ColorValue,
}

#[derive(Debug, Clone)]
pub struct ScmColors {
    pub history_hover_label: ColorValue,
    pub history_hover_additions: ColorValue,
    pub history_hover_deletions: ColorValue,
}

#[derive(Debug, Clone)]
pub struct ChatColors {
    pub avatar: ColorValue,
    pub lines_added: ColorValue,
    pub lines_removed: ColorValue,
    pub slash_command: ColorValue,
    pub edited_file: ColorValue,
}

#[derive(Debug, Clone)]
pub struct TestingColors {
    pub coverage_badge: ColorValue,
    pub message_info: ColorValue,
}

#[derive(Debug, Clone)]
pub struct DebugConsoleColors {
    pub error: ColorValue,
    pub warning: ColorValue,
    pub info: ColorValue,
    pub source: ColorValue,
}

#[derive(Debug, Clone)]
pub struct SymbolIconColors {
    pub array: ColorValue,
    pub boolean: ColorValue,
    pub class: ColorValue,
    pub constant: ColorValue,
    pub ctor: ColorValue,
    pub r#enum: ColorValue,
    pub enum_member: ColorValue,
    pub event: ColorValue,
    pub field: ColorValue,
    pub file: ColorValue,
    pub folder: ColorValue,
    pub function: ColorValue,
    pub interface: ColorValue,
    pub key: ColorValue,
    pub keyword: ColorValue,
    pub method: ColorValue,
    pub module: ColorValue,
    pub namespace: ColorValue,
    pub null: ColorValue,
    pub number: ColorValue,
    pub object: ColorValue,
    pub operator: ColorValue,
    pub package: ColorValue,
    pub property: ColorValue,
    pub reference: ColorValue,
    pub snippet: ColorValue,
    pub string: ColorValue,
    pub r#struct: ColorValue,
    pub text: ColorValue,
    pub type_parameter: ColorValue,
    pub unit: ColorValue,
    pub variable: ColorValue,
}

impl SymbolIconColors {
    /// Discrimination pair lookup by symbol icon name.
    pub fn by_name(&self, name: &str) -> Option<&ColorValue> {
        match name {
            "array" => Some(&self.array),
            "boolean" => Some(&self.boolean),
            "class" => Some(&self.class),
            "constant" => Some(&self.constant),
            "ctor" => Some(&self.ctor),
            "enum" => Some(&self.r#enum),
            "enumMember" => Some(&self.enum_member),
            "event" => Some(&self.event),
            "field" => Some(&self.field),
            "file" => Some(&self.file),
            "folder" => Some(&self.folder),
            "function" => Some(&self.function),
            "interface" => Some(&self.interface),
            "key" => Some(&self.key),
            "keyword" => Some(&self.keyword),
            "method" => Some(&self.method),
            "module" => Some(&self.module),
            "namespace" => Some(&self.namespace),
            "null" => Some(&self.null),
            "number" => Some(&self.number),
            "object" => Some(&self.object),
            "operator" => Some(&self.operator),
            "package" => Some(&self.package),
            "property" => Some(&self.property),
            "reference" => Some(&self.reference),
            "snippet" => Some(&self.snippet),
            "string" => Some(&self.string),
            "struct" => Some(&self.r#struct),
            "text" => Some(&self.text),
            "typeParameter" => Some(&self.type_parameter),
            "unit" => Some(&self.unit),
            "variable" => Some(&self.variable),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsColors {
    pub header: ColorValue,
    pub text_input: ColorValue,
    pub number_input: ColorValue,
    pub checkbox: ColorValue,
    pub dropdown: ColorValue,
}

#[derive(Debug, Clone)]
pub struct ChartColors {
    pub foreground: ColorValue,
}

/// Every audited color, grouped the way the report sections walk them.
#[derive(Debug, Clone)]
pub struct ExtractedColors {
    pub fg: ColorValue,
    pub bg: Backgrounds,
    pub cursor: CursorColors,
    pub syntax: SyntaxColors,
    pub ui: UiColors,
    pub widgets: WidgetColors,
    pub git: GitColors,
    pub brackets: BracketColors,
    pub terminal: TerminalColors,
    pub buttons: ButtonColors,
    pub debug: DebugColors,
    pub links: LinkColors,
    pub misc: MiscColors,
    pub inputs: InputColors,
    pub scm: ScmColors,
    pub chat: ChatColors,
    pub testing: TestingColors,
    pub debug_console: DebugConsoleColors,
    pub symbol_icons: SymbolIconColors,
    pub settings: SettingsColors,
    pub charts: ChartColors,
}

/// Resolves every audited color group from a loaded theme.
///
/// Transparent backgrounds are blended with the surface underneath them:
/// most sit on the editor background, list rows sit on the sidebar, and
/// terminal surfaces sit on the panel.
pub fn extract_colors(theme: &LoadedTheme) -> Result<ExtractedColors, AuditError> {
    let colors = theme.colors.as_ref().ok_or(AuditError::MissingColors)?;
    let editor_bg = colors
        .get("editor.background")
        .cloned()
        .ok_or(AuditError::MissingEditorBackground)?;
    let fg = colors
        .get("editor.foreground")
        .cloned()
        .ok_or(AuditError::MissingEditorForeground)?;

    let surface = |key: &'static str, underlying: &str| -> Result<Surface, ColorError> {
        let raw = theme.color_raw(key, underlying);
        Ok(Surface {
            color: resolve_transparent_bg(&raw, underlying)?,
            key,
        })
    };

    let sidebar = surface("sideBar.background", &editor_bg)?;
    let panel = surface("panel.background", &editor_bg)?;

    let bg = Backgrounds {
        editor: Surface {
            color: editor_bg.clone(),
            key: "editor.background",
        },
        sidebar: sidebar.clone(),
        status_bar: surface("statusBar.background", &editor_bg)?,
        tab_bar: surface("editorGroupHeader.tabsBackground", &editor_bg)?,
        terminal: surface("terminal.background", &panel.color)?,
        // Block cursors paint the glyph cell with the cursor color, so the
        // cursor foreground acts as the background for the text inside it.
        cursor_block: surface("editorCursor.foreground", &fg)?,
        terminal_cursor_block: surface("terminalCursor.foreground", &fg)?,
        panel: panel.clone(),
        activity_bar: surface("activityBar.background", &editor_bg)?,
        input: surface("input.background", &editor_bg)?,
        list_selection: surface("list.activeSelectionBackground", &sidebar.color)?,
        list_inactive_selection: surface("list.inactiveSelectionBackground", &sidebar.color)?,
        list_hover: surface("list.hoverBackground", &sidebar.color)?,
        list_focus: surface("list.focusBackground", &sidebar.color)?,
        inlay_hint: surface("editorInlayHint.background", &editor_bg)?,
        breadcrumb: surface("breadcrumb.background", &editor_bg)?,
        sticky_scroll: surface("editorStickyScroll.background", &editor_bg)?,
        editor_widget: surface("editorWidget.background", &editor_bg)?,
        suggest: surface("editorSuggestWidget.background", &editor_bg)?,
        hover: surface("editorHoverWidget.background", &editor_bg)?,
        quick_input: surface("quickInput.background", &editor_bg)?,
        quick_input_list_focus: surface("quickInputList.focusBackground", &editor_bg)?,
        menu: surface("menu.background", &editor_bg)?,
        notification: surface("notifications.background", &editor_bg)?,
        peek_view: surface("peekViewResult.background", &editor_bg)?,
        peek_view_selection: surface("peekViewResult.selectionBackground", &editor_bg)?,
        title_bar: surface("titleBar.activeBackground", &editor_bg)?,
        title_bar_inactive: surface("titleBar.inactiveBackground", &editor_bg)?,
        command_center: surface("commandCenter.background", &editor_bg)?,
        suggest_selected: surface("editorSuggestWidget.selectedBackground", &editor_bg)?,
        inline_chat: surface("inlineChat.background", &editor_bg)?,
        button: surface("button.background", &editor_bg)?,
        button_secondary: surface("button.secondaryBackground", &editor_bg)?,
        badge: surface("badge.background", &editor_bg)?,
        activity_bar_badge: surface("activityBarBadge.background", &editor_bg)?,
        dropdown: surface("dropdown.background", &editor_bg)?,
        debug_toolbar: surface("debugToolBar.background", &editor_bg)?,
        banner: surface("banner.background", &editor_bg)?,
        keybinding_label: surface("keybindingLabel.background", &editor_bg)?,
        checkbox: surface("checkbox.background", &editor_bg)?,
        extension_button: surface("extensionButton.prominentBackground", &editor_bg)?,
        status_bar_item_error: surface("statusBarItem.errorBackground", &editor_bg)?,
        status_bar_item_warning: surface("statusBarItem.warningBackground", &editor_bg)?,
        status_bar_item_remote: surface("statusBarItem.remoteBackground", &editor_bg)?,
        status_bar_item_prominent: surface("statusBarItem.prominentBackground", &editor_bg)?,
        status_bar_item_offline: surface("statusBarItem.offlineBackground", &editor_bg)?,
        activity_warning_badge: surface("activityWarningBadge.background", &editor_bg)?,
        activity_error_badge: surface("activityErrorBadge.background", &editor_bg)?,
        selection: surface("editor.selectionBackground", &editor_bg)?,
        selection_inactive: surface("editor.inactiveSelectionBackground", &editor_bg)?,
        selection_highlight: surface("editor.selectionHighlightBackground", &editor_bg)?,
        range_highlight: surface("editor.rangeHighlightBackground", &editor_bg)?,
        symbol_highlight: surface("editor.symbolHighlightBackground", &editor_bg)?,
        terminal_selection: surface("terminal.selectionBackground", &panel.color)?,
        word_highlight: surface("editor.wordHighlightBackground", &editor_bg)?,
        word_highlight_strong: surface("editor.wordHighlightStrongBackground", &editor_bg)?,
        word_highlight_text: surface("editor.wordHighlightTextBackground", &editor_bg)?,
        find_match: surface("editor.findMatchHighlightBackground", &editor_bg)?,
        find_match_active: surface("editor.findMatchBackground", &editor_bg)?,
        find_range: surface("editor.findRangeHighlightBackground", &editor_bg)?,
        bracket_match: surface("editorBracketMatch.background", &editor_bg)?,
        terminal_find_match: surface("terminal.findMatchBackground", &panel.color)?,
        terminal_find_match_highlight: surface(
            "terminal.findMatchHighlightBackground",
            &panel.color,
        )?,
        diff_inserted: surface("diffEditor.insertedTextBackground", &editor_bg)?,
        diff_removed: surface("diffEditor.removedTextBackground", &editor_bg)?,
        diff_inserted_line: surface("diffEditor.insertedLineBackground", &editor_bg)?,
        diff_removed_line: surface("diffEditor.removedLineBackground", &editor_bg)?,
        merge_current_content: surface("merge.currentContentBackground", &editor_bg)?,
        merge_incoming_content: surface("merge.incomingContentBackground", &editor_bg)?,
        merge_common_content: surface("merge.commonContentBackground", &editor_bg)?,
        input_validation_error: surface("inputValidation.errorBackground", &editor_bg)?,
        input_validation_warning: surface("inputValidation.warningBackground", &editor_bg)?,
        input_validation_info: surface("inputValidation.infoBackground", &editor_bg)?,
        peek_view_editor: surface("peekViewEditor.background", &editor_bg)?,
        search_editor_find_match: surface("searchEditor.findMatchBackground", &editor_bg)?,
        stack_frame: surface("editor.stackFrameHighlightBackground", &editor_bg)?,
        focused_stack_frame: surface("editor.focusedStackFrameHighlightBackground", &editor_bg)?,
        linked_editing: surface("editor.linkedEditingBackground", &editor_bg)?,
    };

    let color = |key: &str| theme.workbench_color(key, &fg);
    let token = |scope: &str, semantic: Option<&str>| {
        or_fallback(theme.token_color(scope, semantic), &fg)
    };

    Ok(ExtractedColors {
        fg: ColorValue {
            color: fg.clone(),
            fallback: false,
            source: ColorSource {
                kind: SourceKind::Workbench,
                key: "editor.foreground".to_string(),
            },
        },
        bg,
        cursor: CursorColors {
            editor: color("editorCursor.foreground"),
            editor_block: color("editorCursor.background"),
            editor_multi_primary: color("editorMultiCursor.primary.foreground"),
            editor_multi_secondary: color("editorMultiCursor.secondary.foreground"),
            terminal: color("terminalCursor.foreground"),
            terminal_block: color("terminalCursor.background"),
        },
        syntax: SyntaxColors {
            variable: token("variable", Some("variable")),
            variable_language: token("variable.language", None),
            parameter: token("variable.parameter", Some("parameter")),
            property: token("variable.other.property", Some("property")),
            keyword: token("keyword", Some("keyword")),
            operator: token("keyword.operator", Some("operator")),
            storage: token("storage.type", None),
            function: token("entity.name.function", Some("function")),
            method: token("entity.name.function.method", Some("method")),
            class: token("entity.name.class", Some("class")),
            r#type: token("entity.name.type", Some("type")),
            interface: token("entity.name.type.interface", Some("interface")),
            namespace: token("entity.name.namespace", Some("namespace")),
            r#enum: token("entity.name.type.enum", Some("enum")),
            enum_member: token("variable.other.enummember", Some("enumMember")),
            type_parameter: token("entity.name.type.parameter", Some("typeParameter")),
            number: token("constant.numeric", Some("number")),
            string: token("string", Some("string")),
            string_escape: token("constant.character.escape", None),
            constant: token("constant.language", None),
            regexp: token("string.regexp", Some("regexp")),
            tag: token("entity.name.tag", None),
            attribute: token("entity.other.attribute-name", None),
            decorator: token("entity.name.function.decorator", Some("decorator")),
            link: token("markup.underline.link", None),
            punctuation: token("punctuation", None),
            r#macro: token("entity.name.function.preprocessor", Some("macro")),
            r#struct: token("entity.name.type.struct", Some("struct")),
            invalid: token("invalid.illegal", None),
            deprecated: token("invalid.deprecated", None),
            support_function: token("support.function", None),
            storage_modifier: token("storage.modifier", None),
            markup_heading: token("markup.heading", None),
            markup_bold: token("markup.bold", None),
            markup_italic: token("markup.italic", None),
            markup_code: token("markup.inline.raw", None),
            markup_quote: token("markup.quote", None),
            comment: token("comment", Some("comment")),
            doc_comment: {
                let doc = theme.token_color("comment.block.documentation", None);
                let picked = if doc.fallback {
                    theme.token_color("comment", Some("comment"))
                } else {
                    doc
                };
                or_fallback(picked, &fg)
            },
            warning: color("editorWarning.foreground"),
            info: color("editorInfo.foreground"),
            error: color("editorError.foreground"),
        },
        ui: UiColors {
            foreground: color("foreground"),
            icon_foreground: color("icon.foreground"),
            tab_active: color("tab.activeForeground"),
            tab_selected: color("tab.selectedForeground"),
            tab_inactive: color("tab.inactiveForeground"),
            tab_unfocused: color("tab.unfocusedActiveForeground"),
            tab_unfocused_inactive: color("tab.unfocusedInactiveForeground"),
            tab_hover: color("tab.hoverForeground"),
            tab_unfocused_hover: color("tab.unfocusedHoverForeground"),
            title_bar: color("titleBar.activeForeground"),
            title_bar_inactive: color("titleBar.inactiveForeground"),
            breadcrumb: color("breadcrumb.foreground"),
            sidebar_text: color("sideBar.foreground"),
            sidebar_title: color("sideBarTitle.foreground"),
            status_bar_text: color("statusBar.foreground"),
            status_bar_debug: color("statusBar.debuggingForeground"),
            status_bar_no_folder: color("statusBar.noFolderForeground"),
            status_bar_item_error: color("statusBarItem.errorForeground"),
            status_bar_item_warning: color("statusBarItem.warningForeground"),
            status_bar_item_remote: color("statusBarItem.remoteForeground"),
            status_bar_item_prominent: color("statusBarItem.prominentForeground"),
            status_bar_item_offline: color("statusBarItem.offlineForeground"),
            status_bar_item_hover: color("statusBarItem.hoverForeground"),
            line_number: color("editorLineNumber.foreground"),
            line_number_active: color("editorLineNumber.activeForeground"),
            line_number_dimmed: color("editorLineNumber.dimmedForeground"),
            ghost_text: color("editorGhostText.foreground"),
            hint: color("editorHint.foreground"),
            inlay_hint: color("editorInlayHint.foreground"),
            inlay_hint_type: color("editorInlayHint.typeForeground"),
            inlay_hint_param: color("editorInlayHint.parameterForeground"),
            code_lens: color("editorCodeLens.foreground"),
            light_bulb: color("editorLightBulb.foreground"),
            light_bulb_auto_fix: color("editorLightBulbAutoFix.foreground"),
            light_bulb_ai: color("editorLightBulbAi.foreground"),
            editor_link_active: color("editorLink.activeForeground"),
            whitespace: color("editorWhitespace.foreground"),
            ruler: color("editorRuler.foreground"),
            fold_placeholder: color("editor.foldPlaceholderForeground"),
            fold_control: color("editorGutter.foldingControlForeground"),
            terminal: color("terminal.foreground"),
            terminal_selection: color("terminal.selectionForeground"),
            panel_title: color("panelTitle.activeForeground"),
            panel_title_inactive: color("panelTitle.inactiveForeground"),
            panel_title_badge: color("panelTitleBadge.foreground"),
            activity_bar: color("activityBar.foreground"),
            activity_bar_inactive: color("activityBar.inactiveForeground"),
            activity_bar_top: color("activityBarTop.foreground"),
            activity_bar_top_inactive: color("activityBarTop.inactiveForeground"),
            input: color("input.foreground"),
            input_placeholder: color("input.placeholderForeground"),
            input_validation_error: color("inputValidation.errorForeground"),
            input_validation_warning: color("inputValidation.warningForeground"),
            input_validation_info: color("inputValidation.infoForeground"),
            list_selection: color("list.activeSelectionForeground"),
            list_selection_icon: color("list.activeSelectionIconForeground"),
            list_inactive_selection_icon: color("list.inactiveSelectionIconForeground"),
            list_hover: color("list.hoverForeground"),
            list_focus: color("list.focusForeground"),
            list_invalid_item: color("list.invalidItemForeground"),
            list_deemphasized: color("list.deemphasizedForeground"),
            command_center: color("commandCenter.foreground"),
            command_center_active: color("commandCenter.activeForeground"),
            command_center_inactive: color("commandCenter.inactiveForeground"),
            picker_group: color("pickerGroup.foreground"),
            // These override syntax colors only when the theme defines them,
            // so they fall back to empty instead of the editor foreground.
            selection_foreground: theme.workbench_color("editor.selectionForeground", ""),
            find_match_foreground: theme.workbench_color("editor.findMatchForeground", ""),
            find_match_highlight_foreground: theme
                .workbench_color("editor.findMatchHighlightForeground", ""),
            word_highlight_foreground: theme.workbench_color("editor.wordHighlightForeground", ""),
            word_highlight_strong_foreground: theme
                .workbench_color("editor.wordHighlightStrongForeground", ""),
            word_highlight_text_foreground: theme
                .workbench_color("editor.wordHighlightTextForeground", ""),
            text_preformat: color("textPreformat.foreground"),
            text_link_active: color("textLink.activeForeground"),
            menubar_selection: color("menubar.selectionForeground"),
            checkbox: color("checkbox.foreground"),
        },
        widgets: WidgetColors {
            editor_widget: color("editorWidget.foreground"),
            action_list: color("editorActionList.foreground"),
            action_list_focus: color("editorActionList.focusForeground"),
            suggest: color("editorSuggestWidget.foreground"),
            suggest_selected: color("editorSuggestWidget.selectedForeground"),
            suggest_selected_icon: color("editorSuggestWidget.selectedIconForeground"),
            suggest_highlight: color("editorSuggestWidget.highlightForeground"),
            suggest_focus_highlight: color("editorSuggestWidget.focusHighlightForeground"),
            hover: color("editorHoverWidget.foreground"),
            hover_highlight: color("editorHoverWidget.highlightForeground"),
            quick_input: color("quickInput.foreground"),
            quick_input_list_focus: color("quickInputList.focusForeground"),
            quick_input_list_focus_icon: color("quickInputList.focusIconForeground"),
            menu: color("menu.foreground"),
            menu_selection: color("menu.selectionForeground"),
            notification: color("notifications.foreground"),
            notification_link: color("notificationLink.foreground"),
            notification_header: color("notificationCenterHeader.foreground"),
            notification_error_icon: color("notificationsErrorIcon.foreground"),
            notification_warning_icon: color("notificationsWarningIcon.foreground"),
            notification_info_icon: color("notificationsInfoIcon.foreground"),
            peek_view: color("peekViewResult.lineForeground"),
            inline_chat: color("inlineChat.foreground"),
            inline_chat_placeholder: color("inlineChatInput.placeholderForeground"),
            suggest_widget_status: color("editorSuggestWidgetStatus.foreground"),
        },
        git: GitColors {
            added: color("gitDecoration.addedResourceForeground"),
            modified: color("gitDecoration.modifiedResourceForeground"),
            deleted: color("gitDecoration.deletedResourceForeground"),
            renamed: color("gitDecoration.renamedResourceForeground"),
            untracked: color("gitDecoration.untrackedResourceForeground"),
            ignored: color("gitDecoration.ignoredResourceForeground"),
            conflict: color("gitDecoration.conflictingResourceForeground"),
            submodule: color("gitDecoration.submoduleResourceForeground"),
            stage_modified: color("gitDecoration.stageModifiedResourceForeground"),
            stage_deleted: color("gitDecoration.stageDeletedResourceForeground"),
        },
        brackets: BracketColors {
            bracket1: color("editorBracketHighlight.foreground1"),
            bracket2: color("editorBracketHighlight.foreground2"),
            bracket3: color("editorBracketHighlight.foreground3"),
            bracket4: color("editorBracketHighlight.foreground4"),
            bracket5: color("editorBracketHighlight.foreground5"),
            bracket6: color("editorBracketHighlight.foreground6"),
            unexpected: color("editorBracketHighlight.unexpectedBracket.foreground"),
        },
        terminal: TerminalColors {
            ansi_black: color("terminal.ansiBlack"),
            ansi_red: color("terminal.ansiRed"),
            ansi_green: color("terminal.ansiGreen"),
            ansi_yellow: color("terminal.ansiYellow"),
            ansi_blue: color("terminal.ansiBlue"),
            ansi_magenta: color("terminal.ansiMagenta"),
            ansi_cyan: color("terminal.ansiCyan"),
            ansi_white: color("terminal.ansiWhite"),
            ansi_bright_black: color("terminal.ansiBrightBlack"),
            ansi_bright_red: color("terminal.ansiBrightRed"),
            ansi_bright_green: color("terminal.ansiBrightGreen"),
            ansi_bright_yellow: color("terminal.ansiBrightYellow"),
            ansi_bright_blue: color("terminal.ansiBrightBlue"),
            ansi_bright_magenta: color("terminal.ansiBrightMagenta"),
            ansi_bright_cyan: color("terminal.ansiBrightCyan"),
            ansi_bright_white: color("terminal.ansiBrightWhite"),
        },
        buttons: ButtonColors {
            button: color("button.foreground"),
            button_secondary: color("button.secondaryForeground"),
            extension_button: color("extensionButton.prominentForeground"),
            badge: color("badge.foreground"),
            activity_bar_badge: color("activityBarBadge.foreground"),
            activity_warning_badge: color("activityWarningBadge.foreground"),
            activity_error_badge: color("activityErrorBadge.foreground"),
            dropdown: color("dropdown.foreground"),
        },
        debug: DebugColors {
            token_name: color("debugTokenExpression.name"),
            token_value: color("debugTokenExpression.value"),
            token_string: color("debugTokenExpression.string"),
            token_number: color("debugTokenExpression.number"),
            token_boolean: color("debugTokenExpression.boolean"),
            token_error: color("debugTokenExpression.error"),
            token_type: color("debugTokenExpression.type"),
            inline_value: color("editor.inlineValuesForeground"),
            exception_label: color("debugView.exceptionLabelForeground"),
            state_label: color("debugView.stateLabelForeground"),
        },
        links: LinkColors {
            text_link: color("textLink.foreground"),
            list_highlight: color("list.highlightForeground"),
            list_focus_highlight: color("list.focusHighlightForeground"),
            list_inactive_selection: color("list.inactiveSelectionForeground"),
            list_error: color("list.errorForeground"),
            list_warning: color("list.warningForeground"),
        },
        misc: MiscColors {
            sidebar_section_header: color("sideBarSectionHeader.foreground"),
            panel_section_header: color("panelSectionHeader.foreground"),
            keybinding_label: color("keybindingLabel.foreground"),
            banner: color("banner.foreground"),
            banner_icon: color("banner.iconForeground"),
            peek_view_title: color("peekViewTitleLabel.foreground"),
            peek_view_description: color("peekViewTitleDescription.foreground"),
            peek_view_file: color("peekViewResult.fileForeground"),
            peek_view_selection: color("peekViewResult.selectionForeground"),
            problems_error: color("problemsErrorIcon.foreground"),
            problems_warning: color("problemsWarningIcon.foreground"),
            problems_info: color("problemsInfoIcon.foreground"),
            search_results_info: color("search.resultsInfoForeground"),
            description: color("descriptionForeground"),
            disabled: color("disabledForeground"),
            error_fg: color("errorForeground"),
            git_blame: color("git.blame.editorDecorationForeground"),
            diff_unchanged_region: color("diffEditor.unchangedRegionForeground"),
            editor_placeholder: color("editor.placeholder.foreground"),
            terminal_command_guide: color("terminalCommandGuide.foreground"),
            terminal_initial_hint: color("terminal.initialHintForeground"),
            walkthrough_step_title: color("walkthrough.stepTitle.foreground"),
            welcome_progress: color("welcomePage.progress.foreground"),
            profile_badge: color("profileBadge.foreground"),
        },
        inputs: InputColors {
            option_active: color("inputOption.activeForeground"),
            radio_active: color("radio.activeForeground"),
            radio_inactive: color("radio.inactiveForeground"),
            checkbox_disabled: color("checkbox.disabled.foreground"),
        },
        scm: ScmColors {
            history_hover_label: color("scmGraph.historyItemHoverLabelForeground"),
            history_hover_additions: color("scmGraph.historyItemHoverAdditionsForeground"),
            history_hover_deletions: color("scmGraph.historyItemHoverDeletionsForeground"),
        },
        chat: ChatColors {
            avatar: color("chat.avatarForeground"),
            lines_added: color("chat.linesAddedForeground"),
            lines_removed: color("chat.linesRemovedForeground"),
            slash_command: color("chat.slashCommandForeground"),
            edited_file: color("chat.editedFileForeground"),
        },
        testing: TestingColors {
            coverage_badge: color("testing.coverCountBadgeForeground"),
            message_info: color("testing.message.info.decorationForeground"),
        },
        debug_console: DebugConsoleColors {
            error: color("debugConsole.errorForeground"),
            warning: color("debugConsole.warningForeground"),
            info: color("debugConsole.infoForeground"),
            source: color("debugConsole.sourceForeground"),
        },
        symbol_icons: SymbolIconColors {
            array: color("symbolIcon.arrayForeground"),
            boolean: color("symbolIcon.booleanForeground"),
            class: color("symbolIcon.classForeground"),
            constant: color("symbolIcon.constantForeground"),
            ctor: color("symbolIcon.constructorForeground"),
            r#enum: color("symbolIcon.enumeratorForeground"),
            enum_member: color("symbolIcon.enumeratorMemberForeground"),
            event: color("symbolIcon.eventForeground"),
            field: color("symbolIcon.fieldForeground"),
            file: color("symbolIcon.fileForeground"),
            folder: color("symbolIcon.folderForeground"),
            function: color("symbolIcon.functionForeground"),
            interface: color("symbolIcon.interfaceForeground"),
            key: color("symbolIcon.keyForeground"),
            keyword: color("symbolIcon.keywordForeground"),
            method: color("symbolIcon.methodForeground"),
            module: color("symbolIcon.moduleForeground"),
            namespace: color("symbolIcon.namespaceForeground"),
            null: color("symbolIcon.nullForeground"),
            number: color("symbolIcon.numberForeground"),
            object: color("symbolIcon.objectForeground"),
            operator: color("symbolIcon.operatorForeground"),
            package: color("symbolIcon.packageForeground"),
            property: color("symbolIcon.propertyForeground"),
            reference: color("symbolIcon.referenceForeground"),
            snippet: color("symbolIcon.snippetForeground"),
            string: color("symbolIcon.stringForeground"),
            r#struct: color("symbolIcon.structForeground"),
            text: color("symbolIcon.textForeground"),
            type_parameter: color("symbolIcon.typeParameterForeground"),
            unit: color("symbolIcon.unitForeground"),
            variable: color("symbolIcon.variableForeground"),
        },
        settings: SettingsColors {
            header: color("settings.headerForeground"),
            text_input: color("settings.textInputForeground"),
            number_input: color("settings.numberInputForeground"),
            checkbox: color("settings.checkboxForeground"),
            dropdown: color("settings.dropdownForeground"),
        },
        charts: ChartColors {
            foreground: color("charts.foreground"),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_theme() -> LoadedTheme {
        let json = r##"{
            "name": "Sample",
            "type": "dark",
            "colors": {
                "editor.background": "#0D1114",
                "editor.foreground": "#C8DCD9",
                "sideBar.background": "#10151880",
                "tab.activeForeground": "#39C5BB",
                "badge.background": ""
            },
            "semanticTokenColors": {
                "variable": "#C8DCD9",
                "keyword": { "foreground": "#FFB8D4" },
                "operator": { "fontStyle": "bold" }
            },
            "tokenColors": [
                { "scope": "keyword, keyword.other", "settings": { "foreground": "#FF0000" } },
                { "scope": ["string", "string.quoted"], "settings": { "foreground": "#9CCC65" } },
                { "scope": "keyword", "settings": { "foreground": "#00FF00" } },
                { "scope": "comment", "settings": { "fontStyle": "italic" } }
            ]
        }"##;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn strips_line_and_block_comments() {
        let jsonc = "{\n  // line comment\n  \"a\": 1, /* block */ \"b\": \"x//y\",\n}";
        assert_eq!(
            strip_json_comments(jsonc),
            "{\n  \n  \"a\": 1,  \"b\": \"x//y\"\n}"
        );
    }

    #[test]
    fn drops_trailing_commas() {
        let jsonc = "{\"list\": [1, 2, 3,], \"a\": 1,}";
        assert_eq!(strip_json_comments(jsonc), "{\"list\": [1, 2, 3], \"a\": 1}");
    }

    #[test]
    fn keeps_escaped_quotes_inside_strings() {
        let jsonc = r#"{"a": "quote \" // not a comment"}"#;
        assert_eq!(strip_json_comments(jsonc), jsonc);
    }

    #[test]
    fn semantic_tokens_win_over_textmate() {
        let theme = sample_theme();
        let keyword = theme.token_color("keyword", Some("keyword"));
        assert_eq!(keyword.color, "#FFB8D4");
        assert_eq!(keyword.source.kind, SourceKind::Semantic);
    }

    #[test]
    fn last_textmate_definition_wins() {
        let mut theme = sample_theme();
        theme.semantic_token_colors.clear();
        let keyword = theme.token_color("keyword", Some("keyword"));
        assert_eq!(keyword.color, "#00FF00");
        assert_eq!(keyword.source.kind, SourceKind::Textmate);
    }

    #[test]
    fn disabled_semantic_highlighting_falls_through() {
        let mut theme = sample_theme();
        theme.semantic_highlighting = Some(false);
        let keyword = theme.token_color("keyword", Some("keyword"));
        assert_eq!(keyword.color, "#00FF00");
    }

    #[test]
    fn style_only_semantic_entries_do_not_match() {
        let theme = sample_theme();
        let operator = theme.token_color("keyword.operator", Some("operator"));
        assert!(operator.fallback);
    }

    #[test]
    fn rules_without_foreground_never_match() {
        let theme = sample_theme();
        let comment = theme.token_color("comment", None);
        assert!(comment.fallback);
        assert_eq!(comment.color, "");
    }

    #[test]
    fn array_scopes_need_exact_entries() {
        let theme = sample_theme();
        assert_eq!(theme.token_color("string.quoted", None).color, "#9CCC65");
        assert!(theme.token_color("string.quoted.double", None).fallback);
    }

    #[test]
    fn extraction_blends_transparent_sidebar() {
        let theme = sample_theme();
        let extracted = extract_colors(&theme).unwrap();
        // #101518 at 50% alpha over #0D1114
        assert_eq!(extracted.bg.sidebar.color, "#0f1316");
        assert_eq!(extracted.bg.sidebar.key, "sideBar.background");
        // list rows sit on the blended sidebar
        assert_eq!(extracted.bg.list_hover.color, "#0f1316");
    }

    #[test]
    fn empty_workbench_values_fall_back() {
        let theme = sample_theme();
        let extracted = extract_colors(&theme).unwrap();
        assert_eq!(extracted.ui.tab_active.color, "#39C5BB");
        assert!(!extracted.ui.tab_active.fallback);
        assert!(extracted.buttons.badge.fallback);
        assert_eq!(extracted.buttons.badge.color, "#C8DCD9");
        assert!(extracted.ui.selection_foreground.fallback);
        assert_eq!(extracted.ui.selection_foreground.color, "");
    }

    #[test]
    fn missing_theme_file_reports_not_found() {
        let err = load_theme(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn invalid_json_reports_path_and_parser_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_theme(&path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid theme JSON in"));
    }

    #[test]
    fn rejects_malformed_required_colors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad-color.json");
        fs::write(
            &path,
            r##"{"colors": {"editor.background": "#GGGGGG", "editor.foreground": "#C8DCD9"}}"##,
        )
        .unwrap();
        let err = load_theme(&path).unwrap_err();
        assert!(err.is_invalid_color());
        assert_eq!(
            err.to_string(),
            "Invalid color \"#GGGGGG\". Use #RGB, #RRGGBB, or #RRGGBBAA"
        );
    }

    #[test]
    fn derives_name_from_file_name() {
        let theme = LoadedTheme::default();
        let name = theme_name(&theme, Path::new("/themes/miku-dark-color-theme.JSONC"));
        assert_eq!(name, "miku-dark");
    }
}
