//! Readability report over every themed surface.
//!
//! Walks the extracted colors section by section, scores each foreground
//! against the surface it is rendered on, and prints either the human
//! report or a JSON document with the same content.

use std::path::Path;

use serde::Serialize;

use crate::audit::apca::{
    analyze_apca, apca_contrast, ApcaAnalysis, ContrastLevel, Polarity,
};
use crate::audit::color::{blend_alpha, extract_alpha, strip_alpha, ColorError};
use crate::audit::distinct::{
    delta_e00_hex, distinction_level, DistinctionLevel, DistinctionVerdict, ADJACENCY_PAIRS,
    SYMBOL_DISCRIMINATION_PAIRS,
};
use crate::audit::theme::{
    extract_colors, load_theme, theme_name, AuditError, ColorSource, ColorValue, ExtractedColors,
    SourceKind, Surface,
};

pub const OUTPUT_WIDTH: usize = 72;
const COL_NAME_WIDTH: usize = 24;
const COL_COLOR_WIDTH: usize = 15;
const PAIR_WIDTH: usize = 40;

const THRESHOLDS: &str = "Thresholds: Fluent=Lc90  Body=Lc75  Content=Lc60  Large=Lc45";

/// Elements that are intentionally low-contrast by design. These do not
/// count against marathon-readiness.
///
/// Names must match the row names used in `build_sections`.
///
/// ANSI black and bright black are listed because black is typically
/// invisible on dark terminals and bright black is conventionally the dim
/// gray; terminal applications do not use them for primary text there.
const EXPECTED_DIM_ELEMENTS: [&str; 31] = [
    "Ghost Text",
    "Ghost+Sel",
    "Code Lens",
    "Fold Control",
    "Fold Placeholder",
    "Line Numbers",
    "Line Num Dimmed",
    "Whitespace",
    "Ruler",
    "Git Blame",
    "Term Cmd Guide",
    "Term Init Hint",
    "Placeholder",
    "Editor Placeholder",
    "Tab Inactive",
    "Tab Unfocused",
    "Tab Unfoc Inact",
    "Title Inactive",
    "Panel Inactive",
    "Activity Inact",
    "Act Top Inact",
    "Cmd Ctr Inact",
    "Disabled",
    "Checkbox Disabled",
    "Radio Inactive",
    "Breadcrumb",
    "Description",
    "Chat Placeholder",
    "Ignored",
    "Black",
    "Bright Black",
];

fn is_expected_dim(name: &str) -> bool {
    EXPECTED_DIM_ELEMENTS.contains(&name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// One audited foreground/background pairing.
#[derive(Debug, Clone)]
struct ColorCheck {
    name: String,
    color: String,
    bg_color: String,
    bg_key: &'static str,
    lc: f64,
    analysis: ApcaAnalysis,
    alpha: Option<String>,
    fallback: bool,
    expected_dim: bool,
    source: ColorSource,
}

/// Aggregated audit counts. `expected_dim` rows never count against the
/// final verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditStats {
    pub pass: usize,
    pub large: usize,
    pub expected_dim: usize,
    pub fail: usize,
    pub missing: usize,
    pub total: usize,
}

impl AuditStats {
    pub fn defined(&self) -> usize {
        self.total - self.missing
    }

    pub fn is_ready(&self) -> bool {
        self.fail == 0 && self.large == 0 && self.missing == 0
    }

    fn absorb(&mut self, other: AuditStats) {
        self.pass += other.pass;
        self.large += other.large;
        self.expected_dim += other.expected_dim;
        self.fail += other.fail;
        self.missing += other.missing;
        self.total += other.total;
    }
}

struct Section {
    title: &'static str,
    checks: Vec<ColorCheck>,
}

/// Scores a foreground on a surface, blending semi-transparent foregrounds
/// first so the Lc reflects what actually hits the screen.
fn check(name: &str, fg: &ColorValue, bg: &Surface) -> Result<ColorCheck, ColorError> {
    let alpha = extract_alpha(&fg.color);
    let base = strip_alpha(&fg.color);
    let effective = if alpha < 1.0 {
        blend_alpha(base, &bg.color, alpha)?
    } else {
        base.to_string()
    };
    let result = apca_contrast(&effective, &bg.color)?;
    let alpha_label = (alpha < 1.0).then(|| format!("{}%", (alpha * 100.0).round()));

    Ok(ColorCheck {
        name: name.to_string(),
        color: effective,
        bg_color: bg.color.clone(),
        bg_key: bg.key,
        lc: result.lc,
        analysis: analyze_apca(result),
        alpha: alpha_label,
        fallback: fg.fallback,
        expected_dim: is_expected_dim(name),
        source: fg.source.clone(),
    })
}

fn defined(value: &ColorValue) -> bool {
    !value.fallback && !value.color.is_empty()
}

/// Builds every report section in display order.
fn build_sections(c: &ExtractedColors) -> Result<Vec<Section>, ColorError> {
    let mut sections = Vec::new();

    sections.push(Section {
        title: "TEXT",
        checks: vec![
            check("Primary", &c.fg, &c.bg.editor)?,
            check("Global", &c.ui.foreground, &c.bg.editor)?,
            check("Icons", &c.ui.icon_foreground, &c.bg.editor)?,
        ],
    });

    sections.push(Section {
        title: "SYNTAX",
        checks: vec![
            check("Variables", &c.syntax.variable, &c.bg.editor)?,
            check("Var Language", &c.syntax.variable_language, &c.bg.editor)?,
            check("Parameters", &c.syntax.parameter, &c.bg.editor)?,
            check("Properties", &c.syntax.property, &c.bg.editor)?,
            check("Keywords", &c.syntax.keyword, &c.bg.editor)?,
            check("Operators", &c.syntax.operator, &c.bg.editor)?,
            check("Storage", &c.syntax.storage, &c.bg.editor)?,
            check("Functions", &c.syntax.function, &c.bg.editor)?,
            check("Methods", &c.syntax.method, &c.bg.editor)?,
            check("Classes", &c.syntax.class, &c.bg.editor)?,
            check("Types", &c.syntax.r#type, &c.bg.editor)?,
            check("Interfaces", &c.syntax.interface, &c.bg.editor)?,
            check("Namespaces", &c.syntax.namespace, &c.bg.editor)?,
            check("Enums", &c.syntax.r#enum, &c.bg.editor)?,
            check("Enum Members", &c.syntax.enum_member, &c.bg.editor)?,
            check("Type Params", &c.syntax.type_parameter, &c.bg.editor)?,
            check("Numbers", &c.syntax.number, &c.bg.editor)?,
            check("Strings", &c.syntax.string, &c.bg.editor)?,
            check("String Escape", &c.syntax.string_escape, &c.bg.editor)?,
            check("Constants", &c.syntax.constant, &c.bg.editor)?,
            check("Regexp", &c.syntax.regexp, &c.bg.editor)?,
            check("Tags", &c.syntax.tag, &c.bg.editor)?,
            check("Attributes", &c.syntax.attribute, &c.bg.editor)?,
            check("Decorators", &c.syntax.decorator, &c.bg.editor)?,
            check("Links", &c.syntax.link, &c.bg.editor)?,
            check("Punctuation", &c.syntax.punctuation, &c.bg.editor)?,
            check("Macros", &c.syntax.r#macro, &c.bg.editor)?,
            check("Structs", &c.syntax.r#struct, &c.bg.editor)?,
            check("Invalid", &c.syntax.invalid, &c.bg.editor)?,
            check("Deprecated", &c.syntax.deprecated, &c.bg.editor)?,
            check("Support Func", &c.syntax.support_function, &c.bg.editor)?,
            check("Storage Mod", &c.syntax.storage_modifier, &c.bg.editor)?,
            check("Markup Heading", &c.syntax.markup_heading, &c.bg.editor)?,
            check("Markup Bold", &c.syntax.markup_bold, &c.bg.editor)?,
            check("Markup Italic", &c.syntax.markup_italic, &c.bg.editor)?,
            check("Markup Code", &c.syntax.markup_code, &c.bg.editor)?,
            check("Markup Quote", &c.syntax.markup_quote, &c.bg.editor)?,
        ],
    });

    // Foreground overrides replace syntax colors entirely when the theme
    // defines them, so each override is either tested directly or stands in
    // for the syntax colors it would cover.
    let mut selected = Vec::new();
    if defined(&c.ui.selection_foreground) {
        selected.push(check("Selection", &c.ui.selection_foreground, &c.bg.selection)?);
    } else {
        selected.push(check("Sel:Variable", &c.syntax.variable, &c.bg.selection)?);
        selected.push(check("Sel:Keyword", &c.syntax.keyword, &c.bg.selection)?);
        selected.push(check("Sel:String", &c.syntax.string, &c.bg.selection)?);
        selected.push(check("Sel:Comment", &c.syntax.comment, &c.bg.selection)?);
    }
    if defined(&c.ui.word_highlight_foreground) {
        selected.push(check(
            "Word Highl",
            &c.ui.word_highlight_foreground,
            &c.bg.word_highlight,
        )?);
    } else {
        selected.push(check("Highl:Var", &c.syntax.variable, &c.bg.word_highlight)?);
    }
    if defined(&c.ui.word_highlight_strong_foreground) {
        selected.push(check(
            "Write Highl",
            &c.ui.word_highlight_strong_foreground,
            &c.bg.word_highlight_strong,
        )?);
    }
    if defined(&c.ui.word_highlight_text_foreground) {
        selected.push(check(
            "Text Highl",
            &c.ui.word_highlight_text_foreground,
            &c.bg.word_highlight_text,
        )?);
    }
    if defined(&c.ui.find_match_foreground) {
        selected.push(check("Find Match", &c.ui.find_match_foreground, &c.bg.find_match_active)?);
    } else {
        selected.push(check("Find:Var", &c.syntax.variable, &c.bg.find_match_active)?);
    }
    if defined(&c.ui.find_match_highlight_foreground) {
        selected.push(check(
            "Find Other",
            &c.ui.find_match_highlight_foreground,
            &c.bg.find_match,
        )?);
    }
    selected.push(check("Inact:Var", &c.syntax.variable, &c.bg.selection_inactive)?);
    selected.push(check("SelHigh:Var", &c.syntax.variable, &c.bg.selection_highlight)?);
    selected.push(check("TextHigh:Var", &c.syntax.variable, &c.bg.word_highlight_text)?);
    selected.push(check("FindRange", &c.syntax.variable, &c.bg.find_range)?);
    selected.push(check("Ghost+Sel", &c.ui.ghost_text, &c.bg.selection)?);
    sections.push(Section {
        title: "SELECTED TEXT",
        checks: selected,
    });

    sections.push(Section {
        title: "NAVIGATION HIGHLIGHTS",
        checks: vec![
            check("Range:Var", &c.syntax.variable, &c.bg.range_highlight)?,
            check("Range:Keyword", &c.syntax.keyword, &c.bg.range_highlight)?,
            check("Range:String", &c.syntax.string, &c.bg.range_highlight)?,
            check("Range:Comment", &c.syntax.comment, &c.bg.range_highlight)?,
            check("Symbol:Var", &c.syntax.variable, &c.bg.symbol_highlight)?,
            check("Symbol:Keyword", &c.syntax.keyword, &c.bg.symbol_highlight)?,
            check("Symbol:String", &c.syntax.string, &c.bg.symbol_highlight)?,
            check("Symbol:Comment", &c.syntax.comment, &c.bg.symbol_highlight)?,
        ],
    });

    sections.push(Section {
        title: "DIAGNOSTICS",
        checks: vec![
            check("Errors", &c.syntax.error, &c.bg.editor)?,
            check("Warnings", &c.syntax.warning, &c.bg.editor)?,
            check("Info", &c.syntax.info, &c.bg.editor)?,
        ],
    });

    sections.push(Section {
        title: "COMMENTS",
        checks: vec![
            check("Comments", &c.syntax.comment, &c.bg.editor)?,
            check("Doc Comments", &c.syntax.doc_comment, &c.bg.editor)?,
        ],
    });

    sections.push(Section {
        title: "EDITOR UI",
        checks: vec![
            check("Line Numbers", &c.ui.line_number, &c.bg.editor)?,
            check("Line Active", &c.ui.line_number_active, &c.bg.editor)?,
            check("Line Num Dimmed", &c.ui.line_number_dimmed, &c.bg.editor)?,
            check("Ghost Text", &c.ui.ghost_text, &c.bg.editor)?,
            check("Hint", &c.ui.hint, &c.bg.editor)?,
            check("Inlay Hints", &c.ui.inlay_hint, &c.bg.inlay_hint)?,
            check("Inlay Type", &c.ui.inlay_hint_type, &c.bg.inlay_hint)?,
            check("Inlay Param", &c.ui.inlay_hint_param, &c.bg.inlay_hint)?,
            check("Code Lens", &c.ui.code_lens, &c.bg.editor)?,
            check("Lightbulb", &c.ui.light_bulb, &c.bg.editor)?,
            check("Lightbulb Fix", &c.ui.light_bulb_auto_fix, &c.bg.editor)?,
            check("Lightbulb AI", &c.ui.light_bulb_ai, &c.bg.editor)?,
            check("Fold Control", &c.ui.fold_control, &c.bg.editor)?,
            check("Fold Placeholder", &c.ui.fold_placeholder, &c.bg.editor)?,
            check("Whitespace", &c.ui.whitespace, &c.bg.editor)?,
            check("Ruler", &c.ui.ruler, &c.bg.editor)?,
            check("Link Active", &c.ui.editor_link_active, &c.bg.editor)?,
        ],
    });

    sections.push(Section {
        title: "WORKBENCH UI",
        checks: vec![
            check("Title Bar", &c.ui.title_bar, &c.bg.title_bar)?,
            check("Title Inactive", &c.ui.title_bar_inactive, &c.bg.title_bar_inactive)?,
            check("Command Center", &c.ui.command_center, &c.bg.command_center)?,
            check("Cmd Ctr Active", &c.ui.command_center_active, &c.bg.command_center)?,
            check("Cmd Ctr Inact", &c.ui.command_center_inactive, &c.bg.command_center)?,
            check("Tab Active", &c.ui.tab_active, &c.bg.tab_bar)?,
            check("Tab Selected", &c.ui.tab_selected, &c.bg.tab_bar)?,
            check("Tab Inactive", &c.ui.tab_inactive, &c.bg.tab_bar)?,
            check("Tab Unfocused", &c.ui.tab_unfocused, &c.bg.tab_bar)?,
            check("Tab Unfoc Inact", &c.ui.tab_unfocused_inactive, &c.bg.tab_bar)?,
            check("Tab Hover", &c.ui.tab_hover, &c.bg.tab_bar)?,
            check("Tab Unfoc Hover", &c.ui.tab_unfocused_hover, &c.bg.tab_bar)?,
            check("Breadcrumb", &c.ui.breadcrumb, &c.bg.breadcrumb)?,
            check("Sidebar", &c.ui.sidebar_text, &c.bg.sidebar)?,
            check("Sidebar Title", &c.ui.sidebar_title, &c.bg.sidebar)?,
            check("Activity Bar", &c.ui.activity_bar, &c.bg.activity_bar)?,
            check("Activity Inact", &c.ui.activity_bar_inactive, &c.bg.activity_bar)?,
            check("Act Top", &c.ui.activity_bar_top, &c.bg.activity_bar)?,
            check("Act Top Inact", &c.ui.activity_bar_top_inactive, &c.bg.activity_bar)?,
            check("Status Bar", &c.ui.status_bar_text, &c.bg.status_bar)?,
            check("Status Debug", &c.ui.status_bar_debug, &c.bg.status_bar)?,
            check("Status NoFolder", &c.ui.status_bar_no_folder, &c.bg.status_bar)?,
            check("Status Error", &c.ui.status_bar_item_error, &c.bg.status_bar_item_error)?,
            check(
                "Status Warning",
                &c.ui.status_bar_item_warning,
                &c.bg.status_bar_item_warning,
            )?,
            check("Status Remote", &c.ui.status_bar_item_remote, &c.bg.status_bar_item_remote)?,
            check(
                "Status Promi",
                &c.ui.status_bar_item_prominent,
                &c.bg.status_bar_item_prominent,
            )?,
            check(
                "Status Offline",
                &c.ui.status_bar_item_offline,
                &c.bg.status_bar_item_offline,
            )?,
            check("Status Hover", &c.ui.status_bar_item_hover, &c.bg.status_bar)?,
            check("Panel Active", &c.ui.panel_title, &c.bg.panel)?,
            check("Panel Inactive", &c.ui.panel_title_inactive, &c.bg.panel)?,
            check("Panel Badge", &c.ui.panel_title_badge, &c.bg.panel)?,
            check("Terminal", &c.ui.terminal, &c.bg.terminal)?,
            check("Input", &c.ui.input, &c.bg.input)?,
            check("Placeholder", &c.ui.input_placeholder, &c.bg.input)?,
            check("Input Error", &c.ui.input_validation_error, &c.bg.input_validation_error)?,
            check(
                "Input Warning",
                &c.ui.input_validation_warning,
                &c.bg.input_validation_warning,
            )?,
            check("Input Info", &c.ui.input_validation_info, &c.bg.input_validation_info)?,
            check("Checkbox", &c.ui.checkbox, &c.bg.checkbox)?,
            check("List Selected", &c.ui.list_selection, &c.bg.list_selection)?,
            check("List Sel Icon", &c.ui.list_selection_icon, &c.bg.list_selection)?,
            check(
                "List Inact Icon",
                &c.ui.list_inactive_selection_icon,
                &c.bg.list_inactive_selection,
            )?,
            check("List Hover", &c.ui.list_hover, &c.bg.list_hover)?,
            check("List Focus", &c.ui.list_focus, &c.bg.list_focus)?,
            check("List Invalid", &c.ui.list_invalid_item, &c.bg.sidebar)?,
            check("List Deemph", &c.ui.list_deemphasized, &c.bg.sidebar)?,
            check("Menubar Select", &c.ui.menubar_selection, &c.bg.menu)?,
            check("Link Active", &c.ui.text_link_active, &c.bg.editor)?,
        ],
    });

    sections.push(Section {
        title: "WIDGETS",
        checks: vec![
            check("Find/Replace", &c.widgets.editor_widget, &c.bg.editor_widget)?,
            check("Action List", &c.widgets.action_list, &c.bg.editor_widget)?,
            check("Action Focus", &c.widgets.action_list_focus, &c.bg.editor_widget)?,
            check("Autocomplete", &c.widgets.suggest, &c.bg.suggest)?,
            check("Suggest Select", &c.widgets.suggest_selected, &c.bg.suggest_selected)?,
            check(
                "Suggest Sel Icon",
                &c.widgets.suggest_selected_icon,
                &c.bg.suggest_selected,
            )?,
            check("Suggest Match", &c.widgets.suggest_highlight, &c.bg.suggest)?,
            check(
                "Suggest Foc Match",
                &c.widgets.suggest_focus_highlight,
                &c.bg.suggest_selected,
            )?,
            check("Hover Tooltip", &c.widgets.hover, &c.bg.hover)?,
            check("Hover Highlight", &c.widgets.hover_highlight, &c.bg.hover)?,
            check("Preformat Text", &c.ui.text_preformat, &c.bg.hover)?,
            check("Command Palette", &c.widgets.quick_input, &c.bg.quick_input)?,
            check("Palette Focus", &c.widgets.quick_input_list_focus, &c.bg.quick_input_list_focus)?,
            check(
                "Palette Foc Icon",
                &c.widgets.quick_input_list_focus_icon,
                &c.bg.quick_input_list_focus,
            )?,
            check("Picker Group", &c.ui.picker_group, &c.bg.quick_input)?,
            check("Menu", &c.widgets.menu, &c.bg.menu)?,
            check("Menu Selection", &c.widgets.menu_selection, &c.bg.menu)?,
            check("Notification", &c.widgets.notification, &c.bg.notification)?,
            check("Notif Link", &c.widgets.notification_link, &c.bg.notification)?,
            check("Notif Header", &c.widgets.notification_header, &c.bg.notification)?,
            check("Notif Error", &c.widgets.notification_error_icon, &c.bg.notification)?,
            check("Notif Warning", &c.widgets.notification_warning_icon, &c.bg.notification)?,
            check("Notif Info", &c.widgets.notification_info_icon, &c.bg.notification)?,
            check("Peek View", &c.widgets.peek_view, &c.bg.peek_view)?,
            check("Inline Chat", &c.widgets.inline_chat, &c.bg.inline_chat)?,
            check("Chat Placeholder", &c.widgets.inline_chat_placeholder, &c.bg.inline_chat)?,
            check("Suggest Status", &c.widgets.suggest_widget_status, &c.bg.suggest)?,
        ],
    });

    sections.push(Section {
        title: "GIT DECORATIONS",
        checks: vec![
            check("Added", &c.git.added, &c.bg.sidebar)?,
            check("Modified", &c.git.modified, &c.bg.sidebar)?,
            check("Deleted", &c.git.deleted, &c.bg.sidebar)?,
            check("Renamed", &c.git.renamed, &c.bg.sidebar)?,
            check("Untracked", &c.git.untracked, &c.bg.sidebar)?,
            check("Ignored", &c.git.ignored, &c.bg.sidebar)?,
            check("Conflict", &c.git.conflict, &c.bg.sidebar)?,
            check("Submodule", &c.git.submodule, &c.bg.sidebar)?,
            check("Stage Modified", &c.git.stage_modified, &c.bg.sidebar)?,
            check("Stage Deleted", &c.git.stage_deleted, &c.bg.sidebar)?,
        ],
    });

    sections.push(Section {
        title: "BRACKETS",
        checks: vec![
            check("Bracket 1", &c.brackets.bracket1, &c.bg.editor)?,
            check("Bracket 2", &c.brackets.bracket2, &c.bg.editor)?,
            check("Bracket 3", &c.brackets.bracket3, &c.bg.editor)?,
            check("Bracket 4", &c.brackets.bracket4, &c.bg.editor)?,
            check("Bracket 5", &c.brackets.bracket5, &c.bg.editor)?,
            check("Bracket 6", &c.brackets.bracket6, &c.bg.editor)?,
            check("Unexpected", &c.brackets.unexpected, &c.bg.editor)?,
            check("Match BG", &c.fg, &c.bg.bracket_match)?,
        ],
    });

    let mut terminal = vec![
        check("Black", &c.terminal.ansi_black, &c.bg.terminal)?,
        check("Red", &c.terminal.ansi_red, &c.bg.terminal)?,
        check("Green", &c.terminal.ansi_green, &c.bg.terminal)?,
        check("Yellow", &c.terminal.ansi_yellow, &c.bg.terminal)?,
        check("Blue", &c.terminal.ansi_blue, &c.bg.terminal)?,
        check("Magenta", &c.terminal.ansi_magenta, &c.bg.terminal)?,
        check("Cyan", &c.terminal.ansi_cyan, &c.bg.terminal)?,
        check("White", &c.terminal.ansi_white, &c.bg.terminal)?,
        check("Bright Black", &c.terminal.ansi_bright_black, &c.bg.terminal)?,
        check("Bright Red", &c.terminal.ansi_bright_red, &c.bg.terminal)?,
        check("Bright Green", &c.terminal.ansi_bright_green, &c.bg.terminal)?,
        check("Bright Yellow", &c.terminal.ansi_bright_yellow, &c.bg.terminal)?,
        check("Bright Blue", &c.terminal.ansi_bright_blue, &c.bg.terminal)?,
        check("Bright Magenta", &c.terminal.ansi_bright_magenta, &c.bg.terminal)?,
        check("Bright Cyan", &c.terminal.ansi_bright_cyan, &c.bg.terminal)?,
        check("Bright White", &c.terminal.ansi_bright_white, &c.bg.terminal)?,
    ];
    if defined(&c.ui.terminal_selection) {
        terminal.push(check("Term Select", &c.ui.terminal_selection, &c.bg.terminal_selection)?);
    }
    terminal.push(check("Find Match", &c.ui.terminal, &c.bg.terminal_find_match)?);
    terminal.push(check("Find Other", &c.ui.terminal, &c.bg.terminal_find_match_highlight)?);
    sections.push(Section {
        title: "TERMINAL ANSI",
        checks: terminal,
    });

    sections.push(Section {
        title: "BUTTONS & BADGES",
        checks: vec![
            check("Button", &c.buttons.button, &c.bg.button)?,
            check("Button 2nd", &c.buttons.button_secondary, &c.bg.button_secondary)?,
            check("Ext Button", &c.buttons.extension_button, &c.bg.extension_button)?,
            check("Badge", &c.buttons.badge, &c.bg.badge)?,
            check("Activity Badge", &c.buttons.activity_bar_badge, &c.bg.activity_bar_badge)?,
            check(
                "Act Warn Badge",
                &c.buttons.activity_warning_badge,
                &c.bg.activity_warning_badge,
            )?,
            check("Act Err Badge", &c.buttons.activity_error_badge, &c.bg.activity_error_badge)?,
            check("Dropdown", &c.buttons.dropdown, &c.bg.dropdown)?,
        ],
    });

    sections.push(Section {
        title: "DEBUG",
        checks: vec![
            check("Token Name", &c.debug.token_name, &c.bg.sidebar)?,
            check("Token Value", &c.debug.token_value, &c.bg.sidebar)?,
            check("Token String", &c.debug.token_string, &c.bg.sidebar)?,
            check("Token Number", &c.debug.token_number, &c.bg.sidebar)?,
            check("Token Boolean", &c.debug.token_boolean, &c.bg.sidebar)?,
            check("Token Error", &c.debug.token_error, &c.bg.sidebar)?,
            check("Token Type", &c.debug.token_type, &c.bg.sidebar)?,
            check("Inline Value", &c.debug.inline_value, &c.bg.editor)?,
            check("Exception", &c.debug.exception_label, &c.bg.sidebar)?,
            check("State Label", &c.debug.state_label, &c.bg.sidebar)?,
        ],
    });

    sections.push(Section {
        title: "DEBUG CONTEXT",
        checks: vec![
            check("Stack:Variable", &c.syntax.variable, &c.bg.stack_frame)?,
            check("Stack:Keyword", &c.syntax.keyword, &c.bg.stack_frame)?,
            check("Stack:String", &c.syntax.string, &c.bg.stack_frame)?,
            check("Focus:Variable", &c.syntax.variable, &c.bg.focused_stack_frame)?,
            check("Focus:Keyword", &c.syntax.keyword, &c.bg.focused_stack_frame)?,
        ],
    });

    sections.push(Section {
        title: "LINKED EDITING",
        checks: vec![
            check("Linked:Variable", &c.syntax.variable, &c.bg.linked_editing)?,
            check("Linked:Tag", &c.syntax.tag, &c.bg.linked_editing)?,
        ],
    });

    sections.push(Section {
        title: "LINKS & HIGHLIGHTS",
        checks: vec![
            check("Text Link", &c.links.text_link, &c.bg.editor)?,
            check("List Highlight", &c.links.list_highlight, &c.bg.sidebar)?,
            check("List Foc Highl", &c.links.list_focus_highlight, &c.bg.list_focus)?,
            check("List Inactive", &c.links.list_inactive_selection, &c.bg.list_inactive_selection)?,
            check("List Error", &c.links.list_error, &c.bg.sidebar)?,
            check("List Warning", &c.links.list_warning, &c.bg.sidebar)?,
        ],
    });

    sections.push(Section {
        title: "MISC UI",
        checks: vec![
            check("Section Header", &c.misc.sidebar_section_header, &c.bg.sidebar)?,
            check("Panel Section", &c.misc.panel_section_header, &c.bg.panel)?,
            check("Keybinding", &c.misc.keybinding_label, &c.bg.keybinding_label)?,
            check("Banner", &c.misc.banner, &c.bg.banner)?,
            check("Banner Icon", &c.misc.banner_icon, &c.bg.banner)?,
            check("Peek Title", &c.misc.peek_view_title, &c.bg.peek_view)?,
            check("Peek Desc", &c.misc.peek_view_description, &c.bg.peek_view)?,
            check("Peek File", &c.misc.peek_view_file, &c.bg.peek_view)?,
            check("Peek Select", &c.misc.peek_view_selection, &c.bg.peek_view_selection)?,
            check("Problems Error", &c.misc.problems_error, &c.bg.sidebar)?,
            check("Problems Warn", &c.misc.problems_warning, &c.bg.sidebar)?,
            check("Problems Info", &c.misc.problems_info, &c.bg.sidebar)?,
            check("Search Info", &c.misc.search_results_info, &c.bg.sidebar)?,
            check("Description", &c.misc.description, &c.bg.editor)?,
            check("Disabled", &c.misc.disabled, &c.bg.editor)?,
            check("Error Text", &c.misc.error_fg, &c.bg.editor)?,
            check("Git Blame", &c.misc.git_blame, &c.bg.editor)?,
            check("Editor Placeholder", &c.misc.editor_placeholder, &c.bg.editor)?,
            check("Term Cmd Guide", &c.misc.terminal_command_guide, &c.bg.terminal)?,
            check("Term Init Hint", &c.misc.terminal_initial_hint, &c.bg.terminal)?,
            check("Walkthrough Title", &c.misc.walkthrough_step_title, &c.bg.editor)?,
            check("Welcome Progress", &c.misc.welcome_progress, &c.bg.editor)?,
            check("Profile Badge", &c.misc.profile_badge, &c.bg.activity_bar)?,
        ],
    });

    sections.push(Section {
        title: "DIFF EDITOR",
        checks: vec![
            check("Ins:Variable", &c.syntax.variable, &c.bg.diff_inserted)?,
            check("Ins:Keyword", &c.syntax.keyword, &c.bg.diff_inserted)?,
            check("Ins:String", &c.syntax.string, &c.bg.diff_inserted)?,
            check("Ins:Comment", &c.syntax.comment, &c.bg.diff_inserted)?,
            check("InsLine:Var", &c.syntax.variable, &c.bg.diff_inserted_line)?,
            check("Rem:Variable", &c.syntax.variable, &c.bg.diff_removed)?,
            check("Rem:Keyword", &c.syntax.keyword, &c.bg.diff_removed)?,
            check("Rem:String", &c.syntax.string, &c.bg.diff_removed)?,
            check("Rem:Comment", &c.syntax.comment, &c.bg.diff_removed)?,
            check("RemLine:Var", &c.syntax.variable, &c.bg.diff_removed_line)?,
            check("Unchanged", &c.misc.diff_unchanged_region, &c.bg.editor)?,
        ],
    });

    sections.push(Section {
        title: "MERGE CONFLICTS",
        checks: vec![
            check("Curr:Variable", &c.syntax.variable, &c.bg.merge_current_content)?,
            check("Curr:Keyword", &c.syntax.keyword, &c.bg.merge_current_content)?,
            check("Curr:String", &c.syntax.string, &c.bg.merge_current_content)?,
            check("Inc:Variable", &c.syntax.variable, &c.bg.merge_incoming_content)?,
            check("Inc:Keyword", &c.syntax.keyword, &c.bg.merge_incoming_content)?,
            check("Inc:String", &c.syntax.string, &c.bg.merge_incoming_content)?,
            check("Common:Var", &c.syntax.variable, &c.bg.merge_common_content)?,
        ],
    });

    sections.push(Section {
        title: "CURSORS",
        checks: vec![
            check("Editor Cursor", &c.cursor.editor, &c.bg.editor)?,
            check("Block Text", &c.cursor.editor_block, &c.bg.cursor_block)?,
            check("Multi Primary", &c.cursor.editor_multi_primary, &c.bg.editor)?,
            check("Multi Secondary", &c.cursor.editor_multi_secondary, &c.bg.editor)?,
            check("Terminal Cursor", &c.cursor.terminal, &c.bg.terminal)?,
            check("Term Block Text", &c.cursor.terminal_block, &c.bg.terminal_cursor_block)?,
        ],
    });

    sections.push(Section {
        title: "STICKY SCROLL SYNTAX",
        checks: vec![
            check("Sticky:Variable", &c.syntax.variable, &c.bg.sticky_scroll)?,
            check("Sticky:Keyword", &c.syntax.keyword, &c.bg.sticky_scroll)?,
            check("Sticky:Function", &c.syntax.function, &c.bg.sticky_scroll)?,
            check("Sticky:String", &c.syntax.string, &c.bg.sticky_scroll)?,
            check("Sticky:Comment", &c.syntax.comment, &c.bg.sticky_scroll)?,
        ],
    });

    sections.push(Section {
        title: "PEEK VIEW EDITOR",
        checks: vec![
            check("Peek:Variable", &c.syntax.variable, &c.bg.peek_view_editor)?,
            check("Peek:Keyword", &c.syntax.keyword, &c.bg.peek_view_editor)?,
            check("Peek:Function", &c.syntax.function, &c.bg.peek_view_editor)?,
            check("Peek:String", &c.syntax.string, &c.bg.peek_view_editor)?,
            check("Peek:Comment", &c.syntax.comment, &c.bg.peek_view_editor)?,
        ],
    });

    sections.push(Section {
        title: "SEARCH EDITOR",
        checks: vec![
            check("Search:Variable", &c.syntax.variable, &c.bg.search_editor_find_match)?,
            check("Search:Keyword", &c.syntax.keyword, &c.bg.search_editor_find_match)?,
            check("Search:String", &c.syntax.string, &c.bg.search_editor_find_match)?,
        ],
    });

    sections.push(Section {
        title: "INPUT CONTROLS",
        checks: vec![
            check("Option Active", &c.inputs.option_active, &c.bg.input)?,
            check("Radio Active", &c.inputs.radio_active, &c.bg.editor)?,
            check("Radio Inactive", &c.inputs.radio_inactive, &c.bg.editor)?,
            check("Checkbox Disabled", &c.inputs.checkbox_disabled, &c.bg.checkbox)?,
        ],
    });

    sections.push(Section {
        title: "SCM GRAPH",
        checks: vec![
            check("Hover Label", &c.scm.history_hover_label, &c.bg.sidebar)?,
            check("Hover Add", &c.scm.history_hover_additions, &c.bg.sidebar)?,
            check("Hover Del", &c.scm.history_hover_deletions, &c.bg.sidebar)?,
        ],
    });

    sections.push(Section {
        title: "CHAT & AI",
        checks: vec![
            check("Chat Avatar", &c.chat.avatar, &c.bg.sidebar)?,
            check("Lines Added", &c.chat.lines_added, &c.bg.editor)?,
            check("Lines Removed", &c.chat.lines_removed, &c.bg.editor)?,
            check("Slash Command", &c.chat.slash_command, &c.bg.editor)?,
            check("Edited File", &c.chat.edited_file, &c.bg.sidebar)?,
        ],
    });

    sections.push(Section {
        title: "TESTING",
        checks: vec![
            check("Coverage Badge", &c.testing.coverage_badge, &c.bg.editor)?,
            check("Test Msg Info", &c.testing.message_info, &c.bg.editor)?,
        ],
    });

    sections.push(Section {
        title: "DEBUG CONSOLE",
        checks: vec![
            check("Error", &c.debug_console.error, &c.bg.panel)?,
            check("Warning", &c.debug_console.warning, &c.bg.panel)?,
            check("Info", &c.debug_console.info, &c.bg.panel)?,
            check("Source", &c.debug_console.source, &c.bg.panel)?,
        ],
    });

    sections.push(Section {
        title: "SYMBOL ICONS",
        checks: vec![
            check("Array", &c.symbol_icons.array, &c.bg.suggest)?,
            check("Boolean", &c.symbol_icons.boolean, &c.bg.suggest)?,
            check("Class", &c.symbol_icons.class, &c.bg.suggest)?,
            check("Constant", &c.symbol_icons.constant, &c.bg.suggest)?,
            check("Constructor", &c.symbol_icons.ctor, &c.bg.suggest)?,
            check("Enum", &c.symbol_icons.r#enum, &c.bg.suggest)?,
            check("Enum Member", &c.symbol_icons.enum_member, &c.bg.suggest)?,
            check("Event", &c.symbol_icons.event, &c.bg.suggest)?,
            check("Field", &c.symbol_icons.field, &c.bg.suggest)?,
            check("File", &c.symbol_icons.file, &c.bg.suggest)?,
            check("Folder", &c.symbol_icons.folder, &c.bg.suggest)?,
            check("Function", &c.symbol_icons.function, &c.bg.suggest)?,
            check("Interface", &c.symbol_icons.interface, &c.bg.suggest)?,
            check("Key", &c.symbol_icons.key, &c.bg.suggest)?,
            check("Keyword", &c.symbol_icons.keyword, &c.bg.suggest)?,
            check("Method", &c.symbol_icons.method, &c.bg.suggest)?,
            check("Module", &c.symbol_icons.module, &c.bg.suggest)?,
            check("Namespace", &c.symbol_icons.namespace, &c.bg.suggest)?,
            check("Null", &c.symbol_icons.null, &c.bg.suggest)?,
            check("Number", &c.symbol_icons.number, &c.bg.suggest)?,
            check("Object", &c.symbol_icons.object, &c.bg.suggest)?,
            check("Operator", &c.symbol_icons.operator, &c.bg.suggest)?,
            check("Package", &c.symbol_icons.package, &c.bg.suggest)?,
            check("Property", &c.symbol_icons.property, &c.bg.suggest)?,
            check("Reference", &c.symbol_icons.reference, &c.bg.suggest)?,
            check("Snippet", &c.symbol_icons.snippet, &c.bg.suggest)?,
            check("String", &c.symbol_icons.string, &c.bg.suggest)?,
            check("Struct", &c.symbol_icons.r#struct, &c.bg.suggest)?,
            check("Text", &c.symbol_icons.text, &c.bg.suggest)?,
            check("Type Param", &c.symbol_icons.type_parameter, &c.bg.suggest)?,
            check("Unit", &c.symbol_icons.unit, &c.bg.suggest)?,
            check("Variable", &c.symbol_icons.variable, &c.bg.suggest)?,
        ],
    });

    sections.push(Section {
        title: "SETTINGS EDITOR",
        checks: vec![
            check("Header", &c.settings.header, &c.bg.editor)?,
            check("Text Input", &c.settings.text_input, &c.bg.input)?,
            check("Number Input", &c.settings.number_input, &c.bg.input)?,
            check("Checkbox", &c.settings.checkbox, &c.bg.checkbox)?,
            check("Dropdown", &c.settings.dropdown, &c.bg.dropdown)?,
        ],
    });

    sections.push(Section {
        title: "CHARTS",
        checks: vec![check("Foreground", &c.charts.foreground, &c.bg.editor)?],
    });

    Ok(sections)
}

fn section_stats(checks: &[ColorCheck]) -> AuditStats {
    let mut stats = AuditStats {
        total: checks.len(),
        ..AuditStats::default()
    };
    for check in checks {
        if check.fallback {
            stats.missing += 1;
        } else if check.analysis.pass {
            stats.pass += 1;
        } else if check.expected_dim {
            stats.expected_dim += 1;
        } else if matches!(
            check.analysis.level,
            ContrastLevel::Large | ContrastLevel::NonText
        ) {
            stats.large += 1;
        } else {
            stats.fail += 1;
        }
    }
    stats
}

fn print_section(section: &Section, expected_polarity: Polarity) -> AuditStats {
    println!("\n▌ {}", section.title);
    println!("{}", "─".repeat(OUTPUT_WIDTH));
    println!(
        "{:<name_w$} {:<color_w$} APCA",
        "Name",
        "Color",
        name_w = COL_NAME_WIDTH,
        color_w = COL_COLOR_WIDTH
    );
    println!("{}", "─".repeat(OUTPUT_WIDTH));

    for check in &section.checks {
        let alpha = check
            .alpha
            .as_ref()
            .map(|alpha| format!("({alpha})"))
            .unwrap_or_default();
        let fallback_mark = if check.fallback { "?" } else { "" };
        let color_col = format!("{}{}{}", check.color, alpha, fallback_mark);
        let level = if check.fallback {
            format!("{}?", check.analysis.level)
        } else if check.expected_dim {
            format!("{}~", check.analysis.level)
        } else {
            check.analysis.level.to_string()
        };
        println!(
            "{:<name_w$} {:<color_w$} Lc {:>6.1} {} {}",
            check.name,
            color_col,
            check.lc,
            check.analysis.icon,
            level,
            name_w = COL_NAME_WIDTH,
            color_w = COL_COLOR_WIDTH
        );

        if check.analysis.polarity != expected_polarity && !check.fallback {
            println!("    ⚠️ Unexpected polarity: {}", check.analysis.polarity);
        }
    }

    section_stats(&section.checks)
}

#[derive(Debug, Clone)]
struct PairCheck {
    name1: &'static str,
    name2: &'static str,
    color1: String,
    color2: String,
    key1: String,
    key2: String,
    delta_e: f64,
    verdict: DistinctionVerdict,
}

#[derive(Debug, Clone)]
struct SkippedPair {
    name1: &'static str,
    name2: &'static str,
    reason: &'static str,
}

/// Scores ΔE00 for each pair whose two colors are actually defined.
/// Undefined names, fallback colors, and unparsable values are reported
/// as skipped rather than scored against a guess.
fn evaluate_pairs<'c, F>(
    pairs: &[(&'static str, &'static str)],
    lookup: F,
    background: &Surface,
) -> (Vec<PairCheck>, Vec<SkippedPair>)
where
    F: Fn(&str) -> Option<&'c ColorValue>,
{
    let mut checks = Vec::new();
    let mut skipped = Vec::new();

    for &(first, second) in pairs {
        let (Some(a), Some(b)) = (lookup(first), lookup(second)) else {
            skipped.push(SkippedPair {
                name1: first,
                name2: second,
                reason: "missing",
            });
            continue;
        };
        if a.fallback || b.fallback {
            skipped.push(SkippedPair {
                name1: first,
                name2: second,
                reason: "fallback",
            });
            continue;
        }
        match delta_e00_hex(&a.color, &b.color, Some(&background.color)) {
            Some(delta_e) => checks.push(PairCheck {
                name1: first,
                name2: second,
                color1: a.color.clone(),
                color2: b.color.clone(),
                key1: a.source.key.clone(),
                key2: b.source.key.clone(),
                delta_e,
                verdict: distinction_level(delta_e),
            }),
            None => skipped.push(SkippedPair {
                name1: first,
                name2: second,
                reason: "invalid",
            }),
        }
    }

    (checks, skipped)
}

fn print_distinction(title: &str, checks: &[PairCheck], skipped: &[SkippedPair]) {
    println!("\n▌ {title}");
    println!("{}", "─".repeat(OUTPUT_WIDTH));
    println!("{:<pair_w$} ΔE00", "Pair", pair_w = PAIR_WIDTH);
    println!("{}", "─".repeat(OUTPUT_WIDTH));

    let mut distinct = 0usize;
    let mut borderline = 0usize;
    let mut too_close = 0usize;

    for check in checks {
        let pair = format!("{} vs {}", check.name1, check.name2);
        println!(
            "{:<pair_w$} ΔE {:>6.1} {} {}",
            pair,
            check.delta_e,
            check.verdict.icon,
            check.verdict.level,
            pair_w = PAIR_WIDTH
        );
        match check.verdict.level {
            DistinctionLevel::Distinct | DistinctionLevel::Obvious => distinct += 1,
            DistinctionLevel::Noticeable | DistinctionLevel::Clear => borderline += 1,
            _ => too_close += 1,
        }
    }

    for skip in skipped {
        let pair = format!("{} vs {}", skip.name1, skip.name2);
        println!(
            "{:<pair_w$} ΔE      - ❓ Skipped ({})",
            pair,
            skip.reason,
            pair_w = PAIR_WIDTH
        );
    }

    println!("{}", "─".repeat(OUTPUT_WIDTH));
    println!(
        "  ✅ Distinct: {}  ⚠️ Borderline: {}  ❌ Too close: {}  ❓ Skipped: {}",
        distinct,
        borderline,
        too_close,
        skipped.len()
    );
}

fn print_header(name: &str, kind: &str) {
    println!("{}", "═".repeat(OUTPUT_WIDTH));
    println!(
        "  {} - READABILITY ANALYSIS ({})",
        name.to_uppercase(),
        kind.to_uppercase()
    );
    println!("{}", "═".repeat(OUTPUT_WIDTH));
    println!("\n{THRESHOLDS}");
}

fn print_summary(total: AuditStats) {
    let defined = total.defined();
    println!("\n{}", "═".repeat(OUTPUT_WIDTH));
    println!("  ✅ Content+ (Lc60):  {}/{}", total.pass, defined);
    println!("  ⚠️  Large/Non-text:  {}/{}", total.large, defined);
    if total.expected_dim > 0 {
        println!("  ~  Expected dim:      {}/{}", total.expected_dim, defined);
    }
    println!("  ❌ Failed (<Lc30):   {}/{}", total.fail, defined);
    if total.missing > 0 {
        println!("  ❓ Missing (fallback): {}/{}", total.missing, total.total);
    }

    println!();
    if total.is_ready() {
        println!("  🎉 MARATHON-READY");
    } else if total.fail > 0 {
        println!("  ❌ Fix failed colors before marathon use");
    } else if total.missing > 0 {
        println!("  ⚠️  {} colors not defined - using fallback", total.missing);
    } else {
        println!("  ⚠️  Some colors below Lc60 - may cause eye strain");
    }
    println!("{}", "═".repeat(OUTPUT_WIDTH));
}

#[derive(Debug, Serialize)]
struct JsonReport {
    theme: String,
    #[serde(rename = "type")]
    kind: String,
    sections: Vec<JsonSection>,
    distinction: JsonDistinction,
    #[serde(rename = "symbolDiscrimination")]
    symbol_discrimination: JsonDistinction,
    summary: JsonSummary,
}

#[derive(Debug, Serialize)]
struct JsonSection {
    section: String,
    results: Vec<JsonCheck>,
}

#[derive(Debug, Serialize)]
struct JsonCheck {
    name: String,
    foreground: JsonForeground,
    background: JsonBackground,
    lc: f64,
    level: ContrastLevel,
    pass: bool,
    fallback: bool,
    #[serde(rename = "expectedDim")]
    expected_dim: bool,
}

#[derive(Debug, Serialize)]
struct JsonForeground {
    color: String,
    key: String,
    #[serde(rename = "keyType")]
    key_type: SourceKind,
}

#[derive(Debug, Serialize)]
struct JsonBackground {
    color: String,
    key: String,
}

#[derive(Debug, Serialize)]
struct JsonDistinction {
    pairs: Vec<JsonPair>,
    skipped: Vec<JsonSkipped>,
}

#[derive(Debug, Serialize)]
struct JsonPair {
    pair: [String; 2],
    colors: [String; 2],
    keys: [String; 2],
    #[serde(rename = "deltaE")]
    delta_e: f64,
    level: DistinctionLevel,
    pass: bool,
}

#[derive(Debug, Serialize)]
struct JsonSkipped {
    pair: [String; 2],
    reason: String,
}

#[derive(Debug, Serialize)]
struct JsonSummary {
    pass: usize,
    large: usize,
    #[serde(rename = "expectedDim")]
    expected_dim: usize,
    fail: usize,
    missing: usize,
    total: usize,
    defined: usize,
    ready: bool,
}

fn json_section(section: &Section) -> JsonSection {
    JsonSection {
        section: section.title.to_string(),
        results: section
            .checks
            .iter()
            .map(|check| JsonCheck {
                name: check.name.clone(),
                foreground: JsonForeground {
                    color: check.color.clone(),
                    key: check.source.key.clone(),
                    key_type: check.source.kind,
                },
                background: JsonBackground {
                    color: check.bg_color.clone(),
                    key: check.bg_key.to_string(),
                },
                lc: check.lc,
                level: check.analysis.level,
                pass: check.analysis.pass,
                fallback: check.fallback,
                expected_dim: check.expected_dim,
            })
            .collect(),
    }
}

fn json_distinction(checks: &[PairCheck], skipped: &[SkippedPair]) -> JsonDistinction {
    JsonDistinction {
        pairs: checks
            .iter()
            .map(|check| JsonPair {
                pair: [check.name1.to_string(), check.name2.to_string()],
                colors: [check.color1.clone(), check.color2.clone()],
                keys: [check.key1.clone(), check.key2.clone()],
                delta_e: check.delta_e,
                level: check.verdict.level,
                pass: check.verdict.pass,
            })
            .collect(),
        skipped: skipped
            .iter()
            .map(|skip| JsonSkipped {
                pair: [skip.name1.to_string(), skip.name2.to_string()],
                reason: skip.reason.to_string(),
            })
            .collect(),
    }
}

/// Runs the full readability analysis over a theme file.
///
/// Human output prints section tables, the two ΔE00 blocks, and the final
/// verdict. JSON output carries the same rows plus source keys for tooling.
/// Distinction results never change the returned stats.
pub fn run_analysis(theme_path: &Path, format: OutputFormat) -> Result<AuditStats, AuditError> {
    let theme = load_theme(theme_path)?;
    let name = theme_name(&theme, theme_path);
    let kind = if theme.kind.as_deref() == Some("light") {
        "light"
    } else {
        "dark"
    };
    let expected_polarity = if kind == "dark" {
        Polarity::LightOnDark
    } else {
        Polarity::DarkOnLight
    };
    let colors = extract_colors(&theme)?;
    let sections = build_sections(&colors)?;

    let (syntax_pairs, syntax_skipped) = evaluate_pairs(
        &ADJACENCY_PAIRS,
        |key| colors.syntax.by_name(key),
        &colors.bg.editor,
    );
    let (symbol_pairs, symbol_skipped) = evaluate_pairs(
        &SYMBOL_DISCRIMINATION_PAIRS,
        |key| colors.symbol_icons.by_name(key),
        &colors.bg.suggest,
    );

    let mut total = AuditStats::default();

    match format {
        OutputFormat::Human => {
            print_header(&name, kind);
            for section in &sections {
                total.absorb(print_section(section, expected_polarity));
            }
            print_distinction("COLOR DISTINCTION (ΔE00)", &syntax_pairs, &syntax_skipped);
            print_distinction(
                "SYMBOL DISCRIMINATION (ΔE00)",
                &symbol_pairs,
                &symbol_skipped,
            );
            print_summary(total);
        }
        OutputFormat::Json => {
            for section in &sections {
                total.absorb(section_stats(&section.checks));
            }
            let report = JsonReport {
                theme: name,
                kind: kind.to_string(),
                sections: sections.iter().map(json_section).collect(),
                distinction: json_distinction(&syntax_pairs, &syntax_skipped),
                symbol_discrimination: json_distinction(&symbol_pairs, &symbol_skipped),
                summary: JsonSummary {
                    pass: total.pass,
                    large: total.large,
                    expected_dim: total.expected_dim,
                    fail: total.fail,
                    missing: total.missing,
                    total: total.total,
                    defined: total.defined(),
                    ready: total.is_ready(),
                },
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(total)
}

/// Scores a single foreground/background pairing from the command line.
pub fn test_color(fg: &str, bg: &str, name: &str) -> Result<(), AuditError> {
    let value = ColorValue {
        color: fg.to_string(),
        fallback: false,
        source: ColorSource {
            kind: SourceKind::Workbench,
            key: "custom".to_string(),
        },
    };
    let surface = Surface {
        color: bg.to_string(),
        key: "custom",
    };
    let result = check(name, &value, &surface)?;

    match &result.alpha {
        Some(alpha) => {
            println!("\n{name}: {fg} @ {alpha} on {bg}");
            println!("  Blended: {}", result.color);
        }
        None => println!("\n{name}: {fg} on {bg}"),
    }
    println!(
        "  Lc {:>6.1} {} {}",
        result.lc, result.analysis.icon, result.analysis.level
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::theme::LoadedTheme;

    fn theme_with(colors: &[(&str, &str)]) -> LoadedTheme {
        let mut value = serde_json::json!({
            "colors": {
                "editor.background": "#0D1114",
                "editor.foreground": "#C8DCD9"
            },
            "tokenColors": [
                { "scope": "variable", "settings": { "foreground": "#C8DCD9" } },
                { "scope": "keyword", "settings": { "foreground": "#FFB8D4" } },
                { "scope": "string", "settings": { "foreground": "#9CCC65" } },
                { "scope": "comment", "settings": { "foreground": "#5A7A7A" } }
            ]
        });
        for (key, color) in colors {
            value["colors"][key] = serde_json::Value::String((*color).to_string());
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn fallback_rows_count_as_missing() {
        let colors = extract_colors(&theme_with(&[])).unwrap();
        let row = check("Global", &colors.ui.foreground, &colors.bg.editor).unwrap();
        assert!(row.fallback);
        let stats = section_stats(&[row]);
        assert_eq!(stats.missing, 1);
        assert_eq!(stats.defined(), 0);
    }

    #[test]
    fn expected_dim_rows_never_fail() {
        let colors = extract_colors(&theme_with(&[
            ("terminal.ansiBlack", "#0D1114"),
            ("terminal.foreground", "#C8DCD9"),
        ]))
        .unwrap();
        // Same color as the terminal background: Lc 0, FAIL band.
        let row = check("Black", &colors.terminal.ansi_black, &colors.bg.terminal).unwrap();
        assert!(row.expected_dim);
        assert_eq!(row.analysis.level, ContrastLevel::Fail);
        let stats = section_stats(&[row]);
        assert_eq!(stats.fail, 0);
        assert_eq!(stats.expected_dim, 1);
    }

    #[test]
    fn unexpected_low_contrast_counts_against_readiness() {
        let colors = extract_colors(&theme_with(&[("editorError.foreground", "#FF5370")])).unwrap();
        let row = check("Errors", &colors.syntax.error, &colors.bg.editor).unwrap();
        assert_eq!(row.analysis.level, ContrastLevel::NonText);
        assert!(!row.analysis.pass);
        let stats = section_stats(&[row]);
        assert_eq!(stats.large, 1);
        assert!(!stats.is_ready());
    }

    #[test]
    fn semi_transparent_foregrounds_blend_before_scoring() {
        let colors = extract_colors(&theme_with(&[(
            "git.blame.editorDecorationForeground",
            "#5DE4DB99",
        )]))
        .unwrap();
        let row = check("Git Blame", &colors.misc.git_blame, &colors.bg.editor).unwrap();
        assert_eq!(row.alpha.as_deref(), Some("60%"));
        assert_ne!(row.color, "#5DE4DB");
        assert!(row.lc.abs() < 60.0, "blended blame should dim, got {}", row.lc);
    }

    #[test]
    fn builds_every_section_in_report_order() {
        let colors = extract_colors(&theme_with(&[])).unwrap();
        let sections = build_sections(&colors).unwrap();
        let titles: Vec<&str> = sections.iter().map(|s| s.title).collect();
        assert_eq!(titles.first(), Some(&"TEXT"));
        assert_eq!(titles.get(1), Some(&"SYNTAX"));
        assert_eq!(titles.last(), Some(&"CHARTS"));
        assert_eq!(titles.len(), 32);
        assert!(titles.contains(&"TERMINAL ANSI"));
        assert!(titles.contains(&"SYMBOL ICONS"));
    }

    #[test]
    fn selection_override_replaces_syntax_rows() {
        let plain = extract_colors(&theme_with(&[])).unwrap();
        let plain_sections = build_sections(&plain).unwrap();
        let selected = plain_sections
            .iter()
            .find(|s| s.title == "SELECTED TEXT")
            .unwrap();
        assert!(selected.checks.iter().any(|c| c.name == "Sel:Variable"));

        let overridden = extract_colors(&theme_with(&[(
            "editor.selectionForeground",
            "#FFFFFF",
        )]))
        .unwrap();
        let overridden_sections = build_sections(&overridden).unwrap();
        let selected = overridden_sections
            .iter()
            .find(|s| s.title == "SELECTED TEXT")
            .unwrap();
        assert!(selected.checks.iter().any(|c| c.name == "Selection"));
        assert!(!selected.checks.iter().any(|c| c.name == "Sel:Variable"));
    }

    #[test]
    fn adjacency_pairs_skip_fallback_colors() {
        let colors = extract_colors(&theme_with(&[])).unwrap();
        let (pairs, skipped) = evaluate_pairs(
            &ADJACENCY_PAIRS,
            |key| colors.syntax.by_name(key),
            &colors.bg.editor,
        );
        // variable and keyword are themed; function, parameter, etc. fall back
        assert!(pairs.iter().any(|p| p.name1 == "keyword" && p.name2 == "variable"));
        assert!(skipped
            .iter()
            .any(|s| s.name1 == "function" && s.reason == "fallback"));
        assert_eq!(pairs.len() + skipped.len(), ADJACENCY_PAIRS.len());
    }

    #[test]
    fn comment_and_variable_read_as_distinct() {
        let colors = extract_colors(&theme_with(&[])).unwrap();
        let (pairs, _) = evaluate_pairs(
            &ADJACENCY_PAIRS,
            |key| colors.syntax.by_name(key),
            &colors.bg.editor,
        );
        let pair = pairs
            .iter()
            .find(|p| p.name1 == "comment" && p.name2 == "variable")
            .unwrap();
        assert!(pair.delta_e > 10.0, "got ΔE {}", pair.delta_e);
        assert!(pair.verdict.pass);
    }

    #[test]
    fn json_report_round_trips_field_names() {
        let report = JsonReport {
            theme: "Sample".to_string(),
            kind: "dark".to_string(),
            sections: vec![],
            distinction: JsonDistinction {
                pairs: vec![],
                skipped: vec![],
            },
            symbol_discrimination: JsonDistinction {
                pairs: vec![],
                skipped: vec![],
            },
            summary: JsonSummary {
                pass: 1,
                large: 0,
                expected_dim: 2,
                fail: 0,
                missing: 3,
                total: 6,
                defined: 3,
                ready: false,
            },
        };
        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();
        assert_eq!(value["type"], "dark");
        assert_eq!(value["summary"]["expectedDim"], 2);
        assert!(value["symbolDiscrimination"]["pairs"].is_array());
    }
}
