//! Workbench color table.
//!
//! Maps VS Code UI color keys onto the palette. Alpha suffixes are kept
//! as hex pairs so the emitted JSON stays byte-comparable across runs.

use std::collections::BTreeMap;

use crate::palette::{
    ACCENTS, APPEND, BLACKS, CYANS, FOREGROUNDS, FREQUENCY_VISUALIZER, GREYS, HOLOGRAM, PINKS,
    SEKAI, SEMANTIC, SNOW_MIKU, TEALS, V4X_VOICE, VERSION_MAPPING,
};

fn alpha(hex: &str, opacity: &str) -> String {
    format!("{hex}{opacity}")
}

/// Build the full workbench color map.
///
/// Every key the readability audit inspects is defined here, so a fresh
/// generate-then-audit run reports no fallback colors.
pub fn workbench_colors() -> BTreeMap<String, String> {
    let mut colors = BTreeMap::new();
    {
        let mut c = |key: &str, value: &str| {
            colors.insert(key.to_string(), value.to_string());
        };

        // Editor
        c("editor.background", BLACKS.void);
        c("editor.foreground", FOREGROUNDS.primary);
        c("editorCursor.foreground", PINKS.sekai);
        c("editorCursor.background", BLACKS.void);
        c("editorMultiCursor.primary.foreground", PINKS.sekai);
        c("editorMultiCursor.primary.background", BLACKS.base);
        c("editorMultiCursor.secondary.foreground", SEKAI.image_color);
        c("editorMultiCursor.secondary.background", BLACKS.base);
        c(
            "editor.lineHighlightBackground",
            &alpha(TEALS.classic, "0A"),
        );
        c("editor.lineHighlightBorder", &alpha(CYANS.ice, "30"));
        c("editor.selectionBackground", &alpha(TEALS.classic, "25"));
        c(
            "editor.inactiveSelectionBackground",
            &alpha(TEALS.classic, "1A"),
        );
        c(
            "editor.selectionHighlightBackground",
            &alpha(TEALS.classic, "15"),
        );
        c(
            "editor.selectionHighlightBorder",
            &alpha(TEALS.classic, "40"),
        );
        c("editor.wordHighlightBackground", &alpha(CYANS.ice, "12"));
        c("editor.wordHighlightBorder", &alpha(CYANS.ice, "40"));
        c(
            "editor.wordHighlightStrongBackground",
            &alpha(PINKS.sekai, "18"),
        );
        c(
            "editor.wordHighlightStrongBorder",
            &alpha(PINKS.sekai, "60"),
        );
        c(
            "editor.wordHighlightTextBackground",
            &alpha(CYANS.ice, "10"),
        );
        c("editor.findMatchBackground", &alpha(PINKS.sekai, "50"));
        c("editor.findMatchBorder", &alpha(PINKS.sekai, "90"));
        c(
            "editor.findMatchHighlightBackground",
            &alpha(PINKS.sekai, "20"),
        );
        c(
            "editor.findMatchHighlightBorder",
            &alpha(PINKS.sekai, "40"),
        );
        c(
            "editor.findRangeHighlightBackground",
            &alpha(TEALS.classic, "12"),
        );
        c("editor.rangeHighlightBackground", &alpha(TEALS.classic, "10"));
        c("editor.rangeHighlightBorder", &alpha(TEALS.classic, "30"));

        // Line numbers
        c("editorLineNumber.foreground", &alpha(TEALS.classic, "DD"));
        c("editorLineNumber.activeForeground", APPEND.vivid);
        c(
            "editorLineNumber.dimmedForeground",
            &alpha(TEALS.classic, "AA"),
        );
        c("editorLineNumber.warningForeground", SEMANTIC.warning);
        c("editorLineNumber.errorForeground", SEMANTIC.error);

        // Indent guides as a frequency visualizer, bass to ultra
        c(
            "editorIndentGuide.background1",
            &alpha(FREQUENCY_VISUALIZER.bass, "12"),
        );
        c(
            "editorIndentGuide.background2",
            &alpha(FREQUENCY_VISUALIZER.low, "12"),
        );
        c(
            "editorIndentGuide.background3",
            &alpha(FREQUENCY_VISUALIZER.mid, "12"),
        );
        c(
            "editorIndentGuide.background4",
            &alpha(FREQUENCY_VISUALIZER.high, "12"),
        );
        c(
            "editorIndentGuide.background5",
            &alpha(FREQUENCY_VISUALIZER.peak, "12"),
        );
        c(
            "editorIndentGuide.background6",
            &alpha(FREQUENCY_VISUALIZER.ultra, "12"),
        );
        c(
            "editorIndentGuide.activeBackground1",
            &alpha(FREQUENCY_VISUALIZER.bass, "80"),
        );
        c(
            "editorIndentGuide.activeBackground2",
            &alpha(FREQUENCY_VISUALIZER.low, "80"),
        );
        c(
            "editorIndentGuide.activeBackground3",
            &alpha(FREQUENCY_VISUALIZER.mid, "80"),
        );
        c(
            "editorIndentGuide.activeBackground4",
            &alpha(FREQUENCY_VISUALIZER.high, "80"),
        );
        c(
            "editorIndentGuide.activeBackground5",
            &alpha(FREQUENCY_VISUALIZER.peak, "80"),
        );
        c(
            "editorIndentGuide.activeBackground6",
            &alpha(FREQUENCY_VISUALIZER.ultra, "80"),
        );

        // Rulers and whitespace
        c("editorRuler.foreground", &alpha(TEALS.classic, "20"));
        c("editorWhitespace.foreground", &alpha(TEALS.classic, "0D"));

        // Brackets
        c("editorBracketMatch.background", &alpha(CYANS.ice, "20"));
        c("editorBracketMatch.border", &alpha(CYANS.ice, "CC"));
        c("editorBracketMatch.foreground", CYANS.ice);
        c("editorBracketHighlight.foreground1", PINKS.sekai);
        c("editorBracketHighlight.foreground2", TEALS.classic);
        c("editorBracketHighlight.foreground3", CYANS.ice);
        c("editorBracketHighlight.foreground4", HOLOGRAM.purple);
        c("editorBracketHighlight.foreground5", TEALS.neon);
        c("editorBracketHighlight.foreground6", PINKS.soft);
        c(
            "editorBracketHighlight.unexpectedBracket.foreground",
            SEMANTIC.error,
        );
        c(
            "editorBracketHighlight.unexpectedBracket.background",
            &alpha(SEMANTIC.error, "20"),
        );
        c(
            "editorBracketPairGuide.background1",
            &alpha(PINKS.sekai, "25"),
        );
        c(
            "editorBracketPairGuide.background2",
            &alpha(TEALS.classic, "25"),
        );
        c("editorBracketPairGuide.background3", &alpha(CYANS.ice, "25"));
        c(
            "editorBracketPairGuide.background4",
            &alpha(HOLOGRAM.purple, "25"),
        );
        c("editorBracketPairGuide.background5", &alpha(TEALS.neon, "25"));
        c("editorBracketPairGuide.background6", &alpha(PINKS.soft, "25"));
        c(
            "editorBracketPairGuide.activeBackground1",
            &alpha(PINKS.sekai, "50"),
        );
        c(
            "editorBracketPairGuide.activeBackground2",
            &alpha(TEALS.classic, "50"),
        );
        c(
            "editorBracketPairGuide.activeBackground3",
            &alpha(CYANS.ice, "50"),
        );
        c(
            "editorBracketPairGuide.activeBackground4",
            &alpha(HOLOGRAM.purple, "50"),
        );
        c(
            "editorBracketPairGuide.activeBackground5",
            &alpha(TEALS.neon, "50"),
        );
        c(
            "editorBracketPairGuide.activeBackground6",
            &alpha(PINKS.soft, "50"),
        );

        // Gutter
        c("editorGutter.addedBackground", &alpha(SEMANTIC.success, "80"));
        c(
            "editorGutter.modifiedBackground",
            &alpha(SEMANTIC.warning, "80"),
        );
        c("editorGutter.deletedBackground", &alpha(SEMANTIC.error, "80"));
        c(
            "editorGutter.foldingControlForeground",
            &alpha(TEALS.neon, "BB"),
        );

        // Widgets
        c("editorWidget.background", BLACKS.base);
        c("editorWidget.foreground", FOREGROUNDS.primary);
        c("editorWidget.border", &alpha(TEALS.classic, "50"));
        c("editorWidget.resizeBorder", &alpha(TEALS.classic, "60"));
        c("editorHoverWidget.background", &alpha(BLACKS.outfit, "F5"));
        c("editorHoverWidget.border", &alpha(APPEND.vivid, "60"));
        c("editorHoverWidget.foreground", FOREGROUNDS.primary);
        c("editorHoverWidget.highlightForeground", TEALS.classic);
        c("editorHoverWidget.statusBarBackground", BLACKS.sleeve);
        c("editorUnnecessaryCode.opacity", "#00000080");
        c("editorGhostText.foreground", &alpha(APPEND.vivid, "BB"));
        c("editorGhostText.border", &alpha(APPEND.vivid, "40"));
        c("editorGhostText.background", &alpha(APPEND.vivid, "0A"));
        c("editor.linkedEditingBackground", &alpha(CYANS.ice, "20"));
        c("editorWatermark.foreground", &alpha(TEALS.neon, "70"));

        // Overview ruler
        c(
            "editorOverviewRuler.bracketMatchForeground",
            &alpha(CYANS.ice, "A0"),
        );
        c(
            "editorOverviewRuler.wordHighlightForeground",
            &alpha(CYANS.ice, "80"),
        );
        c(
            "editorOverviewRuler.wordHighlightStrongForeground",
            &alpha(PINKS.sekai, "90"),
        );
        c(
            "editorOverviewRuler.wordHighlightTextForeground",
            &alpha(CYANS.ice, "60"),
        );
        c(
            "editorOverviewRuler.findMatchForeground",
            &alpha(PINKS.sekai, "90"),
        );
        c(
            "editorOverviewRuler.selectionHighlightForeground",
            &alpha(TEALS.classic, "50"),
        );
        c("editorOverviewRuler.infoForeground", SEMANTIC.info);
        c("editorOverviewRuler.warningForeground", SEMANTIC.warning);
        c("editorOverviewRuler.errorForeground", SEMANTIC.error);

        // Links and code lens
        c("editorLink.activeForeground", HOLOGRAM.cyan);
        c("editorCodeLens.foreground", &alpha(TEALS.neon, "CC"));

        // Activity bar
        c("activityBar.background", BLACKS.sleeve);
        c("activityBar.foreground", TEALS.classic);
        c("activityBar.activeBorder", PINKS.sekai);
        c("activityBar.activeBackground", &alpha(V4X_VOICE.hard, "20"));
        c("activityBar.inactiveForeground", GREYS.silver);
        c("activityBar.border", &alpha(TEALS.classic, "15"));
        c("activityBarBadge.background", PINKS.sekai);
        c("activityBarBadge.foreground", "#FFFFFF");
        c("activityBarTop.foreground", TEALS.classic);
        c("activityBarTop.activeBorder", PINKS.sekai);
        c("activityBarTop.inactiveForeground", GREYS.silver);
        c("activityWarningBadge.background", SEMANTIC.warning);
        c("activityWarningBadge.foreground", BLACKS.void);
        c("activityErrorBadge.background", SEMANTIC.error);
        c("activityErrorBadge.foreground", "#FFFFFF");

        // Sidebar
        c("sideBar.background", BLACKS.void);
        c("sideBar.foreground", "#A8C4C0");
        c("sideBar.border", &alpha(TEALS.classic, "15"));
        c("sideBar.dropBackground", &alpha(TEALS.classic, "20"));
        c("sideBarSectionHeader.background", BLACKS.sleeve);
        c("sideBarSectionHeader.foreground", TEALS.classic);
        c("sideBarSectionHeader.border", &alpha(TEALS.classic, "15"));
        c("sideBarTitle.foreground", TEALS.classic);
        c("sideBarStickyScroll.background", BLACKS.sleeve);
        c("sideBarStickyScroll.border", &alpha(TEALS.classic, "20"));
        c("sideBarStickyScroll.shadow", "#00000040");

        // Status bar
        c("statusBar.background", BLACKS.void);
        c("statusBar.foreground", FOREGROUNDS.primary);
        c("statusBar.border", &alpha(TEALS.classic, "30"));
        c("statusBar.debuggingBackground", PINKS.sekai);
        c("statusBar.debuggingForeground", "#FFFFFF");
        c("statusBar.debuggingBorder", &alpha(PINKS.sekai, "80"));
        c("statusBar.noFolderBackground", BLACKS.void);
        c("statusBar.noFolderForeground", GREYS.silver);
        c("statusBar.noFolderBorder", &alpha(TEALS.classic, "20"));
        c("statusBarItem.remoteBackground", TEALS.classic);
        c("statusBarItem.remoteForeground", BLACKS.void);
        c(
            "statusBarItem.hoverBackground",
            &alpha(VERSION_MAPPING.hover, "25"),
        );
        c("statusBarItem.hoverForeground", "#FFFFFF");
        c(
            "statusBarItem.activeBackground",
            &alpha(V4X_VOICE.hard, "35"),
        );
        c("statusBarItem.errorBackground", SEMANTIC.error);
        c("statusBarItem.errorForeground", "#FFFFFF");
        c("statusBarItem.warningBackground", SEMANTIC.warning);
        c("statusBarItem.warningForeground", BLACKS.void);
        c(
            "statusBarItem.prominentBackground",
            &alpha(TEALS.classic, "20"),
        );
        c("statusBarItem.prominentForeground", TEALS.classic);
        c(
            "statusBarItem.prominentHoverBackground",
            &alpha(VERSION_MAPPING.hover, "35"),
        );
        c("statusBarItem.offlineBackground", GREYS.gunmetal);
        c("statusBarItem.offlineForeground", "#FFFFFF");

        // Title bar
        c("titleBar.activeBackground", BLACKS.void);
        c("titleBar.activeForeground", FOREGROUNDS.primary);
        c("titleBar.inactiveBackground", BLACKS.void);
        c("titleBar.inactiveForeground", GREYS.silver);
        c("titleBar.border", &alpha(TEALS.classic, "15"));

        // Tabs
        c("tab.activeBackground", BLACKS.base);
        c("tab.activeForeground", TEALS.classic);
        c("tab.activeBorderTop", PINKS.sekai);
        c("tab.activeBorder", &alpha(TEALS.classic, "40"));
        c("tab.selectedForeground", "#FFFFFF");
        c("tab.inactiveBackground", BLACKS.outfit);
        c("tab.inactiveForeground", GREYS.silver);
        c("tab.border", BLACKS.sleeve);
        c("tab.hoverBackground", &alpha(VERSION_MAPPING.hover, "12"));
        c("tab.hoverForeground", VERSION_MAPPING.hover);
        c("tab.hoverBorder", &alpha(VERSION_MAPPING.hover, "40"));
        c("tab.unfocusedActiveBackground", BLACKS.base);
        c("tab.unfocusedActiveForeground", "#A8C4C0");
        c("tab.unfocusedActiveBorderTop", &alpha(PINKS.sekai, "80"));
        c("tab.unfocusedInactiveBackground", BLACKS.outfit);
        c("tab.unfocusedInactiveForeground", GREYS.silver);
        c("tab.unfocusedHoverForeground", VERSION_MAPPING.hover);
        c("editorGroupHeader.tabsBackground", BLACKS.sleeve);
        c("editorGroupHeader.tabsBorder", &alpha(TEALS.classic, "15"));
        c("editorGroupHeader.noTabsBackground", BLACKS.outfit);
        c("editorGroup.border", &alpha(TEALS.classic, "25"));
        c("editorGroup.dropBackground", &alpha(TEALS.classic, "20"));

        // Lists
        c("list.activeSelectionBackground", &alpha(TEALS.classic, "30"));
        c("list.activeSelectionForeground", "#FFFFFF");
        c("list.activeSelectionIconForeground", TEALS.classic);
        c(
            "list.inactiveSelectionBackground",
            &alpha(TEALS.classic, "20"),
        );
        c("list.inactiveSelectionForeground", FOREGROUNDS.primary);
        c(
            "list.inactiveSelectionIconForeground",
            FOREGROUNDS.primary,
        );
        c("list.hoverBackground", &alpha(VERSION_MAPPING.hover, "15"));
        c("list.hoverForeground", FOREGROUNDS.primary);
        c("list.focusBackground", &alpha(VERSION_MAPPING.focus, "20"));
        c("list.focusForeground", "#FFFFFF");
        c("list.focusOutline", &alpha(VERSION_MAPPING.focus, "60"));
        c("list.highlightForeground", PINKS.sekai);
        c("list.focusHighlightForeground", PINKS.sekai);
        c("list.errorForeground", SEMANTIC.error);
        c("list.warningForeground", SEMANTIC.warning);
        c("list.invalidItemForeground", SEMANTIC.error);
        c("list.deemphasizedForeground", GREYS.silver);
        c("listFilterWidget.background", BLACKS.outfit);
        c("listFilterWidget.outline", &alpha(TEALS.classic, "60"));
        c("listFilterWidget.noMatchesOutline", SEMANTIC.error);

        // Tree
        c("tree.indentGuidesStroke", &alpha(TEALS.classic, "30"));
        c("tree.tableColumnsBorder", &alpha(TEALS.classic, "20"));

        // General UI
        c("focusBorder", &alpha(TEALS.classic, "60"));
        c("foreground", FOREGROUNDS.primary);
        c("disabledForeground", GREYS.silver);
        c("widget.shadow", "#00000060");
        c("selection.background", &alpha(TEALS.classic, "40"));
        c("descriptionForeground", GREYS.silver);
        c("errorForeground", SEMANTIC.error);
        c("icon.foreground", "#A8C4C0");
        c("sash.hoverBorder", &alpha(VERSION_MAPPING.hover, "60"));

        // Input
        c("input.background", BLACKS.sleeve);
        c("input.foreground", FOREGROUNDS.primary);
        c("input.border", &alpha(TEALS.classic, "40"));
        c("input.placeholderForeground", GREYS.silver);
        c("inputOption.activeBorder", PINKS.sekai);
        c("inputOption.activeBackground", &alpha(PINKS.sekai, "30"));
        c("inputOption.activeForeground", "#FFFFFF");
        c(
            "inputOption.hoverBackground",
            &alpha(VERSION_MAPPING.hover, "20"),
        );
        c("inputValidation.errorBackground", &alpha(SEMANTIC.error, "25"));
        c("inputValidation.errorBorder", SEMANTIC.error);
        c("inputValidation.errorForeground", SEMANTIC.error);
        c(
            "inputValidation.warningBackground",
            &alpha(SEMANTIC.warning, "25"),
        );
        c("inputValidation.warningBorder", SEMANTIC.warning);
        c("inputValidation.warningForeground", SEMANTIC.warning);
        c("inputValidation.infoBackground", &alpha(SEMANTIC.info, "25"));
        c("inputValidation.infoBorder", SEMANTIC.info);
        c("inputValidation.infoForeground", SEMANTIC.info);
        c("radio.activeForeground", TEALS.classic);
        c("radio.activeBackground", &alpha(TEALS.classic, "25"));
        c("radio.inactiveForeground", GREYS.silver);

        // Dropdown
        c("dropdown.background", BLACKS.sleeve);
        c("dropdown.foreground", FOREGROUNDS.primary);
        c("dropdown.border", &alpha(TEALS.classic, "40"));
        c("dropdown.listBackground", BLACKS.outfit);

        // Button
        c("button.background", TEALS.classic);
        c("button.foreground", BLACKS.void);
        c("button.hoverBackground", TEALS.stage);
        c("button.secondaryBackground", GREYS.slate);
        c("button.secondaryForeground", "#FFFFFF");
        c("button.secondaryHoverBackground", GREYS.steel);
        c("button.border", &alpha(TEALS.classic, "80"));

        // Badge
        c("badge.background", TEALS.classic);
        c("badge.foreground", BLACKS.void);

        // Checkbox
        c("checkbox.background", BLACKS.sleeve);
        c("checkbox.foreground", TEALS.classic);
        c("checkbox.border", &alpha(TEALS.classic, "40"));
        c("checkbox.disabled.foreground", GREYS.silver);

        // Scrollbar
        c("scrollbar.shadow", "#00000040");
        c("scrollbarSlider.background", &alpha(TEALS.classic, "15"));
        c(
            "scrollbarSlider.hoverBackground",
            &alpha(VERSION_MAPPING.hover, "30"),
        );
        c("scrollbarSlider.activeBackground", &alpha(PINKS.sekai, "80"));

        // Minimap
        c("minimap.findMatchHighlight", &alpha(PINKS.sekai, "80"));
        c("minimap.selectionHighlight", &alpha(TEALS.classic, "60"));
        c("minimap.errorHighlight", &alpha(SEMANTIC.error, "90"));
        c("minimap.warningHighlight", &alpha(SEMANTIC.warning, "90"));
        c("minimap.background", &alpha(BLACKS.outfit, "90"));
        c(
            "minimap.selectionOccurrenceHighlight",
            &alpha(CYANS.ice, "50"),
        );
        c("minimap.foregroundOpacity", "#000000C0");
        c("minimap.infoHighlight", &alpha(SEMANTIC.info, "80"));
        c("minimapSlider.background", &alpha(TEALS.classic, "15"));
        c(
            "minimapSlider.hoverBackground",
            &alpha(VERSION_MAPPING.hover, "30"),
        );
        c("minimapSlider.activeBackground", &alpha(V4X_VOICE.hard, "40"));
        c("minimapGutter.addedBackground", SEMANTIC.success);
        c("minimapGutter.modifiedBackground", SEMANTIC.warning);
        c("minimapGutter.deletedBackground", SEMANTIC.error);

        // Breadcrumb
        c("breadcrumb.foreground", FOREGROUNDS.secondary);
        c("breadcrumb.background", BLACKS.base);
        c("breadcrumb.focusForeground", TEALS.classic);
        c("breadcrumb.activeSelectionForeground", PINKS.sekai);
        c(
            "breadcrumb.activeSelectionBackground",
            &alpha(TEALS.classic, "20"),
        );
        c("breadcrumbPicker.background", BLACKS.outfit);

        // Terminal
        c("terminal.background", BLACKS.base);
        c("terminal.foreground", FOREGROUNDS.primary);
        c("terminal.ansiBlack", BLACKS.base);
        c("terminal.ansiRed", SEMANTIC.error);
        c("terminal.ansiGreen", SEMANTIC.success);
        c("terminal.ansiYellow", SEMANTIC.warning);
        c("terminal.ansiBlue", ACCENTS.blue);
        c("terminal.ansiMagenta", PINKS.sekai);
        c("terminal.ansiCyan", SEMANTIC.info);
        c("terminal.ansiWhite", FOREGROUNDS.bright);
        c("terminal.ansiBrightBlack", GREYS.silver);
        c("terminal.ansiBrightRed", ACCENTS.coral_glow);
        c("terminal.ansiBrightGreen", ACCENTS.green_bright);
        c("terminal.ansiBrightYellow", "#FFFF8D");
        c("terminal.ansiBrightBlue", "#80D8FF");
        c("terminal.ansiBrightMagenta", PINKS.soft);
        c("terminal.ansiBrightCyan", CYANS.ice);
        c("terminal.ansiBrightWhite", "#FFFFFF");
        c("terminal.selectionBackground", &alpha(TEALS.classic, "40"));
        c(
            "terminal.inactiveSelectionBackground",
            &alpha(TEALS.classic, "25"),
        );
        c("terminal.findMatchBackground", &alpha(PINKS.sekai, "50"));
        c("terminal.findMatchBorder", &alpha(PINKS.sekai, "90"));
        c(
            "terminal.findMatchHighlightBackground",
            &alpha(PINKS.sekai, "25"),
        );
        c(
            "terminal.findMatchHighlightBorder",
            &alpha(PINKS.sekai, "50"),
        );
        c("terminal.initialHintForeground", GREYS.silver);
        c("terminalCommandGuide.foreground", GREYS.silver);
        c("terminalCursor.foreground", PINKS.sekai);
        c("terminalCursor.background", BLACKS.base);
        c("terminal.border", &alpha(TEALS.classic, "30"));
        c("terminal.tab.activeBorder", PINKS.sekai);
        c(
            "terminalCommandDecoration.defaultBackground",
            &alpha(TEALS.classic, "60"),
        );
        c(
            "terminalCommandDecoration.successBackground",
            &alpha(SEMANTIC.success, "90"),
        );
        c(
            "terminalCommandDecoration.errorBackground",
            &alpha(SEMANTIC.error, "90"),
        );
        c("terminalOverviewRuler.cursorForeground", PINKS.sekai);
        c(
            "terminalOverviewRuler.findMatchForeground",
            &alpha(PINKS.sekai, "80"),
        );

        // Text
        c("textLink.foreground", HOLOGRAM.cyan);
        c("textLink.activeForeground", CYANS.ice);
        c("textBlockQuote.background", BLACKS.outfit);
        c("textBlockQuote.border", &alpha(TEALS.classic, "60"));
        c("textCodeBlock.background", BLACKS.sleeve);
        c("textPreformat.foreground", SEMANTIC.success);
        c("textSeparator.foreground", &alpha(TEALS.classic, "30"));

        // Notifications
        c("notifications.background", BLACKS.outfit);
        c("notifications.foreground", FOREGROUNDS.primary);
        c("notifications.border", &alpha(PINKS.sekai, "50"));
        c("notificationToast.border", &alpha(TEALS.classic, "40"));
        c("notificationsInfoIcon.foreground", SEMANTIC.info);
        c("notificationsWarningIcon.foreground", SEMANTIC.warning);
        c("notificationsErrorIcon.foreground", SEMANTIC.error);
        c("notificationLink.foreground", HOLOGRAM.cyan);
        c("notificationCenterHeader.background", BLACKS.sleeve);
        c("notificationCenterHeader.foreground", TEALS.classic);
        c("notificationCenter.border", &alpha(TEALS.classic, "40"));

        // Peek view
        c("peekView.border", APPEND.vivid);
        c("peekViewEditor.background", BLACKS.outfit);
        c("peekViewEditorGutter.background", BLACKS.sleeve);
        c("peekViewResult.background", BLACKS.sleeve);
        c(
            "peekViewResult.selectionBackground",
            &alpha(TEALS.classic, "30"),
        );
        c("peekViewResult.selectionForeground", "#FFFFFF");
        c("peekViewTitle.background", BLACKS.void);
        c("peekViewTitleLabel.foreground", TEALS.bright);
        c("peekViewTitleDescription.foreground", GREYS.silver);
        c("peekViewResult.fileForeground", FOREGROUNDS.primary);
        c("peekViewResult.lineForeground", "#A8C4C0");
        c(
            "peekViewResult.matchHighlightBackground",
            &alpha(PINKS.sekai, "50"),
        );
        c(
            "peekViewEditor.matchHighlightBackground",
            &alpha(PINKS.sekai, "50"),
        );
        c(
            "peekViewEditor.matchHighlightBorder",
            &alpha(PINKS.sekai, "80"),
        );

        // Picker
        c("pickerGroup.border", &alpha(TEALS.classic, "30"));
        c("pickerGroup.foreground", TEALS.classic);

        // Git decorations
        c("gitDecoration.addedResourceForeground", SEMANTIC.success);
        c("gitDecoration.modifiedResourceForeground", SEMANTIC.warning);
        c("gitDecoration.deletedResourceForeground", SEMANTIC.error);
        c("gitDecoration.renamedResourceForeground", SEMANTIC.info);
        c("gitDecoration.untrackedResourceForeground", TEALS.classic);
        c("gitDecoration.ignoredResourceForeground", GREYS.silver);
        c("gitDecoration.conflictingResourceForeground", PINKS.sekai);
        c(
            "gitDecoration.stageModifiedResourceForeground",
            SEMANTIC.warning,
        );
        c(
            "gitDecoration.stageDeletedResourceForeground",
            SEMANTIC.error,
        );
        c("gitDecoration.submoduleResourceForeground", SEMANTIC.info);
        c(
            "git.blame.editorDecorationForeground",
            &alpha(TEALS.neon, "99"),
        );

        // Diff editor
        c(
            "diffEditor.insertedTextBackground",
            &alpha(SEMANTIC.success, "18"),
        );
        c(
            "diffEditor.removedTextBackground",
            &alpha(SEMANTIC.error, "18"),
        );
        c(
            "diffEditor.insertedLineBackground",
            &alpha(SEMANTIC.success, "0D"),
        );
        c(
            "diffEditor.removedLineBackground",
            &alpha(SEMANTIC.error, "0D"),
        );
        c("diffEditor.diagonalFill", &alpha(TEALS.classic, "15"));
        c("diffEditor.border", &alpha(TEALS.classic, "30"));
        c("diffEditor.unchangedRegionBackground", BLACKS.outfit);
        c("diffEditor.unchangedRegionForeground", GREYS.silver);
        c("diffEditor.unchangedCodeBackground", &alpha(TEALS.classic, "08"));
        c(
            "diffEditorGutter.insertedLineBackground",
            &alpha(SEMANTIC.success, "40"),
        );
        c(
            "diffEditorGutter.removedLineBackground",
            &alpha(SEMANTIC.error, "40"),
        );
        c("diffEditorOverview.insertedForeground", SEMANTIC.success);
        c("diffEditorOverview.removedForeground", SEMANTIC.error);
        c("multiDiffEditor.headerBackground", BLACKS.outfit);
        c("multiDiffEditor.border", &alpha(TEALS.classic, "30"));

        // Merge conflicts
        c("merge.currentContentBackground", &alpha(SEMANTIC.success, "15"));
        c("merge.incomingContentBackground", &alpha(SEMANTIC.info, "15"));
        c("merge.commonContentBackground", &alpha(GREYS.slate, "20"));

        // Panel
        c("panel.background", BLACKS.void);
        c("panel.border", &alpha(TEALS.classic, "30"));
        c("panel.dropBorder", &alpha(TEALS.classic, "60"));
        c("panelTitle.activeForeground", TEALS.classic);
        c("panelTitle.inactiveForeground", GREYS.silver);
        c("panelTitle.activeBorder", PINKS.sekai);
        c("panelTitleBadge.background", TEALS.classic);
        c("panelTitleBadge.foreground", BLACKS.void);
        c("panelInput.border", &alpha(TEALS.classic, "40"));
        c("panelSection.border", &alpha(TEALS.classic, "25"));
        c("panelSection.dropBackground", &alpha(TEALS.classic, "20"));
        c("panelSectionHeader.background", BLACKS.sleeve);
        c("panelSectionHeader.foreground", TEALS.classic);
        c("panelSectionHeader.border", &alpha(TEALS.classic, "20"));

        // Debug
        c("debugToolBar.background", BLACKS.void);
        c("debugToolBar.border", &alpha(PINKS.sekai, "60"));
        c("debugIcon.breakpointForeground", PINKS.sekai);
        c(
            "debugIcon.breakpointDisabledForeground",
            &alpha(PINKS.sekai, "50"),
        );
        c("debugIcon.breakpointUnverifiedForeground", SEMANTIC.warning);
        c(
            "debugIcon.breakpointCurrentStackframeForeground",
            CYANS.ice,
        );
        c(
            "debugIcon.breakpointStackframeForeground",
            SEMANTIC.success,
        );
        c("debugIcon.startForeground", SEMANTIC.success);
        c("debugIcon.pauseForeground", SEMANTIC.warning);
        c("debugIcon.stopForeground", SEMANTIC.error);
        c("debugIcon.disconnectForeground", SEMANTIC.error);
        c("debugIcon.restartForeground", SEMANTIC.success);
        c("debugIcon.stepOverForeground", SEMANTIC.info);
        c("debugIcon.stepIntoForeground", SEMANTIC.info);
        c("debugIcon.stepOutForeground", SEMANTIC.info);
        c("debugIcon.stepBackForeground", SEMANTIC.info);
        c("debugIcon.continueForeground", SEMANTIC.success);
        c("debugConsole.infoForeground", SEMANTIC.info);
        c("debugConsole.warningForeground", SEMANTIC.warning);
        c("debugConsole.errorForeground", ACCENTS.coral_glow);
        c("debugConsole.sourceForeground", SEMANTIC.success);
        c("debugConsoleInputIcon.foreground", TEALS.classic);
        c("debugTokenExpression.name", TEALS.classic);
        c("debugTokenExpression.value", FOREGROUNDS.primary);
        c("debugTokenExpression.string", SEMANTIC.success);
        c("debugTokenExpression.number", PINKS.sekai);
        c("debugTokenExpression.boolean", PINKS.sekai);
        c("debugTokenExpression.error", SEMANTIC.error);
        c("debugTokenExpression.type", TEALS.bright);
        c("editor.inlineValuesForeground", SEMANTIC.warning);
        c("debugView.exceptionLabelForeground", "#FFFFFF");
        c("debugView.exceptionLabelBackground", SEMANTIC.error);
        c("debugView.stateLabelForeground", FOREGROUNDS.primary);
        c("debugView.stateLabelBackground", &alpha(TEALS.classic, "40"));
        c(
            "debugView.valueChangedHighlight",
            &alpha(SEMANTIC.warning, "80"),
        );
        c(
            "editor.stackFrameHighlightBackground",
            &alpha(PINKS.sekai, "25"),
        );
        c(
            "editor.focusedStackFrameHighlightBackground",
            &alpha(CYANS.ice, "20"),
        );

        // Testing
        c("testing.iconFailed", SEMANTIC.error);
        c("testing.iconErrored", SEMANTIC.error);
        c("testing.iconPassed", SEMANTIC.success);
        c("testing.iconQueued", SEMANTIC.warning);
        c("testing.iconUnset", GREYS.slate);
        c("testing.iconSkipped", GREYS.slate);
        c("testing.runAction", SEMANTIC.success);
        c("testing.peekBorder", TEALS.classic);
        c("testing.peekHeaderBackground", BLACKS.outfit);
        c(
            "testing.message.error.decorationForeground",
            SEMANTIC.error,
        );
        c(
            "testing.message.error.lineBackground",
            &alpha(SEMANTIC.error, "15"),
        );
        c("testing.message.info.decorationForeground", SEMANTIC.info);
        c(
            "testing.message.info.lineBackground",
            &alpha(SEMANTIC.info, "15"),
        );
        c("testing.coverCountBadgeForeground", SEMANTIC.success);

        // Merge editor
        c("mergeEditor.change.background", &alpha(SEMANTIC.warning, "15"));
        c(
            "mergeEditor.change.word.background",
            &alpha(SEMANTIC.warning, "30"),
        );
        c(
            "mergeEditor.conflict.handled.minimapOverViewRuler",
            SEMANTIC.success,
        );
        c(
            "mergeEditor.conflict.handledFocused.border",
            SEMANTIC.success,
        );
        c(
            "mergeEditor.conflict.handledUnfocused.border",
            &alpha(SEMANTIC.success, "80"),
        );
        c(
            "mergeEditor.conflict.unhandled.minimapOverViewRuler",
            SEMANTIC.error,
        );
        c(
            "mergeEditor.conflict.unhandledFocused.border",
            SEMANTIC.error,
        );
        c(
            "mergeEditor.conflict.unhandledUnfocused.border",
            &alpha(SEMANTIC.error, "80"),
        );
        c(
            "mergeEditor.conflictingLines.background",
            &alpha(SEMANTIC.error, "15"),
        );

        // Settings
        c("settings.headerForeground", TEALS.classic);
        c("settings.modifiedItemIndicator", PINKS.sekai);
        c(
            "settings.focusedRowBackground",
            &alpha(VERSION_MAPPING.focus, "10"),
        );
        c(
            "settings.rowHoverBackground",
            &alpha(VERSION_MAPPING.hover, "08"),
        );
        c(
            "settings.focusedRowBorder",
            &alpha(VERSION_MAPPING.focus, "40"),
        );
        c("settings.headerBorder", &alpha(TEALS.classic, "20"));
        c("settings.sashBorder", &alpha(TEALS.classic, "30"));
        c("settings.dropdownBackground", BLACKS.sleeve);
        c("settings.dropdownForeground", FOREGROUNDS.primary);
        c("settings.dropdownBorder", &alpha(TEALS.classic, "40"));
        c("settings.dropdownListBorder", &alpha(TEALS.classic, "40"));
        c("settings.checkboxBackground", BLACKS.sleeve);
        c("settings.checkboxForeground", TEALS.classic);
        c("settings.checkboxBorder", &alpha(TEALS.classic, "40"));
        c("settings.textInputBackground", BLACKS.sleeve);
        c("settings.textInputForeground", FOREGROUNDS.primary);
        c("settings.textInputBorder", &alpha(TEALS.classic, "40"));
        c("settings.numberInputBackground", BLACKS.sleeve);
        c("settings.numberInputForeground", FOREGROUNDS.primary);
        c("settings.numberInputBorder", &alpha(TEALS.classic, "40"));

        // Welcome page
        c("welcomePage.background", BLACKS.base);
        c("welcomePage.tileBackground", BLACKS.outfit);
        c("welcomePage.tileBorder", &alpha(TEALS.classic, "30"));
        c(
            "welcomePage.tileHoverBackground",
            &alpha(VERSION_MAPPING.hover, "10"),
        );
        c("welcomePage.progress.foreground", TEALS.classic);
        c("welcomePage.progress.background", BLACKS.sleeve);
        c("walkThrough.embeddedEditorBackground", BLACKS.outfit);
        c("walkthrough.stepTitle.foreground", FOREGROUNDS.bright);

        // Extensions
        c("extensionButton.prominentBackground", TEALS.classic);
        c("extensionButton.prominentForeground", BLACKS.void);
        c("extensionButton.prominentHoverBackground", TEALS.stage);
        c("extensionButton.separator", BLACKS.void);
        c("extensionBadge.remoteBackground", PINKS.sekai);
        c("extensionBadge.remoteForeground", "#FFFFFF");
        c("extensionIcon.starForeground", SEMANTIC.warning);
        c("extensionIcon.verifiedForeground", SEMANTIC.success);
        c("extensionIcon.preReleaseForeground", SEMANTIC.warning);
        c("extensionIcon.sponsorForeground", PINKS.sekai);

        // Keybinding
        c("keybindingLabel.background", &alpha(TEALS.classic, "20"));
        c("keybindingLabel.foreground", TEALS.classic);
        c("keybindingLabel.border", &alpha(TEALS.classic, "40"));
        c("keybindingLabel.bottomBorder", &alpha(TEALS.classic, "60"));
        c("keybindingTable.headerBackground", BLACKS.sleeve);
        c("keybindingTable.rowsBackground", BLACKS.outfit);

        // Charts
        c("charts.foreground", FOREGROUNDS.primary);
        c("charts.lines", &alpha(TEALS.classic, "60"));
        c("charts.red", SEMANTIC.error);
        c("charts.green", SEMANTIC.success);
        c("charts.yellow", SEMANTIC.warning);
        c("charts.blue", SEMANTIC.info);
        c("charts.purple", HOLOGRAM.purple);
        c("charts.orange", ACCENTS.orange);

        // Menu
        c("menu.background", BLACKS.outfit);
        c("menu.foreground", FOREGROUNDS.primary);
        c("menu.selectionBackground", &alpha(TEALS.classic, "30"));
        c("menu.selectionForeground", "#FFFFFF");
        c("menu.selectionBorder", &alpha(TEALS.classic, "50"));
        c("menu.separatorBackground", &alpha(TEALS.classic, "30"));
        c("menu.border", &alpha(TEALS.classic, "30"));
        c("menubar.selectionBackground", &alpha(TEALS.classic, "25"));
        c("menubar.selectionForeground", "#FFFFFF");
        c("menubar.selectionBorder", &alpha(TEALS.classic, "40"));

        // Command center
        c("commandCenter.foreground", FOREGROUNDS.primary);
        c("commandCenter.background", BLACKS.sleeve);
        c("commandCenter.border", &alpha(TEALS.classic, "30"));
        c("commandCenter.activeBackground", &alpha(TEALS.classic, "25"));
        c("commandCenter.activeForeground", TEALS.classic);
        c("commandCenter.activeBorder", &alpha(TEALS.classic, "60"));
        c("commandCenter.inactiveForeground", GREYS.silver);
        c("commandCenter.inactiveBorder", &alpha(TEALS.classic, "20"));

        // Quick input
        c("quickInput.background", BLACKS.outfit);
        c("quickInput.foreground", FOREGROUNDS.primary);
        c("quickInputTitle.background", BLACKS.sleeve);
        c(
            "quickInputList.focusBackground",
            &alpha(VERSION_MAPPING.focus, "30"),
        );
        c("quickInputList.focusForeground", "#FFFFFF");
        c("quickInputList.focusIconForeground", TEALS.classic);

        // Banner
        c("banner.background", BLACKS.outfit);
        c("banner.foreground", FOREGROUNDS.primary);
        c("banner.iconForeground", TEALS.classic);

        // Errors and warnings
        c("editorError.foreground", SEMANTIC.error);
        c("editorError.border", &alpha(SEMANTIC.error, "40"));
        c("editorError.background", &alpha(SEMANTIC.error, "15"));
        c("editorWarning.foreground", SEMANTIC.warning);
        c("editorWarning.border", &alpha(SEMANTIC.warning, "40"));
        c("editorWarning.background", &alpha(SEMANTIC.warning, "15"));
        c("editorInfo.foreground", SEMANTIC.info);
        c("editorInfo.border", &alpha(SEMANTIC.info, "40"));
        c("editorInfo.background", &alpha(SEMANTIC.info, "15"));
        c("editorHint.foreground", SEMANTIC.success);
        c("editorHint.border", &alpha(SEMANTIC.success, "40"));
        c("problemsErrorIcon.foreground", SEMANTIC.error);
        c("problemsWarningIcon.foreground", SEMANTIC.warning);
        c("problemsInfoIcon.foreground", SEMANTIC.info);

        // Lightbulb
        c("editorLightBulb.foreground", SEMANTIC.warning);
        c("editorLightBulbAutoFix.foreground", SEMANTIC.success);
        c("editorLightBulbAi.foreground", PINKS.sekai);

        // Inlay hints
        c("editorInlayHint.background", &alpha(CYANS.ice, "12"));
        c("editorInlayHint.foreground", &alpha(TEALS.neon, "DD"));
        c(
            "editorInlayHint.typeForeground",
            &alpha(VERSION_MAPPING.types, "CC"),
        );
        c(
            "editorInlayHint.typeBackground",
            &alpha(VERSION_MAPPING.types, "12"),
        );
        c(
            "editorInlayHint.parameterForeground",
            &alpha(PINKS.soft, "E6"),
        );
        c(
            "editorInlayHint.parameterBackground",
            &alpha(PINKS.soft, "12"),
        );

        // Sticky scroll
        c("editorStickyScroll.background", &alpha(BLACKS.outfit, "F0"));
        c("editorStickyScroll.border", &alpha(CYANS.ice, "30"));
        c(
            "editorStickyScrollHover.background",
            &alpha(VERSION_MAPPING.hover, "10"),
        );

        // Notebook
        c("notebook.cellBorderColor", &alpha(TEALS.classic, "30"));
        c("notebook.cellEditorBackground", BLACKS.outfit);
        c(
            "notebook.cellHoverBackground",
            &alpha(VERSION_MAPPING.hover, "10"),
        );
        c("notebook.cellInsertionIndicator", CYANS.ice);
        c(
            "notebook.cellStatusBarItemHoverBackground",
            &alpha(VERSION_MAPPING.hover, "20"),
        );
        c("notebook.cellToolbarSeparator", &alpha(TEALS.classic, "30"));
        c("notebook.editorBackground", BLACKS.base);
        c("notebook.focusedCellBorder", APPEND.vivid);
        c("notebook.focusedEditorBorder", &alpha(APPEND.vivid, "80"));
        c(
            "notebook.inactiveFocusedCellBorder",
            &alpha(TEALS.classic, "60"),
        );
        c("notebook.inactiveEditorBorder", &alpha(TEALS.classic, "30"));
        c("notebook.runningCellBorder", CYANS.ice);
        c("notebook.outputContainerBackgroundColor", BLACKS.outfit);
        c(
            "notebook.outputContainerBorderColor",
            &alpha(TEALS.classic, "20"),
        );
        c("notebook.selectedCellBackground", &alpha(TEALS.classic, "15"));
        c("notebook.selectedCellBorder", &alpha(TEALS.classic, "60"));
        c(
            "notebook.symbolHighlightBackground",
            &alpha(TEALS.classic, "20"),
        );
        c("notebookStatusSuccessIcon.foreground", SEMANTIC.success);
        c("notebookStatusErrorIcon.foreground", SEMANTIC.error);
        c("notebookStatusRunningIcon.foreground", SEMANTIC.warning);
        c(
            "notebookEditorOverviewRuler.runningCellForeground",
            SEMANTIC.warning,
        );

        // Symbol icons
        c("symbolIcon.arrayForeground", TEALS.stage);
        c("symbolIcon.booleanForeground", PINKS.hot);
        c("symbolIcon.classForeground", SNOW_MIKU.y2011.winter_blue);
        c("symbolIcon.colorForeground", PINKS.sekai);
        c("symbolIcon.constantForeground", PINKS.hot);
        c("symbolIcon.constructorForeground", TEALS.neon);
        c("symbolIcon.enumeratorForeground", ACCENTS.gold);
        c("symbolIcon.enumeratorMemberForeground", ACCENTS.orange);
        c("symbolIcon.eventForeground", ACCENTS.gold);
        c("symbolIcon.fieldForeground", SNOW_MIKU.y2011.mittens);
        c("symbolIcon.fileForeground", FOREGROUNDS.primary);
        c("symbolIcon.folderForeground", TEALS.classic);
        c("symbolIcon.functionForeground", TEALS.neon);
        c("symbolIcon.interfaceForeground", CYANS.ice);
        c("symbolIcon.keyForeground", TEALS.classic);
        c("symbolIcon.keywordForeground", TEALS.classic);
        c("symbolIcon.methodForeground", TEALS.tint);
        c("symbolIcon.moduleForeground", FOREGROUNDS.primary);
        c("symbolIcon.namespaceForeground", TEALS.classic);
        c("symbolIcon.nullForeground", PINKS.sekai);
        c("symbolIcon.numberForeground", PINKS.sekai);
        c("symbolIcon.objectForeground", FOREGROUNDS.primary);
        c("symbolIcon.operatorForeground", TEALS.classic);
        c("symbolIcon.packageForeground", TEALS.classic);
        c("symbolIcon.propertyForeground", SNOW_MIKU.y2011.mittens);
        c("symbolIcon.referenceForeground", TEALS.stage);
        c("symbolIcon.snippetForeground", SEMANTIC.success);
        c("symbolIcon.stringForeground", SEMANTIC.success);
        c("symbolIcon.structForeground", PINKS.blush);
        c("symbolIcon.textForeground", FOREGROUNDS.primary);
        c("symbolIcon.typeParameterForeground", ACCENTS.gold);
        c("symbolIcon.unitForeground", PINKS.sekai);
        c("symbolIcon.variableForeground", FOREGROUNDS.primary);
        c("symbolIcon.typeAliasForeground", VERSION_MAPPING.types);
        c("symbolIcon.importForeground", TEALS.classic);

        // Inline chat
        c("inlineChat.background", BLACKS.outfit);
        c("inlineChat.foreground", FOREGROUNDS.primary);
        c("inlineChat.border", &alpha(TEALS.classic, "40"));
        c("inlineChat.shadow", "#00000060");
        c("inlineChatInput.background", BLACKS.sleeve);
        c("inlineChatInput.border", &alpha(TEALS.classic, "40"));
        c("inlineChatInput.focusBorder", &alpha(TEALS.classic, "60"));
        c("inlineChatInput.placeholderForeground", GREYS.silver);
        c("inlineChatDiff.inserted", &alpha(SEMANTIC.success, "20"));
        c("inlineChatDiff.removed", &alpha(SEMANTIC.error, "20"));

        // Chat
        c("chat.requestBackground", BLACKS.outfit);
        c("chat.requestBorder", &alpha(TEALS.classic, "30"));
        c("chat.avatarForeground", TEALS.classic);
        c("chat.linesAddedForeground", SEMANTIC.success);
        c("chat.linesRemovedForeground", SEMANTIC.error);
        c("chat.slashCommandForeground", HOLOGRAM.cyan);
        c("chat.editedFileForeground", SEMANTIC.warning);

        // Ports
        c("ports.iconRunningProcessForeground", SEMANTIC.success);

        // Profile badge
        c("profileBadge.background", TEALS.classic);
        c("profileBadge.foreground", FOREGROUNDS.bright);

        // Language status
        c("languageStatus.icon.foreground", TEALS.classic);

        // Search editor
        c("searchEditor.findMatchBackground", &alpha(PINKS.sekai, "30"));
        c("searchEditor.findMatchBorder", &alpha(PINKS.sekai, "80"));
        c("searchEditor.textInputBorder", &alpha(TEALS.classic, "40"));
        c("search.resultsInfoForeground", GREYS.silver);

        // Unicode highlight
        c("editorUnicodeHighlight.border", &alpha(SEMANTIC.warning, "80"));
        c(
            "editorUnicodeHighlight.background",
            &alpha(SEMANTIC.warning, "15"),
        );

        // Suggest widget
        c("editorSuggestWidget.background", &alpha(BLACKS.outfit, "F8"));
        c("editorSuggestWidget.border", &alpha(APPEND.vivid, "50"));
        c("editorSuggestWidget.foreground", FOREGROUNDS.primary);
        c("editorSuggestWidget.highlightForeground", CYANS.ice);
        c(
            "editorSuggestWidget.selectedBackground",
            &alpha(TEALS.classic, "30"),
        );
        c("editorSuggestWidget.selectedForeground", "#FFFFFF");
        c("editorSuggestWidget.selectedIconForeground", CYANS.ice);
        c("editorSuggestWidget.focusHighlightForeground", CYANS.ice);
        c("editorSuggestWidgetStatus.foreground", GREYS.silver);

        // Marker navigation
        c("editorMarkerNavigation.background", BLACKS.outfit);
        c(
            "editorMarkerNavigationError.background",
            &alpha(SEMANTIC.error, "30"),
        );
        c(
            "editorMarkerNavigationWarning.background",
            &alpha(SEMANTIC.warning, "30"),
        );
        c(
            "editorMarkerNavigationInfo.background",
            &alpha(SEMANTIC.info, "30"),
        );
        c(
            "editorMarkerNavigationError.headerBackground",
            &alpha(SEMANTIC.error, "20"),
        );
        c(
            "editorMarkerNavigationWarning.headerBackground",
            &alpha(SEMANTIC.warning, "20"),
        );
        c(
            "editorMarkerNavigationInfo.headerBackground",
            &alpha(SEMANTIC.info, "20"),
        );

        // Action bar and toolbar
        c("actionBar.toggledBackground", &alpha(TEALS.classic, "30"));
        c("toolbar.hoverBackground", &alpha(VERSION_MAPPING.hover, "20"));
        c("toolbar.hoverOutline", &alpha(VERSION_MAPPING.hover, "40"));
        c("toolbar.activeBackground", &alpha(V4X_VOICE.hard, "30"));

        // Editor action list
        c("editorActionList.background", BLACKS.outfit);
        c("editorActionList.foreground", FOREGROUNDS.primary);
        c(
            "editorActionList.focusBackground",
            &alpha(VERSION_MAPPING.focus, "30"),
        );
        c("editorActionList.focusForeground", "#FFFFFF");

        // Comments widget
        c(
            "editorCommentsWidget.resolvedBorder",
            &alpha(SEMANTIC.success, "60"),
        );
        c(
            "editorCommentsWidget.unresolvedBorder",
            &alpha(SEMANTIC.warning, "60"),
        );
        c(
            "editorCommentsWidget.rangeBackground",
            &alpha(TEALS.classic, "10"),
        );
        c(
            "editorCommentsWidget.rangeActiveBackground",
            &alpha(TEALS.classic, "20"),
        );
        c("editorCommentsWidget.replyInputBackground", BLACKS.sleeve);

        // Folding
        c("editor.foldBackground", &alpha(CYANS.ice, "08"));
        c(
            "editor.foldPlaceholderForeground",
            &alpha(TEALS.neon, "AA"),
        );
        c("editor.foldMarkerForeground", TEALS.neon);
        c("editor.foldMarkerBackground", &alpha(TEALS.neon, "15"));

        // Snippets
        c(
            "editor.snippetTabstopHighlightBackground",
            &alpha(CYANS.ice, "18"),
        );
        c(
            "editor.snippetTabstopHighlightBorder",
            &alpha(CYANS.ice, "50"),
        );
        c(
            "editor.snippetFinalTabstopHighlightBackground",
            &alpha(PINKS.sekai, "20"),
        );
        c(
            "editor.snippetFinalTabstopHighlightBorder",
            &alpha(PINKS.sekai, "60"),
        );

        // Symbol and hover highlight
        c("editor.symbolHighlightBackground", &alpha(CYANS.ice, "15"));
        c("editor.symbolHighlightBorder", &alpha(CYANS.ice, "40"));
        c("editor.hoverHighlightBackground", &alpha(CYANS.ice, "12"));

        // Editor placeholder
        c("editor.placeholder.foreground", GREYS.silver);

        // SCM
        c("scm.historyItemAdditionsForeground", SEMANTIC.success);
        c("scm.historyItemDeletionsForeground", SEMANTIC.error);
        c(
            "scm.historyItemStatisticsBorder",
            &alpha(TEALS.classic, "30"),
        );
        c(
            "scm.historyItemSelectedStatisticsBorder",
            &alpha(TEALS.classic, "60"),
        );
        c("scmGraph.historyItemGroupLocal", TEALS.classic);
        c("scmGraph.historyItemGroupRemote", PINKS.sekai);
        c("scmGraph.historyItemGroupBase", GREYS.slate);
        c("scmGraph.historyItemGroupHoverLabelForeground", "#FFFFFF");
        c("scmGraph.historyItemHoverLabelForeground", "#FFFFFF");
        c(
            "scmGraph.historyItemHoverAdditionsForeground",
            SEMANTIC.success,
        );
        c(
            "scmGraph.historyItemHoverDeletionsForeground",
            SEMANTIC.error,
        );
        c("scmGraph.green1", SEMANTIC.success);
        c("scmGraph.green2", ACCENTS.green_bright);
        c("scmGraph.red1", SEMANTIC.error);
        c("scmGraph.yellow1", SEMANTIC.warning);
        c("scmGraph.foreground1", TEALS.classic);
        c("scmGraph.foreground2", PINKS.sekai);
        c("scmGraph.foreground3", HOLOGRAM.purple);
        c("scmGraph.foreground4", SEMANTIC.info);
        c("scmGraph.foreground5", SEMANTIC.warning);
    }

    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_background_is_the_void_black() {
        let colors = workbench_colors();
        assert_eq!(colors["editor.background"], "#0D1114");
        assert_eq!(colors["editor.foreground"], "#C8DCD9");
    }

    #[test]
    fn terminal_defines_all_sixteen_ansi_colors() {
        let colors = workbench_colors();
        let names = [
            "Black", "Red", "Green", "Yellow", "Blue", "Magenta", "Cyan", "White",
        ];
        for name in names {
            assert!(colors.contains_key(&format!("terminal.ansi{name}")));
            assert!(colors.contains_key(&format!("terminal.ansiBright{name}")));
        }
    }

    #[test]
    fn alpha_suffixes_produce_eight_digit_hex() {
        let colors = workbench_colors();
        assert_eq!(colors["editor.selectionBackground"], "#39C5BB25");
        assert_eq!(colors["editorGhostText.foreground"], "#00E5D4BB");
    }
}
