//! Theme file output.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::palette::{
    ACCENTS, APPEND, BLACKS, CYANS, FOREGROUNDS, GREYS, HOLOGRAM, MAGICAL_MIRAI, MIKU_EXPO,
    MIKU_NT, PINKS, PROJECT_DIVA, PROJECT_SEKAI, RACING_MIKU, SEKAI, SEMANTIC, SNOW_MIKU, TEALS,
    V4X_VOICE, VERSIONS,
};
use crate::theme::Theme;

/// Palette documentation block carried in the emitted theme under
/// `_palette`. VS Code ignores underscore keys; the block exists so
/// anyone reading the file can trace a color back to its Miku.
pub fn palette_reference() -> serde_json::Value {
    json!({
        "_description": "Hatsune Miku Theme - All-Miku Synthesis (V2 → SEKAI)",

        "_versionMapping": {
            "identity": { "version": "V2 Classic", "color": "#39C5BB", "reason": "THE canonical Miku teal since 2007" },
            "stage": { "version": "SEKAI", "color": "#33CCBB", "reason": "Stage performance, multi-cursor" },
            "functions": { "version": "NT", "color": "#00BCD4", "reason": "Modern tech voice" },
            "types": { "version": "Append Light", "color": "#B2EBE7", "reason": "Airy structure" },
            "hover": { "version": "Append Sweet", "color": "#5FCEC8", "reason": "Warm, inviting" },
            "focus": { "version": "V4X Soft", "color": "#6DD4CD", "reason": "Gentle attention" },
            "active": { "version": "V4X Hard", "color": "#2B9E96", "reason": "Pressed/clicked" },
        },
        "_frequencyVisualizer": {
            "_description": "Indent guides as audio spectrum across versions",
            "bass": { "version": "Append Dark", "color": "#1E8A82", "level": 1 },
            "low": { "version": "Append Solid", "color": "#2AA69E", "level": 2 },
            "mid": { "version": "V2 Classic", "color": "#39C5BB", "level": 3 },
            "high": { "version": "NT", "color": "#3ED1C8", "level": 4 },
            "peak": { "version": "Append Vivid", "color": "#00E5D4", "level": 5 },
            "ultra": { "version": "Append Light", "color": "#A8EBE6", "level": 6 },
        },
        "_sekaiReference": {
            "imageColor": SEKAI.image_color,
            "classroomPinkHighlight": SEKAI.classroom_pink,
            "emptyHeterochromia": { "turquoise": SEKAI.hetero_turquoise, "pink": SEKAI.hetero_pink },
            "usage": "Secondary cursor, stage accents - NOT main identity",
        },

        "_versions": {
            "v1v2": VERSIONS.v1v2, "v3": VERSIONS.v3, "v4x": VERSIONS.v4x,
            "nt": VERSIONS.nt, "nt2": VERSIONS.nt2, "sp": VERSIONS.sp, "v6ai": VERSIONS.v6ai,
        },
        "_append": {
            "dark": APPEND.dark, "soft": APPEND.soft, "light": APPEND.light,
            "sweet": APPEND.sweet, "vivid": APPEND.vivid, "solid": APPEND.solid,
        },
        "_v4xVoice": {
            "original": V4X_VOICE.original, "hard": V4X_VOICE.hard, "soft": V4X_VOICE.soft,
            "dark": V4X_VOICE.dark, "sweet": V4X_VOICE.sweet, "solid": V4X_VOICE.solid,
        },

        "_snowMiku": {
            "2011": { "winterBlue": SNOW_MIKU.y2011.winter_blue, "mittens": SNOW_MIKU.y2011.mittens },
            "2021": { "glowCyan": SNOW_MIKU.y2021.glow_cyan, "neonPink": SNOW_MIKU.y2021.neon_pink },
        },
        "_racingMiku": {
            "2010": { "raceOrange": RACING_MIKU.y2010.race_orange },
            "2014": { "limeAccent": RACING_MIKU.y2014.lime_accent },
            "2019": { "neonCyan": RACING_MIKU.y2019.neon_cyan, "neonPink": RACING_MIKU.y2019.neon_pink },
        },
        "_magicalMirai": {
            "2014": { "vibrantPink": MAGICAL_MIRAI.y2014.vibrant_pink },
            "2017": { "celebrationGold": MAGICAL_MIRAI.y2017.celebration_gold },
            "2025": {
                "resonanceCyan": MAGICAL_MIRAI.y2025.resonance_cyan,
                "harmonyPink": MAGICAL_MIRAI.y2025.harmony_pink,
                "connectionPurple": MAGICAL_MIRAI.y2025.connection_purple,
            },
        },
        "_mikuExpo": {
            "2025": { "asiaCyan": MIKU_EXPO.y2025.asia_cyan },
            "2026": { "neonPink": MIKU_EXPO.y2026.neon_pink, "skyBlue": MIKU_EXPO.y2026.sky_blue },
        },
        "_projectDiva": { "space": { "cosmosBlue": PROJECT_DIVA.space.cosmos_blue } },
        "_projectSekai": {
            "units": { "moreMoreJump": PROJECT_SEKAI.units.more_more_jump },
            "leoNeed": { "ichika": PROJECT_SEKAI.leo_need.ichika, "saki": PROJECT_SEKAI.leo_need.saki },
            "moreMoreJump": { "minori": PROJECT_SEKAI.more_more_jump.minori },
            "vividBadSquad": { "an": PROJECT_SEKAI.vivid_bad_squad.an },
            "wonderlandsShowtime": {
                "tsukasa": PROJECT_SEKAI.wonderlands_showtime.tsukasa,
                "emu": PROJECT_SEKAI.wonderlands_showtime.emu,
                "nene": PROJECT_SEKAI.wonderlands_showtime.nene,
            },
            "nightcord": { "kanade": PROJECT_SEKAI.nightcord.kanade },
        },
        "_mikuNT": { "ui": { "ntCyan": MIKU_NT.ui.nt_cyan } },

        "_teals": {
            "neon": TEALS.neon, "bright": TEALS.bright, "classic": TEALS.classic,
            "stage": TEALS.stage, "ocean": TEALS.ocean, "deep": TEALS.deep,
            "tint": TEALS.tint, "mist": TEALS.mist,
        },
        "_pinks": {
            "sekai": PINKS.sekai, "hot": PINKS.hot, "accessory": PINKS.accessory,
            "soft": PINKS.soft, "blush": PINKS.blush, "pale": PINKS.pale,
        },
        "_cyans": {
            "ice": CYANS.ice, "hologram": CYANS.hologram,
            "electric": CYANS.electric, "deep": CYANS.deep,
        },
        "_blacks": {
            "void": BLACKS.void, "sleeve": BLACKS.sleeve, "outfit": BLACKS.outfit,
            "base": BLACKS.base, "raised": BLACKS.raised, "lifted": BLACKS.lifted,
            "hover": BLACKS.hover,
        },
        "_greys": {
            "charcoal": GREYS.charcoal, "gunmetal": GREYS.gunmetal, "slate": GREYS.slate,
            "steel": GREYS.steel, "silver": GREYS.silver, "platinum": GREYS.platinum,
        },
        "_accents": {
            "amber": ACCENTS.amber, "gold": ACCENTS.gold, "orange": ACCENTS.orange,
            "coral": ACCENTS.coral, "coralGlow": ACCENTS.coral_glow, "green": ACCENTS.green,
            "greenBright": ACCENTS.green_bright, "blue": ACCENTS.blue, "purple": ACCENTS.purple,
        },
        "_foregrounds": {
            "bright": FOREGROUNDS.bright, "primary": FOREGROUNDS.primary,
            "secondary": FOREGROUNDS.secondary, "muted": FOREGROUNDS.muted,
            "comment": FOREGROUNDS.comment, "docComment": FOREGROUNDS.doc_comment,
            "ghost": FOREGROUNDS.ghost,
        },
        "_semantic": {
            "success": SEMANTIC.success, "warning": SEMANTIC.warning,
            "error": SEMANTIC.error, "info": SEMANTIC.info,
        },
        "_hologram": {
            "cyan": HOLOGRAM.cyan, "ice": HOLOGRAM.ice, "pink": HOLOGRAM.pink,
            "purple": HOLOGRAM.purple, "flicker": HOLOGRAM.flicker,
        },
    })
}

/// Serialize a theme with tab indentation, matching the formatting VS Code
/// extensions ship their theme JSON in.
pub fn to_theme_json(theme: &Theme) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    theme
        .serialize(&mut serializer)
        .context("failed to serialize theme")?;
    let json = String::from_utf8(buf).context("theme JSON was not valid UTF-8")?;
    Ok(json)
}

/// Write the theme JSON to `output_path`, creating parent directories as
/// needed, and print a short generation summary.
pub fn write_theme(theme: &Theme, output_path: &Path) -> Result<()> {
    let json = to_theme_json(theme)?;
    debug!(bytes = json.len(), path = %output_path.display(), "writing theme file");

    if let Some(dir) = output_path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    }

    fs::write(output_path, &json)
        .with_context(|| format!("failed to write theme to {}", output_path.display()))?;

    println!("✓ Theme generated: {}", output_path.display());
    println!("  - Workbench colors: {}", theme.colors.len());
    println!("  - Token color rules: {}", theme.token_colors.len());
    println!(
        "  - Semantic token rules: {}",
        theme.semantic_token_colors.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_is_tab_indented_and_schema_first() {
        let theme = Theme::hatsune_miku();
        let json = to_theme_json(&theme).unwrap();
        assert!(json.starts_with("{\n\t\"$schema\": \"vscode://schemas/color-theme\""));
        assert!(json.contains("\n\t\"colors\": {"));
        assert!(json.contains("\n\t\"tokenColors\": ["));
    }

    #[test]
    fn palette_reference_keeps_the_identity_teal() {
        let block = palette_reference();
        assert_eq!(block["_versionMapping"]["identity"]["color"], "#39C5BB");
        assert_eq!(block["_append"]["sweet"], "#5FCEC8");
        assert_eq!(block["_frequencyVisualizer"]["ultra"]["level"], 6);
    }

    #[test]
    fn palette_block_only_appears_when_requested() {
        let mut theme = Theme::hatsune_miku();
        assert!(!to_theme_json(&theme).unwrap().contains("\"_palette\""));

        theme.palette_reference = Some(palette_reference());
        let json = to_theme_json(&theme).unwrap();
        assert!(json.contains("\"_palette\""));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["_palette"]["_mikuNT"]["ui"]["ntCyan"], "#00BCD4");
    }

    #[test]
    fn written_file_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("themes").join("miku.json");
        let theme = Theme::hatsune_miku();
        write_theme(&theme, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["name"], "Hatsune Miku Theme");
        assert_eq!(value["type"], "dark");
        assert_eq!(value["colors"]["editor.background"], "#0D1114");
    }
}
