use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::theme::Theme;

/// Generator configuration for persistence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub generator: GeneratorPreferences,
    pub audit: AuditPreferences,
    pub custom_colors: Option<CustomColorOverrides>,
}

/// Output preferences for theme generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorPreferences {
    pub out_dir: PathBuf,
    pub file_name: String,
    /// Embed the `_palette` documentation block in the emitted theme
    #[serde(default = "default_true")]
    pub include_palette_reference: bool,
}

fn default_true() -> bool {
    true
}

/// Defaults applied to readability audits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditPreferences {
    pub json_output: bool,
}

/// Optional overrides layered on top of the generated workbench colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomColorOverrides {
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub accent: Option<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorPreferences::default(),
            audit: AuditPreferences::default(),
            custom_colors: None,
        }
    }
}

impl Default for GeneratorPreferences {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("themes"),
            file_name: "Hatsune Miku Theme-color-theme.json".to_string(),
            include_palette_reference: true,
        }
    }
}

impl Default for AuditPreferences {
    fn default() -> Self {
        Self { json_output: false }
    }
}

impl ThemeConfig {
    /// Load configuration from file
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: ThemeConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_path = Self::config_file_path()?;

        // Create parent directories if they don't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Get the path to the configuration file
    fn config_file_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_dir = dirs::config_dir().ok_or("Unable to determine config directory")?;
        Ok(config_dir.join("miku-theme").join("config.toml"))
    }

    /// Reset to default configuration
    pub fn reset_to_default(&mut self) {
        *self = Self::default();
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), String> {
        if !self.generator.file_name.ends_with(".json") {
            return Err(format!(
                "Theme file name must end with .json: {}",
                self.generator.file_name
            ));
        }

        if let Some(custom_colors) = &self.custom_colors {
            if let Some(bg) = &custom_colors.background {
                Self::validate_color_string(bg)?;
            }
            if let Some(fg) = &custom_colors.foreground {
                Self::validate_color_string(fg)?;
            }
            if let Some(accent) = &custom_colors.accent {
                Self::validate_color_string(accent)?;
            }
        }

        Ok(())
    }

    /// Validate a color string (hex format)
    fn validate_color_string(color: &str) -> Result<(), String> {
        if !color.starts_with('#') || color.len() != 7 {
            return Err(format!("Invalid color format: {}. Expected #RRGGBB", color));
        }

        for c in color.chars().skip(1) {
            if !c.is_ascii_hexdigit() {
                return Err(format!("Invalid hex character in color: {}", color));
            }
        }

        Ok(())
    }

    /// Apply custom color overrides to an assembled theme
    pub fn apply_overrides(&self, theme: &mut Theme) {
        let Some(custom_colors) = &self.custom_colors else {
            return;
        };

        if let Some(bg) = &custom_colors.background {
            theme
                .colors
                .insert("editor.background".to_string(), bg.clone());
        }
        if let Some(fg) = &custom_colors.foreground {
            theme
                .colors
                .insert("editor.foreground".to_string(), fg.clone());
        }
        if let Some(accent) = &custom_colors.accent {
            theme
                .colors
                .insert("focusBorder".to_string(), accent.clone());
            theme
                .colors
                .insert("button.background".to_string(), accent.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(ThemeConfig::default().validate().is_ok());
    }

    #[test]
    fn bad_hex_override_is_rejected() {
        let config = ThemeConfig {
            custom_colors: Some(CustomColorOverrides {
                background: Some("0D1114".to_string()),
                foreground: None,
                accent: None,
            }),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_json_file_name_is_rejected() {
        let mut config = ThemeConfig::default();
        config.generator.file_name = "theme.toml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn overrides_replace_editor_colors() {
        let mut theme = Theme::hatsune_miku();
        let config = ThemeConfig {
            custom_colors: Some(CustomColorOverrides {
                background: Some("#000000".to_string()),
                foreground: None,
                accent: Some("#FF6B9D".to_string()),
            }),
            ..Default::default()
        };
        config.apply_overrides(&mut theme);
        assert_eq!(theme.colors["editor.background"], "#000000");
        assert_eq!(theme.colors["button.background"], "#FF6B9D");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = ThemeConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: ThemeConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.generator.file_name, config.generator.file_name);
        assert_eq!(back.audit.json_output, config.audit.json_output);
    }
}
