//! Configuration management
//!
//! Keyboard configuration for the translation stack: the five optional XKB
//! names (rules, model, layout, variant, options), loadable from a TOML file.
//! Values left unset defer to `$XKB_DEFAULT_*` and system configuration at
//! keymap compile time, so an empty config follows the user's actual
//! keyboard setup.

use crate::input::layout::LayoutNames;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Keyboard keymap selection
    #[serde(default)]
    pub keyboard: KeyboardConfig,
}

/// Keymap selection names, XKB RMLVO convention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardConfig {
    /// Rule set (usually "evdev"); system default when absent.
    #[serde(default)]
    pub rules: Option<String>,

    /// Keyboard model (usually "pc105"); system default when absent.
    #[serde(default)]
    pub model: Option<String>,

    /// Layout name ("us", "de", ...); system default when absent.
    #[serde(default)]
    pub layout: Option<String>,

    /// Layout variant ("dvorak", "nodeadkeys", ...); none when absent.
    #[serde(default)]
    pub variant: Option<String>,

    /// Comma-separated XKB options; none when absent.
    #[serde(default)]
    pub options: Option<String>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

impl KeyboardConfig {
    /// The names handed to the layout engine.
    pub fn names(&self) -> LayoutNames {
        LayoutNames {
            rules: self.rules.clone(),
            model: self.model.clone(),
            layout: self.layout.clone(),
            variant: self.variant.clone(),
            options: self.options.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_means_system_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.keyboard, KeyboardConfig::default());
        assert_eq!(config.keyboard.names(), LayoutNames::default());
    }

    #[test]
    fn test_parse_full_keyboard_section() {
        let config: Config = toml::from_str(
            r#"
            [keyboard]
            rules = "evdev"
            model = "pc105"
            layout = "de"
            variant = "nodeadkeys"
            options = "ctrl:nocaps"
            "#,
        )
        .unwrap();

        let names = config.keyboard.names();
        assert_eq!(names.rules.as_deref(), Some("evdev"));
        assert_eq!(names.model.as_deref(), Some("pc105"));
        assert_eq!(names.layout.as_deref(), Some("de"));
        assert_eq!(names.variant.as_deref(), Some("nodeadkeys"));
        assert_eq!(names.options.as_deref(), Some("ctrl:nocaps"));
    }

    #[test]
    fn test_partial_section_leaves_rest_unset() {
        let config: Config = toml::from_str(
            r#"
            [keyboard]
            layout = "us"
            "#,
        )
        .unwrap();

        assert_eq!(config.keyboard.layout.as_deref(), Some("us"));
        assert_eq!(config.keyboard.rules, None);
        assert_eq!(config.keyboard.variant, None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[keyboard]\nlayout = \"fr\"").unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.keyboard.layout.as_deref(), Some("fr"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = Config::load("/nonexistent/keyboard-bridge.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "keyboard = 42").unwrap();

        assert!(Config::load(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_round_trip() {
        let config = Config {
            keyboard: KeyboardConfig {
                layout: Some("de".to_string()),
                options: Some("compose:ralt".to_string()),
                ..KeyboardConfig::default()
            },
        };

        let serialized = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.keyboard, config.keyboard);
    }
}
