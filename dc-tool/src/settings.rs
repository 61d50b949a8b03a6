//! dctool settings

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ToolError;

/// How listings are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned columns
    #[default]
    Text,
    /// One JSON array
    Json,
}

/// Persistent settings, read from `settings.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
    /// Log filter used when `RUST_LOG` is unset
    #[serde(default)]
    pub log_filter: Option<String>,
    /// Print model numbers in hex
    #[serde(default = "default_true")]
    pub show_hex_models: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            log_filter: None,
            show_hex_models: true,
        }
    }
}

impl Settings {
    /// Platform config directory for dctool
    ///
    /// On Linux this is `$XDG_CONFIG_HOME/dctool` when set to an absolute
    /// path, otherwise `~/.config/dctool`.
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dctool"))
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.json"))
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        match Self::settings_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("No settings path, using defaults");
                Self::default()
            }
        }
    }

    /// Load settings from `path`; a missing or malformed file yields defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                debug!("Using default settings, {} unreadable: {}", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ToolError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save settings to the settings path, returning the file written
    pub fn save(&self) -> Result<PathBuf, ToolError> {
        let path = Self::settings_path().ok_or(ToolError::NoSettingsPath)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Write settings to `path`, creating its parent directory
    pub fn save_to(&self, path: &Path) -> Result<(), ToolError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ToolError::SettingsIo {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ToolError::SettingsIo {
            path: path.display().to_string(),
            source,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.show_hex_models);
    }

    #[test]
    fn test_parse_settings() {
        let settings =
            Settings::from_json(r#"{"format": "json", "log_filter": "dctool=debug"}"#).unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.log_filter.as_deref(), Some("dctool=debug"));
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(matches!(
            Settings::from_json(r#"{"format": "yaml"}"#),
            Err(ToolError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_garbage_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json {").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_save_creates_parent_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings {
            format: OutputFormat::Json,
            log_filter: Some("dc_descriptor=trace".to_string()),
            show_hex_models: false,
        };

        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_load_and_save_use_config_home() {
        let dir = tempfile::tempdir().unwrap();
        testing::with_config_home(dir.path(), || {
            let expected = dir.path().join("dctool").join("settings.json");
            assert_eq!(Settings::settings_path(), Some(expected.clone()));

            // Nothing written yet
            assert_eq!(Settings::load(), Settings::default());

            std::fs::create_dir_all(dir.path().join("dctool")).unwrap();
            std::fs::write(&expected, b"\x00\x01").unwrap();
            assert_eq!(Settings::load(), Settings::default());

            let settings = Settings {
                format: OutputFormat::Json,
                ..Settings::default()
            };
            assert_eq!(settings.save().unwrap(), expected);
            assert_eq!(Settings::load(), settings);
        });
    }
}
