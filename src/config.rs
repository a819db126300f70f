//! Configuration file support for picklist.
//!
//! A JSON document where every field is optional; missing fields fall back
//! to the built-in defaults, so `{}` is a valid configuration.

use std::path::Path;

use picklist_ui::{ClearColor, Theme};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CONTROL_WIDTH, DEFAULT_DATASET_SIZE, DEFAULT_LIST_HEIGHT, DEFAULT_OVERSCAN,
    DEFAULT_ROW_HEIGHT,
};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn theme(&self) -> Theme {
        match self {
            ThemeChoice::Dark => Theme::dark(),
            ThemeChoice::Light => Theme::light(),
        }
    }

    /// Window clear color matching the theme background
    pub fn clear_color(&self) -> ClearColor {
        match self {
            ThemeChoice::Dark => ClearColor::DARK_GRAY,
            ThemeChoice::Light => ClearColor::LIGHT_GRAY,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PicklistConfig {
    /// Number of generated items
    pub dataset_size: usize,
    /// Row height of the list in logical pixels
    pub row_height: f32,
    /// Rows rendered beyond each edge of the visible window
    pub overscan: usize,
    /// Maximum list height in logical pixels
    pub list_height: f32,
    /// Width of the dropdown control in logical pixels
    pub control_width: f32,
    pub theme: ThemeChoice,
    pub log_level: LogLevel,
}

impl Default for PicklistConfig {
    fn default() -> Self {
        Self {
            dataset_size: DEFAULT_DATASET_SIZE,
            row_height: DEFAULT_ROW_HEIGHT,
            overscan: DEFAULT_OVERSCAN,
            list_height: DEFAULT_LIST_HEIGHT,
            control_width: DEFAULT_CONTROL_WIDTH,
            theme: ThemeChoice::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl PicklistConfig {
    /// Check value ranges. An empty dataset is allowed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if u32::try_from(self.dataset_size).is_err() {
            return Err(ConfigError::Invalid {
                field: "dataset_size",
                reason: format!("must fit item ids (at most {}), got {}", u32::MAX, self.dataset_size),
            });
        }
        let positive = [
            ("row_height", self.row_height),
            ("list_height", self.list_height),
            ("control_width", self.control_width),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {}", value),
                });
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load the file named by `PICKLIST_CONFIG`, or defaults when it is unset.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(crate::constants::CONFIG_ENV_VAR) {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Read the JSON config embedded in the host page, or defaults when absent.
    #[cfg(target_arch = "wasm32")]
    pub fn from_page() -> Result<Self, ConfigError> {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(crate::constants::CONFIG_ELEMENT_ID))
            .and_then(|e| e.text_content());
        match text {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }

    /// Use `loaded`, or log why not and fall back to defaults.
    pub fn or_default(loaded: Result<Self, ConfigError>) -> Self {
        loaded.unwrap_or_else(|e| {
            log::warn!("Ignoring configuration: {}", e);
            Self::default()
        })
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// I/O error when reading config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A field holds an unusable value
    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = PicklistConfig::from_json("{}").unwrap();
        assert_eq!(config, PicklistConfig::default());
        assert_eq!(config.dataset_size, 100_000);
        assert_eq!(config.row_height, 36.0);
        assert_eq!(config.overscan, 5);
    }

    #[test]
    fn test_partial_override() {
        let config =
            PicklistConfig::from_json(r#"{"dataset_size": 42, "theme": "light", "log_level": "trace"}"#)
                .unwrap();
        assert_eq!(config.dataset_size, 42);
        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Trace);
        assert_eq!(config.list_height, DEFAULT_LIST_HEIGHT);
    }

    #[test]
    fn test_zero_row_height_rejected() {
        let err = PicklistConfig::from_json(r#"{"row_height": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "row_height", .. }));
    }

    #[test]
    fn test_zero_dataset_allowed() {
        let config = PicklistConfig::from_json(r#"{"dataset_size": 0}"#).unwrap();
        assert_eq!(config.dataset_size, 0);
    }

    #[test]
    fn test_oversized_dataset_rejected() {
        let config = PicklistConfig {
            dataset_size: usize::MAX,
            ..Default::default()
        };
        if usize::BITS > 32 {
            assert!(matches!(
                config.validate(),
                Err(ConfigError::Invalid { field: "dataset_size", .. })
            ));
        }
        let largest = PicklistConfig {
            dataset_size: u32::MAX as usize,
            ..Default::default()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn test_malformed_json() {
        let err = PicklistConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(err.to_string().starts_with("Failed to parse configuration"));
    }

    #[test]
    fn test_unknown_theme_rejected() {
        assert!(PicklistConfig::from_json(r#"{"theme": "sepia"}"#).is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = PicklistConfig {
            overscan: 2,
            control_width: 400.0,
            ..Default::default()
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert_eq!(PicklistConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_or_default_falls_back() {
        let config = PicklistConfig::or_default(PicklistConfig::from_json(r#"{"overscan": "x"}"#));
        assert_eq!(config, PicklistConfig::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PicklistConfig::load_from_file("/nonexistent/picklist.json").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
