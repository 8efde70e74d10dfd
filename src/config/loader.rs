//! Configuration file loading with precedence handling.

use crate::model::FontDescriptor;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value parsed but is outside its valid range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Offending setting.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// An 8-bit RGB triple, written `[r, g, b]` in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for ratatui::style::Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        ratatui::style::Color::Rgb(r, g, b)
    }
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/dialog-style/style.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Font for default caption alignment and the reference glyph.
    #[serde(default)]
    pub base_font: Option<FontDescriptor>,

    /// Font for contacts-style captions.
    #[serde(default)]
    pub contacts_font: Option<FontDescriptor>,

    /// Minimum caption column width.
    #[serde(default)]
    pub caption_floor_width: Option<f32>,

    /// Glyph whose measured height sets the alignment height.
    #[serde(default)]
    pub reference_glyph: Option<String>,

    /// Identical-frame layout passes allowed before restyling is suppressed.
    #[serde(default)]
    pub repeat_threshold: Option<u8>,

    /// Contacts caption text color.
    #[serde(default)]
    pub contacts_caption_color: Option<Rgb>,

    /// Contacts caption column width before the first alignment run.
    #[serde(default)]
    pub contacts_column_width: Option<f32>,

    /// Gap between the contacts caption column and its separator.
    #[serde(default)]
    pub contacts_border_gap: Option<f32>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file and env vars. Strategies and
/// controllers take it at construction; nothing reads fonts from global state.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    /// Font for default caption alignment and the reference glyph.
    pub base_font: FontDescriptor,
    /// Font for contacts-style captions.
    pub contacts_font: FontDescriptor,
    /// Minimum caption column width.
    pub caption_floor_width: f32,
    /// Glyph whose measured height sets the alignment height.
    pub reference_glyph: String,
    /// Identical-frame layout passes allowed before restyling is suppressed.
    pub repeat_threshold: u8,
    /// Contacts caption text color.
    pub contacts_caption_color: Rgb,
    /// Contacts caption column width before the first alignment run.
    pub contacts_column_width: f32,
    /// Gap between the contacts caption column and its separator.
    pub contacts_border_gap: f32,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            base_font: FontDescriptor::bold_system(17.0),
            contacts_font: FontDescriptor::bold_system(12.0),
            caption_floor_width: 10.0,
            reference_glyph: "M".to_string(),
            repeat_threshold: 10,
            contacts_caption_color: Rgb(81, 102, 145),
            contacts_column_width: 50.0,
            contacts_border_gap: 5.0,
            log_file_path: default_log_path(),
        }
    }
}

impl StyleConfig {
    /// Run the whole precedence chain: defaults, config file, env vars.
    ///
    /// # Errors
    ///
    /// Returns error if a config file exists but cannot be read or parsed, or
    /// if the resolved values fail [`validate`].
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let file = load_config_with_precedence(config_path)?;
        let config = apply_env_overrides(merge_config(file));
        validate(&config)?;
        Ok(config)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/dialog-style/dialog-style.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("dialog-style").join("dialog-style.log")
    } else {
        PathBuf::from("dialog-style.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/dialog-style/style.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dialog-style").join("style.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument
/// 2. `DIALOG_STYLE_CONFIG` environment variable
/// 3. Default path `~/.config/dialog-style/style.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("DIALOG_STYLE_CONFIG") {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(env_path));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `DIALOG_STYLE_REPEAT_THRESHOLD`: anti-thrash threshold (ignored with a
///   warning if it does not parse)
/// - `DIALOG_STYLE_LOG`: log file path
pub fn apply_env_overrides(mut config: StyleConfig) -> StyleConfig {
    if let Ok(raw) = std::env::var("DIALOG_STYLE_REPEAT_THRESHOLD") {
        match raw.trim().parse::<u8>() {
            Ok(threshold) => config.repeat_threshold = threshold,
            Err(e) => warn!(value = %raw, error = %e, "Ignoring DIALOG_STYLE_REPEAT_THRESHOLD"),
        }
    }

    if let Ok(path) = std::env::var("DIALOG_STYLE_LOG") {
        if !path.is_empty() {
            config.log_file_path = PathBuf::from(path);
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> StyleConfig {
    let defaults = StyleConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    StyleConfig {
        base_font: config.base_font.unwrap_or(defaults.base_font),
        contacts_font: config.contacts_font.unwrap_or(defaults.contacts_font),
        caption_floor_width: config
            .caption_floor_width
            .unwrap_or(defaults.caption_floor_width),
        reference_glyph: config.reference_glyph.unwrap_or(defaults.reference_glyph),
        repeat_threshold: config.repeat_threshold.unwrap_or(defaults.repeat_threshold),
        contacts_caption_color: config
            .contacts_caption_color
            .unwrap_or(defaults.contacts_caption_color),
        contacts_column_width: config
            .contacts_column_width
            .unwrap_or(defaults.contacts_column_width),
        contacts_border_gap: config
            .contacts_border_gap
            .unwrap_or(defaults.contacts_border_gap),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Check value ranges a TOML schema cannot express.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] naming the first offending field.
pub fn validate(config: &StyleConfig) -> Result<(), ConfigError> {
    if config.repeat_threshold == 0 {
        return Err(ConfigError::InvalidValue {
            field: "repeat_threshold",
            reason: "must be at least 1".to_string(),
        });
    }
    if config.reference_glyph.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "reference_glyph",
            reason: "must not be empty".to_string(),
        });
    }
    for (field, value) in [
        ("caption_floor_width", config.caption_floor_width),
        ("contacts_column_width", config.contacts_column_width),
        ("contacts_border_gap", config.contacts_border_gap),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidValue {
                field,
                reason: format!("must be a non-negative number, got {value}"),
            });
        }
    }
    for (field, font) in [
        ("base_font", &config.base_font),
        ("contacts_font", &config.contacts_font),
    ] {
        if !font.size.is_finite() || font.size <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field,
                reason: format!("size must be positive, got {}", font.size),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
