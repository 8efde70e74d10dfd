//! Configuration module.
//!
//! Fonts, thresholds and colors are resolved once (defaults, then
//! `style.toml`, then environment) and handed to strategies and controllers
//! at construction.

pub mod loader;

pub use loader::{
    apply_env_overrides, default_config_path, default_log_path, load_config_file,
    load_config_with_precedence, merge_config, validate, ConfigError, ConfigFile, Rgb,
    StyleConfig,
};
