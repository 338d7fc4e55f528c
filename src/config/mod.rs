//! Configuration management for MailPalette.
//!
//! This module handles locating and loading the user's TOML configuration,
//! including host URLs and user-defined commands.

mod settings;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

pub use settings::{Settings, UrlSettings, UserCommand};

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV_VAR: &str = "MAILPALETTE_CONFIG";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be determined.
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration file is not valid TOML for [`Settings`].
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed but contains invalid values.
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Resolve the configuration file path.
///
/// Uses `$MAILPALETTE_CONFIG` when set, otherwise
/// `<config_dir>/mailpalette/config.toml`.
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }

    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("mailpalette").join("config.toml"))
}

/// Load settings from the default location.
///
/// A missing file is not an error; defaults are returned instead.
pub fn load() -> Result<Settings> {
    load_from(&config_path()?)
}

/// Load settings from `path`, falling back to defaults if it does not exist.
pub fn load_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!(path = %path.display(), "No configuration file, using defaults");
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(path)?;
    let settings = Settings::from_toml(&contents)?;
    info!(
        path = %path.display(),
        commands = settings.commands.len(),
        "Loaded configuration"
    );
    Ok(settings)
}
