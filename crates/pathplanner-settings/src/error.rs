//! Settings errors.
//!
//! [`SettingsError`] covers reading and writing the config file;
//! [`ConfigError`] covers values the planner cannot run with.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read or write the configuration file.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The directory holding the config file could not be created.
    #[error("Cannot create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Config I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Cannot write TOML config: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// The file parsed but its contents were rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A configuration the planner refuses to use.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// File extension other than `.json` or `.toml`.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("Value out of range for '{key}': {value}")]
    ValueOutOfRange { key: String, value: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;

pub type ConfigResult<T> = Result<T, ConfigError>;
