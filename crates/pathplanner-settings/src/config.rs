//! Application configuration.
//!
//! Stored as TOML (default) or JSON in the platform config directory.
//! Every section is `#[serde(default)]`, so a partial file fills the rest
//! from defaults.

use pathplanner_core::constants::{
    DEFAULT_CANVAS_SIZE, DEFAULT_MAX_HISTORY, DEFAULT_SEASON, HIT_RADIUS,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Maximum number of entries kept in the recent files list.
pub const MAX_RECENT_FILES: usize = 10;

/// Highest supported number of decimal places in generated code.
pub const MAX_PRECISION: usize = 6;

/// Editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSettings {
    /// Square canvas size in pixels
    pub canvas_size: f64,
    /// Number of undo snapshots kept
    pub max_history: usize,
    /// Season for new projects
    pub default_season: String,
    /// Directory holding `seasons/` and `command_library/`
    pub base_path: Option<PathBuf>,
    /// Click tolerance around waypoints in pixels
    pub hit_radius: f64,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            max_history: DEFAULT_MAX_HISTORY,
            default_season: DEFAULT_SEASON.to_string(),
            base_path: None,
            hit_radius: HIT_RADIUS,
        }
    }
}

/// Code generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenSettings {
    /// Spaces per indentation level
    pub indent: usize,
    /// Decimal places for numbers
    pub precision: usize,
    /// Wrap output in a function
    pub wrap_in_function: bool,
    /// Emit header and per-waypoint comments
    pub include_comments: bool,
}

impl Default for CodegenSettings {
    fn default() -> Self {
        Self {
            indent: 4,
            precision: 2,
            wrap_in_function: true,
            include_comments: true,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Recently opened project files, most recent first
    pub recent_files: Vec<PathBuf>,
    /// Editor settings
    pub planner: PlannerSettings,
    /// Code generation settings
    pub codegen: CodegenSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/pathplanner/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pathplanner").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating the parent directory.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "Config saved");
        Ok(())
    }

    /// Loads `path` (or the default path). A missing file gives defaults
    /// silently; an unreadable or invalid one gives defaults with a warning.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), "Ignoring config file: {}", e);
                Self::default()
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let planner = &self.planner;
        if !planner.canvas_size.is_finite() || planner.canvas_size <= 0.0 {
            return Err(out_of_range("planner.canvas_size", planner.canvas_size));
        }
        if planner.max_history == 0 {
            return Err(out_of_range("planner.max_history", planner.max_history));
        }
        if !planner.hit_radius.is_finite() || planner.hit_radius < 0.0 {
            return Err(out_of_range("planner.hit_radius", planner.hit_radius));
        }
        if self.codegen.precision > MAX_PRECISION {
            return Err(out_of_range("codegen.precision", self.codegen.precision));
        }
        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|f| f != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}
