//! Season configuration and command library loading.
//!
//! Layout under the base directory:
//!
//! ```text
//! <base>/command_library/<category>.json
//! <base>/seasons/<season>/config.json
//! ```
//!
//! A season config pulls in whole library categories, then overrides,
//! adds commands and defines sequences on top of them.

use pathplanner_core::SeasonError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::commands::{Command, CommandOverride, CommandRegistry, CommandSequence};

/// Contents of `seasons/<season>/config.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonConfig {
    /// Display name of the season.
    pub name: Option<String>,
    /// Library categories to load, in order.
    pub include_commands_from: Vec<String>,
    pub command_overrides: BTreeMap<String, CommandOverride>,
    pub custom_commands: Vec<Command>,
    pub command_sequences: Vec<CommandSequence>,
}

/// Contents of `command_library/<category>.json`.
#[derive(Debug, Clone, Default, Deserialize)]
struct CategoryFile {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    commands: Vec<Command>,
}

/// Reads season configs and the command library from a base directory.
#[derive(Debug, Clone)]
pub struct SeasonLoader {
    base_path: PathBuf,
}

impl SeasonLoader {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn command_library_path(&self) -> PathBuf {
        self.base_path.join("command_library")
    }

    pub fn seasons_path(&self) -> PathBuf {
        self.base_path.join("seasons")
    }

    fn config_path(&self, season: &str) -> PathBuf {
        self.seasons_path().join(season).join("config.json")
    }

    /// Parses a season's config file.
    pub fn read_config(&self, season: &str) -> Result<SeasonConfig, SeasonError> {
        let path = self.config_path(season);
        if !path.exists() {
            return Err(SeasonError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let text = fs::read_to_string(&path)?;
        serde_json::from_str(&text).map_err(|e| SeasonError::Malformed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Builds the registry for a season.
    ///
    /// A missing or malformed category file is skipped with a warning; a
    /// missing or malformed season config is an error.
    pub fn load_season(&self, season: &str) -> Result<CommandRegistry, SeasonError> {
        let config = self.read_config(season)?;
        let mut registry = CommandRegistry::new();

        for category in &config.include_commands_from {
            if let Err(e) = self.load_category(category, &mut registry) {
                tracing::warn!(season, "Skipping command category {}: {}", category, e);
            }
        }

        for (id, overrides) in &config.command_overrides {
            if !registry.apply_override(id, overrides) {
                tracing::warn!(season, command = %id, "Override for unknown command ignored");
            }
        }

        for cmd in config.custom_commands {
            registry.insert(cmd);
        }
        for seq in config.command_sequences {
            registry.insert_sequence(seq);
        }

        tracing::info!(
            season,
            commands = registry.len(),
            sequences = registry.sequences().count(),
            "Season loaded"
        );
        Ok(registry)
    }

    /// Like [`SeasonLoader::load_season`], but falls back to the built-in
    /// command set when the season cannot be loaded.
    pub fn load_season_or_default(&self, season: &str) -> CommandRegistry {
        match self.load_season(season) {
            Ok(registry) => registry,
            Err(e) => {
                tracing::warn!(season, "{}; using default commands", e);
                CommandRegistry::with_defaults()
            }
        }
    }

    /// Loads one library category into `registry`, returning how many
    /// commands it added. A missing file adds nothing.
    pub fn load_category(
        &self,
        category: &str,
        registry: &mut CommandRegistry,
    ) -> Result<usize, SeasonError> {
        let path = self.command_library_path().join(format!("{}.json", category));
        if !path.exists() {
            tracing::warn!("Command category not found: {}", path.display());
            return Ok(0);
        }

        let text = fs::read_to_string(&path)?;
        let file: CategoryFile =
            serde_json::from_str(&text).map_err(|e| SeasonError::Malformed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let category_name = file.category.unwrap_or_else(|| category.to_string());
        let count = file.commands.len();
        for mut cmd in file.commands {
            cmd.category = category_name.clone();
            registry.insert(cmd);
        }
        tracing::debug!(category = %category_name, count, "Command category loaded");
        Ok(count)
    }

    /// Season directories that contain a `config.json`, sorted.
    pub fn list_seasons(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.seasons_path()) else {
            return Vec::new();
        };
        let mut seasons: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().join("config.json").is_file())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .collect();
        seasons.sort();
        seasons
    }
}
