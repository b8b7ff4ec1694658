//! Designer state manager for shell integration.
//!
//! Holds the open project, the current selection and the undo history,
//! and exposes every user-level edit as one method. Each successful edit
//! records exactly one history entry.
//!
//! This module is split into submodules:
//! - `history`: Undo/redo and snapshot restore
//! - `waypoints`: Waypoint placement, properties, commands and hit testing
//! - `paths`: Path add/remove/rename and path properties
//! - `code`: Code generation for the current path
//! - `file_io`: New/save/load

mod code;
mod file_io;
mod history;
mod paths;
mod waypoints;

use pathplanner_core::constants::{DEFAULT_MAX_HISTORY, DEFAULT_SEASON, HIT_RADIUS};
use pathplanner_core::CoordinateSystem;
use std::path::PathBuf;

use crate::codegen::CodeGenOptions;
use crate::commands::CommandRegistry;
use crate::history::UndoManager;
use crate::model::{Path, Project};
use crate::season::SeasonLoader;

/// Designer state for shell integration
#[derive(Debug)]
pub struct DesignerState {
    pub(crate) project: Project,
    pub(crate) current_path: usize,
    pub(crate) selected_waypoint: Option<usize>,
    pub(crate) history: UndoManager<Project>,
    pub(crate) created: Option<String>,
    /// Field/canvas mapping used for canvas-space input.
    pub coords: CoordinateSystem,
    /// Commands available for the project's season.
    pub commands: CommandRegistry,
    /// Source of season commands; reloaded whenever a project is installed.
    pub(crate) season_loader: Option<SeasonLoader>,
    pub codegen_options: CodeGenOptions,
    /// Hit-test tolerance in pixels.
    pub hit_radius: f64,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
}

impl DesignerState {
    /// Creates a state holding a fresh default-season project.
    pub fn new() -> Self {
        Self::with_max_history(DEFAULT_MAX_HISTORY)
    }

    /// Like [`DesignerState::new`] with a custom undo depth.
    pub fn with_max_history(max_history: usize) -> Self {
        let mut state = Self {
            project: Project::with_default_path(DEFAULT_SEASON),
            current_path: 0,
            selected_waypoint: None,
            history: UndoManager::new(max_history),
            created: None,
            coords: CoordinateSystem::default(),
            commands: CommandRegistry::with_defaults(),
            season_loader: None,
            codegen_options: CodeGenOptions::default(),
            hit_radius: HIT_RADIUS,
            current_file_path: None,
            is_modified: false,
        };
        state.reset_history("New project");
        state
    }

    /// The open project.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Season of the open project.
    pub fn season(&self) -> &str {
        &self.project.season
    }

    /// Index of the path being edited.
    pub fn current_path_index(&self) -> usize {
        self.current_path
    }

    /// The path being edited.
    pub fn current_path(&self) -> Option<&Path> {
        self.project.path(self.current_path)
    }

    pub(crate) fn current_path_mut(&mut self) -> Option<&mut Path> {
        self.project.path_mut(self.current_path)
    }

    /// Selected waypoint index in the current path.
    pub fn selected_waypoint(&self) -> Option<usize> {
        self.selected_waypoint
    }

    /// Selects a waypoint of the current path; `None` clears the selection.
    /// Returns false for an out-of-range index.
    pub fn select_waypoint(&mut self, index: Option<usize>) -> bool {
        match index {
            Some(i) if self.current_path().is_none_or(|p| i >= p.len()) => false,
            _ => {
                self.selected_waypoint = index;
                true
            }
        }
    }

    /// Uses `loader` for season commands from now on and loads the current
    /// project's season, falling back to the built-in set.
    pub fn set_season_loader(&mut self, loader: SeasonLoader) {
        self.season_loader = Some(loader);
        self.reload_season_commands();
    }

    /// The loader set by [`DesignerState::set_season_loader`].
    pub fn season_loader(&self) -> Option<&SeasonLoader> {
        self.season_loader.as_ref()
    }

    /// Without a loader the registry is left as is.
    pub(crate) fn reload_season_commands(&mut self) {
        if let Some(loader) = &self.season_loader {
            self.commands = loader.load_season_or_default(&self.project.season);
        }
    }

    /// File name for window titles: the file stem or "Untitled", with a
    /// trailing `*` while there are unsaved changes.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_deref()
            .and_then(|p| p.file_stem())
            .and_then(|s| s.to_str())
            .unwrap_or("Untitled");
        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
