//! File I/O operations (new, save, load) for designer state.

use anyhow::Context;
use std::path::Path as FsPath;

use super::DesignerState;
use crate::model::Project;
use crate::serialization::{load_project_file, save_project};

impl DesignerState {
    /// Replaces the project with a fresh one holding a single "New Path".
    pub fn new_project(&mut self, season: &str) {
        self.install(Project::with_default_path(season), None, "New project");
        self.current_file_path = None;
    }

    /// Save project to file.
    pub fn save_to_file(&mut self, path: impl AsRef<FsPath>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = save_project(&self.project, path, self.created.as_deref())
            .with_context(|| format!("Failed to save project to {}", path.display()))?;

        self.created = file.created;
        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Load project from file. History restarts from the loaded state.
    pub fn load_from_file(&mut self, path: impl AsRef<FsPath>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = load_project_file(path)
            .with_context(|| format!("Failed to load project from {}", path.display()))?;
        let mut project = file
            .to_project()
            .with_context(|| format!("Invalid project data in {}", path.display()))?;

        if project.paths.is_empty() {
            project.add_path("New Path");
        }

        self.install(project, file.created, "Open project");
        self.current_file_path = Some(path.to_path_buf());
        Ok(())
    }

    fn install(&mut self, project: Project, created: Option<String>, description: &str) {
        self.project = project;
        self.created = created;
        self.current_path = 0;
        self.selected_waypoint = None;
        self.is_modified = false;
        self.reload_season_commands();
        self.reset_history(description);
    }
}
