//! Undo/redo operations for designer state.

use super::DesignerState;
use crate::history::{HistoryStatus, ObserverId};
use crate::model::Project;

impl DesignerState {
    /// Records the current project as a new history entry.
    pub(crate) fn record(&mut self, description: &str) {
        self.history.save_state(&self.project, description);
        self.is_modified = true;
    }

    /// Drops all history and seeds it with the current project.
    pub(crate) fn reset_history(&mut self, description: &str) {
        self.history.clear();
        self.history.save_state(&self.project, description);
    }

    /// Reverts the last edit. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(project) => {
                self.restore(project);
                true
            }
            None => false,
        }
    }

    /// Re-applies the last undone edit.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(project) => {
                self.restore(project);
                true
            }
            None => false,
        }
    }

    /// True when there is an edit to undo.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// True when there is an undone edit to reapply.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Label of the edit [`DesignerState::undo`] would revert.
    pub fn undo_description(&self) -> Option<&str> {
        self.history.undo_description()
    }

    /// Label of the edit [`DesignerState::redo`] would reapply.
    pub fn redo_description(&self) -> Option<&str> {
        self.history.redo_description()
    }

    pub fn history_status(&self) -> HistoryStatus {
        self.history.status()
    }

    /// Registers a callback for history changes (e.g. to refresh undo buttons).
    pub fn on_history_change<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(&HistoryStatus) -> anyhow::Result<()> + Send + 'static,
    {
        self.history.on_change(callback)
    }

    /// Unregisters an observer. Returns false for an unknown id.
    pub fn remove_history_observer(&mut self, id: ObserverId) -> bool {
        self.history.remove_observer(id)
    }

    /// Installs a snapshot and fixes up the selection to stay in range.
    fn restore(&mut self, project: Project) {
        self.project = project;
        if self.current_path >= self.project.paths.len() {
            self.current_path = self.project.paths.len().saturating_sub(1);
        }
        let len = self.current_path().map_or(0, |p| p.len());
        if self.selected_waypoint.is_some_and(|i| i >= len) {
            self.selected_waypoint = None;
        }
        self.is_modified = true;
    }
}
