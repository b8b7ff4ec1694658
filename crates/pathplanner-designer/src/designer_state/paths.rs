//! Path-level edits.

use super::DesignerState;
use crate::model::{Alliance, Side};

impl DesignerState {
    /// Appends an empty path and makes it current.
    pub fn add_path(&mut self, name: &str) -> usize {
        let index = self.project.add_path(name);
        self.current_path = index;
        self.selected_waypoint = None;
        self.record("Add path");
        index
    }

    /// Removes a path. The last remaining path cannot be removed.
    pub fn remove_path(&mut self, index: usize) -> bool {
        if self.project.paths.len() <= 1 || self.project.remove_path(index).is_none() {
            return false;
        }
        if self.current_path >= index && self.current_path > 0 {
            self.current_path -= 1;
        }
        self.selected_waypoint = None;
        self.record("Remove path");
        true
    }

    pub fn rename_path(&mut self, index: usize, name: &str) -> bool {
        let Some(path) = self.project.path_mut(index) else {
            return false;
        };
        if path.name == name {
            return false;
        }
        path.name = name.to_string();
        self.record("Rename path");
        true
    }

    /// Sets the current path's alliance.
    pub fn set_alliance(&mut self, alliance: Alliance) -> bool {
        let Some(path) = self.current_path_mut() else {
            return false;
        };
        if path.alliance == alliance {
            return false;
        }
        path.alliance = alliance;
        self.record("Change alliance");
        true
    }

    /// Sets the current path's side. Existing waypoints are kept even if
    /// they now fall outside it.
    pub fn set_side(&mut self, side: Side) -> bool {
        let Some(path) = self.current_path_mut() else {
            return false;
        };
        if path.side == side {
            return false;
        }
        path.side = side;
        self.record("Change side");
        true
    }

    /// Makes another path current. Not recorded in history.
    pub fn select_path(&mut self, index: usize) -> bool {
        if index >= self.project.paths.len() {
            return false;
        }
        if index != self.current_path {
            self.current_path = index;
            self.selected_waypoint = None;
        }
        true
    }
}
