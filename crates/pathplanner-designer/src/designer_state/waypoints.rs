//! Waypoint placement, property and command edits.

use pathplanner_core::{clamp_to_field, Point};

use super::DesignerState;
use crate::model::{Heading, MotionType, Waypoint};

impl DesignerState {
    /// Adds a waypoint to the current path and selects it. The position is
    /// clamped to the field.
    ///
    /// Returns `None` for a non-finite position or one outside the path's side.
    pub fn add_waypoint(&mut self, x: f64, y: f64) -> Option<usize> {
        if !x.is_finite() || !y.is_finite() {
            tracing::warn!(x, y, "Rejected non-finite waypoint position");
            return None;
        }
        let (x, y) = clamp_to_field(x, y);
        let path = self.current_path_mut()?;
        if !path.is_valid_position(x, y) {
            tracing::debug!(x, y, side = %path.side, "Waypoint rejected by side restriction");
            return None;
        }
        let index = path.add_waypoint(x, y);
        self.selected_waypoint = Some(index);
        self.record("Add waypoint");
        Some(index)
    }

    /// Adds a waypoint at a canvas position.
    pub fn add_waypoint_at_canvas(&mut self, px: f64, py: f64) -> Option<usize> {
        let (x, y) = self.coords.canvas_to_field(px, py);
        self.add_waypoint(x, y)
    }

    /// Moves a waypoint, clamping to the field. Rejected when non-finite or
    /// outside the side.
    pub fn move_waypoint(&mut self, index: usize, x: f64, y: f64) -> bool {
        if !x.is_finite() || !y.is_finite() {
            tracing::warn!(x, y, "Rejected non-finite waypoint position");
            return false;
        }
        let (x, y) = clamp_to_field(x, y);
        let Some(path) = self.current_path_mut() else {
            return false;
        };
        if !path.is_valid_position(x, y) {
            return false;
        }
        let Some(wp) = path.waypoint_mut(index) else {
            return false;
        };
        wp.set_position(x, y);
        self.record("Move waypoint");
        true
    }

    /// Moves a waypoint to a canvas position.
    pub fn move_waypoint_to_canvas(&mut self, index: usize, px: f64, py: f64) -> bool {
        let (x, y) = self.coords.canvas_to_field(px, py);
        self.move_waypoint(index, x, y)
    }

    pub fn delete_waypoint(&mut self, index: usize) -> bool {
        let Some(path) = self.current_path_mut() else {
            return false;
        };
        if path.remove_waypoint(index).is_none() {
            return false;
        }
        self.selected_waypoint = match self.selected_waypoint {
            Some(sel) if sel == index => None,
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };
        self.record("Delete waypoint");
        true
    }

    /// Removes every waypoint of the current path.
    pub fn clear_waypoints(&mut self) -> bool {
        let Some(path) = self.current_path_mut() else {
            return false;
        };
        if path.is_empty() {
            return false;
        }
        path.clear_waypoints();
        self.selected_waypoint = None;
        self.record("Clear waypoints");
        true
    }

    fn edit_waypoint(
        &mut self,
        index: usize,
        description: &str,
        edit: impl FnOnce(&mut Waypoint),
    ) -> bool {
        let Some(wp) = self
            .current_path_mut()
            .and_then(|path| path.waypoint_mut(index))
        else {
            return false;
        };
        edit(wp);
        self.record(description);
        true
    }

    pub fn set_heading(&mut self, index: usize, heading: Heading) -> bool {
        self.edit_waypoint(index, "Change heading", |wp| wp.heading = heading)
    }

    /// Changes a motion type. START cannot be assigned or removed by hand.
    pub fn set_motion_type(&mut self, index: usize, motion_type: MotionType) -> bool {
        let Some(path) = self.current_path_mut() else {
            return false;
        };
        let unchanged = path
            .waypoint(index)
            .is_some_and(|wp| wp.motion_type == motion_type);
        if unchanged || !path.set_motion_type(index, motion_type) {
            return false;
        }
        self.record("Change motion type");
        true
    }

    pub fn set_reverse(&mut self, index: usize, reverse: bool) -> bool {
        self.edit_waypoint(index, "Toggle reverse", |wp| wp.reverse = reverse)
    }

    pub fn set_intaking(&mut self, index: usize, intaking: bool) -> bool {
        self.edit_waypoint(index, "Toggle intake", |wp| wp.intaking = intaking)
    }

    pub fn set_conveyor(&mut self, index: usize, conveyor: bool) -> bool {
        self.edit_waypoint(index, "Toggle conveyor", |wp| wp.conveyor = conveyor)
    }

    /// Appends a command to a waypoint. Unknown ids are accepted; code
    /// generation marks them.
    pub fn add_command(&mut self, index: usize, command_id: &str) -> bool {
        if !self.commands.contains(command_id) {
            tracing::warn!(command = command_id, "Adding command not in the registry");
        }
        self.edit_waypoint(index, "Add command", |wp| wp.add_command(command_id))
    }

    pub fn remove_command(&mut self, index: usize, command_index: usize) -> bool {
        let removed = self
            .current_path_mut()
            .and_then(|path| path.waypoint_mut(index))
            .and_then(|wp| wp.remove_command_at(command_index));
        if removed.is_none() {
            return false;
        }
        self.record("Remove command");
        true
    }

    pub fn move_command(&mut self, index: usize, from: usize, to: usize) -> bool {
        let moved = self
            .current_path_mut()
            .and_then(|path| path.waypoint_mut(index))
            .is_some_and(|wp| from != to && wp.move_command(from, to));
        if !moved {
            return false;
        }
        self.record("Reorder commands");
        true
    }

    /// Index of the waypoint of the current path nearest to a canvas
    /// position, if within the hit radius. Later waypoints win ties.
    pub fn find_waypoint_at(&self, px: f64, py: f64) -> Option<usize> {
        let path = self.current_path()?;
        let target = Point::new(px, py);
        let mut best: Option<(usize, f64)> = None;

        for (i, wp) in path.waypoints().iter().enumerate().rev() {
            let (cx, cy) = self.coords.field_point_to_canvas(&wp.position());
            let distance = Point::new(cx, cy).distance_to(&target);
            if distance > self.hit_radius {
                continue;
            }
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((i, distance));
            }
        }
        best.map(|(i, _)| i)
    }
}
