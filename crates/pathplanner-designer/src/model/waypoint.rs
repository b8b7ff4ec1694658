use pathplanner_core::Point;

use super::{Heading, MotionType};

/// A single pose/action anchor in an autonomous path.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    /// Position in inches, field frame.
    pub x: f64,
    pub y: f64,
    pub heading: Heading,
    pub motion_type: MotionType,
    /// Drive backwards into this waypoint.
    pub reverse: bool,
    /// Run the intake while moving.
    pub intaking: bool,
    /// Run the conveyor while moving.
    pub conveyor: bool,
    /// Command ids run after the motion, in order.
    pub commands_after: Vec<String>,
}

impl Waypoint {
    /// Creates a waypoint with automatic heading and no flags or commands.
    pub fn new(x: f64, y: f64, motion_type: MotionType) -> Self {
        Self {
            x,
            y,
            heading: Heading::Auto,
            motion_type,
            reverse: false,
            intaking: false,
            conveyor: false,
            commands_after: Vec::new(),
        }
    }

    /// Position in field inches.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Moves the waypoint without any clamping or side check.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Appends a command id.
    pub fn add_command(&mut self, id: impl Into<String>) {
        self.commands_after.push(id.into());
    }

    /// Inserts a command id; an index past the end appends.
    pub fn insert_command(&mut self, index: usize, id: impl Into<String>) {
        let index = index.min(self.commands_after.len());
        self.commands_after.insert(index, id.into());
    }

    /// Removes the command at `index`, returning its id.
    pub fn remove_command_at(&mut self, index: usize) -> Option<String> {
        (index < self.commands_after.len()).then(|| self.commands_after.remove(index))
    }

    /// Moves a command within the list. Returns false if either index is out of range.
    pub fn move_command(&mut self, from: usize, to: usize) -> bool {
        let len = self.commands_after.len();
        if from >= len || to >= len {
            return false;
        }
        let id = self.commands_after.remove(from);
        self.commands_after.insert(to, id);
        true
    }

    /// Drops every command id.
    pub fn clear_commands(&mut self) {
        self.commands_after.clear();
    }
}

impl Default for Waypoint {
    fn default() -> Self {
        Self::new(0.0, 0.0, MotionType::default())
    }
}
