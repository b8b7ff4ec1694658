use pathplanner_core::{polyline_length, Point};

use super::{Alliance, MotionType, Side, Waypoint};

/// An ordered sequence of waypoints forming one autonomous routine.
///
/// Interactive edits keep the START invariant: the first waypoint (and
/// only the first) has [`MotionType::Start`]. Paths built with
/// [`Path::from_parts`] are taken as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Display name; not required to be unique within a project.
    pub name: String,
    pub alliance: Alliance,
    pub side: Side,
    waypoints: Vec<Waypoint>,
}

impl Path {
    /// Creates an empty red/left path.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alliance: Alliance::default(),
            side: Side::default(),
            waypoints: Vec::new(),
        }
    }

    /// Builds a path from already-deserialized parts without re-checking
    /// side restrictions or motion types.
    pub fn from_parts(
        name: impl Into<String>,
        alliance: Alliance,
        side: Side,
        waypoints: Vec<Waypoint>,
    ) -> Self {
        Self {
            name: name.into(),
            alliance,
            side,
            waypoints,
        }
    }

    /// Waypoints in drive order.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// The waypoint at `index`, if in range.
    pub fn waypoint(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    /// Mutable access for position/property/command edits.
    ///
    /// Changing `motion_type` through this handle bypasses the START
    /// invariant; use [`Path::set_motion_type`] for that.
    pub fn waypoint_mut(&mut self, index: usize) -> Option<&mut Waypoint> {
        self.waypoints.get_mut(index)
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// True when the path has no waypoints.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Appends a waypoint and returns its index.
    ///
    /// The first waypoint becomes START, every later one MOVE_TO_POSE.
    /// Side restrictions are the caller's job (see [`Path::is_valid_position`]).
    pub fn add_waypoint(&mut self, x: f64, y: f64) -> usize {
        let motion = if self.waypoints.is_empty() {
            MotionType::Start
        } else {
            MotionType::MoveToPose
        };
        self.waypoints.push(Waypoint::new(x, y, motion));
        tracing::debug!(path = %self.name, index = self.waypoints.len() - 1, x, y, "Waypoint added");
        self.waypoints.len() - 1
    }

    /// Removes the waypoint at `index`; out-of-range indices are ignored.
    ///
    /// Removing the first waypoint promotes the new first one to START.
    pub fn remove_waypoint(&mut self, index: usize) -> Option<Waypoint> {
        if index >= self.waypoints.len() {
            return None;
        }
        let removed = self.waypoints.remove(index);
        if index == 0 {
            if let Some(first) = self.waypoints.first_mut() {
                first.motion_type = MotionType::Start;
            }
        }
        tracing::debug!(path = %self.name, index, "Waypoint removed");
        Some(removed)
    }

    /// Removes every waypoint.
    pub fn clear_waypoints(&mut self) {
        self.waypoints.clear();
    }

    /// Whether (x, y) is allowed for this path's side.
    pub fn is_valid_position(&self, x: f64, _y: f64) -> bool {
        self.side.admits(x)
    }

    /// Changes a waypoint's motion type without breaking the START invariant.
    ///
    /// START can only be given to the first waypoint, and a START first
    /// waypoint cannot be changed to anything else. Returns false when the
    /// request is rejected or the index is out of range.
    pub fn set_motion_type(&mut self, index: usize, motion_type: MotionType) -> bool {
        let Some(wp) = self.waypoints.get_mut(index) else {
            return false;
        };
        let allowed = if index == 0 {
            motion_type == MotionType::Start || wp.motion_type != MotionType::Start
        } else {
            motion_type != MotionType::Start
        };
        if allowed {
            wp.motion_type = motion_type;
        }
        allowed
    }

    /// Waypoint positions in field inches.
    pub fn positions(&self) -> Vec<Point> {
        self.waypoints.iter().map(Waypoint::position).collect()
    }

    /// Straight-line length through all waypoints, in inches.
    pub fn total_length(&self) -> f64 {
        polyline_length(&self.positions())
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new("New Path")
    }
}
