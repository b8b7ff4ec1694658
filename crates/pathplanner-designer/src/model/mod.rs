//! Waypoint, path and project model.
//!
//! A [`Project`] owns its [`Path`]s and each path owns its [`Waypoint`]s.
//! Nothing holds a back-reference to its owner; "current path" and
//! "selected waypoint" are selection state kept by
//! [`DesignerState`](crate::DesignerState).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod path;
mod project;
mod waypoint;

pub use path::Path;
pub use project::Project;
pub use waypoint::Waypoint;

/// How the robot moves to reach a waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MotionType {
    /// First waypoint; only sets the starting pose.
    #[serde(rename = "start")]
    Start,
    /// Navigate to (x, y) with a heading.
    #[default]
    #[serde(rename = "moveToPose")]
    MoveToPose,
    /// Drive straight forward/backward.
    #[serde(rename = "moveVertical")]
    MoveVertical,
    /// Turn in place.
    #[serde(rename = "rotateTo")]
    RotateTo,
}

impl MotionType {
    /// All motion types, in menu order.
    pub const ALL: [MotionType; 4] = [
        MotionType::Start,
        MotionType::MoveToPose,
        MotionType::MoveVertical,
        MotionType::RotateTo,
    ];

    /// Persisted literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::MoveToPose => "moveToPose",
            Self::MoveVertical => "moveVertical",
            Self::RotateTo => "rotateTo",
        }
    }
}

impl fmt::Display for MotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MotionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown motion type: {}", s))
    }
}

/// How the heading at a waypoint is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingMode {
    /// Derived from the direction to the next waypoint.
    #[default]
    Auto,
    /// Exact angle given by the user.
    Manual,
}

impl fmt::Display for HeadingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Manual => write!(f, "manual"),
        }
    }
}

impl FromStr for HeadingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "manual" => Ok(Self::Manual),
            _ => Err(format!("Unknown heading mode: {}", s)),
        }
    }
}

/// Heading at a waypoint.
///
/// Replaces a nullable angle plus a separate mode flag, so a manual mode
/// without an angle (or an automatic one with an angle) cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Heading {
    /// Computed at generation time from the vector to the next waypoint.
    #[default]
    Auto,
    /// Fixed angle in degrees (0° = forward, clockwise positive).
    Manual(f64),
}

impl Heading {
    /// Auto or manual, without the angle.
    pub fn mode(&self) -> HeadingMode {
        match self {
            Heading::Auto => HeadingMode::Auto,
            Heading::Manual(_) => HeadingMode::Manual,
        }
    }

    /// The stored angle, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            Heading::Auto => None,
            Heading::Manual(deg) => Some(*deg),
        }
    }

    /// True for [`Heading::Auto`].
    pub fn is_auto(&self) -> bool {
        matches!(self, Heading::Auto)
    }
}

/// Field side an autonomous routine is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// x ≤ 0
    #[default]
    Left,
    /// x ≥ 0
    Right,
    /// Whole field (skills)
    Full,
}

impl Side {
    /// Whether `x` lies on this side. The centre line belongs to both halves.
    pub fn admits(&self, x: f64) -> bool {
        match self {
            Side::Full => true,
            Side::Left => x <= 0.0,
            Side::Right => x >= 0.0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::Full => write!(f, "full"),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "full" => Ok(Self::Full),
            _ => Err(format!("Unknown side: {}", s)),
        }
    }
}

/// Alliance colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alliance {
    #[default]
    Red,
    Blue,
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Blue => write!(f, "blue"),
        }
    }
}

impl FromStr for Alliance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "red" => Ok(Self::Red),
            "blue" => Ok(Self::Blue),
            _ => Err(format!("Unknown alliance: {}", s)),
        }
    }
}
