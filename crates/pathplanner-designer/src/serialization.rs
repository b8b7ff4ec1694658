//! Serialization and deserialization for project files.
//!
//! Implements save/load for `.shupaths` project files, a pretty-printed
//! JSON document. Required keys (`x`, `y` of a waypoint, `name` of a path)
//! must be present; every other key falls back to its default.

use chrono::Utc;
use pathplanner_core::ProjectError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path as FsPath;

use crate::model::{Alliance, Heading, HeadingMode, MotionType, Path, Project, Side, Waypoint};

/// Project file format version
pub const FILE_FORMAT_VERSION: &str = "1.0.0";

/// Project file extension, without the dot
pub const FILE_EXTENSION: &str = "shupaths";

/// Complete project file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default = "default_season")]
    pub season: String,
    /// ISO-8601 timestamp of first save
    #[serde(default)]
    pub created: Option<String>,
    /// ISO-8601 timestamp of last save
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub paths: Vec<PathData>,
}

/// Serialized path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathData {
    pub name: String,
    #[serde(default = "default_alliance")]
    pub alliance: String,
    #[serde(default = "default_side")]
    pub side: String,
    #[serde(default)]
    pub waypoints: Vec<WaypointData>,
}

/// Serialized waypoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaypointData {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub heading: Option<f64>,
    #[serde(default = "default_heading_mode")]
    pub heading_mode: String,
    #[serde(default = "default_motion_type")]
    pub motion_type: String,
    #[serde(default)]
    pub reverse: bool,
    #[serde(default)]
    pub intaking: bool,
    #[serde(default)]
    pub conveyor: bool,
    #[serde(default)]
    pub commands_after: Vec<String>,
}

fn default_season() -> String {
    pathplanner_core::constants::DEFAULT_SEASON.to_string()
}

fn default_alliance() -> String {
    Alliance::default().to_string()
}

fn default_side() -> String {
    Side::default().to_string()
}

fn default_heading_mode() -> String {
    HeadingMode::Auto.to_string()
}

fn default_motion_type() -> String {
    MotionType::MoveToPose.to_string()
}

fn parse_field<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, ProjectError> {
    value.parse().map_err(|_| ProjectError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

impl WaypointData {
    pub fn from_waypoint(wp: &Waypoint) -> Self {
        Self {
            x: wp.x,
            y: wp.y,
            heading: wp.heading.value(),
            heading_mode: wp.heading.mode().to_string(),
            motion_type: wp.motion_type.to_string(),
            reverse: wp.reverse,
            intaking: wp.intaking,
            conveyor: wp.conveyor,
            commands_after: wp.commands_after.clone(),
        }
    }

    /// Converts to the model, coercing inconsistent heading data.
    ///
    /// `manual` without an angle becomes automatic; `auto` with an angle
    /// drops the angle.
    pub fn to_waypoint(&self) -> Result<Waypoint, ProjectError> {
        let mode: HeadingMode = parse_field("heading_mode", &self.heading_mode)?;
        let motion_type: MotionType = parse_field("motion_type", &self.motion_type)?;

        let heading = match (mode, self.heading) {
            (HeadingMode::Manual, Some(deg)) => Heading::Manual(deg),
            (HeadingMode::Manual, None) => {
                tracing::warn!(x = self.x, y = self.y, "Manual heading without a value; using auto");
                Heading::Auto
            }
            (HeadingMode::Auto, Some(deg)) => {
                tracing::warn!(x = self.x, y = self.y, heading = deg, "Auto heading with a stored value; value dropped");
                Heading::Auto
            }
            (HeadingMode::Auto, None) => Heading::Auto,
        };

        Ok(Waypoint {
            x: self.x,
            y: self.y,
            heading,
            motion_type,
            reverse: self.reverse,
            intaking: self.intaking,
            conveyor: self.conveyor,
            commands_after: self.commands_after.clone(),
        })
    }
}

impl PathData {
    pub fn from_path(path: &Path) -> Self {
        Self {
            name: path.name.clone(),
            alliance: path.alliance.to_string(),
            side: path.side.to_string(),
            waypoints: path.waypoints().iter().map(WaypointData::from_waypoint).collect(),
        }
    }

    pub fn to_path(&self) -> Result<Path, ProjectError> {
        let alliance = parse_field("alliance", &self.alliance)?;
        let side = parse_field("side", &self.side)?;
        let waypoints = self
            .waypoints
            .iter()
            .map(WaypointData::to_waypoint)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Path::from_parts(self.name.clone(), alliance, side, waypoints))
    }
}

impl ProjectFile {
    /// Builds a document for `project` with no timestamps set.
    pub fn from_project(project: &Project) -> Self {
        Self {
            version: Some(FILE_FORMAT_VERSION.to_string()),
            season: project.season.clone(),
            created: None,
            modified: None,
            paths: project.paths.iter().map(PathData::from_path).collect(),
        }
    }

    pub fn to_project(&self) -> Result<Project, ProjectError> {
        let mut project = Project::new(self.season.clone());
        project.paths = self
            .paths
            .iter()
            .map(PathData::to_path)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(project)
    }

    pub fn to_json(&self) -> Result<String, ProjectError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ProjectError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// How a file's version relates to [`FILE_FORMAT_VERSION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionCompatibility {
    /// Same major version.
    Compatible,
    Missing,
    Unparsable,
    /// Older major version.
    Older,
    /// Newer major version.
    Newer,
}

impl VersionCompatibility {
    pub fn is_compatible(&self) -> bool {
        matches!(self, Self::Compatible)
    }
}

fn major_version(version: &str) -> Option<u64> {
    version.trim().split('.').next()?.parse().ok()
}

/// Compares a file's major version with the current format.
pub fn check_version(version: Option<&str>) -> VersionCompatibility {
    let Some(version) = version else {
        return VersionCompatibility::Missing;
    };
    let (Some(file_major), Some(current_major)) =
        (major_version(version), major_version(FILE_FORMAT_VERSION))
    else {
        return VersionCompatibility::Unparsable;
    };
    match file_major.cmp(&current_major) {
        std::cmp::Ordering::Equal => VersionCompatibility::Compatible,
        std::cmp::Ordering::Less => VersionCompatibility::Older,
        std::cmp::Ordering::Greater => VersionCompatibility::Newer,
    }
}

/// Writes `project` to `path`.
///
/// `modified` is stamped with the current time; `created` is kept when
/// given, otherwise set to the same time. Returns the written document.
pub fn save_project(
    project: &Project,
    path: impl AsRef<FsPath>,
    created: Option<&str>,
) -> Result<ProjectFile, ProjectError> {
    let path = path.as_ref();
    let now = Utc::now().to_rfc3339();

    let mut file = ProjectFile::from_project(project);
    file.created = Some(created.map(str::to_string).unwrap_or_else(|| now.clone()));
    file.modified = Some(now);

    fs::write(path, file.to_json()?)?;
    tracing::info!(path = %path.display(), paths = file.paths.len(), "Project saved");
    Ok(file)
}

/// Reads the project document at `path`.
///
/// A version mismatch is logged and loading continues.
pub fn load_project_file(path: impl AsRef<FsPath>) -> Result<ProjectFile, ProjectError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ProjectError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file = ProjectFile::from_json(&fs::read_to_string(path)?)?;

    let compatibility = check_version(file.version.as_deref());
    if !compatibility.is_compatible() {
        tracing::warn!(
            path = %path.display(),
            version = file.version.as_deref().unwrap_or("none"),
            current = FILE_FORMAT_VERSION,
            "Project file version {:?}; it may not load correctly",
            compatibility
        );
    }
    Ok(file)
}

/// Loads the project at `path`.
pub fn load_project(path: impl AsRef<FsPath>) -> Result<Project, ProjectError> {
    let path = path.as_ref();
    let project = load_project_file(path)?.to_project()?;
    tracing::info!(path = %path.display(), paths = project.paths.len(), "Project loaded");
    Ok(project)
}

/// Summary of a project file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    pub season: String,
    pub path_count: usize,
    pub modified: Option<String>,
    pub version: Option<String>,
}

/// Reads summary fields without building the model, so files with
/// malformed waypoints can still be listed.
pub fn project_info(path: impl AsRef<FsPath>) -> Result<ProjectInfo, ProjectError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ProjectError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(path)?)?;
    let text = |key: &str| value.get(key).and_then(|v| v.as_str()).map(str::to_string);

    Ok(ProjectInfo {
        season: text("season").unwrap_or_else(|| "unknown".to_string()),
        path_count: value
            .get("paths")
            .and_then(|p| p.as_array())
            .map_or(0, Vec::len),
        modified: text("modified"),
        version: text("version"),
    })
}
