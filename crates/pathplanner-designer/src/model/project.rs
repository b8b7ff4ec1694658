use pathplanner_core::constants::DEFAULT_SEASON;

use super::Path;

/// A collection of paths sharing one season/ruleset.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// Key into the season configuration (selects the command set).
    pub season: String,
    pub paths: Vec<Path>,
}

impl Project {
    /// Creates a project with no paths.
    pub fn new(season: impl Into<String>) -> Self {
        Self {
            season: season.into(),
            paths: Vec::new(),
        }
    }

    /// Creates a project seeded with one empty "New Path", as presented
    /// to the user for a fresh document.
    pub fn with_default_path(season: impl Into<String>) -> Self {
        let mut project = Self::new(season);
        project.add_path("New Path");
        project
    }

    /// Appends an empty path and returns its index.
    pub fn add_path(&mut self, name: impl Into<String>) -> usize {
        self.paths.push(Path::new(name));
        self.paths.len() - 1
    }

    /// Removes the path at `index`; out-of-range indices are ignored.
    pub fn remove_path(&mut self, index: usize) -> Option<Path> {
        (index < self.paths.len()).then(|| self.paths.remove(index))
    }

    /// The path at `index`, if in range.
    pub fn path(&self, index: usize) -> Option<&Path> {
        self.paths.get(index)
    }

    /// Mutable access to the path at `index`.
    pub fn path_mut(&mut self, index: usize) -> Option<&mut Path> {
        self.paths.get_mut(index)
    }

    /// First path with the given name.
    pub fn find_path(&self, name: &str) -> Option<&Path> {
        self.paths.iter().find(|p| p.name == name)
    }

    /// Total waypoint count across all paths.
    pub fn waypoint_count(&self) -> usize {
        self.paths.iter().map(Path::len).sum()
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new(DEFAULT_SEASON)
    }
}
