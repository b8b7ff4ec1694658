//! Error handling for the path planner
//!
//! Provides error types for each layer of the planner:
//! - Project errors (loading/saving `.shupaths` documents)
//! - Season errors (season configuration and command library files)
//! - Template errors (parsing command code templates)
//!
//! All error types use `thiserror` for ergonomic error handling.
//! Conditions the planner treats as recoverable (version mismatch,
//! unresolved command ids, empty undo stacks, degenerate geometry) are not
//! represented here; they are logged and answered with a sentinel instead.

use thiserror::Error;

/// Project file error type
///
/// Any of these aborts the load of the whole project so the caller can
/// refuse to open a corrupt file.
#[derive(Error, Debug)]
pub enum ProjectError {
    /// Project file does not exist
    #[error("Project file not found: {path}")]
    FileNotFound {
        /// The path that was requested.
        path: String,
    },

    /// Document is not valid JSON, or a required field is missing.
    /// The parser message is the error source.
    #[error("Malformed project document")]
    Malformed(#[from] serde_json::Error),

    /// A field holds a value outside its allowed set
    #[error("Invalid value for '{field}': {value}")]
    InvalidValue {
        /// The offending field.
        field: String,
        /// The rejected value.
        value: String,
    },

    /// Reading or writing the file failed
    #[error("Project file I/O failed")]
    Io(#[from] std::io::Error),
}

/// Season configuration error type
#[derive(Error, Debug)]
pub enum SeasonError {
    /// No `config.json` for the requested season
    #[error("Season config not found: {path}")]
    ConfigNotFound {
        /// The expected config path.
        path: String,
    },

    /// Season config or command file could not be parsed
    #[error("Malformed season data in {path}: {reason}")]
    Malformed {
        /// The file being parsed.
        path: String,
        /// Parser message.
        reason: String,
    },

    /// I/O failure while reading season data
    #[error("Season I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Code template error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{` opened a placeholder that never closed
    #[error("Unterminated placeholder starting at byte {offset}")]
    UnterminatedPlaceholder {
        /// Byte offset of the opening brace.
        offset: usize,
    },

    /// A placeholder name is not a valid identifier
    #[error("Invalid placeholder name '{name}'")]
    InvalidName {
        /// The rejected name.
        name: String,
    },
}

/// Main error type for the path planner
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Project file error
    #[error(transparent)]
    Project(#[from] ProjectError),

    /// Season configuration error
    #[error(transparent)]
    Season(#[from] SeasonError),

    /// Template error
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a project load/save error
    pub fn is_project_error(&self) -> bool {
        matches!(self, Error::Project(_))
    }

    /// Check if this is a season error
    pub fn is_season_error(&self) -> bool {
        matches!(self, Error::Season(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
