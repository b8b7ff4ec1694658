//! # Path Planner Designer
//!
//! Editing model and code generation for autonomous robot routines.
//!
//! ## Core Components
//!
//! - **Model**: [`Waypoint`], [`Path`] and [`Project`] with the START invariant
//! - **Commands**: Mechanism commands, sequences and typed code templates
//! - **Seasons**: Season configs and the command library on disk
//! - **Code Generation**: Deterministic robot code per path
//! - **History**: Snapshot undo/redo with change observers
//! - **Serialization**: `.shupaths` project files
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (shell facade)
//!   ├── Project → Path → Waypoint
//!   ├── UndoManager<Project> (snapshots)
//!   ├── CommandRegistry ← SeasonLoader
//!   └── CodeGenerator (MotionTemplates + CommandLookup)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pathplanner_designer::DesignerState;
//!
//! let mut state = DesignerState::new();
//! state.add_waypoint(-48.0, -48.0);
//! state.add_waypoint(-24.0, 0.0);
//! println!("{}", state.generate_code());
//! ```

pub mod codegen;
pub mod commands;
pub mod history;
pub mod model;
pub mod season;
pub mod serialization;
pub mod template;

pub mod designer_state;

pub use codegen::{effective_headings, function_name, CodeGenOptions, CodeGenerator, MotionTemplates};
pub use commands::{
    default_commands, Command, CommandLookup, CommandOverride, CommandParameter, CommandRegistry,
    CommandSequence,
};
pub use history::{ChangeCallback, HistoryEntry, HistoryStatus, ObserverId, UndoManager};
pub use model::{Alliance, Heading, HeadingMode, MotionType, Path, Project, Side, Waypoint};
pub use season::{SeasonConfig, SeasonLoader};
pub use serialization::{
    check_version, load_project, load_project_file, project_info, save_project, PathData,
    ProjectFile, ProjectInfo, VersionCompatibility, WaypointData, FILE_EXTENSION,
    FILE_FORMAT_VERSION,
};
pub use template::{CodeTemplate, ParamValue, ParamValues, Segment};

pub use designer_state::DesignerState;
