//! # Path Planner
//!
//! Lays out field waypoints for an autonomous robot routine, attaches
//! mechanism commands to them and generates the robot code.
//!
//! ## Architecture
//!
//! The planner is organized as a workspace with multiple crates:
//!
//! 1. **pathplanner-core** - Field/canvas coordinates, curve geometry, constants, errors
//! 2. **pathplanner-designer** - Path model, commands, seasons, code generation, undo history, project files
//! 3. **pathplanner-settings** - Application configuration
//! 4. **pathplanner** - Headless command line shell that integrates all crates

pub use pathplanner_core as core;
pub use pathplanner_designer as designer;
pub use pathplanner_settings as settings;

pub use pathplanner_core::{
    CoordinateSystem, Error, Point, ProjectError, Result, SeasonError, TemplateError,
};

pub use pathplanner_designer::{
    Alliance, CodeGenOptions, CodeGenerator, Command, CommandRegistry, CommandSequence,
    DesignerState, Heading, MotionType, Path, Project, SeasonLoader, Side, UndoManager, Waypoint,
};

pub use pathplanner_settings::{CodegenSettings, Config, PlannerSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatted output on stderr, so generated code on stdout stays clean
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Code generator options from the configured settings.
pub fn codegen_options(settings: &CodegenSettings) -> CodeGenOptions {
    CodeGenOptions {
        indent: settings.indent,
        precision: settings.precision,
        wrap_in_function: settings.wrap_in_function,
        include_comments: settings.include_comments,
    }
}

/// A designer state configured from `config`, with a fresh project for the
/// default season and that season's commands when a base path is set.
pub fn designer_from_config(config: &Config) -> DesignerState {
    let planner = &config.planner;
    let mut state = DesignerState::with_max_history(planner.max_history);
    state.coords = CoordinateSystem::new(planner.canvas_size);
    state.hit_radius = planner.hit_radius;
    state.codegen_options = codegen_options(&config.codegen);
    if let Some(base) = &planner.base_path {
        state.set_season_loader(SeasonLoader::new(base));
    }
    state.new_project(&planner.default_season);
    state
}
