//! Path Planner Settings Crate
//!
//! Handles application configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{CodegenSettings, Config, PlannerSettings, MAX_PRECISION, MAX_RECENT_FILES};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
