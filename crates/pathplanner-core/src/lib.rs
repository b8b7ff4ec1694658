//! # Path Planner Core
//!
//! Pure building blocks shared by the planner crates:
//! field/canvas coordinate conversion, Bezier and polyline geometry,
//! field constants and the error taxonomy. Nothing in this crate performs
//! I/O or holds shared state.

pub mod constants;
pub mod coordinates;
pub mod error;
pub mod geometry;

pub use coordinates::{calculate_distance, calculate_heading, clamp_to_field, CoordinateSystem};
pub use error::{Error, ProjectError, Result, SeasonError, TemplateError};
pub use geometry::{
    adaptive_decompose_cubic, adaptive_decompose_quadratic, adaptive_segment_count,
    angle_difference, cubic_bezier, decompose_cubic_bezier, decompose_quadratic_bezier, lerp,
    lerp_point, normalize_angle, point_to_segment_distance, polyline_length, quadratic_bezier,
    AdaptiveOptions, Point,
};
