//! Field and canvas coordinate conversion.
//!
//! Field coordinates:
//! - Origin at the centre of the field, inches
//! - X: -72 to +72 (positive = right)
//! - Y: -72 to +72 (positive = forward)
//! - Heading: 0° = forward (+Y), clockwise positive
//!
//! Canvas coordinates:
//! - Origin at the top-left corner, pixels
//! - X: 0 to canvas_size (positive = right)
//! - Y: 0 to canvas_size (positive = down)

use std::fmt;

use crate::constants::{DEFAULT_CANVAS_SIZE, FIELD_HALF_SIZE, FIELD_SIZE_INCHES};
use crate::geometry::{normalize_angle, Point};

/// Maps between field inches and a square rendering canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateSystem {
    canvas_size: f64,
    scale: f64,
}

impl CoordinateSystem {
    /// Creates a coordinate system for a square canvas of `canvas_size` pixels.
    pub fn new(canvas_size: f64) -> Self {
        Self {
            canvas_size,
            scale: canvas_size / FIELD_SIZE_INCHES,
        }
    }

    /// Gets the canvas size in pixels.
    pub fn canvas_size(&self) -> f64 {
        self.canvas_size
    }

    /// Pixels per inch.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the canvas size (typically called when the window resizes).
    pub fn set_canvas_size(&mut self, canvas_size: f64) {
        self.canvas_size = canvas_size;
        self.scale = canvas_size / FIELD_SIZE_INCHES;
    }

    /// Converts field inches to canvas pixels.
    ///
    /// ```text
    /// canvas_x = (field_x + 72) * scale
    /// canvas_y = (72 - field_y) * scale   // Flip Y-axis
    /// ```
    pub fn field_to_canvas(&self, field_x: f64, field_y: f64) -> (f64, f64) {
        let canvas_x = (field_x + FIELD_HALF_SIZE) * self.scale;
        let canvas_y = (FIELD_HALF_SIZE - field_y) * self.scale;
        (canvas_x, canvas_y)
    }

    /// Converts canvas pixels to field inches. Exact inverse of
    /// [`field_to_canvas`](Self::field_to_canvas) up to rounding.
    pub fn canvas_to_field(&self, canvas_x: f64, canvas_y: f64) -> (f64, f64) {
        let field_x = canvas_x / self.scale - FIELD_HALF_SIZE;
        let field_y = FIELD_HALF_SIZE - canvas_y / self.scale;
        (field_x, field_y)
    }

    /// Converts a field point to canvas pixels.
    pub fn field_point_to_canvas(&self, point: &Point) -> (f64, f64) {
        self.field_to_canvas(point.x, point.y)
    }

    /// Converts canvas pixels to a field point.
    pub fn canvas_to_field_point(&self, canvas_x: f64, canvas_y: f64) -> Point {
        let (x, y) = self.canvas_to_field(canvas_x, canvas_y);
        Point::new(x, y)
    }

    /// Converts a length in inches to pixels.
    pub fn inches_to_pixels(&self, inches: f64) -> f64 {
        inches * self.scale
    }
}

impl Default for CoordinateSystem {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_SIZE)
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Canvas: {:.0}px | Scale: {:.3} px/in",
            self.canvas_size, self.scale
        )
    }
}

/// Heading from one point to another.
///
/// 0° = forward (+Y), 90° = right (+X), clockwise positive, in `[0, 360)`.
pub fn calculate_heading(from: Point, to: Point) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    normalize_angle(dx.atan2(dy).to_degrees())
}

/// Distance between two points in inches.
pub fn calculate_distance(a: Point, b: Point) -> f64 {
    a.distance_to(&b)
}

/// Clamps a position onto the field square.
pub fn clamp_to_field(x: f64, y: f64) -> (f64, f64) {
    (
        x.clamp(-FIELD_HALF_SIZE, FIELD_HALF_SIZE),
        y.clamp(-FIELD_HALF_SIZE, FIELD_HALF_SIZE),
    )
}
