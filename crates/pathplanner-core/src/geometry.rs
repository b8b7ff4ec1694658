//! Curve geometry for path planning.
//!
//! Bezier evaluation, polyline decomposition (uniform and adaptive),
//! point/segment distance and angle arithmetic. Every function here is
//! pure and total: degenerate input falls back to a well-defined answer
//! instead of failing.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 2D point in field inches.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, scalar: f64) -> Point {
        Point::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, p: Point) -> Point {
        p * self
    }
}

/// Linear interpolation between two values.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Linear interpolation between two points.
pub fn lerp_point(p1: Point, p2: Point, t: f64) -> Point {
    Point::new(lerp(p1.x, p2.x, t), lerp(p1.y, p2.y, t))
}

/// Point on a quadratic Bezier curve.
///
/// ```text
/// B(t) = (1-t)²P0 + 2(1-t)tP1 + t²P2
/// ```
pub fn quadratic_bezier(p0: Point, p1: Point, p2: Point, t: f64) -> Point {
    let u = 1.0 - t;
    u * u * p0 + 2.0 * u * t * p1 + t * t * p2
}

/// Point on a cubic Bezier curve.
///
/// ```text
/// B(t) = (1-t)³P0 + 3(1-t)²tP1 + 3(1-t)t²P2 + t³P3
/// ```
pub fn cubic_bezier(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Samples `curve` at `num_segments + 1` evenly spaced parameters,
/// both endpoints included. Zero segments is treated as one.
fn sample_uniform(num_segments: usize, curve: impl Fn(f64) -> Point) -> Vec<Point> {
    let n = num_segments.max(1);
    (0..=n)
        .map(|i| {
            // Exact endpoints regardless of rounding in i / n.
            let t = if i == n { 1.0 } else { i as f64 / n as f64 };
            curve(t)
        })
        .collect()
}

/// Decomposes a quadratic Bezier into `num_segments` line segments.
pub fn decompose_quadratic_bezier(p0: Point, p1: Point, p2: Point, num_segments: usize) -> Vec<Point> {
    sample_uniform(num_segments, |t| quadratic_bezier(p0, p1, p2, t))
}

/// Decomposes a cubic Bezier into `num_segments` line segments.
pub fn decompose_cubic_bezier(
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
    num_segments: usize,
) -> Vec<Point> {
    sample_uniform(num_segments, |t| cubic_bezier(p0, p1, p2, p3, t))
}

/// Length of the polyline through `points` (0 for fewer than two points).
pub fn polyline_length(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]))
        .sum()
}

/// Tuning for adaptive curve decomposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveOptions {
    /// Target upper bound for one segment, in inches.
    pub max_segment_length: f64,
    pub min_segments: usize,
    pub max_segments: usize,
}

impl Default for AdaptiveOptions {
    fn default() -> Self {
        Self {
            max_segment_length: 6.0,
            min_segments: 3,
            max_segments: 20,
        }
    }
}

/// Segment count for a curve with the given control polygon.
///
/// The control polygon length is an upper bound for the curve length, so
/// `round(estimate / max_segment_length)` never under-samples; the result
/// is clamped into `[min_segments, max_segments]` and is never below 1.
pub fn adaptive_segment_count(control_points: &[Point], options: &AdaptiveOptions) -> usize {
    // At least one segment, so the count matches what decomposition samples.
    let lo = options.min_segments.min(options.max_segments).max(1);
    let hi = options.min_segments.max(options.max_segments).max(1);

    if options.max_segment_length.is_nan() || options.max_segment_length <= 0.0 {
        tracing::debug!(
            max_segment_length = options.max_segment_length,
            "Invalid max segment length; using max segments"
        );
        return hi;
    }

    let estimate = polyline_length(control_points) / options.max_segment_length;
    if !estimate.is_finite() {
        tracing::debug!(estimate, "Non-finite curve length estimate");
        return if estimate.is_nan() { lo } else { hi };
    }

    // Saturating float-to-int cast keeps huge estimates at usize::MAX.
    (estimate.round() as usize).clamp(lo, hi)
}

/// Decomposes a quadratic Bezier with a segment count derived from its size.
pub fn adaptive_decompose_quadratic(
    p0: Point,
    p1: Point,
    p2: Point,
    options: &AdaptiveOptions,
) -> Vec<Point> {
    let n = adaptive_segment_count(&[p0, p1, p2], options);
    decompose_quadratic_bezier(p0, p1, p2, n)
}

/// Decomposes a cubic Bezier with a segment count derived from its size.
pub fn adaptive_decompose_cubic(
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
    options: &AdaptiveOptions,
) -> Vec<Point> {
    let n = adaptive_segment_count(&[p0, p1, p2, p3], options);
    decompose_cubic_bezier(p0, p1, p2, p3, n)
}

/// Distance from `point` to the closest point of segment `start..end`.
///
/// A zero-length segment degenerates to point-to-point distance.
pub fn point_to_segment_distance(point: Point, start: Point, end: Point) -> f64 {
    let seg = end - start;
    let rel = point - start;
    let len_sq = seg.x * seg.x + seg.y * seg.y;

    if len_sq == 0.0 {
        return point.distance_to(&start);
    }

    let t = ((rel.x * seg.x + rel.y * seg.y) / len_sq).clamp(0.0, 1.0);
    let projection = start + seg * t;
    point.distance_to(&projection)
}

/// Normalizes an angle in degrees to `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Shortest signed rotation from `from` to `to`, in `[-180, 180]`.
pub fn angle_difference(from: f64, to: f64) -> f64 {
    let diff = normalize_angle(to) - normalize_angle(from);
    if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    }
}
