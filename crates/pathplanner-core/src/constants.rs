//! Field and editor constants.

/// Side length of the square competition field in inches (12 ft).
pub const FIELD_SIZE_INCHES: f64 = 144.0;

/// Distance from the field centre to an edge in inches.
pub const FIELD_HALF_SIZE: f64 = FIELD_SIZE_INCHES / 2.0;

/// Side length of one foam tile in inches.
pub const TILE_SIZE_INCHES: f64 = 24.0;

/// Number of tiles along one field edge.
pub const TILES_PER_SIDE: usize = 6;

/// Default square canvas size in pixels.
pub const DEFAULT_CANVAS_SIZE: f64 = 600.0;

/// Click tolerance around a drawn waypoint, in pixels.
pub const HIT_RADIUS: f64 = 15.0;

/// Default number of undo snapshots retained.
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Season used when none is specified.
pub const DEFAULT_SEASON: &str = "pushback_2026";
