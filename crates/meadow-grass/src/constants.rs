//! Shared constants for meadow-grass. Centralizes the blade layout and color numbers.

// Blade layout: front triangle + back triangle, vertices duplicated
pub const VERTICES_PER_BLADE: usize = 6;
pub const INDICES_PER_BLADE: usize = 6;

/// Advisory per-block vertex limit; exceeding it only logs a warning.
pub const DEFAULT_VERTEX_CEILING: usize = 64_000;

/// Radius floor applied by the grid planner.
pub const MIN_RADIUS: f32 = 0.0001;

// Blade shape
pub(crate) const TIP_LEAN: f32 = 0.15; // horizontal tip offset (meters)
pub(crate) const MAX_BEND: f32 = 0.3; // bend drawn from [-0.3, 0.3) radians

// Colors (RGBA, linear)
pub const BASE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
pub const TIP_COLOR: [f32; 4] = [0.15, 0.65, 0.22, 1.0];
