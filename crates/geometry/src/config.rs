//! Fixed constants for the sampled domain, the display volume, and the
//! parameter controls. All initial values are compile-time constants; the
//! application takes no arguments.

/// Samples per axis of the X-Y grid.
pub const GRID_SAMPLES: usize = 10;

/// Lower bound of the sampled X-Y domain, per axis.
pub const GRID_MIN: f32 = -5.0;
/// Upper bound of the sampled X-Y domain, per axis.
pub const GRID_MAX: f32 = 5.0;

/// Z display range of the scene volume.
pub const Z_MIN: f32 = -5.0;
pub const Z_MAX: f32 = 5.0;

/// Control range for the anchor coordinates (x0, y0, z0).
pub const ANCHOR_MIN: f32 = -3.0;
pub const ANCHOR_MAX: f32 = 3.0;

/// Control range for the normal components (A, B, C).
pub const NORMAL_MIN: f32 = -5.0;
pub const NORMAL_MAX: f32 = 5.0;

/// Initial anchor point (x0, y0, z0).
pub const DEFAULT_ANCHOR: (f32, f32, f32) = (1.0, 2.0, 1.0);
/// Initial normal vector (A, B, C).
pub const DEFAULT_NORMAL: (f32, f32, f32) = (2.0, -3.0, 1.0);

/// Substituted for C when it is driven to exactly zero, keeping the height
/// formula defined. The resulting jump in the surface is expected.
pub const C_EPSILON: f32 = 0.01;
