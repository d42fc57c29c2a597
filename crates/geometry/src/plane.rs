use bevy::prelude::*;

use crate::config::{C_EPSILON, DEFAULT_ANCHOR, DEFAULT_NORMAL};

/// Current plane parameters: the anchor point (x0, y0, z0) the plane passes
/// through, and the normal vector (a, b, c) perpendicular to it.
///
/// The normal components double as the coefficients of the plane equation
/// `a·x + b·y + c·z + d = 0`, with `d` given by [`PlaneParams::offset`].
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PlaneParams {
    pub x0: f32,
    pub y0: f32,
    pub z0: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl Default for PlaneParams {
    fn default() -> Self {
        let (x0, y0, z0) = DEFAULT_ANCHOR;
        let (a, b, c) = DEFAULT_NORMAL;
        Self {
            x0,
            y0,
            z0,
            a,
            b,
            c,
        }
    }
}

impl PlaneParams {
    pub fn anchor(&self) -> Vec3 {
        Vec3::new(self.x0, self.y0, self.z0)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::new(self.a, self.b, self.c)
    }

    /// Plane offset `d = -(a·x0 + b·y0 + c·z0)`.
    pub fn offset(&self) -> f32 {
        -(self.a * self.x0 + self.b * self.y0 + self.c * self.z0)
    }

    /// The C coefficient with the zero guard applied.
    ///
    /// The guarded value is used for computation only; the stored parameter
    /// keeps whatever the user set.
    pub fn safe_c(&self) -> f32 {
        if self.c == 0.0 {
            C_EPSILON
        } else {
            self.c
        }
    }

    /// Height of the plane above (x, y): `z = (-a·x - b·y - d) / c`.
    ///
    /// Pure and total; the only degenerate input (c = 0) is absorbed by
    /// [`PlaneParams::safe_c`].
    pub fn height_at(&self, x: f32, y: f32) -> f32 {
        (-self.a * x - self.b * y - self.offset()) / self.safe_c()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    #[test]
    fn test_offset_for_initial_parameters() {
        // anchor (1, 2, 1), normal (2, -3, 1): d = -(2 - 6 + 1) = 3
        let params = PlaneParams::default();
        assert!((params.offset() - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_height_at_origin_for_initial_parameters() {
        let params = PlaneParams::default();
        assert!((params.height_at(0.0, 0.0) - (-3.0)).abs() < TOLERANCE);
    }

    #[test]
    fn test_horizontal_plane_through_origin() {
        // normal (0, 0, 5) through the origin is the X-Y plane itself
        let params = PlaneParams {
            x0: 0.0,
            y0: 0.0,
            z0: 0.0,
            a: 0.0,
            b: 0.0,
            c: 5.0,
        };
        assert!((params.offset()).abs() < TOLERANCE);
        for (x, y) in [(0.0, 0.0), (-5.0, 5.0), (3.3, -1.7)] {
            assert!(params.height_at(x, y).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_anchor_lies_on_plane() {
        let params = PlaneParams {
            x0: -2.5,
            y0: 1.5,
            z0: 0.5,
            a: 1.0,
            b: 4.0,
            c: -2.0,
        };
        let z = params.height_at(params.x0, params.y0);
        assert!((z - params.z0).abs() < TOLERANCE);
    }

    #[test]
    fn test_zero_c_substitutes_epsilon() {
        let params = PlaneParams {
            x0: 1.0,
            y0: 1.0,
            z0: 1.0,
            a: 1.0,
            b: 1.0,
            c: 0.0,
        };
        assert_eq!(params.safe_c(), 0.01);
        // d = -(1 + 1 + 0) = -2, so z(0, 0) = 2 / 0.01 = 200.
        // Large but finite: the jump is the documented behavior, not a defect.
        let z = params.height_at(0.0, 0.0);
        assert!(z.is_finite());
        assert!((z - 200.0).abs() < 1e-2);
    }

    #[test]
    fn test_negative_c_is_not_guarded() {
        let params = PlaneParams {
            c: -0.5,
            ..PlaneParams::default()
        };
        assert_eq!(params.safe_c(), -0.5);
    }

    #[test]
    fn test_height_is_deterministic() {
        let params = PlaneParams::default();
        assert_eq!(params.height_at(2.0, -4.0), params.height_at(2.0, -4.0));
    }
}
