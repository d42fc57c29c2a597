//! Math-to-world coordinate mapping.
//!
//! Domain code works in math coordinates (x, y, z) with z the plane height.
//! The render world is Y-up, so math (x, y, z) lands at world (x, z, y).
//! Swapping the last two components makes the mapping its own inverse.

use bevy::prelude::*;

/// World-space image of the math-space vector `v`.
pub fn to_world(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.z, v.y)
}

/// World position of the math-space point (x, y, z).
pub fn world_pos(x: f32, y: f32, z: f32) -> Vec3 {
    to_world(Vec3::new(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_height_maps_to_world_y() {
        let p = world_pos(1.0, 2.0, 3.0);
        assert_eq!(p, Vec3::new(1.0, 3.0, 2.0));
    }

    #[test]
    fn test_mapping_is_involutive() {
        let v = Vec3::new(0.5, -1.5, 4.0);
        assert_eq!(to_world(to_world(v)), v);
    }
}
