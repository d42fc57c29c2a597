use bevy::prelude::*;

use geometry::config::{GRID_MAX, GRID_MIN, Z_MAX, Z_MIN};

use crate::coords;

const AXIS_X_COLOR: Color = Color::srgb(0.85, 0.25, 0.25);
const AXIS_Y_COLOR: Color = Color::srgb(0.25, 0.7, 0.25);
const AXIS_Z_COLOR: Color = Color::srgb(0.25, 0.4, 0.9);
const BOX_COLOR: Color = Color::srgba(0.6, 0.6, 0.65, 0.35);
const TICK_HALF: f32 = 0.08;

/// Reference frame for the scene: the three math axes through the origin
/// with unit ticks, plus the wireframe of the display volume.
pub fn draw_axes(mut gizmos: Gizmos) {
    gizmos.line(
        coords::world_pos(GRID_MIN, 0.0, 0.0),
        coords::world_pos(GRID_MAX, 0.0, 0.0),
        AXIS_X_COLOR,
    );
    gizmos.line(
        coords::world_pos(0.0, GRID_MIN, 0.0),
        coords::world_pos(0.0, GRID_MAX, 0.0),
        AXIS_Y_COLOR,
    );
    gizmos.line(
        coords::world_pos(0.0, 0.0, Z_MIN),
        coords::world_pos(0.0, 0.0, Z_MAX),
        AXIS_Z_COLOR,
    );

    // Unit tick marks on each axis
    for i in (GRID_MIN as i32)..=(GRID_MAX as i32) {
        if i == 0 {
            continue;
        }
        let t = i as f32;
        gizmos.line(
            coords::world_pos(t, -TICK_HALF, 0.0),
            coords::world_pos(t, TICK_HALF, 0.0),
            AXIS_X_COLOR,
        );
        gizmos.line(
            coords::world_pos(-TICK_HALF, t, 0.0),
            coords::world_pos(TICK_HALF, t, 0.0),
            AXIS_Y_COLOR,
        );
        gizmos.line(
            coords::world_pos(-TICK_HALF, 0.0, t),
            coords::world_pos(TICK_HALF, 0.0, t),
            AXIS_Z_COLOR,
        );
    }

    // Display volume outline; the sampled domain and the Z display range
    // happen to form a cube centered on the origin.
    gizmos.cuboid(
        Transform::from_scale(Vec3::new(
            GRID_MAX - GRID_MIN,
            Z_MAX - Z_MIN,
            GRID_MAX - GRID_MIN,
        )),
        BOX_COLOR,
    );
}
