use bevy::prelude::*;

use geometry::plane::PlaneParams;

use crate::coords;

/// Arrow length multiplier on the raw normal vector. The magnitude is kept,
/// so shrinking a component visibly shortens the arrow.
const ARROW_SCALE: f32 = 2.0;
const HEAD_LENGTH: f32 = 0.5;
const HEAD_HALF_WIDTH: f32 = 0.25;
const ARROW_COLOR: Color = Color::srgb(0.85, 0.15, 0.15);

/// Draw the normal vector as a red arrow anchored at the plane's anchor
/// point. Immediate-mode: redrawn from current parameters every frame, so it
/// can never go stale.
pub fn draw_normal_arrow(params: Res<PlaneParams>, mut gizmos: Gizmos) {
    let start = coords::to_world(params.anchor());
    let vec = coords::to_world(params.normal()) * ARROW_SCALE;
    let tip = start + vec;

    gizmos.line(start, tip, ARROW_COLOR);

    let dir = vec.normalize_or_zero();
    if dir == Vec3::ZERO {
        // zero normal: no direction to point a head in
        return;
    }

    // Head wings perpendicular to the shaft
    let side = dir.cross(Vec3::Y).normalize_or_zero();
    let side = if side == Vec3::ZERO { Vec3::X } else { side };
    let head_base = tip - dir * HEAD_LENGTH.min(vec.length());
    gizmos.line(head_base + side * HEAD_HALF_WIDTH, tip, ARROW_COLOR);
    gizmos.line(head_base - side * HEAD_HALF_WIDTH, tip, ARROW_COLOR);
}
