use bevy::prelude::*;

use geometry::plane::PlaneParams;

use crate::coords;

/// Marker for the single anchor-point entity.
#[derive(Component)]
pub struct AnchorMarker;

const MARKER_RADIUS: f32 = 0.15;

pub fn spawn_anchor_marker(
    mut commands: Commands,
    params: Res<PlaneParams>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(MARKER_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::BLACK,
            unlit: true,
            ..default()
        })),
        Transform::from_translation(coords::to_world(params.anchor())),
        AnchorMarker,
    ));
}

/// Keep the marker on the anchor point as the parameters move.
pub fn sync_anchor_marker(
    params: Res<PlaneParams>,
    mut query: Query<&mut Transform, With<AnchorMarker>>,
) {
    if !params.is_changed() {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    transform.translation = coords::to_world(params.anchor());
}
