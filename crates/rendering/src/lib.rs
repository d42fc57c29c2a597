use bevy::prelude::*;

pub mod anchor_marker;
pub mod axes;
pub mod camera;
pub mod coords;
pub mod egui_guard;
pub mod normal_arrow;
pub mod surface;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<camera::CameraPanDrag>()
            .init_resource::<camera::CameraOrbitDrag>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    setup_lighting,
                    surface::spawn_surface,
                    anchor_marker::spawn_anchor_marker,
                ),
            )
            .add_systems(
                Update,
                (
                    camera::camera_pan_keyboard,
                    camera::camera_pan_drag,
                    camera::camera_orbit_drag,
                    camera::camera_zoom,
                    camera::apply_orbit_camera,
                ),
            )
            .add_systems(
                Update,
                (
                    surface::rebuild_surface,
                    anchor_marker::sync_anchor_marker,
                    surface::draw_surface_wireframe,
                    normal_arrow::draw_normal_arrow,
                    axes::draw_axes,
                ),
            );
    }
}

fn setup_lighting(mut commands: Commands) {
    // Ambient light for baseline illumination
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.95, 0.95, 1.0),
        brightness: 300.0,
    });

    // Directional light angled from above
    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_4,
            std::f32::consts::FRAC_PI_6,
            0.0,
        )),
    ));
}
