use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use geometry::plane::PlaneParams;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Plane & Normal Visualizer".to_string(),
                resolution: (1280.0, 720.0).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        // The scene only changes on input, so idle frames can wait for events.
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
            unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
        })
        .add_plugins((
            geometry::GeometryPlugin,
            rendering::RenderingPlugin,
            ui::UiPlugin,
        ))
        .add_systems(Startup, log_startup)
        .run();
}

fn log_startup(params: Res<PlaneParams>) {
    info!(
        "plane visualizer ready: anchor {:?}, normal {:?}",
        params.anchor(),
        params.normal()
    );
}
