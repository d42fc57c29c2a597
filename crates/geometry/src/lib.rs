use bevy::prelude::*;

pub mod config;
pub mod height_field;
pub mod plane;

use height_field::SampleGrid;
use plane::PlaneParams;

pub struct GeometryPlugin;

impl Plugin for GeometryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlaneParams>()
            .init_resource::<SampleGrid>();
    }
}
