use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod panel;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_dark_theme)
            .add_systems(Update, panel::plane_panel_ui);
    }
}
