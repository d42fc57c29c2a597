//! Plane parameter panel.
//!
//! Six sliders — anchor x0/y0/z0 and normal A/B/C — each writing back to
//! [`PlaneParams`] only when it actually moved, plus the current plane
//! equation, an axis legend, and a reset button.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use geometry::config::{ANCHOR_MAX, ANCHOR_MIN, NORMAL_MAX, NORMAL_MIN};
use geometry::plane::PlaneParams;

pub fn plane_panel_ui(mut contexts: EguiContexts, mut params: ResMut<PlaneParams>) {
    egui::Window::new("Plane & Normal")
        .resizable(false)
        .default_width(280.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.spacing_mut().item_spacing.y = 8.0;

            ui.heading(equation_label(&params));
            ui.separator();

            // Local copy: the resource is only written (and change detection
            // only fires) when a slider actually moved.
            let mut edited = *params;
            let mut changed = false;

            ui.label("Anchor point:");
            changed |= ui
                .add(egui::Slider::new(&mut edited.x0, ANCHOR_MIN..=ANCHOR_MAX).text("x0"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut edited.y0, ANCHOR_MIN..=ANCHOR_MAX).text("y0"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut edited.z0, ANCHOR_MIN..=ANCHOR_MAX).text("z0"))
                .changed();

            ui.separator();

            ui.label("Normal vector:");
            changed |= ui
                .add(egui::Slider::new(&mut edited.a, NORMAL_MIN..=NORMAL_MAX).text("A"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut edited.b, NORMAL_MIN..=NORMAL_MAX).text("B"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut edited.c, NORMAL_MIN..=NORMAL_MAX).text("C"))
                .changed();

            if changed {
                *params = edited;
            }

            ui.separator();

            if ui.button("Reset to defaults").clicked() {
                *params = PlaneParams::default();
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Axes:");
                ui.colored_label(egui::Color32::from_rgb(217, 64, 64), "X");
                ui.colored_label(egui::Color32::from_rgb(64, 179, 64), "Y");
                ui.colored_label(egui::Color32::from_rgb(64, 102, 230), "Z (up)");
            });
        });
}

/// Current plane equation `Ax + By + Cz + D = 0`, with D derived from the
/// anchor and normal.
fn equation_label(params: &PlaneParams) -> String {
    let d = params.offset();
    format!(
        "{:.2}x {} {:.2}y {} {:.2}z {} {:.2} = 0",
        params.a,
        sign(params.b),
        params.b.abs(),
        sign(params.c),
        params.c.abs(),
        sign(d),
        d.abs(),
    )
}

fn sign(v: f32) -> char {
    if v < 0.0 {
        '-'
    } else {
        '+'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geometry::config::{GRID_MAX, GRID_MIN, Z_MAX, Z_MIN};

    #[test]
    fn test_equation_label_for_initial_parameters() {
        // anchor (1, 2, 1), normal (2, -3, 1) gives d = 3
        let label = equation_label(&PlaneParams::default());
        assert_eq!(label, "2.00x - 3.00y + 1.00z + 3.00 = 0");
    }

    #[test]
    fn test_equation_label_with_negative_offset() {
        let params = PlaneParams {
            x0: 1.0,
            y0: 1.0,
            z0: 1.0,
            a: 1.0,
            b: 1.0,
            c: 0.0,
        };
        assert_eq!(equation_label(&params), "1.00x + 1.00y + 0.00z - 2.00 = 0");
    }

    #[test]
    fn test_control_ranges_cover_documented_bounds() {
        assert_eq!((ANCHOR_MIN, ANCHOR_MAX), (-3.0, 3.0));
        assert_eq!((NORMAL_MIN, NORMAL_MAX), (-5.0, 5.0));
        // Anchors stay inside the displayed volume
        assert!(ANCHOR_MIN >= GRID_MIN && ANCHOR_MAX <= GRID_MAX);
        assert!(ANCHOR_MIN >= Z_MIN && ANCHOR_MAX <= Z_MAX);
    }
}
