//! Egui input guard: camera gestures must not start underneath the parameter
//! panel, and scrolling the panel must not zoom the scene.

use bevy_egui::EguiContexts;

/// Returns `true` when egui wants the pointer — the cursor is over a panel or
/// egui is mid-drag. Camera input systems early-return on `true`.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}
