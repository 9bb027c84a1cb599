//! Ruler panel UI rendering
//!
//! Hosts the ruler in a horizontal scroll area, the way a timeline editor
//! places it above its tracks.

use crate::app::AppState;
use egui::ScrollArea;
use timeruler::DEFAULT_RULER_HEIGHT;

/// Renders the scrollable ruler.
pub fn render_ruler_panel(ui: &mut egui::Ui, state: &mut AppState) {
    ScrollArea::horizontal()
        .id_salt("ruler_scroll_area")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            state.ruler.show(ui, DEFAULT_RULER_HEIGHT);
        });

    ui.add_space(8.0);

    let geometry = state.ruler.geometry();
    if !geometry.is_well_formed() {
        ui.colored_label(
            ui.visuals().warn_fg_color,
            "Geometry contains negative or non-finite values; the ruler may render degenerate marks.",
        );
    }
}
