//! Status bar UI rendering

use crate::app::AppState;
use egui::RichText;

/// Renders the status bar with the redraw counter and the last message.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Redraw requests: {}", state.ruler.redraw_requests())).strong());
        ui.label(RichText::new("|").strong());
        ui.label(format!("Content width: {:.0} px", state.ruler.content_width()));

        if let Some(message) = &state.status_message {
            ui.label(RichText::new("|").strong());
            ui.label(message);
        }
    });
}
