//! Panel orchestration and layout management.

use crate::app::AppState;
use crate::ui::{controls_panel, ruler_panel, status_bar};

/// Result of panel interactions that need to be handled by the application.
pub enum PanelInteraction {
    ThemeSelected(String),
    LoadSettingsRequested(std::path::PathBuf),
    SaveSettingsRequested(std::path::PathBuf),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction = None;

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        egui::SidePanel::left("controls_panel")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                interaction = controls_panel::render_controls_panel(ui, state).map(|controls| match controls {
                    controls_panel::ControlsInteraction::ThemeSelected(name) => PanelInteraction::ThemeSelected(name),
                    controls_panel::ControlsInteraction::LoadSettingsRequested(path) => {
                        PanelInteraction::LoadSettingsRequested(path)
                    }
                    controls_panel::ControlsInteraction::SaveSettingsRequested(path) => {
                        PanelInteraction::SaveSettingsRequested(path)
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ruler_panel::render_ruler_panel(ui, state);
        });

        interaction
    }
}
