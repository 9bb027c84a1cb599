//! Controls panel UI rendering
//!
//! Side panel with an editor for every ruler property, the theme selector and
//! the settings file buttons.

use crate::app::AppState;
use egui::Color32;
use std::path::PathBuf;
use timeruler::ruler::DEFAULT_BRUSH;

/// Result of user interaction with the controls panel
pub enum ControlsInteraction {
    /// User picked a theme from the combo box
    ThemeSelected(String),
    /// User chose a settings file to load
    LoadSettingsRequested(PathBuf),
    /// User chose where to save the settings
    SaveSettingsRequested(PathBuf),
}

/// Renders the controls panel.
///
/// Property edits go straight to the ruler's setters; the setters ignore
/// values that did not change, so redrawing the panel every frame is free.
pub fn render_controls_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<ControlsInteraction> {
    let mut interaction = None;

    ui.heading("Geometry");
    egui::Grid::new("ruler_geometry_grid")
        .num_columns(2)
        .show(ui, |ui| {
            let ruler = &mut state.ruler;

            ui.label("Marker spacing");
            let mut spacing = ruler.marker_spacing();
            ui.add(egui::DragValue::new(&mut spacing).range(0.0..=1000.0).speed(0.5).suffix(" px"));
            ruler.set_marker_spacing(spacing);
            ui.end_row();

            ui.label("Marker count");
            let mut count = ruler.marker_count();
            ui.add(egui::DragValue::new(&mut count).range(0..=100_000));
            ruler.set_marker_count(count);
            ui.end_row();

            ui.label("Ticks per interval");
            let mut ticks = ruler.ticks_per_interval();
            ui.add(egui::DragValue::new(&mut ticks).range(0.0..=100.0).speed(0.1));
            ruler.set_ticks_per_interval(ticks);
            ui.end_row();

            ui.label("Tick spacing");
            let mut tick_spacing = ruler.tick_spacing();
            ui.add(egui::DragValue::new(&mut tick_spacing).range(0.0..=1000.0).speed(0.5).suffix(" px"));
            ruler.set_tick_spacing(tick_spacing);
            ui.end_row();
        });

    ui.separator();
    ui.heading("Style");
    egui::Grid::new("ruler_style_grid")
        .num_columns(2)
        .show(ui, |ui| {
            let ruler = &mut state.ruler;

            if let Some(color) = brush_editor(ui, "Background", ruler.background()) {
                ruler.set_background(color);
            }
            if let Some(color) = brush_editor(ui, "Divider", ruler.divider_color()) {
                ruler.set_divider_color(color);
            }
            if let Some(color) = brush_editor(ui, "Labels", ruler.foreground()) {
                ruler.set_foreground(color);
            }
            if let Some(color) = brush_editor(ui, "Tick lines", ruler.tick_line_color()) {
                ruler.set_tick_line_color(color);
            }

            ui.label("Thickness");
            let mut thickness = ruler.tick_thickness();
            ui.add(egui::DragValue::new(&mut thickness).range(0.0..=10.0).speed(0.05));
            ruler.set_tick_thickness(thickness);
            ui.end_row();
        });

    ui.separator();
    ui.horizontal(|ui| {
        ui.label("Theme");
        let current = state.themes.current_theme_name().to_string();
        egui::ComboBox::from_id_salt("theme_selector")
            .selected_text(&current)
            .show_ui(ui, |ui| {
                for name in state.themes.list_themes() {
                    if ui.selectable_label(name == current, name).clicked() && name != current {
                        interaction = Some(ControlsInteraction::ThemeSelected(name.to_string()));
                    }
                }
            });
    });

    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("📂 Load settings").clicked() {
            if let Some(path) = settings_dialog().pick_file() {
                interaction = Some(ControlsInteraction::LoadSettingsRequested(path));
            }
        }
        if ui.button("💾 Save settings").clicked() {
            if let Some(path) = settings_dialog().set_file_name("ruler.json").save_file() {
                interaction = Some(ControlsInteraction::SaveSettingsRequested(path));
            }
        }
    });

    interaction
}

/// Color editor with an on/off toggle for an optional brush.
///
/// Returns the new brush when the user changed it.
fn brush_editor(ui: &mut egui::Ui, label: &str, current: Option<Color32>) -> Option<Option<Color32>> {
    let mut enabled = current.is_some();
    let mut color = current.unwrap_or(DEFAULT_BRUSH);

    let toggled = ui.checkbox(&mut enabled, label).changed();
    let edited = ui
        .add_enabled_ui(enabled, |ui| ui.color_edit_button_srgba(&mut color).changed())
        .inner;
    ui.end_row();

    (toggled || edited).then(|| enabled.then_some(color))
}

fn settings_dialog() -> rfd::FileDialog {
    let mut dialog = rfd::FileDialog::new().add_filter("Ruler settings", &["json"]);
    if let Ok(cwd) = std::env::current_dir() {
        dialog = dialog.set_directory(cwd);
    }
    dialog
}
