//! Theme selection and application.

use crate::app::AppState;

/// Coordinates theme switching for the UI and the ruler.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Applies the current theme to the egui context.
    ///
    /// Called every frame to ensure theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let theme = state.themes.current_theme();
        let mut visuals = if theme.is_light() {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };

        state.themes.apply_theme(theme, &mut visuals);
        ctx.set_visuals(visuals);
    }

    /// Switches to `name` and restyles the ruler with that theme's palette.
    ///
    /// Unknown names leave everything unchanged.
    pub fn select_theme(state: &mut AppState, name: &str) {
        if let Err(err) = state.themes.set_current_theme(name) {
            log::warn!("{err}");
            return;
        }
        let style = state.themes.current_theme().ruler_style();
        state.ruler.set_style(style);
        log::debug!("Switched to theme {name}");
    }
}
