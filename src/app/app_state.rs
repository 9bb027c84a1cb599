//! Centralized application state for the ruler demo.

use timeruler::{RulerSettings, ThemeManager, TimeRuler};

/// Demo state: the ruler being edited plus what the host UI needs around it.
pub struct AppState {
    /// The ruler under edit
    pub ruler: TimeRuler,

    /// Available themes; the current one styles both the UI and the ruler
    pub themes: ThemeManager,

    /// Message shown in the status bar after load/save (error or confirmation)
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_settings(&RulerSettings::default())
    }
}

impl AppState {
    /// Creates the state from loaded settings.
    ///
    /// An unknown theme name falls back to the default theme for the UI; the
    /// ruler keeps the stored style either way.
    pub fn from_settings(settings: &RulerSettings) -> Self {
        let mut themes = ThemeManager::new();
        if let Err(err) = themes.set_current_theme(&settings.theme) {
            log::warn!("{err}, using {}", themes.current_theme_name());
        }

        Self {
            ruler: TimeRuler::from_settings(settings),
            themes,
            status_message: None,
        }
    }

    /// Snapshot of the current ruler as settings.
    pub fn settings(&self) -> RulerSettings {
        RulerSettings {
            theme: self.themes.current_theme_name().to_string(),
            style: *self.ruler.style(),
            geometry: *self.ruler.geometry(),
        }
    }

    /// Replaces the ruler's settings and theme selection.
    pub fn apply_settings(&mut self, settings: &RulerSettings) {
        if let Err(err) = self.themes.set_current_theme(&settings.theme) {
            log::warn!("{err}, keeping {}", self.themes.current_theme_name());
        }
        self.ruler.apply_settings(settings);
    }
}
