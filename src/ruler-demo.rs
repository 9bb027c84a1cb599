//! Time Ruler Demo
//!
//! An interactive host for the time ruler widget using the egui framework:
//! - The ruler inside a horizontally scrollable area
//! - A controls panel editing every ruler property live
//! - Theme selection that restyles the ruler
//! - Settings persisted across sessions and loadable from JSON files
//!
//! Usage: `ruler-demo [SETTINGS.json]`

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::{Path, PathBuf};
use timeruler::RulerSettings;

mod app;
mod ui;

use app::{AppState, SettingsCoordinator, ThemeCoordinator};
use ui::panel_manager::{PanelInteraction, PanelManager};

const RULER_SETTINGS_KEY: &str = "ruler_settings";

/// Entry point: initializes logging and launches the demo window.
fn main() -> eframe::Result {
    env_logger::init();

    let settings_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 420.0])
            .with_title("Time Ruler"),
        ..Default::default()
    };

    eframe::run_native(
        "Time Ruler",
        options,
        Box::new(move |cc| Ok(Box::new(RulerDemoApp::new(cc, settings_file)))),
    )
}

/// The ruler demo application.
struct RulerDemoApp {
    state: AppState,
}

impl RulerDemoApp {
    /// Creates the app from a settings file if one was given, otherwise from
    /// persistent storage.
    fn new(cc: &eframe::CreationContext, settings_file: Option<PathBuf>) -> Self {
        let stored: RulerSettings =
            SettingsCoordinator::load_setting_or(cc.storage, RULER_SETTINGS_KEY, RulerSettings::default());

        let Some(path) = settings_file else {
            return Self {
                state: AppState::from_settings(&stored),
            };
        };

        match RulerSettings::load(&path) {
            Ok(settings) => Self {
                state: AppState::from_settings(&settings),
            },
            Err(err) => {
                log::error!("{err:#}");
                let mut state = AppState::from_settings(&stored);
                state.status_message = Some(format!("{err:#}"));
                Self { state }
            }
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::ThemeSelected(name) => {
                ThemeCoordinator::select_theme(&mut self.state, &name);
            }
            PanelInteraction::LoadSettingsRequested(path) => self.load_settings(&path),
            PanelInteraction::SaveSettingsRequested(path) => self.save_settings(&path),
        }
    }

    fn load_settings(&mut self, path: &Path) {
        self.state.status_message = Some(match RulerSettings::load(path) {
            Ok(settings) => {
                self.state.apply_settings(&settings);
                format!("Loaded {}", path.display())
            }
            Err(err) => {
                log::error!("{err:#}");
                format!("{err:#}")
            }
        });
    }

    fn save_settings(&mut self, path: &Path) {
        self.state.status_message = Some(match self.state.settings().save(path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(err) => {
                log::error!("{err:#}");
                format!("{err:#}")
            }
        });
    }
}

impl eframe::App for RulerDemoApp {
    /// Called when the app is being shut down - ensures settings are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_setting(storage, RULER_SETTINGS_KEY, &self.state.settings());
    }

    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        let redraws_before = self.state.ruler.redraw_requests();

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }

        // Changes made after the ruler was painted this frame
        if self.state.ruler.take_repaint_request() {
            ctx.request_repaint();
        }

        // Persist after property edits (for crash resilience)
        if self.state.ruler.redraw_requests() != redraws_before {
            if let Some(storage) = frame.storage_mut() {
                SettingsCoordinator::save_setting(storage, RULER_SETTINGS_KEY, &self.state.settings());
            }
        }
    }
}
