//! Application-level modules for the ruler demo.
//!
//! This module contains the demo's state and the coordinators that persist
//! settings and apply themes.

mod app_state;
mod settings_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use settings_coordinator::SettingsCoordinator;
pub use theme_coordinator::ThemeCoordinator;
