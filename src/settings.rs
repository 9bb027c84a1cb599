//! Persistable ruler settings.
//!
//! A [`RulerSettings`] bundles everything a host needs to recreate a ruler:
//! its style, its geometry and the name of the theme the style came from.
//! Settings round-trip through JSON, either as a string (for eframe storage)
//! or as a file.

use crate::ruler::{RulerGeometry, RulerStyle};
use crate::theme::{ThemeManager, DEFAULT_THEME};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Style, geometry and theme of a ruler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerSettings {
    /// Theme the style was derived from
    pub theme: String,
    pub style: RulerStyle,
    pub geometry: RulerGeometry,
}

impl Default for RulerSettings {
    /// Dark theme, 50px minute spacing, 60 minutes at 2 ticks per interval.
    fn default() -> Self {
        let style = ThemeManager::new().current_theme().ruler_style();
        Self {
            theme: DEFAULT_THEME.to_string(),
            style,
            geometry: RulerGeometry::new(50.0, 60, 2.0, 0.0),
        }
    }
}

impl RulerSettings {
    /// Parses settings from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid ruler settings JSON")
    }

    /// Serializes settings to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize ruler settings")
    }

    /// Loads settings from a JSON file.
    ///
    /// # Errors
    /// Fails if the file cannot be read or does not contain valid settings.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read ruler settings from {}", path.display()))?;
        let settings = Self::from_json(&json)
            .with_context(|| format!("Failed to parse ruler settings in {}", path.display()))?;
        log::info!("Loaded ruler settings from {}", path.display());
        Ok(settings)
    }

    /// Saves settings to a JSON file, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write ruler settings to {}", path.display()))?;
        log::info!("Saved ruler settings to {}", path.display());
        Ok(())
    }

    /// Switches to a named theme, replacing the style with the theme's.
    pub fn apply_theme(&mut self, themes: &ThemeManager, name: &str) -> Result<()> {
        let theme = themes
            .get_theme(name)
            .with_context(|| format!("Theme '{}' not found", name))?;
        self.theme = theme.name.clone();
        self.style = theme.ruler_style();
        Ok(())
    }
}
