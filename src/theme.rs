//! Theme support for the time ruler
//!
//! Named color palettes (Light, Dark, Dracula, One Dark Pro) for the ruler and
//! its host UI, and a small manager to look them up by name.
//!
//! # Examples
//!
//! ```
//! use timeruler::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! let style = dracula.ruler_style();
//! assert_eq!(style.background, Some(dracula.colors.extreme_background));
//! ```

use crate::ruler::{RulerStyle, DEFAULT_TICK_THICKNESS};
use egui::Color32;
use std::collections::HashMap;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "Dark";

/// Color palette of a theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Host UI
    pub panel_background: Color32,
    pub extreme_background: Color32,
    pub selection: Color32,
    pub hover: Color32,

    // Ruler
    pub text: Color32,
    pub text_dim: Color32,
    pub border: Color32,
}

/// A theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

impl Theme {
    /// Ruler style derived from this palette.
    ///
    /// Labels use the text color, ticks the dimmed text color, the divider the
    /// border color, on the extreme background.
    pub fn ruler_style(&self) -> RulerStyle {
        RulerStyle {
            background: Some(self.colors.extreme_background),
            divider: Some(self.colors.border),
            foreground: Some(self.colors.text),
            tick_line: Some(self.colors.text_dim),
            tick_thickness: DEFAULT_TICK_THICKNESS,
        }
    }

    /// Returns true for light palettes.
    pub fn is_light(&self) -> bool {
        self.name == "Light"
    }
}

/// Centralized theme manager providing access to all available themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
    /// Returned when the current name is not registered
    fallback: Theme,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        for theme in [light_theme(), dark_theme(), dracula_theme(), one_dark_pro_theme()] {
            themes.insert(theme.name.clone(), theme);
        }

        Self {
            themes,
            current_theme_name: DEFAULT_THEME.to_string(),
            fallback: dark_theme(),
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns a sorted list of all available theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Gets the currently selected theme, falling back to the default theme
    pub fn current_theme(&self) -> &Theme {
        self.themes
            .get(&self.current_theme_name)
            .unwrap_or(&self.fallback)
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// Sets the current theme by name
    pub fn set_current_theme(&mut self, name: &str) -> anyhow::Result<()> {
        if !self.themes.contains_key(name) {
            anyhow::bail!("Theme '{}' not found", name);
        }
        self.current_theme_name = name.to_string();
        Ok(())
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;
        visuals.override_text_color = Some(colors.text);
        visuals.selection.bg_fill = colors.selection;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme with egui default colors".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),
            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),
            border: Color32::from_rgb(160, 160, 160),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with egui default colors".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),
            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),
            border: Color32::from_rgb(100, 100, 100),
        },
    }
}

/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula theme color palette".to_string(),
        colors: ThemeColors {
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),
            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            border: hex_to_color32("#bd93f9"),
        },
    }
}

/// Official colors from: https://github.com/Binaryify/OneDark-Pro
fn one_dark_pro_theme() -> Theme {
    Theme {
        name: "One Dark Pro".to_string(),
        description: "VSCode One Dark Pro color palette".to_string(),
        colors: ThemeColors {
            panel_background: hex_to_color32("#282c34"),
            extreme_background: hex_to_color32("#21252b"),
            selection: hex_to_color32("#4b5263"),
            hover: hex_to_color32("#4b5263"),
            text: hex_to_color32("#abb2bf"),
            text_dim: hex_to_color32("#5c6370"),
            border: hex_to_color32("#61afef"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Dracula", "Light", "One Dark Pro"]);
        assert_eq!(manager.current_theme().name, DEFAULT_THEME);
    }

    #[test]
    fn test_set_current_theme() {
        let mut manager = ThemeManager::new();
        manager.set_current_theme("Dracula").unwrap();
        assert_eq!(manager.current_theme().name, "Dracula");
        assert!(manager.set_current_theme("Solarized").is_err());
        assert_eq!(manager.current_theme_name(), "Dracula");
    }

    #[test]
    fn test_ruler_style_uses_palette() {
        let manager = ThemeManager::new();
        let light = manager.get_theme("Light").unwrap();
        assert!(light.is_light());
        let style = light.ruler_style();
        assert_eq!(style.foreground, Some(Color32::BLACK));
        assert_eq!(style.background, Some(Color32::WHITE));
        assert_eq!(style.tick_thickness, 1.0);
    }

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#282a36"), Color32::from_rgb(0x28, 0x2a, 0x36));
        assert_eq!(hex_to_color32("ffffff"), Color32::WHITE);
        assert_eq!(hex_to_color32("#fff"), Color32::BLACK);
    }

    #[test]
    fn test_hex_to_color32_non_ascii_falls_back() {
        // Six bytes, but 'é' spans two of them
        assert_eq!("aéaaa".len(), 6);
        assert_eq!(hex_to_color32("aéaaa"), Color32::BLACK);
        assert_eq!(hex_to_color32("#ééé"), Color32::BLACK);
    }

    #[test]
    fn test_current_theme_without_registered_default() {
        let mut manager = ThemeManager::new();
        manager.themes.remove(DEFAULT_THEME);
        assert_eq!(manager.current_theme().name, DEFAULT_THEME);
        assert!(manager.get_theme(DEFAULT_THEME).is_none());
    }
}
