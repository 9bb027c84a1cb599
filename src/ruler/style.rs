//! Ruler colors and line thickness.

use egui::Color32;
use serde::{Deserialize, Serialize};

/// Brush used for every color until the host sets its own (mid gray).
pub const DEFAULT_BRUSH: Color32 = Color32::from_rgb(128, 128, 128);

/// Default tick and divider line thickness in pixels.
pub const DEFAULT_TICK_THICKNESS: f32 = 1.0;

/// Visual style of the ruler.
///
/// Every color is optional. An unset color skips whatever it would paint:
/// - `background`: the background fill
/// - `divider`: the horizontal divider
/// - `foreground`: the tick labels
/// - `tick_line`: both tick passes, labels included
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerStyle {
    pub background: Option<Color32>,
    pub divider: Option<Color32>,
    pub foreground: Option<Color32>,
    pub tick_line: Option<Color32>,
    /// Thickness shared by tick lines and the divider
    pub tick_thickness: f32,
}

impl Default for RulerStyle {
    fn default() -> Self {
        Self {
            background: Some(DEFAULT_BRUSH),
            divider: Some(DEFAULT_BRUSH),
            foreground: Some(DEFAULT_BRUSH),
            tick_line: Some(DEFAULT_BRUSH),
            tick_thickness: DEFAULT_TICK_THICKNESS,
        }
    }
}

impl RulerStyle {
    /// Stroke for tick lines, if a tick brush is set.
    pub fn tick_stroke(&self) -> Option<egui::Stroke> {
        self.tick_line.map(|color| egui::Stroke::new(self.tick_thickness, color))
    }

    /// Stroke for the divider, if a divider brush is set.
    pub fn divider_stroke(&self) -> Option<egui::Stroke> {
        self.divider.map(|color| egui::Stroke::new(self.tick_thickness, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_brushes_are_gray() {
        let style = RulerStyle::default();
        assert_eq!(style.background, Some(DEFAULT_BRUSH));
        assert_eq!(style.foreground, Some(DEFAULT_BRUSH));
        assert_eq!(style.tick_thickness, 1.0);
    }

    #[test]
    fn test_strokes_follow_brushes() {
        let mut style = RulerStyle {
            tick_thickness: 2.5,
            ..Default::default()
        };
        assert_eq!(style.tick_stroke(), Some(egui::Stroke::new(2.5, DEFAULT_BRUSH)));

        style.tick_line = None;
        style.divider = Some(Color32::RED);
        assert_eq!(style.tick_stroke(), None);
        assert_eq!(style.divider_stroke(), Some(egui::Stroke::new(2.5, Color32::RED)));
    }
}
