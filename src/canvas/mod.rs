//! Drawing surfaces for the time ruler.
//!
//! The ruler draws through [`RulerCanvas`], a small slice of a painter's API
//! in the ruler's local coordinates (origin at the control's top-left):
//! - [`PainterCanvas`] paints into an egui [`egui::Painter`]
//! - [`RecordingCanvas`] records commands, for headless hosts and tests

mod painter_canvas;
mod recording;

pub use painter_canvas::PainterCanvas;
pub use recording::{DrawCommand, RecordingCanvas};

pub use crate::domain::ViewClip;

use egui::{Color32, FontId, Pos2, Rect, Stroke, Vec2};

/// Font, color and bounding box of a text label.
///
/// Labels are laid out without wrapping, anchored at their top-left corner,
/// and clipped to `max_size`.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub font: FontId,
    pub color: Color32,
    pub max_size: Vec2,
}

/// A surface the ruler can paint on.
pub trait RulerCanvas {
    /// Full size of the ruler control
    fn size(&self) -> Vec2;

    /// The active clip, or `None` when the whole control is visible
    fn clip(&self) -> Option<ViewClip>;

    /// Fills a rectangle
    fn fill_rect(&mut self, rect: Rect, color: Color32);

    /// Draws a straight line
    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke);

    /// Draws a text label with its top-left corner at `pos`
    fn text(&mut self, pos: Pos2, text: &str, style: &LabelStyle);
}
