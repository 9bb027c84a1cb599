//! The time ruler widget.
//!
//! A horizontal ruler for a timeline editor. Every paint draws, in order:
//! 1. The background fill
//! 2. Minute ticks, each labeled with its tick index
//! 3. Sub-minute ticks at a sixth of the minute spacing (20-second marks)
//! 4. A horizontal divider at half height
//!
//! Properties are plain setters. A setter that changes a value marks the ruler
//! dirty and counts one redraw request; the egui adapter in [`widget`] turns
//! a pending request into `request_repaint`. Nothing is cached between paints.

mod geometry;
mod style;
mod widget;

pub use geometry::RulerGeometry;
pub use style::{RulerStyle, DEFAULT_BRUSH, DEFAULT_TICK_THICKNESS};
pub use widget::DEFAULT_RULER_HEIGHT;

use crate::canvas::{LabelStyle, RulerCanvas};
use crate::domain::{self, RenderWindow, ViewClip};
use crate::settings::RulerSettings;
use egui::{pos2, vec2, Color32, FontId, Rect, Vec2};

/// Label offset from its tick's top.
pub const LABEL_OFFSET: Vec2 = vec2(4.0, 2.0);
/// Label font size.
pub const LABEL_FONT_SIZE: f32 = 14.0;
/// Width of the box a label is clipped to.
pub const LABEL_BOX_WIDTH: f32 = 100.0;
/// Minute ticks start this fraction of the height below the top.
pub const MINUTE_TICK_TOP_FRACTION: f32 = 0.1;
/// Sub-minute ticks rise from the bottom to `height / SUB_TICK_HEIGHT_DIVISOR`.
pub const SUB_TICK_HEIGHT_DIVISOR: f32 = 1.7;

/// Horizontal time ruler with minute marks, sub-minute marks and a divider.
#[derive(Debug, Clone, Default)]
pub struct TimeRuler {
    style: RulerStyle,
    geometry: RulerGeometry,
    needs_repaint: bool,
    redraw_requests: u64,
}

impl TimeRuler {
    /// Creates a ruler with default style (gray brushes) and empty geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ruler with the given style and geometry.
    pub fn with_style_and_geometry(style: RulerStyle, geometry: RulerGeometry) -> Self {
        Self {
            style,
            geometry,
            needs_repaint: false,
            redraw_requests: 0,
        }
    }

    /// Creates a ruler from persisted settings.
    pub fn from_settings(settings: &RulerSettings) -> Self {
        Self::with_style_and_geometry(settings.style, settings.geometry)
    }

    // ===== Property Queries =====

    pub fn style(&self) -> &RulerStyle {
        &self.style
    }

    pub fn geometry(&self) -> &RulerGeometry {
        &self.geometry
    }

    pub fn background(&self) -> Option<Color32> {
        self.style.background
    }

    pub fn divider_color(&self) -> Option<Color32> {
        self.style.divider
    }

    pub fn foreground(&self) -> Option<Color32> {
        self.style.foreground
    }

    pub fn tick_line_color(&self) -> Option<Color32> {
        self.style.tick_line
    }

    pub fn tick_thickness(&self) -> f32 {
        self.style.tick_thickness
    }

    pub fn marker_spacing(&self) -> f32 {
        self.geometry.marker_spacing
    }

    pub fn marker_count(&self) -> u32 {
        self.geometry.marker_count
    }

    pub fn ticks_per_interval(&self) -> f32 {
        self.geometry.ticks_per_interval
    }

    pub fn tick_spacing(&self) -> f32 {
        self.geometry.tick_spacing
    }

    // ===== Property Mutations =====

    pub fn set_background(&mut self, color: Option<Color32>) {
        if replace(&mut self.style.background, color) {
            self.invalidate("background");
        }
    }

    pub fn set_divider_color(&mut self, color: Option<Color32>) {
        if replace(&mut self.style.divider, color) {
            self.invalidate("divider_color");
        }
    }

    pub fn set_foreground(&mut self, color: Option<Color32>) {
        if replace(&mut self.style.foreground, color) {
            self.invalidate("foreground");
        }
    }

    pub fn set_tick_line_color(&mut self, color: Option<Color32>) {
        if replace(&mut self.style.tick_line, color) {
            self.invalidate("tick_line_color");
        }
    }

    pub fn set_tick_thickness(&mut self, thickness: f32) {
        if replace_f32(&mut self.style.tick_thickness, thickness) {
            self.invalidate("tick_thickness");
        }
    }

    pub fn set_marker_spacing(&mut self, spacing: f32) {
        if replace_f32(&mut self.geometry.marker_spacing, spacing) {
            self.invalidate("marker_spacing");
        }
    }

    pub fn set_marker_count(&mut self, count: u32) {
        if replace(&mut self.geometry.marker_count, count) {
            self.invalidate("marker_count");
        }
    }

    pub fn set_ticks_per_interval(&mut self, ticks: f32) {
        if replace_f32(&mut self.geometry.ticks_per_interval, ticks) {
            self.invalidate("ticks_per_interval");
        }
    }

    /// Sets the reserved tick spacing. Rendering ignores it, but it is still
    /// a property change and requests a redraw.
    pub fn set_tick_spacing(&mut self, spacing: f32) {
        if replace_f32(&mut self.geometry.tick_spacing, spacing) {
            self.invalidate("tick_spacing");
        }
    }

    /// Replaces the whole style; one redraw request if anything differs.
    pub fn set_style(&mut self, style: RulerStyle) {
        if !same_style(&self.style, &style) {
            self.style = style;
            self.invalidate("style");
        }
    }

    /// Replaces the whole geometry; one redraw request if anything differs.
    pub fn set_geometry(&mut self, geometry: RulerGeometry) {
        if !same_geometry(&self.geometry, &geometry) {
            self.geometry = geometry;
            self.invalidate("geometry");
        }
    }

    /// Applies style and geometry from settings; one redraw request at most.
    pub fn apply_settings(&mut self, settings: &RulerSettings) {
        let changed = !same_style(&self.style, &settings.style)
            || !same_geometry(&self.geometry, &settings.geometry);
        if changed {
            self.style = settings.style;
            self.geometry = settings.geometry;
            self.invalidate("settings");
        }
    }

    // ===== Invalidation =====

    /// Returns true if a property changed since the last repaint was taken.
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Total redraw requests issued by property changes.
    pub fn redraw_requests(&self) -> u64 {
        self.redraw_requests
    }

    /// Clears and returns the pending repaint flag.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    fn invalidate(&mut self, property: &str) {
        self.needs_repaint = true;
        self.redraw_requests += 1;
        log::trace!("time ruler invalidated by {property}");
    }

    // ===== Rendering =====

    /// Total width needed to show every minute tick and its label.
    pub fn content_width(&self) -> f32 {
        domain::ruler_extent(&self.geometry)
            .map(|x| x + LABEL_OFFSET.x + LABEL_BOX_WIDTH)
            .unwrap_or(0.0)
    }

    /// Paints the ruler onto `canvas`.
    pub fn render(&self, canvas: &mut dyn RulerCanvas) {
        let size = canvas.size();
        let clip = canvas.clip();
        let window = domain::render_window(clip.as_ref(), size.x);

        self.draw_background(canvas, size);
        self.draw_minute_markers(canvas, size, clip.as_ref(), window);
        self.draw_sub_minute_markers(canvas, size, window);
        self.draw_divider(canvas, size);
    }

    fn draw_background(&self, canvas: &mut dyn RulerCanvas, size: Vec2) {
        if let Some(color) = self.style.background {
            canvas.fill_rect(Rect::from_min_size(pos2(0.0, 0.0), size), color);
        }
    }

    fn draw_minute_markers(
        &self,
        canvas: &mut dyn RulerCanvas,
        size: Vec2,
        clip: Option<&ViewClip>,
        window: RenderWindow,
    ) {
        let Some(stroke) = self.style.tick_stroke() else {
            return;
        };

        let top = size.y * MINUTE_TICK_TOP_FRACTION;
        let bottom = clip.map_or(size.y, |clip| clip.visible_height);
        let label = self.style.foreground.map(|color| LabelStyle {
            font: FontId::proportional(LABEL_FONT_SIZE),
            color,
            max_size: vec2(LABEL_BOX_WIDTH, size.y / 2.0),
        });

        for tick in domain::minute_ticks(&self.geometry, window) {
            canvas.line(pos2(tick.x, top), pos2(tick.x, bottom), stroke);
            if let Some(label) = &label {
                canvas.text(pos2(tick.x, 0.0) + LABEL_OFFSET, &tick.index.to_string(), label);
            }
        }
    }

    fn draw_sub_minute_markers(&self, canvas: &mut dyn RulerCanvas, size: Vec2, window: RenderWindow) {
        let Some(stroke) = self.style.tick_stroke() else {
            return;
        };

        let top = size.y / SUB_TICK_HEIGHT_DIVISOR;
        for tick in domain::sub_minute_ticks(&self.geometry, window) {
            canvas.line(pos2(tick.x, size.y), pos2(tick.x, top), stroke);
        }
    }

    fn draw_divider(&self, canvas: &mut dyn RulerCanvas, size: Vec2) {
        if let Some(stroke) = self.style.divider_stroke() {
            let y = size.y / 2.0;
            canvas.line(pos2(0.0, y), pos2(size.x, y), stroke);
        }
    }
}

/// Stores `value` in `field`, returning true if it differed.
fn replace<T: PartialEq>(field: &mut T, value: T) -> bool {
    if *field == value {
        return false;
    }
    *field = value;
    true
}

/// Like [`replace`], but compares bit patterns so NaN == NaN.
fn replace_f32(field: &mut f32, value: f32) -> bool {
    if field.to_bits() == value.to_bits() {
        return false;
    }
    *field = value;
    true
}

fn same_f32(a: f32, b: f32) -> bool {
    a.to_bits() == b.to_bits()
}

fn same_style(a: &RulerStyle, b: &RulerStyle) -> bool {
    a.background == b.background
        && a.divider == b.divider
        && a.foreground == b.foreground
        && a.tick_line == b.tick_line
        && same_f32(a.tick_thickness, b.tick_thickness)
}

fn same_geometry(a: &RulerGeometry, b: &RulerGeometry) -> bool {
    same_f32(a.marker_spacing, b.marker_spacing)
        && a.marker_count == b.marker_count
        && same_f32(a.ticks_per_interval, b.ticks_per_interval)
        && same_f32(a.tick_spacing, b.tick_spacing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;

    fn ruler(spacing: f32, count: u32, ticks: f32) -> TimeRuler {
        TimeRuler::with_style_and_geometry(
            RulerStyle::default(),
            RulerGeometry::new(spacing, count, ticks, 0.0),
        )
    }

    #[test]
    fn test_new_ruler_has_no_pending_redraw() {
        let ruler = TimeRuler::new();
        assert!(!ruler.needs_repaint());
        assert_eq!(ruler.redraw_requests(), 0);
    }

    #[test]
    fn test_each_setter_requests_one_redraw() {
        let mut ruler = TimeRuler::new();
        ruler.set_background(Some(Color32::BLACK));
        ruler.set_divider_color(Some(Color32::WHITE));
        ruler.set_foreground(None);
        ruler.set_tick_line_color(Some(Color32::RED));
        ruler.set_tick_thickness(2.0);
        ruler.set_marker_spacing(50.0);
        ruler.set_marker_count(60);
        ruler.set_ticks_per_interval(2.0);
        ruler.set_tick_spacing(5.0);
        assert_eq!(ruler.redraw_requests(), 9);
        assert!(ruler.needs_repaint());
    }

    #[test]
    fn test_unchanged_value_does_not_redraw() {
        let mut ruler = ruler(50.0, 60, 2.0);
        ruler.set_marker_spacing(50.0);
        ruler.set_marker_count(60);
        ruler.set_tick_thickness(DEFAULT_TICK_THICKNESS);
        ruler.set_background(Some(DEFAULT_BRUSH));
        assert_eq!(ruler.redraw_requests(), 0);
        assert!(!ruler.needs_repaint());

        ruler.set_marker_spacing(f32::NAN);
        ruler.set_marker_spacing(f32::NAN);
        assert_eq!(ruler.redraw_requests(), 1);
    }

    #[test]
    fn test_take_repaint_request_clears_flag() {
        let mut ruler = TimeRuler::new();
        ruler.set_marker_count(3);
        assert!(ruler.take_repaint_request());
        assert!(!ruler.take_repaint_request());
        assert_eq!(ruler.redraw_requests(), 1);
    }

    #[test]
    fn test_bulk_setters_request_at_most_one_redraw() {
        let mut ruler = TimeRuler::new();
        ruler.set_geometry(RulerGeometry::new(10.0, 5, 1.0, 2.0));
        assert_eq!(ruler.redraw_requests(), 1);
        ruler.set_geometry(RulerGeometry::new(10.0, 5, 1.0, 2.0));
        assert_eq!(ruler.redraw_requests(), 1);

        ruler.set_style(RulerStyle::default());
        assert_eq!(ruler.redraw_requests(), 1);
        ruler.set_style(RulerStyle {
            foreground: None,
            tick_thickness: 3.0,
            ..Default::default()
        });
        assert_eq!(ruler.redraw_requests(), 2);
    }

    #[test]
    fn test_render_layers_in_order() {
        let ruler = ruler(100.0, 2, 1.0);
        let mut canvas = RecordingCanvas::new(vec2(1000.0, 40.0));
        ruler.render(&mut canvas);

        let lines = canvas.lines();
        // 2 minute ticks, 2 sub-minute ticks, 1 divider
        assert_eq!(lines.len(), 5);
        assert_eq!(canvas.fills().len(), 1);

        // Minute ticks: from 10% height to bottom
        assert_eq!(lines[0].0, pos2(0.0, 4.0));
        assert_eq!(lines[0].1, pos2(0.0, 40.0));
        assert_eq!(lines[1].0, pos2(100.0, 4.0));

        // Sub-minute ticks: from bottom up to height / 1.7
        assert_eq!(lines[2].0, pos2(0.0, 40.0));
        assert_eq!(lines[2].1, pos2(0.0, 40.0 / 1.7));
        assert_eq!(lines[3].0.x, 100.0 / 6.0);

        // Divider last, across the full width at half height
        assert_eq!(lines[4].0, pos2(0.0, 20.0));
        assert_eq!(lines[4].1, pos2(1000.0, 20.0));
    }

    #[test]
    fn test_labels_show_tick_index() {
        let ruler = ruler(100.0, 3, 1.0);
        let mut canvas = RecordingCanvas::new(vec2(1000.0, 40.0));
        ruler.render(&mut canvas);

        let texts = canvas.texts();
        assert_eq!(
            texts,
            vec![
                (pos2(4.0, 2.0), "0"),
                (pos2(104.0, 2.0), "1"),
                (pos2(204.0, 2.0), "2"),
            ]
        );

        let style = canvas
            .commands()
            .iter()
            .find_map(|cmd| match cmd {
                crate::canvas::DrawCommand::Text { style, .. } => Some(style.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(style.font, FontId::proportional(14.0));
        assert_eq!(style.max_size, vec2(100.0, 20.0));
        assert_eq!(style.color, DEFAULT_BRUSH);
    }

    #[test]
    fn test_missing_brushes_skip_passes() {
        let mut ruler = ruler(100.0, 3, 1.0);
        ruler.set_foreground(None);
        let mut canvas = RecordingCanvas::new(vec2(1000.0, 40.0));
        ruler.render(&mut canvas);
        assert!(canvas.texts().is_empty());
        assert_eq!(canvas.lines().len(), 7);

        ruler.set_tick_line_color(None);
        ruler.set_foreground(Some(Color32::WHITE));
        canvas.clear();
        ruler.render(&mut canvas);
        assert!(canvas.texts().is_empty());
        assert_eq!(canvas.lines().len(), 1);

        ruler.set_divider_color(None);
        ruler.set_background(None);
        canvas.clear();
        ruler.render(&mut canvas);
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn test_minute_ticks_reach_visible_clip_bottom() {
        let ruler = ruler(100.0, 100, 1.0);
        let clip = ViewClip {
            scroll_x: 0.0,
            viewport_width: 400.0,
            visible_height: 25.0,
        };
        let mut canvas = RecordingCanvas::with_clip(vec2(10_000.0, 40.0), clip);
        ruler.render(&mut canvas);
        let first = canvas.lines()[0];
        assert_eq!(first.0, pos2(0.0, 4.0));
        assert_eq!(first.1, pos2(0.0, 25.0));
    }

    #[test]
    fn test_content_width() {
        assert_eq!(ruler(50.0, 60, 2.0).content_width(), 5950.0 + 104.0);
        assert_eq!(ruler(0.0, 60, 2.0).content_width(), 0.0);
        assert_eq!(TimeRuler::new().content_width(), 0.0);
    }
}
