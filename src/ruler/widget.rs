//! egui integration for the time ruler.

use super::TimeRuler;
use crate::canvas::PainterCanvas;

/// Height used by hosts that do not pick one.
pub const DEFAULT_RULER_HEIGHT: f32 = 40.0;

impl TimeRuler {
    /// Allocates space for the ruler in `ui` and paints it.
    ///
    /// The ruler takes its full content width (at least the available width),
    /// so it belongs inside a horizontal [`egui::ScrollArea`] on long
    /// timelines. Pending property changes are forwarded as a repaint request.
    pub fn show(&mut self, ui: &mut egui::Ui, height: f32) -> egui::Response {
        if self.take_repaint_request() {
            ui.ctx().request_repaint();
        }

        // Unbounded inside a horizontal scroll area
        let available = ui.available_width();
        let fill = if available.is_finite() { available } else { ui.clip_rect().width() };
        let width = self.content_width().max(fill);
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let mut canvas = PainterCanvas::new(painter, rect);
            self.render(&mut canvas);
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruler::{RulerGeometry, RulerStyle};
    use egui::epaint::ClippedShape;
    use egui::{vec2, Color32, Pos2, Rect, Shape};
    use std::time::Duration;

    const BACKGROUND: Color32 = Color32::from_rgb(10, 11, 12);
    const TICKS: Color32 = Color32::from_rgb(1, 2, 3);
    const DIVIDER: Color32 = Color32::from_rgb(4, 5, 6);
    const LABELS: Color32 = Color32::from_rgb(7, 8, 9);

    fn styled_ruler(spacing: f32, count: u32, ticks_per_interval: f32) -> TimeRuler {
        TimeRuler::with_style_and_geometry(
            RulerStyle {
                background: Some(BACKGROUND),
                divider: Some(DIVIDER),
                foreground: Some(LABELS),
                tick_line: Some(TICKS),
                tick_thickness: 1.0,
            },
            RulerGeometry::new(spacing, count, ticks_per_interval, 0.0),
        )
    }

    fn raw_input() -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(1200.0, 400.0))),
            ..Default::default()
        }
    }

    fn lines_with_color(shapes: &[ClippedShape], color: Color32) -> Vec<(Rect, [Pos2; 2])> {
        shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                Shape::LineSegment { points, stroke } if stroke.color == color => {
                    Some((clipped.clip_rect, *points))
                }
                _ => None,
            })
            .collect()
    }

    fn labels(shapes: &[ClippedShape]) -> Vec<(Rect, Pos2, String)> {
        shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                Shape::Text(text) => Some((clipped.clip_rect, text.pos, text.galley.text().to_owned())),
                _ => None,
            })
            .collect()
    }

    fn background_clip(shapes: &[ClippedShape]) -> Option<Rect> {
        shapes.iter().find_map(|clipped| match &clipped.shape {
            Shape::Rect(rect) if rect.fill == BACKGROUND => Some(clipped.clip_rect),
            _ => None,
        })
    }

    #[test]
    fn test_show_forwards_pending_change_as_repaint() {
        let ctx = egui::Context::default();
        let mut ruler = styled_ruler(100.0, 5, 1.0);
        ruler.set_marker_count(4);
        assert!(ruler.needs_repaint());

        let output = ctx.run(raw_input(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ruler.show(ui, DEFAULT_RULER_HEIGHT);
            });
        });

        assert!(!ruler.take_repaint_request());
        let viewport = output.viewport_output.get(&egui::ViewportId::ROOT).unwrap();
        assert_eq!(viewport.repaint_delay, Duration::ZERO);
        assert_eq!(ruler.redraw_requests(), 1);
    }

    #[test]
    fn test_show_paints_at_rect_offset() {
        let ctx = egui::Context::default();
        let mut ruler = styled_ruler(100.0, 5, 1.0);
        let mut ruler_rect = Rect::NOTHING;

        let output = ctx.run(raw_input(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ruler_rect = ruler.show(ui, DEFAULT_RULER_HEIGHT).rect;
            });
        });
        let shapes = &output.shapes;
        let origin = ruler_rect.min;

        // Minute ticks run from 10% height to the bottom, offset by the rect
        let minutes: Vec<[Pos2; 2]> = lines_with_color(shapes, TICKS)
            .into_iter()
            .map(|(_, points)| points)
            .filter(|points| points[0].y == origin.y + 4.0)
            .collect();
        assert_eq!(minutes.len(), 5);
        assert_eq!(minutes[0], [origin + vec2(0.0, 4.0), origin + vec2(0.0, 40.0)]);
        assert_eq!(minutes[2], [origin + vec2(200.0, 4.0), origin + vec2(200.0, 40.0)]);

        let divider = lines_with_color(shapes, DIVIDER);
        assert_eq!(divider.len(), 1);
        assert_eq!(
            divider[0].1,
            [origin + vec2(0.0, 20.0), origin + vec2(ruler_rect.width(), 20.0)]
        );

        // Labels sit at (x + 4, 2) and are clipped to a 100 x height/2 box
        let labels = labels(shapes);
        assert_eq!(labels.len(), 5);
        let (clip, pos, text) = &labels[1];
        assert_eq!(text, "1");
        assert_eq!(*pos, origin + vec2(104.0, 2.0));
        assert_eq!(*clip, Rect::from_min_size(origin + vec2(104.0, 2.0), vec2(100.0, 20.0)));
    }

    #[test]
    fn test_scrolled_ruler_stays_inside_scroll_clip() {
        let ctx = egui::Context::default();
        let mut ruler = styled_ruler(50.0, 60, 2.0);
        let mut ruler_rect = Rect::NOTHING;

        let mut frame = || {
            ctx.run(raw_input(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    egui::ScrollArea::horizontal()
                        .horizontal_scroll_offset(2000.0)
                        .show(ui, |ui| {
                            ruler_rect = ruler.show(ui, DEFAULT_RULER_HEIGHT).rect;
                        });
                });
            })
        };
        frame();
        let output = frame();
        let shapes = &output.shapes;

        assert!(ruler_rect.width().is_finite());
        let scroll_clip = background_clip(shapes).unwrap();
        let scroll_x = scroll_clip.left() - ruler_rect.left();
        let viewport_width = scroll_clip.width();
        assert!(scroll_x > 0.0);
        assert!(viewport_width < ruler_rect.width());

        // Every ruler shape is clipped to (a part of) the scroll viewport
        let mut clips: Vec<Rect> = Vec::new();
        for color in [TICKS, DIVIDER] {
            clips.extend(lines_with_color(shapes, color).into_iter().map(|(clip, _)| clip));
        }
        clips.extend(labels(shapes).into_iter().map(|(clip, _, _)| clip));
        for clip in clips {
            assert!(clip.min.x >= scroll_clip.min.x && clip.max.x <= scroll_clip.max.x, "{clip:?}");
            assert!(clip.min.y >= scroll_clip.min.y && clip.max.y <= scroll_clip.max.y, "{clip:?}");
        }

        // Only ticks near the viewport are emitted
        let start = (scroll_x - viewport_width * 0.25).max(0.0) - 0.01;
        let end = scroll_x + viewport_width * 1.25 + 0.01;
        let ticks = lines_with_color(shapes, TICKS);
        assert!(!ticks.is_empty());
        assert!(ticks.len() < 240);
        for (_, points) in ticks {
            let x = points[0].x - ruler_rect.left();
            assert!(x >= start && x <= end, "tick at {x} outside [{start}, {end}]");
        }
        assert!(labels(shapes).iter().all(|(_, _, text)| text != "0"));
    }
}
