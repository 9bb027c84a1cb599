//! egui painter backed canvas.

use super::{LabelStyle, RulerCanvas, ViewClip};
use egui::{Color32, Pos2, Rect, Stroke, Vec2};

/// Paints the ruler into an egui painter.
///
/// `rect` is the screen rectangle allocated to the ruler. The painter's clip
/// rectangle decides what is visible: when it cuts the ruler horizontally
/// (the ruler sits in a scrolled area) the canvas reports a [`ViewClip`].
pub struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
    rect: Rect,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, local: Pos2) -> Pos2 {
        self.rect.min + local.to_vec2()
    }
}

impl RulerCanvas for PainterCanvas<'_> {
    fn size(&self) -> Vec2 {
        self.rect.size()
    }

    fn clip(&self) -> Option<ViewClip> {
        view_clip(self.rect, self.painter.clip_rect())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        let screen = rect.translate(self.rect.min.to_vec2());
        self.painter.rect_filled(screen, 0.0, color);
    }

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], stroke);
    }

    fn text(&mut self, pos: Pos2, text: &str, style: &LabelStyle) {
        let min = self.to_screen(pos);
        let bounds = Rect::from_min_size(min, style.max_size);
        let galley = self
            .painter
            .layout_no_wrap(text.to_owned(), style.font.clone(), style.color);
        self.painter
            .with_clip_rect(bounds)
            .galley(min, galley, style.color);
    }
}

/// Derives the ruler's view clip from its screen rect and the painter clip.
///
/// Returns `None` when the clip leaves the full width of the ruler visible.
fn view_clip(rect: Rect, clip_rect: Rect) -> Option<ViewClip> {
    if clip_rect.left() <= rect.left() && clip_rect.right() >= rect.right() {
        return None;
    }
    let visible = rect.intersect(clip_rect);
    Some(ViewClip {
        scroll_x: (visible.left() - rect.left()).max(0.0),
        viewport_width: visible.width().max(0.0),
        visible_height: (visible.bottom() - rect.top()).clamp(0.0, rect.height()),
    })
}
