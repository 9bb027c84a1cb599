//! Render window calculation.
//!
//! A ruler on a long timeline is usually much wider than the viewport showing
//! it. Only ticks near the visible part are drawn: the visible span plus a
//! quarter of the viewport width on either side, so labels do not pop in at
//! the edge while scrolling.

/// Fraction of the viewport width added on each side of the visible span.
pub const RENDER_MARGIN_FRACTION: f32 = 0.25;

/// The visible part of the ruler, in the ruler's local coordinates.
///
/// Present only while the host clips the ruler (typically because it sits
/// inside a scrolled area). An unclipped ruler is fully visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewClip {
    /// Horizontal scroll offset: local x of the left edge of the viewport
    pub scroll_x: f32,
    /// Width of the viewport in pixels
    pub viewport_width: f32,
    /// Height of the visible part of the ruler, measured from its top
    pub visible_height: f32,
}

/// Horizontal pixel range `[start, end]` worth drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderWindow {
    pub start: f32,
    pub end: f32,
}

impl RenderWindow {
    /// Returns true if `x` lies inside the window (both ends inclusive).
    pub fn contains(&self, x: f32) -> bool {
        x >= self.start && x <= self.end
    }

    /// Width of the window, zero for an inverted window.
    pub fn width(&self) -> f32 {
        (self.end - self.start).max(0.0)
    }
}

/// Computes the render window for a ruler of `control_width` pixels.
///
/// # Arguments
/// * `clip` - The active clip, if the host is clipping the ruler
/// * `control_width` - Full width of the ruler control
///
/// # Returns
/// `[0, control_width]` when unclipped. Otherwise the viewport span widened by
/// [`RENDER_MARGIN_FRACTION`] of the viewport width on both sides, with the
/// start floored at zero.
pub fn render_window(clip: Option<&ViewClip>, control_width: f32) -> RenderWindow {
    let window = match clip {
        None => RenderWindow {
            start: 0.0,
            end: control_width,
        },
        Some(clip) => {
            let margin = clip.viewport_width * RENDER_MARGIN_FRACTION;
            RenderWindow {
                start: (clip.scroll_x - margin).max(0.0),
                end: clip.scroll_x + clip.viewport_width + margin,
            }
        }
    };
    log::trace!("ruler render window [{}, {}]", window.start, window.end);
    window
}
