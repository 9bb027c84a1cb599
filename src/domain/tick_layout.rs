//! Tick layout for the time ruler.
//!
//! Both tick passes walk the same index range `0..marker_count * ticks_per_interval`.
//! Minute ticks sit at `i * marker_spacing`, sub-minute ticks at
//! `i * marker_spacing / 6`. Positions outside the render window are skipped.
//!
//! The iterator jumps straight to the first index near the window instead of
//! walking every index from zero, so a long timeline costs the same as a short
//! one, and an unbounded tick count cannot hang a paint.

use crate::domain::render_window::RenderWindow;
use crate::ruler::RulerGeometry;

/// Sub-minute ticks per minute interval (20-second marks, counting the minute itself).
pub const SUB_TICKS_PER_MARKER: f32 = 6.0;

/// Upper bound on indices walked per pass when the tick count is unbounded.
pub const MAX_DEGENERATE_TICKS: u64 = 10_000;

/// A tick that falls inside the render window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Tick index, also used as the label text
    pub index: u64,
    /// Local x coordinate
    pub x: f32,
}

/// Number of tick iterations (exclusive upper bound on the index).
///
/// Kept as `f64` because `ticks_per_interval` is fractional; an index `i` is
/// part of the range while `i < tick_limit`.
pub fn tick_limit(geometry: &RulerGeometry) -> f64 {
    geometry.marker_count as f64 * geometry.ticks_per_interval as f64
}

/// Visible minute ticks, in index order.
pub fn minute_ticks(geometry: &RulerGeometry, window: RenderWindow) -> VisibleTicks {
    VisibleTicks::new(tick_limit(geometry), geometry.marker_spacing, 1.0, window)
}

/// Visible sub-minute ticks, in index order.
pub fn sub_minute_ticks(geometry: &RulerGeometry, window: RenderWindow) -> VisibleTicks {
    VisibleTicks::new(
        tick_limit(geometry),
        geometry.marker_spacing,
        SUB_TICKS_PER_MARKER,
        window,
    )
}

/// X coordinate of the last minute tick, or `None` when the geometry draws
/// nothing measurable (no ticks, non-positive or non-finite spacing, unbounded count).
pub fn ruler_extent(geometry: &RulerGeometry) -> Option<f32> {
    let limit = tick_limit(geometry);
    let spacing = geometry.marker_spacing;
    if !(limit > 0.0 && limit.is_finite()) || !(spacing > 0.0 && spacing.is_finite()) {
        return None;
    }
    let last_index = limit.ceil() - 1.0;
    Some(last_index as f32 * spacing)
}

/// Iterator over the ticks of one pass that land inside a render window.
#[derive(Debug, Clone)]
pub struct VisibleTicks {
    next_index: u64,
    limit: f64,
    spacing: f32,
    divisor: f32,
    window: RenderWindow,
    /// Remaining indices to walk, only set for an unbounded tick count
    budget: Option<u64>,
    done: bool,
}

impl VisibleTicks {
    fn new(limit: f64, spacing: f32, divisor: f32, window: RenderWindow) -> Self {
        let step = spacing / divisor;
        let usable = limit > 0.0 && step.is_finite() && divisor > 0.0;

        let mut ticks = Self {
            next_index: 0,
            limit,
            spacing,
            divisor,
            window,
            budget: (!limit.is_finite()).then_some(MAX_DEGENERATE_TICKS),
            done: !usable,
        };

        if step > 0.0 {
            // One index early: next() re-checks the exact position anyway.
            let first = (window.start / step).floor() - 1.0;
            if first > 0.0 {
                ticks.next_index = first as u64;
            }
        }

        ticks
    }

    fn x_at(&self, index: u64) -> f32 {
        index as f32 * self.spacing / self.divisor
    }
}

impl Iterator for VisibleTicks {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        while !self.done {
            let index = self.next_index;
            if index as f64 >= self.limit {
                self.done = true;
                break;
            }
            if let Some(budget) = &mut self.budget {
                if *budget == 0 {
                    self.done = true;
                    break;
                }
                *budget -= 1;
            }
            self.next_index += 1;

            let x = self.x_at(index);
            if x < self.window.start {
                // Positions only move away from the window when spacing <= 0
                if self.spacing > 0.0 {
                    continue;
                }
                self.done = true;
                break;
            }
            if x > self.window.end {
                if self.spacing < 0.0 {
                    continue;
                }
                self.done = true;
                break;
            }
            return Some(Tick { index, x });
        }
        None
    }
}

impl std::iter::FusedIterator for VisibleTicks {}
