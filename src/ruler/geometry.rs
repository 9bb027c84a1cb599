//! Ruler geometry: how far apart ticks are and how many to draw.

use serde::{Deserialize, Serialize};

/// Spacing and count parameters of the ruler.
///
/// Values are expected to be non-negative. Degenerate values (zero spacing,
/// negative or non-finite numbers) still render, just not usefully.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerGeometry {
    /// Pixel distance between consecutive minute ticks
    pub marker_spacing: f32,
    /// Number of minute ticks to attempt to draw
    pub marker_count: u32,
    /// Multiplier on `marker_count` giving the total tick iterations
    pub ticks_per_interval: f32,
    /// Reserved, not used by rendering
    pub tick_spacing: f32,
}

impl RulerGeometry {
    /// Geometry with every field set explicitly.
    pub fn new(marker_spacing: f32, marker_count: u32, ticks_per_interval: f32, tick_spacing: f32) -> Self {
        Self {
            marker_spacing,
            marker_count,
            ticks_per_interval,
            tick_spacing,
        }
    }

    /// Returns true if every numeric field is finite and non-negative.
    pub fn is_well_formed(&self) -> bool {
        [self.marker_spacing, self.ticks_per_interval, self.tick_spacing]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}
