//! Vertical layout of the ruler's marks.

use serde::{Deserialize, Serialize};

/// Y-coordinates (surface-local, y grows downward) for the ruler's marks.
///
/// Defaults match the original strip layout: baseline at y=50 with major
/// ticks rising to y=10 and minor ticks to y=25, labels anchored at the
/// major-tick tops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulerStyle {
    /// Y of the horizontal baseline that all ticks rise from.
    pub baseline_y: f32,
    /// Y the long (major) ticks extend up to.
    pub major_tick_top: f32,
    /// Y the short (minor) ticks extend up to.
    pub minor_tick_top: f32,
    /// Y the label text is anchored at.
    pub label_y: f32,
}

impl Default for RulerStyle {
    fn default() -> Self {
        Self {
            baseline_y: 50.0,
            major_tick_top: 10.0,
            minor_tick_top: 25.0,
            label_y: 10.0,
        }
    }
}
