//! Ruler rendering logic.
//!
//! Turns a frame timestamp, the surface width, and the configuration into a
//! list of draw operations: major tick marks with second labels, minor tick
//! marks, and a baseline. Pure with respect to its inputs; all time
//! dependence enters through `timestamp_ms`.

use anyhow::Result;

use crate::config::RulerConfig;
use crate::geometry;
use crate::style::RulerStyle;
use crate::traits::{Point, Surface, TimestampFormatter};

/// One drawing operation produced by the renderer.
///
/// Replayed onto a [`Surface`] in order; keeping the renderer's output as
/// data is what lets it stay a pure function of its inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A straight line segment.
    Line { from: Point, to: Point },
    /// A text label anchored at (x, y).
    Text { text: String, x: f32, y: f32 },
}

/// Renders one frame of the ruler as a list of draw operations.
///
/// For each of the `sections_visible + 1` major ticks: a long vertical line
/// at the phase-shifted x, a time label, and the section's minor ticks.
/// The baseline is emitted last so the host draws it over the tick feet
/// (visual parity with the original strip; no functional significance).
///
/// A zero `surface_width` degenerates to ticks stacked near x=0 and a
/// zero-length baseline, which is valid output. An invalid configuration
/// (zero sections) is a precondition violation and fails the render.
///
/// # Arguments
/// * `timestamp_ms` - Milliseconds since animation start
/// * `surface_width` - Visible surface width in pixels
/// * `config` - Section layout configuration
/// * `style` - Vertical mark geometry
/// * `formatter` - Turns a tick's second value into label text
pub fn render_ruler(
    timestamp_ms: f64,
    surface_width: f32,
    config: &RulerConfig,
    style: &RulerStyle,
    formatter: &dyn TimestampFormatter,
) -> Result<Vec<DrawOp>> {
    config.validate()?;

    let pixels_per_section = geometry::pixels_per_section(surface_width, config.sections_visible);
    let ms_per_section = config.ms_per_section();
    let pixels_per_ms = pixels_per_section as f64 / ms_per_section;
    let phase = geometry::section_phase(timestamp_ms, ms_per_section);
    let minor_spacing = pixels_per_section / config.sub_sections_per_section as f32;

    let mut ops = Vec::new();
    for i in 0..=config.sections_visible {
        let x = geometry::major_tick_x(phase, pixels_per_ms, i, pixels_per_section);

        ops.push(DrawOp::Line {
            from: Point::new(x, style.baseline_y),
            to: Point::new(x, style.major_tick_top),
        });

        let seconds = geometry::label_seconds(timestamp_ms, config.seconds_per_section, i);
        ops.push(DrawOp::Text {
            text: formatter.format_timestamp(seconds),
            x,
            y: style.label_y,
        });

        for j in 1..config.sub_sections_per_section {
            let minor_x = x + j as f32 * minor_spacing;
            ops.push(DrawOp::Line {
                from: Point::new(minor_x, style.baseline_y),
                to: Point::new(minor_x, style.minor_tick_top),
            });
        }
    }

    // Baseline last so it is not occluded by the vertical ticks.
    ops.push(DrawOp::Line {
        from: Point::new(0.0, style.baseline_y),
        to: Point::new(surface_width, style.baseline_y),
    });

    Ok(ops)
}

/// Replays rendered draw operations onto a surface, in order.
pub fn replay(ops: &[DrawOp], surface: &mut dyn Surface) {
    for op in ops {
        match op {
            DrawOp::Line { from, to } => surface.draw_line(*from, *to),
            DrawOp::Text { text, x, y } => surface.draw_text(text, *x, *y),
        }
    }
}
