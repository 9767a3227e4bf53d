//! Tick geometry for the scrolling ruler.
//!
//! This module provides pure functions for:
//! - Converting surface width and configuration into pixel spacings
//! - Deriving the scroll phase from an absolute frame timestamp
//! - Computing tick x-coordinates and label time values
//!
//! These functions are stateless and can be tested independently. Scroll
//! position is always derived from the absolute elapsed time, never from an
//! accumulating offset counter, so there is no drift and resizing needs no
//! saved state.

/// Converts the visible surface width into the width of one major section.
///
/// # Arguments
/// * `surface_width` - Visible width of the surface in pixels
/// * `sections_visible` - Number of major divisions across that width (> 0)
pub fn pixels_per_section(surface_width: f32, sections_visible: u32) -> f32 {
    surface_width / sections_visible as f32
}

/// Returns the sub-section phase of a frame timestamp in milliseconds.
///
/// The phase is `timestamp_ms mod ms_per_section` and drives the continuous
/// leftward scroll; it is periodic in `ms_per_section`.
///
/// # Arguments
/// * `timestamp_ms` - Milliseconds since animation start
/// * `ms_per_section` - Duration of one major section in milliseconds
pub fn section_phase(timestamp_ms: f64, ms_per_section: f64) -> f64 {
    if ms_per_section <= 0.0 {
        return 0.0;
    }
    timestamp_ms.rem_euclid(ms_per_section)
}

/// Computes the x-coordinate of major tick `index` for the given phase.
///
/// The phase offset is negated so the ruler scrolls right-to-left as time
/// advances.
///
/// # Arguments
/// * `phase` - Sub-section phase in milliseconds (see [`section_phase`])
/// * `pixels_per_ms` - Scroll speed in pixels per millisecond
/// * `index` - Major tick index, `0..=sections_visible`
/// * `pixels_per_section` - Width of one major section in pixels
pub fn major_tick_x(phase: f64, pixels_per_ms: f64, index: u32, pixels_per_section: f32) -> f32 {
    (-phase * pixels_per_ms) as f32 + index as f32 * pixels_per_section
}

/// Computes the time value (whole seconds) labelled at major tick `index`.
///
/// The elapsed whole seconds are rounded down to the last full
/// `seconds_per_section` boundary, anchoring the displayed number to the
/// boundary that has fully passed; a label never appears before its tick has
/// scrolled into place.
///
/// # Arguments
/// * `timestamp_ms` - Milliseconds since animation start
/// * `seconds_per_section` - Time represented by one major division (> 0)
/// * `index` - Major tick index
pub fn label_seconds(timestamp_ms: f64, seconds_per_section: f64, index: u32) -> i64 {
    let elapsed_seconds = (timestamp_ms / 1000.0).floor();
    let boundaries_passed = (elapsed_seconds / seconds_per_section).floor();
    let rounded = boundaries_passed * seconds_per_section;
    (rounded + index as f64 * seconds_per_section).floor() as i64
}
