//! Ruler configuration.
//!
//! Set once at construction and immutable for the lifetime of a run.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Configuration of the ruler's time/pixel layout.
///
/// Invariants (enforced by [`RulerConfig::validate`]):
/// - `sections_visible > 0` (divisor for pixels-per-section)
/// - `seconds_per_section > 0`
/// - `sub_sections_per_section > 0`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulerConfig {
    /// How many major divisions fit across the visible width.
    pub sections_visible: u32,
    /// Time represented by one major division, in seconds.
    pub seconds_per_section: f64,
    /// Number of minor-tick subdivisions within each section.
    pub sub_sections_per_section: u32,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            sections_visible: 10,
            seconds_per_section: 1.0,
            sub_sections_per_section: 5,
        }
    }
}

impl RulerConfig {
    /// Checks the configuration invariants.
    ///
    /// A zero `sections_visible` would divide by zero in the geometry
    /// computation, so invalid configurations are rejected loudly up front
    /// instead of producing garbage frames.
    pub fn validate(&self) -> Result<()> {
        if self.sections_visible == 0 {
            bail!("sections_visible must be greater than zero");
        }
        if !(self.seconds_per_section > 0.0) {
            bail!(
                "seconds_per_section must be greater than zero (got {})",
                self.seconds_per_section
            );
        }
        if self.sub_sections_per_section == 0 {
            bail!("sub_sections_per_section must be greater than zero");
        }
        Ok(())
    }

    /// Duration of one section in milliseconds.
    pub fn ms_per_section(&self) -> f64 {
        self.seconds_per_section * 1000.0
    }
}
