//! Surface dimension tracking.
//!
//! The layout manager is the single writer of the surface state; the render
//! loop and renderer only read it. Everything stays on one thread, so the
//! discipline is sequencing, not synchronization.

use crate::traits::Surface;

/// Current pixel dimensions of the drawing surface.
///
/// Always reflects the container's bounding box as of the last `resize`;
/// never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceState {
    width_px: f32,
    height_px: f32,
}

impl SurfaceState {
    /// Returns the surface width in pixels.
    pub fn width_px(&self) -> f32 {
        self.width_px
    }

    /// Returns the surface height in pixels.
    pub fn height_px(&self) -> f32 {
        self.height_px
    }
}

/// Tracks the container's dimensions and sizes the backing store to match.
#[derive(Debug, Default)]
pub struct LayoutManager {
    state: SurfaceState,
}

impl LayoutManager {
    /// Creates a layout manager with an empty (0x0) surface state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current surface state.
    pub fn surface_state(&self) -> SurfaceState {
        self.state
    }

    /// Reads the container's current bounds and resizes the backing store.
    ///
    /// Must run once before the first render and again on every resize
    /// notification. Idempotent: repeating it with unchanged container
    /// bounds leaves the surface state unchanged. Resizing the backing
    /// store may clear prior drawing; the next frame redraws in full.
    pub fn resize(&mut self, surface: &mut dyn Surface) {
        let dims = surface.dimensions();
        let width = dims.width.max(0.0);
        let height = dims.height.max(0.0);

        if width != self.state.width_px || height != self.state.height_px {
            log::debug!(
                "surface resized: {}x{} -> {}x{}",
                self.state.width_px,
                self.state.height_px,
                width,
                height
            );
        }

        self.state = SurfaceState {
            width_px: width,
            height_px: height,
        };
        surface.set_backing_size(width, height);
    }
}
