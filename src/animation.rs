//! Frame-driven animation loop for the ruler.
//!
//! The loop is a two-state machine: `Stopped`, or `Running` with exactly one
//! outstanding frame request. Each delivered frame clears the surface,
//! renders the ruler for that frame's timestamp, and requests the next
//! frame. Stopping cancels the outstanding request so no further callback
//! fires; forgetting to stop on teardown would leak a recurring callback
//! against a destroyed surface.

use anyhow::Result;

use crate::config::RulerConfig;
use crate::layout::LayoutManager;
use crate::renderer::{render_ruler, replay};
use crate::style::RulerStyle;
use crate::traits::{FrameScheduler, Surface, TimestampFormatter};

/// Scheduling state of the render loop.
///
/// Modeled as a tagged variant rather than a nullable handle so the
/// double-start and teardown guards are explicit and exhaustively checked.
#[derive(Debug)]
pub enum LoopState<H> {
    /// No frame request outstanding. Initial state, and terminal after
    /// teardown or a render failure.
    Stopped,
    /// Exactly one frame request outstanding, identified by the handle.
    Running(H),
}

/// Drives per-frame redraws of the ruler through a [`FrameScheduler`].
pub struct RenderLoop<S: FrameScheduler> {
    scheduler: S,
    state: LoopState<S::Handle>,
    config: RulerConfig,
    style: RulerStyle,
}

impl<S: FrameScheduler> RenderLoop<S> {
    /// Creates a stopped render loop.
    ///
    /// Fails if the configuration violates its invariants; an invalid
    /// configuration is a setup error, not a runtime state to recover from.
    pub fn new(scheduler: S, config: RulerConfig, style: RulerStyle) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scheduler,
            state: LoopState::Stopped,
            config,
            style,
        })
    }

    /// Returns the ruler configuration.
    pub fn config(&self) -> &RulerConfig {
        &self.config
    }

    /// Returns true while a frame request is outstanding.
    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running(_))
    }

    /// Requests the first frame. No-op when already running, so repeated
    /// calls never double-schedule.
    pub fn start(&mut self) {
        if let LoopState::Stopped = self.state {
            log::debug!("ruler animation started");
            self.state = LoopState::Running(self.scheduler.request_frame());
        }
    }

    /// Cancels the outstanding frame request. No-op when already stopped.
    ///
    /// After this returns, no further frame callback fires, even if one
    /// was already queued.
    pub fn stop(&mut self) {
        if let LoopState::Running(handle) =
            std::mem::replace(&mut self.state, LoopState::Stopped)
        {
            self.scheduler.cancel_frame(handle);
            log::debug!("ruler animation stopped");
        }
    }

    /// Handles one delivered frame: clear, render, replay, reschedule.
    ///
    /// A frame delivered after [`RenderLoop::stop`] is ignored. A render
    /// failure stops the loop and propagates the error rather than
    /// rescheduling faulty frames indefinitely.
    ///
    /// # Arguments
    /// * `timestamp_ms` - Frame timestamp, milliseconds since animation start
    /// * `surface` - Drawing surface to clear and draw onto
    /// * `layout` - Source of the current surface dimensions
    /// * `formatter` - Label text formatter
    pub fn on_frame(
        &mut self,
        timestamp_ms: f64,
        surface: &mut dyn Surface,
        layout: &LayoutManager,
        formatter: &dyn TimestampFormatter,
    ) -> Result<()> {
        if !self.is_running() {
            return Ok(());
        }

        let state = layout.surface_state();
        surface.clear(state.width_px(), state.height_px());

        match render_ruler(
            timestamp_ms,
            state.width_px(),
            &self.config,
            &self.style,
            formatter,
        ) {
            Ok(ops) => {
                replay(&ops, surface);
                self.state = LoopState::Running(self.scheduler.request_frame());
                Ok(())
            }
            Err(err) => {
                // The failed frame's request is already consumed; nothing
                // to cancel.
                log::error!("ruler render failed, stopping animation: {err:#}");
                self.state = LoopState::Stopped;
                Err(err)
            }
        }
    }
}
