/// A point on the drawing surface, in surface-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pixel dimensions of a drawing surface or its container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

/// Trait for the host-provided drawing surface.
///
/// The ruler core depends only on this capability set, never on a concrete
/// surface technology, so rendering can be tested headlessly against a
/// recording stub.
pub trait Surface {
    /// Returns the current pixel dimensions of the surface's container.
    fn dimensions(&self) -> SurfaceSize;

    /// Resizes the surface's backing store to exactly the given dimensions.
    ///
    /// Reallocation may clear any prior drawing; the next frame redraws
    /// the ruler in full, so this is acceptable.
    fn set_backing_size(&mut self, width: f32, height: f32);

    /// Clears the given region of the surface.
    fn clear(&mut self, width: f32, height: f32);

    /// Draws a straight line segment between two points.
    fn draw_line(&mut self, from: Point, to: Point);

    /// Draws a text label anchored at the given position.
    fn draw_text(&mut self, text: &str, x: f32, y: f32);
}

/// Trait for the host-provided frame scheduler.
///
/// The scheduler must deliver frame timestamps in monotonically
/// non-decreasing order, one frame at a time, with no reentrant delivery.
pub trait FrameScheduler {
    /// Opaque token identifying one scheduled frame request.
    type Handle;

    /// Requests delivery of the next animation frame.
    fn request_frame(&mut self) -> Self::Handle;

    /// Cancels a previously requested frame so its callback never fires.
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Trait for formatting a tick's time value into label text.
///
/// The core treats the output as opaque and assumes no particular format
/// (`H:MM:SS` vs `M:SS` is entirely up to the implementation).
pub trait TimestampFormatter {
    /// Formats a whole number of seconds since animation start.
    fn format_timestamp(&self, total_seconds: i64) -> String;
}
