pub mod traits;
pub mod config;
pub mod style;
pub mod geometry;
pub mod renderer;
pub mod layout;
pub mod animation;
pub mod formatting;
pub mod theme;

// Export capability traits and value types
pub use traits::{FrameScheduler, Point, Surface, SurfaceSize, TimestampFormatter};

// Export configuration and styling
pub use config::RulerConfig;
pub use style::RulerStyle;

// Export rendering
pub use renderer::{render_ruler, replay, DrawOp};

// Export layout and animation
pub use animation::{LoopState, RenderLoop};
pub use layout::{LayoutManager, SurfaceState};

// Export default formatter
pub use formatting::ClockFormatter;

// Export theme support
pub use theme::{hex_to_color32, Theme, ThemeColors, ThemeManager};
