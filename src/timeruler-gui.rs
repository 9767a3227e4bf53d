//! Scrolling timeline ruler demo application.
//!
//! Hosts the `timeruler` core in an eframe window: a horizontal strip of
//! major/minor tick marks with second labels, scrolling leftward over time
//! like a recording scrubber. The host side adapts the egui painter to the
//! core's `Surface` capability, egui's repaint mechanism to its
//! `FrameScheduler`, and feeds frame timestamps from the egui clock.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

use timeruler::{
    ClockFormatter, FrameScheduler, LayoutManager, Point, RenderLoop, RulerConfig, RulerStyle,
    Surface, SurfaceSize, ThemeColors, ThemeManager,
};

const THEME_KEY: &str = "theme_preference";
const RULER_HEIGHT: f32 = 60.0;

/// Main application entry point that initializes and launches the ruler demo.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 200.0])
            .with_title("Timeline Ruler"),
        ..Default::default()
    };

    eframe::run_native(
        "Timeline Ruler",
        options,
        Box::new(move |cc| Ok(Box::new(RulerApp::new(cc)?))),
    )
}

/// Frame scheduler backed by egui's repaint mechanism.
///
/// egui cannot retract a queued repaint, so `cancel_frame` only drops the
/// handle; the stop guarantee is upheld by the app, which never forwards a
/// frame to a stopped loop.
struct RepaintScheduler {
    ctx: egui::Context,
    next_handle: u64,
}

impl RepaintScheduler {
    fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            next_handle: 0,
        }
    }
}

impl FrameScheduler for RepaintScheduler {
    type Handle = u64;

    fn request_frame(&mut self) -> u64 {
        self.ctx.request_repaint();
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }

    fn cancel_frame(&mut self, _handle: u64) {}
}

/// Drawing surface backed by an egui painter clipped to the ruler strip.
///
/// The painter draws in screen coordinates; the core works in surface-local
/// coordinates, so every draw offsets by the strip's origin. The strip
/// layout is known here only to pick colors for baseline vs. major vs.
/// minor marks.
struct PainterSurface {
    painter: egui::Painter,
    rect: egui::Rect,
    style: RulerStyle,
    colors: ThemeColors,
}

impl PainterSurface {
    fn new(painter: egui::Painter, rect: egui::Rect, style: RulerStyle, colors: ThemeColors) -> Self {
        Self {
            painter,
            rect,
            style,
            colors,
        }
    }

    fn to_screen(&self, point: Point) -> egui::Pos2 {
        egui::pos2(self.rect.min.x + point.x, self.rect.min.y + point.y)
    }

    fn line_color(&self, from: Point, to: Point) -> egui::Color32 {
        if from.y == to.y {
            self.colors.baseline
        } else if to.y == self.style.minor_tick_top {
            self.colors.minor_tick
        } else {
            self.colors.major_tick
        }
    }
}

impl Surface for PainterSurface {
    fn dimensions(&self) -> SurfaceSize {
        SurfaceSize {
            width: self.rect.width(),
            height: self.rect.height(),
        }
    }

    fn set_backing_size(&mut self, _width: f32, _height: f32) {
        // egui manages its own backing store; the painter always covers
        // the allocated strip.
    }

    fn clear(&mut self, width: f32, height: f32) {
        let region = egui::Rect::from_min_size(self.rect.min, egui::vec2(width, height));
        self.painter.rect_filled(region, 0.0, self.colors.background);
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        let color = self.line_color(from, to);
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(1.0, color),
        );
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        self.painter.text(
            self.to_screen(Point::new(x + 3.0, y)),
            egui::Align2::LEFT_BOTTOM,
            text,
            egui::FontId::proportional(10.0),
            self.colors.label,
        );
    }
}

/// The ruler demo application.
struct RulerApp {
    /// Animation loop driving per-frame redraws
    render_loop: RenderLoop<RepaintScheduler>,
    /// Tracks the strip's pixel dimensions
    layout: LayoutManager,
    /// Vertical mark geometry, shared with the painter adapter
    style: RulerStyle,
    /// Label formatter
    formatter: ClockFormatter,
    /// Available themes and current selection
    themes: ThemeManager,
    /// Fatal render error, shown instead of restarting the loop
    error_message: Option<String>,
}

impl RulerApp {
    fn new(cc: &eframe::CreationContext<'_>) -> anyhow::Result<Self> {
        let mut themes = ThemeManager::new();
        if let Some(storage) = cc.storage {
            if let Some(name) = storage.get_string(THEME_KEY) {
                // Unknown stored names fall back to the default theme.
                let _ = themes.set_current_theme(&name);
            }
        }

        let style = RulerStyle::default();
        let render_loop = RenderLoop::new(
            RepaintScheduler::new(cc.egui_ctx.clone()),
            RulerConfig::default(),
            style.clone(),
        )?;

        Ok(Self {
            render_loop,
            layout: LayoutManager::new(),
            style,
            formatter: ClockFormatter,
            themes,
            error_message: None,
        })
    }

    fn theme_picker(&mut self, ui: &mut egui::Ui) {
        let names: Vec<String> = self
            .themes
            .list_themes()
            .into_iter()
            .map(str::to_string)
            .collect();
        let mut selected = self.themes.current_theme().name.clone();

        egui::ComboBox::from_label("Theme")
            .selected_text(selected.clone())
            .show_ui(ui, |ui| {
                for name in &names {
                    ui.selectable_value(&mut selected, name.clone(), name);
                }
            });

        if selected != self.themes.current_theme().name {
            if let Err(err) = self.themes.set_current_theme(&selected) {
                log::warn!("{err}");
            }
        }
    }
}

impl eframe::App for RulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Timeline Ruler");
                ui.separator();
                self.theme_picker(ui);
            });
            ui.separator();

            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), RULER_HEIGHT),
                egui::Sense::hover(),
            );
            let colors = self.themes.current_theme().colors.clone();
            let mut surface =
                PainterSurface::new(ui.painter_at(rect), rect, self.style.clone(), colors);

            // The allocated strip is the resize notifier: adopt its bounds
            // whenever they change (including the first frame).
            let state = self.layout.surface_state();
            if rect.width() != state.width_px() || rect.height() != state.height_px() {
                self.layout.resize(&mut surface);
            }

            if self.error_message.is_none() && !self.render_loop.is_running() {
                self.render_loop.start();
            }

            if self.render_loop.is_running() {
                let timestamp_ms = ctx.input(|i| i.time) * 1000.0;
                if let Err(err) = self.render_loop.on_frame(
                    timestamp_ms,
                    &mut surface,
                    &self.layout,
                    &self.formatter,
                ) {
                    self.error_message = Some(format!("Ruler rendering failed: {err:#}"));
                }
            }

            if let Some(message) = &self.error_message {
                ui.colored_label(egui::Color32::RED, message);
            }
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage.set_string(THEME_KEY, self.themes.current_theme().name.clone());
        storage.flush();
    }
}

impl Drop for RulerApp {
    fn drop(&mut self) {
        // Teardown contract: cancel the pending frame request.
        self.render_loop.stop();
    }
}
