use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;
use std::io::Write;

use crate::core::Point;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, RenderFrame, Renderer, TextAnchor, TextOutline};

/// Font size in pixels for a text scale of `1.0`.
pub const DEFAULT_BASE_FONT_SIZE_PX: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Immediate-mode drawing surface over a borrowed Cairo context.
///
/// Cairo failures don't interrupt the pass; the first one is kept and
/// returned by `finish`.
pub struct CairoSurface<'a> {
    context: &'a Context,
    base_font_size_px: f64,
    stats: CairoRenderStats,
    first_error: Option<ChartError>,
}

impl<'a> CairoSurface<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        Self {
            context,
            base_font_size_px: DEFAULT_BASE_FONT_SIZE_PX,
            stats: CairoRenderStats::default(),
            first_error: None,
        }
    }

    #[must_use]
    pub fn with_base_font_size(mut self, size_px: f64) -> Self {
        self.base_font_size_px = size_px;
        self
    }

    /// Ends the pass, returning draw counts or the first backend failure.
    pub fn finish(self) -> ChartResult<CairoRenderStats> {
        match self.first_error {
            Some(err) => Err(err),
            None => Ok(self.stats),
        }
    }

    fn record(&mut self, result: Result<(), cairo::Error>, what: &str) {
        if self.first_error.is_none() {
            self.first_error = result.err().map(|err| map_backend_error(what, err));
        }
    }

    fn text_layout(
        &self,
        text: &str,
        position: Point,
        anchor: TextAnchor,
        scale: f64,
    ) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(self.context);
        let font_description =
            FontDescription::from_string(&format!("Sans {}", self.base_font_size_px * scale));
        layout.set_font_description(Some(&font_description));
        layout.set_text(text);

        let (width, height) = layout.pixel_size();
        let (fx, fy) = anchor.fraction();
        self.context.move_to(
            position.x - f64::from(width) * fx,
            position.y - f64::from(height) * fy,
        );
        layout
    }
}

impl DrawingSurface for CairoSurface<'_> {
    fn draw_line(&mut self, from: Point, to: Point, color: Color, thickness: f64) {
        apply_color(self.context, color);
        self.context.set_line_width(thickness);
        self.context.move_to(from.x, from.y);
        self.context.line_to(to.x, to.y);
        let result = self.context.stroke();
        self.record(result, "failed to stroke line");
        self.stats.lines_drawn += 1;
    }

    fn draw_circle(&mut self, center: Point, radius: f64, color: Color, _segments: u32) {
        apply_color(self.context, color);
        self.context.new_sub_path();
        self.context.arc(center.x, center.y, radius, 0.0, TAU);
        let result = self.context.fill();
        self.record(result, "failed to fill circle");
        self.stats.circles_drawn += 1;
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Point,
        anchor: TextAnchor,
        scale: f64,
        color: Color,
    ) {
        let layout = self.text_layout(text, position, anchor, scale);
        apply_color(self.context, color);
        pangocairo::functions::show_layout(self.context, &layout);
        self.stats.texts_drawn += 1;
    }

    fn draw_outlined_text(
        &mut self,
        text: &str,
        position: Point,
        anchor: TextAnchor,
        scale: f64,
        color: Color,
        outline: TextOutline,
    ) {
        let layout = self.text_layout(text, position, anchor, scale);
        pangocairo::functions::layout_path(self.context, &layout);

        // Stroke is centered on the glyph edge, so double it for the outer width.
        apply_color(self.context, outline.color);
        self.context.set_line_width(outline.thickness * 2.0);
        let result = self.context.stroke_preserve();
        self.record(result, "failed to stroke text outline");

        apply_color(self.context, color);
        let result = self.context.fill();
        self.record(result, "failed to fill text");
        self.stats.texts_drawn += 1;
    }
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context, for example a GTK `DrawingArea` callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &RenderFrame)
    -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    base_font_size_px: f64,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::BLACK,
            base_font_size_px: DEFAULT_BASE_FONT_SIZE_PX,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    pub fn set_base_font_size(&mut self, size_px: f64) -> ChartResult<()> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "base font size must be finite and > 0".to_owned(),
            ));
        }
        self.base_font_size_px = size_px;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the offscreen surface as PNG.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::InvalidData(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut surface = CairoSurface::new(context).with_base_font_size(self.base_font_size_px);
        frame.replay(&mut surface);
        self.last_stats = surface.finish()?;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
