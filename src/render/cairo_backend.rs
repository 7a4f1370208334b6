use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::PI;

use crate::error::{ChartError, ChartResult};
use crate::render::{LayeredFrame, LayerKind, RenderFrame, Renderer, TextMeasurer, TextMetrics};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub polygons_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

impl CairoRenderStats {
    #[must_use]
    const fn merged(self, other: Self) -> Self {
        Self {
            rects_drawn: self.rects_drawn + other.rects_drawn,
            lines_drawn: self.lines_drawn + other.lines_drawn,
            polygons_drawn: self.polygons_drawn + other.polygons_drawn,
            circles_drawn: self.circles_drawn + other.circles_drawn,
            texts_drawn: self.texts_drawn + other.texts_drawn,
        }
    }
}

/// Optional extension trait for renderers that can draw into an external
/// Cairo context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &LayeredFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Every pass renders into a scratch image surface first and blits the
/// finished result in one `paint`, so the visible output is replaced
/// atomically and never observed mid-draw (matters during rapid settings
/// changes such as a color-picker drag).
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
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
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    /// Visible composited surface; hosts may snapshot it (e.g. PNG export
    /// through cairo's own facilities).
    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Recreates the visible surface when the frame viewport changed.
    ///
    /// Recreation discards previous contents, which is fine because frames
    /// always carry the full scene.
    fn ensure_surface_size(&mut self, frame: &LayeredFrame) -> ChartResult<()> {
        let width = i32::try_from(frame.viewport().width)
            .map_err(|_| ChartError::InvalidData("viewport width exceeds i32".to_owned()))?;
        let height = i32::try_from(frame.viewport().height)
            .map_err(|_| ChartError::InvalidData("viewport height exceeds i32".to_owned()))?;

        if self.surface.width() != width || self.surface.height() != height {
            self.surface = ImageSurface::create(Format::ARgb32, width, height)
                .map_err(|err| map_backend_error("failed to resize cairo surface", err))?;
        }
        Ok(())
    }

    /// Draws chart then entries into a fresh scratch surface.
    ///
    /// Layer order is enforced here so entries always composite on top,
    /// regardless of primitive types.
    fn render_to_scratch(&mut self, frame: &LayeredFrame) -> ChartResult<ImageSurface> {
        frame.validate()?;

        let scratch = ImageSurface::create(
            Format::ARgb32,
            self.surface.width(),
            self.surface.height(),
        )
        .map_err(|err| map_backend_error("failed to create scratch surface", err))?;
        let context = Context::new(&scratch)
            .map_err(|err| map_backend_error("failed to create scratch context", err))?;

        let chart_stats = draw_layer(&context, frame.layer(LayerKind::Chart))?;
        let entry_stats = draw_layer(&context, frame.layer(LayerKind::Entries))?;
        self.last_stats = chart_stats.merged(entry_stats);
        Ok(scratch)
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &LayeredFrame) -> ChartResult<()> {
        self.ensure_surface_size(frame)?;
        let scratch = self.render_to_scratch(frame)?;

        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        context
            .set_source_surface(&scratch, 0.0, 0.0)
            .map_err(|err| map_backend_error("failed to source scratch surface", err))?;
        context
            .paint()
            .map_err(|err| map_backend_error("failed to blit scratch surface", err))?;
        Ok(())
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &LayeredFrame,
    ) -> ChartResult<()> {
        self.ensure_surface_size(frame)?;
        let scratch = self.render_to_scratch(frame)?;

        context
            .set_source_surface(&scratch, 0.0, 0.0)
            .map_err(|err| map_backend_error("failed to source scratch surface", err))?;
        context
            .paint()
            .map_err(|err| map_backend_error("failed to blit scratch surface", err))?;
        Ok(())
    }
}

fn draw_layer(context: &Context, frame: &RenderFrame) -> ChartResult<CairoRenderStats> {
    let mut stats = CairoRenderStats::default();

    for rect in &frame.rects {
        apply_color(context, rect.fill_color);
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        stats.rects_drawn += 1;
    }

    for line in &frame.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }

    for polygon in &frame.polygons {
        apply_color(context, polygon.fill_color);
        let mut points = polygon.points.iter();
        if let Some((x, y)) = points.next() {
            context.move_to(*x, *y);
        }
        for (x, y) in points {
            context.line_to(*x, *y);
        }
        context.close_path();
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill polygon", err))?;
        stats.polygons_drawn += 1;
    }

    for circle in &frame.circles {
        apply_color(context, circle.fill_color);
        context.arc(circle.cx, circle.cy, circle.radius, 0.0, 2.0 * PI);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill circle", err))?;
        stats.circles_drawn += 1;
    }

    for text in &frame.texts {
        let layout = pangocairo::functions::create_layout(context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        // TextPrimitive anchors at the baseline; pango layouts anchor at the top.
        let ascent = f64::from(layout.baseline()) / f64::from(pango::SCALE);

        apply_color(context, text.color);
        context.move_to(text.x, text.y - ascent);
        pangocairo::functions::show_layout(context, &layout);
        stats.texts_drawn += 1;
    }

    Ok(stats)
}

/// Pango-backed text measurement for hosts that want backend-accurate label
/// placement instead of the heuristic default.
pub struct PangoTextMeasurer {
    context: Context,
}

impl PangoTextMeasurer {
    pub fn new() -> ChartResult<Self> {
        let surface = ImageSurface::create(Format::ARgb32, 1, 1)
            .map_err(|err| map_backend_error("failed to create measuring surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create measuring context", err))?;
        Ok(Self { context })
    }
}

impl TextMeasurer for PangoTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::default();
        }

        let layout = pangocairo::functions::create_layout(&self.context);
        let font_description = FontDescription::from_string(&format!("Sans {font_size_px}"));
        layout.set_font_description(Some(&font_description));
        layout.set_text(text);

        let (width, _height) = layout.pixel_size();
        TextMetrics {
            width: f64::from(width),
            ascent: f64::from(layout.baseline()) / f64::from(pango::SCALE),
        }
    }
}

fn apply_color(context: &Context, color: crate::render::Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
