use crate::error::ChartResult;
use crate::render::{LayeredFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_calls: usize,
    pub last_rect_count: usize,
    pub last_line_count: usize,
    pub last_polygon_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &LayeredFrame) -> ChartResult<()> {
        frame.validate()?;
        let composite = frame.composite();
        self.render_calls += 1;
        self.last_rect_count = composite.rects.len();
        self.last_line_count = composite.lines.len();
        self.last_polygon_count = composite.polygons.len();
        self.last_circle_count = composite.circles.len();
        self.last_text_count = composite.texts.len();
        Ok(())
    }
}
