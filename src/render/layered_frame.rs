use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::RenderFrame;

/// The two independently rebuilt drawing layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    /// Static background: fill, grid, axes, arrowheads, axis labels.
    Chart,
    /// Dynamic overlay: entry circles and name labels.
    Entries,
}

/// Retained per-layer frames composited for display.
///
/// Layers are replaced wholesale through [`LayeredFrame::set_layer`]: a
/// builder assembles the full scene off to the side and the swap is atomic,
/// so a partially built layer is never observable. Resizing clears both
/// layers, which is why each layer is fully rebuilt rather than patched.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredFrame {
    viewport: Viewport,
    chart: RenderFrame,
    entries: RenderFrame,
}

impl LayeredFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            chart: RenderFrame::new(viewport),
            entries: RenderFrame::new(viewport),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> &RenderFrame {
        match kind {
            LayerKind::Chart => &self.chart,
            LayerKind::Entries => &self.entries,
        }
    }

    /// Atomically replaces one layer with a fully built frame.
    pub fn set_layer(&mut self, kind: LayerKind, frame: RenderFrame) {
        match kind {
            LayerKind::Chart => self.chart = frame,
            LayerKind::Entries => self.entries = frame,
        }
    }

    /// Tracks a new surface size, discarding both layer contents.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.chart = RenderFrame::new(viewport);
        self.entries = RenderFrame::new(viewport);
    }

    /// Flattens chart then entries into one primitive batch.
    ///
    /// Useful for stats and assertions; backends should prefer drawing the
    /// layers separately so layer order always wins over primitive type
    /// order.
    #[must_use]
    pub fn composite(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        frame.extend_from(&self.chart);
        frame.extend_from(&self.entries);
        frame
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.chart.validate()?;
        self.entries.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{LayerKind, LayeredFrame};
    use crate::core::Viewport;
    use crate::render::{CirclePrimitive, Color, RectPrimitive, RenderFrame};

    #[test]
    fn composite_orders_chart_before_entries() {
        let viewport = Viewport::square(100);
        let mut layered = LayeredFrame::new(viewport);

        let mut chart = RenderFrame::new(viewport);
        chart.push_rect(RectPrimitive::new(
            0.0,
            0.0,
            100.0,
            100.0,
            Color::rgb(1.0, 1.0, 1.0),
        ));
        let mut entries = RenderFrame::new(viewport);
        entries.push_circle(CirclePrimitive::new(
            10.0,
            10.0,
            10.0,
            Color::rgb(0.0, 0.0, 0.0),
        ));

        layered.set_layer(LayerKind::Entries, entries);
        layered.set_layer(LayerKind::Chart, chart);

        let composite = layered.composite();
        assert_eq!(composite.rects.len(), 1);
        assert_eq!(composite.circles.len(), 1);
    }

    #[test]
    fn resize_discards_layer_contents() {
        let mut layered = LayeredFrame::new(Viewport::square(100));
        let mut entries = RenderFrame::new(Viewport::square(100));
        entries.push_circle(CirclePrimitive::new(
            5.0,
            5.0,
            10.0,
            Color::rgb(0.0, 0.0, 0.0),
        ));
        layered.set_layer(LayerKind::Entries, entries);

        layered.resize(Viewport::square(200));
        assert!(layered.layer(LayerKind::Entries).is_empty());
        assert_eq!(layered.viewport(), Viewport::square(200));
    }
}
