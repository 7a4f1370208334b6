mod frame;
mod layered_frame;
mod measure;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use layered_frame::{LayerKind, LayeredFrame};
pub use measure::{HeuristicTextMeasurer, TextMeasurer, TextMetrics};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PolygonPrimitive, RectPrimitive, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive the fully materialized layered scene and must draw the
/// chart layer before the entries layer, so entries always composite on
/// top. Drawing code stays isolated from editor domain and interaction
/// logic.
pub trait Renderer {
    fn render(&mut self, frame: &LayeredFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer, PangoTextMeasurer};
