/// Measured extents of a single-line text run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    /// Advance width in pixels.
    pub width: f64,
    /// Baseline-to-top ascent in pixels.
    pub ascent: f64,
}

/// Text measurement used by the layer builders for label justification and
/// edge-overflow flipping.
///
/// Builders measure before any backend draws, so measurement is a separate
/// capability rather than part of [`crate::render::Renderer`].
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextMetrics;
}

/// Deterministic, backend-independent measurer used by default and in tests.
///
/// Widths come from per-class character advances scaled by the font size.
/// The estimate intentionally ignores shaping and kerning.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::default();
        }

        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        });

        TextMetrics {
            width: units * font_size_px,
            ascent: font_size_px * 0.8,
        }
    }
}
