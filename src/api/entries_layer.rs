//! Entries overlay layer builder: point circles and name labels.

use crate::core::{ChartEntry, Viewport, chart_to_surface};
use crate::error::ChartResult;
use crate::render::{CirclePrimitive, Color, RenderFrame, TextMeasurer, TextPrimitive};

pub(crate) const ENTRY_RADIUS: f64 = 10.0;
const LABEL_OFFSET: f64 = 12.0;

/// Builds the overlay scene for the ordered entry collection.
///
/// Entries draw in insertion order (earlier entries behind later ones).
/// Labels prefer the up-right corner of the point and flip horizontally or
/// vertically, independently, when they would overflow the surface.
pub(crate) fn build_entries_layer(
    entries: &[ChartEntry],
    entry_name_size: u32,
    viewport: Viewport,
    measurer: &dyn TextMeasurer,
) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(viewport);
    let width = f64::from(viewport.width);
    let font_size = f64::from(entry_name_size);

    for entry in entries {
        let color = Color::from_hex(&entry.color)?;
        let center = chart_to_surface(entry.coords, viewport);
        frame.push_circle(CirclePrimitive::new(
            center.x,
            center.y,
            ENTRY_RADIUS,
            color,
        ));

        if entry.name.is_empty() {
            continue;
        }

        let metrics = measurer.measure(&entry.name, font_size);

        let mut label_x = center.x + LABEL_OFFSET;
        if label_x + metrics.width > width {
            label_x = center.x - metrics.width - LABEL_OFFSET;
        }

        let mut label_y = center.y - LABEL_OFFSET;
        if label_y - metrics.ascent < 0.0 {
            label_y = center.y + metrics.ascent + LABEL_OFFSET;
        }

        frame.push_text(TextPrimitive::new(
            entry.name.clone(),
            label_x,
            label_y,
            font_size,
            color,
        ));
    }

    Ok(frame)
}
