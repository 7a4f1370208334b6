//! Chart background layer builder: fill, grid, axes, arrowheads, labels.

use crate::core::{ChartSettings, Viewport};
use crate::error::ChartResult;
use crate::render::{
    Color, LinePrimitive, PolygonPrimitive, RectPrimitive, RenderFrame, TextMeasurer, TextPrimitive,
};

const AXIS_STROKE_WIDTH: f64 = 1.0;
const GRID_STROKE_WIDTH: f64 = 1.0;
const LABEL_PADDING: f64 = 10.0;

/// Builds the full chart background scene for the given settings.
///
/// The returned frame is complete; the caller swaps it into the layered
/// frame in one step so the retained layer is never seen half-built.
pub(crate) fn build_chart_layer(
    settings: &ChartSettings,
    viewport: Viewport,
    measurer: &dyn TextMeasurer,
) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(viewport);

    let chart_color = Color::from_hex(&settings.chart_color)?;
    let axis_color = Color::from_hex(&settings.axis_color)?;
    let grid_color = Color::from_hex(&settings.grid_color)?;

    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let half_width = width / 2.0;
    let half_height = height / 2.0;
    // Axis lines get a half-pixel nudge on even midpoints so a 1px stroke
    // lands on a pixel boundary instead of blurring across two. Arrowheads
    // keep the unadjusted midpoint.
    let axis_x = crisp_line_position(half_width);
    let axis_y = crisp_line_position(half_height);

    frame.push_rect(RectPrimitive::new(0.0, 0.0, width, height, chart_color));

    if settings.grid_size > 0 {
        let step = f64::from(settings.grid_size);

        let mut y = half_height;
        while y > 0.0 {
            frame.push_line(LinePrimitive::new(
                0.0,
                y,
                width,
                y,
                GRID_STROKE_WIDTH,
                grid_color,
            ));
            y -= step;
        }
        let mut y = half_height;
        while y < height {
            frame.push_line(LinePrimitive::new(
                0.0,
                y,
                width,
                y,
                GRID_STROKE_WIDTH,
                grid_color,
            ));
            y += step;
        }

        let mut x = half_width;
        while x > 0.0 {
            frame.push_line(LinePrimitive::new(
                x,
                0.0,
                x,
                height,
                GRID_STROKE_WIDTH,
                grid_color,
            ));
            x -= step;
        }
        let mut x = half_width;
        while x < width {
            frame.push_line(LinePrimitive::new(
                x,
                0.0,
                x,
                height,
                GRID_STROKE_WIDTH,
                grid_color,
            ));
            x += step;
        }
    }

    // Y axis with an upward arrowhead flush against the top edge.
    frame.push_line(LinePrimitive::new(
        axis_x,
        0.0,
        axis_x,
        height,
        AXIS_STROKE_WIDTH,
        axis_color,
    ));
    let arrow = f64::from(settings.arrow_size);
    frame.push_polygon(PolygonPrimitive::triangle(
        (half_width, 0.0),
        (half_width - arrow, arrow),
        (half_width + arrow, arrow),
        axis_color,
    ));

    // X axis with a rightward arrowhead flush against the right edge.
    frame.push_line(LinePrimitive::new(
        0.0,
        axis_y,
        width,
        axis_y,
        AXIS_STROKE_WIDTH,
        axis_color,
    ));
    frame.push_polygon(PolygonPrimitive::triangle(
        (width, half_height),
        (width - arrow, half_height - arrow),
        (width - arrow, half_height + arrow),
        axis_color,
    ));

    // Axis-end labels. The vertical clearance accounts for the arrowhead so
    // the top label never sits under it.
    let label_size = f64::from(settings.label_size);
    let arrow_offset = arrow.max(LABEL_PADDING);

    push_label(
        &mut frame,
        &settings.top_label,
        half_width + LABEL_PADDING,
        arrow_offset + 20.0,
        label_size,
        axis_color,
    );

    if !settings.right_label.is_empty() {
        // Right-justified against the surface edge using measured width.
        let metrics = measurer.measure(&settings.right_label, label_size);
        frame.push_text(TextPrimitive::new(
            settings.right_label.clone(),
            width - metrics.width - arrow_offset,
            half_height + 30.0,
            label_size,
            axis_color,
        ));
    }

    push_label(
        &mut frame,
        &settings.bottom_label,
        half_width + LABEL_PADDING,
        height - LABEL_PADDING,
        label_size,
        axis_color,
    );
    push_label(
        &mut frame,
        &settings.left_label,
        LABEL_PADDING,
        half_height + 30.0,
        label_size,
        axis_color,
    );

    Ok(frame)
}

/// +0.5 on even pixel midpoints; fractional and odd midpoints pass through.
fn crisp_line_position(mid: f64) -> f64 {
    if mid % 2.0 == 0.0 { mid + 0.5 } else { mid }
}

fn push_label(frame: &mut RenderFrame, text: &str, x: f64, y: f64, font_size: f64, color: Color) {
    if text.is_empty() {
        return;
    }
    frame.push_text(TextPrimitive::new(text.to_owned(), x, y, font_size, color));
}
