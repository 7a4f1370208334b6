//! Pure transforms among the three coordinate spaces.
//!
//! Local/client space covers raw pointer positions, surface space is raster
//! pixel addressing (top-left origin, y-down), chart space is the
//! mathematical plane users edit in (center origin, y-up). These functions
//! are stateless and must stay bit-exact: drag round-trips depend on
//! `surface_to_chart` being the exact inverse of `chart_to_surface`.

use crate::core::geometry::{BoundingRect, ChartPoint, LocalPoint, SurfacePoint, Viewport};
use crate::error::{ChartError, ChartResult};

/// Maps a pointer position into surface pixel coordinates.
///
/// Scales through the on-screen rect so CSS-style widget scaling (on-screen
/// size differing from backing pixels) is accounted for.
pub fn local_to_surface(
    local: LocalPoint,
    rect: BoundingRect,
    viewport: Viewport,
) -> ChartResult<SurfacePoint> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    if !rect.is_valid() {
        return Err(ChartError::InvalidData(
            "bounding rect must have finite positive size".to_owned(),
        ));
    }

    Ok(SurfacePoint::new(
        (local.x - rect.left) / rect.width * f64::from(viewport.width),
        (local.y - rect.top) / rect.height * f64::from(viewport.height),
    ))
}

/// Maps a surface pixel position into chart space (center origin, y-up).
#[must_use]
pub fn surface_to_chart(surface: SurfacePoint, viewport: Viewport) -> ChartPoint {
    let half_width = f64::from(viewport.width) / 2.0;
    let half_height = f64::from(viewport.height) / 2.0;

    ChartPoint::new(surface.x - half_width, half_height - surface.y)
}

/// Maps a chart-space position into surface pixels. Inverse of [`surface_to_chart`].
#[must_use]
pub fn chart_to_surface(chart: ChartPoint, viewport: Viewport) -> SurfacePoint {
    let half_width = f64::from(viewport.width) / 2.0;
    let half_height = f64::from(viewport.height) / 2.0;

    SurfacePoint::new(half_width + chart.x, half_height - chart.y)
}
