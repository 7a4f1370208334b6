use chartedit::core::{
    BoundingRect, ChartPoint, LocalPoint, SurfacePoint, Viewport, chart_to_surface,
    local_to_surface, surface_to_chart,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn chart_surface_round_trip_property(
        x in -10_000.0f64..10_000.0,
        y in -10_000.0f64..10_000.0,
        size in 10u32..10_000
    ) {
        let viewport = Viewport::square(size);
        let surface = chart_to_surface(ChartPoint::new(x, y), viewport);
        let recovered = surface_to_chart(surface, viewport);

        prop_assert!((recovered.x - x).abs() <= 1e-9);
        prop_assert!((recovered.y - y).abs() <= 1e-9);
    }

    #[test]
    fn surface_chart_round_trip_property(
        x in 0.0f64..10_000.0,
        y in 0.0f64..10_000.0,
        size in 10u32..10_000
    ) {
        let viewport = Viewport::square(size);
        let chart = surface_to_chart(SurfacePoint::new(x, y), viewport);
        let recovered = chart_to_surface(chart, viewport);

        prop_assert!((recovered.x - x).abs() <= 1e-9);
        prop_assert!((recovered.y - y).abs() <= 1e-9);
    }

    #[test]
    fn local_mapping_is_affine_in_the_rect(
        left in -2_000.0f64..2_000.0,
        top in -2_000.0f64..2_000.0,
        rect_size in 1.0f64..4_000.0,
        fx in 0.0f64..1.0,
        fy in 0.0f64..1.0,
        size in 10u32..4_000
    ) {
        let viewport = Viewport::square(size);
        let rect = BoundingRect::new(left, top, rect_size, rect_size);
        let local = LocalPoint::new(left + fx * rect_size, top + fy * rect_size);

        let surface = local_to_surface(local, rect, viewport).expect("valid rect");

        // A point a fraction of the way across the rect lands the same
        // fraction across the backing surface.
        prop_assert!((surface.x - fx * f64::from(viewport.width)).abs() <= 1e-6 * f64::from(viewport.width));
        prop_assert!((surface.y - fy * f64::from(viewport.height)).abs() <= 1e-6 * f64::from(viewport.height));
    }

    #[test]
    fn unscaled_rect_mapping_is_identity(
        x in 0.0f64..1_000.0,
        y in 0.0f64..1_000.0
    ) {
        let viewport = Viewport::square(1000);
        let rect = BoundingRect::covering(viewport);

        let surface = local_to_surface(LocalPoint::new(x, y), rect, viewport).expect("valid rect");
        prop_assert!((surface.x - x).abs() <= 1e-9);
        prop_assert!((surface.y - y).abs() <= 1e-9);
    }
}
