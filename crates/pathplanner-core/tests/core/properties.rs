use pathplanner_core::coordinates::CoordinateSystem;
use pathplanner_core::geometry::*;
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Point> {
    (-72.0f64..=72.0, -72.0f64..=72.0).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn canvas_round_trip_is_identity(x in -72.0f64..=72.0, y in -72.0f64..=72.0, size in 100.0f64..2000.0) {
        let cs = CoordinateSystem::new(size);
        let (px, py) = cs.field_to_canvas(x, y);
        let (fx, fy) = cs.canvas_to_field(px, py);
        prop_assert!((fx - x).abs() < 1e-6);
        prop_assert!((fy - y).abs() < 1e-6);
    }

    #[test]
    fn adaptive_count_stays_in_bounds(
        p0 in point(), p1 in point(), p2 in point(), p3 in point(),
        max_len in 0.1f64..50.0, min in 1usize..10, extra in 0usize..30,
    ) {
        let opts = AdaptiveOptions { max_segment_length: max_len, min_segments: min, max_segments: min + extra };
        let n = adaptive_segment_count(&[p0, p1, p2, p3], &opts);
        prop_assert!(n >= opts.min_segments && n <= opts.max_segments);
        let n = adaptive_segment_count(&[p0, p1, p2], &opts);
        prop_assert!(n >= opts.min_segments && n <= opts.max_segments);
    }

    #[test]
    fn bezier_endpoints_are_exact(p0 in point(), p1 in point(), p2 in point(), p3 in point()) {
        prop_assert_eq!(quadratic_bezier(p0, p1, p2, 0.0), p0);
        prop_assert_eq!(quadratic_bezier(p0, p1, p2, 1.0), p2);
        prop_assert_eq!(cubic_bezier(p0, p1, p2, p3, 0.0), p0);
        prop_assert_eq!(cubic_bezier(p0, p1, p2, p3, 1.0), p3);
    }

    #[test]
    fn segment_distance_never_exceeds_endpoint_distance(p in point(), a in point(), b in point()) {
        let d = point_to_segment_distance(p, a, b);
        prop_assert!(d <= p.distance_to(&a) + 1e-9);
        prop_assert!(d <= p.distance_to(&b) + 1e-9);
    }

    #[test]
    fn normalized_angles_are_in_range(angle in -1.0e6f64..1.0e6) {
        let a = normalize_angle(angle);
        prop_assert!((0.0..360.0).contains(&a));
    }

    #[test]
    fn angle_difference_is_bounded(from in -720.0f64..720.0, to in -720.0f64..720.0) {
        let d = angle_difference(from, to);
        prop_assert!((-180.0..=180.0).contains(&d));
    }
}
