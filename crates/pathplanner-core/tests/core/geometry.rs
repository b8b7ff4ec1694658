use pathplanner_core::geometry::*;

fn approx(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn test_point_arithmetic() {
    let a = Point::new(1.0, 2.0);
    let b = Point::new(3.0, -1.0);
    assert_eq!(a + b, Point::new(4.0, 1.0));
    assert_eq!(b - a, Point::new(2.0, -3.0));
    assert_eq!(a * 2.0, Point::new(2.0, 4.0));
    assert_eq!(2.0 * a, Point::new(2.0, 4.0));
}

#[test]
fn test_lerp_point_midpoint() {
    let mid = lerp_point(Point::new(0.0, 0.0), Point::new(10.0, -4.0), 0.5);
    assert!(approx(mid, Point::new(5.0, -2.0)));
}

#[test]
fn test_quadratic_bezier_endpoints_and_midpoint() {
    let p0 = Point::new(0.0, 0.0);
    let p1 = Point::new(10.0, 20.0);
    let p2 = Point::new(20.0, 0.0);
    assert_eq!(quadratic_bezier(p0, p1, p2, 0.0), p0);
    assert_eq!(quadratic_bezier(p0, p1, p2, 1.0), p2);
    assert!(approx(quadratic_bezier(p0, p1, p2, 0.5), Point::new(10.0, 10.0)));
}

#[test]
fn test_cubic_bezier_endpoints() {
    let p0 = Point::new(-5.0, 3.0);
    let p1 = Point::new(0.0, 30.0);
    let p2 = Point::new(12.0, -8.0);
    let p3 = Point::new(40.0, 7.5);
    assert_eq!(cubic_bezier(p0, p1, p2, p3, 0.0), p0);
    assert_eq!(cubic_bezier(p0, p1, p2, p3, 1.0), p3);
}

#[test]
fn test_uniform_decomposition_includes_endpoints() {
    let p0 = Point::new(0.0, 0.0);
    let p1 = Point::new(5.0, 10.0);
    let p2 = Point::new(10.0, 0.0);
    let points = decompose_quadratic_bezier(p0, p1, p2, 4);
    assert_eq!(points.len(), 5);
    assert_eq!(points[0], p0);
    assert_eq!(points[4], p2);

    let cubic = decompose_cubic_bezier(p0, p1, p1, p2, 7);
    assert_eq!(cubic.len(), 8);
    assert_eq!(cubic[7], p2);
}

#[test]
fn test_zero_segments_is_treated_as_one() {
    let p0 = Point::new(0.0, 0.0);
    let p2 = Point::new(1.0, 1.0);
    let points = decompose_quadratic_bezier(p0, p0, p2, 0);
    assert_eq!(points, vec![p0, p2]);
}

#[test]
fn test_polyline_length() {
    assert_eq!(polyline_length(&[]), 0.0);
    assert_eq!(polyline_length(&[Point::new(1.0, 1.0)]), 0.0);
    let pts = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(3.0, 10.0)];
    assert!((polyline_length(&pts) - 11.0).abs() < 1e-12);
}

#[test]
fn test_adaptive_count_rounds_and_clamps() {
    let opts = AdaptiveOptions::default();
    // Control polygon 0 -> 30 -> 30+27 = 57in => 57 / 6 = 9.5 => rounds to 10
    let p0 = Point::new(0.0, 0.0);
    let p1 = Point::new(0.0, 30.0);
    let p2 = Point::new(27.0, 30.0);
    assert_eq!(adaptive_segment_count(&[p0, p1, p2], &opts), 10);
    assert_eq!(adaptive_decompose_quadratic(p0, p1, p2, &opts).len(), 11);

    // Tiny curve hits the minimum
    let short = [p0, Point::new(0.5, 0.5), Point::new(1.0, 0.0)];
    assert_eq!(adaptive_segment_count(&short, &opts), 3);

    // Huge curve hits the maximum
    let long = [
        Point::new(-72.0, -72.0),
        Point::new(72.0, 72.0),
        Point::new(-72.0, 72.0),
        Point::new(72.0, -72.0),
    ];
    assert_eq!(adaptive_segment_count(&long, &opts), 20);
    assert_eq!(
        adaptive_decompose_cubic(long[0], long[1], long[2], long[3], &opts).len(),
        21
    );
}

#[test]
fn test_adaptive_count_with_degenerate_options() {
    let pts = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
    let opts = AdaptiveOptions {
        max_segment_length: 0.0,
        min_segments: 2,
        max_segments: 8,
    };
    assert_eq!(adaptive_segment_count(&pts, &opts), 8);

    let swapped = AdaptiveOptions {
        max_segment_length: 1.0,
        min_segments: 9,
        max_segments: 4,
    };
    let n = adaptive_segment_count(&pts, &swapped);
    assert!((4..=9).contains(&n));
}

#[test]
fn test_adaptive_count_never_zero() {
    let p0 = Point::new(0.0, 0.0);
    let p1 = Point::new(0.5, 0.0);
    let p2 = Point::new(1.0, 0.0);
    let opts = AdaptiveOptions {
        max_segment_length: 6.0,
        min_segments: 0,
        max_segments: 0,
    };
    assert_eq!(adaptive_segment_count(&[p0, p1, p2], &opts), 1);

    let opts = AdaptiveOptions {
        max_segment_length: 6.0,
        min_segments: 0,
        max_segments: 20,
    };
    let n = adaptive_segment_count(&[p0, p1, p2], &opts);
    assert_eq!(n, 1);
    assert_eq!(adaptive_decompose_quadratic(p0, p1, p2, &opts).len(), n + 1);
}

#[test]
fn test_point_to_segment_distance() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 0.0);
    // Perpendicular foot inside the segment
    assert!((point_to_segment_distance(Point::new(5.0, 3.0), a, b) - 3.0).abs() < 1e-12);
    // Beyond the end clamps to the endpoint
    assert!((point_to_segment_distance(Point::new(13.0, 4.0), a, b) - 5.0).abs() < 1e-12);
    // Before the start clamps to the start
    assert!((point_to_segment_distance(Point::new(-3.0, -4.0), a, b) - 5.0).abs() < 1e-12);
}

#[test]
fn test_point_to_degenerate_segment() {
    let a = Point::new(2.0, 2.0);
    let d = point_to_segment_distance(Point::new(5.0, 6.0), a, a);
    assert!((d - 5.0).abs() < 1e-12);
}

#[test]
fn test_normalize_angle() {
    assert_eq!(normalize_angle(0.0), 0.0);
    assert_eq!(normalize_angle(360.0), 0.0);
    assert!((normalize_angle(-90.0) - 270.0).abs() < 1e-12);
    assert!((normalize_angle(725.0) - 5.0).abs() < 1e-9);
    assert!(normalize_angle(-1e-20) < 360.0);
}

#[test]
fn test_angle_difference_takes_short_way() {
    assert!((angle_difference(350.0, 10.0) - 20.0).abs() < 1e-9);
    assert!((angle_difference(10.0, 350.0) + 20.0).abs() < 1e-9);
    assert!((angle_difference(0.0, 180.0) - 180.0).abs() < 1e-9);
    assert!((angle_difference(90.0, 90.0)).abs() < 1e-12);
}
