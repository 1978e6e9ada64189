//! Property tests for the rasterizers.
//!
//! Cross-checks between algorithms that must agree, plus the structural laws
//! each algorithm guarantees on its own.
//!
//! Run: cargo test --test raster_properties_test

#![allow(clippy::unwrap_used, missing_docs)]

use std::collections::HashSet;

use proptest::prelude::*;
use trueno_raster::prelude::{
    bresenham_circle, bresenham_line, dda_line, midpoint_circle, midpoint_ellipse, midpoint_line,
    midpoint_line_with, Error, OctantPolicy, Point, RasterConfig,
};

fn point_set(points: &[Point]) -> HashSet<Point> {
    points.iter().copied().collect()
}

fn lattice_point(range: std::ops::Range<i32>) -> impl Strategy<Value = Point> {
    (range.clone(), range).prop_map(|(x, y)| Point::new(x, y))
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn scenario_bresenham_shallow_line() {
    let points = bresenham_line(Point::new(0, 0), Point::new(3, 1));
    assert_eq!(
        points,
        vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 1), Point::new(3, 1)]
    );
}

#[test]
fn scenario_midpoint_circle_zero_radius() {
    let points = midpoint_circle(Point::new(0, 0), 0).unwrap();
    assert_eq!(points.len(), 8);
    assert!(points.iter().all(|&p| p == Point::new(0, 0)));
}

#[test]
fn scenario_dda_zero_length() {
    let points = dda_line(Point::new(0, 0), Point::new(0, 0)).unwrap();
    assert_eq!(points, vec![Point::new(0, 0)]);
}

// ============================================================================
// Circle and ellipse cross-checks (exhaustive radii)
// ============================================================================

#[test]
fn circle_algorithms_agree_for_all_small_radii() {
    for r in 0..=50 {
        let mid = midpoint_circle(Point::ORIGIN, r).unwrap();
        let bres = bresenham_circle(Point::ORIGIN, r).unwrap();
        assert_eq!(point_set(&mid), point_set(&bres), "radius {r}");
    }
}

#[test]
fn ellipse_with_equal_axes_is_the_circle() {
    for r in 0..=50 {
        let ellipse = point_set(&midpoint_ellipse(Point::ORIGIN, r, r).unwrap());
        let mid = point_set(&midpoint_circle(Point::ORIGIN, r).unwrap());
        let bres = point_set(&bresenham_circle(Point::ORIGIN, r).unwrap());
        assert_eq!(ellipse, mid, "radius {r} vs midpoint circle");
        assert_eq!(ellipse, bres, "radius {r} vs bresenham circle");
    }
}

#[test]
fn circle_algorithms_agree_for_large_radii() {
    for r in [99, 128, 255, 377, 500] {
        let mid = midpoint_circle(Point::new(-3, 11), r).unwrap();
        let bres = bresenham_circle(Point::new(-3, 11), r).unwrap();
        assert_eq!(point_set(&mid), point_set(&bres), "radius {r}");
    }
}

// ============================================================================
// Property-based tests with proptest
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Bresenham: starts at start, ends at end, one point per dominant step
    #[test]
    fn prop_bresenham_endpoints_and_count(
        start in lattice_point(-1000..1000),
        end in lattice_point(-1000..1000)
    ) {
        let points = bresenham_line(start, end);
        let expected = start.chebyshev_distance(end) as usize + 1;

        prop_assert_eq!(points.first(), Some(&start));
        prop_assert_eq!(points.last(), Some(&end));
        prop_assert_eq!(points.len(), expected);
        prop_assert_eq!(points.iter().filter(|&&p| p == end).count(), 1);
    }

    /// Bresenham: consecutive points are 8-connected neighbours
    #[test]
    fn prop_bresenham_is_connected(
        start in lattice_point(-500..500),
        end in lattice_point(-500..500)
    ) {
        let points = bresenham_line(start, end);
        for w in points.windows(2) {
            prop_assert_eq!(w[0].chebyshev_distance(w[1]), 1);
        }
    }

    /// DDA and Bresenham agree on axis-aligned segments
    #[test]
    fn prop_dda_matches_bresenham_on_axes(
        start in lattice_point(-1000..1000),
        len in -200i32..200,
        vertical in any::<bool>()
    ) {
        let end = if vertical { start.offset(0, len) } else { start.offset(len, 0) };
        prop_assert_eq!(dda_line(start, end).unwrap(), bresenham_line(start, end));
    }

    /// DDA and Bresenham agree on 45-degree diagonals
    #[test]
    fn prop_dda_matches_bresenham_on_diagonals(
        start in lattice_point(-1000..1000),
        len in -200i32..200,
        flip in any::<bool>()
    ) {
        let end = start.offset(len, if flip { -len } else { len });
        prop_assert_eq!(dda_line(start, end).unwrap(), bresenham_line(start, end));
    }

    /// DDA on integer input: steps + 1 points, exact endpoints, connected
    #[test]
    fn prop_dda_integer_segment_shape(
        start in lattice_point(-1000..1000),
        end in lattice_point(-1000..1000)
    ) {
        let points = dda_line(start, end).unwrap();

        prop_assert_eq!(points.len(), start.chebyshev_distance(end) as usize + 1);
        prop_assert_eq!(points.first(), Some(&start));
        prop_assert_eq!(points.last(), Some(&end));
        for w in points.windows(2) {
            prop_assert!(w[0].chebyshev_distance(w[1]) <= 1);
        }
    }

    /// Midpoint line in its octant: dx + 1 points, x strictly increasing,
    /// y rising by 0 or 1 and landing on end
    #[test]
    fn prop_midpoint_line_first_octant(
        start in lattice_point(-1000..1000),
        dx in 0i32..300,
        slope in 0.0f64..=1.0
    ) {
        let dy = (f64::from(dx) * slope).floor() as i32;
        let end = start.offset(dx, dy);
        let strict = RasterConfig::new().with_octant_policy(OctantPolicy::Strict);

        let points = midpoint_line_with(start, end, &strict).unwrap();

        prop_assert_eq!(points.len(), dx as usize + 1);
        prop_assert_eq!(points.first(), Some(&start));
        prop_assert_eq!(points.last(), Some(&end));
        for w in points.windows(2) {
            prop_assert_eq!(w[1].x - w[0].x, 1);
            prop_assert!((0..=1).contains(&(w[1].y - w[0].y)));
        }
    }

    /// Midpoint line outside its octant still terminates with bounded output
    #[test]
    fn prop_midpoint_line_out_of_octant_terminates(
        start in lattice_point(-1000..1000),
        end in lattice_point(-1000..1000)
    ) {
        let points = midpoint_line(start, end);
        let expected = (end.x - start.x).max(0) as usize + 1;
        prop_assert_eq!(points.len(), expected);
        prop_assert_eq!(points[0], start);
    }

    /// Circle algorithms agree as point sets for any center
    #[test]
    fn prop_circles_agree_anywhere(
        center in lattice_point(-10_000..10_000),
        radius in 0i32..=50
    ) {
        let mid = midpoint_circle(center, radius).unwrap();
        let bres = bresenham_circle(center, radius).unwrap();
        prop_assert_eq!(point_set(&mid), point_set(&bres));
    }

    /// A circle is a degenerate ellipse, for any center
    #[test]
    fn prop_ellipse_equal_axes_anywhere(
        center in lattice_point(-10_000..10_000),
        radius in 0i32..=50
    ) {
        let ellipse = midpoint_ellipse(center, radius, radius).unwrap();
        let circle = midpoint_circle(center, radius).unwrap();
        prop_assert_eq!(point_set(&ellipse), point_set(&circle));
    }

    /// Ellipse output stays inside its bounding box and reaches the vertical
    /// extremes; the horizontal extremes are reached unless the ellipse is
    /// very flat (region 2 hits the x axis first)
    #[test]
    fn prop_ellipse_bounded_and_touches_extremes(
        center in lattice_point(-10_000..10_000),
        rx in 1i32..=60,
        ry in 1i32..=60
    ) {
        let points = point_set(&midpoint_ellipse(center, rx, ry).unwrap());

        for p in &points {
            prop_assert!((p.x - center.x).abs() <= rx);
            prop_assert!((p.y - center.y).abs() <= ry);
        }
        prop_assert!(points.contains(&center.offset(0, ry)));
        prop_assert!(points.contains(&center.offset(0, -ry)));
        if rx <= 4 * ry {
            prop_assert!(points.contains(&center.offset(rx, 0)));
            prop_assert!(points.contains(&center.offset(-rx, 0)));
        }
    }

    /// Every rasterizer is pure: same input, same output
    #[test]
    fn prop_rasterizers_are_idempotent(
        a in lattice_point(-500..500),
        b in lattice_point(-500..500),
        r in 0i32..=40,
        r2 in 0i32..=40
    ) {
        prop_assert_eq!(dda_line(a, b).unwrap(), dda_line(a, b).unwrap());
        prop_assert_eq!(midpoint_line(a, b), midpoint_line(a, b));
        prop_assert_eq!(bresenham_line(a, b), bresenham_line(a, b));
        prop_assert_eq!(midpoint_circle(a, r).unwrap(), midpoint_circle(a, r).unwrap());
        prop_assert_eq!(bresenham_circle(a, r).unwrap(), bresenham_circle(a, r).unwrap());
        prop_assert_eq!(midpoint_ellipse(a, r, r2).unwrap(), midpoint_ellipse(a, r, r2).unwrap());
    }

    /// Negative radii are always rejected, never looped on
    #[test]
    fn prop_negative_radius_rejected(
        center in lattice_point(-100..100),
        radius in i32::MIN..0
    ) {
        let is_negative_radius = |r: trueno_raster::Result<Vec<Point>>| matches!(r, Err(Error::NegativeRadius { .. }));
        prop_assert!(is_negative_radius(midpoint_circle(center, radius)));
        prop_assert!(is_negative_radius(bresenham_circle(center, radius)));
        prop_assert!(is_negative_radius(midpoint_ellipse(center, radius, 3)));
        prop_assert!(is_negative_radius(midpoint_ellipse(center, 3, radius)));
    }
}

// ============================================================================
// Threading
// ============================================================================

#[test]
fn rasterizers_are_reentrant_across_threads() {
    let expected = midpoint_ellipse(Point::new(4, 4), 30, 12).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| midpoint_ellipse(Point::new(4, 4), 30, 12).unwrap()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
