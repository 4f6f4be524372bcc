//! Property-based tests for polygon classification.
//!
//! These tests generate random rectangles, points, and segments and
//! verify the classification invariants against straightforward
//! coordinate checks.
//!
//! Run with: cargo test -p steel-polygon -- proptest

use nalgebra::Point3;
use proptest::prelude::*;
use steel_polygon::{
    point_in_polygon, segment_intersection, segments_of_polygon, PolygonOptions,
};
use steel_types::LineSegment;

/// Generate a random coordinate in a bounded range.
fn arb_coord() -> impl Strategy<Value = f64> {
    -50.0..50.0f64
}

/// Generate a random XY point (z = 0).
fn arb_point() -> impl Strategy<Value = Point3<f64>> {
    (arb_coord(), arb_coord()).prop_map(|(x, y)| Point3::new(x, y, 0.0))
}

/// Generate an axis-aligned rectangle with strictly positive area,
/// as (outline, min corner, max corner).
fn arb_rectangle() -> impl Strategy<Value = (Vec<Point3<f64>>, Point3<f64>, Point3<f64>)> {
    (arb_coord(), arb_coord(), 0.5..40.0f64, 0.5..40.0f64).prop_map(|(x, y, w, h)| {
        let min = Point3::new(x, y, 0.0);
        let max = Point3::new(x + w, y + h, 0.0);
        let outline = vec![
            Point3::new(min.x, min.y, 0.0),
            Point3::new(max.x, min.y, 0.0),
            Point3::new(max.x, max.y, 0.0),
            Point3::new(min.x, max.y, 0.0),
        ];
        (outline, min, max)
    })
}

/// Generate a random segment in the XY plane.
fn arb_segment() -> impl Strategy<Value = LineSegment> {
    (arb_point(), arb_point()).prop_map(|(a, b)| LineSegment::new(a, b))
}

proptest! {
    #[test]
    fn rectangle_containment_matches_coordinate_test(
        (outline, min, max) in arb_rectangle(),
        p in arb_point(),
    ) {
        // Stay clear of the outline by more than the boundary band so
        // neither the half-open tie-break nor boundary inclusion can
        // disagree with the coordinate comparison.
        let clearance = 0.02;
        prop_assume!(
            (p.x - min.x).abs() > clearance && (p.x - max.x).abs() > clearance
                && (p.y - min.y).abs() > clearance && (p.y - max.y).abs() > clearance
        );

        let expected = p.x > min.x && p.x < max.x && p.y > min.y && p.y < max.y;
        let actual = point_in_polygon(&p, &outline, &PolygonOptions::default());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn intersection_is_symmetric(a in arb_segment(), b in arb_segment()) {
        let ab = segment_intersection(&a, &b);
        let ba = segment_intersection(&b, &a);

        match (ab, ba) {
            (Some(p), Some(q)) => {
                prop_assert!((p.x - q.x).abs() < 1e-6);
                prop_assert!((p.y - q.y).abs() < 1e-6);
            }
            (None, None) => {}
            _ => prop_assert!(false, "intersection reported in one direction only"),
        }
    }

    #[test]
    fn intersection_point_lies_on_both_lines(a in arb_segment(), b in arb_segment()) {
        if let Some(p) = segment_intersection(&a, &b) {
            // The crossing must sit within each segment's XY bounding
            // range (endpoints inclusive, with float slack).
            for seg in [&a, &b] {
                let (lo_x, hi_x) = minmax(seg.point1.x, seg.point2.x);
                let (lo_y, hi_y) = minmax(seg.point1.y, seg.point2.y);
                prop_assert!(p.x >= lo_x - 1e-6 && p.x <= hi_x + 1e-6);
                prop_assert!(p.y >= lo_y - 1e-6 && p.y <= hi_y + 1e-6);
            }
            prop_assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn decomposition_chains_and_wraps(points in prop::collection::vec(arb_point(), 2..12)) {
        let closed = segments_of_polygon(&points, true).unwrap();
        prop_assert_eq!(closed.len(), points.len());
        for (i, segment) in closed.iter().enumerate() {
            prop_assert_eq!(segment.point1, points[i]);
            prop_assert_eq!(segment.point2, points[(i + 1) % points.len()]);
        }

        let open = segments_of_polygon(&points, false).unwrap();
        prop_assert_eq!(open.len(), points.len() - 1);
    }

    #[test]
    fn rectangle_corners_are_inside_with_boundary_inclusion(
        (outline, _min, _max) in arb_rectangle(),
    ) {
        for corner in &outline {
            prop_assert!(point_in_polygon(corner, &outline, &PolygonOptions::default()));
        }
    }
}

fn minmax(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
