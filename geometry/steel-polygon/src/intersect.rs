//! Segment-segment intersection in the XY plane.

use nalgebra::Point3;
use steel_types::LineSegment;

use crate::decompose::segments_of_polygon;
use crate::error::PolygonResult;

/// Intersection point of two segments, projected to the XY plane.
///
/// Solves the standard parametric two-line system on the X/Y
/// coordinates; Z is ignored and the returned point carries `z = 0`.
/// Segments touching at an endpoint count as intersecting (both
/// parameters may sit exactly on 0 or 1).
///
/// An exactly zero denominator — parallel or collinear segments —
/// reports no intersection. Collinear *overlapping* segments are
/// therefore also reported as non-intersecting; the overlap region has
/// no single intersection point to return.
///
/// # Example
///
/// ```
/// use steel_polygon::segment_intersection;
/// use steel_types::LineSegment;
/// use nalgebra::Point3;
///
/// let rising = LineSegment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 2.0, 0.0));
/// let falling = LineSegment::new(Point3::new(0.0, 2.0, 0.0), Point3::new(2.0, 0.0, 0.0));
///
/// let cross = segment_intersection(&rising, &falling).unwrap();
/// assert_eq!(cross, Point3::new(1.0, 1.0, 0.0));
/// ```
#[must_use]
pub fn segment_intersection(
    segment1: &LineSegment,
    segment2: &LineSegment,
) -> Option<Point3<f64>> {
    let (x1, y1) = (segment1.point1.x, segment1.point1.y);
    let (x2, y2) = (segment1.point2.x, segment1.point2.y);
    let (x3, y3) = (segment2.point1.x, segment2.point1.y);
    let (x4, y4) = (segment2.point2.x, segment2.point2.y);

    let denominator = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
    if denominator == 0.0 {
        // Parallel or collinear.
        return None;
    }

    let t = ((x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3)) / denominator;
    let u = ((x2 - x1) * (y1 - y3) - (y2 - y1) * (x1 - x3)) / denominator;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(Point3::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1), 0.0))
    } else {
        None
    }
}

/// All pairwise intersection points between two segment collections.
#[must_use]
pub fn segments_intersections(
    segments1: &[LineSegment],
    segments2: &[LineSegment],
) -> Vec<Point3<f64>> {
    let mut result = Vec::new();
    for segment1 in segments1 {
        for segment2 in segments2 {
            if let Some(point) = segment_intersection(segment1, segment2) {
                result.push(point);
            }
        }
    }
    result
}

/// All intersection points between the outlines of two closed polygons.
///
/// # Errors
///
/// Returns [`crate::PolygonError::InsufficientPoints`] when either
/// polygon has fewer than two points.
pub fn polygon_intersections(
    polygon1: &[Point3<f64>],
    polygon2: &[Point3<f64>],
) -> PolygonResult<Vec<Point3<f64>>> {
    let segments1 = segments_of_polygon(polygon1, true)?;
    let segments2 = segments_of_polygon(polygon2, true)?;
    Ok(segments_intersections(&segments1, &segments2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment {
        LineSegment::new(Point3::new(x1, y1, 0.0), Point3::new(x2, y2, 0.0))
    }

    #[test]
    fn crossing_diagonals_meet_in_the_middle() {
        let cross = segment_intersection(&seg(0.0, 0.0, 2.0, 2.0), &seg(0.0, 2.0, 2.0, 0.0));
        assert_eq!(cross, Some(Point3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        assert!(segment_intersection(&seg(0.0, 0.0, 1.0, 0.0), &seg(0.0, 1.0, 1.0, 1.0)).is_none());
    }

    #[test]
    fn collinear_overlap_is_reported_as_no_intersection() {
        // Known limitation: the overlap has no single crossing point.
        assert!(segment_intersection(&seg(0.0, 0.0, 2.0, 0.0), &seg(1.0, 0.0, 3.0, 0.0)).is_none());
    }

    #[test]
    fn touching_endpoints_count_as_intersecting() {
        let meet = segment_intersection(&seg(0.0, 0.0, 1.0, 1.0), &seg(1.0, 1.0, 2.0, 0.0));
        let meet = meet.unwrap();
        assert_relative_eq!(meet.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(meet.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn lines_crossing_beyond_segment_ends_do_not_intersect() {
        // The infinite lines cross at (3, 3), outside both segments.
        assert!(segment_intersection(&seg(0.0, 0.0, 1.0, 1.0), &seg(4.0, 2.0, 2.0, 4.0)).is_none());
    }

    #[test]
    fn intersection_flattens_z() {
        let a = LineSegment::new(Point3::new(0.0, 0.0, 5.0), Point3::new(2.0, 2.0, 5.0));
        let b = LineSegment::new(Point3::new(0.0, 2.0, -3.0), Point3::new(2.0, 0.0, 7.0));
        let cross = segment_intersection(&a, &b).unwrap();
        assert_eq!(cross.z, 0.0);
    }

    #[test]
    fn overlapping_squares_cross_twice() {
        let square1 = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        ];
        // Same square shifted diagonally by (1, 1); the outlines cross
        // where one square's edge enters the other.
        let square2: Vec<_> = square1
            .iter()
            .map(|p| Point3::new(p.x + 1.0, p.y + 1.0, 0.0))
            .collect();

        let crossings = polygon_intersections(&square1, &square2).unwrap();
        assert_eq!(crossings.len(), 2);
        for expected in [(2.0, 1.0), (1.0, 2.0)] {
            assert!(crossings
                .iter()
                .any(|p| (p.x - expected.0).abs() < 1e-9 && (p.y - expected.1).abs() < 1e-9));
        }
    }

    #[test]
    fn degenerate_polygons_are_rejected() {
        let square = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        assert!(polygon_intersections(&[], &square).is_err());
        assert!(polygon_intersections(&square, &[Point3::origin()]).is_err());
    }
}
