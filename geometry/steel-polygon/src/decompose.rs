//! Polygon decomposition into line segments.

use nalgebra::Point3;
use steel_types::LineSegment;

use crate::error::{PolygonError, PolygonResult};

/// Decompose an ordered point sequence into its edge segments.
///
/// Consecutive points are paired in order. For a closed polygon the
/// last point additionally connects back to the first, so `n` points
/// yield `n` segments; an open polyline yields `n - 1`.
///
/// # Errors
///
/// Returns [`PolygonError::InsufficientPoints`] for fewer than two
/// points.
///
/// # Example
///
/// ```
/// use steel_polygon::segments_of_polygon;
/// use nalgebra::Point3;
///
/// let square = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
///
/// assert_eq!(segments_of_polygon(&square, true).unwrap().len(), 4);
/// assert_eq!(segments_of_polygon(&square, false).unwrap().len(), 3);
/// ```
pub fn segments_of_polygon(
    points: &[Point3<f64>],
    closed: bool,
) -> PolygonResult<Vec<LineSegment>> {
    if points.len() < 2 {
        return Err(PolygonError::insufficient_points(2, points.len()));
    }

    let mut segments: Vec<LineSegment> = points
        .windows(2)
        .map(|pair| LineSegment::new(pair[0], pair[1]))
        .collect();

    if closed {
        // Wrap the last point back to the first.
        segments.push(LineSegment::new(points[points.len() - 1], points[0]));
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn closed_polygon_wraps_around() {
        let segments = segments_of_polygon(&square(), true).unwrap();
        assert_eq!(segments.len(), 4);

        for pair in segments.windows(2) {
            assert_eq!(pair[0].point2, pair[1].point1);
        }
        let last = segments[segments.len() - 1];
        assert_eq!(last.point1, Point3::new(0.0, 1.0, 0.0));
        assert_eq!(last.point2, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn open_polyline_drops_the_wrap() {
        let segments = segments_of_polygon(&square(), false).unwrap();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2].point2, Point3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn two_points_make_one_or_two_segments() {
        let pair = [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        assert_eq!(segments_of_polygon(&pair, false).unwrap().len(), 1);
        assert_eq!(segments_of_polygon(&pair, true).unwrap().len(), 2);
    }

    #[test]
    fn too_few_points_is_an_error() {
        let one = [Point3::new(0.0, 0.0, 0.0)];
        assert_eq!(
            segments_of_polygon(&one, true).unwrap_err(),
            PolygonError::insufficient_points(2, 1)
        );
        assert!(segments_of_polygon(&[], false).is_err());
    }
}
