//! Point-in-polygon classification by winding number.

use nalgebra::Point3;
use steel_types::LineSegment;

/// Default distance within which a point counts as lying on an edge,
/// in the same units as the coordinates.
pub const DEFAULT_BOUNDARY_TOLERANCE: f64 = 0.01;

/// Options for [`point_in_polygon`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonOptions {
    /// Treat points on (or within tolerance of) an edge as inside.
    pub include_boundary: bool,
    /// Edge distance tolerance used when `include_boundary` is set.
    pub boundary_tolerance: f64,
}

impl Default for PolygonOptions {
    fn default() -> Self {
        Self {
            include_boundary: true,
            boundary_tolerance: DEFAULT_BOUNDARY_TOLERANCE,
        }
    }
}

/// Check whether a point lies inside a closed polygon.
///
/// The winding number is accumulated over the X/Y projection of the
/// polygon (Z is ignored), pairing each vertex with its predecessor and
/// classifying each edge as an upward or downward crossing of the test
/// point's sweep line. The point is inside iff the accumulated count is
/// non-zero, so self-overlapping outlines count by winding, not parity.
///
/// The sweep comparisons are half-open: an edge's lower endpoint lies
/// on the sweep line, its upper endpoint does not. Points exactly on a
/// horizontal edge therefore classify deterministically (bottom edges
/// in, top edges out) rather than arbitrarily. Keep the `<=`/`>`
/// pairing as is; loosening either side double- or zero-counts
/// vertices sitting exactly on the sweep line.
///
/// With `include_boundary` set, a point within `boundary_tolerance` of
/// any edge (as a 3D segment) is inside regardless of winding.
///
/// # Example
///
/// ```
/// use steel_polygon::{point_in_polygon, PolygonOptions};
/// use nalgebra::Point3;
///
/// let square = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
///
/// let options = PolygonOptions::default();
/// assert!(point_in_polygon(&Point3::new(0.5, 0.5, 0.0), &square, &options));
/// assert!(!point_in_polygon(&Point3::new(2.0, 2.0, 0.0), &square, &options));
/// ```
#[must_use]
pub fn point_in_polygon(
    test: &Point3<f64>,
    polygon: &[Point3<f64>],
    options: &PolygonOptions,
) -> bool {
    let mut winding = 0i32;

    for (i, point1) in polygon.iter().enumerate() {
        let j = if i == 0 { polygon.len() - 1 } else { i - 1 };
        let point2 = &polygon[j];

        if point1.y <= test.y {
            if point2.y > test.y && is_left_of_edge(point1, point2, test) {
                winding += 1;
            }
        } else if point2.y <= test.y && is_left_of_edge(point2, point1, test) {
            winding -= 1;
        }

        if options.include_boundary
            && LineSegment::new(*point1, *point2)
                .contains_point(test, options.boundary_tolerance)
        {
            return true;
        }
    }

    winding != 0
}

/// 2D cross-product sign: is `test` strictly left of the directed edge
/// `point1 → point2` in the XY plane?
fn is_left_of_edge(point1: &Point3<f64>, point2: &Point3<f64>, test: &Point3<f64>) -> bool {
    (point2.x - point1.x) * (test.y - point1.y) - (test.x - point1.x) * (point2.y - point1.y) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    fn without_boundary() -> PolygonOptions {
        PolygonOptions {
            include_boundary: false,
            ..PolygonOptions::default()
        }
    }

    #[test]
    fn interior_and_exterior_points() {
        let square = unit_square();
        let options = PolygonOptions::default();

        assert!(point_in_polygon(&Point3::new(0.5, 0.5, 0.0), &square, &options));
        assert!(!point_in_polygon(&Point3::new(2.0, 2.0, 0.0), &square, &options));
        assert!(!point_in_polygon(&Point3::new(-0.1, 0.5, 0.0), &square, &options));
    }

    #[test]
    fn boundary_point_included_when_enabled() {
        let square = unit_square();
        let options = PolygonOptions::default();

        assert!(point_in_polygon(&Point3::new(0.5, 0.0, 0.0), &square, &options));
        assert!(point_in_polygon(&Point3::new(1.0, 0.5, 0.0), &square, &options));
        // Within tolerance of an edge but outside the outline.
        assert!(point_in_polygon(&Point3::new(0.5, -0.005, 0.0), &square, &options));
    }

    #[test]
    fn boundary_tolerance_is_configurable() {
        let square = unit_square();
        let tight = PolygonOptions {
            include_boundary: true,
            boundary_tolerance: 1e-9,
        };

        assert!(!point_in_polygon(&Point3::new(0.5, -0.005, 0.0), &square, &tight));
        assert!(point_in_polygon(&Point3::new(0.5, 0.0, 0.0), &square, &tight));
    }

    #[test]
    fn horizontal_edges_follow_the_half_open_sweep() {
        // With boundary inclusion off, the tie-break is deterministic:
        // the bottom edge winds, the top edge does not.
        let square = unit_square();
        let options = without_boundary();

        assert!(point_in_polygon(&Point3::new(0.5, 0.0, 0.0), &square, &options));
        assert!(!point_in_polygon(&Point3::new(0.5, 1.0, 0.0), &square, &options));
    }

    #[test]
    fn vertical_edges_follow_the_half_open_sweep() {
        let square = unit_square();
        let options = without_boundary();

        assert!(point_in_polygon(&Point3::new(0.0, 0.5, 0.0), &square, &options));
        assert!(!point_in_polygon(&Point3::new(1.0, 0.5, 0.0), &square, &options));
    }

    #[test]
    fn winding_ignores_z() {
        let square = unit_square();
        let options = without_boundary();
        assert!(point_in_polygon(&Point3::new(0.5, 0.5, 100.0), &square, &options));
    }

    #[test]
    fn concave_polygon_notch_is_outside() {
        // A square with a notch cut into the top edge.
        let notched = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(4.0, 4.0, 0.0),
            Point3::new(2.0, 1.5, 0.0),
            Point3::new(0.0, 4.0, 0.0),
        ];
        let options = without_boundary();

        assert!(point_in_polygon(&Point3::new(0.5, 1.0, 0.0), &notched, &options));
        assert!(point_in_polygon(&Point3::new(3.5, 1.0, 0.0), &notched, &options));
        // Inside the notch, above the re-entrant vertex.
        assert!(!point_in_polygon(&Point3::new(2.0, 3.0, 0.0), &notched, &options));
    }

    #[test]
    fn empty_polygon_contains_nothing() {
        let options = PolygonOptions::default();
        assert!(!point_in_polygon(&Point3::origin(), &[], &options));
    }
}
