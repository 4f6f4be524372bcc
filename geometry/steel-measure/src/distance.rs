//! Distance utilities over point collections.

use std::cmp::Ordering;

use nalgebra::Point3;

/// The point in `points` closest to `origin`, or `None` on empty input.
///
/// # Example
///
/// ```
/// use steel_measure::nearest_point;
/// use nalgebra::Point3;
///
/// let candidates = [Point3::new(5.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0)];
/// let nearest = nearest_point(&Point3::origin(), &candidates).unwrap();
/// assert_eq!(nearest, candidates[1]);
/// ```
#[must_use]
pub fn nearest_point(origin: &Point3<f64>, points: &[Point3<f64>]) -> Option<Point3<f64>> {
    points
        .iter()
        .min_by(|a, b| compare_distance(origin, a, b))
        .copied()
}

/// The point in `points` farthest from `origin`, or `None` on empty input.
#[must_use]
pub fn remote_point(origin: &Point3<f64>, points: &[Point3<f64>]) -> Option<Point3<f64>> {
    points
        .iter()
        .max_by(|a, b| compare_distance(origin, a, b))
        .copied()
}

fn compare_distance(origin: &Point3<f64>, a: &Point3<f64>, b: &Point3<f64>) -> Ordering {
    let da = (a - origin).norm_squared();
    let db = (b - origin).norm_squared();
    da.partial_cmp(&db).unwrap_or(Ordering::Equal)
}

/// Shortest distance between consecutive points on the closed ring.
///
/// Each point is paired with its predecessor, the first wrapping around
/// to the last. Returns `None` for fewer than two points.
#[must_use]
pub fn min_link_length(points: &[Point3<f64>]) -> Option<f64> {
    link_lengths(points).min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
}

/// Longest distance between consecutive points on the closed ring.
///
/// Pairing as in [`min_link_length`]. Returns `None` for fewer than two
/// points.
#[must_use]
pub fn max_link_length(points: &[Point3<f64>]) -> Option<f64> {
    link_lengths(points).max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
}

fn link_lengths(points: &[Point3<f64>]) -> impl Iterator<Item = f64> + '_ {
    let n = points.len();
    let count = if n >= 2 { n } else { 0 };
    (0..count).map(move |i| {
        let previous = if i == 0 { n - 1 } else { i - 1 };
        (points[i] - points[previous]).norm()
    })
}
