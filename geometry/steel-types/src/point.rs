//! Point helpers: sentinel corners, per-axis folding, rounding.
//!
//! The folding primitive [`compare_points`] is shared by every bounding
//! box computation in the workspace: a running corner is expanded one
//! axis at a time by a caller-supplied predicate, so the same loop
//! serves both "grow toward the minimum" and "grow toward the maximum".

use nalgebra::Point3;

/// The sentinel corner every coordinate of which is `f64::MAX`.
///
/// Used as the seed when folding a point collection toward its minimum
/// corner. A seed is not an answer: callers must reject empty inputs
/// before folding, otherwise the sentinel leaks out as a plausible
/// looking box corner.
#[must_use]
pub fn max_point() -> Point3<f64> {
    Point3::new(f64::MAX, f64::MAX, f64::MAX)
}

/// The sentinel corner every coordinate of which is `f64::MIN`.
///
/// Seed for folding toward a maximum corner. See [`max_point`] for the
/// empty-input caveat.
#[must_use]
pub fn min_point() -> Point3<f64> {
    Point3::new(f64::MIN, f64::MIN, f64::MIN)
}

/// Fold one candidate point into a running accumulator, axis by axis.
///
/// For each axis independently, if `keep(candidate, accumulator)` holds
/// the accumulator's coordinate is overwritten with the candidate's.
/// Passing `|c, a| c < a` expands a minimum corner, `|c, a| c > a` a
/// maximum corner.
///
/// # Example
///
/// ```
/// use steel_types::{compare_points, max_point};
/// use nalgebra::Point3;
///
/// let mut min = max_point();
/// for p in [Point3::new(1.0, 5.0, -2.0), Point3::new(3.0, 0.0, 4.0)] {
///     compare_points(&p, &mut min, |c, a| c < a);
/// }
/// assert_eq!(min, Point3::new(1.0, 0.0, -2.0));
/// ```
pub fn compare_points<F>(candidate: &Point3<f64>, accumulator: &mut Point3<f64>, keep: F)
where
    F: Fn(f64, f64) -> bool,
{
    if keep(candidate.x, accumulator.x) {
        accumulator.x = candidate.x;
    }
    if keep(candidate.y, accumulator.y) {
        accumulator.y = candidate.y;
    }
    if keep(candidate.z, accumulator.z) {
        accumulator.z = candidate.z;
    }
}

/// Midpoint of two points.
#[must_use]
pub fn center_point(a: &Point3<f64>, b: &Point3<f64>) -> Point3<f64> {
    a + (b - a) * 0.5
}

/// Round each coordinate of a point to the given number of decimal digits.
///
/// Rounding is **half-away-from-zero** (`f64::round` semantics):
/// `2.5 → 3.0` and `-2.5 → -3.0`.
///
/// # Example
///
/// ```
/// use steel_types::round_point;
/// use nalgebra::Point3;
///
/// let p = round_point(&Point3::new(1.25, -2.5, 3.14159), 1);
/// assert_eq!(p, Point3::new(1.3, -2.5, 3.1));
/// ```
#[must_use]
pub fn round_point(point: &Point3<f64>, digits: u32) -> Point3<f64> {
    Point3::new(
        round_to(point.x, digits),
        round_to(point.y, digits),
        round_to(point.z, digits),
    )
}

pub(crate) fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits.try_into().unwrap_or(i32::MAX));
    (value * scale).round() / scale
}

/// Check whether any coordinate of the point is NaN.
///
/// NaN coordinates appear when degenerate geometry (a zero-length
/// normal, a failed projection) leaks through a computation unchecked.
/// Note this is an explicit `is_nan` test; comparing a coordinate
/// against NaN with `==` is always false and detects nothing.
#[must_use]
pub fn is_null(point: &Point3<f64>) -> bool {
    point.x.is_nan() || point.y.is_nan() || point.z.is_nan()
}
