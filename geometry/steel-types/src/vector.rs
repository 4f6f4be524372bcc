//! Vector helpers: length-targeted normalization, axis projection.

use nalgebra::{Point3, Vector3};

use crate::error::{GeometryError, GeometryResult};
use crate::point::round_to;

/// Scale a vector so its length equals `target_length`.
///
/// A target of `1.0` is plain normalization. The direction is kept; a
/// negative target flips it.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroLengthVector`] when the input has zero
/// length. Near-parallel cross products and bisectors of opposite
/// directions both collapse to the zero vector, so callers that build
/// normals this way must handle the error rather than read a NaN
/// direction out of it.
///
/// # Example
///
/// ```
/// use steel_types::normalize_to;
/// use nalgebra::Vector3;
///
/// let v = normalize_to(&Vector3::new(3.0, 4.0, 0.0), 10.0).unwrap();
/// assert_eq!(v, Vector3::new(6.0, 8.0, 0.0));
/// ```
pub fn normalize_to(vector: &Vector3<f64>, target_length: f64) -> GeometryResult<Vector3<f64>> {
    let length = vector.norm();
    if length == 0.0 {
        return Err(GeometryError::zero_length_vector(target_length));
    }
    Ok(vector * (target_length / length))
}

/// Project a point onto the axis spanned by `vector` through the origin.
///
/// Returns `None` when `vector` has zero length, since the axis is then
/// undefined.
#[must_use]
pub fn project_point_to_vector(point: &Point3<f64>, vector: &Vector3<f64>) -> Option<Point3<f64>> {
    let magnitude_squared = vector.norm_squared();
    if magnitude_squared == 0.0 {
        return None;
    }
    let scalar = point.coords.dot(vector) / magnitude_squared;
    Some(Point3::from(vector * scalar))
}

/// Round each coordinate of a vector to the given number of decimal digits.
///
/// Same half-away-from-zero rule as [`crate::round_point`].
#[must_use]
pub fn round_vector(vector: &Vector3<f64>, digits: u32) -> Vector3<f64> {
    Vector3::new(
        round_to(vector.x, digits),
        round_to(vector.y, digits),
        round_to(vector.z, digits),
    )
}
