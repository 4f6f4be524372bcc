//! Local coordinate frames.
//!
//! A frame is an origin plus three mutually orthonormal axes. Oriented
//! bounding boxes are fitted and combined in frame-local coordinates,
//! so the frame carries the two transforms between world space and its
//! own axes.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MeasureError, MeasureResult};

/// A local coordinate frame: origin plus orthonormal X/Y/Z axes.
///
/// # Example
///
/// ```
/// use steel_measure::Frame;
/// use nalgebra::{Point3, Vector3};
///
/// let frame = Frame::from_xy(
///     Point3::new(10.0, 0.0, 0.0),
///     Vector3::y(),
///     Vector3::z(),
/// ).unwrap();
///
/// // The frame's X axis points along world Y.
/// let local = frame.world_to_local(&Point3::new(10.0, 3.0, 0.0));
/// assert_eq!(local, Point3::new(3.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frame {
    /// Origin of the frame.
    pub origin: Point3<f64>,
    /// Unit X axis.
    pub axis_x: Vector3<f64>,
    /// Unit Y axis.
    pub axis_y: Vector3<f64>,
    /// Unit Z axis (`axis_x × axis_y`).
    pub axis_z: Vector3<f64>,
}

impl Frame {
    /// Create a frame from its components.
    ///
    /// # Note
    ///
    /// The axes are assumed to be orthonormal. Use [`Self::from_xy`]
    /// for automatic orthonormalization of caller-supplied axes.
    #[must_use]
    pub const fn new(
        origin: Point3<f64>,
        axis_x: Vector3<f64>,
        axis_y: Vector3<f64>,
        axis_z: Vector3<f64>,
    ) -> Self {
        Self {
            origin,
            axis_x,
            axis_y,
            axis_z,
        }
    }

    /// Build a frame from an origin and X/Y axis hints.
    ///
    /// `axis_x` is normalized, `axis_y` is orthonormalized against it
    /// (Gram-Schmidt), and the Z axis is their cross product, giving a
    /// right-handed orthonormal frame.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::DegenerateFrame`] if either axis has
    /// zero length or the two are parallel.
    pub fn from_xy(
        origin: Point3<f64>,
        axis_x: Vector3<f64>,
        axis_y: Vector3<f64>,
    ) -> MeasureResult<Self> {
        let x_norm = axis_x.norm();
        if x_norm < f64::EPSILON {
            return Err(MeasureError::degenerate_frame("X axis has zero length"));
        }
        let axis_x = axis_x / x_norm;

        let axis_y = axis_y - axis_x * axis_x.dot(&axis_y);
        let y_norm = axis_y.norm();
        if y_norm < f64::EPSILON {
            return Err(MeasureError::degenerate_frame(
                "Y axis is parallel to X axis",
            ));
        }
        let axis_y = axis_y / y_norm;

        let axis_z = axis_x.cross(&axis_y);
        Ok(Self::new(origin, axis_x, axis_y, axis_z))
    }

    /// The world frame: origin at (0, 0, 0), axes along the global axes.
    #[must_use]
    pub fn world() -> Self {
        Self::new(Point3::origin(), Vector3::x(), Vector3::y(), Vector3::z())
    }

    /// Transform a frame-local point to world coordinates.
    #[must_use]
    pub fn local_to_world(&self, local: &Point3<f64>) -> Point3<f64> {
        self.origin + self.axis_x * local.x + self.axis_y * local.y + self.axis_z * local.z
    }

    /// Transform a world point to frame-local coordinates.
    #[must_use]
    pub fn world_to_local(&self, world: &Point3<f64>) -> Point3<f64> {
        let v = world - self.origin;
        Point3::new(v.dot(&self.axis_x), v.dot(&self.axis_y), v.dot(&self.axis_z))
    }

    /// Check if the axes are orthonormal within tolerance.
    #[must_use]
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        (self.axis_x.norm() - 1.0).abs() < tolerance
            && (self.axis_y.norm() - 1.0).abs() < tolerance
            && (self.axis_z.norm() - 1.0).abs() < tolerance
            && self.axis_x.dot(&self.axis_y).abs() < tolerance
            && self.axis_x.dot(&self.axis_z).abs() < tolerance
            && self.axis_y.dot(&self.axis_z).abs() < tolerance
    }
}
