//! Axis-aligned bounding box.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};
use crate::point::{center_point, compare_points, max_point, min_point};

/// An axis-aligned bounding box (AABB).
///
/// Both constructors enforce the invariant `min.x <= max.x` (and
/// likewise for y, z): [`Aabb::new`] normalizes per axis, and
/// [`Aabb::from_points`] folds toward each corner separately. There is
/// no "empty box" state; building from no points is an error.
///
/// # Example
///
/// ```
/// use steel_types::Aabb;
/// use nalgebra::Point3;
///
/// let aabb = Aabb::from_points(&[
///     Point3::new(4.0, 0.0, 1.0),
///     Point3::new(-2.0, 8.0, 3.0),
/// ]).unwrap();
///
/// assert_eq!(aabb.min, Point3::new(-2.0, 0.0, 1.0));
/// assert_eq!(aabb.max, Point3::new(4.0, 8.0, 3.0));
/// assert!(aabb.contains(&Point3::new(0.0, 4.0, 2.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner (smallest x, y, z values).
    pub min: Point3<f64>,
    /// Maximum corner (largest x, y, z values).
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create an AABB from two corners, in either order.
    ///
    /// Each axis takes its min/max independently, so the corners never
    /// have to be pre-sorted.
    #[must_use]
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Compute the bounding box of a point collection.
    ///
    /// Folds every point into sentinel-seeded min/max corners with
    /// [`compare_points`], once expanding toward the minimum and once
    /// toward the maximum.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyPointSet`] for an empty input. The
    /// fold would otherwise return the sentinel corners as if they were
    /// a real box.
    pub fn from_points(points: &[Point3<f64>]) -> GeometryResult<Self> {
        if points.is_empty() {
            return Err(GeometryError::empty_point_set("axis-aligned bounding box"));
        }

        let mut min = max_point();
        let mut max = min_point();
        for point in points {
            compare_points(point, &mut min, |candidate, best| candidate < best);
            compare_points(point, &mut max, |candidate, best| candidate > best);
        }
        Ok(Self { min, max })
    }

    /// Smallest box containing both `self` and `other`.
    ///
    /// Per-axis min of mins and max of maxes; commutative, and the
    /// result spans at least the extent of either input.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Point3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        center_point(&self.min, &self.max)
    }

    /// Edge lengths along each axis.
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Check if the box contains a point. Boundary points count as inside.
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// The eight corner points in a fixed winding order.
    ///
    /// First the ring at `min.z`, counter-clockwise seen from +Z:
    /// (min,min), (min,max), (max,max), (max,min); then the same ring
    /// at `max.z`. Box-drawing and face-extraction code relies on this
    /// order staying put.
    #[must_use]
    pub fn vertices(&self) -> [Point3<f64>; 8] {
        [
            Point3::new(self.min.x, self.min.y, self.min.z),
            Point3::new(self.min.x, self.max.y, self.min.z),
            Point3::new(self.max.x, self.max.y, self.min.z),
            Point3::new(self.max.x, self.min.y, self.min.z),
            Point3::new(self.min.x, self.min.y, self.max.z),
            Point3::new(self.min.x, self.max.y, self.max.z),
            Point3::new(self.max.x, self.max.y, self.max.z),
            Point3::new(self.max.x, self.min.y, self.max.z),
        ]
    }

    /// The four corner ring of the box flattened onto the XY plane.
    ///
    /// Corner order: (max,max), (max,min), (min,min), (min,max), all
    /// with `z = 0`.
    #[must_use]
    pub fn project_to_xy(&self) -> [Point3<f64>; 4] {
        [
            Point3::new(self.max.x, self.max.y, 0.0),
            Point3::new(self.max.x, self.min.y, 0.0),
            Point3::new(self.min.x, self.min.y, 0.0),
            Point3::new(self.min.x, self.max.y, 0.0),
        ]
    }
}
