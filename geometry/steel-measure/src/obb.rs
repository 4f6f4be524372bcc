//! Oriented bounding box fitting and combination.
//!
//! An OBB here is always fitted to a caller-supplied frame (a part's
//! local coordinate system), not to principal axes: the detailing
//! workflow measures parts along their own span/width/depth directions.

use nalgebra::{Point3, Vector3};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use steel_types::{center_point, compare_points, max_point, min_point, Aabb, Line};

use crate::error::{MeasureError, MeasureResult};
use crate::frame::Frame;

/// An oriented bounding box: center, orthonormal axes, half-extents.
///
/// # Example
///
/// ```
/// use steel_measure::{fit_obb, Frame};
/// use nalgebra::Point3;
///
/// let frame = Frame::world();
/// let obb = fit_obb(&frame, &[
///     Point3::new(-2.0, -1.0, 0.0),
///     Point3::new(2.0, 1.0, 0.5),
/// ], "plate").unwrap();
///
/// assert_eq!(obb.extents.x, 2.0);
/// assert_eq!(obb.vertices().len(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Obb {
    /// Center of the box.
    pub center: Point3<f64>,
    /// Orthonormal local axes.
    pub axes: [Vector3<f64>; 3],
    /// Non-negative half-extents along each local axis.
    pub extents: Vector3<f64>,
}

impl Obb {
    /// Create an OBB from its components. Negative extents are clamped
    /// to zero.
    #[must_use]
    pub fn new(center: Point3<f64>, axes: [Vector3<f64>; 3], extents: Vector3<f64>) -> Self {
        Self {
            center,
            axes,
            extents: extents.map(|e| e.max(0.0)),
        }
    }

    /// The canonical zero box: centered at the origin, world axes,
    /// zero extents.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(
            Point3::origin(),
            [Vector3::x(), Vector3::y(), Vector3::z()],
            Vector3::zeros(),
        )
    }

    /// The box's own frame: its center and axes.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::new(self.center, self.axes[0], self.axes[1], self.axes[2])
    }

    /// The eight corner points.
    ///
    /// Bottom ring (negative local Z) counter-clockwise, then the top
    /// ring in the same XY order.
    #[must_use]
    pub fn vertices(&self) -> [Point3<f64>; 8] {
        let ex = self.axes[0] * self.extents.x;
        let ey = self.axes[1] * self.extents.y;
        let ez = self.axes[2] * self.extents.z;

        [
            self.center - ex - ey - ez,
            self.center + ex - ey - ez,
            self.center + ex + ey - ez,
            self.center - ex + ey - ez,
            self.center - ex - ey + ez,
            self.center + ex - ey + ez,
            self.center + ex + ey + ez,
            self.center - ex + ey + ez,
        ]
    }

    /// Global minimum corner, folded over the eight vertices.
    #[must_use]
    pub fn min_point(&self) -> Point3<f64> {
        let mut min = max_point();
        for vertex in self.vertices() {
            compare_points(&vertex, &mut min, |candidate, best| candidate < best);
        }
        min
    }

    /// Global maximum corner, folded over the eight vertices.
    #[must_use]
    pub fn max_point(&self) -> Point3<f64> {
        let mut max = min_point();
        for vertex in self.vertices() {
            compare_points(&vertex, &mut max, |candidate, best| candidate > best);
        }
        max
    }

    /// The axis-aligned box spanning this OBB.
    ///
    /// This is what lets an OBB feed an axis-aligned range query.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.min_point(), self.max_point())
    }

    /// Check if a point is inside the box. Boundary points count as
    /// inside.
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        let local = self.frame().world_to_local(point);
        local.x.abs() <= self.extents.x
            && local.y.abs() <= self.extents.y
            && local.z.abs() <= self.extents.z
    }
}

impl From<Aabb> for Obb {
    /// An axis-aligned box is an OBB whose axes are the world axes and
    /// whose extents are the half-sizes.
    fn from(aabb: Aabb) -> Self {
        Self::new(
            aabb.center(),
            [Vector3::x(), Vector3::y(), Vector3::z()],
            aabb.size() * 0.5,
        )
    }
}

/// Fit an OBB to a point set in the given frame.
///
/// For each frame axis, every point is projected onto the axis line
/// through the frame origin; the most remote projected distance from
/// the origin becomes that axis's extent. The resulting box is centered
/// on the frame origin, so it covers the points symmetrically about it.
///
/// `label` names the object being measured and is carried into the
/// error when there is nothing to measure.
///
/// # Errors
///
/// Returns [`MeasureError::EmptyGeometry`] when `points` is empty — a
/// part with no solid representation cannot be measured.
pub fn fit_obb(frame: &Frame, points: &[Point3<f64>], label: &str) -> MeasureResult<Obb> {
    if points.is_empty() {
        return Err(MeasureError::empty_geometry(label));
    }

    let axes = [frame.axis_x, frame.axis_y, frame.axis_z];
    let mut extents = Vector3::zeros();

    for (i, axis) in axes.iter().enumerate() {
        let line = Line::new(frame.origin, *axis);
        let mut remote = 0.0f64;
        for point in points {
            let projected = line.project_point(point);
            remote = remote.max((projected - frame.origin).norm());
        }
        extents[i] = remote;
    }

    debug!(
        label,
        points = points.len(),
        ?extents,
        "fitted oriented bounding box"
    );

    Ok(Obb::new(frame.origin, axes, extents))
}

/// Combine boxes into one OBB aligned to the first box's frame.
///
/// Every vertex of every input is transformed into the first box's
/// local coordinates, an axis-aligned box is folded over them there,
/// and its center is mapped back to world coordinates while the axes
/// stay those of the first box. Combining a box with itself returns a
/// box with the same center and extents.
///
/// An empty input yields the canonical [`Obb::zero`] box. This default
/// is deliberately permissive; callers that need to distinguish "no
/// boxes" from "a zero box at the origin" must check before combining.
#[must_use]
pub fn combine_obbs(obbs: &[Obb]) -> Obb {
    combine_obbs_with_margin(obbs, 0.0)
}

/// [`combine_obbs`] with every extent of the result grown by `margin`.
#[must_use]
pub fn combine_obbs_with_margin(obbs: &[Obb], margin: f64) -> Obb {
    let Some(first) = obbs.first() else {
        return Obb::zero();
    };

    let frame = first.frame();
    let mut local_min = max_point();
    let mut local_max = min_point();

    for obb in obbs {
        for vertex in obb.vertices() {
            let local = frame.world_to_local(&vertex);
            compare_points(&local, &mut local_min, |candidate, best| candidate < best);
            compare_points(&local, &mut local_max, |candidate, best| candidate > best);
        }
    }

    let local_center = center_point(&local_min, &local_max);
    let center = frame.local_to_world(&local_center);
    let extents = Vector3::new(
        local_max.x - local_center.x + margin,
        local_max.y - local_center.y + margin,
        local_max.z - local_center.z + margin,
    );

    debug!(boxes = obbs.len(), margin, "combined oriented bounding boxes");

    Obb::new(center, [frame.axis_x, frame.axis_y, frame.axis_z], extents)
}
