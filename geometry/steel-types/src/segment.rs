//! Line segments and infinite lines.

// Chip counts are small; f64 holds them exactly.
#![allow(clippy::cast_precision_loss)]

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};
use crate::point::center_point;

/// A bounded segment between two points.
///
/// The direction is derived from the endpoints, not stored; reversing
/// the endpoints reverses the direction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineSegment {
    /// Start point.
    pub point1: Point3<f64>,
    /// End point.
    pub point2: Point3<f64>,
}

impl LineSegment {
    /// Create a segment from two endpoints.
    #[must_use]
    pub const fn new(point1: Point3<f64>, point2: Point3<f64>) -> Self {
        Self { point1, point2 }
    }

    /// Direction from `point1` to `point2` (not normalized).
    #[must_use]
    pub fn direction(&self) -> Vector3<f64> {
        self.point2 - self.point1
    }

    /// Segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point3<f64> {
        center_point(&self.point1, &self.point2)
    }

    /// Extend the segment into the infinite line through its endpoints.
    #[must_use]
    pub fn to_line(&self) -> Line {
        Line::new(self.point1, self.direction())
    }

    /// Check whether `point` lies on the segment, within `tolerance` of it.
    ///
    /// The parametric projection of the point must fall between the
    /// endpoints (inclusive) and its perpendicular distance from the
    /// segment must not exceed `tolerance`. A degenerate segment
    /// collapses to a point-to-point distance test.
    ///
    /// # Example
    ///
    /// ```
    /// use steel_types::LineSegment;
    /// use nalgebra::Point3;
    ///
    /// let seg = LineSegment::new(Point3::origin(), Point3::new(10.0, 0.0, 0.0));
    /// assert!(seg.contains_point(&Point3::new(5.0, 0.005, 0.0), 0.01));
    /// assert!(!seg.contains_point(&Point3::new(5.0, 0.1, 0.0), 0.01));
    /// assert!(!seg.contains_point(&Point3::new(11.0, 0.0, 0.0), 0.01));
    /// ```
    #[must_use]
    pub fn contains_point(&self, point: &Point3<f64>, tolerance: f64) -> bool {
        let line_vector = self.direction();
        let test_vector = point - self.point1;

        let magnitude_squared = line_vector.norm_squared();
        if magnitude_squared == 0.0 {
            return test_vector.norm() <= tolerance;
        }

        let dot = line_vector.dot(&test_vector);
        if dot < 0.0 || dot > magnitude_squared {
            return false;
        }

        let distance = test_vector.cross(&line_vector).norm() / line_vector.norm();
        distance <= tolerance
    }

    /// Divide the segment into `parts` equal consecutive sub-segments.
    ///
    /// Consecutive chips share their boundary points. A degenerate
    /// segment divides into coincident chips.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroSubdivision`] when `parts` is zero.
    pub fn divide(&self, parts: usize) -> GeometryResult<Vec<Self>> {
        if parts == 0 {
            return Err(GeometryError::ZeroSubdivision);
        }

        let step = self.direction() / parts as f64;
        let mut segments = Vec::with_capacity(parts);
        for i in 0..parts {
            let start = self.point1 + step * i as f64;
            let end = self.point1 + step * (i + 1) as f64;
            segments.push(Self::new(start, end));
        }
        Ok(segments)
    }
}

/// An infinite line through `origin` along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    /// A point on the line.
    pub origin: Point3<f64>,
    /// Direction of the line (need not be normalized).
    pub direction: Vector3<f64>,
}

impl Line {
    /// Create a line from an origin point and a direction.
    #[must_use]
    pub const fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    /// Closest point on the line to `point`.
    ///
    /// A line with zero direction is a single point; everything
    /// projects onto its origin.
    ///
    /// # Example
    ///
    /// ```
    /// use steel_types::Line;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let axis = Line::new(Point3::origin(), Vector3::x());
    /// let p = axis.project_point(&Point3::new(2.0, 7.0, -3.0));
    /// assert_eq!(p, Point3::new(2.0, 0.0, 0.0));
    /// ```
    #[must_use]
    pub fn project_point(&self, point: &Point3<f64>) -> Point3<f64> {
        let magnitude_squared = self.direction.norm_squared();
        if magnitude_squared == 0.0 {
            return self.origin;
        }
        let t = (point - self.origin).dot(&self.direction) / magnitude_squared;
        self.origin + self.direction * t
    }
}
