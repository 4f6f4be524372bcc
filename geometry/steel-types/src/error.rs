//! Error types for core geometry operations.

use thiserror::Error;

/// Result type alias for core geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors that can occur when building geometry from caller input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// A point collection that must not be empty was empty.
    ///
    /// Bounding boxes are folded from sentinel corners; an empty input
    /// would otherwise come back as the sentinel box, which looks like
    /// a valid answer but is not.
    #[error("empty point set: cannot compute {context}")]
    EmptyPointSet {
        /// What was being computed from the points.
        context: &'static str,
    },

    /// A zero-length vector cannot be scaled to a target length.
    #[error("cannot scale a zero-length vector to length {target}")]
    ZeroLengthVector {
        /// Requested target length.
        target: f64,
    },

    /// A segment cannot be divided into zero parts.
    #[error("cannot divide a segment into zero parts")]
    ZeroSubdivision,
}

impl GeometryError {
    /// Create an empty point set error.
    #[must_use]
    pub const fn empty_point_set(context: &'static str) -> Self {
        Self::EmptyPointSet { context }
    }

    /// Create a zero-length vector error.
    #[must_use]
    pub const fn zero_length_vector(target: f64) -> Self {
        Self::ZeroLengthVector { target }
    }

    /// Check if this is an empty point set error.
    #[must_use]
    pub const fn is_empty_point_set(&self) -> bool {
        matches!(self, Self::EmptyPointSet { .. })
    }

    /// Check if this is a zero-length vector error.
    #[must_use]
    pub const fn is_zero_length_vector(&self) -> bool {
        matches!(self, Self::ZeroLengthVector { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeometryError::empty_point_set("axis-aligned bounding box");
        assert!(err.to_string().contains("empty point set"));
        assert!(err.to_string().contains("axis-aligned bounding box"));

        let err = GeometryError::zero_length_vector(5.0);
        assert!(err.to_string().contains("zero-length"));
        assert!(err.to_string().contains('5'));

        let err = GeometryError::ZeroSubdivision;
        assert!(err.to_string().contains("zero parts"));
    }

    #[test]
    fn test_error_predicates() {
        let err = GeometryError::empty_point_set("bounds");
        assert!(err.is_empty_point_set());
        assert!(!err.is_zero_length_vector());

        let err = GeometryError::zero_length_vector(1.0);
        assert!(err.is_zero_length_vector());
        assert!(!err.is_empty_point_set());
    }
}
