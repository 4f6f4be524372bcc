//! Error types for polygon operations.

use thiserror::Error;

/// Result type alias for polygon operations.
pub type PolygonResult<T> = Result<T, PolygonError>;

/// Errors that can occur during polygon operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolygonError {
    /// Too few points to form the requested shape.
    #[error("insufficient points: need at least {required}, got {actual}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        actual: usize,
    },
}

impl PolygonError {
    /// Create an insufficient points error.
    #[must_use]
    pub const fn insufficient_points(required: usize, actual: usize) -> Self {
        Self::InsufficientPoints { required, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PolygonError::insufficient_points(2, 1);
        assert!(err.to_string().contains("need at least 2"));
        assert!(err.to_string().contains("got 1"));
    }
}
