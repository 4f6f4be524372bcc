//! Error types for measurement operations.

use thiserror::Error;

/// Result type alias for measurement operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Errors that can occur during measurement operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeasureError {
    /// The object to measure has no geometry.
    #[error("no measurable geometry for {label}")]
    EmptyGeometry {
        /// Name of the object whose geometry was empty.
        label: String,
    },

    /// The requested axes do not span a usable coordinate frame.
    #[error("degenerate frame: {reason}")]
    DegenerateFrame {
        /// What made the frame degenerate.
        reason: String,
    },
}

impl MeasureError {
    /// Create an empty geometry error naming the unmeasurable object.
    #[must_use]
    pub fn empty_geometry(label: impl Into<String>) -> Self {
        Self::EmptyGeometry {
            label: label.into(),
        }
    }

    /// Create a degenerate frame error.
    #[must_use]
    pub fn degenerate_frame(reason: impl Into<String>) -> Self {
        Self::DegenerateFrame {
            reason: reason.into(),
        }
    }

    /// Check if this is an empty geometry error.
    #[must_use]
    pub const fn is_empty_geometry(&self) -> bool {
        matches!(self, Self::EmptyGeometry { .. })
    }

    /// Check if this is a degenerate frame error.
    #[must_use]
    pub const fn is_degenerate_frame(&self) -> bool {
        matches!(self, Self::DegenerateFrame { .. })
    }
}
