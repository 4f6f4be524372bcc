//! Bounding volume measurement for steel detailing.
//!
//! This crate measures part geometry handed over as plain point sets:
//!
//! - **Frames**: local coordinate systems with world/local transforms
//! - **Oriented bounding boxes**: fitted to a part's own frame and
//!   combinable across parts
//! - **Distance**: nearest/farthest candidate points and ring link
//!   lengths
//!
//! Everything operates on caller-owned values and returns new values;
//! there is no retained state and no I/O.
//!
//! # Example
//!
//! ```
//! use steel_measure::{combine_obbs, fit_obb, Frame};
//! use nalgebra::{Point3, Vector3};
//!
//! // A part frame tilted 45 degrees in the XY plane.
//! let frame = Frame::from_xy(
//!     Point3::origin(),
//!     Vector3::new(1.0, 1.0, 0.0),
//!     Vector3::new(-1.0, 1.0, 0.0),
//! ).unwrap();
//!
//! let obb = fit_obb(&frame, &[
//!     Point3::new(2.0, 2.0, 0.0),
//!     Point3::new(-1.0, -1.0, 0.5),
//! ], "brace").unwrap();
//!
//! // A box combined with itself keeps its extents.
//! let combined = combine_obbs(&[obb, obb]);
//! assert!((combined.extents - obb.extents).norm() < 1e-10);
//! ```
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**:
//! - X: width (left/right)
//! - Y: depth (front/back)
//! - Z: height (up/down)
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for all types

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::float_cmp
)]

mod distance;
mod error;
mod frame;
mod obb;

// Re-export main types and functions
pub use distance::{max_link_length, min_link_length, nearest_point, remote_point};
pub use error::{MeasureError, MeasureResult};
pub use frame::Frame;
pub use obb::{combine_obbs, combine_obbs_with_margin, fit_obb, Obb};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
