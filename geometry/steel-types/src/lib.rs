//! Core geometry value types for steel detailing.
//!
//! This crate provides the foundational types and point/vector helpers
//! the rest of the workspace builds on:
//!
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`LineSegment`] / [`Line`] - Bounded and infinite lines
//! - [`compare_points`] - Per-axis min/max folding primitive
//! - [`normalize_to`] - Length-targeted vector normalization
//!
//! All geometry is transient value data: created from caller-supplied
//! points, consumed by a measurement or classification, and discarded.
//! Nothing here performs I/O or retains shared state, so concurrent
//! callers over disjoint inputs need no synchronization.
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//! Tolerances are expressed in the same units as the coordinates.
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
//!
//! # Example
//!
//! ```
//! use steel_types::Aabb;
//! use nalgebra::Point3;
//!
//! let aabb = Aabb::from_points(&[
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(10.0, 5.0, 3.0),
//! ]).unwrap();
//!
//! assert_eq!(aabb.vertices().len(), 8);
//! ```

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

mod bounds;
mod error;
mod point;
mod segment;
mod vector;

// Re-export core types
pub use bounds::Aabb;
pub use error::{GeometryError, GeometryResult};
pub use point::{center_point, compare_points, is_null, max_point, min_point, round_point};
pub use segment::{Line, LineSegment};
pub use vector::{normalize_to, project_point_to_vector, round_vector};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
