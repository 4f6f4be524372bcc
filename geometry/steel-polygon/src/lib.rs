//! Planar polygon classification for steel detailing.
//!
//! Polygons here are ordered point sequences, implicitly closed, taken
//! from part outlines and plate contours. This crate classifies against
//! them in the XY projection:
//!
//! - [`point_in_polygon`] - winding-number containment with optional
//!   boundary inclusion
//! - [`segment_intersection`] - 2D parametric segment crossing
//! - [`segments_of_polygon`] - decomposition of an outline into edges
//!
//! # Planar Projection
//!
//! Containment and intersection ignore Z: outlines are assumed to lie
//! in (or be projected onto) the XY plane. The one exception is the
//! boundary-inclusion distance test, which measures against the edge as
//! a true 3D segment.
//!
//! # Example
//!
//! ```
//! use steel_polygon::{point_in_polygon, segments_of_polygon, PolygonOptions};
//! use nalgebra::Point3;
//!
//! let outline = [
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(4.0, 0.0, 0.0),
//!     Point3::new(4.0, 3.0, 0.0),
//!     Point3::new(0.0, 3.0, 0.0),
//! ];
//!
//! assert_eq!(segments_of_polygon(&outline, true).unwrap().len(), 4);
//! assert!(point_in_polygon(
//!     &Point3::new(2.0, 1.5, 0.0),
//!     &outline,
//!     &PolygonOptions::default(),
//! ));
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization of the segment types
//!   this crate returns

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

mod decompose;
mod error;
mod intersect;
mod winding;

// Re-export main types and functions
pub use decompose::segments_of_polygon;
pub use error::{PolygonError, PolygonResult};
pub use intersect::{polygon_intersections, segment_intersection, segments_intersections};
pub use winding::{point_in_polygon, PolygonOptions, DEFAULT_BOUNDARY_TOLERANCE};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
