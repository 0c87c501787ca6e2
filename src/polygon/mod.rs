//! Closed polygons and their triangulation.
//!
//! This module provides:
//! - The [`Polygon`] type with area, bounds and containment queries
//! - Ear clipping triangulation that accepts either winding order
//! - Conversion to and from flat single-precision coordinate arrays
//!
//! # Example
//!
//! ```
//! use polytri::polygon::{triangulate, Polygon, Triangulation};
//! use polytri::Point2;
//!
//! // Self-intersecting "bowtie": no valid ear exists
//! let bowtie = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//!
//! match triangulate(&bowtie).unwrap() {
//!     Triangulation::Complete(_) => unreachable!(),
//!     Triangulation::Partial { remaining, .. } => assert_eq!(remaining.len(), 4),
//! }
//! ```

mod core;
mod triangulate;

pub use core::{polygon_area, polygon_contains, polygon_signed_area, Polygon};
pub use triangulate::{
    triangulate, triangulate_with, CrossingRule, RayOrigin, TriangleList, TriangulateOptions,
    Triangulation,
};
