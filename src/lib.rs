//! polytri - 2D geometry primitives and polygon triangulation
//!
//! The centerpiece is an ear clipping triangulator that does not depend on
//! the polygon's winding order: instead of a convexity test it checks that
//! each new diagonal stays inside the remaining shape with an even-odd ray
//! cast. Everything it needs (segments, triangles, bounds, affine matrices)
//! is available on its own as well.
//!
//! ```
//! use polytri::Polygon;
//!
//! let polygon = Polygon::from_f32_slice(&[0.0, 0.0, 4.0, 0.0, 4.0, 4.0, 0.0, 4.0]).unwrap();
//! let triangles = polygon.triangulate().unwrap().into_triangles();
//! assert_eq!(triangles.to_f32_vec().len(), 2 * 6);
//! ```

pub mod bounds;
pub mod error;
pub mod polygon;
pub mod primitives;

pub use bounds::Aabb2;
pub use error::{GeomError, InvalidInput};
pub use polygon::{
    triangulate, triangulate_with, CrossingRule, Polygon, RayOrigin, TriangleList,
    TriangulateOptions, Triangulation,
};
pub use primitives::{Mat3, Point2, Segment2, Triangle2, Vec2};
