//! Core polygon type and basic operations.

use crate::bounds::Aabb2;
use crate::error::{GeomError, InvalidInput};
use crate::primitives::{Mat3, Point2, Segment2};
use num_traits::Float;

/// A closed polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the
/// first). No winding order is assumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon in boundary order.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Creates an empty polygon with room for `capacity` vertices.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Appends a vertex to the end of the boundary.
    #[inline]
    pub fn push(&mut self, vertex: Point2<F>) {
        self.vertices.push(vertex);
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates over the boundary edges, including the closing edge from
    /// the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        closed_edges(&self.vertices)
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the bounding box, or `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<Aabb2<F>> {
        Aabb2::from_points(self.vertices.iter().copied())
    }

    /// Tests if a point is inside the polygon (even-odd rule).
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    /// Returns a copy with every vertex transformed by `m`.
    pub fn transformed(&self, m: &Mat3<F>) -> Self {
        Self {
            vertices: self.vertices.iter().map(|&p| m.apply_point(p)).collect(),
        }
    }

    /// Flattens the vertices into `[x1, y1, x2, y2, ...]` in single precision.
    pub fn to_f32_vec(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|p| [p.x, p.y])
            .map(|v| v.to_f32().unwrap_or(f32::NAN))
            .collect()
    }
}

impl Polygon<f64> {
    /// Builds a polygon from interleaved single-precision coordinates
    /// `[x1, y1, x2, y2, ...]`, widening them to `f64`.
    ///
    /// # Errors
    ///
    /// [`InvalidInput::OddCoordinateCount`] if the slice cannot be split
    /// into pairs.
    ///
    /// ```
    /// use polytri::Polygon;
    ///
    /// let square = Polygon::from_f32_slice(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(square.len(), 4);
    /// assert!(Polygon::from_f32_slice(&[0.0, 0.0, 1.0]).is_err());
    /// ```
    pub fn from_f32_slice(values: &[f32]) -> Result<Self, GeomError> {
        if values.len() % 2 != 0 {
            return Err(InvalidInput::OddCoordinateCount { len: values.len() }.into());
        }
        let vertices = values
            .chunks_exact(2)
            .map(|xy| Point2::new(f64::from(xy[0]), f64::from(xy[1])))
            .collect();
        Ok(Self { vertices })
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polygon<F> {
    fn from(vertices: Vec<Point2<F>>) -> Self {
        Self::new(vertices)
    }
}

impl<F: Float> FromIterator<Point2<F>> for Polygon<F> {
    fn from_iter<I: IntoIterator<Item = Point2<F>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Iterates over the edges of a closed vertex loop.
pub(crate) fn closed_edges<F: Float>(
    vertices: &[Point2<F>],
) -> impl Iterator<Item = Segment2<F>> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| Segment2::new(vertices[i], vertices[(i + 1) % n]))
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let twice = closed_edges(vertices).fold(F::zero(), |acc, e| {
        acc + e.start.to_vec().cross(e.end.to_vec())
    });
    twice / (F::one() + F::one())
}

/// Computes the absolute area of a polygon.
pub fn polygon_area<F: Float>(vertices: &[Point2<F>]) -> F {
    polygon_signed_area(vertices).abs()
}

/// Tests if a point is inside a polygon using the ray casting algorithm.
///
/// Points on the boundary may return either true or false.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    for edge in closed_edges(vertices) {
        let (vi, vj) = (edge.start, edge.end);
        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
    }
    inside
}
