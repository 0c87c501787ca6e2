//! 2D triangle type.

use super::{Point2, Segment2};
use num_traits::Float;

/// A triangle given by three points.
///
/// Vertex order is kept as given; [`contains`](Self::contains) accepts
/// either winding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2<F> {
    pub a: Point2<F>,
    pub b: Point2<F>,
    pub c: Point2<F>,
}

impl<F: Float> Triangle2<F> {
    /// Creates a new triangle from three points.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self { a, b, c }
    }

    /// Returns the vertices in storage order.
    #[inline]
    pub fn vertices(&self) -> [Point2<F>; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the directed edges `a -> b`, `b -> c`, `c -> a`.
    #[inline]
    pub fn edges(&self) -> [Segment2<F>; 3] {
        [
            Segment2::new(self.a, self.b),
            Segment2::new(self.b, self.c),
            Segment2::new(self.c, self.a),
        ]
    }

    /// Tests whether `point` lies inside the triangle.
    ///
    /// Each edge's cross product with the vector from its start to `point`
    /// is computed. The point is inside if all three are strictly negative
    /// or all three are non-negative. Boundary points therefore count as
    /// inside only when the zero falls on the non-negative branch, i.e.
    /// for counter-clockwise triangles.
    ///
    /// ```
    /// use polytri::{Point2, Triangle2};
    ///
    /// let t = Triangle2::new(
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(1.0, 0.0),
    ///     Point2::new(0.0, 1.0),
    /// );
    /// assert!(t.contains(Point2::new(0.5, 0.5)));
    /// assert!(!t.contains(Point2::new(1.0, 1.0)));
    /// ```
    pub fn contains(&self, point: Point2<F>) -> bool {
        let [ab, bc, ca] = self.edges();
        let cp1 = ab.side_of(point);
        let cp2 = bc.side_of(point);
        let cp3 = ca.side_of(point);

        let zero = F::zero();
        (cp1 < zero && cp2 < zero && cp3 < zero) || (cp1 >= zero && cp2 >= zero && cp3 >= zero)
    }

    /// Twice the signed area; positive for counter-clockwise vertices.
    #[inline]
    fn doubled_signed_area(&self) -> F {
        (self.b - self.a).cross(self.c - self.a)
    }

    /// Signed area, positive for counter-clockwise vertex order.
    pub fn signed_area(&self) -> F {
        self.doubled_signed_area() / (F::one() + F::one())
    }

    /// Unsigned area.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the centroid of the triangle.
    pub fn centroid(&self) -> Point2<F> {
        let three = F::one() + F::one() + F::one();
        Point2::new(
            (self.a.x + self.b.x + self.c.x) / three,
            (self.a.y + self.b.y + self.c.y) / three,
        )
    }

    /// Flat `[ax, ay, bx, by, cx, cy]` in single precision.
    pub fn to_f32_array(&self) -> [f32; 6] {
        let f = |v: F| v.to_f32().unwrap_or(f32::NAN);
        [
            f(self.a.x),
            f(self.a.y),
            f(self.b.x),
            f(self.b.y),
            f(self.c.x),
            f(self.c.y),
        ]
    }
}

impl<F: Float> From<[Point2<F>; 3]> for Triangle2<F> {
    fn from([a, b, c]: [Point2<F>; 3]) -> Self {
        Self::new(a, b, c)
    }
}
