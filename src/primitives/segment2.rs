//! 2D line segment type.

use super::{Point2, Vec2};
use crate::error::GeomError;
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// The segment is directed: `start -> end` decides the sign of
/// [`side_of`](Self::side_of) and the direction of interpolation.
/// Zero-length segments are a precondition violation for the
/// interpolation and intersection queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(self) -> F {
        self.start.distance_squared(self.end)
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the midpoint of the segment.
    #[inline]
    pub fn midpoint(self) -> Point2<F> {
        self.start.midpoint(self.end)
    }

    /// Returns the point at parameter `t` along the segment.
    ///
    /// - `t = 0` returns `start`
    /// - `t = 1` returns `end`
    /// - Values outside [0, 1] extrapolate beyond the segment
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Inverse of [`point_at`](Self::point_at), measured along the X axis.
    ///
    /// The point is assumed to lie on the segment's line; otherwise the
    /// result only describes its X projection.
    ///
    /// # Errors
    ///
    /// [`GeomError::DegenerateGeometry`] if the segment has no horizontal
    /// extent (`start.x == end.x`).
    ///
    /// ```
    /// use polytri::{Point2, Segment2};
    ///
    /// let s = Segment2::from_coords(1.0, 1.0, 2.0, 2.0);
    /// assert_eq!(s.param_of(Point2::new(1.75, 1.75)), Ok(0.75));
    /// assert!(Segment2::from_coords(0.0, 0.0, 0.0, 1.0)
    ///     .param_of(Point2::new(0.0, 0.5))
    ///     .is_err());
    /// ```
    pub fn param_of(self, point: Point2<F>) -> Result<F, GeomError> {
        let dx = self.end.x - self.start.x;
        if dx == F::zero() {
            return Err(GeomError::DegenerateGeometry);
        }
        Ok((point.x - self.start.x) / dx)
    }

    /// Parameter of a point on the segment's line, along X, or along Y
    /// when the segment is vertical.
    fn span_param(self, point: Point2<F>) -> Option<F> {
        let d = self.direction();
        if d.x != F::zero() {
            Some((point.x - self.start.x) / d.x)
        } else if d.y != F::zero() {
            Some((point.y - self.start.y) / d.y)
        } else {
            None
        }
    }

    /// Cross product of the segment direction with `point - start`.
    ///
    /// Positive when `point` is to the left of `start -> end`, negative
    /// to the right, zero on the line.
    #[inline]
    pub fn side_of(self, point: Point2<F>) -> F {
        self.direction().cross(point - self.start)
    }

    /// Computes the closest point on this segment's line to `p`.
    ///
    /// With `clamp`, the result is restricted to the span between the
    /// endpoints. A degenerate segment returns `start`.
    pub fn closest_point(self, p: Point2<F>, clamp: bool) -> Point2<F> {
        let v = self.direction();
        let len_sq = v.magnitude_squared();
        if len_sq == F::zero() {
            return self.start;
        }

        let t = (p - self.start).dot(v) / len_sq;
        let t = if clamp {
            t.max(F::zero()).min(F::one())
        } else {
            t
        };
        self.point_at(t)
    }

    /// Distance from `p` to the closest point, see [`closest_point`](Self::closest_point).
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>, clamp: bool) -> F {
        self.closest_point(p, clamp).distance(p)
    }

    /// Intersection of the lines through `self` and `other`.
    ///
    /// Returns `None` when the determinant is exactly zero (parallel or
    /// coincident lines). With `clamp`, the point must also lie within both
    /// spans, endpoints included; the span parameter is measured along X,
    /// or along Y for a vertical segment.
    ///
    /// ```
    /// use polytri::{Point2, Segment2};
    ///
    /// let a = Segment2::from_coords(0.0, 0.0, 2.0, 2.0);
    /// let b = Segment2::from_coords(0.0, 2.0, 2.0, 0.0);
    /// assert_eq!(a.intersection(b, false), Some(Point2::new(1.0, 1.0)));
    /// ```
    pub fn intersection(self, other: Self, clamp: bool) -> Option<Point2<F>> {
        let d1 = self.start - self.end;
        let d2 = other.start - other.end;
        let det = d1.cross(d2);
        if det == F::zero() {
            return None;
        }

        let c1 = self.start.to_vec().cross(self.end.to_vec());
        let c2 = other.start.to_vec().cross(other.end.to_vec());
        let point = Point2::new(
            (c1 * d2.x - d1.x * c2) / det,
            (c1 * d2.y - d1.y * c2) / det,
        );

        if clamp {
            let within = |s: Self| {
                s.span_param(point)
                    .is_some_and(|t| t >= F::zero() && t <= F::one())
            };
            if !within(self) || !within(other) {
                return None;
            }
        }
        Some(point)
    }

    /// Returns the reversed segment (start and end swapped).
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}
