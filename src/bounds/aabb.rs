//! Axis-aligned rectangle.

use crate::primitives::{Point2, Segment2, Vec2};
use num_traits::Float;

/// A 2D axis-aligned rectangle.
///
/// Defined by minimum and maximum corners. "Top" is the `min.y` side,
/// matching screen coordinates where Y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a new box from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates a rectangle from its top-left corner and size.
    #[inline]
    pub fn from_xywh(x: F, y: F, width: F, height: F) -> Self {
        Self {
            min: Point2::new(x, y),
            max: Point2::new(x + width, y + height),
        }
    }

    /// Creates the smallest box holding every point.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |b, p| b.expand_to_include(p)))
    }

    /// Returns a new box expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Returns the width of the box.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Returns the height of the box.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the size as a vector (width, height).
    #[inline]
    pub fn size(self) -> Vec2<F> {
        Vec2::new(self.width(), self.height())
    }

    /// Returns the center point of the box.
    #[inline]
    pub fn center(self) -> Point2<F> {
        self.min.midpoint(self.max)
    }

    /// The four edges, starting with the top edge and going clockwise
    /// in screen coordinates.
    pub fn edges(self) -> [Segment2<F>; 4] {
        let top_left = self.min;
        let top_right = Point2::new(self.max.x, self.min.y);
        let bottom_right = self.max;
        let bottom_left = Point2::new(self.min.x, self.max.y);
        [
            Segment2::new(top_left, top_right),
            Segment2::new(top_right, bottom_right),
            Segment2::new(bottom_right, bottom_left),
            Segment2::new(bottom_left, top_left),
        ]
    }

    /// Returns `true` if the point lies inside or on the boundary.
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Distance from `p` to the nearest edge.
    ///
    /// Unlike a distance to the filled area, this is positive for interior
    /// points too.
    pub fn distance_to_edges(self, p: Point2<F>) -> F {
        self.edges()
            .iter()
            .map(|edge| edge.distance_to_point(p, true))
            .fold(F::infinity(), F::min)
    }
}
