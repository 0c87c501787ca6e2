//! 2D point type.

use super::Vec2;
use num_traits::Float;
use std::fmt;
use std::ops::{Add, Sub};

/// A 2D point (position in space).
///
/// Generic over floating-point types (`f32` or `f64`). Points are plain
/// values; copying one never aliases another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Returns the origin `(0, 0)`.
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        (other - self).magnitude_squared()
    }

    /// Returns the distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Returns the point halfway between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        self.lerp(other, F::one() / (F::one() + F::one()))
    }

    /// Linearly interpolates towards `other`. `t` is not clamped.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Returns the position vector of this point.
    #[inline]
    pub fn to_vec(self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }

    /// Compares both coordinates after rounding them to multiples of `step`.
    pub fn close_enough(self, other: Self, step: F) -> bool {
        self.to_vec().close_enough(other.to_vec(), step)
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }
}

impl<F: Float> Sub<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<F>) -> Self {
        Self::new(self.x - v.x, self.y - v.y)
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<[F; 2]> for Point2<F> {
    fn from([x, y]: [F; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float + fmt::Display> fmt::Display for Point2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{x: {:.4}, y: {:.4}}}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_midpoint_and_lerp() {
        let a: Point2<f64> = Point2::new(0.0, 2.0);
        let b = Point2::new(4.0, 6.0);
        assert_eq!(a.midpoint(b), Point2::new(2.0, 4.0));
        let beyond = a.lerp(b, 1.5);
        assert_relative_eq!(beyond.x, 6.0);
        assert_relative_eq!(beyond.y, 8.0);
    }

    #[test]
    fn test_point_vector_ops() {
        let p: Point2<f64> = Point2::new(1.0, 1.0);
        let q = Point2::new(4.0, 5.0);
        assert_eq!(q - p, Vec2::new(3.0, 4.0));
        assert_eq!(p + Vec2::new(1.0, 2.0), Point2::new(2.0, 3.0));
        assert_eq!(p - Vec2::new(1.0, 2.0), Point2::new(0.0, -1.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Point2::new(1.0_f64, -2.0).is_finite());
        assert!(!Point2::new(f64::NAN, 0.0).is_finite());
        assert!(!Point2::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_display() {
        assert_eq!(Point2::new(1.0_f64, 1.0).to_string(), "{x: 1.0000, y: 1.0000}");
    }
}
