//! 2D vector type for directions and offsets.

use num_traits::Float;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 2D vector representing a direction or offset.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Creates the vector pointing at `angle` radians with length `radius`.
    #[inline]
    pub fn from_angle(angle: F, radius: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: cos * radius,
            y: sin * radius,
        }
    }

    /// Returns the angle of this vector in radians, in `(-π, π]`.
    #[inline]
    pub fn angle(self) -> F {
        self.y.atan2(self.x)
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (perpendicular dot product).
    ///
    /// Positive means `other` is counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Returns the squared magnitude (length squared).
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    /// Returns the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(self) -> F {
        self.magnitude_squared().sqrt()
    }

    /// Returns a normalized (unit length) vector.
    ///
    /// Returns `None` if the vector is zero or too small to normalize reliably.
    #[inline]
    pub fn normalize(self) -> Option<Self> {
        let mag = self.magnitude();
        if mag > F::epsilon() {
            Some(self / mag)
        } else {
            None
        }
    }

    /// Shortens the vector to `max` if it is longer.
    pub fn limit(self, max: F) -> Self {
        if self.magnitude() > max {
            self.with_magnitude(max)
        } else {
            self
        }
    }

    /// Rescales the vector so its length lies in `[min, max]`.
    ///
    /// A zero vector has no direction and is returned unchanged.
    pub fn clamp_magnitude(self, min: F, max: F) -> Self {
        let mag = self.magnitude();
        if mag > max {
            self.with_magnitude(max)
        } else if mag < min {
            self.with_magnitude(min)
        } else {
            self
        }
    }

    fn with_magnitude(self, len: F) -> Self {
        match self.normalize() {
            Some(unit) => unit * len,
            None => self,
        }
    }

    /// Component-wise product.
    #[inline]
    pub fn mul_elementwise(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Component-wise quotient.
    #[inline]
    pub fn div_elementwise(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }

    /// Returns a vector perpendicular to this one (rotated 90 degrees counter-clockwise).
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    /// Compares both components after rounding them to multiples of `step`.
    ///
    /// With `step = 0.01`, `1.45478` and `1.45229` compare equal.
    pub fn close_enough(self, other: Self, step: F) -> bool {
        round_to_step(self.x, step) == round_to_step(other.x, step)
            && round_to_step(self.y, step) == round_to_step(other.y, step)
    }
}

/// Rounds `value` to the nearest multiple of `step`, returned in step units.
#[inline]
pub(crate) fn round_to_step<F: Float>(value: F, step: F) -> F {
    let half = F::one() / (F::one() + F::one());
    (value / step + half).floor()
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<F: Float> Default for Vec2<F> {
    fn default() -> Self {
        Self::zero()
    }
}
