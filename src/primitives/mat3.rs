//! 3x3 matrix for 2D affine transforms in homogeneous coordinates.

use super::vec2::round_to_step;
use super::{Point2, Vec2};
use num_traits::Float;
use std::fmt;
use std::ops::Mul;

/// A 3x3 matrix stored in row-major order.
///
/// Points are transformed as column vectors `(x, y, 1)`; only the first
/// two rows take part in [`apply_point`](Self::apply_point):
/// ```text
/// | m00  m01  m02 |   | x |
/// | m10  m11  m12 | * | y |
/// | m20  m21  m22 |   | 1 |
/// ```
///
/// # Example
///
/// ```
/// use polytri::{Mat3, Point2, Vec2};
///
/// let m: Mat3<f64> = Mat3::translation(Vec2::new(10.0, 0.0)) * Mat3::scale(2.0);
/// assert_eq!(m.apply_point(Point2::new(1.0, 1.0)), Point2::new(12.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3<F> {
    pub rows: [[F; 3]; 3],
}

impl<F: Float> Mat3<F> {
    /// Creates a matrix from its rows.
    #[inline]
    pub fn from_rows(rows: [[F; 3]; 3]) -> Self {
        Self { rows }
    }

    /// The zero matrix.
    #[inline]
    pub fn zero() -> Self {
        Self {
            rows: [[F::zero(); 3]; 3],
        }
    }

    /// The identity matrix.
    #[inline]
    pub fn identity() -> Self {
        let (o, l) = (F::zero(), F::one());
        Self {
            rows: [[l, o, o], [o, l, o], [o, o, l]],
        }
    }

    /// Creates a translation transform.
    #[inline]
    pub fn translation(offset: Vec2<F>) -> Self {
        let mut m = Self::identity();
        m.rows[0][2] = offset.x;
        m.rows[1][2] = offset.y;
        m
    }

    /// Creates a counter-clockwise rotation around the origin, in radians.
    #[inline]
    pub fn rotation(angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut m = Self::identity();
        m.rows[0][0] = cos;
        m.rows[0][1] = -sin;
        m.rows[1][0] = sin;
        m.rows[1][1] = cos;
        m
    }

    /// Creates a uniform scaling transform around the origin.
    #[inline]
    pub fn scale(factor: F) -> Self {
        Self::scale_xy(factor, factor)
    }

    /// Creates a non-uniform scaling transform around the origin.
    #[inline]
    pub fn scale_xy(sx: F, sy: F) -> Self {
        let mut m = Self::identity();
        m.rows[0][0] = sx;
        m.rows[1][1] = sy;
        m
    }

    /// Returns the transposed matrix.
    pub fn transpose(&self) -> Self {
        let m = &self.rows;
        Self {
            rows: [
                [m[0][0], m[1][0], m[2][0]],
                [m[0][1], m[1][1], m[2][1]],
                [m[0][2], m[1][2], m[2][2]],
            ],
        }
    }

    /// Determinant of the 2x2 matrix left after removing `row` and `col`.
    ///
    /// Returns `None` if `row` or `col` is greater than 2.
    pub fn minor(&self, row: usize, col: usize) -> Option<F> {
        (row < 3 && col < 3).then(|| self.minor_at(row, col))
    }

    fn minor_at(&self, row: usize, col: usize) -> F {
        let rs = [(row + 1) % 3, (row + 2) % 3];
        let cs = [(col + 1) % 3, (col + 2) % 3];
        let (r1, r2) = (rs[0].min(rs[1]), rs[0].max(rs[1]));
        let (c1, c2) = (cs[0].min(cs[1]), cs[0].max(cs[1]));
        let m = &self.rows;
        m[r1][c1] * m[r2][c2] - m[r1][c2] * m[r2][c1]
    }

    /// Signed minor, `(-1)^(row + col) * minor(row, col)`.
    #[inline]
    fn cofactor(&self, row: usize, col: usize) -> F {
        let minor = self.minor_at(row, col);
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Determinant, expanded along the first row.
    pub fn determinant(&self) -> F {
        (0..3).fold(F::zero(), |acc, col| {
            acc + self.rows[0][col] * self.cofactor(0, col)
        })
    }

    /// Adjugate: the transposed cofactor matrix.
    pub fn adjoint(&self) -> Self {
        let mut cof = Self::zero();
        for row in 0..3 {
            for col in 0..3 {
                cof.rows[row][col] = self.cofactor(row, col);
            }
        }
        cof.transpose()
    }

    /// Returns the inverse, or `None` if the determinant is exactly zero.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == F::zero() {
            return None;
        }
        let inv_det = F::one() / det;
        let mut adj = self.adjoint();
        for row in adj.rows.iter_mut() {
            for v in row.iter_mut() {
                *v = *v * inv_det;
            }
        }
        Some(adj)
    }

    /// Transforms a point, treating it as `(x, y, 1)`.
    #[inline]
    pub fn apply_point(&self, p: Point2<F>) -> Point2<F> {
        let m = &self.rows;
        Point2::new(
            p.x * m[0][0] + p.y * m[0][1] + m[0][2],
            p.x * m[1][0] + p.y * m[1][1] + m[1][2],
        )
    }

    /// Transforms a vector, ignoring translation.
    #[inline]
    pub fn apply_vec(&self, v: Vec2<F>) -> Vec2<F> {
        let m = &self.rows;
        Vec2::new(
            v.x * m[0][0] + v.y * m[0][1],
            v.x * m[1][0] + v.y * m[1][1],
        )
    }

    /// Row-major entries in single precision.
    pub fn to_f32_array(&self) -> [f32; 9] {
        let mut out = [0.0_f32; 9];
        for (i, v) in self.rows.iter().flatten().enumerate() {
            out[i] = v.to_f32().unwrap_or(f32::NAN);
        }
        out
    }

    /// Compares entries after rounding them to multiples of `step`.
    pub fn close_enough(&self, other: &Self, step: F) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(&a, &b)| round_to_step(a, step) == round_to_step(b, step))
    }
}

impl<F: Float> Default for Mat3<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> Mul for Mat3<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::zero();
        for row in 0..3 {
            for col in 0..3 {
                out.rows[row][col] = (0..3).fold(F::zero(), |acc, k| {
                    acc + self.rows[row][k] * rhs.rows[k][col]
                });
            }
        }
        out
    }
}

impl<F: Float> Mul<Point2<F>> for Mat3<F> {
    type Output = Point2<F>;

    #[inline]
    fn mul(self, rhs: Point2<F>) -> Point2<F> {
        self.apply_point(rhs)
    }
}

impl<F: Float + fmt::Display> fmt::Display for Mat3<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, r) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{:.6}, {:.6}, {:.6}]", r[0], r[1], r[2])?;
        }
        Ok(())
    }
}
