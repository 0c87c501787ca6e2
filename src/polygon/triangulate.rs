//! Polygon triangulation using winding-agnostic ear clipping.
//!
//! Converts a simple polygon into a set of triangles that exactly cover it.
//!
//! # Algorithm
//!
//! Ears are found by scanning the remaining vertices from the last index
//! down to the first. A candidate ear `(prev, curr, next)` is accepted when:
//! - no other remaining vertex lies inside the candidate triangle, and
//! - the midpoint of the new closing edge `next -> prev` is inside the
//!   remaining polygon by the even-odd rule.
//!
//! The second test replaces the usual convexity check, so the polygon may
//! be given in either winding. After each accepted ear the middle vertex is
//! removed and the scan restarts from the last index. The final three
//! vertices are tested like any other candidate, but always form the last
//! triangle even when none of them passes.
//!
//! # Complexity
//!
//! - Time: O(n²) typical, O(n³) worst case for a polygon with n vertices
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use polytri::{Point2, Polygon};
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ]);
//!
//! let result = square.triangulate().unwrap();
//! assert!(result.is_complete());
//! assert_eq!(result.triangles().len(), 2);
//! assert_eq!(result.triangles().area(), 16.0);
//! ```

use super::core::{closed_edges, Polygon};
use crate::bounds::Aabb2;
use crate::error::{GeomError, InvalidInput};
use crate::primitives::{Point2, Segment2, Triangle2};
use num_traits::Float;
use std::ops::Deref;
use tracing::{debug, trace};

/// Where the horizontal parity ray starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RayOrigin {
    /// Left of the remaining vertices' bounding box, on the midpoint's row.
    #[default]
    OutsideBounds,
    /// At the smallest positive subnormal X coordinate of the float type.
    ///
    /// Only correct for polygons lying strictly right of `x = 0`.
    SmallestPositive,
}

/// Which edges the parity ray counts as crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossingRule {
    /// Count an edge only if exactly one endpoint lies strictly above the
    /// ray. A ray through a shared vertex then counts once.
    #[default]
    HalfOpen,
    /// Count every edge the clamped ray intersects, endpoints included.
    ///
    /// A ray passing exactly through a vertex counts both incident edges
    /// and can flip the parity.
    Inclusive,
}

/// Knobs for [`triangulate_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriangulateOptions {
    pub ray_origin: RayOrigin,
    pub crossing: CrossingRule,
}

impl TriangulateOptions {
    /// Sentinel ray origin with inclusive crossings.
    ///
    /// Approximates the classic behavior of this algorithm, including its
    /// failures on polygons that reach `x <= 0` or whose edge midpoints
    /// line up with vertices. Two differences remain: a vertical edge is
    /// range-checked along Y instead of being counted whenever the ray
    /// reaches its X, and the last three vertices are still emitted when
    /// none of them passes the midpoint test.
    pub fn legacy() -> Self {
        Self {
            ray_origin: RayOrigin::SmallestPositive,
            crossing: CrossingRule::Inclusive,
        }
    }

    /// Returns these options with a different ray origin.
    pub fn with_ray_origin(mut self, ray_origin: RayOrigin) -> Self {
        self.ray_origin = ray_origin;
        self
    }

    /// Returns these options with a different crossing rule.
    pub fn with_crossing(mut self, crossing: CrossingRule) -> Self {
        self.crossing = crossing;
        self
    }
}

/// Triangles in the order they were clipped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TriangleList<F> {
    triangles: Vec<Triangle2<F>>,
}

impl<F: Float> TriangleList<F> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, triangle: Triangle2<F>) {
        self.triangles.push(triangle);
    }

    /// Sum of the unsigned triangle areas.
    pub fn area(&self) -> F {
        self.triangles
            .iter()
            .fold(F::zero(), |acc, t| acc + t.area())
    }

    /// Flattens all triangles into `[x1, y1, x2, y2, ...]` in single
    /// precision, three points per triangle.
    pub fn to_f32_vec(&self) -> Vec<f32> {
        self.triangles
            .iter()
            .flat_map(|t| t.to_f32_array())
            .collect()
    }

    /// Consumes the list, returning the triangles.
    pub fn into_vec(self) -> Vec<Triangle2<F>> {
        self.triangles
    }
}

impl<F> Deref for TriangleList<F> {
    type Target = [Triangle2<F>];

    fn deref(&self) -> &[Triangle2<F>] {
        &self.triangles
    }
}

impl<F> IntoIterator for TriangleList<F> {
    type Item = Triangle2<F>;
    type IntoIter = std::vec::IntoIter<Triangle2<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.into_iter()
    }
}

impl<'a, F> IntoIterator for &'a TriangleList<F> {
    type Item = &'a Triangle2<F>;
    type IntoIter = std::slice::Iter<'a, Triangle2<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

/// Outcome of a triangulation.
#[derive(Debug, Clone, PartialEq)]
pub enum Triangulation<F> {
    /// Every vertex was consumed.
    Complete(TriangleList<F>),
    /// The scan stopped because no remaining vertex formed a valid ear,
    /// which happens for self-intersecting or degenerate input.
    Partial {
        /// Triangles clipped before the scan stalled.
        triangles: TriangleList<F>,
        /// Vertices still left, in boundary order.
        remaining: Vec<Point2<F>>,
    },
}

impl<F: Float> Triangulation<F> {
    /// Returns `true` if the polygon was fully consumed.
    pub fn is_complete(&self) -> bool {
        matches!(self, Triangulation::Complete(_))
    }

    /// The triangles produced, complete or not.
    pub fn triangles(&self) -> &TriangleList<F> {
        match self {
            Triangulation::Complete(triangles) | Triangulation::Partial { triangles, .. } => {
                triangles
            }
        }
    }

    /// Vertices left unconsumed; empty when complete.
    pub fn remaining(&self) -> &[Point2<F>] {
        match self {
            Triangulation::Complete(_) => &[],
            Triangulation::Partial { remaining, .. } => remaining,
        }
    }

    /// Discards the completeness flag and returns the triangles.
    pub fn into_triangles(self) -> TriangleList<F> {
        match self {
            Triangulation::Complete(triangles) | Triangulation::Partial { triangles, .. } => {
                triangles
            }
        }
    }
}

impl<F: Float> Polygon<F> {
    /// Triangulates this polygon with default options.
    ///
    /// See [`triangulate`].
    pub fn triangulate(&self) -> Result<Triangulation<F>, GeomError> {
        triangulate(self)
    }
}

/// Triangulates a polygon with default options.
///
/// The polygon is assumed to be simple. Self-intersecting input does not
/// fail; it yields [`Triangulation::Partial`].
///
/// # Errors
///
/// [`InvalidInput::TooFewVertices`] for fewer than three vertices and
/// [`InvalidInput::NonFiniteCoordinate`] for NaN or infinite coordinates.
///
/// # Example
///
/// ```
/// use polytri::{triangulate, Point2, Polygon};
///
/// // L-shaped polygon (concave)
/// let l_shape = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 1.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(1.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ]);
///
/// let result = triangulate(&l_shape).unwrap();
/// assert_eq!(result.triangles().len(), 4); // 6 vertices -> 4 triangles
/// ```
pub fn triangulate<F: Float>(polygon: &Polygon<F>) -> Result<Triangulation<F>, GeomError> {
    triangulate_with(polygon, &TriangulateOptions::default())
}

/// Triangulates a polygon with explicit options.
///
/// # Errors
///
/// Same as [`triangulate`].
pub fn triangulate_with<F: Float>(
    polygon: &Polygon<F>,
    options: &TriangulateOptions,
) -> Result<Triangulation<F>, GeomError> {
    let n = polygon.len();
    if n < 3 {
        return Err(InvalidInput::TooFewVertices { count: n }.into());
    }
    if let Some(index) = polygon.vertices.iter().position(|p| !p.is_finite()) {
        return Err(InvalidInput::NonFiniteCoordinate { index }.into());
    }

    let v = &polygon.vertices;
    if n == 3 {
        let mut triangles = TriangleList::with_capacity(1);
        triangles.push(Triangle2::new(v[0], v[1], v[2]));
        return Ok(Triangulation::Complete(triangles));
    }

    let mut remaining = v.clone();
    let mut triangles = TriangleList::with_capacity(n - 2);

    while remaining.len() >= 3 {
        let m = remaining.len();
        let ear = match find_ear(&remaining, options) {
            Some(ear) => ear,
            // The closing edge of the last three is a boundary edge, and
            // rounding can put its midpoint on either side of the ray.
            None if m == 3 => m - 1,
            None => {
                debug!(
                    clipped = triangles.len(),
                    remaining = m,
                    ray_origin = ?options.ray_origin,
                    crossing = ?options.crossing,
                    "no ear found, triangulation is partial"
                );
                return Ok(Triangulation::Partial {
                    triangles,
                    remaining,
                });
            }
        };

        let prev = (ear + m - 1) % m;
        let next = (ear + 1) % m;
        triangles.push(Triangle2::new(remaining[prev], remaining[ear], remaining[next]));
        remaining.remove(ear);
        trace!(index = ear, remaining = m - 1, "clipped ear");
    }

    debug!(vertices = n, triangles = triangles.len(), "triangulation complete");
    Ok(Triangulation::Complete(triangles))
}

/// Scans from the last vertex down and returns the first valid ear.
fn find_ear<F: Float>(vertices: &[Point2<F>], options: &TriangulateOptions) -> Option<usize> {
    let m = vertices.len();
    let origin_x = ray_origin_x(vertices, options.ray_origin);
    (0..m).rev().find(|&curr| {
        let prev = (curr + m - 1) % m;
        let next = (curr + 1) % m;
        is_ear(vertices, prev, curr, next, origin_x, options.crossing)
    })
}

fn is_ear<F: Float>(
    vertices: &[Point2<F>],
    prev: usize,
    curr: usize,
    next: usize,
    origin_x: F,
    crossing: CrossingRule,
) -> bool {
    let tri = Triangle2::new(vertices[prev], vertices[curr], vertices[next]);

    let encloses_other = vertices
        .iter()
        .enumerate()
        .any(|(j, &v)| j != prev && j != curr && j != next && tri.contains(v));
    if encloses_other {
        return false;
    }

    let half = F::one() / (F::one() + F::one());
    let midpoint = Segment2::new(vertices[next], vertices[prev]).point_at(half);
    !crossing_count(vertices, midpoint, origin_x, crossing).is_multiple_of(2)
}

/// Number of boundary edges crossed by the horizontal segment from
/// `(origin_x, p.y)` to `p`.
fn crossing_count<F: Float>(
    vertices: &[Point2<F>],
    p: Point2<F>,
    origin_x: F,
    crossing: CrossingRule,
) -> usize {
    let ray = Segment2::new(Point2::new(origin_x, p.y), p);
    closed_edges(vertices)
        .filter(|edge| match crossing {
            CrossingRule::HalfOpen => (edge.start.y > p.y) != (edge.end.y > p.y),
            CrossingRule::Inclusive => true,
        })
        .filter(|edge| edge.intersection(ray, true).is_some())
        .count()
}

fn ray_origin_x<F: Float>(vertices: &[Point2<F>], origin: RayOrigin) -> F {
    match origin {
        RayOrigin::SmallestPositive => F::min_positive_value() * F::epsilon(),
        RayOrigin::OutsideBounds => match Aabb2::from_points(vertices.iter().copied()) {
            Some(bounds) => bounds.min.x - (bounds.width() + F::one()),
            None => -F::one(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::polygon_area;
    use approx::assert_relative_eq;

    fn poly(points: &[(f64, f64)]) -> Polygon<f64> {
        points.iter().map(|&p| Point2::from(p)).collect()
    }

    fn square() -> Polygon<f64> {
        poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
    }

    fn l_shape() -> Polygon<f64> {
        poly(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ])
    }

    fn bowtie() -> Polygon<f64> {
        poly(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)])
    }

    fn shifted(p: &Polygon<f64>, dx: f64, dy: f64) -> Polygon<f64> {
        p.vertices
            .iter()
            .map(|v| Point2::new(v.x + dx, v.y + dy))
            .collect()
    }

    #[test]
    fn test_square() {
        let result = triangulate(&square()).unwrap();
        assert!(result.is_complete());
        assert_eq!(result.triangles().len(), 2);
        assert_relative_eq!(result.triangles().area(), 16.0);
        assert!(result.remaining().is_empty());
    }

    #[test]
    fn test_removal_order() {
        let tris = triangulate(&square()).unwrap().into_triangles();
        let p = |x, y| Point2::new(x, y);
        assert_eq!(
            tris[0],
            Triangle2::new(p(4.0, 4.0), p(0.0, 4.0), p(0.0, 0.0))
        );
        assert_eq!(
            tris[1],
            Triangle2::new(p(4.0, 0.0), p(4.0, 4.0), p(0.0, 0.0))
        );
    }

    #[test]
    fn test_single_triangle_unchanged() {
        let input = poly(&[(0.0, 0.0), (4.0, 0.0), (0.5, 3.5)]);
        let result = triangulate(&input).unwrap();
        assert!(result.is_complete());
        assert_eq!(
            result.triangles().to_vec(),
            vec![Triangle2::new(
                input.vertices[0],
                input.vertices[1],
                input.vertices[2]
            )]
        );
    }

    #[test]
    fn test_l_shape_either_winding() {
        let ccw = l_shape();
        let cw: Polygon<f64> = ccw.vertices.iter().rev().copied().collect();
        for p in [ccw, cw] {
            let result = triangulate(&p).unwrap();
            assert!(result.is_complete());
            assert_eq!(result.triangles().len(), 4);
            assert_relative_eq!(result.triangles().area(), 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_hexagon() {
        let hex = poly(&[
            (2.0, 0.0),
            (1.0, 1.732),
            (-1.0, 1.732),
            (-2.0, 0.0),
            (-1.0, -1.732),
            (1.0, -1.732),
        ]);
        let result = triangulate(&hex).unwrap();
        assert!(result.is_complete());
        assert_eq!(result.triangles().len(), 4);
        assert_relative_eq!(result.triangles().area(), hex.area(), epsilon = 1e-9);
    }

    #[test]
    fn test_collinear_vertex() {
        let p = poly(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let result = triangulate(&p).unwrap();
        assert!(result.is_complete());
        assert_eq!(result.triangles().len(), 3);
        assert_relative_eq!(result.triangles().area(), 16.0);
    }

    #[test]
    fn test_bowtie_is_partial() {
        let result = triangulate(&bowtie()).unwrap();
        assert!(!result.is_complete());
        assert!(result.triangles().is_empty());
        assert_eq!(result.remaining(), &bowtie().vertices[..]);
    }

    #[test]
    fn test_all_collinear_is_partial() {
        let line = poly(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let result = triangulate(&line).unwrap();
        assert!(!result.is_complete());
        assert_eq!(result.remaining().len(), 4);
    }

    #[test]
    fn test_too_few_vertices() {
        for n in 0..3 {
            let p: Polygon<f64> = (0..n).map(|i| Point2::new(i as f64, 0.0)).collect();
            assert_eq!(
                triangulate(&p),
                Err(GeomError::InvalidInput(InvalidInput::TooFewVertices {
                    count: n
                }))
            );
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let p = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, f64::NAN), (0.0, 1.0)]);
        assert_eq!(
            triangulate(&p),
            Err(GeomError::InvalidInput(InvalidInput::NonFiniteCoordinate {
                index: 2
            }))
        );
    }

    #[test]
    fn test_input_not_mutated() {
        let input = l_shape();
        let before = input.clone();
        let _ = triangulate(&input).unwrap();
        assert_eq!(input, before);
    }

    #[test]
    fn test_deterministic() {
        let a = triangulate(&l_shape()).unwrap();
        let b = triangulate(&l_shape()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_legacy_positive_half_plane() {
        let legacy = TriangulateOptions::legacy();
        let sq = triangulate_with(&square(), &legacy).unwrap();
        assert!(sq.is_complete());
        assert_eq!(sq.triangles().len(), 2);

        let moved = shifted(&l_shape(), 10.0, 10.0);
        let l = triangulate_with(&moved, &legacy).unwrap();
        assert!(l.is_complete());
        assert_relative_eq!(l.triangles().area(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_legacy_removal_order() {
        let p = |x, y| Point2::new(x, y);
        let sq = triangulate_with(&square(), &TriangulateOptions::legacy())
            .unwrap()
            .into_triangles();
        assert_eq!(
            sq.to_vec(),
            vec![
                Triangle2::new(p(4.0, 4.0), p(0.0, 4.0), p(0.0, 0.0)),
                Triangle2::new(p(4.0, 0.0), p(4.0, 4.0), p(0.0, 0.0)),
            ]
        );

        // The last candidate's midpoint ray crosses two edges, so the
        // final triangle comes from the next index down.
        let kite = poly(&[(12.0, 10.0), (14.0, 12.0), (12.0, 15.0), (10.0, 12.0)]);
        let tris = triangulate_with(&kite, &TriangulateOptions::legacy())
            .unwrap()
            .into_triangles();
        assert_eq!(
            tris.to_vec(),
            vec![
                Triangle2::new(p(12.0, 15.0), p(10.0, 12.0), p(12.0, 10.0)),
                Triangle2::new(p(12.0, 10.0), p(14.0, 12.0), p(12.0, 15.0)),
            ]
        );
    }

    #[test]
    fn test_final_three_are_tested() {
        let p = |x, y| Point2::new(x, y);
        let cw = poly(&[(0.0, 4.0), (4.0, 4.0), (4.0, 0.0), (0.0, 0.0)]);
        let tris = triangulate(&cw).unwrap().into_triangles();
        assert_eq!(
            tris.to_vec(),
            vec![
                Triangle2::new(p(4.0, 0.0), p(0.0, 0.0), p(0.0, 4.0)),
                Triangle2::new(p(0.0, 4.0), p(4.0, 4.0), p(4.0, 0.0)),
            ]
        );
    }

    #[test]
    fn test_legacy_fails_left_of_origin() {
        // Vertices at x <= 0 sit left of the sentinel ray origin.
        let result = triangulate_with(&l_shape(), &TriangulateOptions::legacy()).unwrap();
        assert!(!result.is_complete());
        assert!(result.triangles().len() < 4);
    }

    #[test]
    fn test_inclusive_crossing_through_vertex() {
        let hex = poly(&[
            (2.0, 0.0),
            (1.0, 1.732),
            (-1.0, 1.732),
            (-2.0, 0.0),
            (-1.0, -1.732),
            (1.0, -1.732),
        ]);
        let options = TriangulateOptions::default().with_crossing(CrossingRule::Inclusive);
        let result = triangulate_with(&hex, &options).unwrap();
        assert!(!result.is_complete());

        let half_open = TriangulateOptions::default().with_crossing(CrossingRule::HalfOpen);
        assert!(triangulate_with(&hex, &half_open).unwrap().is_complete());
    }

    #[test]
    fn test_options_builders() {
        let o = TriangulateOptions::default()
            .with_ray_origin(RayOrigin::SmallestPositive)
            .with_crossing(CrossingRule::Inclusive);
        assert_eq!(o, TriangulateOptions::legacy());
        assert_eq!(TriangulateOptions::default().ray_origin, RayOrigin::OutsideBounds);
        assert_eq!(TriangulateOptions::default().crossing, CrossingRule::HalfOpen);
    }

    #[test]
    fn test_ray_origin_left_of_bounds() {
        let v = shifted(&square(), -3.0, 0.0).vertices;
        assert_eq!(ray_origin_x(&v, RayOrigin::OutsideBounds), -8.0);
        let tiny: f64 = ray_origin_x(&v, RayOrigin::SmallestPositive);
        assert!(tiny > 0.0);
        assert_eq!(tiny, f64::from_bits(1));
    }

    #[test]
    fn test_crossing_count() {
        let v = l_shape().vertices;
        let inside = Point2::new(0.5, 1.5);
        let outside = Point2::new(1.5, 1.5);
        let origin = ray_origin_x(&v, RayOrigin::OutsideBounds);
        assert!(!crossing_count(&v, inside, origin, CrossingRule::HalfOpen).is_multiple_of(2));
        assert!(crossing_count(&v, outside, origin, CrossingRule::HalfOpen).is_multiple_of(2));
    }

    #[test]
    fn test_f32_polygon() {
        let square: Polygon<f32> = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]);
        let result = triangulate(&square).unwrap();
        assert_eq!(result.triangles().len(), 2);
    }

    #[test]
    fn test_triangle_list_f32_export() {
        let tris = triangulate(&square()).unwrap().into_triangles();
        let flat = tris.to_f32_vec();
        assert_eq!(flat.len(), 12);
        assert_eq!(&flat[..6], &[4.0, 4.0, 0.0, 4.0, 0.0, 0.0]);
    }

    #[test]
    fn test_area_matches_shoelace() {
        let shapes = vec![
            poly(&[(0.0, 0.0), (3.0, 0.0), (4.0, 2.0), (1.5, 4.0), (-1.0, 2.0)]),
            poly(&[
                (0.0, 2.0),
                (1.0, 0.0),
                (0.5, 0.0),
                (0.5, -1.0),
                (-0.5, -1.0),
                (-0.5, 0.0),
                (-1.0, 0.0),
            ]),
            poly(&[
                (0.0, 0.0),
                (3.0, 0.0),
                (3.0, 3.0),
                (2.0, 3.0),
                (2.0, 1.0),
                (1.0, 1.0),
                (1.0, 3.0),
                (0.0, 3.0),
            ]),
        ];
        for shape in shapes {
            let result = triangulate(&shape).unwrap();
            assert!(result.is_complete());
            assert_eq!(result.triangles().len(), shape.len() - 2);
            assert_relative_eq!(
                result.triangles().area(),
                polygon_area(&shape.vertices),
                epsilon = 1e-10
            );
        }
    }
}
