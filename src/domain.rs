//! Polygonal domain: boundary resampling and point containment.

use crate::bounds::Aabb2;
use crate::error::MeshError;
use crate::primitives::Point2;
use num_traits::Float;

/// A simple polygon domain to be meshed.
///
/// Holds the original vertices and a resampled boundary with near-uniform
/// arc-length spacing, suitable as triangulation input. The polygon is
/// implicitly closed (the last vertex connects back to the first).
///
/// Immutable after construction.
///
/// # Example
///
/// ```
/// use meshum::{Domain, Point2};
///
/// let square = vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ];
///
/// let domain = Domain::new(&square, 8)?;
///
/// assert!(domain.contains(Point2::new(2.0, 2.0)));
/// assert!(!domain.contains(Point2::new(5.0, 2.0)));
/// # Ok::<(), meshum::MeshError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Domain<F> {
    original: Vec<Point2<F>>,
    boundary: Vec<Point2<F>>,
}

impl<F: Float> Domain<F> {
    /// Creates a domain from polygon vertices, resampling the boundary to
    /// approximately `target_boundary_points` uniformly spaced points.
    ///
    /// The resampled boundary starts and ends at the first vertex, closing
    /// the loop. Its exact length is an approximation of the target: each
    /// edge rounds its own subdivision count independently and emits at
    /// least two points.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidBoundary`] if fewer than 3 vertices are
    /// given or `target_boundary_points` is below the vertex count.
    pub fn new(vertices: &[Point2<F>], target_boundary_points: usize) -> Result<Self, MeshError> {
        if vertices.len() < 3 || target_boundary_points < vertices.len() {
            return Err(MeshError::InvalidBoundary {
                vertices: vertices.len(),
                target: target_boundary_points,
            });
        }

        let boundary = resample_boundary(vertices, target_boundary_points);
        Ok(Self {
            original: vertices.to_vec(),
            boundary,
        })
    }

    /// Returns the original polygon vertices.
    #[inline]
    pub fn vertices(&self) -> &[Point2<F>] {
        &self.original
    }

    /// Returns the resampled boundary, closed back to the first vertex.
    #[inline]
    pub fn boundary(&self) -> &[Point2<F>] {
        &self.boundary
    }

    /// Returns the polygon perimeter (sum of edge lengths, wrapping).
    pub fn perimeter(&self) -> F {
        polygon_perimeter(&self.original)
    }

    /// Tests whether a point lies inside the domain.
    ///
    /// Uses even-odd ray casting against the original vertices, not the
    /// resampled boundary. Points exactly on the boundary may report either
    /// result; degenerate or self-intersecting polygons give deterministic
    /// but unspecified answers.
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        point_in_polygon(&self.original, point)
    }

    /// Returns the bounding box of the original vertices.
    pub fn bounding_box(&self) -> Aabb2<F> {
        let mut bounds = Aabb2::from_point(self.original[0]);
        for &v in &self.original[1..] {
            bounds = bounds.expand_to_include(v);
        }
        bounds
    }
}

/// Tests if a point is inside a polygon using the even-odd ray casting rule.
///
/// Walks the edges in order and toggles on every edge whose endpoints
/// straddle the horizontal ray from `point` to +∞. Returns `false` for
/// fewer than 3 vertices.
///
/// # Example
///
/// ```
/// use meshum::{point_in_polygon, Point2};
///
/// let triangle = vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(1.0, 2.0),
/// ];
///
/// assert!(point_in_polygon(&triangle, Point2::new(1.0, 0.5)));
/// assert!(!point_in_polygon(&triangle, Point2::new(2.0, 2.0)));
/// ```
pub fn point_in_polygon<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        // Strict on one side, non-strict on the other, so a vertex exactly
        // at point.y is not counted twice.
        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

fn polygon_perimeter<F: Float>(vertices: &[Point2<F>]) -> F {
    let n = vertices.len();
    let mut perimeter = F::zero();
    for i in 0..n {
        perimeter = perimeter + vertices[i].distance(vertices[(i + 1) % n]);
    }
    perimeter
}

/// Emits near-uniformly spaced points along the closed polygon.
///
/// Each edge contributes `max(2, round(edge_length / segment_length))`
/// points over the half-open parameter range [0, 1), then the first vertex
/// is appended once to close the loop.
fn resample_boundary<F: Float>(vertices: &[Point2<F>], target: usize) -> Vec<Point2<F>> {
    let n = vertices.len();
    let segment_length = polygon_perimeter(vertices) / F::from(target).unwrap();

    let mut points = Vec::with_capacity(target + 1);
    for i in 0..n {
        let p1 = vertices[i];
        let p2 = vertices[(i + 1) % n];

        let count = (p1.distance(p2) / segment_length)
            .round()
            .to_usize()
            .unwrap_or(0)
            .max(2);

        for k in 0..count {
            let t = F::from(k).unwrap() / F::from(count).unwrap();
            points.push(p1.lerp(p2, t));
        }
    }

    points.push(vertices[0]);
    points
}
