//! Seam to the external Delaunay triangulation primitive.
//!
//! This module performs no geometric computation of its own: it converts
//! points to the primitive's coordinate type, hands them to
//! [`spade`], and maps the resulting faces back to indices into the input
//! slice. Everything geometric about the triangulation (convex hull
//! coverage, handling of collinear or duplicate input) is the primitive's
//! contract.

use crate::error::MeshError;
use crate::primitives::Point2;
use num_traits::Float;
use spade::{DelaunayTriangulation, Triangulation};

/// A triangle represented by indices into a point array.
///
/// Vertices are stored in counter-clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// First vertex index
    pub a: usize,
    /// Second vertex index
    pub b: usize,
    /// Third vertex index
    pub c: usize,
}

impl Triangle {
    /// Creates a new triangle from vertex indices.
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// Returns the three edges of this triangle as pairs of indices.
    #[inline]
    pub fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Checks if the triangle contains a specific vertex index.
    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.a == v || self.b == v || self.c == v
    }
}

/// Computes the Delaunay triangulation of a set of points.
///
/// Returns index triples into `points` covering the point set's convex
/// hull. Fewer than three effective points, or fully collinear input,
/// yields an empty list. Exactly coincident points are absorbed: their
/// triangles reference the first occurrence's index.
///
/// # Errors
///
/// Returns [`MeshError::Triangulation`] if the primitive rejects a point
/// (non-finite coordinates).
///
/// # Example
///
/// ```
/// use meshum::{triangulate, Point2};
///
/// // Square with center point
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.5, 0.5),
/// ];
///
/// let triangles = triangulate(&points)?;
/// assert_eq!(triangles.len(), 4);
/// # Ok::<(), meshum::MeshError>(())
/// ```
pub fn triangulate<F: Float>(points: &[Point2<F>]) -> Result<Vec<Triangle>, MeshError> {
    let mut delaunay: DelaunayTriangulation<spade::Point2<f64>> = DelaunayTriangulation::new();

    // Maps the primitive's vertex slots back to input indices. Inserting a
    // coincident point returns the existing vertex, so the first input
    // index keeps the slot.
    let mut input_index: Vec<usize> = Vec::with_capacity(points.len());

    for (i, p) in points.iter().enumerate() {
        let x = p.x.to_f64().unwrap_or(f64::NAN);
        let y = p.y.to_f64().unwrap_or(f64::NAN);

        let handle = delaunay
            .insert(spade::Point2::new(x, y))
            .map_err(|e| MeshError::Triangulation {
                reason: e.to_string(),
            })?;

        if handle.index() == input_index.len() {
            input_index.push(i);
        }
    }

    Ok(delaunay
        .inner_faces()
        .map(|face| {
            let [va, vb, vc] = face.vertices();
            Triangle::new(
                input_index[va.fix().index()],
                input_index[vb.fix().index()],
                input_index[vc.fix().index()],
            )
        })
        .collect())
}
