//! Mesh assembly and edge export.
//!
//! [`Mesh::generate`] runs the full pipeline for a prepared
//! [`Domain`](crate::domain::Domain): seed interior points, triangulate the
//! boundary and interior together, then filter (and, depending on the
//! strategy, refine) so every retained triangle lies inside the polygon.
//!
//! # Example
//!
//! ```
//! use meshum::{Domain, Mesh, MeshStrategy, Point2};
//!
//! let square = vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ];
//!
//! let domain = Domain::new(&square, 8)?;
//! let mesh = Mesh::generate(&domain, 16, MeshStrategy::QualityRefined)?;
//!
//! assert!(!mesh.triangles().is_empty());
//! assert_eq!(mesh.edges().len(), mesh.triangles().len() * 3);
//! # Ok::<(), meshum::MeshError>(())
//! ```

mod quality;
mod refine;

pub use quality::{triangle_centroid, triangle_quality, QUALITY_THRESHOLD};
pub use refine::{MeshStrategy, MERGE_TOLERANCE};

use crate::domain::Domain;
use crate::error::MeshError;
use crate::primitives::Point2;
use crate::triangulation::Triangle;
use num_traits::Float;

/// Default resampled boundary density for [`mesh_polygon`].
pub const DEFAULT_BOUNDARY_POINTS: usize = 100;

/// Default interior point count for [`mesh_polygon`].
pub const DEFAULT_INTERIOR_POINTS: usize = 100;

/// A triangular mesh of a polygonal domain.
///
/// `points` holds the boundary points first, then interior points, then any
/// refinement insertions. `triangles` indexes into `points`; every retained
/// triangle's centroid passed the domain's containment test. Read-only
/// after generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh<F> {
    points: Vec<Point2<F>>,
    triangles: Vec<Triangle>,
}

impl<F: Float> Mesh<F> {
    /// Generates a mesh for `domain` with roughly `interior_points` seeded
    /// interior points, using the given strategy.
    ///
    /// # Errors
    ///
    /// Propagates [`MeshError::SeedingTimeout`] from rejection sampling and
    /// [`MeshError::Triangulation`] from the triangulation primitive.
    pub fn generate(
        domain: &Domain<F>,
        interior_points: usize,
        strategy: MeshStrategy,
    ) -> Result<Self, MeshError> {
        let (points, triangles) = match strategy {
            MeshStrategy::QualityRefined => refine::quality_refined(domain, interior_points)?,
            MeshStrategy::RandomSampled {
                seed,
                max_iterations,
            } => refine::random_sampled(domain, interior_points, seed, max_iterations)?,
        };

        Ok(Self { points, triangles })
    }

    /// Returns the mesh points.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Returns the retained triangles as index triples into
    /// [`points`](Self::points).
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Expands every triangle into its three coordinate edges.
    ///
    /// Edges shared by adjacent triangles appear once per triangle; no
    /// deduplication is performed. This is the export surface consumed by
    /// external callers.
    pub fn edges(&self) -> Vec<[Point2<F>; 2]> {
        let mut edges = Vec::with_capacity(self.triangles.len() * 3);
        for tri in &self.triangles {
            for (i, j) in tri.edges() {
                edges.push([self.points[i], self.points[j]]);
            }
        }
        edges
    }
}

/// Meshes a polygon end-to-end with the default boundary and interior
/// densities.
///
/// Convenience wrapper over [`Domain::new`] and [`Mesh::generate`] for
/// callers that hand over raw vertices, mirroring the defaults external
/// collaborators expect.
///
/// # Errors
///
/// Returns [`MeshError::InvalidBoundary`] for fewer than 3 vertices (or
/// more vertices than [`DEFAULT_BOUNDARY_POINTS`]), plus anything
/// [`Mesh::generate`] can return.
pub fn mesh_polygon<F: Float>(
    vertices: &[Point2<F>],
    strategy: MeshStrategy,
) -> Result<Mesh<F>, MeshError> {
    let domain = Domain::new(vertices, DEFAULT_BOUNDARY_POINTS)?;
    Mesh::generate(&domain, DEFAULT_INTERIOR_POINTS, strategy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ]
    }

    #[test]
    fn test_generate_quality_refined() {
        let domain = Domain::new(&square(), 8).unwrap();
        let mesh = Mesh::generate(&domain, 4, MeshStrategy::QualityRefined).unwrap();

        assert!(!mesh.triangles().is_empty());
        for tri in mesh.triangles() {
            assert!(tri.a < mesh.points().len());
            assert!(tri.b < mesh.points().len());
            assert!(tri.c < mesh.points().len());

            let centroid = triangle_centroid(
                mesh.points()[tri.a],
                mesh.points()[tri.b],
                mesh.points()[tri.c],
            );
            assert!(domain.contains(centroid));
        }
    }

    #[test]
    fn test_generate_random_sampled() {
        let domain = Domain::new(&square(), 8).unwrap();
        let mesh = Mesh::generate(&domain, 10, MeshStrategy::random_sampled(42)).unwrap();

        assert!(!mesh.triangles().is_empty());
        for tri in mesh.triangles() {
            let centroid = triangle_centroid(
                mesh.points()[tri.a],
                mesh.points()[tri.b],
                mesh.points()[tri.c],
            );
            assert!(domain.contains(centroid));
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let domain = Domain::new(&square(), 8).unwrap();
        let a = Mesh::generate(&domain, 9, MeshStrategy::QualityRefined).unwrap();
        let b = Mesh::generate(&domain, 9, MeshStrategy::QualityRefined).unwrap();
        assert_eq!(a, b);

        let a = Mesh::generate(&domain, 9, MeshStrategy::random_sampled(3)).unwrap();
        let b = Mesh::generate(&domain, 9, MeshStrategy::random_sampled(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_edges_three_per_triangle() {
        let domain = Domain::new(&square(), 8).unwrap();
        let mesh = Mesh::generate(&domain, 4, MeshStrategy::QualityRefined).unwrap();

        let edges = mesh.edges();
        assert_eq!(edges.len(), mesh.triangles().len() * 3);

        // Every edge endpoint is a mesh point.
        for [p, q] in &edges {
            assert!(mesh.points().contains(p));
            assert!(mesh.points().contains(q));
        }
    }

    #[test]
    fn test_mesh_polygon_defaults() {
        let mesh = mesh_polygon(&square(), MeshStrategy::QualityRefined).unwrap();
        assert!(!mesh.triangles().is_empty());
        // Boundary resampled to roughly the default density plus interior
        // seeds.
        assert!(mesh.points().len() > DEFAULT_BOUNDARY_POINTS / 2);
    }

    #[test]
    fn test_mesh_polygon_rejects_degenerate_input() {
        let line = vec![Point2::new(0.0_f64, 0.0), Point2::new(1.0, 0.0)];
        let err = mesh_polygon(&line, MeshStrategy::QualityRefined).unwrap_err();
        assert!(matches!(err, MeshError::InvalidBoundary { .. }));
    }

    #[test]
    fn test_scenario_square_small_counts() {
        // 4x4 square, 8 boundary points, 4 interior seeds.
        let domain = Domain::new(&square(), 8).unwrap();
        assert_eq!(domain.boundary().len(), 9);

        let mesh = Mesh::generate(&domain, 4, MeshStrategy::QualityRefined).unwrap();
        assert!(!mesh.triangles().is_empty());

        let bounds = domain.bounding_box();
        for p in mesh.points() {
            assert!(bounds.contains_point(*p));
        }
    }
}
