//! Seeding, filtering, and single-pass quality refinement.

use crate::domain::Domain;
use crate::error::MeshError;
use crate::primitives::Point2;
use crate::sampling::{grid_points, rejection_points_with_seed, DEFAULT_MAX_ITERATIONS};
use crate::triangulation::{triangulate, Triangle};
use num_traits::Float;

use super::quality::{triangle_centroid, triangle_quality, QUALITY_THRESHOLD};

/// Absolute distance below which an inserted refinement point is considered
/// a duplicate of an existing point.
pub const MERGE_TOLERANCE: f64 = 1e-8;

/// Seeding and filtering policy for mesh generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshStrategy {
    /// Grid-seeded interior with a single quality-driven refinement pass:
    /// thin triangles get their centroid inserted and the augmented point
    /// set is re-triangulated.
    QualityRefined,

    /// Randomly seeded interior with centroid filtering only. Rejection
    /// sampling draws from the given seed under the given iteration cap.
    RandomSampled {
        /// Seed for the rejection sampler.
        seed: u64,
        /// Iteration cap for the rejection sampler.
        max_iterations: usize,
    },
}

impl MeshStrategy {
    /// Random-sampled strategy with the default iteration cap.
    pub fn random_sampled(seed: u64) -> Self {
        Self::RandomSampled {
            seed,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Grid seeding plus one quality pass: triangulate, insert centroids of
/// thin in-domain triangles, re-triangulate, keep in-domain triangles.
///
/// Exactly one pass. Triangles created by the re-triangulation are not
/// re-evaluated for further splitting.
pub(crate) fn quality_refined<F: Float>(
    domain: &Domain<F>,
    interior: usize,
) -> Result<(Vec<Point2<F>>, Vec<Triangle>), MeshError> {
    let mut points: Vec<Point2<F>> = domain.boundary().to_vec();
    points.extend(grid_points(domain, interior));

    let raw = triangulate(&points)?;

    let threshold = F::from(QUALITY_THRESHOLD).unwrap();
    let tolerance = F::from(MERGE_TOLERANCE).unwrap();

    for tri in &raw {
        let a = points[tri.a];
        let b = points[tri.b];
        let c = points[tri.c];

        let centroid = triangle_centroid(a, b, c);
        if !domain.contains(centroid) {
            // Outside the domain: neither kept nor refined.
            continue;
        }

        if triangle_quality(a, b, c) > threshold && !has_point_near(&points, centroid, tolerance) {
            points.push(centroid);
        }
    }

    let refined = triangulate(&points)?;
    let triangles = retain_interior(domain, &points, refined, false);
    Ok((points, triangles))
}

/// Rejection-sampled seeding with centroid filtering, no refinement.
pub(crate) fn random_sampled<F: Float>(
    domain: &Domain<F>,
    interior: usize,
    seed: u64,
    max_iterations: usize,
) -> Result<(Vec<Point2<F>>, Vec<Triangle>), MeshError> {
    let mut points: Vec<Point2<F>> = domain.boundary().to_vec();
    points.extend(rejection_points_with_seed(
        domain,
        interior,
        max_iterations,
        seed,
    )?);

    let raw = triangulate(&points)?;
    let triangles = retain_interior(domain, &points, raw, true);
    Ok((points, triangles))
}

/// Keeps the triangles whose centroid lies inside the domain.
///
/// With `keep_first_on_empty`, an all-filtered result falls back to the
/// first raw triangle so downstream consumers always receive at least one.
/// The fallback triangle may lie outside the domain; it is a documented
/// degenerate-output guard, not a correctness claim.
pub(crate) fn retain_interior<F: Float>(
    domain: &Domain<F>,
    points: &[Point2<F>],
    raw: Vec<Triangle>,
    keep_first_on_empty: bool,
) -> Vec<Triangle> {
    let kept: Vec<Triangle> = raw
        .iter()
        .copied()
        .filter(|tri| {
            let centroid = triangle_centroid(points[tri.a], points[tri.b], points[tri.c]);
            domain.contains(centroid)
        })
        .collect();

    if kept.is_empty() && keep_first_on_empty {
        return raw.into_iter().take(1).collect();
    }
    kept
}

/// Linear scan for an existing point within `tolerance` of `candidate`.
fn has_point_near<F: Float>(points: &[Point2<F>], candidate: Point2<F>, tolerance: F) -> bool {
    let tol_squared = tolerance * tolerance;
    points
        .iter()
        .any(|p| p.distance_squared(candidate) <= tol_squared)
}
