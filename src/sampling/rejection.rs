//! Rejection sampling of interior points.

use crate::bounds::Aabb2;
use crate::domain::Domain;
use crate::error::MeshError;
use crate::primitives::Point2;
use num_traits::Float;

/// Default iteration cap for rejection sampling.
///
/// Generous for any domain covering a reasonable fraction of its bounding
/// box; only near-zero-area domains exhaust it.
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

/// Generates `target` interior points by uniform rejection sampling.
///
/// The seed is derived from the domain's bounding box and the target count,
/// so repeated calls with the same inputs are reproducible. Use
/// [`rejection_points_with_seed`] to control the seed directly.
///
/// # Errors
///
/// Returns [`MeshError::SeedingTimeout`] if `max_iterations` draws pass
/// before `target` points are accepted. The cap is mandatory: a domain with
/// zero or negligible area relative to its bounding box would otherwise
/// loop forever.
pub fn rejection_points<F: Float>(
    domain: &Domain<F>,
    target: usize,
    max_iterations: usize,
) -> Result<Vec<Point2<F>>, MeshError> {
    let bounds = domain.bounding_box();
    let seed = (bounds.width().to_f64().unwrap_or(1.0) * 1000.0
        + bounds.height().to_f64().unwrap_or(1.0) * 100.0
        + target as f64) as u64;

    rejection_points_with_seed(domain, target, max_iterations, seed)
}

/// Generates `target` interior points by rejection sampling with a specific
/// random seed.
///
/// This allows for reproducible results.
///
/// # Example
///
/// ```
/// use meshum::sampling::rejection_points_with_seed;
/// use meshum::{Domain, Point2};
///
/// let square = vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ];
/// let domain = Domain::new(&square, 8)?;
///
/// let points = rejection_points_with_seed(&domain, 10, 10_000, 42)?;
/// assert_eq!(points.len(), 10);
/// for p in &points {
///     assert!(domain.contains(*p));
/// }
/// # Ok::<(), meshum::MeshError>(())
/// ```
pub fn rejection_points_with_seed<F: Float>(
    domain: &Domain<F>,
    target: usize,
    max_iterations: usize,
    seed: u64,
) -> Result<Vec<Point2<F>>, MeshError> {
    let mut sampler = RejectionSampler::new(domain.bounding_box(), seed);
    sampler.sample(domain, target, max_iterations)
}

/// A rejection sampler that draws uniform points from a bounding box.
///
/// Owns its RNG state, so sampling never touches global state and is
/// deterministic for a given seed.
pub struct RejectionSampler<F> {
    bounds: Aabb2<F>,
    rng_state: u64,
}

impl<F: Float> RejectionSampler<F> {
    /// Creates a new sampler drawing from `bounds`.
    ///
    /// A zero seed is mapped to one; xorshift has a fixed point at zero.
    pub fn new(bounds: Aabb2<F>, seed: u64) -> Self {
        Self {
            bounds,
            rng_state: seed.max(1),
        }
    }

    /// Draws until `target` points pass the domain's containment test.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::SeedingTimeout`] once `max_iterations` draws
    /// have been spent.
    pub fn sample(
        &mut self,
        domain: &Domain<F>,
        target: usize,
        max_iterations: usize,
    ) -> Result<Vec<Point2<F>>, MeshError> {
        let mut points = Vec::with_capacity(target);
        let mut iterations = 0;

        while points.len() < target {
            if iterations >= max_iterations {
                return Err(MeshError::SeedingTimeout {
                    requested: target,
                    iterations,
                });
            }
            iterations += 1;

            let p = self.random_point();
            if domain.contains(p) {
                points.push(p);
            }
        }

        Ok(points)
    }

    /// Draws a uniform point from the bounding box.
    fn random_point(&mut self) -> Point2<F> {
        let x = self.bounds.min.x + self.random_f() * self.bounds.width();
        let y = self.bounds.min.y + self.random_f() * self.bounds.height();
        Point2::new(x, y)
    }

    /// Simple xorshift64 PRNG - returns value in [0, 1).
    fn random_f(&mut self) -> F {
        self.rng_state ^= self.rng_state << 13;
        self.rng_state ^= self.rng_state >> 7;
        self.rng_state ^= self.rng_state << 17;

        let max = u64::MAX as f64;
        F::from(self.rng_state as f64 / max).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_domain() -> Domain<f64> {
        let vertices = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ];
        Domain::new(&vertices, 8).unwrap()
    }

    #[test]
    fn test_collects_exact_count() {
        let domain = square_domain();
        let points = rejection_points(&domain, 20, DEFAULT_MAX_ITERATIONS).unwrap();
        assert_eq!(points.len(), 20);
        for p in &points {
            assert!(domain.contains(*p));
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let domain = square_domain();
        let a = rejection_points_with_seed(&domain, 15, DEFAULT_MAX_ITERATIONS, 777).unwrap();
        let b = rejection_points_with_seed(&domain, 15, DEFAULT_MAX_ITERATIONS, 777).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let domain = square_domain();
        let a = rejection_points_with_seed(&domain, 15, DEFAULT_MAX_ITERATIONS, 111).unwrap();
        let b = rejection_points_with_seed(&domain, 15, DEFAULT_MAX_ITERATIONS, 222).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_timeout_on_degenerate_domain() {
        // Collinear vertices bound zero area: every draw is rejected.
        let collinear = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        let domain = Domain::new(&collinear, 6).unwrap();

        let err = rejection_points(&domain, 5, 100).unwrap_err();
        assert_eq!(
            err,
            MeshError::SeedingTimeout {
                requested: 5,
                iterations: 100
            }
        );
    }

    #[test]
    fn test_zero_target() {
        let domain = square_domain();
        let points = rejection_points(&domain, 0, 10).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_zero_seed_still_samples() {
        let domain = square_domain();
        let points = rejection_points_with_seed(&domain, 5, DEFAULT_MAX_ITERATIONS, 0).unwrap();
        assert_eq!(points.len(), 5);
    }

    #[test]
    fn test_points_within_bounding_box() {
        let domain = square_domain();
        let bounds = domain.bounding_box();
        let points = rejection_points_with_seed(&domain, 30, DEFAULT_MAX_ITERATIONS, 9).unwrap();
        for p in points {
            assert!(bounds.contains_point(p));
        }
    }
}
