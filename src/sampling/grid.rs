//! Structured grid seeding.

use crate::domain::Domain;
use crate::primitives::Point2;
use num_traits::Float;

/// Generates interior points on a regular grid over the domain's bounding
/// box.
///
/// The grid resolution is `floor(sqrt(target))` per axis, with inclusive
/// endpoints. Grid points failing the containment test are dropped, and at
/// most `target` points are returned in scan order (x-major). Returning
/// fewer than `target` points is a documented shortfall, not an error:
/// callers must tolerate the reduced density.
///
/// The result is deterministic for a given domain and target.
///
/// # Example
///
/// ```
/// use meshum::sampling::grid_points;
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
/// let points = grid_points(&domain, 16);
/// assert!(points.len() <= 16);
/// for p in &points {
///     assert!(domain.contains(*p));
/// }
/// # Ok::<(), meshum::MeshError>(())
/// ```
pub fn grid_points<F: Float>(domain: &Domain<F>, target: usize) -> Vec<Point2<F>> {
    let resolution = (target as f64).sqrt().floor() as usize;
    if resolution == 0 {
        return Vec::new();
    }

    let bounds = domain.bounding_box();
    let mut points = Vec::new();

    for i in 0..resolution {
        let x = lattice_coord(bounds.min.x, bounds.max.x, i, resolution);
        for j in 0..resolution {
            let y = lattice_coord(bounds.min.y, bounds.max.y, j, resolution);
            let p = Point2::new(x, y);
            if domain.contains(p) {
                points.push(p);
                if points.len() == target {
                    return points;
                }
            }
        }
    }

    points
}

/// The i-th of `count` lattice coordinates spanning [min, max], endpoints
/// included.
fn lattice_coord<F: Float>(min: F, max: F, i: usize, count: usize) -> F {
    if count <= 1 {
        return min;
    }
    let t = F::from(i).unwrap() / F::from(count - 1).unwrap();
    min + (max - min) * t
}
