//! Triangle quality and centroid measures.

use crate::primitives::Point2;
use num_traits::Float;

/// Aspect-ratio threshold above which a triangle is split during
/// refinement. The comparison is strict, so an equilateral triangle
/// (quality exactly 2) is never refined.
pub const QUALITY_THRESHOLD: f64 = 2.0;

/// Computes the aspect-ratio quality of a triangle: circumradius divided by
/// inradius.
///
/// An equilateral triangle scores exactly 2; thinner triangles score
/// higher. A zero-area (degenerate) triangle scores 0 so it is never
/// selected for refinement.
///
/// # Example
///
/// ```
/// use meshum::mesh::triangle_quality;
/// use meshum::Point2;
///
/// let q = triangle_quality(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.5, 3.0_f64.sqrt() / 2.0),
/// );
/// assert!((q - 2.0).abs() < 1e-9);
/// ```
pub fn triangle_quality<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    let ab = a.distance(b);
    let bc = b.distance(c);
    let ca = c.distance(a);

    let two = F::from(2.0).unwrap();
    let s = (ab + bc + ca) / two;

    // Heron's formula; the product can dip below zero for degenerate
    // triangles under floating point.
    let area_squared = s * (s - ab) * (s - bc) * (s - ca);
    if area_squared <= F::zero() {
        return F::zero();
    }

    let area = area_squared.sqrt();
    if area == F::zero() {
        return F::zero();
    }

    let circumradius = ab * bc * ca / (F::from(4.0).unwrap() * area);
    let inradius = area / s;
    circumradius / inradius
}

/// Computes the centroid (vertex mean) of a triangle.
#[inline]
pub fn triangle_centroid<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Point2<F> {
    let three = F::from(3.0).unwrap();
    Point2::new((a.x + b.x + c.x) / three, (a.y + b.y + c.y) / three)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_equilateral_quality() {
        let q: f64 = triangle_quality(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 3.0_f64.sqrt() / 2.0),
        );
        assert_relative_eq!(q, 2.0, epsilon = 1e-9);
        // Sits exactly on the strict threshold, so never refined.
        assert!(q <= QUALITY_THRESHOLD);
    }

    #[test]
    fn test_right_triangle_quality() {
        // Right isoceles: R/r works out to 1 + sqrt(2), above the
        // refinement threshold.
        let q: f64 = triangle_quality(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        );
        assert!(q > 2.0);
        assert_relative_eq!(q, 1.0 + 2.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_skinny_triangle_quality() {
        let q: f64 = triangle_quality(
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(5.0, 0.1),
        );
        assert!(q > 100.0);
    }

    #[test]
    fn test_degenerate_quality_is_zero() {
        let q: f64 = triangle_quality(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        );
        assert_eq!(q, 0.0);

        // Repeated vertex.
        let q: f64 = triangle_quality(
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 0.0),
        );
        assert_eq!(q, 0.0);
    }

    #[test]
    fn test_quality_scale_invariant() {
        let small: f64 = triangle_quality(
            Point2::new(0.0, 0.0),
            Point2::new(0.01, 0.0),
            Point2::new(0.0, 0.02),
        );
        let large: f64 = triangle_quality(
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(0.0, 200.0),
        );
        assert_relative_eq!(small, large, epsilon = 1e-6);
    }

    #[test]
    fn test_centroid() {
        let c = triangle_centroid(
            Point2::new(0.0_f64, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(0.0, 3.0),
        );
        assert_eq!(c, Point2::new(1.0, 1.0));
    }
}
