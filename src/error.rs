//! Error types for mesh generation.

use thiserror::Error;

/// Errors that can occur while generating a mesh.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// The boundary has too few vertices, or the requested boundary density
    /// is below the vertex count.
    #[error("invalid boundary: {vertices} vertices with {target} target boundary points")]
    InvalidBoundary {
        /// Number of polygon vertices supplied.
        vertices: usize,
        /// Requested number of resampled boundary points.
        target: usize,
    },

    /// Rejection sampling exhausted its iteration cap before collecting
    /// enough interior points.
    #[error("seeding timed out: {requested} points requested, {iterations} iterations used")]
    SeedingTimeout {
        /// Number of interior points requested.
        requested: usize,
        /// Iterations spent before giving up.
        iterations: usize,
    },

    /// The triangulation primitive rejected the input points.
    #[error("triangulation failed: {reason}")]
    Triangulation {
        /// Failure description reported by the primitive.
        reason: String,
    },
}
