//! meshum - Polygon-conforming triangular meshes
//!
//! Generates a 2D triangular mesh that conforms to an arbitrary simple
//! polygon boundary. The boundary is resampled to near-uniform spacing,
//! interior points are seeded (on a grid or by rejection sampling), the
//! combined point set is Delaunay-triangulated, and triangles falling
//! outside the polygon are filtered away, optionally after one
//! quality-driven refinement pass that splits thin triangles at their
//! centroid.
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
//! # Ok::<(), meshum::MeshError>(())
//! ```

pub mod bounds;
pub mod domain;
pub mod error;
pub mod mesh;
pub mod primitives;
pub mod sampling;
pub mod triangulation;

pub use bounds::Aabb2;
pub use domain::{point_in_polygon, Domain};
pub use error::MeshError;
pub use mesh::{mesh_polygon, Mesh, MeshStrategy};
pub use primitives::{Point2, Vec2};
pub use triangulation::{triangulate, Triangle};
