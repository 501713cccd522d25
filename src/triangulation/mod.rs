//! Triangulation of 2D point sets.

mod delaunay;

pub use delaunay::{triangulate, Triangle};
