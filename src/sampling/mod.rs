//! Interior point seeding strategies.
//!
//! Two interchangeable ways to produce candidate points inside a
//! [`Domain`](crate::domain::Domain): a structured grid over the bounding
//! box, and uniform rejection sampling. Both return points that pass the
//! domain's containment test; neither emits boundary points on purpose.

mod grid;
mod rejection;

pub use grid::grid_points;
pub use rejection::{
    rejection_points, rejection_points_with_seed, RejectionSampler, DEFAULT_MAX_ITERATIONS,
};
