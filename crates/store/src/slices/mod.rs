//! One state slice per entity type.
//!
//! Every slice follows the same two-layer shape: a plain state struct
//! with pure synchronous transitions (unit-testable without a network),
//! and a slice struct owning the state behind a lock plus the async
//! operations that drive the request lifecycle.

pub mod actors;
pub mod directors;
pub mod movies;
pub mod studios;

pub use actors::{ActorsSlice, ActorsState};
pub use directors::{DirectorsSlice, DirectorsState};
pub use movies::{MoviesSlice, MoviesState};
pub use studios::{StudiosSlice, StudiosState};
