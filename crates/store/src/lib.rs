//! Client-side state for the movie catalog.
//!
//! One slice per entity (actors, directors, movies, studios), each
//! owning its canonical list, the current selection, and a
//! status/error pair describing the last request. [`CatalogStore`]
//! composes the four slices over one shared HTTP adapter into the
//! process-wide source of truth every view reads from.
//!
//! Async operations follow a requested -> fulfilled/rejected lifecycle:
//! state is mutated only inside the terminal step of each operation,
//! never while a request is in flight. Overlapping calls to the same
//! operation are not deduplicated or cancelled; whichever fulfills last
//! wins.

pub mod error;
pub mod slices;
pub mod status;
pub mod store;

pub use error::SliceError;
pub use store::CatalogStore;
