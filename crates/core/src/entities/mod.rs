//! Catalog entity types.
//!
//! Field names follow the backend wire format (camelCase in places,
//! via serde renames). Every entity has an
//! `empty()` template: the state a form starts from and the value a
//! slice's `current` selection resets to.

mod actor;
mod director;
mod movie;
mod studio;

pub use actor::Actor;
pub use director::Director;
pub use movie::{Movie, GENRES};
pub use studio::Studio;
