//! Form controllers: one per entity.
//!
//! A controller owns a mutable draft (the entity struct itself),
//! recomputes the field -> message error map after every change, and on
//! submission either blocks (any rule failing) or dispatches through the
//! matching slice -- update when the draft already carries an id,
//! create otherwise -- and reports where to navigate next.

mod actor;
mod director;
mod movie;
mod studio;

pub use actor::ActorForm;
pub use director::DirectorForm;
pub use movie::MovieForm;
pub use studio::StudioForm;

use std::collections::BTreeMap;

use cinelog_core::types::EntityId;

/// Navigation target produced by a successful submission.
///
/// Concrete path strings are the router's concern; controllers only
/// decide the destination kind: editing an existing record returns to
/// its detail view, creating a new one returns to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    ActorList,
    ActorDetail(EntityId),
    DirectorList,
    DirectorDetail(EntityId),
    MovieList,
    MovieDetail(EntityId),
    StudioList,
    StudioDetail(EntityId),
}

/// Why a submission was not dispatched.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// One or more fields fail their validation rules; the map carries
    /// the first failing message per field.
    #[error("form has invalid fields")]
    Invalid(BTreeMap<String, String>),
}
