//! Actor form controller.

use std::collections::BTreeMap;

use cinelog_core::entities::Actor;
use cinelog_core::validation;
use cinelog_store::slices::ActorsSlice;

use super::{FormError, Route};

/// Editable draft of one actor plus its validation surface.
#[derive(Debug, Clone)]
pub struct ActorForm {
    draft: Actor,
}

impl ActorForm {
    pub fn new() -> Self {
        Self {
            draft: Actor::empty(),
        }
    }

    pub fn edit(actor: Actor) -> Self {
        Self { draft: actor }
    }

    pub fn draft(&self) -> &Actor {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Actor {
        &mut self.draft
    }

    /// Field -> first failing message; empty when submittable.
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        validation::field_errors(&self.draft)
    }

    pub fn is_valid(&self) -> bool {
        self.field_errors().is_empty()
    }

    /// Dispatch the draft: update when it already carries an id, create
    /// otherwise. Blocked while any field is invalid.
    pub async fn submit(&self, actors: &ActorsSlice) -> Result<Route, FormError> {
        let errors = self.field_errors();
        if !errors.is_empty() {
            return Err(FormError::Invalid(errors));
        }
        match self.draft.id {
            Some(id) => {
                actors.update(self.draft.clone()).await;
                Ok(Route::ActorDetail(id))
            }
            None => {
                actors.create(self.draft.clone()).await;
                Ok(Route::ActorList)
            }
        }
    }
}

impl Default for ActorForm {
    fn default() -> Self {
        Self::new()
    }
}
