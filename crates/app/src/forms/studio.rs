//! Studio form controller.

use std::collections::BTreeMap;

use cinelog_core::entities::Studio;
use cinelog_core::validation;
use cinelog_store::slices::StudiosSlice;

use super::{FormError, Route};

/// Editable draft of one studio plus its validation surface.
#[derive(Debug, Clone)]
pub struct StudioForm {
    draft: Studio,
}

impl StudioForm {
    pub fn new() -> Self {
        Self {
            draft: Studio::empty(),
        }
    }

    pub fn edit(studio: Studio) -> Self {
        Self { draft: studio }
    }

    pub fn draft(&self) -> &Studio {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Studio {
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
    pub async fn submit(&self, studios: &StudiosSlice) -> Result<Route, FormError> {
        let errors = self.field_errors();
        if !errors.is_empty() {
            return Err(FormError::Invalid(errors));
        }
        match self.draft.id {
            Some(id) => {
                studios.update(self.draft.clone()).await;
                Ok(Route::StudioDetail(id))
            }
            None => {
                studios.create(self.draft.clone()).await;
                Ok(Route::StudioList)
            }
        }
    }
}

impl Default for StudioForm {
    fn default() -> Self {
        Self::new()
    }
}
