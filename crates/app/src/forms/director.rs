//! Director form controller.

use std::collections::BTreeMap;

use cinelog_core::entities::Director;
use cinelog_core::validation;
use cinelog_store::slices::DirectorsSlice;

use super::{FormError, Route};

/// Editable draft of one director plus its validation surface.
#[derive(Debug, Clone)]
pub struct DirectorForm {
    draft: Director,
}

impl DirectorForm {
    pub fn new() -> Self {
        Self {
            draft: Director::empty(),
        }
    }

    pub fn edit(director: Director) -> Self {
        Self { draft: director }
    }

    pub fn draft(&self) -> &Director {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Director {
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
    pub async fn submit(&self, directors: &DirectorsSlice) -> Result<Route, FormError> {
        let errors = self.field_errors();
        if !errors.is_empty() {
            return Err(FormError::Invalid(errors));
        }
        match self.draft.id {
            Some(id) => {
                directors.update(self.draft.clone()).await;
                Ok(Route::DirectorDetail(id))
            }
            None => {
                directors.create(self.draft.clone()).await;
                Ok(Route::DirectorList)
            }
        }
    }
}

impl Default for DirectorForm {
    fn default() -> Self {
        Self::new()
    }
}
