//! Movie form controller.

use std::collections::BTreeMap;

use cinelog_core::entities::Movie;
use cinelog_core::validation;
use cinelog_store::slices::MoviesSlice;

use super::{FormError, Route};

/// Editable draft of one movie plus its validation surface.
#[derive(Debug, Clone)]
pub struct MovieForm {
    draft: Movie,
}

impl MovieForm {
    /// Start blank (the "add movie" flow).
    pub fn new() -> Self {
        Self {
            draft: Movie::empty(),
        }
    }

    /// Start from an existing movie (the "edit" flow).
    pub fn edit(movie: Movie) -> Self {
        Self { draft: movie }
    }

    pub fn draft(&self) -> &Movie {
        &self.draft
    }

    /// Mutable access for field-level edits. Callers re-read
    /// [`MovieForm::field_errors`] after every change.
    pub fn draft_mut(&mut self) -> &mut Movie {
        &mut self.draft
    }

    /// Field -> first failing message; empty when submittable.
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        validation::field_errors(&self.draft)
    }

    pub fn is_valid(&self) -> bool {
        self.field_errors().is_empty()
    }

    // ---- reference rows ----
    //
    // Each reference sequence keeps at least one (possibly empty) slot;
    // the invariant is enforced here at the remove operation, not in the
    // data model.

    pub fn push_director(&mut self) {
        self.draft.directors.push(String::new());
    }

    /// Remove the director row at `index`. The last remaining row never
    /// goes away; out-of-range indices are ignored.
    pub fn remove_director(&mut self, index: usize) {
        if self.draft.directors.len() > 1 && index < self.draft.directors.len() {
            self.draft.directors.remove(index);
        }
    }

    pub fn push_actor(&mut self) {
        self.draft.actors.push(String::new());
    }

    pub fn remove_actor(&mut self, index: usize) {
        if self.draft.actors.len() > 1 && index < self.draft.actors.len() {
            self.draft.actors.remove(index);
        }
    }

    pub fn push_studio(&mut self) {
        self.draft.studios.push(String::new());
    }

    pub fn remove_studio(&mut self, index: usize) {
        if self.draft.studios.len() > 1 && index < self.draft.studios.len() {
            self.draft.studios.remove(index);
        }
    }

    /// Dispatch the draft: update when it already carries an id, create
    /// otherwise. Blocked while any field is invalid.
    pub async fn submit(&self, movies: &MoviesSlice) -> Result<Route, FormError> {
        let errors = self.field_errors();
        if !errors.is_empty() {
            return Err(FormError::Invalid(errors));
        }
        match self.draft.id {
            Some(id) => {
                movies.update(self.draft.clone()).await;
                Ok(Route::MovieDetail(id))
            }
            None => {
                movies.create(self.draft.clone()).await;
                Ok(Route::MovieList)
            }
        }
    }
}

impl Default for MovieForm {
    fn default() -> Self {
        Self::new()
    }
}
