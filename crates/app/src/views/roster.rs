//! List-view rows: the `(id, label)` projection of each collection.

use cinelog_core::entities::{Actor, Director, Movie, Studio};
use cinelog_core::types::EntityId;

/// One row of a list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: Option<EntityId>,
    pub label: String,
}

pub fn actor_rows(actors: &[Actor]) -> Vec<ListRow> {
    actors
        .iter()
        .map(|a| ListRow {
            id: a.id,
            label: a.full_name.clone(),
        })
        .collect()
}

pub fn director_rows(directors: &[Director]) -> Vec<ListRow> {
    directors
        .iter()
        .map(|d| ListRow {
            id: d.id,
            label: d.full_name.clone(),
        })
        .collect()
}

pub fn movie_rows(movies: &[Movie]) -> Vec<ListRow> {
    movies
        .iter()
        .map(|m| ListRow {
            id: m.id,
            label: m.title.clone(),
        })
        .collect()
}

pub fn studio_rows(studios: &[Studio]) -> Vec<ListRow> {
    studios
        .iter()
        .map(|s| ListRow {
            id: s.id,
            label: s.title.clone(),
        })
        .collect()
}
