//! Movie detail projection.
//!
//! Related directors, actors, and studios are resolved from the movie's
//! free-text reference arrays through [`cinelog_core::relation`] -- a
//! weak substring match, not a join -- and formatted as comma-joined
//! name lists with a fallback when a group resolves empty.

use cinelog_core::entities::{Actor, Director, Movie, Studio};
use cinelog_core::relation;
use cinelog_core::types::EntityId;

const NO_DIRECTORS: &str = "No directors available";
const NO_ACTORS: &str = "No actors available";
const NO_STUDIOS: &str = "No studios available";

/// A resolved cross-reference: enough to render a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedRef {
    pub id: Option<EntityId>,
    pub name: String,
}

/// Fully derived detail view of one movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDetails {
    pub title: String,
    pub genre: String,
    pub release_year: String,
    pub storyline: String,
    pub directors: Vec<RelatedRef>,
    pub actors: Vec<RelatedRef>,
    pub studios: Vec<RelatedRef>,
}

/// Find a movie in the canonical list by id.
pub fn find_movie(movies: &[Movie], id: EntityId) -> Option<&Movie> {
    movies.iter().find(|m| m.id == Some(id))
}

/// Derive the detail projection for one movie against the three related
/// collections.
pub fn project_details(
    movie: &Movie,
    directors: &[Director],
    actors: &[Actor],
    studios: &[Studio],
) -> MovieDetails {
    MovieDetails {
        title: movie.title.clone(),
        genre: movie.genre.clone(),
        release_year: movie.release_year.clone(),
        storyline: movie.storyline.clone(),
        directors: relation::resolve(&movie.directors, directors)
            .into_iter()
            .map(|d| RelatedRef {
                id: d.id,
                name: d.full_name.clone(),
            })
            .collect(),
        actors: relation::resolve(&movie.actors, actors)
            .into_iter()
            .map(|a| RelatedRef {
                id: a.id,
                name: a.full_name.clone(),
            })
            .collect(),
        studios: relation::resolve(&movie.studios, studios)
            .into_iter()
            .map(|s| RelatedRef {
                id: s.id,
                name: s.title.clone(),
            })
            .collect(),
    }
}

fn joined_names(refs: &[RelatedRef], fallback: &str) -> String {
    if refs.is_empty() {
        return fallback.to_string();
    }
    refs.iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl MovieDetails {
    pub fn formatted_directors(&self) -> String {
        joined_names(&self.directors, NO_DIRECTORS)
    }

    pub fn formatted_actors(&self) -> String {
        joined_names(&self.actors, NO_ACTORS)
    }

    pub fn formatted_studios(&self) -> String {
        joined_names(&self.studios, NO_STUDIOS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn director(id: EntityId, full_name: &str) -> Director {
        let mut d = Director::empty();
        d.id = Some(id);
        d.full_name = full_name.to_string();
        d
    }

    fn movie_crediting(directors: &[&str]) -> Movie {
        let mut m = Movie::empty();
        m.id = Some(1);
        m.title = "Dune".to_string();
        m.directors = directors.iter().map(|s| s.to_string()).collect();
        m
    }

    #[test]
    fn substring_policy_produces_the_documented_false_positive() {
        let movie = movie_crediting(&["Denis Villeneuve"]);
        let directors = vec![director(2, "Denis Villeneuve"), director(3, "Denis")];

        let details = project_details(&movie, &directors, &[], &[]);

        assert_eq!(details.directors.len(), 2);
        assert_eq!(details.formatted_directors(), "Denis Villeneuve, Denis");
    }

    #[test]
    fn unresolved_groups_fall_back_to_the_placeholder() {
        let movie = movie_crediting(&["Denis Villeneuve"]);
        let details = project_details(&movie, &[], &[], &[]);

        assert_eq!(details.formatted_directors(), "No directors available");
        assert_eq!(details.formatted_actors(), "No actors available");
        assert_eq!(details.formatted_studios(), "No studios available");
    }

    #[test]
    fn find_movie_is_an_id_equality_lookup() {
        let movies = vec![movie_crediting(&[])];
        assert!(find_movie(&movies, 1).is_some());
        assert!(find_movie(&movies, 2).is_none());
    }
}
