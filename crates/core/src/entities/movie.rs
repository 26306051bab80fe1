//! Movie entity and the genre vocabulary.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::EntityId;

/// Genres offered by the movie form's genre selection.
///
/// The form can only produce values from this list (or leave the field
/// blank), so the same vocabulary backs the `known_genre` rule.
pub const GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "Animation",
    "Biography",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Family",
    "Fantasy",
    "History",
    "Horror",
    "Music",
    "Musical",
    "Mystery",
    "Romance",
    "Sci-Fi",
    "Sport",
    "Thriller",
    "War",
    "Western",
];

/// A movie record.
///
/// `directors`, `actors`, and `studios` are ordered sequences of
/// free-text names, not foreign keys. Cross-references are resolved at
/// render time by [`crate::relation`]. Each sequence always keeps at
/// least one (possibly empty) slot; the form layer enforces that on
/// removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Movie {
    pub id: Option<EntityId>,
    #[validate(length(min = 1, message = "Movie title is a required field"))]
    pub title: String,
    #[validate(custom(function = crate::validation::known_genre, message = "Unknown genre"))]
    pub genre: String,
    #[serde(rename = "releaseYear")]
    #[validate(custom(function = crate::validation::year_or_empty, message = "Invalid year"))]
    pub release_year: String,
    #[validate(custom(function = crate::validation::url_or_empty, message = "Invalid URL poster"))]
    pub poster: String,
    #[validate(custom(function = crate::validation::url_or_empty, message = "Invalid Youtube URL trailer"))]
    pub trailer: String,
    pub directors: Vec<String>,
    pub actors: Vec<String>,
    pub studios: Vec<String>,
    pub storyline: String,
}

impl Movie {
    /// The empty template. Reference sequences start with one empty slot.
    pub fn empty() -> Self {
        Self {
            id: None,
            title: String::new(),
            genre: String::new(),
            release_year: String::new(),
            poster: String::new(),
            trailer: String::new(),
            directors: vec![String::new()],
            actors: vec![String::new()],
            studios: vec![String::new()],
            storyline: String::new(),
        }
    }
}
