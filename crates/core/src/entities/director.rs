//! Director entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::EntityId;

/// A director record. Same shape as [`crate::entities::Actor`]; the two
/// are distinct types because they live in distinct collections and
/// slices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Director {
    pub id: Option<EntityId>,
    #[validate(length(min = 1, message = "Full name is a required field"))]
    pub full_name: String,
    pub nationality: String,
    #[serde(rename = "birthDate")]
    #[validate(custom(function = crate::validation::date_or_empty, message = "Invalid date"))]
    pub birth_date: String,
    #[serde(rename = "deathDate")]
    #[validate(custom(function = crate::validation::date_or_empty, message = "Invalid date"))]
    pub death_date: String,
    #[validate(custom(function = crate::validation::url_or_empty, message = "Invalid URL photo"))]
    pub photo: String,
    pub biography: String,
}

impl Director {
    /// The empty template: all fields blank, no identifier.
    pub fn empty() -> Self {
        Self {
            id: None,
            full_name: String::new(),
            nationality: String::new(),
            birth_date: String::new(),
            death_date: String::new(),
            photo: String::new(),
            biography: String::new(),
        }
    }
}
