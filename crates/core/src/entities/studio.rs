//! Studio entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::EntityId;

/// A studio record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Studio {
    pub id: Option<EntityId>,
    #[validate(length(min = 1, message = "Studio title is a required field"))]
    pub title: String,
    pub location: String,
    #[serde(rename = "foundationYear")]
    #[validate(custom(function = crate::validation::year_or_empty, message = "Invalid year"))]
    pub foundation_year: String,
    #[validate(custom(function = crate::validation::url_or_empty, message = "Invalid URL logo"))]
    pub logo: String,
    pub about: String,
}

impl Studio {
    /// The empty template: all fields blank, no identifier.
    pub fn empty() -> Self {
        Self {
            id: None,
            title: String::new(),
            location: String::new(),
            foundation_year: String::new(),
            logo: String::new(),
            about: String::new(),
        }
    }
}
