//! Form validation rules -- pure logic, shared by every form controller.
//!
//! The rule set is declared on the entity types via `validator` derive
//! attributes; this module supplies the custom rule functions and the
//! flattening of [`validator::ValidationErrors`] into the field ->
//! message map the form layer consumes. A form field that is optional
//! but shaped (URLs, dates, years, genre) passes while empty and is only
//! checked once non-empty.

use std::collections::BTreeMap;

use validator::{Validate, ValidateUrl, ValidationError};

use crate::entities::GENRES;

/// Empty passes; anything else must be a well-formed URL.
pub fn url_or_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("url"))
    }
}

/// Empty passes; anything else must parse as a `YYYY-MM-DD` date.
pub fn date_or_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new("date"))
    }
}

/// Empty passes; anything else must be a 1-4 digit number.
pub fn year_or_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || (value.len() <= 4 && value.chars().all(|c| c.is_ascii_digit())) {
        Ok(())
    } else {
        Err(ValidationError::new("year"))
    }
}

/// Empty passes; anything else must come from the genre vocabulary.
pub fn known_genre(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || GENRES.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("genre"))
    }
}

/// Flatten a draft's validation outcome into field -> first failing
/// message. An empty map means the draft is submittable.
pub fn field_errors<T: Validate>(draft: &T) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    if let Err(errors) = draft.validate() {
        for (field, violations) in errors.field_errors() {
            if let Some(first) = violations.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is not valid"));
                out.insert(field.to_string(), message);
            }
        }
    }
    out
}
