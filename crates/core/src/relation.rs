//! Weak relation resolver.
//!
//! Movies reference directors, actors, and studios by free-text name,
//! not by id. A candidate entity is considered related when any of the
//! movie's reference strings contains the candidate's display name as a
//! case-sensitive substring. This is deliberately not a relational join
//! and it has a known false positive: a candidate whose name is a
//! substring of another, unrelated name will also match (a director
//! named "Denis" matches a movie crediting "Denis Villeneuve"). Every
//! view resolves references through this module; none reimplements the
//! policy inline.

/// Entities addressable by a display name.
pub trait NamedEntity {
    fn display_name(&self) -> &str;
}

impl NamedEntity for crate::entities::Actor {
    fn display_name(&self) -> &str {
        &self.full_name
    }
}

impl NamedEntity for crate::entities::Director {
    fn display_name(&self) -> &str {
        &self.full_name
    }
}

impl NamedEntity for crate::entities::Studio {
    fn display_name(&self) -> &str {
        &self.title
    }
}

/// Resolve a reference list against a candidate list.
///
/// Candidates with empty names never match; an empty reference slot
/// matches nothing. Candidate order is preserved.
pub fn resolve<'a, T: NamedEntity>(references: &[String], candidates: &'a [T]) -> Vec<&'a T> {
    candidates
        .iter()
        .filter(|candidate| {
            let name = candidate.display_name();
            !name.is_empty() && references.iter().any(|reference| reference.contains(name))
        })
        .collect()
}
