//! Read-only projections of store state.
//!
//! Views never mutate anything and never talk to the network; they
//! derive display data from slice snapshots. The movie detail view is
//! the only one with real derivation logic -- it resolves the free-text
//! cross-references through the weak relation resolver.

pub mod movies;
pub mod notice;
pub mod roster;
