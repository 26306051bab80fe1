//! HTTP layer for the catalog REST backend.
//!
//! [`CatalogApi`] is the only component that talks to the network; the
//! store's slices decide what a given response status means.

pub mod api;
pub mod config;

pub use api::{ApiError, ApiResponse, CatalogApi};
pub use config::ClientConfig;
