//! Process-wide store composing the four entity slices.

use std::sync::Arc;

use cinelog_client::{CatalogApi, ClientConfig};

use crate::slices::{ActorsSlice, DirectorsSlice, MoviesSlice, StudiosSlice};

/// The single source of truth every view reads from.
///
/// Built once at process start over one shared HTTP adapter; the
/// returned `Arc` is cheap to clone into whatever consumes it. All
/// mutation goes through the slices' operations -- there is no other
/// write path.
pub struct CatalogStore {
    pub actors: ActorsSlice,
    pub directors: DirectorsSlice,
    pub movies: MoviesSlice,
    pub studios: StudiosSlice,
}

impl CatalogStore {
    /// Compose a store over an existing API adapter.
    pub fn new(api: CatalogApi) -> Arc<Self> {
        let api = Arc::new(api);
        Arc::new(Self {
            actors: ActorsSlice::new(Arc::clone(&api)),
            directors: DirectorsSlice::new(Arc::clone(&api)),
            movies: MoviesSlice::new(Arc::clone(&api)),
            studios: StudiosSlice::new(api),
        })
    }

    /// Compose a store from loaded client configuration.
    pub fn from_config(config: &ClientConfig) -> Arc<Self> {
        Self::new(CatalogApi::from_config(config))
    }

    /// Fetch all four collections concurrently -- the mount-time load.
    ///
    /// Failures stay inside the affected slice's `error` field; one
    /// collection failing does not stop the others.
    pub async fn load_catalog(&self) {
        tokio::join!(
            self.actors.fetch_all(),
            self.directors.fetch_all(),
            self.movies.fetch_all(),
            self.studios.fetch_all(),
        );
    }
}
