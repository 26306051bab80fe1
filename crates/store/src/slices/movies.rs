//! Movies slice. Same lifecycle as the actors slice, over `/movies`.

use std::sync::Arc;

use tokio::sync::RwLock;

use cinelog_client::CatalogApi;
use cinelog_core::entities::Movie;
use cinelog_core::types::EntityId;

use crate::error::SliceError;
use crate::status;

const RESOURCE: &str = "movies";

const CREATED: &str = "Movie created successfully!";
const UPDATED: &str = "Movie updated successfully!";
const DELETED: &str = "Movie deleted successfully!";

/// State owned by the movies slice.
#[derive(Debug, Clone)]
pub struct MoviesState {
    pub movies: Vec<Movie>,
    pub current_movie: Movie,
    pub status: Option<String>,
    pub error: Option<String>,
}

impl Default for MoviesState {
    fn default() -> Self {
        Self {
            movies: Vec::new(),
            current_movie: Movie::empty(),
            status: None,
            error: None,
        }
    }
}

impl MoviesState {
    pub fn select(&mut self, movie: Movie) {
        self.current_movie = movie;
    }

    pub fn add_new(&mut self) {
        self.current_movie = Movie::empty();
    }

    pub fn reset_status(&mut self) {
        self.status = None;
        self.error = None;
    }

    fn on_pending(&mut self) {
        status::set_pending(&mut self.status, &mut self.error);
    }

    fn on_all_fetched(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
        self.current_movie = Movie::empty();
        status::set_fulfilled(&mut self.status, &mut self.error, status::FULFILLED);
    }

    fn on_fetched(&mut self, movie: Movie) {
        self.current_movie = movie;
        status::set_fulfilled(&mut self.status, &mut self.error, status::FULFILLED);
    }

    fn on_created(&mut self, movie: Movie) {
        self.movies.push(movie);
        self.current_movie = Movie::empty();
        status::set_fulfilled(&mut self.status, &mut self.error, CREATED);
    }

    // The selection survives an update; see the actors slice.
    fn on_updated(&mut self, movie: Movie) {
        if let Some(slot) = self.movies.iter_mut().find(|m| m.id == movie.id) {
            *slot = movie;
        }
        status::set_fulfilled(&mut self.status, &mut self.error, UPDATED);
    }

    fn on_deleted(&mut self, id: EntityId) {
        self.movies.retain(|m| m.id != Some(id));
        self.current_movie = Movie::empty();
        status::set_fulfilled(&mut self.status, &mut self.error, DELETED);
    }

    fn on_rejected(&mut self, message: String) {
        status::set_rejected(&mut self.status, &mut self.error, message);
    }
}

/// Async operations over the movies collection.
pub struct MoviesSlice {
    api: Arc<CatalogApi>,
    state: RwLock<MoviesState>,
}

impl MoviesSlice {
    pub fn new(api: Arc<CatalogApi>) -> Self {
        Self {
            api,
            state: RwLock::new(MoviesState::default()),
        }
    }

    pub async fn state(&self) -> MoviesState {
        self.state.read().await.clone()
    }

    pub async fn select(&self, movie: Movie) {
        self.state.write().await.select(movie);
    }

    pub async fn add_new(&self) {
        self.state.write().await.add_new();
    }

    pub async fn reset_status(&self) {
        self.state.write().await.reset_status();
    }

    pub async fn fetch_all(&self) {
        self.state.write().await.on_pending();
        match self.request_all().await {
            Ok(movies) => {
                tracing::info!(count = movies.len(), "movies fetched");
                self.state.write().await.on_all_fetched(movies);
            }
            Err(e) => self.reject(e).await,
        }
    }

    async fn request_all(&self) -> Result<Vec<Movie>, SliceError> {
        let response = self.api.get(&format!("/{RESOURCE}")).await?;
        if response.status >= 400 {
            return Err(SliceError::backend(format!(
                "Error getting movies {}",
                response.status
            )));
        }
        Ok(serde_json::from_value(response.data)?)
    }

    pub async fn fetch_by_id(&self, id: EntityId) {
        self.state.write().await.on_pending();
        match self.request_by_id(id).await {
            Ok(movie) => self.state.write().await.on_fetched(movie),
            Err(e) => self.reject(e).await,
        }
    }

    async fn request_by_id(&self, id: EntityId) -> Result<Movie, SliceError> {
        let response = self.api.get(&format!("/{RESOURCE}?movieId={id}")).await?;
        if response.status >= 400 {
            return Err(SliceError::backend(format!(
                "Error getting movie {}",
                response.status
            )));
        }
        Ok(serde_json::from_value(response.data)?)
    }

    pub async fn create(&self, movie: Movie) {
        self.state.write().await.on_pending();
        match self.request_create(movie).await {
            Ok(created) => {
                tracing::info!(id = ?created.id, "movie created");
                self.state.write().await.on_created(created);
            }
            Err(e) => self.reject(e).await,
        }
    }

    async fn request_create(&self, movie: Movie) -> Result<Movie, SliceError> {
        let response = self.api.post(&format!("/{RESOURCE}"), &movie).await?;
        if response.status >= 400 {
            return Err(SliceError::backend(format!(
                "Error create movie {}",
                response.status
            )));
        }
        Ok(serde_json::from_value(response.data)?)
    }

    pub async fn update(&self, movie: Movie) {
        let Some(id) = movie.id else {
            self.state
                .write()
                .await
                .on_rejected("Error update movie: missing id".to_string());
            return;
        };
        self.state.write().await.on_pending();
        match self.request_update(id, movie).await {
            Ok(updated) => {
                tracing::info!(id, "movie updated");
                self.state.write().await.on_updated(updated);
            }
            Err(e) => self.reject(e).await,
        }
    }

    async fn request_update(&self, id: EntityId, movie: Movie) -> Result<Movie, SliceError> {
        let response = self.api.put(&format!("/{RESOURCE}/{id}"), &movie).await?;
        if response.status >= 400 {
            return Err(SliceError::backend(format!(
                "Error update movie {}",
                response.status
            )));
        }
        Ok(serde_json::from_value(response.data)?)
    }

    pub async fn delete(&self, id: EntityId) {
        self.state.write().await.on_pending();
        match self.request_delete(id).await {
            Ok(()) => {
                tracing::info!(id, "movie deleted");
                self.state.write().await.on_deleted(id);
            }
            Err(e) => self.reject(e).await,
        }
    }

    async fn request_delete(&self, id: EntityId) -> Result<(), SliceError> {
        let response = self.api.delete(&format!("/{RESOURCE}/{id}")).await?;
        if response.status >= 400 {
            return Err(SliceError::backend(format!(
                "Error delete movie {}",
                response.status
            )));
        }
        Ok(())
    }

    async fn reject(&self, error: SliceError) {
        let message = error.to_string();
        tracing::warn!(%message, "movies request failed");
        self.state.write().await.on_rejected(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_movie_lands_in_items_with_its_assigned_id() {
        // Draft goes out without an id; the backend's answer carries one.
        let mut state = MoviesState::default();

        let mut assigned = Movie::empty();
        assigned.id = Some(1);
        assigned.title = "Dune".to_string();
        state.on_created(assigned);

        assert_eq!(state.movies.len(), 1);
        assert_eq!(state.movies[0].id, Some(1));
        assert_eq!(state.movies[0].title, "Dune");
        assert_eq!(state.status.as_deref(), Some("Movie created successfully!"));
        assert_eq!(state.current_movie, Movie::empty());
    }

    #[test]
    fn list_fetch_is_a_wholesale_replacement() {
        let mut state = MoviesState::default();
        let mut stale = Movie::empty();
        stale.id = Some(9);
        stale.title = "Stale".to_string();
        state.movies = vec![stale];

        state.on_all_fetched(Vec::new());

        assert!(state.movies.is_empty());
        assert_eq!(state.status.as_deref(), Some(status::FULFILLED));
    }
}
