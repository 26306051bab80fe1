//! Directors slice. Same lifecycle as the actors slice, over
//! `/directors`.

use std::sync::Arc;

use tokio::sync::RwLock;

use cinelog_client::CatalogApi;
use cinelog_core::entities::Director;
use cinelog_core::types::EntityId;

use crate::error::SliceError;
use crate::status;

const RESOURCE: &str = "directors";

const CREATED: &str = "Director created successfully!";
const UPDATED: &str = "Director updated successfully!";
const DELETED: &str = "Director deleted successfully!";

/// State owned by the directors slice.
#[derive(Debug, Clone)]
pub struct DirectorsState {
    pub directors: Vec<Director>,
    pub current_director: Director,
    pub status: Option<String>,
    pub error: Option<String>,
}

impl Default for DirectorsState {
    fn default() -> Self {
        Self {
            directors: Vec::new(),
            current_director: Director::empty(),
            status: None,
            error: None,
        }
    }
}

impl DirectorsState {
    pub fn select(&mut self, director: Director) {
        self.current_director = director;
    }

    pub fn add_new(&mut self) {
        self.current_director = Director::empty();
    }

    pub fn reset_status(&mut self) {
        self.status = None;
        self.error = None;
    }

    fn on_pending(&mut self) {
        status::set_pending(&mut self.status, &mut self.error);
    }

    fn on_all_fetched(&mut self, directors: Vec<Director>) {
        self.directors = directors;
        self.current_director = Director::empty();
        status::set_fulfilled(&mut self.status, &mut self.error, status::FULFILLED);
    }

    fn on_fetched(&mut self, director: Director) {
        self.current_director = director;
        status::set_fulfilled(&mut self.status, &mut self.error, status::FULFILLED);
    }

    fn on_created(&mut self, director: Director) {
        self.directors.push(director);
        self.current_director = Director::empty();
        status::set_fulfilled(&mut self.status, &mut self.error, CREATED);
    }

    // The selection survives an update; see the actors slice.
    fn on_updated(&mut self, director: Director) {
        if let Some(slot) = self.directors.iter_mut().find(|d| d.id == director.id) {
            *slot = director;
        }
        status::set_fulfilled(&mut self.status, &mut self.error, UPDATED);
    }

    fn on_deleted(&mut self, id: EntityId) {
        self.directors.retain(|d| d.id != Some(id));
        self.current_director = Director::empty();
        status::set_fulfilled(&mut self.status, &mut self.error, DELETED);
    }

    fn on_rejected(&mut self, message: String) {
        status::set_rejected(&mut self.status, &mut self.error, message);
    }
}

/// Async operations over the directors collection.
pub struct DirectorsSlice {
    api: Arc<CatalogApi>,
    state: RwLock<DirectorsState>,
}

impl DirectorsSlice {
    pub fn new(api: Arc<CatalogApi>) -> Self {
        Self {
            api,
            state: RwLock::new(DirectorsState::default()),
        }
    }

    pub async fn state(&self) -> DirectorsState {
        self.state.read().await.clone()
    }

    pub async fn select(&self, director: Director) {
        self.state.write().await.select(director);
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
            Ok(directors) => {
                tracing::info!(count = directors.len(), "directors fetched");
                self.state.write().await.on_all_fetched(directors);
            }
            Err(e) => self.reject(e).await,
        }
    }

    async fn request_all(&self) -> Result<Vec<Director>, SliceError> {
        let response = self.api.get(&format!("/{RESOURCE}")).await?;
        if response.status >= 400 {
            return Err(SliceError::backend(format!(
                "Error getting directors {}",
                response.status
            )));
        }
        Ok(serde_json::from_value(response.data)?)
    }

    pub async fn fetch_by_id(&self, id: EntityId) {
        self.state.write().await.on_pending();
        match self.request_by_id(id).await {
            Ok(director) => self.state.write().await.on_fetched(director),
            Err(e) => self.reject(e).await,
        }
    }

    async fn request_by_id(&self, id: EntityId) -> Result<Director, SliceError> {
        let response = self
            .api
            .get(&format!("/{RESOURCE}?directorId={id}"))
            .await?;
        if response.status >= 400 {
            return Err(SliceError::backend(format!(
                "Error getting director {}",
                response.status
            )));
        }
        Ok(serde_json::from_value(response.data)?)
    }

    pub async fn create(&self, director: Director) {
        self.state.write().await.on_pending();
        match self.request_create(director).await {
            Ok(created) => {
                tracing::info!(id = ?created.id, "director created");
                self.state.write().await.on_created(created);
            }
            Err(e) => self.reject(e).await,
        }
    }

    async fn request_create(&self, director: Director) -> Result<Director, SliceError> {
        let response = self.api.post(&format!("/{RESOURCE}"), &director).await?;
        if response.status >= 400 {
            return Err(SliceError::backend(format!(
                "Error create director {}",
                response.status
            )));
        }
        Ok(serde_json::from_value(response.data)?)
    }

    pub async fn update(&self, director: Director) {
        let Some(id) = director.id else {
            self.state
                .write()
                .await
                .on_rejected("Error update director: missing id".to_string());
            return;
        };
        self.state.write().await.on_pending();
        match self.request_update(id, director).await {
            Ok(updated) => {
                tracing::info!(id, "director updated");
                self.state.write().await.on_updated(updated);
            }
            Err(e) => self.reject(e).await,
        }
    }

    async fn request_update(&self, id: EntityId, director: Director) -> Result<Director, SliceError> {
        let response = self
            .api
            .put(&format!("/{RESOURCE}/{id}"), &director)
            .await?;
        if response.status >= 400 {
            return Err(SliceError::backend(format!(
                "Error update director {}",
                response.status
            )));
        }
        Ok(serde_json::from_value(response.data)?)
    }

    pub async fn delete(&self, id: EntityId) {
        self.state.write().await.on_pending();
        match self.request_delete(id).await {
            Ok(()) => {
                tracing::info!(id, "director deleted");
                self.state.write().await.on_deleted(id);
            }
            Err(e) => self.reject(e).await,
        }
    }

    async fn request_delete(&self, id: EntityId) -> Result<(), SliceError> {
        let response = self.api.delete(&format!("/{RESOURCE}/{id}")).await?;
        if response.status >= 400 {
            return Err(SliceError::backend(format!(
                "Error delete director {}",
                response.status
            )));
        }
        Ok(())
    }

    async fn reject(&self, error: SliceError) {
        let message = error.to_string();
        tracing::warn!(%message, "directors request failed");
        self.state.write().await.on_rejected(message);
    }
}
