//! Studios slice. Same lifecycle as the actors slice, over `/studios`.

use std::sync::Arc;

use tokio::sync::RwLock;

use cinelog_client::CatalogApi;
use cinelog_core::entities::Studio;
use cinelog_core::types::EntityId;

use crate::error::SliceError;
use crate::status;

const RESOURCE: &str = "studios";

const CREATED: &str = "Studio created successfully!";
const UPDATED: &str = "Studio updated successfully!";
const DELETED: &str = "Studio deleted successfully!";

/// State owned by the studios slice.
#[derive(Debug, Clone)]
pub struct StudiosState {
    pub studios: Vec<Studio>,
    pub current_studio: Studio,
    pub status: Option<String>,
    pub error: Option<String>,
}

impl Default for StudiosState {
    fn default() -> Self {
        Self {
            studios: Vec::new(),
            current_studio: Studio::empty(),
            status: None,
            error: None,
        }
    }
}

impl StudiosState {
    pub fn select(&mut self, studio: Studio) {
        self.current_studio = studio;
    }

    pub fn add_new(&mut self) {
        self.current_studio = Studio::empty();
    }

    pub fn reset_status(&mut self) {
        self.status = None;
        self.error = None;
    }

    fn on_pending(&mut self) {
        status::set_pending(&mut self.status, &mut self.error);
    }

    fn on_all_fetched(&mut self, studios: Vec<Studio>) {
        self.studios = studios;
        self.current_studio = Studio::empty();
        status::set_fulfilled(&mut self.status, &mut self.error, status::FULFILLED);
    }

    fn on_fetched(&mut self, studio: Studio) {
        self.current_studio = studio;
        status::set_fulfilled(&mut self.status, &mut self.error, status::FULFILLED);
    }

    fn on_created(&mut self, studio: Studio) {
        self.studios.push(studio);
        self.current_studio = Studio::empty();
        status::set_fulfilled(&mut self.status, &mut self.error, CREATED);
    }

    // The selection survives an update; see the actors slice.
    fn on_updated(&mut self, studio: Studio) {
        if let Some(slot) = self.studios.iter_mut().find(|s| s.id == studio.id) {
            *slot = studio;
        }
        status::set_fulfilled(&mut self.status, &mut self.error, UPDATED);
    }

    fn on_deleted(&mut self, id: EntityId) {
        self.studios.retain(|s| s.id != Some(id));
        self.current_studio = Studio::empty();
        status::set_fulfilled(&mut self.status, &mut self.error, DELETED);
    }

    fn on_rejected(&mut self, message: String) {
        status::set_rejected(&mut self.status, &mut self.error, message);
    }
}

/// Async operations over the studios collection.
pub struct StudiosSlice {
    api: Arc<CatalogApi>,
    state: RwLock<StudiosState>,
}

impl StudiosSlice {
    pub fn new(api: Arc<CatalogApi>) -> Self {
        Self {
            api,
            state: RwLock::new(StudiosState::default()),
        }
    }

    pub async fn state(&self) -> StudiosState {
        self.state.read().await.clone()
    }

    pub async fn select(&self, studio: Studio) {
        self.state.write().await.select(studio);
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
            Ok(studios) => {
                tracing::info!(count = studios.len(), "studios fetched");
                self.state.write().await.on_all_fetched(studios);
            }
            Err(e) => self.reject(e).await,
        }
    }

    async fn request_all(&self) -> Result<Vec<Studio>, SliceError> {
        let response = self.api.get(&format!("/{RESOURCE}")).await?;
        if response.status >= 400 {
            return Err(SliceError::backend(format!(
                "Error getting studios {}",
                response.status
            )));
        }
        Ok(serde_json::from_value(response.data)?)
    }

    pub async fn fetch_by_id(&self, id: EntityId) {
        self.state.write().await.on_pending();
        match self.request_by_id(id).await {
            Ok(studio) => self.state.write().await.on_fetched(studio),
            Err(e) => self.reject(e).await,
        }
    }

    async fn request_by_id(&self, id: EntityId) -> Result<Studio, SliceError> {
        let response = self.api.get(&format!("/{RESOURCE}?studioId={id}")).await?;
        if response.status >= 400 {
            return Err(SliceError::backend(format!(
                "Error getting studio {}",
                response.status
            )));
        }
        Ok(serde_json::from_value(response.data)?)
    }

    pub async fn create(&self, studio: Studio) {
        self.state.write().await.on_pending();
        match self.request_create(studio).await {
            Ok(created) => {
                tracing::info!(id = ?created.id, "studio created");
                self.state.write().await.on_created(created);
            }
            Err(e) => self.reject(e).await,
        }
    }

    async fn request_create(&self, studio: Studio) -> Result<Studio, SliceError> {
        let response = self.api.post(&format!("/{RESOURCE}"), &studio).await?;
        if response.status >= 400 {
            return Err(SliceError::backend(format!(
                "Error create studio {}",
                response.status
            )));
        }
        Ok(serde_json::from_value(response.data)?)
    }

    pub async fn update(&self, studio: Studio) {
        let Some(id) = studio.id else {
            self.state
                .write()
                .await
                .on_rejected("Error update studio: missing id".to_string());
            return;
        };
        self.state.write().await.on_pending();
        match self.request_update(id, studio).await {
            Ok(updated) => {
                tracing::info!(id, "studio updated");
                self.state.write().await.on_updated(updated);
            }
            Err(e) => self.reject(e).await,
        }
    }

    async fn request_update(&self, id: EntityId, studio: Studio) -> Result<Studio, SliceError> {
        let response = self.api.put(&format!("/{RESOURCE}/{id}"), &studio).await?;
        if response.status >= 400 {
            return Err(SliceError::backend(format!(
                "Error update studio {}",
                response.status
            )));
        }
        Ok(serde_json::from_value(response.data)?)
    }

    pub async fn delete(&self, id: EntityId) {
        self.state.write().await.on_pending();
        match self.request_delete(id).await {
            Ok(()) => {
                tracing::info!(id, "studio deleted");
                self.state.write().await.on_deleted(id);
            }
            Err(e) => self.reject(e).await,
        }
    }

    async fn request_delete(&self, id: EntityId) -> Result<(), SliceError> {
        let response = self.api.delete(&format!("/{RESOURCE}/{id}")).await?;
        if response.status >= 400 {
            return Err(SliceError::backend(format!(
                "Error delete studio {}",
                response.status
            )));
        }
        Ok(())
    }

    async fn reject(&self, error: SliceError) {
        let message = error.to_string();
        tracing::warn!(%message, "studios request failed");
        self.state.write().await.on_rejected(message);
    }
}
