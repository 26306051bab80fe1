//! Actors slice: the canonical actor list, the current selection, and
//! the request lifecycle around `/actors`.

use std::sync::Arc;

use tokio::sync::RwLock;

use cinelog_client::CatalogApi;
use cinelog_core::entities::Actor;
use cinelog_core::types::EntityId;

use crate::error::SliceError;
use crate::status;

const RESOURCE: &str = "actors";

/// Success messages surfaced to the notification layer.
const CREATED: &str = "Actor created successfully!";
const UPDATED: &str = "Actor updated successfully!";
const DELETED: &str = "Actor deleted successfully!";

/// State owned by the actors slice.
#[derive(Debug, Clone)]
pub struct ActorsState {
    /// Canonical list as last seen from the backend.
    pub actors: Vec<Actor>,
    /// The actor being viewed or edited; the empty template when none is.
    pub current_actor: Actor,
    /// Overloaded request status; see [`crate::status`].
    pub status: Option<String>,
    /// Message of the last failed operation, verbatim.
    pub error: Option<String>,
}

impl Default for ActorsState {
    fn default() -> Self {
        Self {
            actors: Vec::new(),
            current_actor: Actor::empty(),
            status: None,
            error: None,
        }
    }
}

impl ActorsState {
    // ---- synchronous selection ----

    pub fn select(&mut self, actor: Actor) {
        self.current_actor = actor;
    }

    pub fn add_new(&mut self) {
        self.current_actor = Actor::empty();
    }

    /// Clear the status/error pair (notification dismissal).
    pub fn reset_status(&mut self) {
        self.status = None;
        self.error = None;
    }

    // ---- request lifecycle transitions ----

    fn on_pending(&mut self) {
        status::set_pending(&mut self.status, &mut self.error);
    }

    fn on_all_fetched(&mut self, actors: Vec<Actor>) {
        self.actors = actors;
        self.current_actor = Actor::empty();
        status::set_fulfilled(&mut self.status, &mut self.error, status::FULFILLED);
    }

    fn on_fetched(&mut self, actor: Actor) {
        self.current_actor = actor;
        status::set_fulfilled(&mut self.status, &mut self.error, status::FULFILLED);
    }

    fn on_created(&mut self, actor: Actor) {
        self.actors.push(actor);
        self.current_actor = Actor::empty();
        status::set_fulfilled(&mut self.status, &mut self.error, CREATED);
    }

    /// `current_actor` is deliberately left untouched here: only list
    /// fetches, creates, and deletes reset the selection.
    fn on_updated(&mut self, actor: Actor) {
        if let Some(slot) = self.actors.iter_mut().find(|a| a.id == actor.id) {
            *slot = actor;
        }
        status::set_fulfilled(&mut self.status, &mut self.error, UPDATED);
    }

    fn on_deleted(&mut self, id: EntityId) {
        self.actors.retain(|a| a.id != Some(id));
        self.current_actor = Actor::empty();
        status::set_fulfilled(&mut self.status, &mut self.error, DELETED);
    }

    fn on_rejected(&mut self, message: String) {
        status::set_rejected(&mut self.status, &mut self.error, message);
    }
}

/// Async operations over the actors collection.
///
/// The lock is held only inside the pending and terminal steps, never
/// across the request itself.
pub struct ActorsSlice {
    api: Arc<CatalogApi>,
    state: RwLock<ActorsState>,
}

impl ActorsSlice {
    pub fn new(api: Arc<CatalogApi>) -> Self {
        Self {
            api,
            state: RwLock::new(ActorsState::default()),
        }
    }

    /// Snapshot of the current slice state.
    pub async fn state(&self) -> ActorsState {
        self.state.read().await.clone()
    }

    pub async fn select(&self, actor: Actor) {
        self.state.write().await.select(actor);
    }

    pub async fn add_new(&self) {
        self.state.write().await.add_new();
    }

    pub async fn reset_status(&self) {
        self.state.write().await.reset_status();
    }

    /// `GET /actors` -- replace the canonical list wholesale.
    pub async fn fetch_all(&self) {
        self.state.write().await.on_pending();
        match self.request_all().await {
            Ok(actors) => {
                tracing::info!(count = actors.len(), "actors fetched");
                self.state.write().await.on_all_fetched(actors);
            }
            Err(e) => self.reject(e).await,
        }
    }

    async fn request_all(&self) -> Result<Vec<Actor>, SliceError> {
        let response = self.api.get(&format!("/{RESOURCE}")).await?;
        if response.status >= 400 {
            return Err(SliceError::backend(format!(
                "Error getting actors {}",
                response.status
            )));
        }
        Ok(serde_json::from_value(response.data)?)
    }

    /// `GET /actors?actorId={id}` -- set the current selection; the
    /// canonical list is untouched.
    pub async fn fetch_by_id(&self, id: EntityId) {
        self.state.write().await.on_pending();
        match self.request_by_id(id).await {
            Ok(actor) => self.state.write().await.on_fetched(actor),
            Err(e) => self.reject(e).await,
        }
    }

    async fn request_by_id(&self, id: EntityId) -> Result<Actor, SliceError> {
        let response = self.api.get(&format!("/{RESOURCE}?actorId={id}")).await?;
        if response.status >= 400 {
            return Err(SliceError::backend(format!(
                "Error getting actor {}",
                response.status
            )));
        }
        Ok(serde_json::from_value(response.data)?)
    }

    /// `POST /actors` with a draft (no id) -- append the server-assigned
    /// entity to the list.
    pub async fn create(&self, actor: Actor) {
        self.state.write().await.on_pending();
        match self.request_create(actor).await {
            Ok(created) => {
                tracing::info!(id = ?created.id, "actor created");
                self.state.write().await.on_created(created);
            }
            Err(e) => self.reject(e).await,
        }
    }

    async fn request_create(&self, actor: Actor) -> Result<Actor, SliceError> {
        let response = self.api.post(&format!("/{RESOURCE}"), &actor).await?;
        if response.status >= 400 {
            return Err(SliceError::backend(format!(
                "Error create actor {}",
                response.status
            )));
        }
        Ok(serde_json::from_value(response.data)?)
    }

    /// `PUT /actors/{id}` with the full body -- replace the matching
    /// list element by id.
    pub async fn update(&self, actor: Actor) {
        let Some(id) = actor.id else {
            self.state
                .write()
                .await
                .on_rejected("Error update actor: missing id".to_string());
            return;
        };
        self.state.write().await.on_pending();
        match self.request_update(id, actor).await {
            Ok(updated) => {
                tracing::info!(id, "actor updated");
                self.state.write().await.on_updated(updated);
            }
            Err(e) => self.reject(e).await,
        }
    }

    async fn request_update(&self, id: EntityId, actor: Actor) -> Result<Actor, SliceError> {
        let response = self.api.put(&format!("/{RESOURCE}/{id}"), &actor).await?;
        if response.status >= 400 {
            return Err(SliceError::backend(format!(
                "Error update actor {}",
                response.status
            )));
        }
        Ok(serde_json::from_value(response.data)?)
    }

    /// `DELETE /actors/{id}` -- the id itself is the success payload.
    pub async fn delete(&self, id: EntityId) {
        self.state.write().await.on_pending();
        match self.request_delete(id).await {
            Ok(()) => {
                tracing::info!(id, "actor deleted");
                self.state.write().await.on_deleted(id);
            }
            Err(e) => self.reject(e).await,
        }
    }

    async fn request_delete(&self, id: EntityId) -> Result<(), SliceError> {
        let response = self.api.delete(&format!("/{RESOURCE}/{id}")).await?;
        if response.status >= 400 {
            return Err(SliceError::backend(format!(
                "Error delete actor {}",
                response.status
            )));
        }
        Ok(())
    }

    async fn reject(&self, error: SliceError) {
        let message = error.to_string();
        tracing::warn!(%message, "actors request failed");
        self.state.write().await.on_rejected(message);
    }
}
