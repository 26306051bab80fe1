//! End-to-end form submission: controller -> slice -> HTTP -> state.
//!
//! Runs against a minimal in-process movies endpoint; only the routes
//! the movie form can reach are implemented.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::sync::Mutex;

use cinelog_app::forms::{MovieForm, Route};
use cinelog_client::CatalogApi;
use cinelog_core::entities::Movie;
use cinelog_store::CatalogStore;

type Movies = Arc<Mutex<Vec<Value>>>;

async fn spawn_movies_backend() -> String {
    let movies = Movies::default();

    async fn create(State(movies): State<Movies>, Json(mut body): Json<Value>) -> Json<Value> {
        let mut movies = movies.lock().await;
        body["id"] = json!(movies.len() as i64 + 1);
        movies.push(body.clone());
        Json(body)
    }

    async fn update(
        State(movies): State<Movies>,
        Path(id): Path<i64>,
        Json(mut body): Json<Value>,
    ) -> Json<Value> {
        let mut movies = movies.lock().await;
        body["id"] = json!(id);
        if let Some(slot) = movies.iter_mut().find(|m| m["id"] == json!(id)) {
            *slot = body.clone();
        }
        Json(body)
    }

    let app = Router::new()
        .route("/movies", axum::routing::post(create))
        .route("/movies/{id}", axum::routing::put(update))
        .with_state(movies);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("Mock backend has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock backend died");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn submitting_a_new_draft_creates_and_routes_to_the_list() {
    let store = CatalogStore::new(CatalogApi::new(spawn_movies_backend().await));

    let mut form = MovieForm::new();
    form.draft_mut().title = "Dune".to_string();
    form.draft_mut().directors[0] = "Denis Villeneuve".to_string();

    let route = form.submit(&store.movies).await.expect("valid draft");
    assert_eq!(route, Route::MovieList);

    let state = store.movies.state().await;
    assert_eq!(state.movies.len(), 1);
    assert_eq!(state.movies[0].id, Some(1));
    assert_eq!(state.status.as_deref(), Some("Movie created successfully!"));
    assert_eq!(state.current_movie, Movie::empty());
}

#[tokio::test]
async fn submitting_an_existing_draft_updates_and_routes_to_the_detail() {
    let store = CatalogStore::new(CatalogApi::new(spawn_movies_backend().await));

    let mut form = MovieForm::new();
    form.draft_mut().title = "Dune".to_string();
    form.submit(&store.movies).await.expect("valid draft");

    let created = store.movies.state().await.movies[0].clone();
    let id = created.id.expect("created movie has an id");

    let mut edit = MovieForm::edit(created);
    edit.draft_mut().storyline = "Spice must flow.".to_string();

    let route = edit.submit(&store.movies).await.expect("valid draft");
    assert_eq!(route, Route::MovieDetail(id));

    let state = store.movies.state().await;
    assert_eq!(state.movies.len(), 1);
    assert_eq!(state.movies[0].storyline, "Spice must flow.");
    assert_eq!(state.status.as_deref(), Some("Movie updated successfully!"));
}
