//! In-process mock of the catalog REST API.
//!
//! In-memory collections with server-assigned ids, mirroring the real
//! backend's interface: `GET /{resource}` lists, `GET
//! /{resource}?{x}Id={id}` looks up one record, `POST` creates, `PUT
//! /{resource}/{id}` replaces, `DELETE /{resource}/{id}` answers with
//! no body. Unknown resources and missing ids answer 404.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::sync::Mutex;

const RESOURCES: [&str; 4] = ["actors", "directors", "movies", "studios"];

#[derive(Default)]
struct Db {
    collections: HashMap<String, Vec<Value>>,
    next_id: i64,
}

type SharedDb = Arc<Mutex<Db>>;

/// Bind the mock backend to an ephemeral port and serve it in the
/// background. Returns the base URL to point a `CatalogApi` at.
pub async fn spawn_backend() -> String {
    let db = SharedDb::new(Mutex::new(Db {
        collections: HashMap::new(),
        next_id: 1,
    }));

    let app = Router::new()
        .route("/{resource}", get(list_or_lookup).post(create))
        .route("/{resource}/{id}", put(update).delete(remove))
        .with_state(db);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("Mock backend has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock backend died");
    });

    format!("http://{addr}")
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))).into_response()
}

async fn list_or_lookup(
    State(db): State<SharedDb>,
    Path(resource): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !RESOURCES.contains(&resource.as_str()) {
        return not_found();
    }
    let db = db.lock().await;
    let items = db.collections.get(&resource).cloned().unwrap_or_default();

    // A `?{x}Id=` query parameter switches to single-record lookup.
    let lookup_id = params
        .iter()
        .find(|(key, _)| key.ends_with("Id"))
        .and_then(|(_, value)| value.parse::<i64>().ok());

    match lookup_id {
        Some(id) => match items.iter().find(|item| item["id"] == json!(id)) {
            Some(item) => Json(item.clone()).into_response(),
            None => not_found(),
        },
        None => Json(items).into_response(),
    }
}

async fn create(
    State(db): State<SharedDb>,
    Path(resource): Path<String>,
    Json(mut body): Json<Value>,
) -> Response {
    if !RESOURCES.contains(&resource.as_str()) {
        return not_found();
    }
    let mut db = db.lock().await;
    let id = db.next_id;
    db.next_id += 1;
    body["id"] = json!(id);
    db.collections
        .entry(resource)
        .or_default()
        .push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn update(
    State(db): State<SharedDb>,
    Path((resource, id)): Path<(String, i64)>,
    Json(mut body): Json<Value>,
) -> Response {
    let mut db = db.lock().await;
    let Some(items) = db.collections.get_mut(&resource) else {
        return not_found();
    };
    let Some(slot) = items.iter_mut().find(|item| item["id"] == json!(id)) else {
        return not_found();
    };
    body["id"] = json!(id);
    *slot = body.clone();
    Json(body).into_response()
}

async fn remove(State(db): State<SharedDb>, Path((resource, id)): Path<(String, i64)>) -> Response {
    let mut db = db.lock().await;
    let Some(items) = db.collections.get_mut(&resource) else {
        return not_found();
    };
    let before = items.len();
    items.retain(|item| item["id"] != json!(id));
    if items.len() == before {
        return not_found();
    }
    StatusCode::NO_CONTENT.into_response()
}
