//! Integration tests for the slice request lifecycle, run against an
//! in-process mock of the catalog backend.

mod common;

use std::sync::Arc;

use cinelog_client::CatalogApi;
use cinelog_core::entities::{Actor, Movie};
use cinelog_store::status;
use cinelog_store::CatalogStore;

async fn connect() -> Arc<CatalogStore> {
    let base_url = common::spawn_backend().await;
    CatalogStore::new(CatalogApi::new(base_url))
}

fn actor_draft(full_name: &str) -> Actor {
    let mut draft = Actor::empty();
    draft.full_name = full_name.to_string();
    draft
}

// ---------------------------------------------------------------------------
// Create / list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_then_list_includes_exactly_the_created_actor() {
    let store = connect().await;

    store.actors.create(actor_draft("Harrison Ford")).await;
    store.actors.fetch_all().await;

    let state = store.actors.state().await;
    assert_eq!(state.actors.len(), 1);
    assert_eq!(state.actors[0].full_name, "Harrison Ford");
    assert!(
        state.actors[0].id.is_some(),
        "the backend must have assigned an id"
    );
    assert_eq!(state.status.as_deref(), Some(status::FULFILLED));
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn creating_dune_appends_it_with_the_assigned_id() {
    let store = connect().await;

    let mut draft = Movie::empty();
    draft.title = "Dune".to_string();
    store.movies.create(draft).await;

    let state = store.movies.state().await;
    assert_eq!(state.movies.len(), 1);
    assert_eq!(state.movies[0].id, Some(1));
    assert_eq!(state.movies[0].title, "Dune");
    assert_eq!(state.status.as_deref(), Some("Movie created successfully!"));
    assert_eq!(state.current_movie, Movie::empty());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_keeps_length_and_replaces_only_the_matching_element() {
    let store = connect().await;
    store.actors.create(actor_draft("Harrison Ford")).await;
    store.actors.create(actor_draft("Carrie Fisher")).await;

    let state = store.actors.state().await;
    assert_eq!(state.actors.len(), 2);
    let mut edited = state.actors[0].clone();
    edited.nationality = "American".to_string();
    let edited_id = edited.id;

    store.actors.update(edited).await;

    let state = store.actors.state().await;
    assert_eq!(state.actors.len(), 2);
    for entry in &state.actors {
        if entry.id == edited_id {
            assert_eq!(entry.nationality, "American");
        } else {
            assert_eq!(entry.nationality, "");
        }
    }
    assert_eq!(state.status.as_deref(), Some("Actor updated successfully!"));
}

#[tokio::test]
async fn update_leaves_the_current_selection_untouched() {
    let store = connect().await;
    store.actors.create(actor_draft("Harrison Ford")).await;
    store.actors.create(actor_draft("Carrie Fisher")).await;

    let state = store.actors.state().await;
    let selected = state.actors[1].clone();
    store.actors.select(selected.clone()).await;

    let mut edited = state.actors[0].clone();
    edited.biography = "Han Solo.".to_string();
    store.actors.update(edited).await;

    // Create/list/delete reset the selection; update must not.
    let state = store.actors.state().await;
    assert_eq!(state.current_actor, selected);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_exactly_one_and_the_id_is_gone() {
    let store = connect().await;
    store.actors.create(actor_draft("Harrison Ford")).await;
    store.actors.create(actor_draft("Carrie Fisher")).await;

    let state = store.actors.state().await;
    let doomed = state.actors[0].id.expect("created actor has an id");

    store.actors.delete(doomed).await;

    let state = store.actors.state().await;
    assert_eq!(state.actors.len(), 1);
    assert!(state.actors.iter().all(|a| a.id != Some(doomed)));
    assert_eq!(state.status.as_deref(), Some("Actor deleted successfully!"));
    assert_eq!(state.current_actor, Actor::empty());
}

// ---------------------------------------------------------------------------
// Selection resets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_fetch_resets_current_regardless_of_prior_value() {
    let store = connect().await;
    store.actors.create(actor_draft("Harrison Ford")).await;

    let created = store.actors.state().await.actors[0].clone();
    store.actors.select(created).await;
    assert_ne!(store.actors.state().await.current_actor, Actor::empty());

    store.actors.fetch_all().await;

    assert_eq!(store.actors.state().await.current_actor, Actor::empty());
}

#[tokio::test]
async fn fetch_by_id_sets_current_and_leaves_items_alone() {
    let store = connect().await;
    store.actors.create(actor_draft("Harrison Ford")).await;
    store.actors.create(actor_draft("Carrie Fisher")).await;

    let state = store.actors.state().await;
    let wanted = state.actors[1].id.expect("created actor has an id");

    store.actors.fetch_by_id(wanted).await;

    let state = store.actors.state().await;
    assert_eq!(state.current_actor.id, Some(wanted));
    assert_eq!(state.current_actor.full_name, "Carrie Fisher");
    assert_eq!(state.actors.len(), 2);
    assert_eq!(state.status.as_deref(), Some(status::FULFILLED));
}

// ---------------------------------------------------------------------------
// The store as a whole
// ---------------------------------------------------------------------------

#[tokio::test]
async fn load_catalog_fills_all_four_slices() {
    let store = connect().await;
    store.actors.create(actor_draft("Harrison Ford")).await;

    store.load_catalog().await;

    assert_eq!(store.actors.state().await.actors.len(), 1);
    assert!(store.directors.state().await.directors.is_empty());
    assert!(store.movies.state().await.movies.is_empty());
    assert!(store.studios.state().await.studios.is_empty());
    let statuses = [
        store.actors.state().await.status,
        store.directors.state().await.status,
        store.movies.state().await.status,
        store.studios.state().await.status,
    ];
    for slice_status in statuses {
        assert_eq!(slice_status.as_deref(), Some(status::FULFILLED));
    }
}
