use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinelog_app::views::{movies as movie_views, notice, roster};
use cinelog_client::ClientConfig;
use cinelog_store::CatalogStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "cinelog_app=info,cinelog_store=info,cinelog_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Loaded client configuration");

    // --- Store ---
    let store = CatalogStore::from_config(&config);
    store.load_catalog().await;

    report_failures(&store).await;
    render_catalog(&store).await;

    Ok(())
}

/// Surface any slice that failed its mount-time fetch.
async fn report_failures(store: &CatalogStore) {
    let snapshots = [
        ("actors", store.actors.state().await.error),
        ("directors", store.directors.state().await.error),
        ("movies", store.movies.state().await.error),
        ("studios", store.studios.state().await.error),
    ];
    for (resource, error) in snapshots {
        if let Some(banner) = notice::from_request_state(None, error.as_deref()) {
            tracing::warn!(resource, message = %banner.message, "catalog load failed");
        }
    }
}

/// Print the four collections and each movie's resolved detail view.
async fn render_catalog(store: &CatalogStore) {
    let actors = store.actors.state().await.actors;
    let directors = store.directors.state().await.directors;
    let movies = store.movies.state().await.movies;
    let studios = store.studios.state().await.studios;

    print_rows("Actors", &roster::actor_rows(&actors));
    print_rows("Directors", &roster::director_rows(&directors));
    print_rows("Movies", &roster::movie_rows(&movies));
    print_rows("Studios", &roster::studio_rows(&studios));

    for movie in &movies {
        let details = movie_views::project_details(movie, &directors, &actors, &studios);
        println!();
        println!("{} ({})", details.title, details.release_year);
        if !details.genre.is_empty() {
            println!("  Genre:     {}", details.genre);
        }
        println!("  Directors: {}", details.formatted_directors());
        println!("  Actors:    {}", details.formatted_actors());
        println!("  Studios:   {}", details.formatted_studios());
        if !details.storyline.is_empty() {
            println!("  {}", details.storyline);
        }
    }
}

fn print_rows(heading: &str, rows: &[roster::ListRow]) {
    println!("{heading} ({}):", rows.len());
    for row in rows {
        match row.id {
            Some(id) => println!("  [{id}] {}", row.label),
            None => println!("  [-] {}", row.label),
        }
    }
}
