use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use character_wiki::catalog::handlers::{
    handle_create_character, handle_create_series, handle_create_user, handle_get_character,
    handle_get_series, handle_get_user, handle_list_categories, handle_list_characters,
    handle_list_series,
};
use character_wiki::catalog::seed::seed_categories;
use character_wiki::search::handlers::handle_search;
use character_wiki::store::memory::EntityStore;
use std::net::SocketAddr;
use std::sync::Arc;

const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = DEFAULT_BIND.parse()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Entity store:
    let store = Arc::new(EntityStore::new());

    // 2. Category seeding:
    seed_categories(&store).await;
    tracing::info!("Seeded {} categories", store.categories.len().await);

    // 3. HTTP Router:
    let app = Router::new()
        .route("/api/search", get(handle_search))
        .route(
            "/api/series",
            get(handle_list_series).post(handle_create_series),
        )
        .route("/api/series/:id", get(handle_get_series))
        .route(
            "/api/characters",
            get(handle_list_characters).post(handle_create_character),
        )
        .route("/api/characters/:id", get(handle_get_character))
        .route("/api/categories", get(handle_list_categories))
        .route("/api/users", post(handle_create_user))
        .route("/api/users/:id", get(handle_get_user))
        .layer(Extension(store));

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
