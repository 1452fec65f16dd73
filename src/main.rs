use std::sync::Arc;
use std::time::Duration;

use estante::aggregator::Aggregator;
use estante::api;
use estante::config::CONFIG;
use estante::openlibrary::OpenLibraryClient;
use estante::wikipedia::WikipediaClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    let wikipedia = WikipediaClient::new(http.clone(), CONFIG.wikipedia_api_url.clone());
    let openlibrary = OpenLibraryClient::new(
        http,
        CONFIG.openlibrary_url.clone(),
        CONFIG.covers_url.clone(),
    );
    let aggregator = Arc::new(Aggregator::new(
        wikipedia,
        openlibrary,
        CONFIG.placeholder_image.clone(),
        CONFIG.cache_capacity,
    ));

    let app = api::create_router(aggregator, &CONFIG.static_dir);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", CONFIG.port)).await?;
    log::info!("listening on port {}", CONFIG.port);
    axum::serve(listener, app).await?;

    Ok(())
}
