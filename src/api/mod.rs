use axum::{Router, routing::post};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::aggregator::Aggregator;

pub mod handlers;
pub mod models;

pub fn create_router(aggregator: Arc<Aggregator>, static_dir: &str) -> Router {
    // CORS configuration: the front end is served from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API routes
        .route("/autor", post(handlers::autor_handler))
        .route("/obra", post(handlers::obra_handler))
        .with_state(aggregator)
        // Static file serving for the UI
        .nest_service("/", ServeDir::new(static_dir))
        .layer(cors)
}
