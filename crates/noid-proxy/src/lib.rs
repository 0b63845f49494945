//! noid-proxy: HTTP relay between the chat widget and Gemini.
//!
//! Accepts the widget's `{ "contents": [...] }` transcript on
//! `POST /generate`, validates inline image data, forwards the
//! conversation upstream and answers `{ "text": ... }`. The API key never
//! leaves this process.

pub mod error;
pub mod protocol;
pub mod routes;


use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ProxyError;
pub use routes::AppState;

/// Build the proxy router with permissive CORS and request tracing.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route("/generate", post(routes::generate))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
