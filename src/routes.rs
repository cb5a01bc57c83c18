//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST   /shorten`       - Create a short link
//! - `GET    /urls`          - List the 10 most recent links
//! - `DELETE /urls`          - Delete a link by id
//! - `GET    /health`        - Health check
//! - `GET    /{short_code}`  - Redirect (catch-all; static routes win)
//!
//! # Middleware
//!
//! - **Tracing** - per-request spans with response status and latency
//! - **Path normalization** - trailing slash handling

use crate::api::handlers::{
    delete_url_handler, health_handler, list_urls_handler, redirect_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(list_urls_handler).delete(delete_url_handler))
        .route("/health", get(health_handler))
        .route("/{short_code}", get(redirect_handler))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
