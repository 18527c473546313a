//! Peppercorn Server library.
//!
//! This crate provides the JSON REST boundary over the in-memory
//! [`peppercorn_core::CatalogStore`] as a library, allowing the router to be
//! assembled in tests without binding a socket.
//!
//! # Architecture
//!
//! - Axum web framework serving JSON under `/api`
//! - One shared [`state::AppState`] carrying config and the store
//! - Schema-shape validation happens in the extractors (serde); the store
//!   only ever sees well-formed payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod seed;
pub mod state;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. There are no dependencies to
/// check; the store lives in this process.
async fn health() -> &'static str {
    "ok"
}

/// Assemble the application router.
///
/// The browser client is served from another origin in development, so the
/// API carries a permissive CORS layer.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", routes::api())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
