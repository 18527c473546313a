//! Integration tests for Peppercorn.
//!
//! The whole application is process memory, so these tests drive the real
//! router in-process with `tower::ServiceExt::oneshot` - no socket, no
//! external services. Each test builds its own store, which is exactly how
//! the production binary does it.
//!
//! # Test Categories
//!
//! - `products_api` - Listing, filtering, sorting, CRUD, favorites
//! - `reviews_api` - Review creation and the rating recomputation rule
//! - `cart_api` - Session carts, quantity merging, clears
//!
//! ```bash
//! cargo test -p peppercorn-integration-tests
//! ```

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use peppercorn_core::CatalogStore;
use peppercorn_server::config::ServerConfig;
use peppercorn_server::state::AppState;
use peppercorn_server::{app, seed};

/// Build the application router over the demonstration catalog.
#[must_use]
pub fn demo_app() -> Router {
    let store = CatalogStore::with_seed(seed::demo_catalog());
    app(AppState::new(test_config(), store))
}

/// Build the application router over an empty store.
#[must_use]
pub fn empty_app() -> Router {
    app(AppState::new(test_config(), CatalogStore::new()))
}

fn test_config() -> ServerConfig {
    ServerConfig {
        host: std::net::IpAddr::from([127, 0, 0, 1]),
        port: 0,
        seed_demo_data: false,
        sentry_dsn: None,
    }
}

/// Send one request to the router and return (status, parsed JSON body).
///
/// Empty bodies (e.g. 204 responses) come back as `Value::Null`.
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => Request::builder().method(method).uri(uri).body(Body::empty()),
    }
    .expect("request construction");

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// Shorthand for GET requests.
pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, "GET", uri, None).await
}
