//! HTTP route handlers for the catalog API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                        - Health check
//!
//! # Products
//! GET    /api/products                - Product listing (query: category,
//!                                       search, sortBy, minPrice, maxPrice)
//! POST   /api/products                - Create product
//! GET    /api/products/{id}           - Product detail
//! PATCH  /api/products/{id}           - Partial update
//! DELETE /api/products/{id}           - Delete product
//! POST   /api/products/{id}/favorite  - Toggle favorite flag
//!
//! # Reviews
//! GET  /api/products/{id}/reviews     - Reviews for a product
//! POST /api/products/{id}/reviews     - Create review (recomputes rating)
//!
//! # Categories
//! GET  /api/categories                - Active categories
//! POST /api/categories                - Create category
//!
//! # Cart (session id is a client-generated opaque token)
//! GET    /api/cart?sessionId=…        - Session cart, joined with products
//! POST   /api/cart                    - Add to cart (merges quantities)
//! PATCH  /api/cart/{id}               - Replace row quantity
//! DELETE /api/cart/{id}               - Remove one row
//! DELETE /api/cart?sessionId=…        - Clear session cart
//! ```

pub mod cart;
pub mod categories;
pub mod products;
pub mod reviews;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Create the product routes router (reviews nest under a product).
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .patch(products::update)
                .delete(products::remove),
        )
        .route("/{id}/favorite", post(products::toggle_favorite))
        .route(
            "/{id}/reviews",
            get(reviews::index).post(reviews::create),
        )
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new().route("/", get(categories::index).post(categories::create))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::index).post(cart::add).delete(cart::clear))
        .route("/{id}", delete(cart::remove).patch(cart::update))
}

/// Create all API routes.
pub fn api() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .nest("/categories", category_routes())
        .nest("/cart", cart_routes())
}
