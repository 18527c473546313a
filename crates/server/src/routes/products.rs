//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;

use peppercorn_core::{NewProduct, Product, ProductFilter, ProductId, ProductUpdate};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List products, filtered and sorted per the query string.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> Json<Vec<Product>> {
    Json(state.store().list_products(&filter))
}

/// Get a single product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    state
        .store()
        .get_product(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

/// Create a product.
///
/// Rating, review count, and the favorite flag are server-owned; anything a
/// client sends for them never reaches the store.
#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewProduct>,
) -> (StatusCode, Json<Product>) {
    let product = state.store().create_product(payload);
    tracing::info!(product_id = %product.id, "Product created");
    (StatusCode::CREATED, Json(product))
}

/// Apply a partial update to a product.
#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(payload): Json<ProductUpdate>,
) -> Result<Json<Product>> {
    state
        .store()
        .update_product(id, payload)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

/// Delete a product.
///
/// Reviews and cart rows referencing it are left behind; cart reads drop
/// them at join time.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Path(id): Path<ProductId>) -> Result<StatusCode> {
    if state.store().delete_product(id) {
        tracing::info!(product_id = %id, "Product deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("product {id}")))
    }
}

/// Flip a product's favorite flag.
#[instrument(skip(state))]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    state
        .store()
        .toggle_favorite(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}
