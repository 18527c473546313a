//! Cart route handlers.
//!
//! The session id is a client-generated opaque token passed as a query or
//! body parameter; the server keeps no session table beyond the cart rows
//! themselves.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use peppercorn_core::{CartItem, CartItemId, CartLine, NewCartItem};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Session id query parameter.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionQuery {
    /// Opaque client-generated session token.
    pub session_id: String,
}

/// Update cart item request body.
#[derive(Debug, Deserialize)]
pub struct UpdateCartItemRequest {
    /// Replacement quantity; must be at least 1.
    pub quantity: i32,
}

/// List the session's cart, each row joined with its product.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> Json<Vec<CartLine>> {
    Json(state.store().cart_items(&query.session_id))
}

/// Add a product to the cart, merging quantities with any existing row for
/// the same (session, product) pair.
#[instrument(skip(state, payload))]
pub async fn add(
    State(state): State<AppState>,
    Json(payload): Json<NewCartItem>,
) -> Json<CartItem> {
    let item = state.store().add_to_cart(payload);
    tracing::debug!(cart_item_id = %item.id, quantity = item.quantity, "Cart row upserted");
    Json(item)
}

/// Replace the quantity on a cart row.
///
/// The store does not clamp; a request below 1 is rejected here. A client
/// decrementing to zero removes the row instead.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<CartItemId>,
    Json(payload): Json<UpdateCartItemRequest>,
) -> Result<Json<CartItem>> {
    if payload.quantity < 1 {
        return Err(AppError::BadRequest(
            "quantity must be at least 1; remove the item instead".to_string(),
        ));
    }

    state
        .store()
        .update_cart_item(id, payload.quantity)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("cart item {id}")))
}

/// Remove one cart row.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<CartItemId>,
) -> Result<StatusCode> {
    if state.store().remove_from_cart(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("cart item {id}")))
    }
}

/// Clear the session's cart. Succeeds even when the cart is already empty.
#[instrument(skip(state))]
pub async fn clear(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> StatusCode {
    let removed = state.store().clear_cart(&query.session_id);
    tracing::debug!(removed, "Cart cleared");
    StatusCode::NO_CONTENT
}
