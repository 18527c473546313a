//! Category route handlers.

use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use peppercorn_core::{Category, NewCategory};

use crate::state::AppState;

/// List active categories.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.store().list_categories())
}

/// Create a category (active by default).
#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewCategory>,
) -> (StatusCode, Json<Category>) {
    let category = state.store().create_category(payload);
    tracing::info!(category_id = %category.id, name = %category.name, "Category created");
    (StatusCode::CREATED, Json(category))
}
