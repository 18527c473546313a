//! Integration tests for session carts.

use axum::http::StatusCode;
use peppercorn_integration_tests::{demo_app, get, send};
use serde_json::json;
use uuid::Uuid;

/// Client-generated opaque session token, as the browser would mint one.
fn session_token() -> String {
    Uuid::new_v4().to_string()
}

#[tokio::test]
async fn test_empty_cart_lists_nothing() {
    let app = demo_app();
    let session = session_token();

    let (status, body) = get(&app, &format!("/api/cart?sessionId={session}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().expect("array body").is_empty());
}

#[tokio::test]
async fn test_adding_same_product_merges_into_one_row() {
    let app = demo_app();
    let session = session_token();

    let (status, first) = send(
        &app,
        "POST",
        "/api/cart",
        Some(json!({ "productId": 1, "sessionId": session })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["quantity"], 1);

    let (_, merged) = send(
        &app,
        "POST",
        "/api/cart",
        Some(json!({ "productId": 1, "quantity": 2, "sessionId": session })),
    )
    .await;
    assert_eq!(merged["id"], first["id"]);
    assert_eq!(merged["quantity"], 3);

    let (_, body) = get(&app, &format!("/api/cart?sessionId={session}")).await;
    let lines = body.as_array().expect("array body");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["quantity"], 3);
    // Rows come joined with a product snapshot.
    assert_eq!(lines[0]["product"]["name"], "Premium Wireless Headphones");
    assert_eq!(lines[0]["product"]["price"], "299.00");
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let app = demo_app();
    let alice = session_token();
    let bob = session_token();

    send(
        &app,
        "POST",
        "/api/cart",
        Some(json!({ "productId": 1, "sessionId": alice })),
    )
    .await;
    send(
        &app,
        "POST",
        "/api/cart",
        Some(json!({ "productId": 1, "quantity": 5, "sessionId": bob })),
    )
    .await;

    let (_, body) = get(&app, &format!("/api/cart?sessionId={alice}")).await;
    assert_eq!(body.as_array().expect("array body").len(), 1);
    assert_eq!(body[0]["quantity"], 1);

    let (_, body) = get(&app, &format!("/api/cart?sessionId={bob}")).await;
    assert_eq!(body[0]["quantity"], 5);
}

#[tokio::test]
async fn test_update_quantity_and_underflow_rejection() {
    let app = demo_app();
    let session = session_token();

    let (_, item) = send(
        &app,
        "POST",
        "/api/cart",
        Some(json!({ "productId": 2, "quantity": 2, "sessionId": session })),
    )
    .await;
    let id = item["id"].as_i64().expect("id");

    let (status, updated) = send(
        &app,
        "PATCH",
        &format!("/api/cart/{id}"),
        Some(json!({ "quantity": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["quantity"], 7);

    // The boundary rejects underflow; removal is the way to drop a line.
    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/cart/{id}"),
        Some(json!({ "quantity": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().expect("message").contains("at least 1"));

    let (status, _) = send(
        &app,
        "PATCH",
        "/api/cart/999",
        Some(json!({ "quantity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remove_row_reports_missing_rows() {
    let app = demo_app();
    let session = session_token();

    let (_, item) = send(
        &app,
        "POST",
        "/api/cart",
        Some(json!({ "productId": 3, "sessionId": session })),
    )
    .await;
    let id = item["id"].as_i64().expect("id");

    let (status, _) = send(&app, "DELETE", &format!("/api/cart/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Removing a row that does not exist is a 404, not a crash.
    let (status, _) = send(&app, "DELETE", &format!("/api/cart/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_clear_cart_leaves_other_sessions_alone() {
    let app = demo_app();
    let alice = session_token();
    let bob = session_token();

    send(
        &app,
        "POST",
        "/api/cart",
        Some(json!({ "productId": 1, "sessionId": alice })),
    )
    .await;
    send(
        &app,
        "POST",
        "/api/cart",
        Some(json!({ "productId": 2, "sessionId": bob })),
    )
    .await;

    let (status, _) = send(&app, "DELETE", &format!("/api/cart?sessionId={alice}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = get(&app, &format!("/api/cart?sessionId={alice}")).await;
    assert!(body.as_array().expect("array body").is_empty());
    let (_, body) = get(&app, &format!("/api/cart?sessionId={bob}")).await;
    assert_eq!(body.as_array().expect("array body").len(), 1);

    // Clearing an already-empty session still succeeds.
    let (status, _) = send(&app, "DELETE", &format!("/api/cart?sessionId={alice}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_deleted_products_vanish_from_cart_reads() {
    let app = demo_app();
    let session = session_token();

    send(
        &app,
        "POST",
        "/api/cart",
        Some(json!({ "productId": 6, "sessionId": session })),
    )
    .await;
    let (status, _) = send(&app, "DELETE", "/api/products/6", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get(&app, &format!("/api/cart?sessionId={session}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().expect("array body").is_empty());
}
