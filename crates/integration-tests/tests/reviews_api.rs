//! Integration tests for reviews and the rating recomputation rule.

use axum::http::StatusCode;
use peppercorn_integration_tests::{demo_app, empty_app, get, send};
use serde_json::json;

async fn create_product(app: &axum::Router, name: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/products",
        Some(json!({
            "name": name,
            "description": "x",
            "price": "10.00",
            "category": "Misc",
            "imageUrl": "https://example.com/x.jpg"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("id")
}

#[tokio::test]
async fn test_seeded_reviews_are_listed_in_creation_order() {
    let app = demo_app();
    let (status, body) = get(&app, "/api/products/1/reviews").await;

    assert_eq!(status, StatusCode::OK);
    let reviews = body.as_array().expect("array body");
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0]["userName"], "John Doe");
    assert_eq!(reviews[0]["rating"], 5);
    assert_eq!(reviews[1]["userName"], "Jane Smith");
}

#[tokio::test]
async fn test_review_creation_recomputes_rating_and_count() {
    let app = empty_app();
    let id = create_product(&app, "Espresso Grinder").await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/products/{id}/reviews"),
        Some(json!({ "userName": "John Doe", "rating": 3, "comment": "Fine." })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, product) = get(&app, &format!("/api/products/{id}")).await;
    assert_eq!(product["reviewCount"], 1);
    assert_eq!(product["rating"], "3.0");

    // A second review with rating 5 moves the mean to exactly "4.0".
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/products/{id}/reviews"),
        Some(json!({ "userName": "Jane Smith", "rating": 5, "comment": "Love it." })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, product) = get(&app, &format!("/api/products/{id}")).await;
    assert_eq!(product["reviewCount"], 2);
    assert_eq!(product["rating"], "4.0");
}

#[tokio::test]
async fn test_out_of_range_rating_is_rejected() {
    let app = empty_app();
    let id = create_product(&app, "Tea Kettle").await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/products/{id}/reviews"),
        Some(json!({ "userName": "Sam", "rating": 9, "comment": "!!" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Nothing was stored and the product is untouched.
    let (_, reviews) = get(&app, &format!("/api/products/{id}/reviews")).await;
    assert!(reviews.as_array().expect("array body").is_empty());
    let (_, product) = get(&app, &format!("/api/products/{id}")).await;
    assert_eq!(product["reviewCount"], 0);
}

#[tokio::test]
async fn test_review_for_missing_product_is_stored() {
    let app = empty_app();

    let (status, review) = send(
        &app,
        "POST",
        "/api/products/42/reviews",
        Some(json!({ "userName": "Nobody", "rating": 5, "comment": "Ghost." })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(review["productId"], 42);

    let (_, reviews) = get(&app, "/api/products/42/reviews").await;
    assert_eq!(reviews.as_array().expect("array body").len(), 1);
}

#[tokio::test]
async fn test_reviews_survive_product_delete() {
    let app = empty_app();
    let id = create_product(&app, "Floor Lamp").await;

    send(
        &app,
        "POST",
        &format!("/api/products/{id}/reviews"),
        Some(json!({ "userName": "Ann", "rating": 4, "comment": "Bright." })),
    )
    .await;

    let (status, _) = send(&app, "DELETE", &format!("/api/products/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Orphaned, but still listed under the old product id.
    let (_, reviews) = get(&app, &format!("/api/products/{id}/reviews")).await;
    assert_eq!(reviews.as_array().expect("array body").len(), 1);
}
