//! Integration tests for the featured offer endpoints.

use axum::http::{Method, StatusCode};
use herreria_integration_tests::TestContext;
use serde_json::{Value, json};

fn offer(is_active: bool) -> Value {
    json!({
        "title": "Liquidación de rejas",
        "description": "Rejas de seguridad a medida",
        "image": "https://x/rejas.jpg",
        "originalPrice": "$700",
        "discountedPrice": "$490",
        "discount": "30% OFF",
        "isActive": is_active
    })
}

#[tokio::test]
async fn test_set_then_remove_leaves_null() {
    let ctx = TestContext::new();
    assert!(ctx.get("/api/featured-offer").await.json().is_null());

    let saved = ctx
        .send(Method::PUT, "/api/featured-offer", Some(&offer(true)), true)
        .await;
    assert_eq!(saved.status, StatusCode::OK);
    assert_eq!(saved.json()["message"], "Oferta guardada exitosamente");

    let shown = ctx.get("/api/featured-offer").await.json();
    assert_eq!(shown["title"], "Liquidación de rejas");
    assert_eq!(shown["discount"], "30% OFF");

    let removed = ctx
        .send(Method::DELETE, "/api/featured-offer", None, true)
        .await;
    assert_eq!(removed.status, StatusCode::OK);
    assert!(removed.json()["data"].is_null());
    assert!(ctx.get("/api/featured-offer").await.json().is_null());
}

#[tokio::test]
async fn test_inactive_offer_is_hidden_from_visitors() {
    let ctx = TestContext::new();
    ctx.send(Method::PUT, "/api/featured-offer", Some(&offer(false)), true)
        .await;

    assert!(ctx.get("/api/featured-offer").await.json().is_null());
    assert_eq!(
        ctx.get_as_editor("/api/featured-offer").await.json()["isActive"],
        false
    );
}

#[tokio::test]
async fn test_visitor_cannot_remove() {
    let ctx = TestContext::new();
    ctx.send(Method::PUT, "/api/featured-offer", Some(&offer(true)), true)
        .await;

    let resp = ctx
        .send(Method::DELETE, "/api/featured-offer", None, false)
        .await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(ctx.store.count("settings").await, 1);
}

#[tokio::test]
async fn test_missing_discounted_price_is_rejected() {
    let ctx = TestContext::new();
    let mut body = offer(true);
    body["discountedPrice"] = json!("");

    let resp = ctx
        .send(Method::PUT, "/api/featured-offer", Some(&body), true)
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(ctx.store.count("settings").await, 0);
}
