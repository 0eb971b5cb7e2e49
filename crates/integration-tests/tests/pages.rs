//! Integration tests for the server-rendered pages.

use axum::http::{Method, StatusCode};
use herreria_integration_tests::TestContext;
use serde_json::json;

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new();
    let resp = ctx.get("/health").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, "ok");
}

#[tokio::test]
async fn test_home_page_lists_best_sellers() {
    let ctx = TestContext::new();
    ctx.send(
        Method::POST,
        "/api/best-sellers",
        Some(&json!({
            "name": "Portón corredizo",
            "image": "https://x/p.jpg",
            "price": "$1200",
            "category": "Portones",
            "order": 1
        })),
        true,
    )
    .await;

    let resp = ctx.get("/").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Los más vendidos"));
    assert!(resp.body.contains("Portón corredizo"));
}

#[tokio::test]
async fn test_location_page() {
    let ctx = TestContext::new();
    let resp = ctx.get("/ubicacion").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Maipu 1270, Grand Bourg"));
    assert!(resp.body.contains("https://www.google.com/maps/dir/?api=1"));
}

#[tokio::test]
async fn test_category_page_links_inquiries() {
    let ctx = TestContext::new();
    ctx.send(
        Method::POST,
        "/api/categories/escaleras/products",
        Some(&json!({
            "name": "Escalera caracol",
            "image": "https://x/e.jpg",
            "subcategory": "Caracol"
        })),
        true,
    )
    .await;

    let resp = ctx.get("/escaleras").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Escalera caracol"));
    assert!(resp.body.contains("Caracol"));
    assert!(resp.body.contains("producto:%20Escalera%20caracol"));
}

#[tokio::test]
async fn test_unknown_category_page_uses_fallback() {
    let ctx = TestContext::new();
    let resp = ctx.get("/ventanas").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Explora nuestra selección de productos de alta calidad."));
}
