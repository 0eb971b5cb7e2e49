//! Integration tests for the category product endpoints.

use axum::http::{Method, StatusCode};
use herreria_integration_tests::TestContext;
use serde_json::{Value, json};

fn colonial() -> Value {
    json!({
        "name": "Puerta Colonial",
        "image": "https://x/y.jpg",
        "subcategory": "Puertas Clásicas",
        "price": "$850"
    })
}

fn first_product(page: &Value) -> &Value {
    &page["state"]["data"][0]["products"][0]
}

#[tokio::test]
async fn test_add_product_shows_under_its_subcategory() {
    let ctx = TestContext::new();

    let resp = ctx
        .send(
            Method::POST,
            "/api/categories/puertas/products",
            Some(&colonial()),
            true,
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    let body = resp.json();
    assert_eq!(body["message"], "Producto agregado exitosamente");

    let page = ctx.get("/api/categories/puertas/products").await.json();
    assert_eq!(page["state"]["status"], "ready");
    assert_eq!(page["state"]["data"][0]["label"], "Puertas Clásicas");
    let product = first_product(&page);
    assert_eq!(product["name"], "Puerta Colonial");
    assert_eq!(product["category"], "puertas");
    assert_eq!(product["price"], "$850");
    assert!(product["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(product["createdAt"].is_string());
}

#[tokio::test]
async fn test_visitor_cannot_add() {
    let ctx = TestContext::new();

    let resp = ctx
        .send(
            Method::POST,
            "/api/categories/puertas/products",
            Some(&colonial()),
            false,
        )
        .await;

    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(ctx.store.count("products").await, 0);
}

#[tokio::test]
async fn test_incomplete_form_is_rejected() {
    let ctx = TestContext::new();

    let resp = ctx
        .send(
            Method::POST,
            "/api/categories/rejas/products",
            Some(&json!({ "name": "Reja", "image": "" })),
            true,
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.json()["error"],
        "Por favor completa todos los campos obligatorios"
    );
    assert_eq!(ctx.store.count("products").await, 0);
}

#[tokio::test]
async fn test_unknown_category() {
    let ctx = TestContext::new();

    let page = ctx.get("/api/categories/ventanas/products").await;
    assert_eq!(page.status, StatusCode::OK);
    let page = page.json();
    assert_eq!(page["info"]["title"], "Categoría");
    assert_eq!(
        page["info"]["description"],
        "Explora nuestra selección de productos de alta calidad."
    );
    assert_eq!(page["state"]["data"], json!([]));

    let resp = ctx
        .send(
            Method::POST,
            "/api/categories/ventanas/products",
            Some(&colonial()),
            true,
        )
        .await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_then_delete_twice() {
    let ctx = TestContext::new();
    let created = ctx
        .send(
            Method::POST,
            "/api/categories/puertas/products",
            Some(&colonial()),
            true,
        )
        .await
        .json();
    let id = first_product(&created["data"])["id"]
        .as_str()
        .map(str::to_string)
        .unwrap_or_default();
    let uri = format!("/api/categories/puertas/products/{id}");

    let edited = ctx
        .send(
            Method::PUT,
            &uri,
            Some(&json!({
                "name": "Puerta Colonial Doble",
                "image": "https://x/y.jpg",
                "subcategory": "Puertas Dobles",
                "price": ""
            })),
            true,
        )
        .await;
    assert_eq!(edited.status, StatusCode::OK);
    let edited = edited.json();
    assert_eq!(edited["message"], "Producto actualizado exitosamente");
    assert_eq!(edited["data"]["state"]["data"][0]["label"], "Puertas Dobles");
    assert!(first_product(&edited["data"])["price"].is_null());

    let deleted = ctx.send(Method::DELETE, &uri, None, true).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.json()["data"]["state"]["data"], json!([]));

    let again = ctx.send(Method::DELETE, &uri, None, true).await;
    assert_eq!(again.status, StatusCode::OK);
}

#[tokio::test]
async fn test_edit_missing_product_fails() {
    let ctx = TestContext::new();

    let resp = ctx
        .send(
            Method::PUT,
            "/api/categories/puertas/products/missing",
            Some(&colonial()),
            true,
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_GATEWAY);
    assert_eq!(resp.json()["error"], "Error al actualizar el producto");
}

#[tokio::test]
async fn test_wrong_token_is_a_visitor() {
    let ctx = TestContext::new();
    let page = ctx.get("/api/categories/puertas/products").await.json();
    assert_eq!(page["editor"]["is_authenticated"], false);

    let page = ctx
        .get_as_editor("/api/categories/puertas/products")
        .await
        .json();
    assert_eq!(page["editor"]["is_authenticated"], true);
}

#[tokio::test]
async fn test_concurrent_add_to_same_category_is_busy() {
    let (ctx, gate) = TestContext::gated();
    let form = colonial();
    let uri = "/api/categories/puertas/products";

    let (first, second) = tokio::join!(ctx.send(Method::POST, uri, Some(&form), true), async {
        let resp = ctx.send(Method::POST, uri, Some(&form), true).await;
        gate.add_permits(10);
        resp
    });

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(
        second.json()["error"],
        "Hay una operación en curso, espera a que termine"
    );
    assert_eq!(ctx.store.count("products").await, 1);
}

#[tokio::test]
async fn test_adds_to_different_categories_do_not_block() {
    let (ctx, gate) = TestContext::gated();
    gate.add_permits(10);
    let form = colonial();

    let (puertas, rejas) = tokio::join!(
        ctx.send(Method::POST, "/api/categories/puertas/products", Some(&form), true),
        ctx.send(Method::POST, "/api/categories/rejas/products", Some(&form), true),
    );

    assert_eq!(puertas.status, StatusCode::OK);
    assert_eq!(rejas.status, StatusCode::OK);
    assert_eq!(ctx.store.count("products").await, 2);
}
