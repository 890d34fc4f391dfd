//! Integration Tests for the HTTP Catalog Client
//!
//! Runs a stub catalog server in-process and exercises
//! `HttpCatalogSource` against it.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    extract::Path, http::StatusCode, response::IntoResponse, response::Response, routing::get,
    Json, Router,
};
use catalog_cache::catalog::{CatalogSource, HttpCatalogSource};
use catalog_cache::error::CatalogError;
use catalog_cache::models::ProductId;
use serde_json::json;

// == Stub Catalog Server ==

async fn list_products() -> Json<serde_json::Value> {
    Json(json!([
        {"id": 1, "code": "Widget-1", "description": "A widget"},
        {"id": 2, "code": "Gadget-2", "description": "A gadget"}
    ]))
}

async fn product_detail(Path(id): Path<u64>) -> Response {
    match id {
        1 => Json(json!({"id": 1, "code": "Widget-1", "price": 19.99})).into_response(),
        500 => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        _ => (StatusCode::NOT_FOUND, "no such product").into_response(),
    }
}

async fn spawn_stub_catalog() -> SocketAddr {
    let app = Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(product_detail));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn source_for(addr: SocketAddr) -> HttpCatalogSource {
    HttpCatalogSource::new(format!("http://{}", addr), Duration::from_secs(2)).unwrap()
}

// == Fetch Tests ==

#[tokio::test]
async fn test_fetch_all_decodes_listing_in_order() {
    let addr = spawn_stub_catalog().await;
    let source = source_for(addr);

    let products = source.fetch_all().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, ProductId(1));
    assert_eq!(products[0].code, "Widget-1");
    assert_eq!(products[1].code, "Gadget-2");
}

#[tokio::test]
async fn test_fetch_detail_returns_payload() {
    let addr = spawn_stub_catalog().await;
    let source = source_for(addr);

    let detail = source.fetch_detail(ProductId(1)).await.unwrap();

    assert_eq!(detail.0["code"], json!("Widget-1"));
    assert_eq!(detail.0["price"], json!(19.99));
}

#[tokio::test]
async fn test_fetch_detail_unknown_product_is_not_found() {
    let addr = spawn_stub_catalog().await;
    let source = source_for(addr);

    let result = source.fetch_detail(ProductId(42)).await;

    assert!(matches!(result, Err(CatalogError::NotFound(ProductId(42)))));
}

#[tokio::test]
async fn test_fetch_detail_server_error_is_upstream() {
    let addr = spawn_stub_catalog().await;
    let source = source_for(addr);

    let result = source.fetch_detail(ProductId(500)).await;

    match result {
        Err(CatalogError::Upstream(msg)) => assert!(msg.contains("500")),
        other => panic!("Expected Upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_catalog_is_upstream() {
    // Nothing listens on port 1.
    let source = HttpCatalogSource::new("http://127.0.0.1:1", Duration::from_secs(1)).unwrap();

    let result = source.fetch_all().await;

    assert!(matches!(result, Err(CatalogError::Upstream(_))));
}

#[tokio::test]
async fn test_trailing_slash_base_url_works() {
    let addr = spawn_stub_catalog().await;
    let source =
        HttpCatalogSource::new(format!("http://{}/", addr), Duration::from_secs(2)).unwrap();

    let products = source.fetch_all().await.unwrap();
    assert_eq!(products.len(), 2);
}
