//! Integration tests for the storefront HTTP API.
//!
//! These exercise the full router end to end, the same way the binary
//! wires it up: catalog seed -> app state -> router.

use std::io::Write;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use shopfront::api::{create_router, AppState};
use shopfront::catalog::Catalog;

fn app() -> axum::Router {
    create_router(AppState::new(Catalog::seed()))
}

fn request(method: Method, uri: &str, body: Body) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn products_returns_200_with_catalog_array() {
    let response = app()
        .oneshot(request(Method::GET, "/products", Body::empty()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!([{ "id": 1, "name": "Laptop", "price": 1200 }])
    );
}

#[tokio::test]
async fn products_array_contains_the_laptop() {
    let response = app()
        .oneshot(request(Method::GET, "/products", Body::empty()))
        .await
        .unwrap();

    let json = body_json(response).await;
    let laptop = serde_json::json!({ "id": 1, "name": "Laptop", "price": 1200 });
    assert!(json.as_array().unwrap().contains(&laptop));
}

#[tokio::test]
async fn orders_returns_201_for_empty_body() {
    let response = app()
        .oneshot(request(Method::POST, "/orders", Body::empty()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({ "message": "Order placed successfully" })
    );
}

#[tokio::test]
async fn orders_returns_201_for_json_body() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"product_id": 1, "quantity": 2}"#))
        .unwrap();

    let response = app().oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({ "message": "Order placed successfully" })
    );
}

#[tokio::test]
async fn orders_returns_201_for_malformed_body() {
    let response = app()
        .oneshot(request(
            Method::POST,
            "/orders",
            Body::from("{not valid json"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn orders_are_counted_in_status() {
    let state = AppState::new(Catalog::seed());
    let app = create_router(state.clone());

    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(request(Method::POST, "/orders", Body::empty()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(request(Method::GET, "/api/v1/status", Body::empty()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "running");
    assert_eq!(json["catalog_size"], 1);
    assert_eq!(json["orders_acknowledged"], 3);
}

#[tokio::test]
async fn storefront_page_matches_heading() {
    let response = app()
        .oneshot(request(Method::GET, "/", Body::empty()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    // Case-insensitive match, same as the front-end smoke test.
    assert!(page.to_lowercase().contains("e-commerce platform"));
}

#[tokio::test]
async fn health_returns_ok() {
    let response = app()
        .oneshot(request(Method::GET, "/health", Body::empty()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn unmatched_route_returns_404() {
    let response = app()
        .oneshot(request(Method::GET, "/carts", Body::empty()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn seeded_catalog_is_served_in_order() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": 1, "name": "Laptop", "price": 1200}},
            {{"id": 2, "name": "Keyboard", "price": 90}}
        ]"#
    )
    .unwrap();

    let catalog = Catalog::from_json_file(file.path().to_str().unwrap()).unwrap();
    let app = create_router(AppState::new(catalog));

    let response = app
        .oneshot(request(Method::GET, "/products", Body::empty()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!([
            { "id": 1, "name": "Laptop", "price": 1200 },
            { "id": 2, "name": "Keyboard", "price": 90 }
        ])
    );
}
