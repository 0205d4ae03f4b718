mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use warehouse_api::routes::app_router;

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let (state, _repo) = common::create_test_state();
    send_to(app_router(state), request).await
}

async fn send_to(
    app: tower_http::normalize_path::NormalizePath<axum::Router>,
    request: Request<Body>,
) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_trailing_slash_reaches_product_listing() {
    let request = Request::builder()
        .uri("/products/")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_trailing_slash_reaches_protected_items() {
    let (state, _repo) = common::create_test_state();
    let app = app_router(state);

    let create = Request::builder()
        .method(Method::POST)
        .uri("/item/")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "email": "a@example.com", "name": "gloves" }).to_string(),
        ))
        .unwrap();
    let (status, _) = send_to(app.clone(), create).await;
    assert_eq!(status, StatusCode::OK);

    let token = common::token_for("a@example.com");
    let list = Request::builder()
        .uri("/items/?email=a@example.com")
        .header(common::AUTH_HEADER, common::bearer(&token))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send_to(app, list).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "gloves");
}

#[tokio::test]
async fn test_trailing_slash_keeps_auth_on_items() {
    let request = Request::builder()
        .uri("/items/?email=a@example.com")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["name"], "NoToken");
}
