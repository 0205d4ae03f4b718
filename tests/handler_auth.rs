mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::{Value, json};
use warehouse_api::application::services::{AuthService, TOKEN_TTL_HOURS};

fn no_token() -> Value {
    json!({ "name": "NoToken", "message": "Unauthorized Access" })
}

fn wrong_token() -> Value {
    json!({ "name": "WrongToken", "message": "Forbidden Access" })
}

// ─── POST /login ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_login_issues_verifiable_token() {
    let (server, _repo) = common::make_server();
    let principal = json!({ "email": "ops@example.com", "role": "picker" });

    let response = server.post("/login").json(&principal).await;
    response.assert_status_ok();

    let token = response.json::<Value>()["token"]
        .as_str()
        .unwrap()
        .to_string();

    let claims = AuthService::new(common::TEST_SECRET).verify(&token).unwrap();
    assert_eq!(Value::Object(claims.principal), principal);
    assert_eq!(claims.exp - claims.iat, TOKEN_TTL_HOURS * 3600);
}

#[tokio::test]
async fn test_login_rejects_non_object_payload() {
    let (server, _repo) = common::make_server();

    let response = server.post("/login").json(&json!("ops@example.com")).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_login_token_opens_protected_route() {
    let (server, _repo) = common::make_server();
    let token = server
        .post("/login")
        .json(&json!({ "email": "ops@example.com" }))
        .await
        .json::<Value>()["token"]
        .as_str()
        .unwrap()
        .to_string();

    server
        .get("/items")
        .add_query_param("email", "ops@example.com")
        .add_header(common::AUTH_HEADER, common::bearer(&token))
        .await
        .assert_status_ok();
}

// ─── Credential header ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_missing_header_is_unauthorized() {
    let (server, _repo) = common::make_server();

    let response = server
        .get("/items")
        .add_query_param("email", "ops@example.com")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_json(&no_token());
}

#[tokio::test]
async fn test_header_without_token_segment_is_unauthorized() {
    let (server, _repo) = common::make_server();

    let response = server
        .get("/items")
        .add_query_param("email", "ops@example.com")
        .add_header(common::AUTH_HEADER, "Bearer")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_json(&no_token());
}

#[tokio::test]
async fn test_standard_authorization_header_is_not_read() {
    let (server, _repo) = common::make_server();
    let token = common::token_for("ops@example.com");

    let response = server
        .get("/items")
        .add_query_param("email", "ops@example.com")
        .add_header("authorization", common::bearer(&token))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_forbidden() {
    let (server, _repo) = common::make_server();

    let response = server
        .get("/items")
        .add_query_param("email", "ops@example.com")
        .add_header(common::AUTH_HEADER, "Bearer not.a.jwt")
        .await;

    response.assert_status_forbidden();
    response.assert_json(&wrong_token());
}

#[tokio::test]
async fn test_token_from_other_secret_is_forbidden() {
    let (server, _repo) = common::make_server();
    let token = AuthService::new("someone-elses-secret")
        .issue(common::principal("ops@example.com"))
        .unwrap();

    let response = server
        .get("/items")
        .add_query_param("email", "ops@example.com")
        .add_header(common::AUTH_HEADER, common::bearer(&token))
        .await;

    response.assert_status_forbidden();
    response.assert_json(&wrong_token());
}

#[tokio::test]
async fn test_expired_token_is_forbidden() {
    let (server, _repo) = common::make_server();
    let issued_at = Utc::now() - Duration::hours(TOKEN_TTL_HOURS) - Duration::minutes(5);
    let token = AuthService::new(common::TEST_SECRET)
        .issue_at(common::principal("ops@example.com"), issued_at)
        .unwrap();

    let response = server
        .get("/items")
        .add_query_param("email", "ops@example.com")
        .add_header(common::AUTH_HEADER, common::bearer(&token))
        .await;

    response.assert_status_forbidden();
    response.assert_json(&wrong_token());
}

#[tokio::test]
async fn test_scheme_word_is_not_checked() {
    let (server, _repo) = common::make_server();
    let token = common::token_for("ops@example.com");

    server
        .get("/items")
        .add_query_param("email", "ops@example.com")
        .add_header(common::AUTH_HEADER, format!("Token {token}"))
        .await
        .assert_status_ok();
}
