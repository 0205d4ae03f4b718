#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use warehouse_api::application::services::AuthService;
use warehouse_api::infrastructure::persistence::InMemoryDocumentRepository;
use warehouse_api::routes::router;
use warehouse_api::state::AppState;

pub const TEST_SECRET: &str = "test-signing-secret";

/// Header name the service reads the credential from.
pub const AUTH_HEADER: &str = "author";

pub fn create_test_state() -> (AppState, Arc<InMemoryDocumentRepository>) {
    let repo = Arc::new(InMemoryDocumentRepository::new());
    let state = AppState::new(repo.clone(), TEST_SECRET);
    (state, repo)
}

/// Full router (auth middleware included) over a fresh in-memory store.
pub fn make_server() -> (TestServer, Arc<InMemoryDocumentRepository>) {
    let (state, repo) = create_test_state();
    let server = TestServer::new(router(state)).unwrap();
    (server, repo)
}

pub fn principal(email: &str) -> Map<String, Value> {
    match json!({ "email": email }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

/// Issues a token the server under test will accept.
pub fn token_for(email: &str) -> String {
    AuthService::new(TEST_SECRET)
        .issue(principal(email))
        .unwrap()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
