//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`, `POST /login`, `/products`, `/product/{id}`, `/productUp`, `POST /item` - public
//! - `GET /items` - session token required
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, method and header
//! - **Authentication** - Session token on protected routes only
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routed application with all middleware except path normalization.
///
/// The authentication interceptor is attached with `route_layer`, so it runs only
/// for requests that matched a protected route and either short-circuits with an
/// error response or forwards the request with decoded claims attached.
pub fn router(state: AppState) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .merge(api::routes::public_routes())
        .merge(protected)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer())
}

/// Constructs the application router with trailing-slash normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
