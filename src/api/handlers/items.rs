//! Handlers for the owner-scoped item collection.

use axum::{
    Extension, Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde_json::Value;

use crate::api::dto::items::OwnerQuery;
use crate::domain::entities::{Collection, Document, InsertOutcome, SessionClaims};
use crate::error::AppError;
use crate::state::AppState;

/// Inserts a new item.
///
/// # Endpoint
///
/// `POST /item`
///
/// Items are expected to carry an `email` field naming their owner; the field
/// is not enforced.
pub async fn create_item_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<InsertOutcome>, AppError> {
    let Json(body) = payload?;
    let outcome = state
        .document_service
        .create(Collection::Items, body)
        .await?;
    Ok(Json(outcome))
}

/// Lists the caller's own items.
///
/// # Endpoint
///
/// `GET /items?email=<owner>` (session token required)
///
/// # Errors
///
/// Returns 403 Forbidden if `email` is missing or differs from the session
/// subject. The store is not queried in that case.
pub async fn owned_items_handler(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    query: Result<Query<OwnerQuery>, QueryRejection>,
) -> Result<Json<Vec<Document>>, AppError> {
    let Query(query) = query?;
    let items = state
        .document_service
        .list_owned(&claims, query.email.as_deref())
        .await?;
    Ok(Json(items))
}
