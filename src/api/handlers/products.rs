//! Handlers for the product collection.
//!
//! Identifiers are parsed before any store call; a malformed `{id}` is a
//! `400 InvalidIdentifier`, never a driver error.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde_json::Value;

use crate::domain::entities::{
    Collection, DeleteOutcome, Document, DocumentFilter, DocumentId, InsertOutcome, UpdateOutcome,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists products, optionally filtered by top-level field equality.
///
/// # Endpoint
///
/// `GET /products?field=value&...`
///
/// Query values are compared as strings. Results come back in store order.
pub async fn list_products_handler(
    State(state): State<AppState>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Json<Vec<Document>>, AppError> {
    let Query(params) = query?;
    let filter = DocumentFilter::from_query(params);
    let products = state
        .document_service
        .list(Collection::Products, &filter)
        .await?;
    Ok(Json(products))
}

/// Fetches one product.
///
/// # Endpoint
///
/// `GET /product/{id}`
///
/// Responds `200` with `null` when no product has this identifier.
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Document>>, AppError> {
    let id: DocumentId = id.parse()?;
    let product = state
        .document_service
        .get(Collection::Products, &id)
        .await?;
    Ok(Json(product))
}

/// Inserts a new product.
///
/// # Endpoint
///
/// `POST /productUp`
///
/// # Response
///
/// ```json
/// { "acknowledged": true, "insertedId": "0b6f3c1e-..." }
/// ```
pub async fn create_product_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<InsertOutcome>, AppError> {
    let Json(body) = payload?;
    let outcome = state
        .document_service
        .create(Collection::Products, body)
        .await?;
    Ok(Json(outcome))
}

/// Sets the fields present in the body on a product, creating it if absent.
///
/// # Endpoint
///
/// `PUT /product/{id}`
///
/// # Response
///
/// ```json
/// {
///   "acknowledged": true,
///   "matchedCount": 1,
///   "modifiedCount": 1,
///   "upsertedCount": 0,
///   "upsertedId": null
/// }
/// ```
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<UpdateOutcome>, AppError> {
    let Json(body) = payload?;
    let id: DocumentId = id.parse()?;
    let outcome = state
        .document_service
        .upsert(Collection::Products, &id, body)
        .await?;
    Ok(Json(outcome))
}

/// Deletes a product.
///
/// # Endpoint
///
/// `DELETE /product/{id}`
///
/// Responds `200` with `deletedCount: 0` when nothing matched.
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>, AppError> {
    let id: DocumentId = id.parse()?;
    let outcome = state
        .document_service
        .delete(Collection::Products, &id)
        .await?;
    Ok(Json(outcome))
}
