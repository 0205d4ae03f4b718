//! Handler for token issuance.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;

use crate::api::dto::login::LoginResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Issues a session token embedding the submitted principal.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Request Body
///
/// Any JSON object, e.g.:
///
/// ```json
/// { "email": "ops@example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiJ9..." }
/// ```
///
/// The token is valid for 10 hours. No credential check is performed on the
/// principal.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON or not a JSON object.
pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(payload) = payload?;
    let Value::Object(principal) = payload else {
        return Err(AppError::BadRequest(
            "Login payload must be a JSON object".to_string(),
        ));
    };

    let token = state.auth_service.issue(principal)?;

    Ok(Json(LoginResponse { token }))
}
