//! Session token authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Header carrying the credential, formatted as `<scheme> <token>`.
pub const CREDENTIAL_HEADER: &str = "author";

/// Authenticates requests using the signed session token from [`CREDENTIAL_HEADER`].
///
/// # Header Format
///
/// ```text
/// author: Bearer <token>
/// ```
///
/// The scheme word is not inspected; the token is the second whitespace-delimited
/// field.
///
/// # Authentication Flow
///
/// 1. Extract token from the credential header
/// 2. Verify signature and expiry
/// 3. Insert the decoded [`crate::domain::entities::SessionClaims`] into request extensions
/// 4. Continue to next middleware/handler
///
/// # Errors
///
/// - `401 Unauthorized` (`NoToken`) if the header is missing, not visible ASCII,
///   or has no token segment
/// - `403 Forbidden` (`WrongToken`) if the token is malformed, tampered or expired
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/items", get(owned_items_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = req
        .headers()
        .get(CREDENTIAL_HEADER)
        .map(|value| value.to_str().map_err(|_| AppError::Unauthenticated))
        .transpose()?;

    let token = extract_token(header).inspect_err(|_| {
        tracing::debug!(path = %req.uri().path(), "Missing or malformed credential header");
    })?;

    let claims = st.auth_service.verify(token)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Pulls the token out of a `<scheme> <token>` header value.
///
/// # Errors
///
/// Returns [`AppError::Unauthenticated`] when the header is absent or has fewer
/// than two fields.
pub fn extract_token(header: Option<&str>) -> Result<&str, AppError> {
    header
        .and_then(|value| value.split_whitespace().nth(1))
        .ok_or(AppError::Unauthenticated)
}
