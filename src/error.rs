//! Application error type and its HTTP mapping.
//!
//! Every error leaves the service as a JSON body of the form
//! `{ "name": "...", "message": "..." }` together with the matching status code.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Errors surfaced by handlers, services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No credential header, or the header carries no token segment.
    #[error("Unauthorized Access")]
    Unauthenticated,

    /// Token signature, structure or expiry check failed.
    #[error("Forbidden Access")]
    InvalidCredential,

    /// Authenticated, but the claim subject does not match the requested scope.
    #[error("Forbidden Access")]
    Forbidden,

    /// Path identifier could not be parsed into a [`crate::domain::entities::DocumentId`].
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("{0}")]
    BadRequest(String),

    /// Store connection or transport failure.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    name: &'static str,
    message: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::InvalidCredential | AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::InvalidIdentifier(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable error name exposed to clients.
    pub fn name(&self) -> &'static str {
        match self {
            AppError::Unauthenticated => "NoToken",
            AppError::InvalidCredential | AppError::Forbidden => "WrongToken",
            AppError::InvalidIdentifier(_) => "InvalidIdentifier",
            AppError::BadRequest(_) => "BadRequest",
            AppError::StoreUnavailable(_) => "StoreUnavailable",
            AppError::Internal(_) => "InternalError",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Driver details stay in the logs.
        let message = match &self {
            AppError::StoreUnavailable(detail) | AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                status
                    .canonical_reason()
                    .unwrap_or("Internal Server Error")
                    .to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorBody {
            name: self.name(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_) => AppError::StoreUnavailable(e.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}
