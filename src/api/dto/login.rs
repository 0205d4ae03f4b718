//! DTOs for token issuance.

use serde::Serialize;

/// Response of `POST /login`.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}
