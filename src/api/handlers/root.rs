//! Liveness endpoint.

/// Returns a plain-text liveness message.
///
/// # Endpoint
///
/// `GET /`
///
/// Does not touch the store.
pub async fn root_handler() -> &'static str {
    "Server is running"
}
