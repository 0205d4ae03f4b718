//! DTOs for owner-scoped item listing.

use serde::Deserialize;

/// Query parameters of `GET /items`.
///
/// `email` is optional at the extractor level so that an absent owner is
/// rejected as `403 Forbidden` rather than as a query parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct OwnerQuery {
    pub email: Option<String>,
}
