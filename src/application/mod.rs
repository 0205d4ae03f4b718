//! Application layer services.
//!
//! Services sit between HTTP handlers and repository traits:
//!
//! - [`services::auth_service::AuthService`] - Session token issuance and verification
//! - [`services::document_service::DocumentService`] - Document CRUD and owner-scoped listing

pub mod services;
