//! Business logic services for the application layer.

pub mod auth_service;
pub mod document_service;

pub use auth_service::{AuthService, TOKEN_TTL_HOURS};
pub use document_service::DocumentService;
