//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, DocumentService};
use crate::domain::repositories::DocumentRepository;

/// Process-wide dependencies, read-only after startup.
///
/// The store handle is passed in explicitly so tests can substitute
/// [`crate::infrastructure::persistence::InMemoryDocumentRepository`].
#[derive(Clone)]
pub struct AppState {
    pub document_service: Arc<DocumentService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Builds state around a document store and the token signing secret.
    pub fn new(repository: Arc<dyn DocumentRepository>, signing_secret: &str) -> Self {
        Self {
            document_service: Arc::new(DocumentService::new(repository)),
            auth_service: Arc::new(AuthService::new(signing_secret)),
        }
    }
}
