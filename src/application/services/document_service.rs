//! Document CRUD and owner-scoped listing.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::entities::{
    Collection, DeleteOutcome, Document, DocumentFilter, DocumentId, InsertOutcome, SUBJECT_FIELD,
    SessionClaims, UpdateOptions, UpdateOutcome, into_document_body,
};
use crate::domain::repositories::DocumentRepository;
use crate::error::AppError;

/// Translates handler requests into single repository calls.
///
/// Each method performs at most one store operation; request bodies are checked
/// before the store is touched.
pub struct DocumentService {
    repository: Arc<dyn DocumentRepository>,
}

impl DocumentService {
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        Self { repository }
    }

    /// Lists documents of `collection` matching `filter`.
    pub async fn list(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<Vec<Document>, AppError> {
        self.repository.find(collection, filter).await
    }

    /// Fetches one document. A missing document is `Ok(None)`, not an error.
    pub async fn get(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> Result<Option<Document>, AppError> {
        self.repository.find_one(collection, id).await
    }

    /// Inserts `body` as a new document.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if `body` is not a JSON object.
    pub async fn create(
        &self,
        collection: Collection,
        body: Value,
    ) -> Result<InsertOutcome, AppError> {
        let body = into_document_body(body)?;
        let outcome = self.repository.insert_one(collection, body).await?;
        tracing::debug!(%collection, id = %outcome.inserted_id, "Document inserted");
        Ok(outcome)
    }

    /// Sets the fields present in `body` on the document, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if `body` is not a JSON object.
    pub async fn upsert(
        &self,
        collection: Collection,
        id: &DocumentId,
        body: Value,
    ) -> Result<UpdateOutcome, AppError> {
        let patch = into_document_body(body)?;
        self.repository
            .update_one(collection, id, patch, UpdateOptions::upsert())
            .await
    }

    pub async fn delete(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> Result<DeleteOutcome, AppError> {
        self.repository.delete_one(collection, id).await
    }

    /// Lists the items owned by `requested`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] without querying the store when
    /// `requested` is absent or differs from the session subject.
    pub async fn list_owned(
        &self,
        claims: &SessionClaims,
        requested: Option<&str>,
    ) -> Result<Vec<Document>, AppError> {
        let Some(owner) = requested.filter(|_| claims.owns(requested)) else {
            tracing::debug!(
                subject = ?claims.subject(),
                requested = ?requested,
                "Owner scope does not match session subject"
            );
            return Err(AppError::Forbidden);
        };

        let filter = DocumentFilter::all().field_eq(SUBJECT_FIELD, owner);
        self.repository.find(Collection::Items, &filter).await
    }
}
