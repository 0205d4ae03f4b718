//! Repository trait for document storage.

use crate::domain::entities::{
    Collection, DeleteOutcome, Document, DocumentFilter, DocumentId, InsertOutcome, UpdateOptions,
    UpdateOutcome,
};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Narrow interface over the document store.
///
/// Every HTTP handler performs exactly one of these calls. Implementations must
/// be safe to share across concurrent requests; no locking is done above them.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDocumentRepository`] - PostgreSQL JSONB
/// - [`crate::infrastructure::persistence::InMemoryDocumentRepository`] - process-local fake
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Inserts `body` as a new document under a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] or [`AppError::Internal`] on store errors.
    async fn insert_one(
        &self,
        collection: Collection,
        body: Map<String, Value>,
    ) -> Result<InsertOutcome, AppError>;

    /// Lists documents matching `filter`, in insertion order.
    async fn find(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<Vec<Document>, AppError>;

    /// Finds a single document by identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Document))` if found
    /// - `Ok(None)` if not found
    async fn find_one(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> Result<Option<Document>, AppError>;

    /// Merges the top-level fields of `patch` into the document.
    ///
    /// With [`UpdateOptions::upsert`] set, a missing document is created under
    /// `id` with `patch` as its body.
    async fn update_one(
        &self,
        collection: Collection,
        id: &DocumentId,
        patch: Map<String, Value>,
        options: UpdateOptions,
    ) -> Result<UpdateOutcome, AppError>;

    /// Removes the document. `deleted_count` is 0 when nothing matched.
    async fn delete_one(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> Result<DeleteOutcome, AppError>;
}
