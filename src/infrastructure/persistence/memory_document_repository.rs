//! In-memory implementation of the document repository.
//!
//! Keeps every collection in insertion order behind a single `RwLock`. Used by
//! the HTTP integration tests and handy for running the service without a database.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{
    Collection, DeleteOutcome, Document, DocumentFilter, DocumentId, InsertOutcome, UpdateOptions,
    UpdateOutcome,
};
use crate::domain::repositories::DocumentRepository;
use crate::error::AppError;

#[derive(Default)]
pub struct InMemoryDocumentRepository {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently stored in `collection`.
    pub async fn len(&self, collection: Collection) -> usize {
        self.collections
            .read()
            .await
            .get(&collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn insert_one(
        &self,
        collection: Collection,
        body: Map<String, Value>,
    ) -> Result<InsertOutcome, AppError> {
        let id = DocumentId::generate();
        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(Document::new(id, body));
        Ok(InsertOutcome::new(id))
    }

    async fn find(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<Vec<Document>, AppError> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(&collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).cloned().collect())
            .unwrap_or_default())
    }

    async fn find_one(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> Result<Option<Document>, AppError> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(&collection)
            .and_then(|docs| docs.iter().find(|d| d.id == *id).cloned()))
    }

    async fn update_one(
        &self,
        collection: Collection,
        id: &DocumentId,
        patch: Map<String, Value>,
        options: UpdateOptions,
    ) -> Result<UpdateOutcome, AppError> {
        let mut guard = self.collections.write().await;
        let docs = guard.entry(collection).or_default();

        if let Some(doc) = docs.iter_mut().find(|d| d.id == *id) {
            let before = doc.body.clone();
            doc.body.extend(Document::new(*id, patch).body);
            return Ok(UpdateOutcome::matched(before != doc.body));
        }

        if !options.upsert {
            return Ok(UpdateOutcome::unmatched());
        }

        docs.push(Document::new(*id, patch));
        Ok(UpdateOutcome::upserted(*id))
    }

    async fn delete_one(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> Result<DeleteOutcome, AppError> {
        let mut guard = self.collections.write().await;
        let Some(docs) = guard.get_mut(&collection) else {
            return Ok(DeleteOutcome::new(0));
        };

        let before = docs.len();
        docs.retain(|d| d.id != *id);
        Ok(DeleteOutcome::new((before - docs.len()) as u64))
    }
}
