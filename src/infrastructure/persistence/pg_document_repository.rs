//! PostgreSQL implementation of the document repository.
//!
//! Documents live in a single `documents` table keyed by `(collection, id)` with
//! the body stored as JSONB. Equality filters use JSONB containment (`@>`).

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{
    Collection, DeleteOutcome, Document, DocumentFilter, DocumentId, InsertOutcome, UpdateOptions,
    UpdateOutcome,
};
use crate::domain::repositories::DocumentRepository;
use crate::error::AppError;

type JsonBody = Json<Map<String, Value>>;

#[derive(sqlx::FromRow)]
struct DocumentRow {
    id: Uuid,
    body: JsonBody,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Document::new(row.id.into(), row.body.0)
    }
}

/// PostgreSQL repository for document storage and retrieval.
pub struct PgDocumentRepository {
    pool: Arc<PgPool>,
}

impl PgDocumentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Turns the `(previous body, current body)` pair returned by a write into an
/// acknowledgment.
fn update_outcome(id: DocumentId, previous: Option<JsonBody>, current: JsonBody) -> UpdateOutcome {
    match previous {
        Some(previous) => UpdateOutcome::matched(previous.0 != current.0),
        None => UpdateOutcome::upserted(id),
    }
}

#[async_trait]
impl DocumentRepository for PgDocumentRepository {
    async fn insert_one(
        &self,
        collection: Collection,
        body: Map<String, Value>,
    ) -> Result<InsertOutcome, AppError> {
        let id = DocumentId::generate();

        sqlx::query("INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)")
            .bind(collection.as_str())
            .bind(id.as_uuid())
            .bind(Json(body))
            .execute(self.pool.as_ref())
            .await?;

        Ok(InsertOutcome::new(id))
    }

    async fn find(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<Vec<Document>, AppError> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY created_at, id
            "#,
        )
        .bind(collection.as_str())
        .bind(Json(filter.fields().clone()))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Document::from).collect())
    }

    async fn find_one(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> Result<Option<Document>, AppError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, body FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection.as_str())
        .bind(id.as_uuid())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Document::from))
    }

    async fn update_one(
        &self,
        collection: Collection,
        id: &DocumentId,
        patch: Map<String, Value>,
        options: UpdateOptions,
    ) -> Result<UpdateOutcome, AppError> {
        // The CTE reads the pre-statement snapshot, so `previous_body` is the
        // body as it was before this write (NULL when the row did not exist).
        let sql = if options.upsert {
            r#"
            WITH previous AS (
                SELECT body FROM documents WHERE collection = $1 AND id = $2
            )
            INSERT INTO documents (collection, id, body)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, id) DO UPDATE
                SET body = documents.body || EXCLUDED.body,
                    updated_at = NOW()
            RETURNING (SELECT body FROM previous) AS previous_body, body
            "#
        } else {
            r#"
            WITH previous AS (
                SELECT body FROM documents WHERE collection = $1 AND id = $2
            )
            UPDATE documents
            SET body = documents.body || $3,
                updated_at = NOW()
            WHERE collection = $1 AND id = $2
            RETURNING (SELECT body FROM previous) AS previous_body, body
            "#
        };

        let row = sqlx::query_as::<_, (Option<JsonBody>, JsonBody)>(sql)
            .bind(collection.as_str())
            .bind(id.as_uuid())
            .bind(Json(patch))
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(match row {
            Some((previous, current)) => update_outcome(*id, previous, current),
            None => UpdateOutcome::unmatched(),
        })
    }

    async fn delete_one(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> Result<DeleteOutcome, AppError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection.as_str())
            .bind(id.as_uuid())
            .execute(self.pool.as_ref())
            .await?;

        Ok(DeleteOutcome::new(result.rows_affected()))
    }
}
