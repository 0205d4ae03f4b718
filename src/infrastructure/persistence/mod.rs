//! Document repository implementations.
//!
//! - [`PgDocumentRepository`] - PostgreSQL JSONB storage used in production
//! - [`InMemoryDocumentRepository`] - Process-local store used by tests

pub mod memory_document_repository;
pub mod pg_document_repository;

pub use memory_document_repository::InMemoryDocumentRepository;
pub use pg_document_repository::PgDocumentRepository;
