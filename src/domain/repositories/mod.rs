//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests.

pub mod document_repository;

pub use document_repository::DocumentRepository;

#[cfg(test)]
pub use document_repository::MockDocumentRepository;
