//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Document`] - An opaque JSON object addressed by [`DocumentId`]
//! - [`Collection`] - Logical collection a document lives in
//! - [`SessionClaims`] - Decoded payload of a verified bearer token
//!
//! Write acknowledgments ([`InsertOutcome`], [`UpdateOutcome`], [`DeleteOutcome`])
//! are serialized to clients as-is.

pub mod document;
pub mod outcome;
pub mod session;

pub use document::{Collection, Document, DocumentFilter, DocumentId, ID_FIELD, into_document_body};
pub use outcome::{DeleteOutcome, InsertOutcome, UpdateOptions, UpdateOutcome};
pub use session::{SUBJECT_FIELD, SessionClaims};
