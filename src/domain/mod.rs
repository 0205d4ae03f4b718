//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Documents, collections, write acknowledgments and session claims
//! - [`repositories`] - Data access trait definitions
//!
//! Nothing here touches the database or the router directly. Fallible
//! operations report [`crate::error::AppError`], which the HTTP layer renders.

pub mod entities;
pub mod repositories;
