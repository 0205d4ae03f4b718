//! REST API layer for HTTP request/response handling.
//!
//! - [`dto`] - Request/response envelopes
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Session authentication and request tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
