//! Data Transfer Objects for API requests and responses.
//!
//! Document bodies are free-form JSON and pass through as [`serde_json::Value`];
//! only the envelopes below have a fixed shape.

pub mod items;
pub mod login;
