//! Document entity: an opaque JSON object addressed by a store-generated identifier.

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::AppError;

/// Field name under which the identifier is exposed in responses.
pub const ID_FIELD: &str = "_id";

/// Store-native document identifier.
///
/// Parsing from a path segment is the only way user input becomes an identifier,
/// so malformed input is rejected with [`AppError::InvalidIdentifier`] before any
/// store call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for DocumentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for DocumentId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| AppError::InvalidIdentifier(s.to_string()))
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

/// Logical collection a document belongs to.
///
/// Both collections share one physical table but never see each other's rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Warehouse products served under `/products` and `/product/{id}`.
    Products,
    /// Owner-scoped items served under `/item` and `/items`.
    Items,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Products, Collection::Items];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Products => "products",
            Collection::Items => "items",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored document.
///
/// `body` never contains the `_id` key; the identifier is injected on
/// serialization only.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub body: Map<String, Value>,
}

impl Document {
    pub fn new(id: DocumentId, mut body: Map<String, Value>) -> Self {
        body.remove(ID_FIELD);
        Self { id, body }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.body.len() + 1))?;
        map.serialize_entry(ID_FIELD, &self.id)?;
        for (key, value) in &self.body {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Converts a request body into a document body.
///
/// Only JSON objects are accepted. A client-supplied `_id` is dropped because
/// identifiers are assigned by the store and never change.
pub fn into_document_body(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(mut map) => {
            map.remove(ID_FIELD);
            Ok(map)
        }
        _ => Err(AppError::BadRequest(
            "Request body must be a JSON object".to_string(),
        )),
    }
}

/// Top-level equality filter.
///
/// A document matches when every filter field is present in its body with an
/// equal value. The empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFilter {
    fields: Map<String, Value>,
}

impl DocumentFilter {
    /// Filter that matches every document.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn field_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Builds a filter from raw query parameters, comparing values as strings.
    pub fn from_query<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        params.into_iter().fold(Self::all(), |filter, (key, value)| {
            filter.field_eq(key, Value::String(value.into()))
        })
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn matches(&self, document: &Document) -> bool {
        self.fields
            .iter()
            .all(|(key, expected)| document.body.get(key) == Some(expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_document_id_roundtrip() {
        let id = DocumentId::generate();
        let parsed: DocumentId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_document_id_rejects_malformed_input() {
        for raw in ["", "123", "not-a-uuid", "62a1b2c3d4e5f6a7b8c9d0e1"] {
            let err = raw.parse::<DocumentId>().unwrap_err();
            assert!(matches!(err, AppError::InvalidIdentifier(ref v) if v == raw));
        }
    }

    #[test]
    fn test_document_serializes_with_id_first() {
        let id = DocumentId::generate();
        let doc = Document::new(id, body(json!({ "name": "bolt", "qty": 5 })));

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["_id"], json!(id.to_string()));
        assert_eq!(value["name"], "bolt");
        assert_eq!(value["qty"], 5);
    }

    #[test]
    fn test_document_new_strips_id_from_body() {
        let doc = Document::new(
            DocumentId::generate(),
            body(json!({ "_id": "forged", "name": "nut" })),
        );
        assert!(!doc.body.contains_key(ID_FIELD));
    }

    #[test]
    fn test_into_document_body_requires_object() {
        assert!(into_document_body(json!([1, 2])).is_err());
        assert!(into_document_body(json!("text")).is_err());

        let map = into_document_body(json!({ "_id": "x", "a": 1 })).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["a"], 1);
    }

    #[test]
    fn test_filter_matching() {
        let doc = Document::new(
            DocumentId::generate(),
            body(json!({ "email": "a@example.com", "name": "crate" })),
        );

        assert!(DocumentFilter::all().matches(&doc));
        assert!(DocumentFilter::all().field_eq("email", "a@example.com").matches(&doc));
        assert!(!DocumentFilter::all().field_eq("email", "b@example.com").matches(&doc));
        assert!(!DocumentFilter::all().field_eq("missing", "x").matches(&doc));
    }

    #[test]
    fn test_filter_from_query_compares_strings() {
        let filter = DocumentFilter::from_query([("qty", "5")]);
        let doc = Document::new(DocumentId::generate(), body(json!({ "qty": 5 })));

        assert_eq!(filter.fields()["qty"], json!("5"));
        assert!(!filter.matches(&doc));
    }
}
