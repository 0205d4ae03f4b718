//! Session claims carried by a signed bearer token.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Principal field holding the subject identifier.
pub const SUBJECT_FIELD: &str = "email";

/// Decoded payload of a verified token.
///
/// The principal is whatever object was submitted at login; `iat` and `exp`
/// are added at issuance and are never taken from the principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(flatten)]
    pub principal: Map<String, Value>,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl SessionClaims {
    pub fn new(mut principal: Map<String, Value>, iat: i64, exp: i64) -> Self {
        principal.remove("iat");
        principal.remove("exp");
        Self {
            principal,
            iat,
            exp,
        }
    }

    /// Subject identifier, if the principal carries one as a string.
    pub fn subject(&self) -> Option<&str> {
        self.principal.get(SUBJECT_FIELD).and_then(Value::as_str)
    }

    /// Returns true when `requested` names the same owner as this session.
    ///
    /// An absent subject or an absent request never matches.
    pub fn owns(&self, requested: Option<&str>) -> bool {
        matches!((self.subject(), requested), (Some(subject), Some(requested)) if subject == requested)
    }
}
