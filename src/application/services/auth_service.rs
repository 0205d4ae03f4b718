//! Token issuance and verification.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde_json::{Map, Value};

use crate::domain::entities::SessionClaims;
use crate::error::AppError;

/// Validity window of an issued token.
pub const TOKEN_TTL_HOURS: i64 = 10;

/// Signs and verifies HS256 session tokens with the process-wide secret.
///
/// Keys are derived once at construction and are read-only afterwards, so a
/// single instance is shared by all requests.
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `signing_secret` - HMAC key shared by issuance and verification
    pub fn new(signing_secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(signing_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(signing_secret.as_bytes()),
            validation,
            ttl: Duration::hours(TOKEN_TTL_HOURS),
        }
    }

    /// Issues a token for `principal`, valid for [`TOKEN_TTL_HOURS`] from now.
    ///
    /// The principal is embedded verbatim; its identity is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn issue(&self, principal: Map<String, Value>) -> Result<String, AppError> {
        self.issue_at(principal, Utc::now())
    }

    /// Issues a token as if it had been signed at `issued_at`.
    pub fn issue_at(
        &self,
        principal: Map<String, Value>,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let claims = SessionClaims::new(
            principal,
            issued_at.timestamp(),
            (issued_at + self.ttl).timestamp(),
        );

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {e}")))
    }

    /// Verifies signature and expiry and returns the decoded claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCredential`] for a malformed, tampered or
    /// expired token.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AppError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies a token as of `now`.
    ///
    /// A token stops being valid at its `exp` second, not after it.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, AppError> {
        let claims = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(reason = %e, "Token rejected");
                AppError::InvalidCredential
            })?;

        if claims.exp <= now.timestamp() {
            tracing::debug!(exp = claims.exp, "Token rejected at its expiry instant");
            return Err(AppError::InvalidCredential);
        }

        Ok(claims)
    }
}
