//! Hashed-token authentication for the cloud API.
//!
//! The platform authenticates every request with HTTP Basic credentials
//! where the password is a timestamped hash of the API token:
//!
//! ```text
//! hash = hex(sha256("{api_token}:{timestamp}"))
//! Authorization: Basic base64("{user_id}:{hash}")
//! Timestamp: {timestamp}
//! ```
//!
//! The timestamp is the Unix time in seconds at signing; the service
//! rejects stale hashes, so headers are computed per request.
//!
//! # Security
//!
//! - The API token is held in a [`secrecy::SecretString`]
//! - The token is NEVER logged; only its hash leaves the process

use crate::error::{ApiError, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

// =============================================================================
// Signed Headers
// =============================================================================

/// Headers required for an authenticated API request.
#[derive(Debug, Clone)]
pub struct SignedHeaders {
    /// Timestamp header (Unix timestamp in seconds).
    pub timestamp: String,

    /// Authorization header (Basic, base64 encoded).
    pub authorization: String,
}

impl SignedHeaders {
    /// Returns headers as tuples for reqwest.
    #[must_use]
    pub fn as_tuples(&self) -> [(&'static str, &str); 2] {
        [
            ("Timestamp", &self.timestamp),
            ("Authorization", &self.authorization),
        ]
    }
}

// =============================================================================
// ApiAuth
// =============================================================================

/// Computes per-request authentication headers from the credential pair.
pub struct ApiAuth {
    /// User id half of the credential pair.
    user_id: String,

    /// API token half of the credential pair (never logged).
    api_token: SecretString,
}

impl std::fmt::Debug for ApiAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiAuth")
            .field("user_id", &self.user_id)
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

impl ApiAuth {
    /// Creates an auth handler from an explicit credential pair.
    ///
    /// # Errors
    /// Returns [`ApiError::Configuration`] if either credential is empty.
    pub fn new(user_id: impl Into<String>, api_token: impl Into<String>) -> Result<Self> {
        let user_id = user_id.into();
        let api_token = api_token.into();

        if user_id.is_empty() {
            return Err(ApiError::Configuration("user id cannot be empty".to_string()));
        }
        if api_token.is_empty() {
            return Err(ApiError::Configuration("API token cannot be empty".to_string()));
        }

        Ok(Self {
            user_id,
            api_token: SecretString::from(api_token),
        })
    }

    /// Returns the user id half of the credential pair.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Signs a request at the given Unix timestamp (seconds).
    #[must_use]
    pub fn sign(&self, timestamp: u64) -> SignedHeaders {
        let mut hasher = Sha256::new();
        hasher.update(self.api_token.expose_secret().as_bytes());
        hasher.update(b":");
        hasher.update(timestamp.to_string().as_bytes());
        let hash = hex::encode(hasher.finalize());

        let basic = BASE64.encode(format!("{}:{}", self.user_id, hash));

        SignedHeaders {
            timestamp: timestamp.to_string(),
            authorization: format!("Basic {basic}"),
        }
    }

    /// Signs a request at the current time.
    #[must_use]
    pub fn sign_now(&self) -> SignedHeaders {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.sign(timestamp)
    }
}

impl Clone for ApiAuth {
    fn clone(&self) -> Self {
        Self {
            user_id: self.user_id.clone(),
            api_token: SecretString::from(self.api_token.expose_secret().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_auth() -> ApiAuth {
        ApiAuth::new("123", "abcdef").unwrap()
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_new_rejects_empty_user_id() {
        let err = ApiAuth::new("", "token").unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn test_new_rejects_empty_token() {
        let err = ApiAuth::new("123", "").unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let auth = test_auth();
        let debug = format!("{auth:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("abcdef"));
    }

    // ==================== Signing Tests ====================

    #[test]
    fn test_sign_is_deterministic_for_fixed_timestamp() {
        let auth = test_auth();
        let a = auth.sign(1_700_000_000);
        let b = auth.sign(1_700_000_000);
        assert_eq!(a.authorization, b.authorization);
        assert_eq!(a.timestamp, "1700000000");
    }

    #[test]
    fn test_sign_changes_with_timestamp() {
        let auth = test_auth();
        let a = auth.sign(1_700_000_000);
        let b = auth.sign(1_700_000_001);
        assert_ne!(a.authorization, b.authorization);
    }

    #[test]
    fn test_sign_known_vector() {
        // sha256("abcdef:1700000000") hashed then base64("123:{hash}")
        let auth = test_auth();
        let headers = auth.sign(1_700_000_000);

        let mut hasher = Sha256::new();
        hasher.update(b"abcdef:1700000000");
        let expected_hash = hex::encode(hasher.finalize());
        let expected = format!(
            "Basic {}",
            BASE64.encode(format!("123:{expected_hash}"))
        );

        assert_eq!(headers.authorization, expected);
    }

    #[test]
    fn test_as_tuples_order() {
        let auth = test_auth();
        let headers = auth.sign(1_700_000_000);
        let tuples = headers.as_tuples();
        assert_eq!(tuples[0].0, "Timestamp");
        assert_eq!(tuples[1].0, "Authorization");
        assert!(tuples[1].1.starts_with("Basic "));
    }
}
