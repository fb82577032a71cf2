//! Error types for the cloud API client layer.
//!
//! Provides typed errors for authentication, transport, validation,
//! and not-found failures. The client layer never retries or suppresses:
//! every error propagates unchanged to the caller, which translates it
//! at the command boundary.

use thiserror::Error;

/// Errors that can occur when talking to the cloud platform.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The credential pair was rejected by the service.
    #[error("authentication error: {0}")]
    Authentication(String),

    /// Connectivity or protocol-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// The request did not complete within the transport timeout.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// The service replied with a non-success HTTP status and no
    /// decodable response envelope.
    #[error("API error: {status_code} - {message}")]
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Raw response body, if any.
        message: String,
    },

    /// The service rejected the request shape or semantics, or a success
    /// payload failed to decode into its model.
    #[error("validation error: {0}")]
    Validation(String),

    /// The requested entity does not exist or was deleted.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Entity family ("project", "file", "compile", "backtest", ...).
        kind: &'static str,
        /// The id or name that was looked up.
        id: String,
    },

    /// Request body serialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Client construction or configuration failure.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ApiError {
    /// Creates an API error from status code and message.
    pub fn api(status_code: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status_code,
            message: message.into(),
        }
    }

    /// Creates a not-found error for an entity family.
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Returns true if the error is an authentication failure.
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }

    /// Returns true if the error is a not-found failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if the failure may clear on its own; callers that
    /// want a retry policy build it on top of this predicate.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout(_) => true,
            Self::Api { status_code, .. } => *status_code >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Network(format!("connection failed: {err}"))
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for cloud API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
