//! Authenticated transport shared by all resource clients.
//!
//! Every remote call funnels through [`ApiTransport::invoke`]: one named
//! operation per resource action, POSTed as JSON to the platform API with
//! the credential pair attached. The transport performs no retries and
//! holds no mutable state, so any number of resource clients can share it
//! across tasks without coordination.
//!
//! # Example
//!
//! ```ignore
//! use quant_cloud_api::{ApiTransport, ApiTransportConfig};
//!
//! let transport = ApiTransport::new(
//!     ApiTransportConfig::credentials("123456", "my-api-token"),
//! )?;
//!
//! if !transport.is_authenticated().await? {
//!     eprintln!("credentials rejected");
//! }
//! ```

use crate::auth::ApiAuth;
use crate::error::{ApiError, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Production API base URL.
pub const API_BASE_URL: &str = "https://www.quantconnect.com/api/v2";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the API transport.
#[derive(Debug, Clone)]
pub struct ApiTransportConfig {
    /// Base URL for the API.
    pub base_url: String,

    /// User id half of the credential pair.
    pub user_id: String,

    /// API token half of the credential pair.
    pub api_token: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiTransportConfig {
    /// Creates a configuration for the production API with the given
    /// credential pair.
    #[must_use]
    pub fn credentials(user_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            user_id: user_id.into(),
            api_token: api_token.into(),
            timeout_secs: 30,
        }
    }

    /// Sets the base URL (useful for pointing at a mock server).
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

// =============================================================================
// Response Envelope
// =============================================================================

/// Success/failure marker present on every response body.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    errors: Vec<String>,
    #[serde(default)]
    messages: Vec<String>,
}

/// Decodes a success envelope that carries no payload of interest
/// (update/delete acknowledgements, the authenticate probe).
#[derive(Debug, Deserialize)]
pub(crate) struct EmptyResponse {}

// =============================================================================
// ApiTransport
// =============================================================================

/// The single authenticated call path to the platform API.
///
/// Owns the credential pair and the HTTP client; both are immutable after
/// construction. Cloning is cheap (the underlying HTTP client is
/// reference-counted), which is how resource clients share one transport.
#[derive(Clone)]
pub struct ApiTransport {
    /// Base URL, immutable after construction.
    base_url: String,

    /// HTTP client.
    http: Client,

    /// Per-request header signing.
    auth: ApiAuth,
}

impl std::fmt::Debug for ApiTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiTransport")
            .field("base_url", &self.base_url)
            .field("user_id", &self.auth.user_id())
            .finish_non_exhaustive()
    }
}

impl ApiTransport {
    /// Creates a transport from the given configuration.
    ///
    /// # Errors
    /// Returns [`ApiError::Configuration`] if the credentials are empty or
    /// the HTTP client cannot be built.
    pub fn new(config: ApiTransportConfig) -> Result<Self> {
        let auth = ApiAuth::new(config.user_id, config.api_token)?;

        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url,
            http,
            auth,
        })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Invokes a named remote operation with the given parameters and
    /// decodes the success payload into `T`.
    ///
    /// # Errors
    /// Returns the error kind the response maps to: authentication,
    /// not-found, validation, raw HTTP, or network/timeout failure.
    pub async fn invoke<T: DeserializeOwned>(
        &self,
        operation: &str,
        parameters: &impl Serialize,
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, operation);
        let signed = self.auth.sign_now();
        let headers = signed.as_tuples();

        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header("Accept", "application/json")
            .header(headers[0].0, headers[0].1)
            .header(headers[1].0, headers[1].1)
            .json(parameters)
            .send()
            .await?;

        Self::handle_response(operation, response).await
    }

    /// Probes the credential pair with the minimal `authenticate`
    /// operation.
    ///
    /// Policy: returns `Ok(false)` only when the probe fails with the
    /// authentication kind; any other failure (network, timeout,
    /// unexpected payload) propagates as an error so callers can tell a
    /// bad credential pair apart from an unreachable service.
    ///
    /// # Errors
    /// Returns any non-authentication failure unchanged.
    pub async fn is_authenticated(&self) -> Result<bool> {
        match self
            .invoke::<EmptyResponse>("authenticate", &serde_json::json!({}))
            .await
        {
            Ok(_) => Ok(true),
            Err(e) if e.is_authentication() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Decodes a response body: envelope triage first, then the typed
    /// payload.
    async fn handle_response<T: DeserializeOwned>(
        operation: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) else {
            // No decodable envelope at all; surface the raw HTTP failure.
            if !status.is_success() {
                return Err(ApiError::api(status.as_u16(), body));
            }
            return Err(ApiError::Validation(format!(
                "{operation}: response was not valid JSON"
            )));
        };

        let Ok(envelope) = serde_json::from_value::<Envelope>(value.clone()) else {
            if !status.is_success() {
                return Err(ApiError::api(status.as_u16(), body));
            }
            return Err(ApiError::Validation(format!(
                "{operation}: response is missing the success marker"
            )));
        };

        if !envelope.success {
            let mut messages = envelope.errors;
            messages.extend(envelope.messages);
            return Err(Self::classify_failure(status, messages));
        }

        serde_json::from_value(value).map_err(|e| {
            ApiError::Validation(format!("{operation}: failed to decode response: {e}"))
        })
    }

    /// Maps a failed envelope to the matching error kind using the HTTP
    /// status and the service-provided messages.
    fn classify_failure(status: StatusCode, messages: Vec<String>) -> ApiError {
        let message = if messages.is_empty() {
            "request failed without an error message".to_string()
        } else {
            messages.join(" ")
        };
        let lowered = message.to_lowercase();

        if status == StatusCode::UNAUTHORIZED
            || status == StatusCode::FORBIDDEN
            || lowered.contains("hash doesn't match")
            || lowered.contains("authenticat")
        {
            return ApiError::Authentication(message);
        }

        if status == StatusCode::NOT_FOUND
            || lowered.contains("not found")
            || lowered.contains("does not exist")
        {
            // Resource clients re-tag this with the entity family and id.
            return ApiError::not_found("resource", message);
        }

        ApiError::Validation(message)
    }
}
