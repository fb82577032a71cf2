//! Live client: read-only listing of deployed algorithms.

use crate::error::Result;
use crate::models::LiveAlgorithm;
use crate::transport::ApiTransport;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct LiveResponse {
    live: Vec<LiveAlgorithm>,
}

/// Client for live algorithm deployments.
#[derive(Debug, Clone)]
pub struct LiveClient {
    transport: ApiTransport,
}

impl LiveClient {
    /// Creates a live client over the shared transport.
    #[must_use]
    pub fn new(transport: &ApiTransport) -> Self {
        Self {
            transport: transport.clone(),
        }
    }

    /// Retrieves all live algorithms of the account, in server-defined
    /// order.
    ///
    /// # Errors
    /// Returns an error if the API call fails.
    pub async fn get_all(&self) -> Result<Vec<LiveAlgorithm>> {
        let response: LiveResponse = self
            .transport
            .invoke("live/read", &serde_json::json!({}))
            .await?;
        Ok(response.live)
    }
}
