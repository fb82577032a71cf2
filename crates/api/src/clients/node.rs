//! Node client: read-only listing of an organization's compute nodes.

use crate::clients::retag_not_found;
use crate::error::Result;
use crate::models::NodeList;
use crate::transport::ApiTransport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct NodesResponse {
    nodes: NodeList,
}

/// Client for organization compute nodes.
#[derive(Debug, Clone)]
pub struct NodeClient {
    transport: ApiTransport,
}

impl NodeClient {
    /// Creates a node client over the shared transport.
    #[must_use]
    pub fn new(transport: &ApiTransport) -> Self {
        Self {
            transport: transport.clone(),
        }
    }

    /// Retrieves the nodes of an organization, grouped by purpose.
    ///
    /// # Errors
    /// Returns a not-found error if the organization id is unknown.
    pub async fn get_all(&self, organization_id: &str) -> Result<NodeList> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params<'a> {
            organization_id: &'a str,
        }

        let response: NodesResponse = self
            .transport
            .invoke("nodes/read", &Params { organization_id })
            .await
            .map_err(|e| retag_not_found(e, "organization", organization_id))?;
        Ok(response.nodes)
    }
}
