//! Account client: organization lookup.
//!
//! The default organization is a stable identity: querying it implicitly
//! (no id) and explicitly (its own id) must return the identical record.

use crate::clients::retag_not_found;
use crate::error::Result;
use crate::models::Organization;
use crate::transport::ApiTransport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct OrganizationResponse {
    organization: Organization,
}

/// Client for account-level queries.
#[derive(Debug, Clone)]
pub struct AccountClient {
    transport: ApiTransport,
}

impl AccountClient {
    /// Creates an account client over the shared transport.
    #[must_use]
    pub fn new(transport: &ApiTransport) -> Self {
        Self {
            transport: transport.clone(),
        }
    }

    /// Retrieves an organization. `None` selects the account's default
    /// organization; passing that organization's id explicitly returns
    /// the same record.
    ///
    /// # Errors
    /// Returns a not-found error if an explicit id is unknown.
    pub async fn get_organization(&self, organization_id: Option<&str>) -> Result<Organization> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            organization_id: Option<&'a str>,
        }

        let response: OrganizationResponse = self
            .transport
            .invoke("account/read", &Params { organization_id })
            .await
            .map_err(|e| {
                retag_not_found(e, "organization", organization_id.unwrap_or("default"))
            })?;
        Ok(response.organization)
    }
}
