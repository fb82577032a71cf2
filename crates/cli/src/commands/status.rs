//! Status CLI command.
//!
//! Probes the credential pair and shows the default organization.

use crate::commands::CredentialArgs;
use anyhow::Result;
use clap::Args;
use quant_cloud_api::{AccountClient, ApiError};

/// Arguments for the status command.
#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,
}

/// Runs the status command.
///
/// # Errors
/// Returns an authentication error if the credential pair is rejected,
/// or any transport failure unchanged.
pub async fn run_status(args: StatusArgs) -> Result<()> {
    let transport = args.credentials.transport()?;

    if !transport.is_authenticated().await? {
        return Err(ApiError::Authentication("credential pair rejected".to_string()).into());
    }
    println!("Credentials OK (user {})", args.credentials.user_id);

    let organization = AccountClient::new(&transport).get_organization(None).await?;
    println!(
        "Default organization: {} ({})",
        organization.name, organization.organization_id
    );

    Ok(())
}
