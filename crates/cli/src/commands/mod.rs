//! CLI commands, each a thin wrapper over the cloud API clients.

pub mod backtest;
pub mod project;
pub mod status;

pub use backtest::{run_backtest, BacktestArgs};
pub use project::{
    run_create_project, run_delete_project, run_list_projects, CreateProjectArgs,
    DeleteProjectArgs, ListProjectsArgs,
};
pub use status::{run_status, StatusArgs};

use clap::Args;
use quant_cloud_api::{ApiTransport, ApiTransportConfig};

/// Credential pair shared by every command.
#[derive(Args, Debug, Clone)]
pub struct CredentialArgs {
    /// Platform user id
    #[arg(long, env = "QC_USER_ID")]
    pub user_id: String,

    /// Platform API token
    #[arg(long, env = "QC_API_TOKEN", hide_env_values = true)]
    pub api_token: String,

    /// Override the API base URL (for testing)
    #[arg(long, env = "QC_API_URL")]
    pub api_url: Option<String>,
}

impl CredentialArgs {
    /// Builds the authenticated transport from the supplied credentials.
    pub fn transport(&self) -> quant_cloud_api::Result<ApiTransport> {
        let mut config = ApiTransportConfig::credentials(&self.user_id, &self.api_token);
        if let Some(url) = &self.api_url {
            config = config.with_base_url(url);
        }
        ApiTransport::new(config)
    }
}
