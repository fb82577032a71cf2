//! Cloud API client layer for the quant-cloud CLI.
//!
//! This crate provides:
//! - A single authenticated transport shared by all resource clients
//! - Typed CRUD clients for seven remote resource families
//! - Polling to completion for the two asynchronous jobs (compile,
//!   backtest)
//! - A typed error model covering authentication, network, validation,
//!   and not-found failures
//!
//! # Example
//!
//! ```ignore
//! use quant_cloud_api::{
//!     ApiTransport, ApiTransportConfig, BacktestClient, CompileClient,
//!     FileClient, Language, ProjectClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> quant_cloud_api::Result<()> {
//!     let transport = ApiTransport::new(
//!         ApiTransportConfig::credentials("123456", "my-api-token"),
//!     )?;
//!
//!     let projects = ProjectClient::new(&transport);
//!     let files = FileClient::new(&transport);
//!     let compiles = CompileClient::new(&transport);
//!     let backtests = BacktestClient::new(&transport);
//!
//!     let project = projects.create("My Strategy", Language::Python).await?;
//!     files.create(project.project_id, "main.py", "# algorithm").await?;
//!
//!     let compile = compiles.create(project.project_id).await?;
//!     let compile = compiles
//!         .wait_for_completion(project.project_id, &compile.compile_id)
//!         .await?;
//!
//!     let backtest = backtests
//!         .create(project.project_id, &compile.compile_id, "First run")
//!         .await?;
//!     let backtest = backtests
//!         .wait_for_completion(project.project_id, &backtest.backtest_id)
//!         .await?;
//!     println!("completed: {}", backtest.is_finished());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Design
//!
//! Every remote call goes through [`ApiTransport::invoke`]: one named
//! operation per resource action, credential pair attached per request.
//! The clients are stateless wrappers over the transport; models are
//! immutable snapshots owned by the caller. The layer never retries,
//! never suppresses an error, and never imposes a timeout on job
//! polling — retry and deadline policy belong to the caller.
//!
//! # Operations
//!
//! - `authenticate` - credential probe
//! - `projects/create|read|update|delete` - project CRUD
//! - `projects/library/create|delete` - library references
//! - `files/create|read|update|delete` - file CRUD
//! - `compile/create|read` - compilation jobs
//! - `backtests/create|read|update|delete` - backtest jobs
//! - `live/read` - live algorithm listing
//! - `nodes/read` - organization nodes
//! - `account/read` - organization lookup

pub mod auth;
pub mod clients;
pub mod error;
pub mod models;
pub mod transport;

// Re-export main types for convenience
pub use auth::{ApiAuth, SignedHeaders};
pub use clients::{
    AccountClient, BacktestClient, CompileClient, FileClient, LiveClient, NodeClient,
    ProjectClient, ProjectUpdate, POLL_INTERVAL,
};
pub use error::{ApiError, Result};
pub use models::{
    Backtest, Compile, CompileState, Language, LiveAlgorithm, Node, NodeList, Organization,
    Parameter, Project, ProjectFile,
};
pub use transport::{ApiTransport, ApiTransportConfig, API_BASE_URL};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_exports() {
        let config = ApiTransportConfig::credentials("123", "token");
        assert_eq!(config.base_url, API_BASE_URL);
        let _ = ProjectUpdate::new();
    }

    #[test]
    fn test_error_types_accessible() {
        let err = ApiError::not_found("project", "42");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_model_types_accessible() {
        assert!(CompileState::BuildSuccess.is_terminal());
        assert_eq!(Language::Python.as_api_str(), "Py");
    }
}
