//! Compile client: the compilation half of the asynchronous job protocol.
//!
//! Submitting a compile returns immediately with an in-progress snapshot;
//! the caller observes it to completion by polling. Once the state is
//! terminal it never changes, and `get` returns the final diagnostics.

use crate::clients::{retag_not_found, POLL_INTERVAL};
use crate::error::Result;
use crate::models::Compile;
use crate::transport::ApiTransport;
use serde::Serialize;

/// Client for compilation jobs.
#[derive(Debug, Clone)]
pub struct CompileClient {
    transport: ApiTransport,
}

impl CompileClient {
    /// Creates a compile client over the shared transport.
    #[must_use]
    pub fn new(transport: &ApiTransport) -> Self {
        Self {
            transport: transport.clone(),
        }
    }

    /// Submits a project for compilation. Returns immediately with the
    /// job id and a non-terminal state; it does not block until the
    /// build finishes.
    ///
    /// # Errors
    /// Returns a not-found error if the project id is unknown.
    pub async fn create(&self, project_id: i64) -> Result<Compile> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params {
            project_id: i64,
        }

        self.transport
            .invoke("compile/create", &Params { project_id })
            .await
            .map_err(|e| retag_not_found(e, "project", project_id.to_string()))
    }

    /// Retrieves the current snapshot of a compilation job. After the
    /// job reaches a terminal state this returns the authoritative final
    /// record including diagnostics.
    ///
    /// # Errors
    /// Returns a not-found error if the compile id is unknown.
    pub async fn get(&self, project_id: i64, compile_id: &str) -> Result<Compile> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params<'a> {
            project_id: i64,
            compile_id: &'a str,
        }

        self.transport
            .invoke(
                "compile/read",
                &Params {
                    project_id,
                    compile_id,
                },
            )
            .await
            .map_err(|e| retag_not_found(e, "compile", compile_id))
    }

    /// Polls a compilation job until it reaches a terminal state and
    /// returns the final snapshot.
    ///
    /// There is no built-in timeout: an unbounded remote job yields
    /// unbounded polling. Callers wanting a deadline wrap this in
    /// `tokio::time::timeout`.
    ///
    /// # Errors
    /// Returns any error a poll raises; polling stops at the first
    /// failure.
    pub async fn wait_for_completion(&self, project_id: i64, compile_id: &str) -> Result<Compile> {
        loop {
            let compile = self.get(project_id, compile_id).await?;
            if compile.state.is_terminal() {
                tracing::info!(
                    compile_id = %compile.compile_id,
                    state = ?compile.state,
                    "compile finished"
                );
                return Ok(compile);
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}
