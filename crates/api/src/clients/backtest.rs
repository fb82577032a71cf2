//! Backtest client: the backtesting half of the asynchronous job protocol.
//!
//! A backtest is created from a compile and polled until `completed`
//! flips to true. Name and note stay mutable after completion, and a
//! finished backtest can be deleted. Creating a backtest from a compile
//! that has not reached a terminal state is permitted; the service queues
//! it (or rejects it) and the outcome surfaces unchanged.

use crate::clients::{retag_not_found, POLL_INTERVAL};
use crate::error::Result;
use crate::models::Backtest;
use crate::transport::{ApiTransport, EmptyResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct BacktestResponse {
    backtest: Backtest,
}

#[derive(Debug, Deserialize)]
struct BacktestsResponse {
    backtests: Vec<Backtest>,
}

/// Client for backtest jobs.
#[derive(Debug, Clone)]
pub struct BacktestClient {
    transport: ApiTransport,
}

impl BacktestClient {
    /// Creates a backtest client over the shared transport.
    #[must_use]
    pub fn new(transport: &ApiTransport) -> Self {
        Self {
            transport: transport.clone(),
        }
    }

    /// Starts a backtest of a compiled project. Returns immediately with
    /// the job id and `completed == false`.
    ///
    /// # Errors
    /// Returns a not-found error if the project or compile id is unknown;
    /// a validation error if the service rejects the request.
    pub async fn create(
        &self,
        project_id: i64,
        compile_id: &str,
        name: &str,
    ) -> Result<Backtest> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params<'a> {
            project_id: i64,
            compile_id: &'a str,
            backtest_name: &'a str,
        }

        let response: BacktestResponse = self
            .transport
            .invoke(
                "backtests/create",
                &Params {
                    project_id,
                    compile_id,
                    backtest_name: name,
                },
            )
            .await
            .map_err(|e| retag_not_found(e, "compile", compile_id))?;
        Ok(response.backtest)
    }

    /// Retrieves the current snapshot of a backtest. Once `completed` is
    /// true this returns the authoritative final record including the
    /// statistics.
    ///
    /// # Errors
    /// Returns a not-found error if the backtest id is unknown or the
    /// backtest was deleted.
    pub async fn get(&self, project_id: i64, backtest_id: &str) -> Result<Backtest> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params<'a> {
            project_id: i64,
            backtest_id: &'a str,
        }

        let response: BacktestResponse = self
            .transport
            .invoke(
                "backtests/read",
                &Params {
                    project_id,
                    backtest_id,
                },
            )
            .await
            .map_err(|e| retag_not_found(e, "backtest", backtest_id))?;
        Ok(response.backtest)
    }

    /// Retrieves all backtests of a project, in server-defined order.
    /// Deleted backtests are excluded.
    ///
    /// # Errors
    /// Returns a not-found error if the project id is unknown.
    pub async fn get_all(&self, project_id: i64) -> Result<Vec<Backtest>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params {
            project_id: i64,
        }

        let response: BacktestsResponse = self
            .transport
            .invoke("backtests/read", &Params { project_id })
            .await
            .map_err(|e| retag_not_found(e, "project", project_id.to_string()))?;
        Ok(response.backtests)
    }

    /// Renames a backtest and replaces its note. Valid before and after
    /// completion.
    ///
    /// # Errors
    /// Returns a not-found error if the backtest id is unknown.
    pub async fn update(
        &self,
        project_id: i64,
        backtest_id: &str,
        name: &str,
        note: &str,
    ) -> Result<()> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params<'a> {
            project_id: i64,
            backtest_id: &'a str,
            name: &'a str,
            note: &'a str,
        }

        self.transport
            .invoke::<EmptyResponse>(
                "backtests/update",
                &Params {
                    project_id,
                    backtest_id,
                    name,
                    note,
                },
            )
            .await
            .map_err(|e| retag_not_found(e, "backtest", backtest_id))?;
        Ok(())
    }

    /// Deletes a backtest. A deleted backtest no longer appears in
    /// listings; a second delete raises whatever the service returns.
    ///
    /// # Errors
    /// Returns a not-found error if the backtest id is unknown.
    pub async fn delete(&self, project_id: i64, backtest_id: &str) -> Result<()> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params<'a> {
            project_id: i64,
            backtest_id: &'a str,
        }

        self.transport
            .invoke::<EmptyResponse>(
                "backtests/delete",
                &Params {
                    project_id,
                    backtest_id,
                },
            )
            .await
            .map_err(|e| retag_not_found(e, "backtest", backtest_id))?;
        Ok(())
    }

    /// Polls a backtest until `completed` is true and returns the final
    /// snapshot. No built-in timeout, same as the compile poller; wrap in
    /// `tokio::time::timeout` for a deadline.
    ///
    /// # Errors
    /// Returns any error a poll raises; polling stops at the first
    /// failure.
    pub async fn wait_for_completion(
        &self,
        project_id: i64,
        backtest_id: &str,
    ) -> Result<Backtest> {
        loop {
            let backtest = self.get(project_id, backtest_id).await?;
            if backtest.is_finished() {
                tracing::info!(
                    backtest_id = %backtest.backtest_id,
                    has_error = backtest.has_error(),
                    "backtest finished"
                );
                return Ok(backtest);
            }
            tracing::debug!(
                backtest_id = %backtest.backtest_id,
                progress = backtest.progress,
                "backtest still running"
            );
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}
