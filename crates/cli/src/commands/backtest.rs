//! Backtest CLI command.
//!
//! Compiles a cloud project, waits for the build, starts a backtest from
//! the finished compile, and polls it to completion.

use crate::commands::CredentialArgs;
use anyhow::Result;
use clap::Args;
use quant_cloud_api::{ApiError, BacktestClient, CompileClient, CompileState};

/// Arguments for the backtest command.
#[derive(Args, Debug, Clone)]
pub struct BacktestArgs {
    /// Id of the project to backtest
    #[arg(long)]
    pub project_id: i64,

    /// Name for the new backtest
    #[arg(long)]
    pub name: String,

    #[command(flatten)]
    pub credentials: CredentialArgs,
}

/// Runs the backtest command.
///
/// # Errors
/// Returns a validation error carrying the compiler diagnostics if the
/// build fails, or any client-layer error unchanged.
pub async fn run_backtest(args: BacktestArgs) -> Result<()> {
    let transport = args.credentials.transport()?;
    let compiles = CompileClient::new(&transport);
    let backtests = BacktestClient::new(&transport);

    println!("Compiling project {}...", args.project_id);
    let compile = compiles.create(args.project_id).await?;
    let compile = compiles
        .wait_for_completion(args.project_id, &compile.compile_id)
        .await?;

    if compile.state == CompileState::BuildError {
        for line in &compile.logs {
            eprintln!("{line}");
        }
        return Err(ApiError::Validation("build failed".to_string()).into());
    }

    println!("Build succeeded, starting backtest '{}'...", args.name);
    let backtest = backtests
        .create(args.project_id, &compile.compile_id, &args.name)
        .await?;
    let backtest = backtests
        .wait_for_completion(args.project_id, &backtest.backtest_id)
        .await?;

    if backtest.has_error() {
        if let Some(error) = &backtest.error {
            eprintln!("{error}");
        }
        return Err(ApiError::Validation("backtest failed".to_string()).into());
    }

    println!("Backtest '{}' completed ({})", backtest.name, backtest.backtest_id);

    let mut statistics: Vec<_> = backtest.statistics.iter().collect();
    statistics.sort_by(|a, b| a.0.cmp(b.0));
    for (key, value) in statistics {
        println!("{key:<32} {value}");
    }

    Ok(())
}
