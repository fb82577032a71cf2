use clap::{Parser, Subcommand};
use quant_cloud_api::ApiError;

mod commands;
mod errors;

use commands::{
    BacktestArgs, CreateProjectArgs, DeleteProjectArgs, ListProjectsArgs, StatusArgs,
};
use errors::{exit_code_for, MoreInfoError};

#[derive(Parser)]
#[command(name = "quant-cloud")]
#[command(about = "Command-line front end to the hosted quant-trading platform", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API credentials and show the default organization
    Status(StatusArgs),
    /// Create a cloud project
    CreateProject(CreateProjectArgs),
    /// List cloud projects
    ListProjects(ListProjectsArgs),
    /// Delete a cloud project
    DeleteProject(DeleteProjectArgs),
    /// Compile a project and run a backtest to completion
    Backtest(BacktestArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let result = match cli.command {
        Commands::Status(args) => commands::run_status(args).await,
        Commands::CreateProject(args) => commands::run_create_project(args).await,
        Commands::ListProjects(args) => commands::run_list_projects(args).await,
        Commands::DeleteProject(args) => commands::run_delete_project(args).await,
        Commands::Backtest(args) => commands::run_backtest(args).await,
    };

    // Client-layer errors get translated to a message, a documentation
    // link, and a stable exit code; anything else bubbles up as-is.
    if let Err(err) = result {
        if let Some(api_err) = err.downcast_ref::<ApiError>() {
            eprintln!("{}", MoreInfoError::from_api(api_err));
            std::process::exit(exit_code_for(api_err));
        }
        return Err(err);
    }

    Ok(())
}
