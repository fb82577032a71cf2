//! Project CLI commands: create, list, delete.

use crate::commands::CredentialArgs;
use anyhow::Result;
use clap::Args;
use quant_cloud_api::{Language, ProjectClient};

/// Arguments for the create-project command.
#[derive(Args, Debug, Clone)]
pub struct CreateProjectArgs {
    /// Project name
    #[arg(long)]
    pub name: String,

    /// Project language (python or csharp)
    #[arg(long, default_value = "python")]
    pub language: Language,

    #[command(flatten)]
    pub credentials: CredentialArgs,
}

/// Arguments for the list-projects command.
#[derive(Args, Debug, Clone)]
pub struct ListProjectsArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,
}

/// Arguments for the delete-project command.
#[derive(Args, Debug, Clone)]
pub struct DeleteProjectArgs {
    /// Id of the project to delete
    #[arg(long)]
    pub project_id: i64,

    #[command(flatten)]
    pub credentials: CredentialArgs,
}

/// Runs the create-project command.
///
/// # Errors
/// Returns a validation error if the name is already in use.
pub async fn run_create_project(args: CreateProjectArgs) -> Result<()> {
    let transport = args.credentials.transport()?;
    let project = ProjectClient::new(&transport)
        .create(&args.name, args.language)
        .await?;

    tracing::info!(project_id = project.project_id, "project created");
    println!("Created project '{}' with id {}", project.name, project.project_id);
    Ok(())
}

/// Runs the list-projects command.
///
/// # Errors
/// Returns any transport failure unchanged.
pub async fn run_list_projects(args: ListProjectsArgs) -> Result<()> {
    let transport = args.credentials.transport()?;
    let projects = ProjectClient::new(&transport).get_all().await?;

    if projects.is_empty() {
        println!("No cloud projects");
        return Ok(());
    }

    for project in projects {
        println!(
            "{:>10}  {:<8}  {}",
            project.project_id, project.language, project.name
        );
    }
    Ok(())
}

/// Runs the delete-project command.
///
/// # Errors
/// Returns a not-found error if the id is unknown or already deleted.
pub async fn run_delete_project(args: DeleteProjectArgs) -> Result<()> {
    let transport = args.credentials.transport()?;
    ProjectClient::new(&transport).delete(args.project_id).await?;

    println!("Deleted project {}", args.project_id);
    Ok(())
}
