//! Project client: CRUD plus library relationship operations.

use crate::clients::retag_not_found;
use crate::error::{ApiError, Result};
use crate::models::{Language, Parameter, Project};
use crate::transport::{ApiTransport, EmptyResponse};
use serde::{Deserialize, Serialize};

/// Partial patch for a project update. Only the fields that are set are
/// sent; everything else stays untouched server-side.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Full replacement parameter set; the service does not merge per key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
}

impl ProjectUpdate {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the parameter set wholesale.
    #[must_use]
    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = Some(parameters);
        self
    }
}

#[derive(Debug, Deserialize)]
struct ProjectsResponse {
    projects: Vec<Project>,
}

/// Client for the project resource family.
#[derive(Debug, Clone)]
pub struct ProjectClient {
    transport: ApiTransport,
}

impl ProjectClient {
    /// Creates a project client over the shared transport.
    #[must_use]
    pub fn new(transport: &ApiTransport) -> Self {
        Self {
            transport: transport.clone(),
        }
    }

    /// Creates a new project and returns it with its server-assigned id.
    ///
    /// # Errors
    /// Returns a validation error if the name is already in use or the
    /// service rejects the request.
    pub async fn create(&self, name: &str, language: Language) -> Result<Project> {
        #[derive(Serialize)]
        struct Params<'a> {
            name: &'a str,
            language: Language,
        }

        let response: ProjectsResponse = self
            .transport
            .invoke("projects/create", &Params { name, language })
            .await?;

        response.projects.into_iter().next().ok_or_else(|| {
            ApiError::Validation("projects/create: response contained no project".to_string())
        })
    }

    /// Retrieves a single project by id.
    ///
    /// # Errors
    /// Returns a not-found error if the id does not exist or the project
    /// was deleted.
    pub async fn get(&self, project_id: i64) -> Result<Project> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params {
            project_id: i64,
        }

        let response: ProjectsResponse = self
            .transport
            .invoke("projects/read", &Params { project_id })
            .await
            .map_err(|e| retag_not_found(e, "project", project_id.to_string()))?;

        response
            .projects
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::not_found("project", project_id.to_string()))
    }

    /// Retrieves all projects, in server-defined order.
    ///
    /// # Errors
    /// Returns an error if the API call fails.
    pub async fn get_all(&self) -> Result<Vec<Project>> {
        let response: ProjectsResponse = self
            .transport
            .invoke("projects/read", &serde_json::json!({}))
            .await?;
        Ok(response.projects)
    }

    /// Applies a partial patch to a project. Callers re-fetch to observe
    /// the new state.
    ///
    /// # Errors
    /// Returns a not-found error for an unknown id; a validation error if
    /// the service rejects a field.
    pub async fn update(&self, project_id: i64, update: ProjectUpdate) -> Result<()> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params {
            project_id: i64,
            #[serde(flatten)]
            update: ProjectUpdate,
        }

        self.transport
            .invoke::<EmptyResponse>("projects/update", &Params { project_id, update })
            .await
            .map_err(|e| retag_not_found(e, "project", project_id.to_string()))?;
        Ok(())
    }

    /// Deletes a project. Not idempotent: deleting an already-deleted id
    /// raises whatever the service returns.
    ///
    /// # Errors
    /// Returns a not-found error for an unknown or already-deleted id.
    pub async fn delete(&self, project_id: i64) -> Result<()> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params {
            project_id: i64,
        }

        self.transport
            .invoke::<EmptyResponse>("projects/delete", &Params { project_id })
            .await
            .map_err(|e| retag_not_found(e, "project", project_id.to_string()))?;
        Ok(())
    }

    // =========================================================================
    // Library Relationships
    // =========================================================================

    /// Adds another project to this project's library set. Not
    /// transactional with other project fields; self-reference is left to
    /// the service to accept or reject.
    ///
    /// # Errors
    /// Returns an error if either id is unknown or the service rejects
    /// the reference.
    pub async fn add_library(&self, project_id: i64, library_id: i64) -> Result<()> {
        self.mutate_library("projects/library/create", project_id, library_id)
            .await
    }

    /// Removes a project from this project's library set.
    ///
    /// # Errors
    /// Returns an error if either id is unknown.
    pub async fn delete_library(&self, project_id: i64, library_id: i64) -> Result<()> {
        self.mutate_library("projects/library/delete", project_id, library_id)
            .await
    }

    async fn mutate_library(
        &self,
        operation: &str,
        project_id: i64,
        library_id: i64,
    ) -> Result<()> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params {
            project_id: i64,
            library_id: i64,
        }

        self.transport
            .invoke::<EmptyResponse>(
                operation,
                &Params {
                    project_id,
                    library_id,
                },
            )
            .await
            .map_err(|e| retag_not_found(e, "project", project_id.to_string()))?;
        Ok(())
    }
}
