//! File client: per-project source file CRUD.
//!
//! Files are identified by project id + name; their lifecycle is
//! independent of the project's other fields.

use crate::clients::retag_not_found;
use crate::error::{ApiError, Result};
use crate::models::ProjectFile;
use crate::transport::{ApiTransport, EmptyResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct FilesResponse {
    files: Vec<ProjectFile>,
}

/// Client for the file resource family.
#[derive(Debug, Clone)]
pub struct FileClient {
    transport: ApiTransport,
}

impl FileClient {
    /// Creates a file client over the shared transport.
    #[must_use]
    pub fn new(transport: &ApiTransport) -> Self {
        Self {
            transport: transport.clone(),
        }
    }

    /// Creates a file with the given content inside a project.
    ///
    /// # Errors
    /// Returns a validation error if the name is already taken in the
    /// project, a not-found error if the project id is unknown.
    pub async fn create(&self, project_id: i64, name: &str, content: &str) -> Result<ProjectFile> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params<'a> {
            project_id: i64,
            name: &'a str,
            content: &'a str,
        }

        let response: FilesResponse = self
            .transport
            .invoke(
                "files/create",
                &Params {
                    project_id,
                    name,
                    content,
                },
            )
            .await
            .map_err(|e| retag_not_found(e, "project", project_id.to_string()))?;

        response.files.into_iter().next().ok_or_else(|| {
            ApiError::Validation("files/create: response contained no file".to_string())
        })
    }

    /// Retrieves a single file by name.
    ///
    /// # Errors
    /// Returns a not-found error if the file does not exist in the
    /// project.
    pub async fn get(&self, project_id: i64, name: &str) -> Result<ProjectFile> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params<'a> {
            project_id: i64,
            name: &'a str,
        }

        let response: FilesResponse = self
            .transport
            .invoke("files/read", &Params { project_id, name })
            .await
            .map_err(|e| retag_not_found(e, "file", name))?;

        response
            .files
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::not_found("file", name))
    }

    /// Retrieves all files of a project, in server-defined order.
    ///
    /// # Errors
    /// Returns a not-found error if the project id is unknown.
    pub async fn get_all(&self, project_id: i64) -> Result<Vec<ProjectFile>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params {
            project_id: i64,
        }

        let response: FilesResponse = self
            .transport
            .invoke("files/read", &Params { project_id })
            .await
            .map_err(|e| retag_not_found(e, "project", project_id.to_string()))?;
        Ok(response.files)
    }

    /// Overwrites a file's content.
    ///
    /// # Errors
    /// Returns a not-found error if the file does not exist.
    pub async fn update(&self, project_id: i64, name: &str, content: &str) -> Result<()> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params<'a> {
            project_id: i64,
            name: &'a str,
            content: &'a str,
        }

        self.transport
            .invoke::<EmptyResponse>(
                "files/update",
                &Params {
                    project_id,
                    name,
                    content,
                },
            )
            .await
            .map_err(|e| retag_not_found(e, "file", name))?;
        Ok(())
    }

    /// Deletes a file. Not idempotent: a second delete raises whatever
    /// the service returns.
    ///
    /// # Errors
    /// Returns a not-found error if the file does not exist.
    pub async fn delete(&self, project_id: i64, name: &str) -> Result<()> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params<'a> {
            project_id: i64,
            name: &'a str,
        }

        self.transport
            .invoke::<EmptyResponse>("files/delete", &Params { project_id, name })
            .await
            .map_err(|e| retag_not_found(e, "file", name))?;
        Ok(())
    }
}
