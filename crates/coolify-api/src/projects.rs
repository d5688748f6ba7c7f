//! Projects namespace, including single-environment lookup.

use std::sync::Arc;

use log::debug;
use serde_json::Value;

use coolify_core::{EnvSelector, Environment, MessageResponse, Project, UuidResponse};

use crate::errors::Result;
use crate::http::HttpClient;

/// Client for the projects endpoints.
#[derive(Debug, Clone)]
pub struct Projects {
    http: Arc<HttpClient>,
}

impl Projects {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// List all projects with their environments.
    pub async fn list(&self) -> Result<Vec<Project>> {
        debug!("Listing all projects");
        let value = self.http.get("projects", &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Get one project by UUID.
    pub async fn get(&self, uuid: &str) -> Result<Project> {
        debug!("Getting project with uuid: {}", uuid);
        let value = self.http.get(&format!("projects/{uuid}"), &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Create a project. `data` must contain `name`; `description` is
    /// optional.
    pub async fn create(&self, data: Value) -> Result<UuidResponse> {
        debug!("Creating a new project");
        let value = self.http.post("projects", &[], Some(&data)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Patch project name or description.
    pub async fn update(&self, uuid: &str, data: Value) -> Result<Value> {
        debug!("Updating project with uuid: {}", uuid);
        self.http
            .patch(&format!("projects/{uuid}"), &[], Some(&data))
            .await
    }

    /// Delete a project.
    pub async fn delete(&self, uuid: &str) -> Result<MessageResponse> {
        debug!("Deleting project with uuid: {}", uuid);
        let value = self.http.delete(&format!("projects/{uuid}"), &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Get one environment of a project by its name or UUID.
    pub async fn environment(&self, project_uuid: &str, env: EnvSelector) -> Result<Environment> {
        let (_, selector) = env.field();
        debug!(
            "Getting environment {} for project: {}",
            selector, project_uuid
        );
        let value = self
            .http
            .get(&format!("projects/{project_uuid}/{selector}"), &[])
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
