//! Applications namespace: listing, settings, lifecycle, command execution.
//!
//! Creation lives in [`crate::applications_create`], environment variables in
//! [`crate::envs`].

use std::sync::Arc;

use log::debug;
use serde_json::{json, Value};

use coolify_core::{Application, MessageResponse};

use crate::applications_create::ApplicationCreate;
use crate::control::{DeleteOptions, ResourceControl, ResourceKind};
use crate::envs::Envs;
use crate::errors::Result;
use crate::http::HttpClient;

/// Client for the applications endpoints.
#[derive(Debug, Clone)]
pub struct Applications {
    http: Arc<HttpClient>,
    control: ResourceControl,
    /// Application creation variants (public repo, deploy key, dockerfile...).
    pub create: ApplicationCreate,
    /// Environment variable management for applications.
    pub envs: Envs,
}

impl Applications {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self {
            control: ResourceControl::new(http.clone(), ResourceKind::Applications),
            create: ApplicationCreate::new(http.clone()),
            envs: Envs::new(http.clone(), ResourceKind::Applications),
            http,
        }
    }

    /// List all applications visible to the token's team.
    pub async fn list(&self) -> Result<Vec<Application>> {
        debug!("Listing all applications");
        let value = self.http.get("applications", &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Get one application by UUID.
    pub async fn get(&self, uuid: &str) -> Result<Application> {
        debug!("Getting application with uuid: {}", uuid);
        let value = self
            .http
            .get(&format!("applications/{uuid}"), &[])
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Patch application settings. `data` carries the fields to change
    /// (domains, build commands, limits, ...).
    pub async fn update(&self, uuid: &str, data: Value) -> Result<Value> {
        debug!("Updating application with uuid: {}", uuid);
        self.http
            .patch(&format!("applications/{uuid}"), &[], Some(&data))
            .await
    }

    /// Delete an application and, per `opts`, its configuration, volumes,
    /// networks and leftover containers.
    pub async fn delete(&self, uuid: &str, opts: DeleteOptions) -> Result<MessageResponse> {
        debug!("Deleting application with uuid: {}", uuid);
        let value = self
            .http
            .delete(&format!("applications/{uuid}"), &opts.query())
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Start (deploy) an application. `force` rebuilds without cache,
    /// `instant_deploy` skips the queue.
    pub async fn start(&self, uuid: &str, force: bool, instant_deploy: bool) -> Result<Value> {
        self.control.start(uuid, force, instant_deploy).await
    }

    /// Stop an application.
    pub async fn stop(&self, uuid: &str) -> Result<Value> {
        self.control.stop(uuid).await
    }

    /// Restart an application; returns the queued deployment details.
    pub async fn restart(&self, uuid: &str) -> Result<Value> {
        self.control.restart(uuid).await
    }

    /// Execute a command inside the application's container.
    pub async fn execute_command(&self, uuid: &str, command: &str) -> Result<Value> {
        debug!("Executing command on application with uuid: {}", uuid);
        let body = json!({ "command": command });
        self.http
            .post(&format!("applications/{uuid}/execute"), &[], Some(&body))
            .await
    }
}
