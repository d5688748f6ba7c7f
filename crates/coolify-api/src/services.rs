//! Services namespace: one-click service lifecycle and configuration.

use std::sync::Arc;

use log::debug;
use serde_json::{json, Value};

use coolify_core::{merge_payload, MessageResponse, Service, ServiceCreated};

use crate::control::{DeleteOptions, ResourceControl, ResourceKind};
use crate::envs::Envs;
use crate::errors::Result;
use crate::http::HttpClient;

/// Client for the services endpoints.
#[derive(Debug, Clone)]
pub struct Services {
    http: Arc<HttpClient>,
    control: ResourceControl,
    /// Environment variable management for services.
    pub envs: Envs,
}

impl Services {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self {
            control: ResourceControl::new(http.clone(), ResourceKind::Services),
            envs: Envs::new(http.clone(), ResourceKind::Services),
            http,
        }
    }

    /// List all services.
    pub async fn list(&self) -> Result<Vec<Service>> {
        debug!("Listing all services");
        let value = self.http.get("services", &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Get one service by UUID.
    pub async fn get(&self, uuid: &str) -> Result<Service> {
        debug!("Getting service with uuid: {}", uuid);
        let value = self.http.get(&format!("services/{uuid}"), &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Create a service of the given type (redis, plausible, ...) in a
    /// project environment on a server.
    pub async fn create(
        &self,
        service_type: &str,
        name: &str,
        project_uuid: &str,
        environment_name: &str,
        server_uuid: &str,
        extra: Option<Value>,
    ) -> Result<ServiceCreated> {
        let base = json!({
            "type": service_type,
            "name": name,
            "project_uuid": project_uuid,
            "environment_name": environment_name,
            "server_uuid": server_uuid,
        });
        let payload = merge_payload(base, extra)?;
        debug!("Creating a new service of type: {}", service_type);
        let value = self.http.post("services", &[], Some(&payload)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Patch service settings.
    pub async fn update(&self, uuid: &str, data: Value) -> Result<Value> {
        debug!("Updating service with uuid: {}", uuid);
        self.http
            .patch(&format!("services/{uuid}"), &[], Some(&data))
            .await
    }

    /// Delete a service.
    pub async fn delete(&self, uuid: &str, opts: DeleteOptions) -> Result<MessageResponse> {
        debug!("Deleting service with uuid: {}", uuid);
        let value = self
            .http
            .delete(&format!("services/{uuid}"), &opts.query())
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Start a service.
    pub async fn start(&self, uuid: &str) -> Result<Value> {
        self.control.start(uuid, false, false).await
    }

    /// Stop a service.
    pub async fn stop(&self, uuid: &str) -> Result<Value> {
        self.control.stop(uuid).await
    }

    /// Restart a service.
    pub async fn restart(&self, uuid: &str) -> Result<Value> {
        self.control.restart(uuid).await
    }
}
