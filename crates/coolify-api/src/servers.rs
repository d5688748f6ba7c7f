//! Servers namespace: registration, inspection, validation.

use std::sync::Arc;

use log::debug;
use serde_json::{json, Value};

use coolify_core::{merge_payload, MessageResponse, Server, UuidResponse};

use crate::errors::Result;
use crate::http::HttpClient;

/// Client for the servers endpoints.
#[derive(Debug, Clone)]
pub struct Servers {
    http: Arc<HttpClient>,
}

impl Servers {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// List all servers.
    pub async fn list(&self) -> Result<Vec<Server>> {
        debug!("Listing all servers");
        let value = self.http.get("servers", &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Get one server by UUID.
    pub async fn get(&self, uuid: &str) -> Result<Server> {
        debug!("Getting server with uuid: {}", uuid);
        let value = self.http.get(&format!("servers/{uuid}"), &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Register a new server reachable over SSH with the given key. Optional
    /// fields (description, proxy type, build-server flag...) go in `extra`.
    pub async fn create(
        &self,
        name: &str,
        ip: &str,
        port: u16,
        user: &str,
        private_key_uuid: &str,
        extra: Option<Value>,
    ) -> Result<UuidResponse> {
        let base = json!({
            "name": name,
            "ip": ip,
            "port": port,
            "user": user,
            "private_key_uuid": private_key_uuid,
        });
        let payload = merge_payload(base, extra)?;
        debug!("Creating a new server: {}", name);
        let value = self.http.post("servers", &[], Some(&payload)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Patch server settings.
    pub async fn update(&self, uuid: &str, data: Value) -> Result<Value> {
        debug!("Updating server with uuid: {}", uuid);
        self.http
            .patch(&format!("servers/{uuid}"), &[], Some(&data))
            .await
    }

    /// Delete a server.
    pub async fn delete(&self, uuid: &str) -> Result<MessageResponse> {
        debug!("Deleting server with uuid: {}", uuid);
        let value = self.http.delete(&format!("servers/{uuid}"), &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// List everything deployed on a server.
    pub async fn resources(&self, uuid: &str) -> Result<Value> {
        debug!("Getting resources of server with uuid: {}", uuid);
        self.http
            .get(&format!("servers/{uuid}/resources"), &[])
            .await
    }

    /// List the domains served from a server, grouped by IP.
    pub async fn domains(&self, uuid: &str) -> Result<Value> {
        debug!("Getting domains of server with uuid: {}", uuid);
        self.http.get(&format!("servers/{uuid}/domains"), &[]).await
    }

    /// Kick off server validation (connectivity, docker engine, ...).
    pub async fn validate(&self, uuid: &str) -> Result<MessageResponse> {
        debug!("Validating server with uuid: {}", uuid);
        let value = self
            .http
            .post(&format!("servers/{uuid}/validate"), &[], None)
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
