//! Environment variable management, shared by applications and services.

use std::sync::Arc;

use log::debug;
use serde_json::Value;

use coolify_core::{EnvironmentVariable, MessageResponse, UuidResponse};

use crate::control::ResourceKind;
use crate::errors::Result;
use crate::http::HttpClient;

/// Env-var CRUD for one resource kind, exposed as the `envs` field of the
/// owning namespace.
#[derive(Debug, Clone)]
pub struct Envs {
    http: Arc<HttpClient>,
    kind: ResourceKind,
}

impl Envs {
    pub(crate) fn new(http: Arc<HttpClient>, kind: ResourceKind) -> Self {
        Self { http, kind }
    }

    fn endpoint(&self, resource_uuid: &str) -> String {
        format!("{}/{}/envs", self.kind.as_str(), resource_uuid)
    }

    /// List all environment variables of a resource.
    pub async fn list(&self, resource_uuid: &str) -> Result<Vec<EnvironmentVariable>> {
        debug!(
            "Listing env vars for {} uuid: {}",
            self.kind.as_str(),
            resource_uuid
        );
        let value = self.http.get(&self.endpoint(resource_uuid), &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Create a variable. `data` must contain `key` and `value`; `is_secret`
    /// and friends are optional.
    pub async fn create(&self, resource_uuid: &str, data: Value) -> Result<UuidResponse> {
        debug!(
            "Creating env var for {} uuid: {}",
            self.kind.as_str(),
            resource_uuid
        );
        let value = self
            .http
            .post(&self.endpoint(resource_uuid), &[], Some(&data))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Update a single variable.
    pub async fn update(&self, resource_uuid: &str, data: Value) -> Result<Value> {
        debug!(
            "Updating env var for {} uuid: {}",
            self.kind.as_str(),
            resource_uuid
        );
        self.http
            .patch(&self.endpoint(resource_uuid), &[], Some(&data))
            .await
    }

    /// Update several variables in one request.
    pub async fn update_bulk(&self, resource_uuid: &str, data: Vec<Value>) -> Result<Value> {
        debug!(
            "Bulk updating env vars for {} uuid: {}",
            self.kind.as_str(),
            resource_uuid
        );
        let body = Value::Array(data);
        self.http
            .patch(&self.endpoint(resource_uuid), &[], Some(&body))
            .await
    }

    /// Delete a variable by its UUID.
    pub async fn delete(
        &self,
        resource_uuid: &str,
        variable_uuid: &str,
    ) -> Result<MessageResponse> {
        debug!(
            "Deleting env var {} for {} uuid: {}",
            variable_uuid,
            self.kind.as_str(),
            resource_uuid
        );
        let endpoint = format!("{}/{}", self.endpoint(resource_uuid), variable_uuid);
        let value = self.http.delete(&endpoint, &[]).await?;
        Ok(serde_json::from_value(value)?)
    }
}
