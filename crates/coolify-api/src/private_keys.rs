//! Private keys namespace, served under the `security/keys` endpoints.

use std::sync::Arc;

use log::debug;
use serde_json::Value;

use coolify_core::{MessageResponse, PrivateKey, UuidResponse};

use crate::errors::Result;
use crate::http::HttpClient;

/// Client for the SSH private key endpoints.
#[derive(Debug, Clone)]
pub struct PrivateKeys {
    http: Arc<HttpClient>,
}

impl PrivateKeys {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// List all private keys.
    pub async fn list(&self) -> Result<Vec<PrivateKey>> {
        debug!("Listing all private keys");
        let value = self.http.get("security/keys", &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Get one private key by UUID.
    pub async fn get(&self, uuid: &str) -> Result<PrivateKey> {
        debug!("Getting private key with uuid: {}", uuid);
        let value = self
            .http
            .get(&format!("security/keys/{uuid}"), &[])
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Store a new private key. `data` must contain `private_key`; `name`
    /// and `description` are optional.
    pub async fn create(&self, data: Value) -> Result<UuidResponse> {
        debug!("Creating a new private key");
        let value = self.http.post("security/keys", &[], Some(&data)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Patch a private key.
    pub async fn update(&self, uuid: &str, data: Value) -> Result<Value> {
        debug!("Updating private key with uuid: {}", uuid);
        self.http
            .patch(&format!("security/keys/{uuid}"), &[], Some(&data))
            .await
    }

    /// Delete a private key.
    pub async fn delete(&self, uuid: &str) -> Result<MessageResponse> {
        debug!("Deleting private key with uuid: {}", uuid);
        let value = self
            .http
            .delete(&format!("security/keys/{uuid}"), &[])
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
