//! Databases namespace: listing, settings, lifecycle.
//!
//! Engine-specific creation lives in [`crate::databases_create`].

use std::sync::Arc;

use log::debug;
use serde_json::Value;

use coolify_core::{Database, MessageResponse};

use crate::control::{DeleteOptions, ResourceControl, ResourceKind};
use crate::databases_create::DatabaseCreate;
use crate::errors::Result;
use crate::http::HttpClient;

/// Client for the databases endpoints.
#[derive(Debug, Clone)]
pub struct Databases {
    http: Arc<HttpClient>,
    control: ResourceControl,
    /// Engine-specific database creation (postgresql, redis, ...).
    pub create: DatabaseCreate,
}

impl Databases {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self {
            control: ResourceControl::new(http.clone(), ResourceKind::Databases),
            create: DatabaseCreate::new(http.clone()),
            http,
        }
    }

    /// List all databases.
    pub async fn list(&self) -> Result<Vec<Database>> {
        debug!("Listing all databases");
        let value = self.http.get("databases", &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Get one database by UUID.
    pub async fn get(&self, uuid: &str) -> Result<Database> {
        debug!("Getting database with uuid: {}", uuid);
        let value = self.http.get(&format!("databases/{uuid}"), &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Patch database settings (name, image, public port, engine-specific
    /// fields like `postgres_user`).
    pub async fn update(&self, uuid: &str, data: Value) -> Result<Value> {
        debug!("Updating database with uuid: {}", uuid);
        self.http
            .patch(&format!("databases/{uuid}"), &[], Some(&data))
            .await
    }

    /// Delete a database.
    pub async fn delete(&self, uuid: &str, opts: DeleteOptions) -> Result<MessageResponse> {
        debug!("Deleting database with uuid: {}", uuid);
        let value = self
            .http
            .delete(&format!("databases/{uuid}"), &opts.query())
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Start a database.
    pub async fn start(&self, uuid: &str) -> Result<Value> {
        self.control.start(uuid, false, false).await
    }

    /// Stop a database.
    pub async fn stop(&self, uuid: &str) -> Result<Value> {
        self.control.stop(uuid).await
    }

    /// Restart a database.
    pub async fn restart(&self, uuid: &str) -> Result<Value> {
        self.control.restart(uuid).await
    }
}
