//! Instance-wide resource listing.

use std::sync::Arc;

use log::debug;
use serde_json::Value;

use crate::errors::Result;
use crate::http::HttpClient;

/// Client for the resources endpoint. The response mixes every resource type
/// of the instance, so it is passed through untyped.
#[derive(Debug, Clone)]
pub struct Resources {
    http: Arc<HttpClient>,
}

impl Resources {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// List all resources in the instance.
    pub async fn list(&self) -> Result<Value> {
        debug!("Listing all resources");
        self.http.get("resources", &[]).await
    }
}
