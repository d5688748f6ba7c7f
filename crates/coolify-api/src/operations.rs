//! Instance-level operations: version, health, API toggle.

use std::sync::Arc;

use log::debug;
use serde_json::Value;

use coolify_core::MessageResponse;

use crate::errors::Result;
use crate::http::HttpClient;

/// Client for instance-level operation endpoints.
#[derive(Debug, Clone)]
pub struct Operations {
    http: Arc<HttpClient>,
}

impl Operations {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Get the instance version, e.g. `v4.0.0`. The endpoint answers in
    /// plain text.
    pub async fn version(&self) -> Result<String> {
        debug!("Getting version");
        let value = self.http.get("version", &[]).await?;
        Ok(as_text(value))
    }

    /// Enable the API. Requires root permissions on the instance.
    pub async fn enable_api(&self) -> Result<MessageResponse> {
        debug!("Enabling API");
        let value = self.http.get("enable", &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Disable the API. Requires root permissions on the instance.
    pub async fn disable_api(&self) -> Result<MessageResponse> {
        debug!("Disabling API");
        let value = self.http.get("disable", &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Check instance health; returns `OK` when healthy.
    pub async fn health_check(&self) -> Result<String> {
        debug!("Checking health");
        let value = self.http.get("health", &[]).await?;
        Ok(as_text(value))
    }
}

fn as_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn as_text_unwraps_strings() {
        assert_eq!(as_text(json!("v4.0.0")), "v4.0.0");
    }

    #[test]
    fn as_text_stringifies_other_values() {
        assert_eq!(as_text(json!({"status": "OK"})), r#"{"status":"OK"}"#);
    }
}
