//! Shared lifecycle control (start/stop/restart) and delete options.
//!
//! Applications, databases and services expose the same lifecycle endpoints;
//! this module holds the one implementation, parameterised by resource kind.

use std::sync::Arc;

use log::debug;
use serde_json::Value;

use crate::errors::Result;
use crate::http::HttpClient;

/// Resource families that share lifecycle and env-var endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Applications,
    Databases,
    Services,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Applications => "applications",
            ResourceKind::Databases => "databases",
            ResourceKind::Services => "services",
        }
    }
}

/// Query flags accepted by the delete endpoints. All default to `true`,
/// matching the API defaults.
#[derive(Debug, Clone, Copy)]
pub struct DeleteOptions {
    pub delete_configurations: bool,
    pub delete_volumes: bool,
    pub docker_cleanup: bool,
    pub delete_connected_networks: bool,
}

impl Default for DeleteOptions {
    fn default() -> Self {
        Self {
            delete_configurations: true,
            delete_volumes: true,
            docker_cleanup: true,
            delete_connected_networks: true,
        }
    }
}

impl DeleteOptions {
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("delete_configurations", self.delete_configurations.to_string()),
            ("delete_volumes", self.delete_volumes.to_string()),
            ("docker_cleanup", self.docker_cleanup.to_string()),
            (
                "delete_connected_networks",
                self.delete_connected_networks.to_string(),
            ),
        ]
    }
}

/// Start/stop/restart dispatch for one resource kind.
#[derive(Debug, Clone)]
pub(crate) struct ResourceControl {
    http: Arc<HttpClient>,
    kind: ResourceKind,
}

impl ResourceControl {
    pub(crate) fn new(http: Arc<HttpClient>, kind: ResourceKind) -> Self {
        Self { http, kind }
    }

    /// Start a resource. `force` and `instant_deploy` are only meaningful for
    /// applications and are sent only for them.
    pub(crate) async fn start(
        &self,
        uuid: &str,
        force: bool,
        instant_deploy: bool,
    ) -> Result<Value> {
        debug!("Starting {} with uuid: {}", self.kind.as_str(), uuid);
        let endpoint = format!("{}/{}/start", self.kind.as_str(), uuid);
        let query = if self.kind == ResourceKind::Applications {
            vec![
                ("force", force.to_string()),
                ("instant_deploy", instant_deploy.to_string()),
            ]
        } else {
            Vec::new()
        };
        self.http.get(&endpoint, &query).await
    }

    pub(crate) async fn stop(&self, uuid: &str) -> Result<Value> {
        debug!("Stopping {} with uuid: {}", self.kind.as_str(), uuid);
        let endpoint = format!("{}/{}/stop", self.kind.as_str(), uuid);
        self.http.get(&endpoint, &[]).await
    }

    pub(crate) async fn restart(&self, uuid: &str) -> Result<Value> {
        debug!("Restarting {} with uuid: {}", self.kind.as_str(), uuid);
        let endpoint = format!("{}/{}/restart", self.kind.as_str(), uuid);
        self.http.get(&endpoint, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_options_default_to_all_true() {
        let opts = DeleteOptions::default();
        let query = opts.query();
        assert_eq!(query.len(), 4);
        assert!(query.iter().all(|(_, v)| v == "true"));
    }

    #[test]
    fn delete_options_serialize_individual_flags() {
        let opts = DeleteOptions {
            delete_volumes: false,
            ..Default::default()
        };
        let query = opts.query();
        assert!(query.contains(&("delete_volumes", "false".to_string())));
        assert!(query.contains(&("docker_cleanup", "true".to_string())));
    }

    #[test]
    fn resource_kinds_match_endpoint_segments() {
        assert_eq!(ResourceKind::Applications.as_str(), "applications");
        assert_eq!(ResourceKind::Databases.as_str(), "databases");
        assert_eq!(ResourceKind::Services.as_str(), "services");
    }
}
