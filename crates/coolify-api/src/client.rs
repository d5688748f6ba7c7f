//! Client facade and configuration.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error};
use reqwest::Client;

use crate::applications::Applications;
use crate::databases::Databases;
use crate::deployments::Deployments;
use crate::errors::{ApiError, Result};
use crate::http::{mask_key, HttpClient};
use crate::operations::Operations;
use crate::private_keys::PrivateKeys;
use crate::projects::Projects;
use crate::resources::Resources;
use crate::servers::Servers;
use crate::services::Services;
use crate::teams::Teams;

/// Default base URL of the hosted platform.
pub const DEFAULT_BASE_URL: &str = "https://app.coolify.io";

/// Default client-side request rate.
pub const DEFAULT_REQUESTS_PER_SECOND: f64 = 3.3;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client configuration.
///
/// Every field except the API key has a default; `from_env` reads all of
/// them from the environment.
#[derive(Debug, Clone)]
pub struct CoolifyConfig {
    pub base_url: String,
    pub api_key: String,
    pub requests_per_second: f64,
    pub timeout: Duration,
}

impl CoolifyConfig {
    /// Configuration for the hosted platform with default rate and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            requests_per_second: DEFAULT_REQUESTS_PER_SECOND,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// As [`CoolifyConfig::new`] with a self-hosted instance URL.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::new(api_key)
        }
    }

    /// Read the configuration from the environment:
    /// `COOLIFY_API_KEY` (required), `COOLIFY_API_URL`,
    /// `COOLIFY_REQUESTS_PER_SECOND`, `COOLIFY_REQUESTS_TIMEOUT` (seconds).
    pub fn from_env() -> Result<Self> {
        debug!("Reading client configuration from environment");
        let api_key = std::env::var("COOLIFY_API_KEY").map_err(|_| {
            error!("COOLIFY_API_KEY environment variable not set");
            ApiError::Config("COOLIFY_API_KEY environment variable not set".to_string())
        })?;

        let mut config = Self::new(api_key);
        if let Ok(url) = std::env::var("COOLIFY_API_URL") {
            config.base_url = url;
        }
        if let Ok(rate) = std::env::var("COOLIFY_REQUESTS_PER_SECOND") {
            config.requests_per_second = rate.parse().map_err(|_| {
                ApiError::Config(format!("Invalid COOLIFY_REQUESTS_PER_SECOND: {rate}"))
            })?;
        }
        if let Ok(timeout) = std::env::var("COOLIFY_REQUESTS_TIMEOUT") {
            let secs: u64 = timeout.parse().map_err(|_| {
                ApiError::Config(format!("Invalid COOLIFY_REQUESTS_TIMEOUT: {timeout}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}

/// Main entry point: one namespace per resource family, all sharing one
/// rate-limited HTTP dispatch layer.
#[derive(Debug, Clone)]
pub struct CoolifyClient {
    http: Arc<HttpClient>,
    /// Client for the applications API.
    pub applications: Applications,
    /// Client for the databases API.
    pub databases: Databases,
    /// Client for the services API.
    pub services: Services,
    /// Client for the deployments API.
    pub deployments: Deployments,
    /// Client for the projects API.
    pub projects: Projects,
    /// Client for the servers API.
    pub servers: Servers,
    /// Client for the teams API.
    pub teams: Teams,
    /// Client for the instance-wide resources API.
    pub resources: Resources,
    /// Client for the private keys API.
    pub private_keys: PrivateKeys,
    /// Client for instance-level operations.
    pub operations: Operations,
}

impl CoolifyClient {
    /// Build a client from a configuration. Fails when the API key is empty
    /// or the underlying HTTP client cannot be constructed.
    pub fn new(config: CoolifyConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(ApiError::Config(
                "API key must be provided either as argument or COOLIFY_API_KEY env var"
                    .to_string(),
            ));
        }

        debug!("Creating CoolifyClient");
        debug!("  API Key: {}", mask_key(&config.api_key));
        debug!("  Base URL: {}", config.base_url);

        let client = Client::builder().timeout(config.timeout).build()?;
        let http = Arc::new(HttpClient::new(
            client,
            config.base_url,
            config.api_key,
            config.requests_per_second,
        ));

        Ok(Self {
            applications: Applications::new(http.clone()),
            databases: Databases::new(http.clone()),
            services: Services::new(http.clone()),
            deployments: Deployments::new(http.clone()),
            projects: Projects::new(http.clone()),
            servers: Servers::new(http.clone()),
            teams: Teams::new(http.clone()),
            resources: Resources::new(http.clone()),
            private_keys: PrivateKeys::new(http.clone()),
            operations: Operations::new(http.clone()),
            http,
        })
    }

    /// Build a client from the environment (see [`CoolifyConfig::from_env`]).
    pub fn from_env() -> Result<Self> {
        Self::new(CoolifyConfig::from_env()?)
    }

    /// Build a client for the hosted platform from an API key.
    pub fn from_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::new(CoolifyConfig::new(api_key))
    }

    pub(crate) fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_is_rejected_at_construction() {
        let err = CoolifyClient::new(CoolifyConfig::new("")).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn config_defaults() {
        let config = CoolifyConfig::new("key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.requests_per_second, DEFAULT_REQUESTS_PER_SECOND);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn with_base_url_overrides_only_the_url() {
        let config = CoolifyConfig::with_base_url("key", "https://coolify.example.com");
        assert_eq!(config.base_url, "https://coolify.example.com");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.requests_per_second, DEFAULT_REQUESTS_PER_SECOND);
    }

    #[test]
    fn client_exposes_all_namespaces() {
        // Construction wires every namespace to the shared dispatch layer.
        let client = CoolifyClient::from_api_key("test-key").unwrap();
        let _ = &client.applications.create;
        let _ = &client.applications.envs;
        let _ = &client.databases.create;
        let _ = &client.services.envs;
    }
}
