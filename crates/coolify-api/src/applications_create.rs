//! Application creation variants.
//!
//! Each variant posts to its own endpoint and takes the handful of required
//! fields as arguments; the long tail of optional fields (build pack, health
//! checks, limits, webhooks...) goes in `extra` as a JSON object.

use std::sync::Arc;

use log::debug;
use serde_json::{json, Value};

use coolify_core::{merge_payload, EnvSelector, UuidResponse};

use crate::errors::Result;
use crate::http::HttpClient;

/// Creation endpoints of the applications namespace.
#[derive(Debug, Clone)]
pub struct ApplicationCreate {
    http: Arc<HttpClient>,
}

impl ApplicationCreate {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    async fn create(
        &self,
        endpoint: &str,
        base: Value,
        env: EnvSelector,
        extra: Option<Value>,
    ) -> Result<UuidResponse> {
        let mut payload = merge_payload(base, extra)?;
        if let Value::Object(ref mut map) = payload {
            env.apply(map);
        }
        debug!("Creating application via {}", endpoint);
        let value = self.http.post(endpoint, &[], Some(&payload)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Create an application from a public Git repository.
    #[allow(clippy::too_many_arguments)]
    pub async fn public(
        &self,
        project_uuid: &str,
        server_uuid: &str,
        git_repository: &str,
        git_branch: &str,
        ports_exposes: &str,
        env: EnvSelector,
        extra: Option<Value>,
    ) -> Result<UuidResponse> {
        let base = json!({
            "project_uuid": project_uuid,
            "server_uuid": server_uuid,
            "git_repository": git_repository,
            "git_branch": git_branch,
            "ports_exposes": ports_exposes,
        });
        self.create("applications/public", base, env, extra).await
    }

    /// Create an application from a private repository accessed through a
    /// GitHub App installation.
    #[allow(clippy::too_many_arguments)]
    pub async fn private_github_app(
        &self,
        project_uuid: &str,
        server_uuid: &str,
        github_app_uuid: &str,
        git_repository: &str,
        git_branch: &str,
        ports_exposes: &str,
        env: EnvSelector,
        extra: Option<Value>,
    ) -> Result<UuidResponse> {
        let base = json!({
            "project_uuid": project_uuid,
            "server_uuid": server_uuid,
            "github_app_uuid": github_app_uuid,
            "git_repository": git_repository,
            "git_branch": git_branch,
            "ports_exposes": ports_exposes,
        });
        self.create("applications/private-github-app", base, env, extra)
            .await
    }

    /// Create an application from a private repository accessed with a deploy
    /// key.
    #[allow(clippy::too_many_arguments)]
    pub async fn private_deploy_key(
        &self,
        project_uuid: &str,
        server_uuid: &str,
        private_key_uuid: &str,
        git_repository: &str,
        git_branch: &str,
        ports_exposes: &str,
        env: EnvSelector,
        extra: Option<Value>,
    ) -> Result<UuidResponse> {
        let base = json!({
            "project_uuid": project_uuid,
            "server_uuid": server_uuid,
            "private_key_uuid": private_key_uuid,
            "git_repository": git_repository,
            "git_branch": git_branch,
            "ports_exposes": ports_exposes,
        });
        self.create("applications/private-deploy-key", base, env, extra)
            .await
    }

    /// Create an application from raw Dockerfile content.
    pub async fn dockerfile(
        &self,
        project_uuid: &str,
        server_uuid: &str,
        dockerfile: &str,
        env: EnvSelector,
        extra: Option<Value>,
    ) -> Result<UuidResponse> {
        let base = json!({
            "project_uuid": project_uuid,
            "server_uuid": server_uuid,
            "dockerfile": dockerfile,
        });
        self.create("applications/dockerfile", base, env, extra)
            .await
    }

    /// Create an application from a registry image.
    #[allow(clippy::too_many_arguments)]
    pub async fn docker_image(
        &self,
        project_uuid: &str,
        server_uuid: &str,
        docker_registry_image_name: &str,
        ports_exposes: &str,
        env: EnvSelector,
        extra: Option<Value>,
    ) -> Result<UuidResponse> {
        let base = json!({
            "project_uuid": project_uuid,
            "server_uuid": server_uuid,
            "docker_registry_image_name": docker_registry_image_name,
            "ports_exposes": ports_exposes,
        });
        self.create("applications/dockerimage", base, env, extra)
            .await
    }

    /// Create an application from raw Docker Compose content.
    pub async fn docker_compose(
        &self,
        project_uuid: &str,
        server_uuid: &str,
        docker_compose_raw: &str,
        env: EnvSelector,
        extra: Option<Value>,
    ) -> Result<UuidResponse> {
        let base = json!({
            "project_uuid": project_uuid,
            "server_uuid": server_uuid,
            "docker_compose_raw": docker_compose_raw,
        });
        self.create("applications/dockercompose", base, env, extra)
            .await
    }
}
