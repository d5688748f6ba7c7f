use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An application managed by the platform.
///
/// The API returns many build- and runtime-specific fields beyond the ones
/// named here; they are preserved in `extra`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Application {
    #[serde(default)]
    pub id: Option<i64>,
    pub uuid: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fqdn: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub git_repository: Option<String>,
    #[serde(default)]
    pub git_branch: Option<String>,
    #[serde(default)]
    pub build_pack: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A standalone database instance.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Database {
    #[serde(default)]
    pub id: Option<i64>,
    pub uuid: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_public: Option<bool>,
    #[serde(default)]
    pub public_port: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A one-click service (compose bundle) instance.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Service {
    #[serde(default)]
    pub id: Option<i64>,
    pub uuid: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub environment_id: Option<i64>,
    #[serde(default)]
    pub server_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A deployment record, as returned by the deployments endpoints.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Deployment {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub deployment_uuid: Option<String>,
    #[serde(default)]
    pub application_id: Option<String>,
    #[serde(default)]
    pub application_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub commit: Option<String>,
    #[serde(default)]
    pub commit_message: Option<String>,
    #[serde(default)]
    pub force_rebuild: Option<bool>,
    #[serde(default)]
    pub is_api: Option<bool>,
    #[serde(default)]
    pub is_webhook: Option<bool>,
    #[serde(default)]
    pub server_name: Option<String>,
    #[serde(default)]
    pub deployment_url: Option<String>,
    #[serde(default)]
    pub logs: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A project grouping environments and resources.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Project {
    #[serde(default)]
    pub id: Option<i64>,
    pub uuid: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub environments: Vec<Environment>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An environment within a project (e.g. "production").
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Environment {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An environment variable attached to an application or service.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EnvironmentVariable {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub uuid: Option<String>,
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub is_secret: Option<bool>,
    #[serde(default)]
    pub is_build_time: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A server registered with the platform.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Server {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub port: Option<i64>,
    #[serde(default)]
    pub proxy_type: Option<String>,
    #[serde(default)]
    pub settings: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A team, including its notification configuration flags.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Team {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub personal_team: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A member of a team.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TeamMember {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An SSH private key stored under the security endpoints.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PrivateKey {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub private_key: Option<String>,
    #[serde(default)]
    pub is_git_related: Option<bool>,
    #[serde(default)]
    pub team_id: Option<i64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Envelope for endpoints that return only a created/updated UUID.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UuidResponse {
    pub uuid: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Envelope for endpoints that return only a confirmation message.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A queued deployment, returned by application start/restart and the
/// deploy-by-tag endpoint.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DeploymentQueued {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub deployment_uuid: Option<String>,
    #[serde(default)]
    pub resource_uuid: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of the bulk deploy endpoint.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DeployResponse {
    #[serde(default)]
    pub deployments: Vec<DeploymentQueued>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of service creation, which also reports generated domains.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceCreated {
    pub uuid: String,
    #[serde(default)]
    pub domains: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_keeps_unknown_fields() {
        let json = r#"{
            "uuid": "app-1",
            "name": "web",
            "status": "running",
            "ports_exposes": "3000",
            "limits_memory": "512m"
        }"#;
        let app: Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.uuid, "app-1");
        assert_eq!(app.name.as_deref(), Some("web"));
        assert_eq!(app.extra["ports_exposes"], "3000");
        assert_eq!(app.extra["limits_memory"], "512m");
    }

    #[test]
    fn deployment_parses_minimal_body() {
        let json = r#"{"deployment_uuid": "dep-1", "status": "queued"}"#;
        let dep: Deployment = serde_json::from_str(json).unwrap();
        assert_eq!(dep.deployment_uuid.as_deref(), Some("dep-1"));
        assert_eq!(dep.status.as_deref(), Some("queued"));
        assert!(dep.commit.is_none());
    }

    #[test]
    fn project_parses_nested_environments() {
        let json = r#"{
            "uuid": "proj-1",
            "name": "demo",
            "environments": [{"id": 7, "name": "production", "project_id": 3}]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.environments.len(), 1);
        assert_eq!(project.environments[0].name.as_deref(), Some("production"));
    }

    #[test]
    fn timestamps_parse_rfc3339() {
        let json = r#"{"uuid": "db-1", "created_at": "2024-05-01T12:30:00.000000Z"}"#;
        let db: Database = serde_json::from_str(json).unwrap();
        assert!(db.created_at.is_some());
    }

    #[test]
    fn deploy_response_defaults_to_empty_list() {
        let resp: DeployResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.deployments.is_empty());
    }
}
