//! # Coolify API
//!
//! HTTP client for the Coolify v1 REST API.
//! One namespace per resource family, all sharing a rate-limited dispatch
//! layer with typed error translation.
//!
//! ```no_run
//! use coolify_api::{CoolifyClient, CoolifyConfig};
//!
//! # async fn run() -> coolify_api::Result<()> {
//! let client = CoolifyClient::new(CoolifyConfig::from_env()?)?;
//! let apps = client.applications.list().await?;
//! for app in apps {
//!     println!("{} ({:?})", app.uuid, app.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod applications;
pub mod applications_create;
pub mod blocking;
pub mod client;
pub mod control;
pub mod databases;
pub mod databases_create;
pub mod deployments;
pub mod envs;
pub mod errors;
pub mod operations;
pub mod private_keys;
pub mod projects;
pub mod resources;
pub mod servers;
pub mod services;
pub mod teams;

mod http;
mod rate_limit;

// Re-export common types for convenience
pub use client::{CoolifyClient, CoolifyConfig};
pub use control::{DeleteOptions, ResourceKind};
pub use deployments::DeploySelector;
pub use errors::{ApiError, HttpError, Result};

// Re-export core types that API consumers will need
pub use coolify_core::{
    Application, CoolifyError, Database, DeployResponse, Deployment, DeploymentQueued,
    EnvSelector, Environment, EnvironmentVariable, MessageResponse, PrivateKey, Project, Server,
    Service, ServiceCreated, Team, TeamMember, UuidResponse,
};
