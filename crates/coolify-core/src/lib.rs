//! # Coolify Core
//!
//! Core domain types for the Coolify API client.
//!
//! This crate contains pure data definitions with no I/O dependencies:
//! - Resource models deserialized from API responses
//! - Error definitions
//! - Payload-building helpers shared by the create/update endpoints
//!
//! ## Design Principles
//!
//! - **Passthrough-tolerant**: models keep unknown response fields instead of
//!   rejecting them, since the API owns the schema
//! - **Dependency-Free**: no networking or persistence concerns
//! - **Composable**: usable by any transport layer

pub mod errors;
pub mod models;
pub mod payload;

// Re-export commonly used types
pub use errors::{CoolifyError, Result};
pub use models::{
    Application, Database, DeployResponse, Deployment, DeploymentQueued, Environment,
    EnvironmentVariable, MessageResponse, PrivateKey, Project, Server, Service, ServiceCreated,
    Team, TeamMember, UuidResponse,
};
pub use payload::{merge_payload, EnvSelector};
