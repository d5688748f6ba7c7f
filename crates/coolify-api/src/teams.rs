//! Teams namespace.

use std::sync::Arc;

use log::debug;

use coolify_core::{Team, TeamMember};

use crate::errors::Result;
use crate::http::HttpClient;

/// Client for the teams endpoints.
#[derive(Debug, Clone)]
pub struct Teams {
    http: Arc<HttpClient>,
}

impl Teams {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// List all teams the token has access to.
    pub async fn list(&self) -> Result<Vec<Team>> {
        debug!("Listing all teams");
        let value = self.http.get("teams", &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Get one team by ID.
    pub async fn get(&self, team_id: i64) -> Result<Team> {
        debug!("Getting team with id: {}", team_id);
        let value = self.http.get(&format!("teams/{team_id}"), &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// List the members of a team.
    pub async fn members(&self, team_id: i64) -> Result<Vec<TeamMember>> {
        debug!("Getting members for team with id: {}", team_id);
        let value = self
            .http
            .get(&format!("teams/{team_id}/members"), &[])
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Get the team the token authenticates as.
    pub async fn current(&self) -> Result<Team> {
        debug!("Getting current team");
        let value = self.http.get("teams/current", &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// List the members of the current team.
    pub async fn current_members(&self) -> Result<Vec<TeamMember>> {
        debug!("Getting members of the current team");
        let value = self.http.get("teams/current/members", &[]).await?;
        Ok(serde_json::from_value(value)?)
    }
}
