//! Deployments namespace: inspection and triggering.

use std::sync::Arc;

use log::debug;

use coolify_core::{CoolifyError, DeployResponse, Deployment};

use crate::errors::Result;
use crate::http::HttpClient;

/// Selectors for the bulk deploy endpoint. At least one of `uuids`, `tags`
/// or `pull_request_id` is required; `tags` and `pull_request_id` are
/// mutually exclusive. Multiple UUIDs or tags are comma-separated, as the
/// API expects.
#[derive(Debug, Clone, Default)]
pub struct DeploySelector {
    pub uuids: Option<String>,
    pub tags: Option<String>,
    pub pull_request_id: Option<i64>,
    pub force_rebuild: bool,
}

impl DeploySelector {
    pub fn by_uuid(uuid: impl Into<String>) -> Self {
        Self {
            uuids: Some(uuid.into()),
            ..Default::default()
        }
    }

    pub fn by_tag(tag: impl Into<String>) -> Self {
        Self {
            tags: Some(tag.into()),
            ..Default::default()
        }
    }

    pub fn by_pull_request(id: i64) -> Self {
        Self {
            pull_request_id: Some(id),
            ..Default::default()
        }
    }

    pub fn force(mut self) -> Self {
        self.force_rebuild = true;
        self
    }

    fn validate(&self) -> std::result::Result<(), CoolifyError> {
        if self.uuids.is_none() && self.tags.is_none() && self.pull_request_id.is_none() {
            return Err(CoolifyError::InvalidInput(
                "either a deployment uuid, tag or pull request id must be specified".to_string(),
            ));
        }
        if self.tags.is_some() && self.pull_request_id.is_some() {
            return Err(CoolifyError::ConflictingSelectors(
                "cannot specify both tag and pull request id".to_string(),
            ));
        }
        Ok(())
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("force", self.force_rebuild.to_string())];
        if let Some(ref uuids) = self.uuids {
            query.push(("uuid", uuids.clone()));
        }
        if let Some(ref tags) = self.tags {
            query.push(("tag", tags.clone()));
        }
        if let Some(pr) = self.pull_request_id {
            query.push(("pr", pr.to_string()));
        }
        query
    }
}

/// Client for the deployments endpoints.
#[derive(Debug, Clone)]
pub struct Deployments {
    http: Arc<HttpClient>,
}

impl Deployments {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// List all currently running deployments.
    pub async fn list(&self) -> Result<Vec<Deployment>> {
        debug!("Listing all deployments");
        let value = self.http.get("deployments", &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Get one deployment by UUID.
    pub async fn get(&self, uuid: &str) -> Result<Deployment> {
        debug!("Getting deployment with uuid: {}", uuid);
        let value = self.http.get(&format!("deployments/{uuid}"), &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Trigger deployments by resource UUID(s), tag(s) or pull request.
    /// The selectors are validated locally before any request is sent.
    pub async fn deploy(&self, selector: DeploySelector) -> Result<DeployResponse> {
        selector.validate()?;
        debug!("Triggering deployment with selector: {:?}", selector);
        let value = self.http.post("deploy", &selector.query(), None).await?;
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selector_is_rejected() {
        let err = DeploySelector::default().validate().unwrap_err();
        assert!(matches!(err, CoolifyError::InvalidInput(_)));
    }

    #[test]
    fn tag_and_pull_request_conflict() {
        let mut selector = DeploySelector::by_tag("production");
        selector.pull_request_id = Some(12);
        let err = selector.validate().unwrap_err();
        assert!(matches!(err, CoolifyError::ConflictingSelectors(_)));
    }

    #[test]
    fn uuid_selector_builds_expected_query() {
        let selector = DeploySelector::by_uuid("dep-1,dep-2").force();
        assert!(selector.validate().is_ok());
        let query = selector.query();
        assert!(query.contains(&("force", "true".to_string())));
        assert!(query.contains(&("uuid", "dep-1,dep-2".to_string())));
    }

    #[test]
    fn pull_request_selector_builds_expected_query() {
        let selector = DeploySelector::by_pull_request(42);
        assert!(selector.validate().is_ok());
        assert!(selector.query().contains(&("pr", "42".to_string())));
    }
}
