//! Synchronous access to the API.
//!
//! The async client covers the typed namespaces; callers without a runtime
//! of their own can use this wrapper instead. It owns a current-thread tokio
//! runtime and drives the same rate-limited dispatch layer, exposing the raw
//! verb operations against any endpoint.

use serde_json::Value;
use tokio::runtime::{Builder, Runtime};

use crate::client::{CoolifyClient as AsyncClient, CoolifyConfig};
use crate::errors::{ApiError, Result};

/// Blocking client over the raw dispatch operations.
#[derive(Debug)]
pub struct CoolifyClient {
    runtime: Runtime,
    inner: AsyncClient,
}

impl CoolifyClient {
    /// Build a blocking client from a configuration.
    pub fn new(config: CoolifyConfig) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build tokio runtime: {e}")))?;
        let inner = AsyncClient::new(config)?;
        Ok(Self { runtime, inner })
    }

    /// Build a blocking client from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(CoolifyConfig::from_env()?)
    }

    /// GET an endpoint, e.g. `applications` or `servers/{uuid}/domains`.
    pub fn get(&self, endpoint: &str) -> Result<Value> {
        self.runtime.block_on(self.inner.http().get(endpoint, &[]))
    }

    /// GET an endpoint with query parameters.
    pub fn get_with_query(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Value> {
        self.runtime
            .block_on(self.inner.http().get(endpoint, query))
    }

    /// POST a JSON body to an endpoint.
    pub fn post(&self, endpoint: &str, body: Option<&Value>) -> Result<Value> {
        self.runtime
            .block_on(self.inner.http().post(endpoint, &[], body))
    }

    /// PATCH a JSON body to an endpoint.
    pub fn patch(&self, endpoint: &str, body: Option<&Value>) -> Result<Value> {
        self.runtime
            .block_on(self.inner.http().patch(endpoint, &[], body))
    }

    /// DELETE an endpoint.
    pub fn delete(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Value> {
        self.runtime
            .block_on(self.inner.http().delete(endpoint, query))
    }

    /// Run any future on the wrapper's runtime, for one-off calls into the
    /// typed async namespaces.
    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// The wrapped async client, for use with [`CoolifyClient::block_on`].
    pub fn async_client(&self) -> &AsyncClient {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocking_client_constructs_without_a_runtime() {
        let client = CoolifyClient::new(CoolifyConfig::new("test-key")).unwrap();
        let _ = client.async_client();
    }

    #[test]
    fn block_on_drives_arbitrary_futures() {
        let client = CoolifyClient::new(CoolifyConfig::new("test-key")).unwrap();
        let value = client.block_on(async { 2 + 2 });
        assert_eq!(value, 4);
    }
}
