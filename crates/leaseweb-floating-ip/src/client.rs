//! Asynchronous floating IP client implementation.

use crate::models::{
    CreateFloatingIpDefinition, FloatingIpDefinition, FloatingIpDefinitions, FloatingIpRange,
    FloatingIpRanges, RangeListParams, UpdateFloatingIpDefinition,
};
use crate::Result;
use leaseweb_core::client::{ClientConfig, ServiceClient, ServiceClientBuilder, Transport};
use leaseweb_core::{encode_segment, LeasewebConfig, LeasewebService};
use reqwest::Method;
use std::sync::Arc;
use tracing::debug;

const USER_AGENT: &str = concat!("leaseweb-floating-ip/", env!("CARGO_PKG_VERSION"));

/// Builder for [`FloatingIpClient`].
#[derive(Debug, Clone)]
pub struct FloatingIpClientBuilder {
    inner: ServiceClientBuilder,
}

impl FloatingIpClientBuilder {
    /// Create a builder from a configuration.
    #[must_use]
    pub fn new(config: LeasewebConfig) -> Self {
        let builder = ServiceClientBuilder::new(LeasewebService::FloatingIp, config)
            .with_user_agent(USER_AGENT);
        Self { inner: builder }
    }

    /// Target a different API version than the default `v2`.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.inner = self.inner.with_version(version);
        self
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.inner = self.inner.with_http_config(config);
        self
    }

    /// Send requests through a custom transport.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.inner = self.inner.with_transport(transport);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<FloatingIpClient> {
        let inner = self.inner.build()?;
        Ok(FloatingIpClient { inner })
    }
}

/// Asynchronous floating IP client.
#[derive(Debug, Clone)]
pub struct FloatingIpClient {
    inner: ServiceClient,
}

impl FloatingIpClient {
    /// Construct a client directly from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: LeasewebConfig) -> Result<Self> {
        FloatingIpClientBuilder::new(config).build()
    }

    /// Versioned path root used by this client.
    #[must_use]
    pub fn root(&self) -> &str {
        self.inner.root()
    }

    /// List floating IP ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn list_ranges(&self, params: &RangeListParams) -> Result<FloatingIpRanges> {
        self.inner.get_json("ranges", &params.to_pairs()).await
    }

    /// Fetch a single range.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn get_range(&self, range_id: &str) -> Result<FloatingIpRange> {
        let path = format!("ranges/{}", encode_segment(range_id));
        self.inner.get_json(&path, &[]).await
    }

    /// List the floating IP definitions of a range.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn list_range_definitions(
        &self,
        range_id: &str,
        params: &RangeListParams,
    ) -> Result<FloatingIpDefinitions> {
        let path = format!("ranges/{}/floatingIpDefinitions", encode_segment(range_id));
        self.inner.get_json(&path, &params.to_pairs()).await
    }

    /// Create a floating IP definition in a range.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn create_range_definition(
        &self,
        range_id: &str,
        request: &CreateFloatingIpDefinition,
    ) -> Result<FloatingIpDefinition> {
        let path = format!("ranges/{}/floatingIpDefinitions", encode_segment(range_id));
        debug!(
            range_id,
            floating_ip = %request.floating_ip,
            anchor_ip = %request.anchor_ip,
            "Creating floating IP definition"
        );
        self.inner
            .execute(Method::POST, &path, &[], Some(request))
            .await
    }

    /// Fetch a single floating IP definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn get_range_definition(
        &self,
        range_id: &str,
        definition_id: &str,
    ) -> Result<FloatingIpDefinition> {
        let path = definition_path(range_id, definition_id);
        self.inner.get_json(&path, &[]).await
    }

    /// Point a floating IP definition at a new anchor IP.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn update_range_definition(
        &self,
        range_id: &str,
        definition_id: &str,
        request: &UpdateFloatingIpDefinition,
    ) -> Result<FloatingIpDefinition> {
        let path = definition_path(range_id, definition_id);
        self.inner
            .execute(Method::PUT, &path, &[], Some(request))
            .await
    }

    /// Remove a floating IP definition.
    ///
    /// Returns the removed definition when the API echoes it, and `None`
    /// when it answers with an empty body (204).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn remove_range_definition(
        &self,
        range_id: &str,
        definition_id: &str,
    ) -> Result<Option<FloatingIpDefinition>> {
        let path = definition_path(range_id, definition_id);
        debug!(range_id, definition_id, "Removing floating IP definition");
        self.inner
            .execute::<(), _>(Method::DELETE, &path, &[], None)
            .await
    }
}

fn definition_path(range_id: &str, definition_id: &str) -> String {
    format!(
        "ranges/{}/floatingIpDefinitions/{}",
        encode_segment(range_id),
        encode_segment(definition_id)
    )
}
