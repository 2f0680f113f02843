//! Asynchronous private cloud client implementation.

use crate::models::{
    CpuMetrics, Credential, Credentials, MemoryMetrics, PrivateCloud, PrivateClouds,
    StorageMetrics,
};
use crate::Result;
use leaseweb_core::client::{ClientConfig, ServiceClient, ServiceClientBuilder, Transport};
use leaseweb_core::types::{BandwidthMetrics, DataTrafficMetrics};
use leaseweb_core::{encode_segment, LeasewebConfig, LeasewebService, MetricsQuery, Pagination};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

const USER_AGENT: &str = concat!("leaseweb-private-cloud/", env!("CARGO_PKG_VERSION"));

/// Builder for [`PrivateCloudClient`].
#[derive(Debug, Clone)]
pub struct PrivateCloudClientBuilder {
    inner: ServiceClientBuilder,
}

impl PrivateCloudClientBuilder {
    /// Create a builder from a configuration.
    #[must_use]
    pub fn new(config: LeasewebConfig) -> Self {
        let builder = ServiceClientBuilder::new(LeasewebService::PrivateCloud, config)
            .with_user_agent(USER_AGENT);
        Self { inner: builder }
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
    pub fn build(self) -> Result<PrivateCloudClient> {
        let inner = self.inner.build()?;
        Ok(PrivateCloudClient { inner })
    }
}

/// Asynchronous private cloud client.
#[derive(Debug, Clone)]
pub struct PrivateCloudClient {
    inner: ServiceClient,
}

impl PrivateCloudClient {
    /// Construct a client directly from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: LeasewebConfig) -> Result<Self> {
        PrivateCloudClientBuilder::new(config).build()
    }

    /// List private clouds.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn list_private_clouds(&self, pagination: &Pagination) -> Result<PrivateClouds> {
        self.inner
            .get_json("privateClouds", &pagination.to_pairs())
            .await
    }

    /// Fetch a single private cloud.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn get_private_cloud(&self, private_cloud_id: &str) -> Result<PrivateCloud> {
        let path = format!("privateClouds/{}", encode_segment(private_cloud_id));
        self.inner.get_json(&path, &[]).await
    }

    /// List credentials of one type, without passwords.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn list_credentials(
        &self,
        private_cloud_id: &str,
        credential_type: &str,
        pagination: &Pagination,
    ) -> Result<Credentials> {
        let path = format!(
            "privateClouds/{}/credentials/{}",
            encode_segment(private_cloud_id),
            encode_segment(credential_type)
        );
        self.inner.get_json(&path, &pagination.to_pairs()).await
    }

    /// Fetch a single credential including its password.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn get_credential(
        &self,
        private_cloud_id: &str,
        credential_type: &str,
        username: &str,
    ) -> Result<Credential> {
        let path = format!(
            "privateClouds/{}/credentials/{}/{}",
            encode_segment(private_cloud_id),
            encode_segment(credential_type),
            encode_segment(username)
        );
        self.inner.get_json(&path, &[]).await
    }

    /// Fetch data traffic volume metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn get_datatraffic_metrics(
        &self,
        private_cloud_id: &str,
        query: &MetricsQuery,
    ) -> Result<DataTrafficMetrics> {
        self.metrics(private_cloud_id, "datatraffic", query).await
    }

    /// Fetch public bandwidth metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn get_bandwidth_metrics(
        &self,
        private_cloud_id: &str,
        query: &MetricsQuery,
    ) -> Result<BandwidthMetrics> {
        self.metrics(private_cloud_id, "bandwidth", query).await
    }

    /// Fetch CPU usage metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn get_cpu_metrics(
        &self,
        private_cloud_id: &str,
        query: &MetricsQuery,
    ) -> Result<CpuMetrics> {
        self.metrics(private_cloud_id, "cpu", query).await
    }

    /// Fetch memory usage metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn get_memory_metrics(
        &self,
        private_cloud_id: &str,
        query: &MetricsQuery,
    ) -> Result<MemoryMetrics> {
        self.metrics(private_cloud_id, "memory", query).await
    }

    /// Fetch storage usage metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn get_storage_metrics(
        &self,
        private_cloud_id: &str,
        query: &MetricsQuery,
    ) -> Result<StorageMetrics> {
        self.metrics(private_cloud_id, "storage", query).await
    }

    async fn metrics<R>(
        &self,
        private_cloud_id: &str,
        family: &str,
        query: &MetricsQuery,
    ) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let path = format!(
            "privateClouds/{}/metrics/{family}",
            encode_segment(private_cloud_id)
        );
        debug!(private_cloud_id, family, ?query, "Fetching private cloud metrics");
        self.inner.get_json(&path, &query.to_pairs()).await
    }
}
