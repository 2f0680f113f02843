//! HTTP transport and the per-service request executor.
//!
//! [`Transport`] is the seam between the clients and the network: it sends a
//! single [`ApiRequest`] and hands back the raw status and body.
//! [`HttpTransport`] implements it with `reqwest`. [`ServiceClient`] sits on
//! top and turns raw responses into typed values or [`Error::Api`].

use crate::codec::decode_json;
use crate::config::LeasewebConfig;
use crate::types::{LeasewebService, AUTH_HEADER};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT: u64 = 30;

/// Default connect timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 10;

// Connection pool settings

/// Default idle timeout for connection pools
pub const DEFAULT_POOL_IDLE_TIMEOUT: u64 = 90;

/// Default maximum idle connections per host
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;

const USER_AGENT: &str = concat!("leaseweb-core/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration.
///
/// Configures HTTP client behavior including timeouts and connection pooling.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,

    /// Connection pool idle timeout
    pub pool_idle_timeout: Duration,

    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,

    /// Enable request/response logging
    pub enable_logging: bool,

    /// Enable response compression
    pub enable_compression: bool,
}

impl ClientConfig {
    /// Create a new client configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
            pool_idle_timeout: Duration::from_secs(DEFAULT_POOL_IDLE_TIMEOUT),
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
            enable_logging: true,
            enable_compression: true,
        }
    }

    /// Set request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set connection pool idle timeout.
    #[must_use]
    pub const fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    /// Set maximum idle connections per host.
    #[must_use]
    pub const fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    /// Enable or disable logging.
    #[must_use]
    pub const fn with_logging(mut self, enabled: bool) -> Self {
        self.enable_logging = enabled;
        self
    }

    /// Enable or disable compression.
    #[must_use]
    pub const fn with_compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A single request, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the base URL, without a leading slash
    pub path: String,
    /// Query pairs in emission order
    pub query: Vec<(&'static str, String)>,
    /// JSON payload for write operations
    pub body: Option<serde_json::Value>,
}

/// Raw response as read off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response body, possibly empty
    pub body: String,
}

impl ApiResponse {
    /// Create a response from a status and body.
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs one HTTP round trip.
///
/// Implementations must not interpret the status code; mapping is done by
/// [`ServiceClient`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return the raw response.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// `reqwest` backed [`Transport`] carrying the API key header.
pub struct HttpTransport {
    http: Client,
    base_url: Url,
    api_key: SecretString,
}

impl HttpTransport {
    /// Build a transport with a fresh `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid or the HTTP
    /// client cannot be created.
    pub fn new(
        config: &LeasewebConfig,
        http_config: &ClientConfig,
        user_agent: &str,
    ) -> Result<Self> {
        let mut builder = ClientBuilder::new()
            .user_agent(user_agent)
            .timeout(config.timeout().min(http_config.timeout))
            .pool_idle_timeout(http_config.pool_idle_timeout)
            .pool_max_idle_per_host(http_config.pool_max_idle_per_host)
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT))
            .gzip(http_config.enable_compression);

        if !config.tls_verify {
            warn!("TLS verification disabled for Leaseweb client");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder.build().map_err(|err| {
            Error::Config(format!("Failed to build Leaseweb HTTP client: {err}"))
        })?;

        Self::with_client(config, http)
    }

    /// Build a transport around an existing `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid.
    pub fn with_client(config: &LeasewebConfig, http: Client) -> Result<Self> {
        config.check()?;
        let base_url = config.parse_base_url()?;

        Ok(Self {
            http,
            base_url,
            api_key: SecretString::from(config.api_key().to_string()),
        })
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| Error::InvalidEndpoint(format!("Invalid path `{path}`: {err}")))
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.build_url(&request.path)?;

        let mut builder = self
            .http
            .request(request.method, url)
            .header(AUTH_HEADER, self.api_key.expose_secret())
            .header(ACCEPT, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(payload) = &request.body {
            builder = builder.json(payload);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}

/// Builder for [`ServiceClient`].
#[derive(Clone)]
pub struct ServiceClientBuilder {
    service: LeasewebService,
    config: LeasewebConfig,
    http_config: ClientConfig,
    user_agent: String,
    version: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl ServiceClientBuilder {
    /// Create a builder for the given service.
    #[must_use]
    pub fn new(service: LeasewebService, config: LeasewebConfig) -> Self {
        let http_config = ClientConfig::new().with_timeout(config.timeout());
        Self {
            service,
            config,
            http_config,
            user_agent: USER_AGENT.to_string(),
            version: None,
            transport: None,
        }
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Override the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the API version segment of the path root.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Use a custom transport instead of building an [`HttpTransport`].
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid.
    pub fn build(self) -> Result<ServiceClient> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(
                &self.config,
                &self.http_config,
                &self.user_agent,
            )?),
        };

        Ok(ServiceClient {
            transport,
            service: self.service,
            root: self.service.root(self.version.as_deref()),
            enable_logging: self.http_config.enable_logging,
        })
    }
}

impl fmt::Debug for ServiceClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClientBuilder")
            .field("service", &self.service)
            .field("config", &self.config)
            .field("http_config", &self.http_config)
            .field("version", &self.version)
            .field("custom_transport", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}

/// Request executor for one Leaseweb API family.
#[derive(Clone)]
pub struct ServiceClient {
    transport: Arc<dyn Transport>,
    service: LeasewebService,
    root: String,
    enable_logging: bool,
}

impl ServiceClient {
    /// Wrap an existing transport using the service's default version.
    #[must_use]
    pub fn from_transport(service: LeasewebService, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            service,
            root: service.root(None),
            enable_logging: true,
        }
    }

    /// The service this client talks to.
    #[must_use]
    pub const fn service(&self) -> LeasewebService {
        self.service
    }

    /// Versioned path root, e.g. `floatingIps/v2`.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Prefix an endpoint with the versioned root.
    #[must_use]
    pub fn path(&self, endpoint: &str) -> String {
        format!("{}/{}", self.root, endpoint.trim_start_matches('/'))
    }

    /// Issue a GET and decode the JSON body.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::execute`].
    pub async fn get_json<R>(
        &self,
        endpoint: &str,
        query: &[(&'static str, String)],
    ) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.execute::<(), R>(Method::GET, endpoint, query, None)
            .await
    }

    /// Issue a request and decode the JSON body into `R`.
    ///
    /// An empty 2xx body decodes as JSON `null`, so `R = ()` or
    /// `R = Option<T>` accept bodiless responses with no value. Object
    /// members set to `null` fall back to the field default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for any non-2xx status, [`Error::Decode`] when
    /// a success body does not match `R`, and transport errors unchanged.
    pub async fn execute<B, R>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let path = self.path(endpoint);
        let response = self.send(method, &path, query, body).await?;
        decode_body(&path, &response.body)
    }

    /// Issue a request whose success body is irrelevant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for any non-2xx status and transport errors
    /// unchanged.
    pub async fn execute_unit<B>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let path = self.path(endpoint);
        self.send(method, &path, query, body).await.map(|_| ())
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|err| {
                Error::Encode(format!("Failed to encode payload for `{path}`: {err}"))
            })?;

        if self.enable_logging {
            debug!(
                service = %self.service,
                %method,
                path = %path,
                ?query,
                "Sending Leaseweb request"
            );
        }

        let request = ApiRequest {
            method,
            path: path.to_string(),
            query: query.to_vec(),
            body,
        };

        let response = self.transport.send(request).await?;

        if self.enable_logging {
            debug!(
                service = %self.service,
                path = %path,
                status = %response.status,
                "Received Leaseweb response"
            );
        }

        if response.status.is_success() {
            return Ok(response);
        }

        let error = Error::from_response(response.status, &response.body);
        if let Some(api) = error.api_error() {
            warn!(
                service = %self.service,
                path = %path,
                status = %response.status,
                error_code = %api.error_code,
                correlation_id = %api.correlation_id,
                "Leaseweb API returned an error"
            );
        }
        Err(error)
    }
}

impl fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClient")
            .field("service", &self.service)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

fn decode_body<R>(path: &str, body: &str) -> Result<R>
where
    R: DeserializeOwned,
{
    let text = if body.trim().is_empty() { "null" } else { body };
    decode_json(text).map_err(|err| {
        Error::Decode(format!("Failed to parse Leaseweb response for `{path}`: {err}"))
    })
}
