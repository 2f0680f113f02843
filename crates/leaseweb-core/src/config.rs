//! Configuration structures for Leaseweb clients.
//!
//! A [`LeasewebConfig`] is built once and handed to every client builder;
//! clients never read configuration from global state.

use crate::types::DEFAULT_BASE_URL;
use crate::Error;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "LEASEWEB_API_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "LEASEWEB_BASE_URL";

/// Environment variable overriding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "LEASEWEB_TIMEOUT_SECS";

/// Configuration for a Leaseweb client instance.
///
/// Controls where requests go, how they are authenticated and how long a
/// single round trip may take.
#[derive(Debug, Deserialize, Validate)]
pub struct LeasewebConfig {
    /// API base URL
    #[validate(url)]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent in the `X-LSW-Auth` header
    #[serde(deserialize_with = "deserialize_secret")]
    pub api_key: SecretString,

    /// Whether to verify TLS certificates
    #[serde(default = "default_tls_verify")]
    pub tls_verify: bool,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_tls_verify() -> bool {
    true
}

const fn default_request_timeout_secs() -> u64 {
    30
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

impl LeasewebConfig {
    /// Create a configuration for the public API.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            base_url: default_base_url(),
            api_key: SecretString::from(api_key.into()),
            tls_verify: default_tls_verify(),
            request_timeout_secs: default_request_timeout_secs(),
        };

        config.check()?;
        Ok(config)
    }

    /// Build a configuration from `LEASEWEB_API_KEY` and the optional
    /// `LEASEWEB_BASE_URL` / `LEASEWEB_TIMEOUT_SECS` overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or an override is invalid.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::Config(format!("{API_KEY_ENV} is not set")))?;

        let mut config = Self::new(api_key)?;

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config = config.with_base_url(base_url);
        }

        if let Ok(timeout) = std::env::var(TIMEOUT_ENV) {
            let seconds = timeout.parse::<u64>().map_err(|e| {
                Error::Config(format!("Invalid {TIMEOUT_ENV} `{timeout}`: {e}"))
            })?;
            config = config.with_timeout(seconds);
        }

        config.check()?;
        Ok(config)
    }

    /// Override the base URL (used to point clients at a test server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set whether to verify TLS certificates.
    #[must_use]
    pub const fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Borrow the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Validate every field, including the API key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] describing the first problem found.
    pub fn check(&self) -> Result<(), Error> {
        self.validate()
            .map_err(|e| Error::Config(format!("Invalid configuration: {e}")))?;

        if self.api_key().trim().is_empty() {
            return Err(Error::Config("API key must not be empty".to_string()));
        }

        Ok(())
    }

    /// Parse the base URL, normalised so relative paths join under it.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_base_url(&self) -> Result<Url, Error> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw).map_err(|e| Error::Config(format!("Invalid base URL: {e}")))
    }
}

impl Clone for LeasewebConfig {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            api_key: SecretString::from(self.api_key().to_string()),
            tls_verify: self.tls_verify,
            request_timeout_secs: self.request_timeout_secs,
        }
    }
}
