//! Core Leaseweb domain types.
//!
//! This module provides the types shared between the product APIs: the
//! service enumeration with its versioned path roots, the pagination
//! envelope attached to list responses, and the metric time series.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Default base URL of the public Leaseweb API.
pub const DEFAULT_BASE_URL: &str = "https://api.leaseweb.com";

/// Header carrying the API key.
pub const AUTH_HEADER: &str = "X-LSW-Auth";

/// Supported Leaseweb API families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeasewebService {
    /// Abuse report handling
    Abuse,
    /// Floating IP ranges and definitions
    FloatingIp,
    /// Private cloud instances and metrics
    PrivateCloud,
}

impl LeasewebService {
    /// Returns the service name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Abuse => "abuse",
            Self::FloatingIp => "floatingIps",
            Self::PrivateCloud => "cloud",
        }
    }

    /// Returns the API version used when none is configured.
    #[must_use]
    pub const fn default_version(&self) -> &'static str {
        match self {
            Self::Abuse => "v1",
            Self::FloatingIp | Self::PrivateCloud => "v2",
        }
    }

    /// Returns all available services.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Abuse, Self::FloatingIp, Self::PrivateCloud]
    }

    /// Versioned path root, e.g. `floatingIps/v2`.
    #[must_use]
    pub fn root(&self, version: Option<&str>) -> String {
        let version = match version {
            Some(v) if !v.is_empty() => v,
            _ => self.default_version(),
        };
        format!("{}/{version}", self.name())
    }
}

impl FromStr for LeasewebService {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "abuse" => Ok(Self::Abuse),
            "floatingips" | "floating-ip" => Ok(Self::FloatingIp),
            "cloud" | "private-cloud" => Ok(Self::PrivateCloud),
            _ => Err(Error::Config(format!("Unknown service: {s}"))),
        }
    }
}

impl std::fmt::Display for LeasewebService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pagination envelope attached to list responses (`_metadata`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    /// Page size used by the server
    pub limit: u64,
    /// Offset of the first returned item
    pub offset: u64,
    /// Total number of items matching the query
    pub total_count: u64,
}

/// A single sample of a metric series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimestampValuePair {
    /// Sample timestamp as sent by the API
    pub timestamp: String,
    /// Sample value
    pub value: f64,
}

/// A metric series with its unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicMetric {
    /// Unit of the values (e.g. `GB`, `bps`, `CORES`)
    pub unit: String,
    /// Samples in chronological order
    pub values: Vec<TimestampValuePair>,
}

/// Query window description attached to metric responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricMetadata {
    /// Start of the window
    pub from: String,
    /// End of the window
    pub to: String,
    /// Granularity applied by the server
    pub granularity: String,
    /// Aggregation applied by the server
    pub aggregation: String,
}

/// Envelope for every metric family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsResponse<M> {
    /// The metric series keyed by family
    #[serde(default)]
    pub metrics: M,
    /// Window, granularity and aggregation used
    #[serde(rename = "_metadata", default)]
    pub metadata: MetricMetadata,
}

/// Public bandwidth series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandwidthMetric {
    /// Inbound public traffic
    #[serde(rename = "UP_PUBLIC")]
    pub up_public: BasicMetric,
    /// Outbound public traffic
    #[serde(rename = "DOWN_PUBLIC")]
    pub down_public: BasicMetric,
}

/// Data traffic volume series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataTrafficMetric {
    /// Uploaded volume
    #[serde(rename = "DATATRAFFIC_UP")]
    pub datatraffic_up: BasicMetric,
    /// Downloaded volume
    #[serde(rename = "DATATRAFFIC_DOWN")]
    pub datatraffic_down: BasicMetric,
}

/// Bandwidth metrics response.
pub type BandwidthMetrics = MetricsResponse<BandwidthMetric>;

/// Data traffic metrics response.
pub type DataTrafficMetrics = MetricsResponse<DataTrafficMetric>;
