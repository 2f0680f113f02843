//! Private cloud models.

use leaseweb_core::types::{BasicMetric, MetricsResponse};
use leaseweb_core::Metadata;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A private cloud instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivateCloud {
    /// Private cloud identifier.
    pub id: String,
    /// Owning customer.
    pub customer_id: String,
    /// Data center hosting the cloud, e.g. `AMS-01`.
    pub data_center: String,
    /// Commercial offering, e.g. `FLAT_FEE`.
    pub service_offering: String,
    /// Service level agreement.
    pub sla: String,
    /// Contract terms.
    pub contract: PrivateCloudContract,
    /// Traffic allowance.
    pub network_traffic: NetworkTraffic,
    /// Addresses assigned to the cloud.
    pub ips: Vec<PrivateCloudIp>,
    /// Hardware allocation.
    pub hardware: PrivateCloudHardware,
}

/// A page of private clouds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivateClouds {
    /// Private clouds on this page.
    pub private_clouds: Vec<PrivateCloud>,
    /// Pagination envelope.
    #[serde(rename = "_metadata")]
    pub metadata: Metadata,
}

/// Contract terms of a private cloud.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivateCloudContract {
    /// Contract identifier.
    pub id: String,
    /// Contract start.
    pub starts_at: String,
    /// Contract end.
    pub ends_at: String,
    /// Billing cycle length in units of `billing_frequency`.
    pub billing_cycle: u32,
    /// Billing period unit, e.g. `MONTH`.
    pub billing_frequency: String,
    /// Price per billing period.
    pub price_per_frequency: f64,
    /// ISO currency code.
    pub currency: String,
}

/// An address assigned to a private cloud.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivateCloudIp {
    /// The address.
    pub ip: String,
    /// IP version (4 or 6).
    pub version: u8,
    /// Address type, e.g. `PUBLIC`.
    #[serde(rename = "type")]
    pub ip_type: String,
}

/// Hardware allocated to a private cloud.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivateCloudHardware {
    /// CPU allocation.
    pub cpu: Cpu,
    /// Memory allocation.
    pub memory: UnitAmountPair,
    /// Storage allocation.
    pub storage: UnitAmountPair,
}

/// CPU allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cpu {
    /// Number of cores.
    pub cores: u32,
}

/// A quantity with its unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitAmountPair {
    /// Unit, e.g. `GB`.
    pub unit: String,
    /// Amount in `unit`.
    pub amount: u64,
}

/// Traffic allowance of a private cloud.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkTraffic {
    /// Allowance kind, e.g. `DATATRAFFIC`.
    #[serde(rename = "type")]
    pub traffic_kind: String,
    /// Traffic class, e.g. `PREMIUM`.
    #[serde(rename = "trafficType")]
    pub traffic_type: String,
    /// Unit of the limit.
    #[serde(rename = "datatrafficUnit")]
    pub datatraffic_unit: String,
    /// Traffic limit in `datatraffic_unit`.
    #[serde(rename = "datatrafficLimit")]
    pub datatraffic_limit: u64,
}

/// A service credential. Listings omit the password.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credential {
    /// Credential type, e.g. `REMOTE_MANAGEMENT`.
    #[serde(rename = "type")]
    pub credential_type: String,
    /// Account name.
    pub username: String,
    /// Password, only present when fetching a single credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Domain the account belongs to.
    pub domain: String,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("credential_type", &self.credential_type)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("domain", &self.domain)
            .finish()
    }
}

/// A page of credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Credentials on this page.
    pub credentials: Vec<Credential>,
    /// Pagination envelope.
    #[serde(rename = "_metadata")]
    pub metadata: Metadata,
}

/// CPU usage series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuMetric {
    /// Cores in use.
    #[serde(rename = "CPU")]
    pub cpu: BasicMetric,
}

/// Memory usage series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryMetric {
    /// Memory in use.
    #[serde(rename = "MEMORY")]
    pub memory: BasicMetric,
}

/// Storage usage series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageMetric {
    /// Storage in use.
    #[serde(rename = "STORAGE")]
    pub storage: BasicMetric,
}

/// CPU metrics response.
pub type CpuMetrics = MetricsResponse<CpuMetric>;

/// Memory metrics response.
pub type MemoryMetrics = MetricsResponse<MemoryMetric>;

/// Storage metrics response.
pub type StorageMetrics = MetricsResponse<StorageMetric>;
