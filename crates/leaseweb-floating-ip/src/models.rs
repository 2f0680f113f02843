//! Floating IP models.

use leaseweb_core::query::QueryParams;
use leaseweb_core::Metadata;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A floating IP range owned by a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FloatingIpRange {
    /// Range identifier, e.g. `85.17.0.0_17`.
    pub id: String,
    /// CIDR notation of the range.
    pub range: String,
    /// Owning customer.
    pub customer_id: String,
    /// Sales organisation of the customer.
    pub sales_org_id: String,
    /// Site or metro the range is announced in.
    pub location: String,
    /// Range type (`SITE` or `METRO`).
    #[serde(rename = "type")]
    pub range_type: String,
}

/// A page of floating IP ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingIpRanges {
    /// Ranges on this page.
    pub ranges: Vec<FloatingIpRange>,
    /// Pagination envelope.
    #[serde(rename = "_metadata")]
    pub metadata: Metadata,
}

/// Binding of a floating IP inside a range to an anchor IP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FloatingIpDefinition {
    /// Definition identifier, e.g. `88.17.34.108_32`.
    pub id: String,
    /// Range the floating IP belongs to.
    pub range_id: String,
    /// Site or metro of the range.
    pub location: String,
    /// Range type.
    #[serde(rename = "type")]
    pub range_type: String,
    /// Owning customer.
    pub customer_id: String,
    /// Sales organisation of the customer.
    pub sales_org_id: String,
    /// Floating IP in CIDR notation.
    pub floating_ip: String,
    /// Address traffic for the floating IP is routed to.
    pub anchor_ip: String,
    /// Provisioning status, e.g. `ACTIVE`.
    pub status: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

/// A page of floating IP definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FloatingIpDefinitions {
    /// Definitions on this page.
    pub floating_ip_definitions: Vec<FloatingIpDefinition>,
    /// Pagination envelope.
    #[serde(rename = "_metadata")]
    pub metadata: Metadata,
}

/// Request payload for creating a floating IP definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateFloatingIpDefinition {
    /// Floating IP in CIDR notation.
    pub floating_ip: String,
    /// Anchor IP to route to.
    pub anchor_ip: String,
}

impl CreateFloatingIpDefinition {
    /// Create a payload binding `floating_ip` to `anchor_ip`.
    #[must_use]
    pub fn new(floating_ip: impl Into<String>, anchor_ip: impl Into<String>) -> Self {
        Self {
            floating_ip: floating_ip.into(),
            anchor_ip: anchor_ip.into(),
        }
    }
}

/// Request payload for re-anchoring a floating IP definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFloatingIpDefinition {
    /// New anchor IP.
    pub anchor_ip: String,
}

impl UpdateFloatingIpDefinition {
    /// Create a payload moving the definition to `anchor_ip`.
    #[must_use]
    pub fn new(anchor_ip: impl Into<String>) -> Self {
        Self {
            anchor_ip: anchor_ip.into(),
        }
    }
}

/// Range type used to filter listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeType {
    /// Announced in a single site.
    Site,
    /// Announced across a metro area.
    Metro,
}

impl RangeType {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Site => "SITE",
            Self::Metro => "METRO",
        }
    }
}

impl fmt::Display for RangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters for listing ranges and range definitions.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RangeListParams {
    /// Offset.
    pub offset: Option<u32>,
    /// Limit.
    pub limit: Option<u32>,
    /// Only return these range types. Empty means all.
    pub types: Vec<RangeType>,
    /// Only return entries in this location.
    pub location: Option<String>,
}

impl RangeListParams {
    /// Convert to URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("offset", self.offset);
        params.push_opt("limit", self.limit);
        params.push_list("type", &self.types);
        params.push_opt("location", self.location.as_ref());
        params.into_pairs()
    }
}
