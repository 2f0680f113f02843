//! Abuse report models.

use leaseweb_core::query::QueryParams;
use leaseweb_core::Metadata;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An abuse report as returned by the abuse API.
///
/// List responses only carry the summary fields; the detail fields
/// (`body`, detected addresses, attachments, messages) are populated by
/// [`crate::AbuseClient::get_report`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AbuseReport {
    /// Report identifier.
    pub id: String,
    /// Short subject line.
    pub subject: String,
    /// Report status (`OPEN`, `WAITING`, `CLOSED`).
    pub status: String,
    /// Whether the report was reopened after being closed.
    pub reopened: bool,
    /// When the report was filed.
    pub reported_at: String,
    /// When the report last changed.
    pub updated_at: String,
    /// Address of the party that filed the report.
    pub notifier: String,
    /// Customer the report concerns.
    pub customer_id: String,
    /// Legal entity the customer belongs to.
    pub legal_entity_id: String,
    /// Full report text.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub body: String,
    /// Deadline for resolving the report.
    pub deadline: String,
    /// IP addresses detected in the report.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub detected_ip_addresses: Vec<String>,
    /// Domain names detected in the report.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub detected_domain_names: Vec<DetectedDomainName>,
    /// Files attached to the report.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// Number of messages in the thread.
    pub total_messages_count: u64,
    /// Most recent messages of the thread.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub latest_messages: Vec<AbuseMessage>,
}

/// A domain name detected in a report with the addresses it resolved to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetectedDomainName {
    /// Domain name.
    pub name: String,
    /// Addresses the domain resolved to.
    pub ip_addresses: Vec<String>,
}

/// A page of abuse reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbuseReports {
    /// Reports on this page.
    pub reports: Vec<AbuseReport>,
    /// Pagination envelope.
    #[serde(rename = "_metadata")]
    pub metadata: Metadata,
}

/// A message in an abuse report thread.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AbuseMessage {
    /// Author role (`CUSTOMER`, `ABUSE_AGENT`).
    pub posted_by: String,
    /// When the message was posted.
    pub posted_at: String,
    /// Message text.
    pub body: String,
    /// Optional attached file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

/// A page of abuse report messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbuseMessages {
    /// Messages on this page.
    pub messages: Vec<AbuseMessage>,
    /// Pagination envelope.
    #[serde(rename = "_metadata")]
    pub metadata: Metadata,
}

/// A file attached to a report or message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attachment {
    /// Attachment identifier.
    pub id: String,
    /// MIME type of the file.
    pub mime_type: String,
    /// Original file name.
    pub filename: String,
}

/// A resolution option applicable to a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resolution {
    /// Resolution code, e.g. `CONTENT_REMOVED`.
    pub id: String,
    /// Human readable description.
    pub description: String,
}

/// Resolution options for a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resolutions {
    /// Available resolutions.
    pub resolutions: Vec<Resolution>,
}

/// Report status used to filter listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbuseReportStatus {
    /// Awaiting action from the customer.
    Open,
    /// Awaiting action from the abuse team.
    Waiting,
    /// Resolved.
    Closed,
}

impl AbuseReportStatus {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Waiting => "WAITING",
            Self::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for AbuseReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters for listing abuse reports.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AbuseReportListParams {
    /// Offset.
    pub offset: Option<u32>,
    /// Limit.
    pub limit: Option<u32>,
    /// Only return reports in these states. Empty means all.
    pub statuses: Vec<AbuseReportStatus>,
}

impl AbuseReportListParams {
    /// Convert to URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("offset", self.offset);
        params.push_opt("limit", self.limit);
        params.push_list("status", &self.statuses);
        params.into_pairs()
    }
}

/// Request payload for posting a message to a report.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub(crate) struct CreateMessageRequest<'a> {
    pub(crate) body: &'a str,
}

/// Request payload for resolving a report.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub(crate) struct ResolveRequest<'a> {
    pub(crate) resolutions: &'a [&'a str],
}
