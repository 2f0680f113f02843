//! Abuse report client and data models for the Leaseweb API.
//!
//! Provides typed structures and an asynchronous client for reading abuse
//! reports, following their message threads and resolving them.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{AbuseClient, AbuseClientBuilder};
pub use models::{
    AbuseMessage, AbuseMessages, AbuseReport, AbuseReportListParams, AbuseReportStatus,
    AbuseReports, Attachment, DetectedDomainName, Resolution, Resolutions,
};

/// Convenient result alias that reuses the shared Leaseweb error type.
pub type Result<T> = leaseweb_core::Result<T>;
