//! Private cloud client and data models for the Leaseweb API.
//!
//! Provides typed structures and an asynchronous client for private cloud
//! instances, their service credentials and their resource metrics.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{PrivateCloudClient, PrivateCloudClientBuilder};
pub use leaseweb_core::types::{
    BandwidthMetric, BandwidthMetrics, BasicMetric, DataTrafficMetric, DataTrafficMetrics,
    MetricMetadata, MetricsResponse, TimestampValuePair,
};
pub use models::{
    Cpu, CpuMetric, CpuMetrics, Credential, Credentials, MemoryMetric, MemoryMetrics,
    NetworkTraffic, PrivateCloud, PrivateCloudContract, PrivateCloudHardware, PrivateCloudIp,
    PrivateClouds, StorageMetric, StorageMetrics, UnitAmountPair,
};

/// Convenient result alias that reuses the shared Leaseweb error type.
pub type Result<T> = leaseweb_core::Result<T>;
