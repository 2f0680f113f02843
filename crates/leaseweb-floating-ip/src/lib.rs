//! Floating IP client and data models for the Leaseweb API.
//!
//! Provides typed structures and an asynchronous client for floating IP
//! ranges and the floating IP definitions that bind addresses in a range to
//! anchor IPs.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{FloatingIpClient, FloatingIpClientBuilder};
pub use models::{
    CreateFloatingIpDefinition, FloatingIpDefinition, FloatingIpDefinitions, FloatingIpRange,
    FloatingIpRanges, RangeListParams, RangeType, UpdateFloatingIpDefinition,
};

/// Convenient result alias that reuses the shared Leaseweb error type.
pub type Result<T> = leaseweb_core::Result<T>;
