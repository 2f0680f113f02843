//! # leaseweb-core
//!
//! Core types and utilities for working with the Leaseweb REST API.
//!
//! This crate provides the shared transport, error mapping, configuration and
//! data types that the per-product client crates build on.
//!
//! ## Modules
//!
//! - [`error`] - Error types and the structured API error body
//! - [`types`] - Shared domain types (pagination metadata, metrics, services)
//! - [`config`] - Configuration structures for Leaseweb clients
//! - [`client`] - HTTP transport and the per-service request executor
//! - [`query`] - Query string helpers and shared option structures
//! - [`codec`] - Path segment encoding and null-tolerant JSON decoding

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod query;
pub mod types;

// Re-export commonly used types
pub use client::{
    ApiRequest, ApiResponse, ClientConfig, HttpTransport, ServiceClient, ServiceClientBuilder,
    Transport,
};
pub use codec::{decode_json, encode_segment};
pub use config::LeasewebConfig;
pub use error::{Error, LeasewebError, Result};
pub use query::{Aggregation, Granularity, MetricsQuery, Pagination, QueryParams};
pub use types::{LeasewebService, Metadata};
