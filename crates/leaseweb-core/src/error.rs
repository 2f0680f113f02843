//! Error types for Leaseweb operations.
//!
//! This module provides the error type shared by every Leaseweb client, the
//! structured error body returned by the API on non-2xx responses, and the
//! mapping from an HTTP status plus body onto that structure.

use crate::codec::decode_json;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured error body returned by the Leaseweb API.
///
/// Any subset of the fields may be missing or `null` in a response; such
/// fields decode to the empty string. An empty or undecodable body produces the
/// all-empty value, so callers must tolerate an error without any detail.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[error("{error_message}")]
pub struct LeasewebError {
    /// Machine readable error code (e.g. `ACCESS_DENIED`)
    pub error_code: String,
    /// Human-readable error message
    pub error_message: String,
    /// Correlation id for support requests
    pub correlation_id: String,
    /// Reference to the failing resource or documentation
    pub reference: String,
    /// Message intended to be shown to end users
    pub user_message: String,
}

impl LeasewebError {
    /// Decode an error body, falling back to the empty error.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        decode_json(body).unwrap_or_default()
    }

    /// Returns true if no field carries any information.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Main error type for Leaseweb operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The API answered with a non-2xx status
    #[error("{error}")]
    Api {
        /// HTTP status of the response
        status: StatusCode,
        /// Decoded error body
        error: LeasewebError,
    },

    /// Could not connect to the API
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Operation timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// HTTP request failed for another transport reason
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// A successful response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// A request payload could not be encoded
    #[error("Failed to encode request: {0}")]
    Encode(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid endpoint
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Specialized result type for Leaseweb operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Map a non-2xx response onto [`Error::Api`].
    #[must_use]
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        Self::Api {
            status,
            error: LeasewebError::from_body(body),
        }
    }

    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Api { .. } => "API_ERROR",
            Self::Connection(_) => "CONNECTION_FAILED",
            Self::Timeout(_) => "TIMEOUT",
            Self::Http(_) => "HTTP_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Encode(_) => "ENCODE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
        }
    }

    /// Returns the structured API error, if this is one.
    #[must_use]
    pub const fn api_error(&self) -> Option<&LeasewebError> {
        match self {
            Self::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Returns the HTTP status of an API error.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if this error should be logged as a serious error.
    #[must_use]
    pub fn should_log(&self) -> bool {
        match self {
            Self::Api { status, .. } => status.is_server_error(),
            Self::Config(_) | Self::Encode(_) | Self::Decode(_) => true,
            _ => false,
        }
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Config(err.to_string())
    }
}
