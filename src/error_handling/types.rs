//! Error type definitions.
//!
//! This module defines the startup, configuration, and per-lookup error types.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures. All of them abort the run.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The address pattern failed to compile.
    #[error("Address pattern compilation error: {0}")]
    PatternError(#[from] regex::Error),
}

/// Error types for configuration read from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A variable holds a value outside its accepted set.
    #[error("Invalid value \"{value}\" for {key}")]
    InvalidValue {
        /// Environment variable name
        key: &'static str,
        /// Offending value, as read
        value: String,
    },
}

/// Failure of a single lookup.
///
/// The `Display` output of each variant is the line printed after the hop index,
/// so the wording is part of the program's output format.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The request could not be built (e.g. the endpoint is not a valid URL).
    #[error("Error creating request for IP {address}: {source}")]
    RequestBuild {
        address: String,
        #[source]
        source: ReqwestError,
    },

    /// Connection, TLS, or other transport failure.
    #[error("Error retrieving IP {address}: {source}")]
    Transport {
        address: String,
        #[source]
        source: ReqwestError,
    },

    /// The response arrived but its body could not be read.
    #[error("Error reading response body {address}: {source}")]
    BodyRead {
        address: String,
        #[source]
        source: ReqwestError,
    },

    /// The body is not a JSON object.
    ///
    /// The geolocation service answers private and reserved ranges this way, so any
    /// undecodable body is reported as a private address.
    #[error("{address} is a private IP address")]
    PrivateAddress { address: String },

    /// The body is a JSON object but a required field is missing or not a string.
    #[error("Error decoding response for IP {address}: {source}")]
    MalformedResponse {
        address: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LookupError {
    /// Classification used for statistics.
    pub fn error_type(&self) -> ErrorType {
        match self {
            LookupError::RequestBuild { .. } => ErrorType::RequestBuild,
            LookupError::Transport { .. } => ErrorType::Transport,
            LookupError::BodyRead { .. } => ErrorType::BodyRead,
            LookupError::PrivateAddress { .. } => ErrorType::PrivateAddress,
            LookupError::MalformedResponse { .. } => ErrorType::MalformedResponse,
        }
    }

    /// The address the failed lookup was issued for.
    pub fn address(&self) -> &str {
        match self {
            LookupError::RequestBuild { address, .. }
            | LookupError::Transport { address, .. }
            | LookupError::BodyRead { address, .. }
            | LookupError::PrivateAddress { address }
            | LookupError::MalformedResponse { address, .. } => address,
        }
    }
}

/// Types of lookup failures, as counted in the end-of-run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    RequestBuild,
    Transport,
    BodyRead,
    PrivateAddress,
    MalformedResponse,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::RequestBuild => "Request build error",
            ErrorType::Transport => "Transport error",
            ErrorType::BodyRead => "Body read error",
            ErrorType::PrivateAddress => "Private IP address",
            ErrorType::MalformedResponse => "Malformed response",
        }
    }
}
