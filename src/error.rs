//! Error types for the lemon.markets API client.
//!
//! Every failure is reported through a single [`Error`] enum. The variants fall
//! into three domains that are never conflated (see [`ErrorKind`]):
//!
//! - **Transport**: the exchange itself failed (connection, timeout, unexpected
//!   HTTP status, unreadable body).
//! - **Domain**: the server rejected the request with a structured business
//!   error. Only these messages are meant to be shown to end users verbatim.
//! - **Decode**: the response did not have the shape the client expected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A specialized `Result` type for lemon.markets operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all lemon.markets API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed before a response was received, or the body
    /// could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timed out
    #[error("Request timeout")]
    Timeout,

    /// The server answered with a status outside the success range that does
    /// not carry a structured domain error.
    #[error("unknown http error from backend: {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body, kept for debugging only
        body: String,
    },

    /// The server reported a business rule violation.
    #[error("{0}")]
    Api(ApiError),

    /// The response body or its `results` payload had an unexpected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network failure or unexpected HTTP status.
    Transport,
    /// Structured business error reported by the server.
    Domain,
    /// Client and server disagree on the response schema.
    Decode,
    /// The request was rejected locally before anything was sent.
    Client,
}

impl Error {
    /// Classify this error.
    ///
    /// # Example
    ///
    /// ```
    /// use lemon_markets_rs::{Error, ErrorKind};
    ///
    /// let err = Error::Status { status: 503, body: String::new() };
    /// assert_eq!(err.kind(), ErrorKind::Transport);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Http(_) | Error::Timeout | Error::Status { .. } => ErrorKind::Transport,
            Error::Api(_) => ErrorKind::Domain,
            Error::Decode(_) => ErrorKind::Decode,
            Error::InvalidInput(_) | Error::UrlParse(_) | Error::Config(_) => ErrorKind::Client,
        }
    }

    /// Returns `true` if the exchange with the server failed.
    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    /// Returns `true` if the server rejected the request with a domain error.
    pub fn is_domain(&self) -> bool {
        self.kind() == ErrorKind::Domain
    }

    /// Returns `true` if the response could not be decoded.
    pub fn is_decode(&self) -> bool {
        self.kind() == ErrorKind::Decode
    }

    /// The structured domain error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// The HTTP status code attached to this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Api(_) => Some(crate::client::DOMAIN_ERROR_STATUS),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else {
            Error::Http(err)
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

/// Structured business error returned by the server.
///
/// Its `Display` output is exactly `error_message`, so it can be surfaced to a
/// user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Server timestamp of the failure
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
    /// Trading mode (`paper` or `money`)
    #[serde(default)]
    pub mode: String,
    /// Always `error` for domain errors
    #[serde(default)]
    pub status: String,
    /// Machine-readable error code, e.g. `order_total_price_limit_exceeded`
    #[serde(rename = "error_code", default)]
    pub code: String,
    /// Human-readable error message
    #[serde(rename = "error_message", default)]
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}
