//! Error types for the todos fetch.
//!
//! # Design
//! One variant per failure class so callers can tell a transport failure
//! from a bad status, an undecodable body, or a shape mismatch. Transport
//! and JSON errors are kept as sources rather than flattened to strings.

use std::fmt;

use thiserror::Error;

/// Errors returned by `TodoClient` and `Fetcher`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a complete response (DNS, connect, TLS,
    /// or a failure while reading the body).
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The body of a 2xx response is not valid JSON.
    #[error("response body is not valid JSON")]
    MalformedResponse(#[source] serde_json::Error),

    /// The body is valid JSON but not an array of todo records.
    #[error("schema validation failed: {0}")]
    SchemaValidation(SchemaViolation),
}

/// Plain discriminant of [`ApiError`], for callers that only branch on the
/// failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    HttpStatus,
    MalformedResponse,
    SchemaValidation,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network { .. } => ErrorKind::Network,
            ApiError::HttpStatus { .. } => ErrorKind::HttpStatus,
            ApiError::MalformedResponse(_) => ErrorKind::MalformedResponse,
            ApiError::SchemaValidation(_) => ErrorKind::SchemaValidation,
        }
    }
}

/// Where and why the payload failed to match the todo schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// Index of the offending element; `None` when the top-level value
    /// itself is wrong.
    pub index: Option<usize>,
    pub message: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "item {index}: {}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}
