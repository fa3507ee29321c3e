//! Unified error types for the `solid-web` crate.
//!
//! This module centralizes all failures that can occur while talking to an LDP
//! server and provides a single top-level [`Error`] enum plus the convenient
//! [`Result`] alias. Errors from lower layers (`reqwest`, RDF parsers, URL parsing)
//! are mapped into structured variants so callers can handle them precisely.

use reqwest::StatusCode;
use thiserror::Error;

use crate::ldp::response::RawResponse;

// --- Build-Time Error ---

/// Errors that can occur while building a [`crate::SolidClient`].
#[derive(Debug, Error)]
pub enum BuildError {
    /// Failed to build the HTTP client (reqwest configuration).
    #[error("Failed to build the HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    /// The proxy template does not contain the `{uri}` placeholder.
    #[error("Proxy template {0:?} has no `{{uri}}` placeholder")]
    ProxyTemplate(String),
}

// --- The Main Operational Error Enum ---

/// The crate’s top-level error type.
///
/// It groups failures into high-level categories:
/// - [`Error::Request`] — HTTP transport, status and RDF parsing issues
/// - [`Error::Parse`] — URL parsing failures
/// - [`Error::Build`] — construction of the client failed
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request/response failed (transport, server status, RDF body).
    #[error("Request failed: {0}")]
    Request(#[from] RequestError),

    /// URL parsing failed while preparing a request.
    #[error("Failed to parse URL: {0}")]
    Parse(#[from] url::ParseError),

    /// Building the client failed.
    #[error("Client build failed: {0}")]
    Build(#[from] BuildError),
}

impl Error {
    /// HTTP status of the exchange that caused this error, if the server answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Request(RequestError::Status(failure))
            | Error::Request(RequestError::Rdf { failure, .. }) => Some(failure.status),
            Error::Request(RequestError::Transport(err)) => err.status(),
            _ => None,
        }
    }

    /// Snapshot of the response that caused this error, if one was received.
    pub fn raw_response(&self) -> Option<&RawResponse> {
        self.failure().map(|f| &f.raw_response)
    }

    /// The `{status, raw_response}` pair for server-side rejections.
    pub fn failure(&self) -> Option<&FailureInfo> {
        match self {
            Error::Request(RequestError::Status(failure))
            | Error::Request(RequestError::Rdf { failure, .. }) => Some(failure),
            _ => None,
        }
    }
}

/// Status and response of an exchange the server did not complete successfully.
#[derive(Debug, Clone)]
pub struct FailureInfo {
    /// The HTTP status code returned by the server.
    pub status: StatusCode,
    /// The response as received, for caller inspection.
    pub raw_response: RawResponse,
}

impl FailureInfo {
    pub(crate) fn new(raw_response: RawResponse) -> Self {
        Self {
            status: raw_response.status(),
            raw_response,
        }
    }
}

impl std::fmt::Display for FailureInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.status, self.raw_response.url())
    }
}

// --- Consolidated Request Error ---

/// Transport and server-side HTTP errors.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Network/protocol failure from reqwest (timeouts, TLS, I/O, etc.).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status the operation does not accept.
    #[error("Server responded with an error: {0}")]
    Status(FailureInfo),

    /// The document was retrieved but could not be parsed as RDF.
    #[error("Failed to parse RDF document {failure}: {message}")]
    Rdf {
        /// The exchange that delivered the unparsable document.
        failure: FailureInfo,
        /// Error message from the RDF parser.
        message: String,
    },

    /// Caller supplied an invalid argument for this API.
    #[error("Invalid request: {message}")]
    Validation {
        /// Human-readable explanation of what was invalid.
        message: String,
    },
}

/// A specialized `Result` type for `solid-web` operations.
pub type Result<T> = std::result::Result<T, Error>;

// Ergonomic "Staircase" From Implementations ---
// A macro to reduce boilerplate for converting base errors into the top-level Error.
macro_rules! impl_from_for_error {
    ($from_type:ty, $to_variant:path) => {
        impl From<$from_type> for Error {
            fn from(err: $from_type) -> Self {
                $to_variant(err.into())
            }
        }
    };
}

// Request Errors
impl_from_for_error!(reqwest::Error, Error::Request);
impl_from_for_error!(FailureInfo, Error::Request);

impl From<FailureInfo> for RequestError {
    fn from(failure: FailureInfo) -> Self {
        RequestError::Status(failure)
    }
}
