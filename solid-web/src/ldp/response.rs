//! Response snapshots kept for caller inspection.

use reqwest::{
    Response, StatusCode,
    header::{AsHeaderName, HeaderMap},
};
use url::Url;

/// Snapshot of a completed HTTP response: status, final URL and headers.
///
/// Kept inside [`crate::ResourceMetadata`] and [`crate::errors::FailureInfo`] so
/// callers can inspect anything the typed fields do not cover. The body is
/// not retained.
#[derive(Clone, Debug)]
pub struct RawResponse {
    status: StatusCode,
    url: Url,
    headers: HeaderMap,
}

impl RawResponse {
    /// Assemble a snapshot from its parts.
    pub fn new(status: StatusCode, url: Url, headers: HeaderMap) -> Self {
        Self {
            status,
            url,
            headers,
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Final URL after redirects.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// All response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// First value of header `name` as a string.
    ///
    /// Absent and non-UTF-8 values both yield `None`.
    pub fn header<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl From<&Response> for RawResponse {
    fn from(resp: &Response) -> Self {
        Self::new(resp.status(), resp.url().clone(), resp.headers().clone())
    }
}
