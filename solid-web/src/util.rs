use reqwest::{Response, StatusCode};

use crate::cross_log;
use crate::errors::{FailureInfo, Result};
use crate::ldp::response::RawResponse;

/// Snapshot `response` and fail unless its status is one of `accepted`.
///
/// The body is never read; a rejection carries the status and headers only.
pub(crate) fn expect_status(response: &Response, accepted: &[StatusCode]) -> Result<RawResponse> {
    let raw = RawResponse::from(response);
    if accepted.contains(&raw.status()) {
        return Ok(raw);
    }

    cross_log!(
        debug,
        "{} rejected with {} (accepted: {:?})",
        raw.url(),
        raw.status(),
        accepted
    );
    Err(FailureInfo::new(raw).into())
}
