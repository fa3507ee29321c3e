use reqwest::RequestBuilder;

use crate::SolidClient;
use crate::ldp::request::{Credentials, LdpRequest};

impl SolidClient {
    /// Turn a request descriptor into a [`reqwest::RequestBuilder`].
    ///
    /// The browser owns the cookies; the fetch credentials mode decides
    /// whether they are sent.
    pub(crate) fn request_builder(&self, req: LdpRequest) -> RequestBuilder {
        let (method, url, headers, body, credentials) = req.into_parts();

        let rb = self.http.request(method, url).headers(headers);
        let rb = match credentials {
            Credentials::Include => rb.fetch_credentials_include(),
            Credentials::Omit => rb.fetch_credentials_omit(),
        };
        match body {
            Some(body) => rb.body(body),
            None => rb,
        }
    }

    /// Same as [`Self::request_builder`]; the browser applies its own timeouts.
    // TODO: honour `FetchConfig::timeout` once reqwest supports timeouts in wasm
    pub(crate) fn fetch_builder(&self, req: LdpRequest) -> RequestBuilder {
        self.request_builder(req)
    }
}
