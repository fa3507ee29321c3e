use reqwest::RequestBuilder;

use crate::SolidClient;
use crate::ldp::request::{Credentials, LdpRequest};

impl SolidClient {
    /// Turn a request descriptor into a [`reqwest::RequestBuilder`].
    ///
    /// Credentialed requests use the client with the cookie store; the rest
    /// use the anonymous client, so no session cookie leaks into them.
    pub(crate) fn request_builder(&self, req: LdpRequest) -> RequestBuilder {
        let (method, url, headers, body, credentials) = req.into_parts();

        let client = match credentials {
            Credentials::Include => &self.http,
            Credentials::Omit => &self.anon_http,
        };

        let rb = client.request(method, url).headers(headers);
        match body {
            Some(body) => rb.body(body),
            None => rb,
        }
    }

    /// [`Self::request_builder`] bounded by the fetch timeout.
    pub(crate) fn fetch_builder(&self, req: LdpRequest) -> RequestBuilder {
        self.request_builder(req).timeout(self.fetch.timeout)
    }
}
