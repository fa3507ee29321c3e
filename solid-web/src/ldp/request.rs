//! Request descriptors for LDP interactions.
//!
//! An [`LdpRequest`] is fully specified before anything is sent: method, URL,
//! headers, optional body and credentials mode. The client only hands it to
//! the transport, so everything about the shape of a request can be checked
//! without a server.

use reqwest::{
    Method,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, LINK},
};
use url::Url;

use super::patch::SparqlPatch;
use super::vocab::{LDP_BASIC_CONTAINER, LDP_RESOURCE, SLUG, SPARQL_UPDATE, TEXT_TURTLE};
use crate::errors::{RequestError, Result};

/// Whether cookies and other ambient credentials accompany a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// Send the session context (cookie store / browser `credentials: "include"`).
    Include,
    /// Send no ambient credentials.
    Omit,
}

/// Options for creating a resource with `POST`.
///
/// ```
/// # use solid_web::PostOptions;
/// let opts = PostOptions::new().slug("photos").container();
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct PostOptions {
    slug: Option<String>,
    container: bool,
    mime: Option<String>,
}

impl PostOptions {
    /// Create a plain resource with a `text/turtle` body and a server-chosen name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Suggest a name for the new resource (`Slug` header). Empty slugs are ignored.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Create a basic container. Forces `text/turtle` as the content type.
    pub fn container(mut self) -> Self {
        self.container = true;
        self
    }

    /// Set whether a basic container is created.
    pub fn is_container(mut self, container: bool) -> Self {
        self.container = container;
        self
    }

    /// Content type of the body. Ignored for containers.
    pub fn mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }
}

/// A fully specified outgoing request.
#[derive(Clone, Debug)]
pub struct LdpRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    credentials: Credentials,
}

impl LdpRequest {
    fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            credentials: Credentials::Include,
        }
    }

    /// `HEAD url`, no body.
    pub fn head(url: Url) -> Self {
        Self::new(Method::HEAD, url)
    }

    /// `GET` of the document holding `url`: the fragment is dropped, RDF
    /// media types are requested and no credentials are sent.
    pub fn get(mut url: Url) -> Self {
        url.set_fragment(None);
        let mut req = Self::new(Method::GET, url);
        req.credentials = Credentials::Omit;
        req.headers
            .insert(ACCEPT, HeaderValue::from_static(ACCEPT_RDF));
        req
    }

    /// `POST url` creating a resource or basic container.
    ///
    /// Fails only when the slug or MIME type is not a valid header value.
    pub fn post(url: Url, body: impl Into<Vec<u8>>, opts: &PostOptions) -> Result<Self> {
        let (mime, resource_type) = if opts.container {
            (TEXT_TURTLE, LDP_BASIC_CONTAINER)
        } else {
            (mime_or_turtle(opts.mime.as_deref()), LDP_RESOURCE)
        };

        let mut req = Self::new(Method::POST, url);
        req.set_header(CONTENT_TYPE, mime)?;
        req.set_header(LINK, &format!("<{resource_type}>; rel=\"type\""))?;
        if let Some(slug) = opts.slug.as_deref().filter(|s| !s.is_empty()) {
            req.set_header(HeaderName::from_static(SLUG), slug)?;
        }
        req.set_body(body.into());
        Ok(req)
    }

    /// `PUT url` replacing the resource. `mime` defaults to `text/turtle`.
    pub fn put(url: Url, body: impl Into<Vec<u8>>, mime: Option<&str>) -> Result<Self> {
        let mut req = Self::new(Method::PUT, url);
        req.set_header(CONTENT_TYPE, mime_or_turtle(mime))?;
        req.set_body(body.into());
        Ok(req)
    }

    /// `PATCH url` with a SPARQL Update body. An empty patch sends no body.
    pub fn patch(url: Url, patch: &SparqlPatch) -> Self {
        let mut req = Self::new(Method::PATCH, url);
        req.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(SPARQL_UPDATE));
        req.set_body(patch.to_string().into_bytes());
        req
    }

    /// `DELETE url`, no body.
    pub fn delete(url: Url) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Target URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Request body; `None` when an empty request is sent.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Credentials mode.
    pub fn credentials(&self) -> Credentials {
        self.credentials
    }

    pub(crate) fn into_parts(self) -> (Method, Url, HeaderMap, Option<Vec<u8>>, Credentials) {
        (self.method, self.url, self.headers, self.body, self.credentials)
    }

    /// Point the request somewhere else, keeping everything but the URL.
    pub(crate) fn with_url(mut self, url: Url) -> Self {
        self.url = url;
        self
    }

    fn set_header(&mut self, name: HeaderName, value: &str) -> Result<()> {
        let value = HeaderValue::from_str(value).map_err(|e| RequestError::Validation {
            message: format!("invalid value for header `{name}` ({value:?}): {e}"),
        })?;
        self.headers.insert(name, value);
        Ok(())
    }

    fn set_body(&mut self, body: Vec<u8>) {
        self.body = (!body.is_empty()).then_some(body);
    }
}

/// An absent or empty MIME type means Turtle.
fn mime_or_turtle(mime: Option<&str>) -> &str {
    mime.filter(|m| !m.is_empty()).unwrap_or(TEXT_TURTLE)
}

/// Media types understood by [`crate::rdf::parse`], best first.
const ACCEPT_RDF: &str = "text/turtle;q=1.0, application/n-triples;q=0.9, application/rdf+xml;q=0.8";
