use oxrdf::Graph;
use reqwest::{StatusCode, header::CONTENT_TYPE};

use super::metadata::ResourceMetadata;
use super::patch::SparqlPatch;
use super::request::{LdpRequest, PostOptions};
use super::response::RawResponse;
use super::target::IntoResourceUrl;
use crate::errors::{Error, FailureInfo, RequestError, Result};
use crate::rdf::parse::{RdfFormat, parse};
use crate::util::expect_status;
use crate::{SolidClient, cross_log};

const CREATED: &[StatusCode] = &[StatusCode::OK, StatusCode::CREATED];
const OK_ONLY: &[StatusCode] = &[StatusCode::OK];

impl SolidClient {
    /// Send `req` once and return the response, whatever its status.
    async fn send(&self, req: LdpRequest) -> Result<reqwest::Response> {
        cross_log!(debug, "{} {}", req.method(), req.url());
        Ok(self.request_builder(req).send().await?)
    }

    /// Discover a resource with `HEAD`.
    ///
    /// Any HTTP status yields metadata; a missing resource gives
    /// [`ResourceMetadata::exists`] `== false`. Only transport failures are errors.
    ///
    /// # Example
    /// ```no_run
    /// # async fn ex(client: solid_web::SolidClient) -> solid_web::Result<()> {
    /// use solid_web::Capability;
    ///
    /// let meta = client.head("https://alice.example/notes/todo.ttl").await?;
    /// if meta.can(Capability::Patch) {
    ///     // send SPARQL updates
    /// }
    /// # Ok(()) }
    /// ```
    pub async fn head<U: IntoResourceUrl>(&self, url: U) -> Result<ResourceMetadata> {
        let req = LdpRequest::head(url.into_resource_url()?);
        let resp = self.send(req).await?;
        Ok(ResourceMetadata::from_response(&RawResponse::from(&resp)))
    }

    /// `true` when `HEAD` answers `200 OK`.
    pub async fn exists<U: IntoResourceUrl>(&self, url: U) -> Result<bool> {
        Ok(self.head(url).await?.exists())
    }

    /// Retrieve and parse the RDF document holding `url`.
    ///
    /// A fragment (`…/card#me`) is dropped before fetching. Relative IRIs in
    /// the document resolve against the document URL. No credentials are sent.
    ///
    /// Fails with the status and response when the server does not answer
    /// 2xx or the body cannot be parsed.
    pub async fn get<U: IntoResourceUrl>(&self, url: U) -> Result<Graph> {
        let req = LdpRequest::get(url.into_resource_url()?);
        let document = req.url().clone();

        let req = if self.fetch.use_proxy {
            let proxied = self.fetch.proxy_template.expand(&document)?;
            cross_log!(debug, "fetching {document} through {proxied}");
            req.with_url(proxied)
        } else {
            req
        };

        cross_log!(debug, "GET {}", req.url());
        let resp = self.fetch_builder(req).send().await?;
        let raw = RawResponse::from(&resp);
        if !raw.status().is_success() {
            cross_log!(debug, "GET {document} rejected with {}", raw.status());
            return Err(FailureInfo::new(raw).into());
        }

        let format = RdfFormat::from_content_type(raw.header(CONTENT_TYPE));
        let base = if self.fetch.use_proxy {
            &document
        } else {
            raw.url()
        };
        let body = resp.bytes().await?;

        parse(&body, format, base).map_err(|e| {
            cross_log!(warn, "{document} is not valid {}: {e}", format.media_type());
            Error::from(RequestError::Rdf {
                failure: FailureInfo::new(raw.clone()),
                message: e.to_string(),
            })
        })
    }

    /// Create a resource inside the container at `url` with `POST`.
    ///
    /// An empty `data` sends no body. Succeeds on `200` or `201`; the
    /// metadata `url` is the `Location` the server assigned.
    ///
    /// # Example
    /// ```no_run
    /// # async fn ex(client: solid_web::SolidClient) -> solid_web::Result<()> {
    /// use solid_web::PostOptions;
    ///
    /// let photos = client
    ///     .post("https://alice.example/", "", &PostOptions::new().container().slug("photos"))
    ///     .await?;
    /// println!("created {}", photos.url());
    /// # Ok(()) }
    /// ```
    pub async fn post<U, B>(&self, url: U, data: B, opts: &PostOptions) -> Result<ResourceMetadata>
    where
        U: IntoResourceUrl,
        B: Into<Vec<u8>>,
    {
        let req = LdpRequest::post(url.into_resource_url()?, data, opts)?;
        let resp = self.send(req).await?;
        let raw = expect_status(&resp, CREATED)?;
        Ok(ResourceMetadata::from_response(&raw))
    }

    /// Alias of [`Self::post`].
    pub async fn create<U, B>(&self, url: U, data: B, opts: &PostOptions) -> Result<ResourceMetadata>
    where
        U: IntoResourceUrl,
        B: Into<Vec<u8>>,
    {
        self.post(url, data, opts).await
    }

    /// Create or replace the resource at `url` with `PUT`.
    ///
    /// `mime` defaults to `text/turtle`. Succeeds on `200` or `201`.
    pub async fn put<U, B>(&self, url: U, data: B, mime: Option<&str>) -> Result<ResourceMetadata>
    where
        U: IntoResourceUrl,
        B: Into<Vec<u8>>,
    {
        let req = LdpRequest::put(url.into_resource_url()?, data, mime)?;
        let resp = self.send(req).await?;
        let raw = expect_status(&resp, CREATED)?;
        Ok(ResourceMetadata::from_response(&raw))
    }

    /// Alias of [`Self::put`].
    pub async fn replace<U, B>(&self, url: U, data: B, mime: Option<&str>) -> Result<ResourceMetadata>
    where
        U: IntoResourceUrl,
        B: Into<Vec<u8>>,
    {
        self.put(url, data, mime).await
    }

    /// Delete and insert triple statements with a SPARQL Update `PATCH`.
    ///
    /// Statements are raw Turtle triples such as `<a> <b> <c> .`. The request
    /// is sent even when both lists are empty. Succeeds only on `200`.
    ///
    /// # Example
    /// ```no_run
    /// # async fn ex(client: solid_web::SolidClient) -> solid_web::Result<()> {
    /// let me = "<https://alice.example/profile/card#me>";
    /// let name = "<http://xmlns.com/foaf/0.1/name>";
    /// client
    ///     .patch(
    ///         "https://alice.example/profile/card",
    ///         [format!("{me} {name} \"Alice\" .")],
    ///         [format!("{me} {name} \"Alice Liddell\" .")],
    ///     )
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub async fn patch<U, D, I>(&self, url: U, to_delete: D, to_insert: I) -> Result<ResourceMetadata>
    where
        U: IntoResourceUrl,
        D: IntoIterator,
        D::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.apply_patch(url, &SparqlPatch::new(to_delete, to_insert))
            .await
    }

    /// Alias of [`Self::patch`].
    pub async fn update<U, D, I>(&self, url: U, to_delete: D, to_insert: I) -> Result<ResourceMetadata>
    where
        U: IntoResourceUrl,
        D: IntoIterator,
        D::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.patch(url, to_delete, to_insert).await
    }

    /// Send a prepared [`SparqlPatch`]. Same contract as [`Self::patch`].
    pub async fn apply_patch<U: IntoResourceUrl>(
        &self,
        url: U,
        patch: &SparqlPatch,
    ) -> Result<ResourceMetadata> {
        let req = LdpRequest::patch(url.into_resource_url()?, patch);
        let resp = self.send(req).await?;
        let raw = expect_status(&resp, OK_ONLY)?;
        Ok(ResourceMetadata::from_response(&raw))
    }

    /// Delete the resource at `url`. Returns `true` on `200`, fails otherwise.
    pub async fn del<U: IntoResourceUrl>(&self, url: U) -> Result<bool> {
        let req = LdpRequest::delete(url.into_resource_url()?);
        let resp = self.send(req).await?;
        expect_status(&resp, OK_ONLY)?;
        Ok(true)
    }
}
