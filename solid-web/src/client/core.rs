#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;
use std::time::Duration;

use crate::config::FetchConfig;
use crate::errors::BuildError;
use crate::rdf::proxy::ProxyTemplate;

const DEFAULT_USER_AGENT: &str = concat!("solid-web", "@", env!("CARGO_PKG_VERSION"),);

#[derive(Debug, Clone, Default)]
#[must_use]
/// Configures a [`SolidClient`] before construction.
///
/// Customize timeouts, user-agent, the cookie jar carrying the session and
/// how RDF documents are fetched. Most code obtains this via
/// [`SolidClient::builder()`], which simply returns `SolidClientBuilder::default()`.
///
/// # Defaults
/// - HTTP request timeout: reqwest default (no global timeout) unless set via
///   [`Self::request_timeout`]
/// - RDF fetch: see [`FetchConfig`] (5 s timeout, no proxy)
/// - User-agent: `solid-web@<crate-version>` plus any [`Self::user_agent_extra`]
///
/// # Example
/// ```no_run
/// use std::time::Duration;
/// # use solid_web::SolidClient;
/// let client = SolidClient::builder()
///     .request_timeout(Duration::from_secs(10))
///     .fetch_timeout(Duration::from_secs(2))
///     .user_agent_extra("myapp/1.2.3")
///     .build()?;
/// # Ok::<_, solid_web::BuildError>(())
/// ```
pub struct SolidClientBuilder {
    http_request_timeout: Option<Duration>,

    /// Optional user-agent segment appended to the default UA for app-level telemetry.
    user_agent_extra: Option<String>,

    fetch: FetchConfig,

    /// Jar shared with whatever established the session (native only).
    #[cfg(not(target_arch = "wasm32"))]
    cookie_jar: Option<Arc<reqwest::cookie::Jar>>,
}

impl SolidClientBuilder {
    /// Set HTTP requests timeout for `HEAD`, `POST`, `PUT`, `PATCH` and `DELETE`.
    pub fn request_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.http_request_timeout = Some(timeout);

        self
    }

    /// Upper bound for `GET` document retrieval.
    pub fn fetch_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.fetch.timeout = timeout;

        self
    }

    /// Proxy used for document retrieval when [`Self::use_proxy`] is on.
    /// Must contain `{uri}`.
    pub fn proxy_template<S: Into<String>>(&mut self, template: S) -> &mut Self {
        self.fetch.proxy_template = ProxyTemplate::new(template);

        self
    }

    /// Route `GET` through the proxy template.
    pub fn use_proxy(&mut self, enabled: bool) -> &mut Self {
        self.fetch.use_proxy = enabled;

        self
    }

    /// Replace all fetch settings at once.
    pub fn fetch_config(&mut self, config: FetchConfig) -> &mut Self {
        self.fetch = config;

        self
    }

    /// Append an extra user-agent segment after the default `solid-web@<version>`.
    /// Example: `.user_agent_extra("myapp/1.2.3")`
    pub fn user_agent_extra<S: Into<String>>(&mut self, extra: S) -> &mut Self {
        self.user_agent_extra = Some(extra.into());
        self
    }

    /// Use `jar` for credentialed requests instead of a private cookie store,
    /// e.g. one already holding a login session.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn cookie_jar(&mut self, jar: Arc<reqwest::cookie::Jar>) -> &mut Self {
        self.cookie_jar = Some(jar);
        self
    }

    /// Build [SolidClient]
    pub fn build(&self) -> Result<SolidClient, BuildError> {
        if !self.fetch.proxy_template.is_valid() {
            return Err(BuildError::ProxyTemplate(
                self.fetch.proxy_template.to_string(),
            ));
        }

        // Compose user agent with optional extra part.
        let user_agent = match &self.user_agent_extra {
            Some(extra) if !extra.trim().is_empty() => {
                format!("{DEFAULT_USER_AGENT} {}", extra.trim())
            }
            _ => DEFAULT_USER_AGENT.to_string(),
        };

        #[cfg(not(target_arch = "wasm32"))]
        let (http, anon_http) = {
            let mut http_builder = reqwest::Client::builder().user_agent(user_agent.as_str());
            http_builder = match &self.cookie_jar {
                Some(jar) => http_builder.cookie_provider(Arc::clone(jar)),
                None => http_builder.cookie_store(true),
            };
            if let Some(timeout) = self.http_request_timeout {
                http_builder = http_builder.timeout(timeout);
            }

            // The fetch timeout is applied per request.
            let anon_builder = reqwest::Client::builder().user_agent(user_agent.as_str());

            (http_builder.build()?, anon_builder.build()?)
        };

        // TODO: apply `http_request_timeout` once reqwest supports timeouts in wasm
        #[cfg(target_arch = "wasm32")]
        let http = reqwest::Client::builder().user_agent(user_agent.as_str()).build()?;

        Ok(SolidClient {
            http,
            #[cfg(not(target_arch = "wasm32"))]
            anon_http,
            fetch: self.fetch.clone(),
        })
    }
}

/// Client for resources on a Solid / Linked Data Platform server.
///
/// `SolidClient` is stateless between calls: every operation builds one
/// [`crate::LdpRequest`], sends it once, and interprets the response. It owns:
/// - A credentialed reqwest client for `HEAD`, `POST`, `PUT`, `PATCH` and `DELETE`.
/// - The [`FetchConfig`] used by `GET`.
///
/// ### What it *doesn’t* do
/// - It does not log in. Session cookies come from the cookie store (or the
///   jar passed to [`SolidClientBuilder::cookie_jar`]) on native targets and
///   from the browser on WASM.
/// - No caching and no retries.
///
/// ### Platform notes
/// - **Native:** credentialed requests go through a client with a cookie store;
///   `GET` uses a second client without one.
/// - **WASM:** a single client; credentials are selected per request through
///   the fetch API (`include` / `omit`).
///
/// ### Examples
/// ```no_run
/// # use solid_web::{SolidClient, Result};
/// # async fn run() -> Result<()> {
/// let client = SolidClient::new()?;
/// let meta = client.head("https://alice.example/notes/").await?;
/// if meta.exists() {
///     println!("acl at {:?}", meta.acl_url());
/// }
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct SolidClient {
    pub(crate) http: reqwest::Client,

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) anon_http: reqwest::Client,

    pub(crate) fetch: FetchConfig,
}

impl SolidClient {
    /// Creates a client with default settings.
    pub fn new() -> Result<SolidClient, BuildError> {
        Self::builder().build()
    }

    /// Returns a builder to edit settings before creating [`SolidClient`].
    pub fn builder() -> SolidClientBuilder {
        SolidClientBuilder::default()
    }

    // === Getters ===

    /// Settings used by `GET`.
    pub fn fetch_config(&self) -> &FetchConfig {
        &self.fetch
    }
}
