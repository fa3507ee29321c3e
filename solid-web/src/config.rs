//! Settings passed to the client at construction time.

use std::time::Duration;

use crate::rdf::proxy::ProxyTemplate;

/// Default upper bound for retrieving an RDF document.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_millis(5000);

/// Settings for [`crate::SolidClient::get`].
///
/// # Defaults
/// - `timeout`: [`DEFAULT_FETCH_TIMEOUT`] (5 s)
/// - `proxy_template`: [`crate::rdf::proxy::DEFAULT_PROXY_TEMPLATE`]
/// - `use_proxy`: `false`; documents are fetched directly
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchConfig {
    /// Upper bound for the whole exchange, body included.
    pub timeout: Duration,
    /// Proxy used when `use_proxy` is set.
    pub proxy_template: ProxyTemplate,
    /// Route document retrieval through `proxy_template`.
    pub use_proxy: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_FETCH_TIMEOUT,
            proxy_template: ProxyTemplate::default(),
            use_proxy: false,
        }
    }
}
