//! Cross-origin proxy template for document retrieval.

use std::fmt;

use url::{Url, form_urlencoded};

/// Placeholder substituted with the encoded document URI.
pub const URI_PLACEHOLDER: &str = "{uri}";

/// Default cross-origin proxy.
pub const DEFAULT_PROXY_TEMPLATE: &str = "https://databox.me/,proxy?uri={uri}";

/// URL template of a proxy that retrieves documents on the client's behalf.
///
/// ```
/// # use solid_web::ProxyTemplate;
/// # use url::Url;
/// let proxy = ProxyTemplate::default();
/// let doc = Url::parse("https://bob.example/card#me")?;
/// assert_eq!(
///     proxy.expand(&doc)?.as_str(),
///     "https://databox.me/,proxy?uri=https%3A%2F%2Fbob.example%2Fcard%23me"
/// );
/// # Ok::<_, url::ParseError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProxyTemplate(String);

impl ProxyTemplate {
    /// Wrap a template. It should contain [`URI_PLACEHOLDER`]; see [`Self::is_valid`].
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// `true` when the template embeds the document URI.
    pub fn is_valid(&self) -> bool {
        self.0.contains(URI_PLACEHOLDER)
    }

    /// The raw template.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Proxy URL fetching `uri`.
    pub fn expand(&self, uri: &Url) -> Result<Url, url::ParseError> {
        let encoded: String = form_urlencoded::byte_serialize(uri.as_str().as_bytes()).collect();
        Url::parse(&self.0.replace(URI_PLACEHOLDER, &encoded))
    }
}

impl Default for ProxyTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_PROXY_TEMPLATE)
    }
}

impl fmt::Display for ProxyTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
