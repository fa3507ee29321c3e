//! Accepted forms of resource addresses.

use url::Url;

use crate::errors::Result;

/// Anything that names a resource: a [`Url`] or an absolute URL string.
///
/// Parsing happens before any request is built, so a malformed URL fails
/// with [`crate::Error::Parse`] without touching the network.
pub trait IntoResourceUrl {
    /// Parse into an absolute URL.
    fn into_resource_url(self) -> Result<Url>;
}

impl IntoResourceUrl for Url {
    fn into_resource_url(self) -> Result<Url> {
        Ok(self)
    }
}

impl IntoResourceUrl for &Url {
    fn into_resource_url(self) -> Result<Url> {
        Ok(self.clone())
    }
}

impl IntoResourceUrl for &str {
    fn into_resource_url(self) -> Result<Url> {
        Ok(Url::parse(self)?)
    }
}

impl IntoResourceUrl for String {
    fn into_resource_url(self) -> Result<Url> {
        self.as_str().into_resource_url()
    }
}

impl IntoResourceUrl for &String {
    fn into_resource_url(self) -> Result<Url> {
        self.as_str().into_resource_url()
    }
}
