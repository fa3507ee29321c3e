#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(any(), deny(clippy::unwrap_used))]

mod client;
pub mod config;
pub mod errors;
pub mod ldp;
mod macros;
pub mod rdf;
mod util;

pub mod prelude;

// --- PUBLIC API EXPORTS ---
// Transport
pub use client::core::{SolidClient, SolidClientBuilder};
pub use config::{DEFAULT_FETCH_TIMEOUT, FetchConfig};

// Error types
pub use errors::{BuildError, Error, FailureInfo, Result};

// Request shapes and response metadata
pub use ldp::{
    link::LinkRelations,
    metadata::{Capability, ResourceMetadata},
    patch::SparqlPatch,
    request::{Credentials, LdpRequest, PostOptions},
    response::RawResponse,
    target::IntoResourceUrl,
};
pub use rdf::proxy::{DEFAULT_PROXY_TEMPLATE, ProxyTemplate};

// Re-exports
pub use oxrdf::Graph;
pub use reqwest::{Method, StatusCode};
pub use url::Url;
