//! Common imports for quick starts.

// Common
pub use crate::{BuildError, Error, Graph, Result, Url};

// Transport
pub use crate::{SolidClient, SolidClientBuilder};

// Operation inputs
pub use crate::{PostOptions, SparqlPatch};

// Operation outputs
pub use crate::{Capability, ResourceMetadata};
