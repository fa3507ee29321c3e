//! RDF retrieval helpers: document parsing and the cross-origin proxy.

pub mod parse;
pub mod proxy;
