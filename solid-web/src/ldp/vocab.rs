//! IRIs and media types of the Linked Data Platform and SPARQL Update.

/// `ldp:Resource`, advertised when creating a non-container resource.
pub const LDP_RESOURCE: &str = "http://www.w3.org/ns/ldp#Resource";
/// `ldp:BasicContainer`, advertised when creating a container.
pub const LDP_BASIC_CONTAINER: &str = "http://www.w3.org/ns/ldp#BasicContainer";
/// `ldp:Container`.
pub const LDP_CONTAINER: &str = "http://www.w3.org/ns/ldp#Container";

/// Media type of SPARQL 1.1 Update request bodies.
pub const SPARQL_UPDATE: &str = "application/sparql-update";
/// Default media type for resource bodies.
pub const TEXT_TURTLE: &str = "text/turtle";
/// Media type of N-Triples documents.
pub const N_TRIPLES: &str = "application/n-triples";
/// Media type of RDF/XML documents.
pub const RDF_XML: &str = "application/rdf+xml";

/// Request header carrying the suggested name for a new resource.
pub const SLUG: &str = "slug";
