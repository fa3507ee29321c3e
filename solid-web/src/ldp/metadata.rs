//! Capability descriptor read from LDP response headers.

use std::collections::BTreeSet;
use std::fmt;

use reqwest::{
    StatusCode,
    header::{ALLOW, LOCATION},
};
use url::Url;

use super::link::LinkRelations;
use super::response::RawResponse;
use super::vocab::{LDP_BASIC_CONTAINER, LDP_CONTAINER, SPARQL_UPDATE};

/// Relations consulted, in order, for the description document.
const META_RELATIONS: &[&str] = &["meta", "describedBy"];
const ACL_RELATIONS: &[&str] = &["acl"];

/// A write method the server advertises for a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// `Accept-Patch` lists `application/sparql-update`.
    Patch,
    /// `Allow` lists `PUT`.
    Put,
    /// `Allow` lists `POST`.
    Post,
    /// `Allow` lists `DELETE`.
    Delete,
}

impl Capability {
    /// Lowercase tag (`"patch"`, `"put"`, `"post"`, `"delete"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Capability::Patch => "patch",
            Capability::Put => "put",
            Capability::Post => "post",
            Capability::Delete => "delete",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Protocol metadata for a resource, read from the headers of one response.
///
/// Absent headers never cause errors; they leave the matching field empty.
#[derive(Clone, Debug)]
pub struct ResourceMetadata {
    url: String,
    acl_link: Option<String>,
    meta_link: Option<String>,
    user: String,
    websocket_endpoint: String,
    editable_via: BTreeSet<Capability>,
    exists: bool,
    links: LinkRelations,
    raw_response: RawResponse,
}

impl ResourceMetadata {
    /// Build from a completed response.
    pub fn from_response(resp: &RawResponse) -> Self {
        let links = LinkRelations::from_headers(resp.headers());

        let url = resp
            .header(LOCATION)
            .filter(|location| !location.is_empty())
            .map_or_else(|| resp.url().to_string(), str::to_string);

        let acl_link = links.first_of(ACL_RELATIONS).map(str::to_string);
        let meta_link = links.first_of(META_RELATIONS).map(str::to_string);

        let user = resp.header("user").unwrap_or_default().to_string();
        let websocket_endpoint = resp.header("updates-via").unwrap_or_default().to_string();

        let editable_via = editable_via(
            resp.header("accept-patch").unwrap_or_default(),
            resp.header(ALLOW).unwrap_or_default(),
        );

        Self {
            url,
            acl_link,
            meta_link,
            user,
            websocket_endpoint,
            editable_via,
            exists: resp.status() == StatusCode::OK,
            links,
            raw_response: resp.clone(),
        }
    }

    /// `Location` of the resource if the server sent one, else the final request URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Target of `Link: rel="acl"`, verbatim.
    pub fn acl_link(&self) -> Option<&str> {
        self.acl_link.as_deref()
    }

    /// Target of `Link: rel="meta"`, or `rel="describedBy"` when `meta` is absent.
    pub fn meta_link(&self) -> Option<&str> {
        self.meta_link.as_deref()
    }

    /// [`Self::acl_link`] resolved against [`Self::url`].
    pub fn acl_url(&self) -> Option<Url> {
        self.resolve(self.acl_link.as_deref()?)
    }

    /// [`Self::meta_link`] resolved against [`Self::url`].
    pub fn meta_url(&self) -> Option<Url> {
        self.resolve(self.meta_link.as_deref()?)
    }

    /// Identity the server reports for this request (`User` header), or `""`.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Realtime updates endpoint (`Updates-Via` header), or `""`.
    pub fn websocket_endpoint(&self) -> &str {
        &self.websocket_endpoint
    }

    /// Write methods the server advertises.
    pub fn editable_via(&self) -> &BTreeSet<Capability> {
        &self.editable_via
    }

    /// `true` when `capability` is advertised.
    pub fn can(&self, capability: Capability) -> bool {
        self.editable_via.contains(&capability)
    }

    /// `true` when any write method is advertised.
    pub fn is_editable(&self) -> bool {
        !self.editable_via.is_empty()
    }

    /// `true` iff the response status was `200 OK`.
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// `true` when `Link: rel="type"` names an LDP container type.
    pub fn is_container(&self) -> bool {
        matches!(
            self.links.get("type"),
            Some(LDP_BASIC_CONTAINER | LDP_CONTAINER)
        )
    }

    /// Every relation advertised in `Link` headers.
    pub fn links(&self) -> &LinkRelations {
        &self.links
    }

    /// The response this metadata was read from.
    pub fn raw_response(&self) -> &RawResponse {
        &self.raw_response
    }

    fn resolve(&self, target: &str) -> Option<Url> {
        match Url::parse(&self.url) {
            Ok(base) => base.join(target).ok(),
            Err(_) => Url::parse(target).ok(),
        }
    }
}

fn editable_via(accept_patch: &str, allow: &str) -> BTreeSet<Capability> {
    let mut caps = BTreeSet::new();
    if accept_patch.contains(SPARQL_UPDATE) {
        caps.insert(Capability::Patch);
    }
    for (token, cap) in [
        ("PUT", Capability::Put),
        ("POST", Capability::Post),
        ("DELETE", Capability::Delete),
    ] {
        if allow.contains(token) {
            caps.insert(cap);
        }
    }
    caps
}

#[cfg(test)]
mod test {
    use reqwest::header::{HeaderMap, HeaderValue, LINK};

    use super::*;

    fn response(status: u16, headers: &[(&'static str, &'static str)]) -> RawResponse {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            map.append(*name, HeaderValue::from_static(*value));
        }
        RawResponse::new(
            StatusCode::from_u16(status).unwrap(),
            Url::parse("https://alice.example/notes/todo.ttl").unwrap(),
            map,
        )
    }

    #[test]
    fn ok_without_link_header() {
        let meta = ResourceMetadata::from_response(&response(200, &[]));
        assert!(meta.exists());
        assert_eq!(meta.acl_link(), None);
        assert_eq!(meta.meta_link(), None);
        assert_eq!(meta.url(), "https://alice.example/notes/todo.ttl");
        assert_eq!(meta.user(), "");
        assert_eq!(meta.websocket_endpoint(), "");
        assert!(meta.editable_via().is_empty());
        assert!(!meta.is_editable());
    }

    #[test]
    fn not_found_does_not_exist() {
        let meta = ResourceMetadata::from_response(&response(404, &[]));
        assert!(!meta.exists());
        // Only 200 counts, even for other 2xx codes.
        let meta = ResourceMetadata::from_response(&response(201, &[]));
        assert!(!meta.exists());
    }

    #[test]
    fn reads_links_and_plain_headers() {
        let meta = ResourceMetadata::from_response(&response(
            200,
            &[
                (
                    "link",
                    r#"<todo.ttl.acl>; rel="acl", <todo.ttl.meta>; rel="describedBy""#,
                ),
                ("location", "https://alice.example/notes/todo-1.ttl"),
                ("user", "https://alice.example/profile/card#me"),
                ("updates-via", "wss://alice.example"),
            ],
        ));
        assert_eq!(meta.url(), "https://alice.example/notes/todo-1.ttl");
        assert_eq!(meta.acl_link(), Some("todo.ttl.acl"));
        assert_eq!(meta.meta_link(), Some("todo.ttl.meta"));
        assert_eq!(meta.user(), "https://alice.example/profile/card#me");
        assert_eq!(meta.websocket_endpoint(), "wss://alice.example");
        assert_eq!(
            meta.acl_url().unwrap().as_str(),
            "https://alice.example/notes/todo.ttl.acl"
        );

        let links: Vec<_> = meta.links().iter().collect();
        assert_eq!(
            links,
            [("acl", "todo.ttl.acl"), ("describedby", "todo.ttl.meta")]
        );
    }

    #[test]
    fn empty_location_falls_back_to_response_url() {
        let meta = ResourceMetadata::from_response(&response(201, &[("location", "")]));
        assert_eq!(meta.url(), "https://alice.example/notes/todo.ttl");
    }

    #[test]
    fn meta_relation_preferred_over_described_by() {
        let meta = ResourceMetadata::from_response(&response(
            200,
            &[(
                "link",
                r#"<d.ttl>; rel="describedBy", <m.ttl>; rel="meta""#,
            )],
        ));
        assert_eq!(meta.meta_link(), Some("m.ttl"));
    }

    #[test]
    fn allow_put_only() {
        let meta = ResourceMetadata::from_response(&response(200, &[("allow", "GET, HEAD, PUT")]));
        assert_eq!(
            meta.editable_via(),
            &BTreeSet::from([Capability::Put])
        );
    }

    #[test]
    fn allow_tokens_are_case_sensitive() {
        let meta = ResourceMetadata::from_response(&response(200, &[("allow", "put, post, delete")]));
        assert!(meta.editable_via().is_empty());
    }

    #[test]
    fn accept_patch_adds_patch_regardless_of_allow() {
        for allow in ["", "GET", "GET, PUT, POST, DELETE"] {
            let mut headers = vec![("accept-patch", "application/sparql-update")];
            if !allow.is_empty() {
                headers.push(("allow", allow));
            }
            let meta = ResourceMetadata::from_response(&response(200, &headers));
            assert!(meta.can(Capability::Patch), "allow = {allow:?}");
        }

        let meta = ResourceMetadata::from_response(&response(
            200,
            &[
                ("accept-patch", "text/n3, application/sparql-update"),
                ("allow", "OPTIONS, HEAD, GET, PATCH, POST, PUT, DELETE"),
            ],
        ));
        assert_eq!(
            meta.editable_via(),
            &BTreeSet::from([
                Capability::Patch,
                Capability::Put,
                Capability::Post,
                Capability::Delete
            ])
        );
    }

    #[test]
    fn other_patch_formats_are_not_patchable() {
        let meta = ResourceMetadata::from_response(&response(200, &[("accept-patch", "text/n3")]));
        assert!(!meta.can(Capability::Patch));
    }

    #[test]
    fn detects_containers() {
        let meta = ResourceMetadata::from_response(&response(
            200,
            &[(
                "link",
                r#"<http://www.w3.org/ns/ldp#BasicContainer>; rel="type""#,
            )],
        ));
        assert!(meta.is_container());

        let meta = ResourceMetadata::from_response(&response(
            200,
            &[("link", r#"<http://www.w3.org/ns/ldp#Resource>; rel="type""#)],
        ));
        assert!(!meta.is_container());
    }

    #[test]
    fn malformed_link_header_degrades_to_empty() {
        let meta = ResourceMetadata::from_response(&response(200, &[("link", "<<<;;; rel=")]));
        assert_eq!(meta.acl_link(), None);
        assert_eq!(meta.meta_link(), None);

        let mut map = HeaderMap::new();
        map.insert(LINK, HeaderValue::from_bytes(b"<\xff>; rel=\"acl\"").unwrap());
        let resp = RawResponse::new(
            StatusCode::OK,
            Url::parse("https://alice.example/").unwrap(),
            map,
        );
        assert_eq!(ResourceMetadata::from_response(&resp).acl_link(), None);
    }

    #[test]
    fn capability_tags() {
        let tags: Vec<_> = [
            Capability::Patch,
            Capability::Put,
            Capability::Post,
            Capability::Delete,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(tags, ["patch", "put", "post", "delete"]);
    }
}
