//! `Link` header parsing (RFC 8288), reduced to what LDP discovery needs:
//! a mapping from relation type to target URI.
//!
//! Relation types are compared case-insensitively, so `describedby` and
//! `describedBy` name the same relation. When a relation repeats, the last
//! link wins.

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, LINK};

/// Relation type → target URI, as advertised by one response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkRelations(BTreeMap<String, String>);

impl LinkRelations {
    /// Parse a single `Link` header value.
    ///
    /// Never fails: segments that are not of the form `<uri>; param=value; …`
    /// are skipped.
    pub fn parse(value: &str) -> Self {
        let mut rels = Self::default();
        rels.extend_from(value);
        rels
    }

    /// Parse every `Link` value in a header map, in order of appearance.
    ///
    /// Values that are not valid UTF-8 are ignored.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut rels = Self::default();
        for value in headers.get_all(LINK) {
            if let Ok(value) = value.to_str() {
                rels.extend_from(value);
            }
        }
        rels
    }

    /// Target URI for `rel`, if advertised.
    pub fn get(&self, rel: &str) -> Option<&str> {
        self.0.get(&rel.to_ascii_lowercase()).map(String::as_str)
    }

    /// Target of the first relation in `rels` that is present.
    pub fn first_of(&self, rels: &[&str]) -> Option<&str> {
        rels.iter().find_map(|rel| self.get(rel))
    }

    /// Number of distinct relation types.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no relation was advertised.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(relation, target)` pairs, ordered by relation.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn extend_from(&mut self, value: &str) {
        let mut rest = value;
        loop {
            rest = rest.trim_start_matches(|c: char| c == ',' || c.is_whitespace());
            if rest.is_empty() {
                break;
            }

            let Some(after_open) = rest.strip_prefix('<') else {
                rest = skip_link_value(rest);
                continue;
            };
            let Some(close) = after_open.find('>') else {
                break;
            };
            let target = after_open[..close].trim();
            let params_end = link_value_end(&after_open[close + 1..]);
            let params = &after_open[close + 1..close + 1 + params_end];
            rest = &after_open[close + 1 + params_end..];

            for param in split_outside_quotes(params, ';') {
                let Some((name, val)) = param.split_once('=') else {
                    continue;
                };
                if !name.trim().eq_ignore_ascii_case("rel") {
                    continue;
                }
                let val = val.trim().trim_matches(|c| c == '"' || c == '\'');
                for rel in val.split_whitespace() {
                    self.0.insert(rel.to_ascii_lowercase(), target.to_string());
                }
            }
        }
    }
}

/// Byte offset of the `,` that ends the current link-value, or the input length.
fn link_value_end(s: &str) -> usize {
    unquoted_positions(s, ',').next().unwrap_or(s.len())
}

fn skip_link_value(s: &str) -> &str {
    let end = link_value_end(s);
    &s[end..]
}

fn split_outside_quotes(s: &str, sep: char) -> impl Iterator<Item = &str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for i in unquoted_positions(s, sep) {
        parts.push(&s[start..i]);
        start = i + sep.len_utf8();
    }
    parts.push(&s[start..]);
    parts.into_iter().map(str::trim).filter(|p| !p.is_empty())
}

/// Byte offsets of `sep` outside quoted-strings. A backslash inside a
/// quoted-string escapes the next character.
fn unquoted_positions(s: &str, sep: char) -> impl Iterator<Item = usize> + '_ {
    let mut quoted = false;
    let mut escaped = false;
    s.char_indices().filter_map(move |(i, c)| {
        if escaped {
            escaped = false;
        } else if quoted && c == '\\' {
            escaped = true;
        } else if c == '"' {
            quoted = !quoted;
        } else if c == sep && !quoted {
            return Some(i);
        }
        None
    })
}
