// src/core/payload.rs
//
// Wire shapes. The request is fully typed; the response is whatever JSON
// the parser returns, read through a small contract: a list of link groups.
use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use super::{KeywordQuery, Locale};

/// Body of the POST: `{"keywords": [...], "lang": "en"|"es"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RequestPayload {
    pub keywords: KeywordQuery,
    pub lang: Locale,
}

impl RequestPayload {
    pub fn new(keywords: KeywordQuery, lang: Locale) -> Self {
        Self { keywords, lang }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// One labelled list of links. The label is the keyword when the service
/// groups its output by keyword, otherwise empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkGroup {
    pub label: String,
    pub links: Vec<String>,
}

/// A successful response body, kept verbatim next to the extracted groups.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultPayload {
    raw: Value,
    groups: Vec<LinkGroup>,
}

// Field names the service has used for a single link in a record.
const LINK_KEYS: [&str; 3] = ["link", "url", "href"];
// Field names for the list of links inside a per-keyword record.
const LIST_KEYS: [&str; 3] = ["links", "results", "urls"];

impl ResultPayload {
    pub fn from_value(raw: Value) -> Self {
        let groups = extract_groups(&raw);
        Self { raw, groups }
    }

    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        Ok(Self::from_value(serde_json::from_slice(bytes)?))
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn groups(&self) -> &[LinkGroup] {
        &self.groups
    }

    /// All links in display order, untruncated.
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().flat_map(|g| g.links.iter().map(String::as_str))
    }

    pub fn link_count(&self) -> usize {
        self.groups.iter().map(|g| g.links.len()).sum()
    }
}

fn extract_groups(raw: &Value) -> Vec<LinkGroup> {
    match raw {
        Value::Object(map) => {
            // A bare link record is one anonymous group, not one group per field.
            if record_link(raw).is_some() {
                return vec![LinkGroup { label: s!(), links: collect_links(raw) }];
            }
            map.iter()
                .map(|(k, v)| LinkGroup { label: k.clone(), links: collect_links(v) })
                .collect()
        }
        Value::Array(items) if !items.is_empty() && items.iter().all(is_keyword_record) => items
            .iter()
            .map(|item| {
                let label = item.get("keyword").and_then(Value::as_str).unwrap_or_default();
                let links = LIST_KEYS
                    .iter()
                    .find_map(|k| item.get(*k))
                    .map(collect_links)
                    .unwrap_or_default();
                LinkGroup { label: s!(label), links }
            })
            .collect(),
        Value::Null => Vec::new(),
        other => vec![LinkGroup { label: s!(), links: collect_links(other) }],
    }
}

fn is_keyword_record(v: &Value) -> bool {
    v.get("keyword").map(Value::is_string).unwrap_or(false)
}

fn record_link(v: &Value) -> Option<&str> {
    LINK_KEYS.iter().find_map(|k| v.get(*k).and_then(Value::as_str))
}

fn collect_links(v: &Value) -> Vec<String> {
    let mut out = Vec::new();
    push_links(v, &mut out);
    out
}

fn push_links(v: &Value, out: &mut Vec<String>) {
    match v {
        Value::String(s) => out.push(s.clone()),
        Value::Array(items) => items.iter().for_each(|item| push_links(item, out)),
        Value::Object(map) => match record_link(v) {
            Some(link) => out.push(s!(link)),
            None => map.values().for_each(|item| push_links(item, out)),
        },
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

/// Shorten a link for display: past `max_len` chars, keep the first
/// `max_len` and append `...`.
pub fn truncate_link(link: &str, max_len: usize) -> Cow<'_, str> {
    match link.char_indices().nth(max_len) {
        Some((cut, _)) => Cow::Owned(join!(&link[..cut], "...")),
        None => Cow::Borrowed(link),
    }
}
