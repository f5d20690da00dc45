//! Query-string helpers for message listing requests and pagination links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filters are an open key/value set forwarded verbatim to the server, and
//! pagination links must keep whatever filters the current URL carries.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::collections::BTreeMap;

use url::form_urlencoded;

/// Arbitrary filter constraints passed through as query parameters.
pub type Filters = BTreeMap<String, String>;

/// Build the `/api/messages/filter` query string (without the leading `?`).
///
/// Order is `page`, then filters by key, then `channel_id` when non-empty.
/// A `page` entry inside `filters` is ignored in favor of the explicit page.
pub fn filter_query(channel_id: Option<&str>, page: u32, filters: &Filters) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("page", &page.to_string());
    for (key, value) in filters.iter().filter(|(key, _)| key.as_str() != "page") {
        query.append_pair(key, value);
    }
    if let Some(channel_id) = channel_id.filter(|c| !c.is_empty()) {
        query.append_pair("channel_id", channel_id);
    }
    query.finish()
}

/// Build a `?page=N...` link that keeps every parameter of `search` except `page`.
///
/// `search` is `window.location.search`, with or without its leading `?`.
pub fn page_link(search: &str, page: u32) -> String {
    let raw = search.strip_prefix('?').unwrap_or(search);
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("page", &page.to_string());
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        if key != "page" {
            query.append_pair(&key, &value);
        }
    }
    format!("?{}", query.finish())
}
