//! Deterministic, `Vary`-aware cache key construction.

use http::header::VARY;

use crate::request::Request;

/// Builds the cache key for `request`: the method, the full URL, then the
/// value of each request header named in the request's own `Vary` header,
/// in the order the names were given. A header name with no matching
/// request header (or an empty value) contributes nothing.
///
/// Each component is length-prefixed (`"{len}:{bytes}"`) rather than joined
/// with an unescaped separator, so two components can never be confused
/// for one another regardless of what bytes a header value contains. The
/// same algorithm is used by `get`, `set`, and `delete`.
pub fn cache_key(request: &Request) -> String {
    let mut key = String::from("cache_key=");
    push_component(&mut key, request.method.as_str());
    push_component(&mut key, request.url.as_str());
    if let Some(vary) = request.headers.get(VARY).and_then(|v| v.to_str().ok()) {
        for name in vary.split(',') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            if let Some(value) = request.headers.get(name).and_then(|v| v.to_str().ok()) {
                if !value.is_empty() {
                    push_component(&mut key, value);
                }
            }
        }
    }
    key
}

fn push_component(key: &mut String, component: &str) {
    key.push_str(&component.len().to_string());
    key.push(':');
    key.push_str(component);
}
