//! The request type the cache core operates on.

use http::{HeaderMap, Method};
use url::Url;

/// A request as seen by the cache: just enough to derive a cache key, check
/// `Vary`, and hand back to a [`crate::transport::Transport`] for the
/// origin round trip.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method.
    pub method: Method,
    /// The full request URL, including query string.
    pub url: Url,
    /// The request headers, including any `Vary`-referenced headers the
    /// cache key builder will read.
    pub headers: HeaderMap,
}

impl Request {
    /// Creates a request with no headers set.
    pub fn new(method: Method, url: Url) -> Self {
        Self { method, url, headers: HeaderMap::new() }
    }

    /// Creates a `GET` request for `url`.
    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }
}
