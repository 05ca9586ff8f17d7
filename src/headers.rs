//! Typed extractors and mutators over [`HeaderMap`]. Extractors fail
//! explicitly (absent vs. malformed are both reported, never silently
//! coerced to a default) so the freshness and validator chains can tell a
//! "rule doesn't apply" fall-through from a "value present" match.

use std::collections::HashMap;
use std::time::SystemTime;

use http::header::{AGE, CACHE_CONTROL, DATE, ETAG, EXPIRES, IF_MODIFIED_SINCE, IF_NONE_MATCH, LAST_MODIFIED};
use http::{HeaderMap, HeaderName, HeaderValue};

use crate::error::{CacheError, Result};

/// The header this crate sets on a response served (fully or after a `304`)
/// from the cache.
pub const X_CACHE: &str = "x-cache";

/// A parsed `Cache-Control` directive set. Directives accumulate across all
/// `Cache-Control` header instances on a response, with later instances
/// overriding earlier ones of the same name.
#[derive(Debug, Clone, Default)]
pub struct CacheControl {
    directives: HashMap<String, Option<String>>,
}

impl CacheControl {
    /// The `max-age` directive's value in seconds.
    pub fn max_age(&self) -> Result<i64> {
        match self.directives.get("max-age") {
            None => Err(CacheError::MaxAgeNotFound),
            Some(None) => Err(CacheError::InvalidMaxAge),
            Some(Some(raw)) => {
                raw.trim().parse::<i64>().map_err(|_| CacheError::InvalidMaxAge)
            }
        }
    }

    /// Whether the `no-store` flag is present.
    pub fn is_no_store(&self) -> bool {
        self.directives.contains_key("no-store")
    }

    /// Whether the `no-cache` flag is present.
    pub fn is_no_cache(&self) -> bool {
        self.directives.contains_key("no-cache")
    }

    /// Whether the `must-revalidate` flag is present.
    pub fn is_must_revalidate(&self) -> bool {
        self.directives.contains_key("must-revalidate")
    }

    /// Whether the `private` flag is present.
    pub fn is_private(&self) -> bool {
        self.directives.contains_key("private")
    }

    /// Whether the `public` flag is present.
    pub fn is_public(&self) -> bool {
        self.directives.contains_key("public")
    }
}

/// Scans every `Cache-Control` header instance and accumulates its
/// directives, last instance wins on a duplicate name.
pub fn parse_cache_control(headers: &HeaderMap) -> CacheControl {
    let mut directives = HashMap::new();
    for value in headers.get_all(CACHE_CONTROL) {
        let Ok(value) = value.to_str() else { continue };
        for token in value.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            match token.split_once('=') {
                Some((name, val)) => {
                    let name = name.trim().to_ascii_lowercase();
                    let val = val.trim().trim_matches('"').to_string();
                    directives.insert(name, Some(val));
                }
                None => {
                    directives.insert(token.to_ascii_lowercase(), None);
                }
            }
        }
    }
    CacheControl { directives }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Parses the `Age` header. Missing, empty, or non-numeric all yield
/// [`CacheError::AgeNotFound`] / [`CacheError::InvalidAge`].
pub fn age_from(headers: &HeaderMap) -> Result<i64> {
    let raw = header_str(headers, &AGE).ok_or(CacheError::AgeNotFound)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CacheError::AgeNotFound);
    }
    trimmed.parse::<i64>().map_err(|_| CacheError::InvalidAge)
}

fn parse_http_date(raw: &str) -> Option<SystemTime> {
    httpdate::parse_http_date(raw.trim()).ok()
}

/// Parses the `Expires` header (IMF-fixdate, RFC 850, or asctime).
pub fn expires_from(headers: &HeaderMap) -> Result<SystemTime> {
    let raw = header_str(headers, &EXPIRES).ok_or(CacheError::InvalidExpireDate)?;
    parse_http_date(raw).ok_or(CacheError::InvalidExpireDate)
}

/// Parses the `Date` header (IMF-fixdate, RFC 850, or asctime).
pub fn date_from(headers: &HeaderMap) -> Result<SystemTime> {
    let raw = header_str(headers, &DATE).ok_or(CacheError::InvalidResponseDate)?;
    parse_http_date(raw).ok_or(CacheError::InvalidResponseDate)
}

/// Parses the `Last-Modified` header (IMF-fixdate, RFC 850, or asctime).
pub fn last_modified_from(headers: &HeaderMap) -> Result<SystemTime> {
    let raw = header_str(headers, &LAST_MODIFIED).ok_or(CacheError::InvalidLastModified)?;
    parse_http_date(raw).ok_or(CacheError::InvalidLastModified)
}

/// Parses the `ETag` header. Trimmed; empty after trimming is absent.
pub fn etag_from(headers: &HeaderMap) -> Result<String> {
    let raw = header_str(headers, &ETAG).ok_or(CacheError::EtagNotFound)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(CacheError::EtagNotFound)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Returns a clone of `headers` with `If-Modified-Since` set to `time` in
/// IMF-fixdate format. Never mutates `headers`.
pub fn with_if_modified_since(headers: &HeaderMap, time: SystemTime) -> Result<HeaderMap> {
    let mut cloned = headers.clone();
    let value = httpdate::fmt_http_date(time);
    cloned.insert(IF_MODIFIED_SINCE, HeaderValue::from_str(&value)?);
    Ok(cloned)
}

/// Returns a clone of `headers` with `If-None-Match` set to `etag`
/// verbatim. Never mutates `headers`.
pub fn with_if_none_match(headers: &HeaderMap, etag: &str) -> Result<HeaderMap> {
    let mut cloned = headers.clone();
    cloned.insert(IF_NONE_MATCH, HeaderValue::from_str(etag)?);
    Ok(cloned)
}

/// Returns a clone of `headers` with `X-Cache: HIT` set. Never mutates
/// `headers`.
pub fn with_cache_hit(headers: &HeaderMap) -> HeaderMap {
    let mut cloned = headers.clone();
    cloned.insert(
        HeaderName::from_static(X_CACHE),
        HeaderValue::from_static("HIT"),
    );
    cloned
}

/// Whether `headers` carries the `X-Cache: HIT` marker this crate sets.
pub fn is_cache_hit(headers: &HeaderMap) -> bool {
    headers
        .get(X_CACHE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("HIT"))
        .unwrap_or(false)
}
