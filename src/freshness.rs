//! The freshness evaluator: a fixed-precedence chain that classifies a
//! stored response as [`Freshness::Fresh`], [`Freshness::Stale`], or
//! [`Freshness::Transparent`].
//!
//! Expressed as an ordered slice of plain functions rather than a chain of
//! polymorphic nodes — each rule either returns a verdict or `None` ("I
//! don't apply, try the next rule"), and [`evaluate`] iterates the slice.
//! This keeps the precedence visible in one place instead of scattered
//! across virtual-dispatch implementations.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use http::HeaderMap;

use crate::headers::{self, CacheControl};

/// The cache's verdict on a stored response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// May be served without contacting the origin.
    Fresh,
    /// Must be revalidated (or refetched) before being served.
    Stale,
    /// This cache declines to decide; forward to the origin.
    Transparent,
}

type Rule = fn(&HeaderMap, &CacheControl, SystemTime) -> Option<Freshness>;

const CHAIN: &[Rule] =
    &[age_vs_max_age, max_age_vs_date, expires_rule, no_cache_rule];

/// Runs the fixed-precedence rule chain against a stored response's headers
/// and parsed `Cache-Control`, returning the first rule's verdict. Falls
/// back to [`Freshness::Transparent`] if no rule fires.
pub fn evaluate(
    headers: &HeaderMap,
    cache_control: &CacheControl,
    now: SystemTime,
) -> Freshness {
    for rule in CHAIN {
        if let Some(verdict) = rule(headers, cache_control, now) {
            return verdict;
        }
    }
    Freshness::Transparent
}

/// Age-vs-max-age: the tightest bound, measuring time already spent in
/// caches. Deliberately does not consult `Date` or the clock — it is pure
/// arithmetic on two already-parsed integers.
fn age_vs_max_age(
    headers: &HeaderMap,
    cache_control: &CacheControl,
    _now: SystemTime,
) -> Option<Freshness> {
    let max_age = cache_control.max_age().ok()?;
    let age = headers::age_from(headers).ok()?;
    if max_age - age > 0 {
        Some(Freshness::Fresh)
    } else {
        Some(Freshness::Stale)
    }
}

/// max-age-vs-Date: refines freshness using the origin's own `max-age` and
/// `Date`. A missing/unparsable `Date` is treated as unset, which is always
/// Stale (the same convention the one-rule-deeper `Expires` check uses for
/// a missing `Date`).
fn max_age_vs_date(
    headers: &HeaderMap,
    cache_control: &CacheControl,
    now: SystemTime,
) -> Option<Freshness> {
    let max_age = cache_control.max_age().ok()?;
    if max_age < 0 {
        return Some(Freshness::Stale);
    }
    if max_age == 0 {
        return Some(Freshness::Transparent);
    }
    let date = match headers::date_from(headers) {
        Ok(date) => date,
        Err(_) => return Some(Freshness::Stale),
    };
    let threshold = date + Duration::from_secs(max_age as u64);
    if now > threshold {
        Some(Freshness::Stale)
    } else {
        Some(Freshness::Fresh)
    }
}

/// Legacy `Expires` fallback. Only fires when `Expires` itself parses; a
/// missing `Date` defaults to the Unix epoch, matching the source's use of
/// a zero-value timestamp rather than treating the comparison as
/// inapplicable.
fn expires_rule(
    headers: &HeaderMap,
    _cache_control: &CacheControl,
    _now: SystemTime,
) -> Option<Freshness> {
    let expires = headers::expires_from(headers).ok()?;
    if expires == UNIX_EPOCH {
        return Some(Freshness::Transparent);
    }
    let date = headers::date_from(headers).unwrap_or(UNIX_EPOCH);
    if expires < date {
        Some(Freshness::Stale)
    } else {
        Some(Freshness::Fresh)
    }
}

/// `no-cache` is stored but must always be revalidated; the source never
/// wired this into its chain, so this crate adds it at the evaluator
/// boundary rather than leaving it silently ignored.
fn no_cache_rule(
    _headers: &HeaderMap,
    cache_control: &CacheControl,
    _now: SystemTime,
) -> Option<Freshness> {
    if cache_control.is_no_cache() {
        Some(Freshness::Transparent)
    } else {
        None
    }
}
