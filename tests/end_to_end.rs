//! End-to-end scenarios driving [`CachingTransport`] purely through its
//! public API: a pre-populated [`InMemoryStore`], a canned [`MockTransport`],
//! and a [`FakeClock`] standing in for the origin, the wire, and wall-clock
//! time respectively.

mod common;

use std::str::FromStr;
use std::time::{Duration, UNIX_EPOCH};

use common::{header_map, init_logging, MockTransport};
use http_cache::{
    cache_key, is_cache_hit, ByteStore, CachingTransport, FakeClock, InMemoryStore, Request,
    Response, Transport,
};
use url::Url;

fn get(path: &str) -> Request {
    Request::get(Url::from_str(path).unwrap())
}

fn seed(store: &InMemoryStore, request: &Request, response: &Response) {
    store.set(&cache_key(request), response.to_wire());
}

#[test]
fn fresh_response_is_served_without_contacting_the_origin() {
    init_logging();
    let request = get("https://example.com/a");
    let date = httpdate::fmt_http_date(UNIX_EPOCH);
    let mut cached = Response::new(200);
    cached.headers = header_map(&[("cache-control", "max-age=120"), ("date", &date)]);
    cached.body = b"cached body".to_vec();

    let store = InMemoryStore::new();
    seed(&store, &request, &cached);

    let transport = MockTransport::new(vec![]);
    let clock = FakeClock::new(UNIX_EPOCH + Duration::from_secs(10));
    let caching = CachingTransport::new(&transport, store, clock);

    let result = caching.round_trip(&request).unwrap();

    assert_eq!(result.status, 200);
    assert_eq!(result.body, b"cached body");
    assert!(is_cache_hit(&result.headers));
    assert_eq!(transport.call_count(), 0, "a fresh hit must never reach the origin");
}

#[test]
fn stale_response_revalidated_with_last_modified_returns_304() {
    init_logging();
    let request = get("https://example.com/a");
    let old_date = httpdate::fmt_http_date(UNIX_EPOCH);
    let mut cached = Response::new(200);
    cached.headers = header_map(&[
        ("cache-control", "max-age=60"),
        ("date", &old_date),
        ("last-modified", "Sun, 06 Nov 1994 08:49:37 GMT"),
    ]);
    cached.body = b"still the same content".to_vec();

    let store = InMemoryStore::new();
    seed(&store, &request, &cached);

    let transport = MockTransport::new(vec![Response::new(304)]);
    let clock = FakeClock::new(UNIX_EPOCH + Duration::from_secs(1000));
    let caching = CachingTransport::new(&transport, store, clock);

    let result = caching.round_trip(&request).unwrap();

    assert_eq!(result.body, b"still the same content");
    assert!(is_cache_hit(&result.headers));
    assert_eq!(transport.call_count(), 1);
    let sent = &transport.calls.lock().unwrap()[0];
    assert!(sent.headers.get("if-modified-since").is_some());
}

#[test]
fn stale_response_revalidated_with_etag_returns_304() {
    init_logging();
    let request = get("https://example.com/a");
    let old_date = httpdate::fmt_http_date(UNIX_EPOCH);
    let mut cached = Response::new(200);
    cached.headers =
        header_map(&[("cache-control", "max-age=60"), ("date", &old_date), ("etag", r#""v1""#)]);
    cached.body = b"still the same content".to_vec();

    let store = InMemoryStore::new();
    seed(&store, &request, &cached);

    let transport = MockTransport::new(vec![Response::new(304)]);
    let clock = FakeClock::new(UNIX_EPOCH + Duration::from_secs(1000));
    let caching = CachingTransport::new(&transport, store, clock);

    let result = caching.round_trip(&request).unwrap();

    assert_eq!(result.body, b"still the same content");
    assert!(is_cache_hit(&result.headers));
    let sent = &transport.calls.lock().unwrap()[0];
    assert_eq!(sent.headers.get("if-none-match").unwrap(), r#""v1""#);
}

#[test]
fn stale_response_revalidated_with_etag_returns_changed_content() {
    init_logging();
    let request = get("https://example.com/a");
    let old_date = httpdate::fmt_http_date(UNIX_EPOCH);
    let mut cached = Response::new(200);
    cached.headers =
        header_map(&[("cache-control", "max-age=60"), ("date", &old_date), ("etag", r#""v1""#)]);
    cached.body = b"old content".to_vec();

    let mut changed = Response::new(200);
    changed.headers = header_map(&[("etag", r#""v2""#), ("cache-control", "max-age=60")]);
    changed.body = b"new content".to_vec();

    let store = InMemoryStore::new();
    seed(&store, &request, &cached);

    let transport = MockTransport::new(vec![changed]);
    let clock = FakeClock::new(UNIX_EPOCH + Duration::from_secs(1000));
    let caching = CachingTransport::new(&transport, store, clock);

    let result = caching.round_trip(&request).unwrap();

    assert_eq!(result.status, 200);
    assert_eq!(result.body, b"new content");
    assert!(!is_cache_hit(&result.headers));
}

#[test]
fn no_store_on_the_stale_path_deletes_the_entry() {
    init_logging();
    let request = get("https://example.com/a");
    let old_date = httpdate::fmt_http_date(UNIX_EPOCH);
    let mut cached = Response::new(200);
    cached.headers = header_map(&[
        ("cache-control", "no-store, max-age=60"),
        ("date", &old_date),
        ("etag", r#""v1""#),
    ]);
    cached.body = b"old".to_vec();

    let mut next = Response::new(200);
    next.headers = header_map(&[("cache-control", "no-store")]);
    next.body = b"new".to_vec();

    let store = InMemoryStore::new();
    seed(&store, &request, &cached);

    let transport = MockTransport::new(vec![Response::new(304), next]);
    let clock = FakeClock::new(UNIX_EPOCH + Duration::from_secs(1000));
    let caching = CachingTransport::new(&transport, store, clock);

    let first = caching.round_trip(&request).unwrap();
    assert_eq!(first.body, b"old");
    assert!(is_cache_hit(&first.headers));

    // The entry was deleted despite the 304, so the same request misses again.
    let second = caching.round_trip(&request).unwrap();
    assert_eq!(second.body, b"new");
    assert!(!is_cache_hit(&second.headers));
    assert_eq!(transport.call_count(), 2);
}

#[test]
fn cache_key_determinism_with_vary_accept_and_accept_language() {
    init_logging();
    let vary_request = |accept_language: &str| {
        let mut request = get("https://example.com/a");
        request.headers = header_map(&[
            ("vary", "accept, accept-language"),
            ("accept", "application/json"),
            ("accept-language", accept_language),
        ]);
        request
    };

    let mut en_response = Response::new(200);
    en_response.headers = header_map(&[("cache-control", "max-age=300")]);
    en_response.body = b"en-US content".to_vec();

    let mut fr_response = Response::new(200);
    fr_response.headers = header_map(&[("cache-control", "max-age=300")]);
    fr_response.body = b"fr-FR content".to_vec();

    let store = InMemoryStore::new();
    let transport = MockTransport::new(vec![en_response, fr_response]);
    let clock = FakeClock::new(UNIX_EPOCH);
    let caching = CachingTransport::new(&transport, store, clock);

    let first = caching.round_trip(&vary_request("en-US")).unwrap();
    assert_eq!(first.body, b"en-US content");
    assert_eq!(transport.call_count(), 1);

    // Same Vary-selected header value: same cache key, served from cache.
    let second = caching.round_trip(&vary_request("en-US")).unwrap();
    assert_eq!(second.body, b"en-US content");
    assert!(is_cache_hit(&second.headers));
    assert_eq!(transport.call_count(), 1);

    // Different Vary-selected header value: different cache key, origin hit again.
    let third = caching.round_trip(&vary_request("fr-FR")).unwrap();
    assert_eq!(third.body, b"fr-FR content");
    assert_eq!(transport.call_count(), 2);
}
