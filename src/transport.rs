//! The transport abstraction and the caching middleware that wraps it.

use log::debug;

use crate::adapter;
use crate::clock::Clock;
use crate::error::Result;
use crate::freshness::{self, Freshness};
use crate::headers;
use crate::request::Request;
use crate::response::Response;
use crate::store::ByteStore;
use crate::validator;

/// Speaks the actual wire protocol to an origin. This is the collaborator
/// the cache wraps; implementations are expected to be synchronous and
/// blocking, the same way `http.RoundTripper` or `ureq::Agent` are — the
/// cache spawns nothing and simply calls through.
pub trait Transport {
    /// Sends `request` to the origin and returns its response.
    fn round_trip(&self, request: &Request) -> Result<Response>;
}

/// A [`Transport`] that transparently caches responses according to
/// RFC 7234-style freshness and revalidation rules.
///
/// Constructed from its three collaborators — the underlying transport,
/// the byte store, and the clock — with no hidden global state. Install it
/// in place of the underlying transport so the surrounding application
/// still sees an ordinary [`Transport`].
pub struct CachingTransport<T, S, C> {
    transport: T,
    store: S,
    clock: C,
}

impl<T, S, C> CachingTransport<T, S, C>
where
    T: Transport,
    S: ByteStore,
    C: Clock,
{
    /// Wraps `transport` with a cache backed by `store`, using `clock` for
    /// freshness decisions.
    pub fn new(transport: T, store: S, clock: C) -> Self {
        Self { transport, store, clock }
    }

    fn fetch_and_maybe_store(&self, request: &Request) -> Result<Response> {
        let response = self.transport.round_trip(request)?;
        let cache_control = response.cache_control();
        if cache_control.is_no_store() {
            debug!("not storing response for {}: no-store", request.url);
            return Ok(response);
        }
        adapter::set(&self.store, request, &response);
        Ok(response)
    }

    fn handle_hit(&self, request: &Request, cached: Response) -> Result<Response> {
        let cache_control = cached.cache_control();
        let freshness = freshness::evaluate(&cached.headers, &cache_control, self.clock.now());
        debug!("freshness for {} is {freshness:?}", request.url);
        match freshness {
            Freshness::Fresh => {
                let mut hit = cached;
                hit.headers = headers::with_cache_hit(&hit.headers);
                Ok(hit)
            }
            Freshness::Stale => {
                let validated = validator::validate(&self.transport, request, &cached)?;
                if cache_control.is_no_store() {
                    adapter::delete(&self.store, request);
                    return Ok(validated);
                }
                if headers::is_cache_hit(&validated.headers) {
                    return Ok(validated);
                }
                adapter::set(&self.store, request, &validated);
                Ok(validated)
            }
            Freshness::Transparent => self.transport.round_trip(request),
        }
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn round_trip(&self, request: &Request) -> Result<Response> {
        (**self).round_trip(request)
    }
}

impl<T, S, C> Transport for CachingTransport<T, S, C>
where
    T: Transport,
    S: ByteStore,
    C: Clock,
{
    fn round_trip(&self, request: &Request) -> Result<Response> {
        match adapter::get(&self.store, request) {
            None => {
                debug!("cache miss for {} {}", request.method, request.url);
                self.fetch_and_maybe_store(request)
            }
            Some(cached) => {
                debug!("cache hit for {} {}", request.method, request.url);
                self.handle_hit(request, cached)
            }
        }
    }
}
