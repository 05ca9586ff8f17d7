//! The response validator: a fixed-order chain of conditional-revalidation
//! handlers invoked only when the freshness evaluator returns
//! [`crate::freshness::Freshness::Stale`].
//!
//! Order: ETag validator → Last-Modified validator → unconditional
//! refetch. Like [`crate::freshness`], this is an ordered slice of plain
//! functions rather than polymorphic chain nodes. Each handler returns
//! `None` to delegate to the next, or `Some(result)` once it has produced
//! (or attempted) a round trip; the terminal refetch always returns
//! `Some`.

use http::HeaderMap;

use crate::error::Result;
use crate::headers;
use crate::request::Request;
use crate::response::Response;
use crate::transport::Transport;

type Handler<T> = fn(&T, &Request, &Response) -> Option<Result<Response>>;

/// Revalidates `cached` against the origin, following the ETag →
/// Last-Modified → unconditional-refetch precedence.
pub fn validate<T: Transport>(
    transport: &T,
    request: &Request,
    cached: &Response,
) -> Result<Response> {
    let chain: [Handler<T>; 3] =
        [etag_validator, last_modified_validator, terminal_refetch];
    for handler in chain {
        if let Some(result) = handler(transport, request, cached) {
            return result;
        }
    }
    unreachable!("terminal_refetch always returns Some")
}

fn etag_validator<T: Transport>(
    transport: &T,
    request: &Request,
    cached: &Response,
) -> Option<Result<Response>> {
    let etag = headers::etag_from(&cached.headers).ok()?;
    Some(revalidate_with(transport, request, cached, |headers| {
        headers::with_if_none_match(headers, &etag)
    }))
}

fn last_modified_validator<T: Transport>(
    transport: &T,
    request: &Request,
    cached: &Response,
) -> Option<Result<Response>> {
    let last_modified = headers::last_modified_from(&cached.headers).ok()?;
    Some(revalidate_with(transport, request, cached, |headers| {
        headers::with_if_modified_since(headers, last_modified)
    }))
}

/// The terminal revalidator: no precondition left to try, just round-trip
/// the original request unconditionally.
fn terminal_refetch<T: Transport>(
    transport: &T,
    request: &Request,
    _cached: &Response,
) -> Option<Result<Response>> {
    Some(transport.round_trip(request))
}

fn revalidate_with<T: Transport>(
    transport: &T,
    request: &Request,
    cached: &Response,
    add_conditional_header: impl FnOnce(&HeaderMap) -> Result<HeaderMap>,
) -> Result<Response> {
    let mut conditional = request.clone();
    conditional.headers = add_conditional_header(&request.headers)?;
    let response = transport.round_trip(&conditional)?;
    if response.status == 304 {
        // The 304 body carries no content; it is dropped here rather than
        // forwarded, and the cached body is returned in its place.
        let mut hit = cached.clone();
        hit.headers = headers::with_cache_hit(&hit.headers);
        Ok(hit)
    } else {
        Ok(response)
    }
}
