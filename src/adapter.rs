//! Bridges [`Request`]/[`Response`] to the byte store: computes the cache
//! key, and owns the wire serialization round trip. A failed
//! deserialization on `get` is treated as a miss rather than an error —
//! a corrupt or foreign entry should never fail a request, only cost a
//! cache hit.

use log::debug;

use crate::key::cache_key;
use crate::request::Request;
use crate::response::Response;
use crate::store::ByteStore;

/// Looks up the cached response for `request`, if any. Returns `None` on a
/// genuine miss or when the stored bytes fail to parse back into a
/// response.
pub fn get<S: ByteStore>(store: &S, request: &Request) -> Option<Response> {
    let key = cache_key(request);
    let bytes = store.get(&key)?;
    match Response::from_wire(&bytes) {
        Ok(response) => Some(response),
        Err(err) => {
            debug!("cache entry for {key} could not be deserialized, treating as miss: {err}");
            None
        }
    }
}

/// Stores `response` under `request`'s cache key. Swallows store errors;
/// caching is best-effort.
pub fn set<S: ByteStore>(store: &S, request: &Request, response: &Response) {
    let key = cache_key(request);
    store.set(&key, response.to_wire());
}

/// Removes any cached entry for `request`.
pub fn delete<S: ByteStore>(store: &S, request: &Request) {
    let key = cache_key(request);
    store.delete(&key);
    debug!("deleted cache entry for {key}");
}
