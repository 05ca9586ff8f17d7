//! A client-side HTTP caching layer implementing RFC 7234-style freshness
//! and revalidation semantics.
//!
//! The cache wraps an underlying [`Transport`] and, for each request,
//! looks up a stored response, decides whether it's fresh, stale, or
//! whether this cache declines to decide (`Transparent`, forwarded
//! unchanged), then either serves it, revalidates it with a conditional
//! request, or refetches it — storing the result back according to the
//! response's `Cache-Control`.
//!
//! ## Example
//!
//! ```ignore
//! use http_cache::{CachingTransport, InMemoryStore, SystemClock, Transport};
//!
//! struct MyTransport;
//! impl Transport for MyTransport {
//!     fn round_trip(&self, request: &http_cache::Request) -> http_cache::Result<http_cache::Response> {
//!         // speak the actual wire protocol here
//!         # unimplemented!()
//!     }
//! }
//!
//! let cache = CachingTransport::new(MyTransport, InMemoryStore::new(), SystemClock);
//! ```
//!
//! ## Collaborators
//!
//! Three things are constructor parameters, never globals:
//!
//! - **Transport** ([`Transport`]) — speaks the wire protocol to the
//!   origin.
//! - **Store** ([`ByteStore`], with [`InMemoryStore`] provided by default)
//!   — an opaque key→bytes map; eviction and size bounding are its
//!   responsibility, not the cache's.
//! - **Clock** ([`Clock`], with [`SystemClock`] and [`FakeClock`] provided)
//!   — abstracts "now" so freshness decisions are deterministic in tests.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod adapter;
mod clock;
mod error;
mod freshness;
mod headers;
mod key;
mod request;
mod response;
mod store;
mod transport;
mod validator;

pub use clock::{Clock, FakeClock, SystemClock};
pub use error::{CacheError, Result};
pub use freshness::Freshness;
pub use headers::{
    age_from, date_from, etag_from, expires_from, is_cache_hit, last_modified_from,
    parse_cache_control, with_cache_hit, with_if_modified_since, with_if_none_match,
    CacheControl,
};
pub use key::cache_key;
pub use request::Request;
pub use response::Response;
pub use store::{ByteStore, InMemoryStore};
pub use transport::{CachingTransport, Transport};
