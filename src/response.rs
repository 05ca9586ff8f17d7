//! The response type the cache core operates on, and its wire-compatible
//! serialization for the byte store.

use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};

use crate::error::{CacheError, Result};
use crate::headers::{self, CacheControl};

/// An HTTP response as seen by the cache: a status code, headers (including
/// multi-valued ones), and the full body read into memory.
#[derive(Debug, Clone)]
pub struct Response {
    /// The numeric status code.
    pub status: u16,
    /// The response headers.
    pub headers: HeaderMap,
    /// The full response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a response with an empty body and no headers.
    pub fn new(status: u16) -> Self {
        Self { status, headers: HeaderMap::new(), body: Vec::new() }
    }

    /// Parses this response's `Cache-Control` header.
    pub fn cache_control(&self) -> CacheControl {
        headers::parse_cache_control(&self.headers)
    }

    /// Serializes this response into a minimal HTTP/1.1 wire format:
    /// status line, headers, a blank line, then the full body. The format
    /// is deliberately standard so [`Response::from_wire`] can hand the
    /// header block to an ordinary HTTP/1.x parser rather than a bespoke
    /// one.
    pub fn to_wire(&self) -> Vec<u8> {
        let reason = StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("");
        let mut out = format!("HTTP/1.1 {} {}\r\n", self.status, reason).into_bytes();
        for (name, value) in self.headers.iter() {
            out.extend_from_slice(name.as_str().as_bytes());
            out.extend_from_slice(b": ");
            out.extend_from_slice(value.as_bytes());
            out.extend_from_slice(b"\r\n");
        }
        out.extend_from_slice(b"\r\n");
        out.extend_from_slice(&self.body);
        out
    }

    /// Reconstructs a response from bytes produced by [`Response::to_wire`].
    /// Deserialization failure (truncated or malformed wire bytes) is
    /// reported as [`CacheError::BadStatusLine`]; callers in this crate
    /// treat that as a cache miss rather than a hard error.
    pub fn from_wire(bytes: &[u8]) -> Result<Self> {
        let mut header_storage = [httparse::EMPTY_HEADER; 64];
        let mut parsed = httparse::Response::new(&mut header_storage);
        let body_offset = match parsed.parse(bytes) {
            Ok(httparse::Status::Complete(offset)) => offset,
            Ok(httparse::Status::Partial) | Err(_) => {
                return Err(CacheError::BadStatusLine)
            }
        };
        let status = parsed.code.ok_or(CacheError::BadStatusLine)?;
        let mut headers = HeaderMap::new();
        for raw in parsed.headers.iter() {
            if raw.name.is_empty() {
                continue;
            }
            let name = HeaderName::from_bytes(raw.name.as_bytes())?;
            let value = HeaderValue::from_bytes(raw.value)?;
            headers.append(name, value);
        }
        let body = bytes[body_offset..].to_vec();
        Ok(Self { status, headers, body })
    }
}
