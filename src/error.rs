use miette::Diagnostic;
use thiserror::Error;

/// A `Result` typedef to use with the [`CacheError`] type.
pub type Result<T> = std::result::Result<T, CacheError>;

/// A generic "error" for the HTTP cache.
///
/// The header-parse variants (`InvalidMaxAge` through `EtagNotFound`) are
/// internal signals consumed by the freshness evaluator and response
/// validator as they fall through their rule chains; they never reach a
/// caller of [`crate::transport::CachingTransport`]. The remaining variants
/// wrap failures surfaced from the injected transport or from malformed
/// bytes read back out of the store.
#[derive(Error, Diagnostic, Debug)]
pub enum CacheError {
    /// The underlying transport failed to complete the round trip.
    #[error(transparent)]
    #[diagnostic(code(http_cache::transport))]
    Transport(#[from] anyhow::Error),
    /// Error building or reading an `http` request/response.
    #[error(transparent)]
    #[diagnostic(code(http_cache::http))]
    Http(#[from] http::Error),
    /// A header value was not valid UTF-8.
    #[error(transparent)]
    #[diagnostic(code(http_cache::header_to_str))]
    HeaderToStr(#[from] http::header::ToStrError),
    /// A header value could not be constructed.
    #[error(transparent)]
    #[diagnostic(code(http_cache::invalid_header_value))]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
    /// A header name could not be constructed.
    #[error(transparent)]
    #[diagnostic(code(http_cache::invalid_header_name))]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),
    /// I/O error surfaced by a store implementation.
    #[error(transparent)]
    #[diagnostic(code(http_cache::io))]
    Io(#[from] std::io::Error),
    /// Bytes read back from the store could not be parsed as an HTTP
    /// response.
    #[error("stored response is not a well-formed HTTP response")]
    #[diagnostic(code(http_cache::bad_status_line))]
    BadStatusLine,
    /// `Cache-Control: max-age` is present but not a valid integer.
    #[error("Cache-Control max-age directive is not a valid integer")]
    #[diagnostic(code(http_cache::invalid_max_age))]
    InvalidMaxAge,
    /// `Cache-Control` has no `max-age` directive.
    #[error("Cache-Control max-age directive is not present")]
    #[diagnostic(code(http_cache::max_age_not_found))]
    MaxAgeNotFound,
    /// `Age` is present but not a valid integer.
    #[error("Age header is not a valid integer")]
    #[diagnostic(code(http_cache::invalid_age))]
    InvalidAge,
    /// `Age` is not present.
    #[error("Age header is not present")]
    #[diagnostic(code(http_cache::age_not_found))]
    AgeNotFound,
    /// `Date` is present but not a valid HTTP date.
    #[error("Date header is not a valid HTTP date")]
    #[diagnostic(code(http_cache::invalid_response_date))]
    InvalidResponseDate,
    /// `Expires` is present but not a valid HTTP date.
    #[error("Expires header is not a valid HTTP date")]
    #[diagnostic(code(http_cache::invalid_expire_date))]
    InvalidExpireDate,
    /// `Last-Modified` is present but not a valid HTTP date.
    #[error("Last-Modified header is not a valid HTTP date")]
    #[diagnostic(code(http_cache::invalid_last_modified))]
    InvalidLastModified,
    /// `ETag` is not present (or empty after trimming).
    #[error("ETag header is not present")]
    #[diagnostic(code(http_cache::etag_not_found))]
    EtagNotFound,
}
