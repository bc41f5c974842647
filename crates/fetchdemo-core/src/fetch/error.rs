//! Fetch failure type and classification of transport errors into its kinds.

use std::fmt;
use thiserror::Error;

/// Boxed transport cause carried by a `FetchError`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// What went wrong with a fetch, at the granularity the workflow cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// DNS, connect, TLS and other transport-level failures.
    NetworkFailure,
    /// The transport gave up waiting.
    Timeout,
    /// Non-2xx status, malformed response, bad URL or redirect loop.
    ProtocolError,
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchErrorKind::NetworkFailure => write!(f, "network failure"),
            FetchErrorKind::Timeout => write!(f, "timeout"),
            FetchErrorKind::ProtocolError => write!(f, "protocol error"),
        }
    }
}

/// A failed fetch of one identifier. Never retried.
#[derive(Debug, Error)]
#[error("{identifier}: {kind}: {cause}")]
pub struct FetchError {
    identifier: String,
    kind: FetchErrorKind,
    #[source]
    cause: BoxError,
}

impl FetchError {
    pub fn new(identifier: impl Into<String>, kind: FetchErrorKind, cause: impl Into<BoxError>) -> Self {
        Self {
            identifier: identifier.into(),
            kind,
            cause: cause.into(),
        }
    }

    pub(crate) fn from_curl(identifier: &str, e: curl::Error) -> Self {
        Self::new(identifier, classify_curl_error(&e), e)
    }

    pub(crate) fn from_reqwest(identifier: &str, e: reqwest::Error) -> Self {
        Self::new(identifier, classify_reqwest_error(&e), e)
    }

    pub(crate) fn from_status(identifier: &str, code: u32) -> Self {
        Self::new(identifier, FetchErrorKind::ProtocolError, HttpStatus(code))
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn kind(&self) -> FetchErrorKind {
        self.kind
    }
}

/// Response completed with a non-2xx status.
#[derive(Debug, Error)]
#[error("HTTP {0}")]
pub struct HttpStatus(pub u32);

/// True for 2xx.
pub fn is_success_status(code: u32) -> bool {
    (200..300).contains(&code)
}

// curl-rust exposes no predicate for this one.
const CURLE_WEIRD_SERVER_REPLY: i32 = 8;

/// Classify a curl error.
pub fn classify_curl_error(e: &curl::Error) -> FetchErrorKind {
    if e.is_operation_timedout() {
        return FetchErrorKind::Timeout;
    }
    if e.is_url_malformed()
        || e.is_unsupported_protocol()
        || e.is_too_many_redirects()
        || e.is_got_nothing()
        || e.is_partial_file()
        || e.code() as i32 == CURLE_WEIRD_SERVER_REPLY
        || e.is_http2_error()
        || e.is_bad_content_encoding()
    {
        return FetchErrorKind::ProtocolError;
    }
    FetchErrorKind::NetworkFailure
}

/// Classify a reqwest error.
///
/// Malformed or truncated replies surface as request/body errors wrapping a
/// `hyper::Error`; they land in `ProtocolError`, matching the curl mapping of
/// the same replies (weird reply, got nothing, partial file).
pub fn classify_reqwest_error(e: &reqwest::Error) -> FetchErrorKind {
    if e.is_timeout() {
        return FetchErrorKind::Timeout;
    }
    if e.is_connect() {
        return FetchErrorKind::NetworkFailure;
    }
    if e.is_builder() || e.is_redirect() || e.is_status() || e.is_decode() || e.is_body() {
        return FetchErrorKind::ProtocolError;
    }
    if find_hyper_error(e).map_or(false, |h| h.is_parse() || h.is_incomplete_message()) {
        return FetchErrorKind::ProtocolError;
    }
    FetchErrorKind::NetworkFailure
}

fn find_hyper_error<'a>(e: &'a (dyn std::error::Error + 'static)) -> Option<&'a hyper::Error> {
    let mut source = e.source();
    while let Some(err) = source {
        if let Some(h) = err.downcast_ref::<hyper::Error>() {
            return Some(h);
        }
        source = err.source();
    }
    None
}
