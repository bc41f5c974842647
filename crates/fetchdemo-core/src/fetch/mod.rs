//! Fetching one identifier's text content.
//!
//! Two invocation modes with identical results: a blocking call over libcurl
//! (occupies the calling thread) and a suspending call over reqwest (yields the
//! task while waiting on the network). Both decode the body through
//! `decode_body` so the same response yields the same content.

mod blocking;
mod error;
mod http;
mod suspending;

use async_trait::async_trait;

use crate::model::FetchResult;

pub use error::{
    classify_curl_error, classify_reqwest_error, is_success_status, BoxError, FetchError,
    FetchErrorKind, HttpStatus,
};
pub use http::HttpFetcher;

/// Retrieves the text behind an identifier. One request per call, never retried.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch on the calling thread, returning only when the transfer is done.
    fn fetch_blocking(&self, identifier: &str) -> Result<FetchResult, FetchError>;

    /// Fetch without holding a worker thread while waiting on I/O.
    async fn fetch(&self, identifier: &str) -> Result<FetchResult, FetchError>;
}

/// Response body as text: UTF-8 with invalid sequences replaced by U+FFFD.
pub fn decode_body(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Decode a 2xx body into the result both modes return.
pub(crate) fn finish_fetch(identifier: &str, body: &[u8]) -> Result<FetchResult, FetchError> {
    FetchResult::new(identifier, decode_body(body))
        .map_err(|e| FetchError::new(identifier, FetchErrorKind::ProtocolError, e))
}
