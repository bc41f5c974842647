//! Blocking GET over libcurl's easy interface.
//!
//! Occupies the calling thread for the whole request. Call from
//! `spawn_blocking` if used from async code.

use std::time::Instant;

use crate::config::TransportOptions;
use crate::model::FetchResult;

use super::error::{is_success_status, FetchError};
use super::finish_fetch;

/// Performs one GET for `identifier` and returns the decoded body.
pub fn fetch_blocking(identifier: &str, opts: &TransportOptions) -> Result<FetchResult, FetchError> {
    let started = Instant::now();
    let curl_err = |e: curl::Error| FetchError::from_curl(identifier, e);

    let mut body: Vec<u8> = Vec::new();
    let mut easy = curl::easy::Easy::new();
    easy.url(identifier).map_err(curl_err)?;
    easy.get(true).map_err(curl_err)?;
    easy.follow_location(true).map_err(curl_err)?;
    easy.max_redirections(opts.max_redirections).map_err(curl_err)?;
    if let Some(agent) = opts.user_agent.as_deref() {
        easy.useragent(agent).map_err(curl_err)?;
    }
    // Unset timeouts leave libcurl's defaults in place.
    if let Some(t) = opts.connect_timeout {
        easy.connect_timeout(t).map_err(curl_err)?;
    }
    if let Some(t) = opts.request_timeout {
        easy.timeout(t).map_err(curl_err)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(curl_err)?;
        transfer.perform().map_err(curl_err)?;
    }

    let code = easy.response_code().map_err(curl_err)?;
    if !is_success_status(code) {
        return Err(FetchError::from_status(identifier, code));
    }

    tracing::debug!(
        identifier,
        bytes = body.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "blocking fetch finished"
    );
    finish_fetch(identifier, &body)
}
