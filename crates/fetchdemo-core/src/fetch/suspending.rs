//! Suspending GET over reqwest's async client.

use std::time::Instant;

use crate::config::TransportOptions;
use crate::model::FetchResult;

use super::error::FetchError;
use super::finish_fetch;

/// Build the async client used for every suspending fetch.
pub fn build_client(opts: &TransportOptions) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(opts.max_redirections as usize));
    if let Some(agent) = opts.user_agent.as_deref() {
        builder = builder.user_agent(agent);
    }
    if let Some(t) = opts.connect_timeout {
        builder = builder.connect_timeout(t);
    }
    if let Some(t) = opts.request_timeout {
        builder = builder.timeout(t);
    }
    builder.build()
}

/// Performs one GET for `identifier`; the caller is suspended, not blocked, while waiting.
pub async fn fetch_suspending(
    client: &reqwest::Client,
    identifier: &str,
) -> Result<FetchResult, FetchError> {
    let started = Instant::now();

    let response = client
        .get(identifier)
        .send()
        .await
        .map_err(|e| FetchError::from_reqwest(identifier, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::from_status(identifier, u32::from(status.as_u16())));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::from_reqwest(identifier, e))?;

    tracing::debug!(
        identifier,
        bytes = body.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "suspending fetch finished"
    );
    finish_fetch(identifier, &body)
}
