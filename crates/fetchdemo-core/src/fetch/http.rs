use async_trait::async_trait;

use crate::config::TransportOptions;
use crate::model::FetchResult;

use super::error::FetchError;
use super::{blocking, suspending, Fetcher};

/// Real HTTP(S) fetcher: libcurl for blocking calls, reqwest for suspending ones,
/// both configured from the same `TransportOptions`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    opts: TransportOptions,
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(opts: TransportOptions) -> Result<Self, reqwest::Error> {
        let client = suspending::build_client(&opts)?;
        Ok(Self { opts, client })
    }

    pub fn options(&self) -> &TransportOptions {
        &self.opts
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    fn fetch_blocking(&self, identifier: &str) -> Result<FetchResult, FetchError> {
        blocking::fetch_blocking(identifier, &self.opts)
    }

    async fn fetch(&self, identifier: &str) -> Result<FetchResult, FetchError> {
        suspending::fetch_suspending(&self.client, identifier).await
    }
}
