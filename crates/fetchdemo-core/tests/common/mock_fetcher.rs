//! Deterministic in-memory fetcher: per-identifier content length, latency and failure.
//!
//! Blocking calls sleep the thread; suspending calls sleep the task. Every
//! attempt and every completed fetch is recorded so tests can check which
//! identifiers were tried and which ran to completion.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use fetchdemo_core::{FetchError, FetchErrorKind, FetchResult, Fetcher};

#[derive(Debug, Clone)]
struct MockPage {
    char_len: usize,
    latency: Duration,
    failure: Option<FetchErrorKind>,
    panics: bool,
}

#[derive(Debug, Default)]
pub struct MockFetcher {
    pages: HashMap<String, MockPage>,
    attempts: Mutex<Vec<String>>,
    completed: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Successful page of `char_len` characters after `latency_ms`.
    pub fn page(mut self, identifier: &str, char_len: usize, latency_ms: u64) -> Self {
        self.pages.insert(
            identifier.to_string(),
            MockPage {
                char_len,
                latency: Duration::from_millis(latency_ms),
                failure: None,
                panics: false,
            },
        );
        self
    }

    /// Page that fails with `kind` after `latency_ms`.
    pub fn failing(mut self, identifier: &str, kind: FetchErrorKind, latency_ms: u64) -> Self {
        self.pages.insert(
            identifier.to_string(),
            MockPage {
                char_len: 0,
                latency: Duration::from_millis(latency_ms),
                failure: Some(kind),
                panics: false,
            },
        );
        self
    }

    /// Page whose fetch panics after `latency_ms`, as a buggy fetcher would.
    pub fn panicking(mut self, identifier: &str, latency_ms: u64) -> Self {
        self.pages.insert(
            identifier.to_string(),
            MockPage {
                char_len: 0,
                latency: Duration::from_millis(latency_ms),
                failure: None,
                panics: true,
            },
        );
        self
    }

    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn completed(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }

    fn lookup(&self, identifier: &str) -> Option<MockPage> {
        self.attempts.lock().unwrap().push(identifier.to_string());
        self.pages.get(identifier).cloned()
    }

    fn respond(&self, identifier: &str, page: Option<MockPage>) -> Result<FetchResult, FetchError> {
        self.completed.lock().unwrap().push(identifier.to_string());
        let page = page.ok_or_else(|| {
            FetchError::new(identifier, FetchErrorKind::NetworkFailure, "unknown host")
        })?;
        if page.panics {
            panic!("fetcher bug while fetching {}", identifier);
        }
        if let Some(kind) = page.failure {
            return Err(FetchError::new(identifier, kind, "simulated failure"));
        }
        // Two bytes per character so byte length and character count differ.
        Ok(FetchResult::new(identifier, "é".repeat(page.char_len))
            .expect("mock identifiers are non-empty"))
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    fn fetch_blocking(&self, identifier: &str) -> Result<FetchResult, FetchError> {
        let page = self.lookup(identifier);
        if let Some(p) = &page {
            std::thread::sleep(p.latency);
        }
        self.respond(identifier, page)
    }

    async fn fetch(&self, identifier: &str) -> Result<FetchResult, FetchError> {
        let page = self.lookup(identifier);
        if let Some(p) = &page {
            tokio::time::sleep(p.latency).await;
        }
        self.respond(identifier, page)
    }
}
