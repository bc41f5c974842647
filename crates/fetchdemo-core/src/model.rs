//! The one record the workflow produces: a URL and the text downloaded from it.

use thiserror::Error;

/// A result was built for an empty identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("fetch result identifier is empty")]
pub struct EmptyIdentifier;

/// Text downloaded from one identifier. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    identifier: String,
    content: String,
}

impl FetchResult {
    /// Rejects an empty `identifier`, whichever `Fetcher` builds the result.
    pub fn new(
        identifier: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, EmptyIdentifier> {
        let identifier = identifier.into();
        if identifier.is_empty() {
            return Err(EmptyIdentifier);
        }
        Ok(Self {
            identifier,
            content: content.into(),
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length reported to the user: Unicode scalar values, not bytes.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}
