//! Remote glyph asset resolution.
//!
//! Maps a codepoint key to a URI via a `{emoji}` placeholder template and
//! fetches the raw PNG bytes with a single blocking GET. One attempt per
//! run: a failure (transport error, non-success status, empty payload) is
//! terminal and never retried.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::error::{Error, Result};

/// Default glyph source: the Apple 160px renders of the public emoji-data
/// catalog, keyed by lowercase hex codepoint.
pub const DEFAULT_URI_TEMPLATE: &str =
    "https://raw.githubusercontent.com/iamcal/emoji-data/master/img-apple-160/{emoji}.png";

/// Placeholder token replaced by the codepoint key.
pub const URI_PLACEHOLDER: &str = "{emoji}";

/// Default network timeout; the fetch fails fast rather than hanging.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches glyph images from a templated remote source.
///
/// The template is injected (rather than hard-coded at the call site) so
/// tests can substitute a local server for the public catalog.
pub struct AssetFetcher {
    template: String,
    client: Client,
}

impl AssetFetcher {
    /// Creates a fetcher for the given URI template.
    ///
    /// The timeout applies to the whole request so a dead remote surfaces
    /// as an error instead of an indefinite hang.
    pub fn new(template: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Validation(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            template: template.into(),
            client,
        })
    }

    /// Substitutes the codepoint key into the URI template.
    pub fn resolve_uri(&self, key: &str) -> String {
        self.template.replace(URI_PLACEHOLDER, key)
    }

    /// Fetches the raw glyph bytes for a codepoint key.
    ///
    /// Fails with [`Error::AssetNotFound`] on any transport error, any
    /// non-success status, or an empty response body.
    pub fn fetch(&self, key: &str) -> Result<Vec<u8>> {
        let uri = self.resolve_uri(key);
        debug!("fetching glyph from {uri}");

        let response = self
            .client
            .get(&uri)
            .send()
            .map_err(|e| Error::AssetNotFound(format!("{uri}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::AssetNotFound(format!("{uri}: HTTP {status}")));
        }

        let bytes = response
            .bytes()
            .map_err(|e| Error::AssetNotFound(format!("{uri}: {e}")))?;
        if bytes.is_empty() {
            return Err(Error::AssetNotFound(format!("{uri}: empty payload")));
        }

        Ok(bytes.to_vec())
    }
}
