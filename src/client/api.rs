//! Backend location and URL construction.

use reqwest::Url;

use crate::constants::{DEFAULT_API_BASE, TRANSFERS_PATH};
use crate::domain::{ExplorerError, TransferFilter};

/// Where the transfers backend lives.
///
/// Injected into the query controller at startup rather than read from
/// ambient state, so tests can point it at a local server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    /// Trailing slashes are dropped so paths join cleanly.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds `{base}/eth/transfers` with the non-empty filters as
    /// URL-encoded query parameters.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::Config` if the base is not an absolute URL.
    pub fn transfers_url(&self, filter: &TransferFilter) -> Result<Url, ExplorerError> {
        let raw = format!("{}{}", self.base_url, TRANSFERS_PATH);
        let mut url = Url::parse(&raw)
            .map_err(|e| ExplorerError::config(format!("API base '{}': {e}", self.base_url)))?;

        let pairs = filter.query_pairs();
        // query_pairs_mut() leaves a bare "?" behind even when nothing is appended
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }
}

// ============================================================================
// Tests
// ============================================================================
