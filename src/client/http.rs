//! HTTP client wrapper shared by the API clients.

use reqwest::{Client, Url};
use std::time::Duration;

use crate::constants::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::domain::ExplorerError;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl HttpConfig {
    /// Create config with custom timeout
    #[must_use]
    pub const fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Create a new HTTP client with connection pooling.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::Transport` if the TLS backend cannot be set up.
    pub fn with_config(config: HttpConfig) -> Result<Self, ExplorerError> {
        let inner = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(config.timeout)
            .build()?;

        Ok(Self { inner })
    }

    /// Build a GET request with standard headers
    pub fn get(&self, url: Url) -> reqwest::RequestBuilder {
        self.inner.get(url).header("accept", "application/json")
    }
}

// ============================================================================
// Tests
// ============================================================================
