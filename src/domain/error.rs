//! Error types for transfer explorer operations.
//!
//! Every failure the fetch boundary can see maps onto one of these variants.
//! The UI only ever keeps the rendered message, so the `Display` output of each
//! variant is the exact text shown to the user.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for fetching and decoding transfers.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Connection, DNS, TLS or timeout failure reported by the HTTP client.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Http {
        /// The numeric HTTP status code.
        status: u16,
    },

    /// The response body was not the expected JSON document.
    #[error("{message}")]
    Parse {
        /// The JSON parser's description of the failure.
        message: String,
    },

    /// The API base URL or another setting cannot be used.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ExplorerError {
    /// Create a new HTTP status error.
    #[must_use]
    pub const fn http(status: u16) -> Self {
        Self::Http { status }
    }

    /// Create a new parse error with the given message.
    ///
    /// # Arguments
    ///
    /// * `message` - Description of what failed to parse
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<serde_json::Error> for ExplorerError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
