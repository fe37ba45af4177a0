//! Transfers endpoint client.

use reqwest::Url;

use super::http::{HttpClient, HttpConfig};
use crate::domain::{ExplorerError, TransferPage};

/// Client for `GET /eth/transfers`.
///
/// Cheap to clone; each fetch task gets its own copy.
#[derive(Debug, Clone)]
pub struct TransferClient {
    http: HttpClient,
}

impl TransferClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: HttpConfig) -> Result<Self, ExplorerError> {
        Ok(Self {
            http: HttpClient::with_config(config)?,
        })
    }

    /// Fetch one page of transfers from a fully built URL.
    ///
    /// # Errors
    ///
    /// - `Transport` if the request cannot be sent or the body cannot be read
    /// - `Http` for any non-2xx status
    /// - `Parse` if the body is not a transfers document
    pub async fn get_transfers(&self, url: Url) -> Result<TransferPage, ExplorerError> {
        tracing::debug!(%url, "requesting transfers");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "transfers request rejected");
            return Err(ExplorerError::http(status.as_u16()));
        }

        let body = response.text().await?;
        let page: TransferPage = serde_json::from_str(&body)?;

        tracing::debug!(count = page.transfers.len(), "transfers decoded");
        Ok(page)
    }
}
