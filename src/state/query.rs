//! Query controller: filter ownership and fetch scheduling.
//!
//! Filter edits are lower-cased, stored, and scheduled through a
//! [`Debouncer`]. Startup and manual refresh bypass the debounce via
//! [`QueryController::request_now`].

use std::time::{Duration, Instant};

use reqwest::Url;

use super::debounce::Debouncer;
use crate::client::ApiConfig;
use crate::domain::{ExplorerError, FilterField, TransferFilter};

#[derive(Debug, Clone)]
pub struct QueryController {
    api: ApiConfig,
    filters: TransferFilter,
    debouncer: Debouncer<TransferFilter>,
}

impl QueryController {
    #[must_use]
    pub fn new(api: ApiConfig, debounce: Duration) -> Self {
        Self {
            api,
            filters: TransferFilter::default(),
            debouncer: Debouncer::new(debounce),
        }
    }

    #[must_use]
    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    /// The current (already lower-cased) filter pair.
    #[must_use]
    pub fn filters(&self) -> &TransferFilter {
        &self.filters
    }

    /// Store a new value for one filter and schedule a debounced fetch.
    ///
    /// Returns `false`, scheduling nothing, when the lower-cased value equals
    /// what is already stored.
    pub fn set_filter(&mut self, field: FilterField, value: &str, now: Instant) -> bool {
        let value = value.to_lowercase();
        if self.filters.get(field) == value {
            return false;
        }

        self.filters.set(field, value);
        self.debouncer.schedule(self.filters.clone(), now);
        true
    }

    /// Seed the filters without scheduling anything (startup flags).
    pub fn preset(&mut self, filter: TransferFilter) {
        self.filters = TransferFilter::new(
            filter.sender.to_lowercase(),
            filter.recipient.to_lowercase(),
        );
    }

    /// The undebounced fetch: cancels any pending one and returns the
    /// current pair to send right away.
    pub fn request_now(&mut self) -> TransferFilter {
        self.debouncer.cancel();
        self.filters.clone()
    }

    /// Yields the pending pair once its quiet period has elapsed.
    pub fn poll_due(&mut self, now: Instant) -> Option<TransferFilter> {
        self.debouncer.poll(now)
    }

    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }

    #[cfg(test)]
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// # Errors
    ///
    /// Returns `ExplorerError::Config` if the API base is unusable.
    pub fn transfers_url(&self, filter: &TransferFilter) -> Result<Url, ExplorerError> {
        self.api.transfers_url(filter)
    }
}

// ============================================================================
// Tests
// ============================================================================
