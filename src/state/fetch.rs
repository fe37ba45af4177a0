//! Fetch state machine for the transfers request.
//!
//! ```text
//! Idle ──begin──▶ Loading ──complete(Ok)──▶ Success
//!                    ▲    ──complete(Err)─▶ Failure
//!                    └──────── begin ◀───────┘
//! ```
//!
//! Each `begin()` hands out a new [`RequestId`]. A completion carrying any
//! other id is a stale response and is dropped, so a slow earlier request can
//! never overwrite the result of a later one.

use crate::domain::{TokenInfo, Transfer, TransferPage};

/// Monotonic tag identifying one fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Failure,
}

/// What the transfers panel should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchView<'a> {
    /// A request is running; `previous` are the rows from the last result.
    Loading { previous: &'a [Transfer] },
    Error(&'a str),
    /// Success with zero rows.
    Empty,
    Rows(&'a [Transfer]),
}

#[derive(Debug, Clone, Default)]
pub struct FetchState {
    phase: FetchPhase,
    error: Option<String>,
    transfers: Vec<Transfer>,
    token: TokenInfo,
    latest: RequestId,
}

impl FetchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Loading`. Clears the error, keeps the rows on screen.
    pub fn begin(&mut self) -> RequestId {
        self.latest = RequestId(self.latest.0 + 1);
        self.phase = FetchPhase::Loading;
        self.error = None;
        self.latest
    }

    /// Apply a finished request.
    ///
    /// Returns `false` (and changes nothing) when `request` is not the most
    /// recent one.
    pub fn complete(&mut self, request: RequestId, result: Result<TransferPage, String>) -> bool {
        if request != self.latest {
            tracing::debug!(
                stale = request.get(),
                latest = self.latest.get(),
                "dropping stale transfers response"
            );
            return false;
        }

        match result {
            Ok(page) => {
                if let Some(token) = page.token {
                    self.token = token;
                }
                self.transfers = page.transfers;
                self.error = None;
                self.phase = FetchPhase::Success;
            }
            Err(message) => {
                tracing::warn!(%message, "transfers fetch failed");
                self.transfers.clear();
                self.error = Some(message);
                self.phase = FetchPhase::Failure;
            }
        }
        true
    }

    #[must_use]
    pub const fn phase(&self) -> FetchPhase {
        self.phase
    }

    /// `Idle` counts as loading: the startup fetch goes out before the
    /// first frame.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, FetchPhase::Idle | FetchPhase::Loading)
    }

    #[cfg(test)]
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    #[must_use]
    pub const fn token(&self) -> &TokenInfo {
        &self.token
    }

    #[cfg(test)]
    #[must_use]
    pub const fn latest_request(&self) -> RequestId {
        self.latest
    }

    #[must_use]
    pub fn view(&self) -> FetchView<'_> {
        if self.is_loading() {
            return FetchView::Loading {
                previous: &self.transfers,
            };
        }
        if let Some(error) = &self.error {
            return FetchView::Error(error);
        }
        if self.transfers.is_empty() {
            FetchView::Empty
        } else {
            FetchView::Rows(&self.transfers)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
