//! Outbound actions on the selected transfer: browser and clipboard.

use super::{App, clipboard};
use crate::constants::TOAST_TICKS;
use crate::domain::Transfer;
use crate::widgets::{format_address, format_tx_link, token_url};

impl App {
    /// The transfer under the table cursor, if rows are showing.
    #[must_use]
    pub fn selected_transfer(&self) -> Option<&Transfer> {
        self.ui
            .selected
            .and_then(|index| self.fetch.transfers().get(index))
    }

    pub(crate) fn open_in_browser(&mut self) {
        let Some(transfer) = self.selected_transfer() else {
            self.ui.show_toast("[x] No transfer selected", TOAST_TICKS);
            return;
        };
        let link = format_tx_link(&transfer.tx_hash);
        self.open_url(&link.url);
    }

    pub(crate) fn open_token_page(&mut self) {
        self.open_url(&token_url());
    }

    fn open_url(&mut self, url: &str) {
        match open::that(url) {
            Ok(()) => {
                tracing::debug!(%url, "opened in browser");
                self.ui.show_toast("[+] Opened in browser", TOAST_TICKS);
            }
            Err(e) => {
                tracing::warn!(%url, error = %e, "failed to open browser");
                self.ui
                    .show_toast(format!("[x] Failed to open browser: {e}"), TOAST_TICKS);
            }
        }
    }

    pub(crate) fn copy_tx_hash(&mut self) {
        let Some(transfer) = self.selected_transfer() else {
            self.ui.show_toast("[x] No transfer selected", TOAST_TICKS);
            return;
        };
        let hash = transfer.tx_hash.clone();

        match clipboard::copy_text(&hash) {
            Ok(()) => {
                self.ui.show_toast(
                    format!("[+] Copied {}", format_address(&hash)),
                    TOAST_TICKS,
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                self.ui.show_toast(format!("[x] {e}"), TOAST_TICKS);
            }
        }
    }
}
