//! Applying results posted by fetch tasks.

use super::{App, AppMessage};

impl App {
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    pub(crate) fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::TransfersLoaded { request, result } => {
                if self.fetch.complete(request, result) {
                    self.ui.clamp_selection(self.fetch.transfers().len());
                }
            }
        }
    }
}
