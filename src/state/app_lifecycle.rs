//! Application lifecycle: construction, the event loop and fetch dispatch.

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::client::TransferClient;
use crate::constants::{DEBOUNCE_DELAY, TICK_RATE};
use crate::domain::TransferFilter;
use crate::tui::Tui;
use crate::ui;

use super::{App, AppMessage, FetchState, QueryController, RequestId, StartupOptions, UiState};

impl App {
    /// Creates the application. Nothing is fetched until [`App::run`].
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(options: StartupOptions) -> Result<Self> {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let client = TransferClient::new(options.http)?;

        let mut query = QueryController::new(options.api, DEBOUNCE_DELAY);
        query.preset(TransferFilter::new(
            options.sender.unwrap_or_default(),
            options.recipient.unwrap_or_default(),
        ));

        Ok(Self {
            query,
            fetch: FetchState::new(),
            ui: UiState::new(),
            exit: false,
            animation_tick: 0,
            message_tx,
            message_rx,
            client,
        })
    }

    /// Runs the main application loop.
    ///
    /// The input poll timeout is the shorter of the next tick and the
    /// pending debounce deadline, so a debounced fetch goes out on time even
    /// when no key is pressed.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.fetch_now();
        terminal.draw(|frame| ui::render(self, frame))?;

        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();
            self.dispatch_due_fetch(Instant::now());

            let timeout = self.next_poll_timeout(last_tick, Instant::now());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key, Instant::now());
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.on_tick();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    /// Time until the next tick, cut short by a pending debounce deadline.
    pub(crate) fn next_poll_timeout(&self, last_tick: Instant, now: Instant) -> Duration {
        let until_tick = TICK_RATE.saturating_sub(now.saturating_duration_since(last_tick));
        match self.query.time_until_due(now) {
            Some(due) => until_tick.min(due),
            None => until_tick,
        }
    }

    pub(crate) fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        self.ui.tick_toast();
    }

    // ========================================================================
    // Fetch Dispatch
    // ========================================================================

    /// Fetch with the current filters, skipping the debounce.
    pub(crate) fn fetch_now(&mut self) -> RequestId {
        let filter = self.query.request_now();
        self.dispatch_fetch(&filter)
    }

    /// Send the debounced fetch if its quiet period is over.
    pub(crate) fn dispatch_due_fetch(&mut self, now: Instant) -> Option<RequestId> {
        let filter = self.query.poll_due(now)?;
        Some(self.dispatch_fetch(&filter))
    }

    fn dispatch_fetch(&mut self, filter: &TransferFilter) -> RequestId {
        let request = self.fetch.begin();

        let url = match self.query.transfers_url(filter) {
            Ok(url) => url,
            Err(err) => {
                self.fetch.complete(request, Err(err.to_string()));
                return request;
            }
        };

        tracing::debug!(request = request.get(), %url, "dispatching transfers fetch");

        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client
                .get_transfers(url)
                .await
                .map_err(|err| err.to_string());
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = message_tx.send(AppMessage::TransfersLoaded { request, result });
        });

        request
    }
}
