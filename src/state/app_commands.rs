//! Command execution and input handling.

use crossterm::event::KeyEvent;
use std::time::Instant;

use super::{App, Focus};
use crate::commands::{AppCommand, InputContext, map_key};

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent, now: Instant) {
        let context = self.get_input_context();
        let command = map_key(key_event, &context);
        self.execute_command(command, now);
    }

    /// Determines which bindings are active.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        if self.ui.show_help {
            return InputContext::HelpPopup;
        }
        match self.ui.focus {
            Focus::Filter(field) => InputContext::FilterInput(field),
            Focus::Table => InputContext::Table,
        }
    }

    /// Executes a command. `now` timestamps filter edits for the debounce.
    pub(crate) fn execute_command(&mut self, command: AppCommand, now: Instant) {
        match command {
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::Refresh => {
                self.fetch_now();
            }
            AppCommand::ToggleHelp => {
                self.ui.toggle_help();
            }
            AppCommand::Dismiss => {
                self.handle_dismiss();
            }

            // === Focus ===
            AppCommand::CycleFocus => {
                self.ui.cycle_focus();
            }
            AppCommand::CycleFocusBack => {
                self.ui.cycle_focus_back();
            }
            AppCommand::FocusFilter(field) => {
                self.ui.focus_filter(field);
            }

            // === Filter Editing ===
            AppCommand::TypeChar(c) => {
                self.edit_focused_filter(now, |value| value.push(c));
            }
            AppCommand::Backspace => {
                self.edit_focused_filter(now, |value| {
                    value.pop();
                });
            }
            AppCommand::ClearFilter => {
                self.edit_focused_filter(now, String::clear);
            }

            // === Table ===
            AppCommand::MoveUp => {
                self.ui.move_up();
            }
            AppCommand::MoveDown => {
                self.ui.move_down(self.fetch.transfers().len());
            }
            AppCommand::OpenInBrowser => {
                self.open_in_browser();
            }
            AppCommand::CopyTxHash => {
                self.copy_tx_hash();
            }
            AppCommand::OpenToken => {
                self.open_token_page();
            }

            AppCommand::Noop => {}
        }
    }

    fn handle_dismiss(&mut self) {
        if self.ui.show_help {
            self.ui.show_help = false;
        } else if self.ui.focus.filter().is_some() {
            self.ui.focus_table();
        }
    }

    fn edit_focused_filter(&mut self, now: Instant, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.ui.focus.filter() else {
            return;
        };
        let mut value = self.query.filters().get(field).to_string();
        edit(&mut value);
        self.query.set_filter(field, &value, now);
    }
}
