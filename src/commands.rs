//! Key events mapped to application commands.
//!
//! Mapping is a pure function of the key and the [`InputContext`], so the
//! bindings are testable without an `App`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::FilterField;

// ============================================================================
// Input Context
// ============================================================================

/// Which bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// A filter input has focus; printable keys are text.
    FilterInput(FilterField),
    /// Browsing the transfers table.
    Table,
    /// The help popup is open.
    HelpPopup,
}

impl InputContext {
    #[must_use]
    pub const fn accepts_text_input(&self) -> bool {
        matches!(self, Self::FilterInput(_))
    }
}

// ============================================================================
// App Command
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Quit,
    /// Fetch again right away with the current filters.
    Refresh,
    CycleFocus,
    CycleFocusBack,
    /// Jump straight into one of the filter inputs.
    FocusFilter(FilterField),
    TypeChar(char),
    Backspace,
    ClearFilter,
    /// Close the help popup or leave a filter input.
    Dismiss,
    MoveUp,
    MoveDown,
    OpenInBrowser,
    CopyTxHash,
    OpenToken,
    ToggleHelp,
    Noop,
}

// ============================================================================
// Key Mapping
// ============================================================================

/// Map a key event to a command. `Ctrl+C` quits from anywhere.
#[must_use]
pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return AppCommand::Quit;
    }

    match context {
        InputContext::FilterInput(_) => map_filter_keys(key),
        InputContext::Table => map_table_keys(key),
        InputContext::HelpPopup => map_help_keys(key),
    }
}

fn map_filter_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            AppCommand::ClearFilter
        }
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => AppCommand::Noop,
        KeyCode::Char(c) => AppCommand::TypeChar(c),
        KeyCode::Backspace => AppCommand::Backspace,
        KeyCode::Tab => AppCommand::CycleFocus,
        KeyCode::BackTab => AppCommand::CycleFocusBack,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Down => AppCommand::Dismiss,
        _ => AppCommand::Noop,
    }
}

fn map_table_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => AppCommand::Quit,
        KeyCode::Char('r') => AppCommand::Refresh,
        KeyCode::Char('?') => AppCommand::ToggleHelp,
        KeyCode::Char('s') | KeyCode::Char('/') => AppCommand::FocusFilter(FilterField::Sender),
        KeyCode::Char('R') => AppCommand::FocusFilter(FilterField::Recipient),
        KeyCode::Char('o') | KeyCode::Enter => AppCommand::OpenInBrowser,
        KeyCode::Char('c') => AppCommand::CopyTxHash,
        KeyCode::Char('t') => AppCommand::OpenToken,
        KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
        KeyCode::Tab => AppCommand::CycleFocus,
        KeyCode::BackTab => AppCommand::CycleFocusBack,
        _ => AppCommand::Noop,
    }
}

fn map_help_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter => {
            AppCommand::Dismiss
        }
        _ => AppCommand::Noop,
    }
}

// ============================================================================
// Tests
// ============================================================================
