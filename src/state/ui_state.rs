//! UI presentation state: focus, selection, help popup and toasts.

use crate::domain::FilterField;

// ============================================================================
// Focus
// ============================================================================

/// Which element receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Filter(FilterField),
    #[default]
    Table,
}

impl Focus {
    /// Sender → Recipient → Table → Sender.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Filter(FilterField::Sender) => Self::Filter(FilterField::Recipient),
            Self::Filter(FilterField::Recipient) => Self::Table,
            Self::Table => Self::Filter(FilterField::Sender),
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Filter(FilterField::Sender) => Self::Table,
            Self::Filter(FilterField::Recipient) => Self::Filter(FilterField::Sender),
            Self::Table => Self::Filter(FilterField::Recipient),
        }
    }

    #[must_use]
    pub const fn filter(self) -> Option<FilterField> {
        match self {
            Self::Filter(field) => Some(field),
            Self::Table => None,
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

#[derive(Debug, Default)]
pub struct UiState {
    pub focus: Focus,
    /// Selected row in the transfers table.
    pub selected: Option<usize>,
    pub show_help: bool,
    /// Toast message and remaining ticks.
    pub toast: Option<(String, u8)>,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn focus_filter(&mut self, field: FilterField) {
        self.focus = Focus::Filter(field);
    }

    pub fn focus_table(&mut self) {
        self.focus = Focus::Table;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn move_up(&mut self) {
        if let Some(index) = self.selected {
            self.selected = Some(index.saturating_sub(1));
        }
    }

    pub fn move_down(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) => (index + 1).min(row_count - 1),
            None => 0,
        });
    }

    /// Keep the selection inside `0..row_count`, selecting the first row
    /// when rows appear.
    pub fn clamp_selection(&mut self, row_count: usize) {
        self.selected = match (self.selected, row_count) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(index), count) => Some(index.min(count - 1)),
        };
    }

    /// Shows a toast notification (non-blocking overlay that auto-dismisses).
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            *ticks = ticks.saturating_sub(1);
            if *ticks == 0 {
                self.toast = None;
                return true;
            }
        }
        false
    }
}

// ============================================================================
// Tests
// ============================================================================
