//! Screen layout calculations.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the header bar in terminal rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the filter inputs row.
pub const FILTER_BAR_HEIGHT: u16 = 3;

/// Height of the footer line.
pub const FOOTER_HEIGHT: u16 = 1;

/// Top-level screen areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub filters: Rect,
    pub content: Rect,
    pub footer: Rect,
}

#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(FILTER_BAR_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        filters: chunks[1],
        content: chunks[2],
        footer: chunks[3],
    }
}

/// Calculate a centered popup area within a parent area, keeping a
/// two-cell margin.
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}
