//! Sender and recipient inputs.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::domain::FilterField;
use crate::state::App;
use crate::theme::MUTED_COLOR;

use super::helpers::create_border_block;

const PLACEHOLDER: &str = "0x...";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let [sender, recipient] =
        Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(area);

    render_input(frame, sender, app, FilterField::Sender);
    render_input(frame, recipient, app, FilterField::Recipient);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App, field: FilterField) {
    let focused = app.ui.focus.filter() == Some(field) && !app.ui.show_help;
    let block = create_border_block(field.label(), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value = app.query.filters().get(field);
    let text = if value.is_empty() {
        Paragraph::new(PLACEHOLDER).style(Style::default().fg(MUTED_COLOR))
    } else {
        Paragraph::new(visible_tail(value, inner.width))
    };
    frame.render_widget(text, inner);

    if focused && inner.width > 0 && inner.height > 0 {
        let typed = visible_tail(value, inner.width).chars().count() as u16;
        let x = inner.x + typed.min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

/// The end of `value` that fits in `width` cells, leaving one for the cursor.
fn visible_tail(value: &str, width: u16) -> &str {
    let room = usize::from(width.saturating_sub(1));
    let len = value.chars().count();
    if len <= room {
        return value;
    }
    let skip = len - room;
    value
        .char_indices()
        .nth(skip)
        .map_or("", |(index, _)| &value[index..])
}
