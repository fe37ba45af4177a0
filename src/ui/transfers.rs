//! The transfers panel: loading banner, error, empty message or table.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, TableState, Wrap},
};

use crate::state::{App, FetchView, Focus};
use crate::theme::{ERROR_COLOR, MUTED_COLOR, WARNING_COLOR};
use crate::widgets::TransferTable;

use super::header::spinner_frame;
use super::helpers::create_border_block;

pub const PANEL_TITLE: &str = "LobsterToken Transfers";

pub const LOADING_TEXT: &str = "Loading transfers";

pub const EMPTY_TEXT: &str = "No transfers found. Try a different filter or check back later.";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.ui.focus == Focus::Table && !app.ui.show_help;
    let block = create_border_block(PANEL_TITLE, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.fetch.view() {
        FetchView::Loading { previous } => {
            let [banner, rest] =
                Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);
            let line = Line::from(vec![
                Span::styled(
                    format!("{} ", spinner_frame(app.animation_tick)),
                    Style::default().fg(WARNING_COLOR),
                ),
                Span::styled(
                    LOADING_TEXT,
                    Style::default()
                        .fg(WARNING_COLOR)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), banner);

            if !previous.is_empty() {
                render_table(frame, rest, app, previous, true);
            }
        }
        FetchView::Error(message) => {
            let text = Paragraph::new(format!("Error: {message}"))
                .style(Style::default().fg(ERROR_COLOR))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(text, centered_line(inner));
        }
        FetchView::Empty => {
            let text = Paragraph::new(EMPTY_TEXT)
                .style(Style::default().fg(MUTED_COLOR))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(text, centered_line(inner));
        }
        FetchView::Rows(rows) => {
            render_table(frame, inner, app, rows, false);
        }
    }
}

fn render_table(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    rows: &[crate::domain::Transfer],
    stale: bool,
) {
    let mut state = TableState::default().with_selected(app.ui.selected);
    let table = TransferTable::new(rows, app.fetch.token()).stale(stale);
    frame.render_stateful_widget(table, area, &mut state);
}

/// A band in the vertical middle of `area` for status text.
fn centered_line(area: Rect) -> Rect {
    let height = area.height.min(2);
    Rect::new(
        area.x,
        area.y + area.height.saturating_sub(height) / 2,
        area.width,
        height,
    )
}
