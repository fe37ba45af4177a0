//! Footer bar: key hints for the focused element and the copyright line.

use chrono::Datelike;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::MUTED_COLOR;

const TABLE_HINTS: &str = "q:Quit  r:Refresh  Tab:Filters  ↑↓:Select  o:Open  c:Copy  t:Token  ?:Help";

const FILTER_HINTS: &str = "Type to filter  Backspace:Delete  Ctrl+U:Clear  Tab:Next  Esc:Table";

/// Key hints for whatever currently receives keys.
#[must_use]
pub fn hints(app: &App) -> &'static str {
    if app.get_input_context().accepts_text_input() {
        FILTER_HINTS
    } else {
        TABLE_HINTS
    }
}

#[must_use]
pub fn copyright(year: i32) -> String {
    format!("© {year} Lobster Technical Test")
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let style = Style::default().fg(MUTED_COLOR);
    frame.render_widget(
        Paragraph::new(hints(app))
            .style(style)
            .alignment(Alignment::Left),
        area,
    );

    let notice = copyright(chrono::Local::now().year());
    let room = area.width as usize;
    if room >= hints(app).chars().count() + notice.chars().count() + 2 {
        frame.render_widget(
            Paragraph::new(notice)
                .style(style)
                .alignment(Alignment::Right),
            area,
        );
    }
}
