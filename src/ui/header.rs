//! Header bar: logo on the left, backend and fetch status on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{App, FetchPhase};
use crate::theme::{ACCENT_COLOR, ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR, WARNING_COLOR};

use super::helpers::create_border_block;

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(create_border_block("", false), area);

    if area.height <= 2 {
        return;
    }

    let inner = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        1,
    );

    frame.render_widget(Paragraph::new(logo()), inner);

    if area.width > 50 {
        let status = Paragraph::new(status_line(app)).alignment(Alignment::Right);
        frame.render_widget(status, inner);
    }
}

fn logo() -> Line<'static> {
    Line::from(vec![
        Span::styled(
            "LOBSTER",
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        " | ".fg(MUTED_COLOR),
        "Technical Test".fg(PRIMARY_COLOR),
    ])
}

fn status_line(app: &App) -> Line<'static> {
    let mut spans = Vec::new();
    match app.fetch.phase() {
        FetchPhase::Idle | FetchPhase::Loading => spans.push(Span::styled(
            format!("{} ", spinner_frame(app.animation_tick)),
            Style::default().fg(WARNING_COLOR),
        )),
        FetchPhase::Failure => spans.push(Span::styled(
            "✗ ",
            Style::default().fg(ERROR_COLOR),
        )),
        FetchPhase::Success => {}
    }
    spans.push(Span::styled(
        format!("API {}", app.query.api().base_url()),
        Style::default().fg(MUTED_COLOR),
    ));
    Line::from(spans)
}

/// Braille spinner frame for a tick.
#[must_use]
pub fn spinner_frame(tick: u64) -> char {
    SPINNER[(tick % SPINNER.len() as u64) as usize]
}
