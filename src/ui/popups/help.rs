//! Help popup listing the keybindings. Opened with `?`, closed by Esc/q/?.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::ACCENT_COLOR;
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Transfers",
        &[
            ("↑ / k", "Previous transfer"),
            ("↓ / j", "Next transfer"),
            ("o / Enter", "Open transaction on Etherscan"),
            ("c", "Copy transaction hash"),
            ("t", "Open LobsterToken on Etherscan"),
            ("r", "Refresh now"),
            ("q / Esc", "Quit"),
        ],
    ),
    (
        "Filters",
        &[
            ("Tab", "Sender → Recipient → Table"),
            ("s / R", "Jump to sender / recipient"),
            ("Backspace", "Delete character"),
            ("Ctrl+U", "Clear filter"),
            ("Esc", "Back to table"),
        ],
    ),
];

pub fn render(frame: &mut Frame, area: Rect) {
    let lines = help_lines();
    let height = lines.len() as u16 + 2;
    let popup_area = centered_popup_area(area, 56, height);

    frame.render_widget(Clear, popup_area);

    let block = create_popup_block("Help (? to close)");
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, (section, bindings)) in HELP_SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(Span::styled(
            *section,
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, description) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("{key:<12}"), Style::default().fg(ACCENT_COLOR)),
                Span::raw(*description),
            ]));
        }
    }
    lines
}
